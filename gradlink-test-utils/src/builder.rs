//! Declarative test builder.
//!
//! The builder queues table creation and user fixtures, all of which are executed
//! during the final `build()` call.

use entity::sea_orm_active_enums::UserType;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    users: Vec<(String, UserType)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables. Tables not added are missing from
    /// the database, which is how tests provoke database errors.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use entity::prelude::*;
    /// use gradlink_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), gradlink_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Project)
    ///     .with_table(CollaborationRequest)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Add every GradLink table to the test database.
    pub fn with_all_tables(self) -> Self {
        use entity::prelude::*;

        self.with_table(User)
            .with_table(Student)
            .with_table(Alumni)
            .with_table(Project)
            .with_table(CollaborationRequest)
            .with_table(Job)
            .with_table(JobApplication)
            .with_table(Event)
            .with_table(EventRegistration)
            .with_table(Mentorship)
            .with_table(MentorshipRequest)
            .with_table(RecommendationRequest)
    }

    /// Insert a registered user during `build()`.
    ///
    /// Requires the `users` table to be added to the builder.
    pub fn with_user(mut self, user_id: &str, user_type: UserType) -> Self {
        self.users.push((user_id.to_string(), user_type));
        self
    }

    /// Build the test context, creating all tables then inserting all fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Database ready for the test
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;
        context.with_tables(self.tables).await?;

        for (user_id, user_type) in self.users {
            context.user().insert_user(&user_id, user_type).await?;
        }

        Ok(context)
    }
}
