//! Student identity records.

use chrono::Utc;
use entity::sea_orm_active_enums::VerificationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Fields of a student identity record supplied at verification time
pub struct NewStudent {
    /// External identity of the submitting user
    pub user_id: String,
    /// Name as on university records
    pub full_name: String,
    /// University issued email address
    pub official_email: String,
    /// University student ID
    pub student_id: String,
    /// Academic department, e.g. `CSE`
    pub department: String,
    /// Year the student enrolled
    pub batch_year: String,
}

/// Repository for the `students` table
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert a student identity record with the provided status
    ///
    /// `verified_at` is set to the current time when the status is `verified`.
    pub async fn create(
        &self,
        student: NewStudent,
        status: VerificationStatus,
    ) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Student::insert(entity::student::ActiveModel {
            user_id: ActiveValue::Set(student.user_id),
            full_name: ActiveValue::Set(student.full_name),
            official_email: ActiveValue::Set(student.official_email),
            student_id: ActiveValue::Set(student.student_id),
            department: ActiveValue::Set(student.department),
            batch_year: ActiveValue::Set(student.batch_year),
            status: ActiveValue::Set(status),
            verified_at: ActiveValue::Set((status == VerificationStatus::Verified).then_some(now)),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Find a record matching any of the user ID, university student ID or official email
    pub async fn find_existing(
        &self,
        user_id: &str,
        student_id: &str,
        official_email: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(
                Condition::any()
                    .add(entity::student::Column::UserId.eq(user_id))
                    .add(entity::student::Column::StudentId.eq(student_id))
                    .add(entity::student::Column::OfficialEmail.eq(official_email)),
            )
            .one(self.db)
            .await
    }

    /// Find the student record of a user
    pub async fn get_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// List student records newest first, optionally restricted to one status
    pub async fn list(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<entity::student::Model>, DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(status) = status {
            query = query.filter(entity::student::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::student::Column::CreatedAt)
            .order_by_desc(entity::student::Column::Id)
            .all(self.db)
            .await
    }

    /// Set the verification status of the record belonging to `user_id`
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated record
    /// - `Ok(None)`: The user has no student record
    pub async fn update_status(
        &self,
        user_id: &str,
        status: VerificationStatus,
    ) -> Result<Option<entity::student::Model>, DbErr> {
        let student = match self.get_by_user_id(user_id).await? {
            Some(student) => student,
            None => return Ok(None),
        };

        let mut student_am = student.into_active_model();
        student_am.status = ActiveValue::Set(status);
        student_am.verified_at = ActiveValue::Set(
            (status == VerificationStatus::Verified).then(|| Utc::now().naive_utc()),
        );

        let student = student_am.update(self.db).await?;

        Ok(Some(student))
    }
}
