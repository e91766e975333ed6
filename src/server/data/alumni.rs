//! Alumni identity records.

use chrono::Utc;
use entity::sea_orm_active_enums::VerificationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Fields of an alumni identity record supplied at verification time
pub struct NewAlumni {
    /// External identity of the submitting user
    pub user_id: String,
    /// Name as on university records
    pub full_name: String,
    /// University issued email address
    pub official_email: String,
    /// University student ID kept after graduation
    pub student_id: String,
    /// Academic department, e.g. `CSE`
    pub department: String,
    /// Year of graduation
    pub graduation_year: String,
    /// Current employer, if any
    pub company: Option<String>,
}

/// Repository for the `alumni` table
pub struct AlumniRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AlumniRepository<'a, C> {
    /// Creates a new instance of [`AlumniRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert an alumni record with the given initial status
    pub async fn create(
        &self,
        alumni: NewAlumni,
        status: VerificationStatus,
    ) -> Result<entity::alumni::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::Alumni::insert(entity::alumni::ActiveModel {
            user_id: ActiveValue::Set(alumni.user_id),
            full_name: ActiveValue::Set(alumni.full_name),
            official_email: ActiveValue::Set(alumni.official_email),
            student_id: ActiveValue::Set(alumni.student_id),
            department: ActiveValue::Set(alumni.department),
            graduation_year: ActiveValue::Set(alumni.graduation_year),
            company: ActiveValue::Set(alumni.company),
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
    ) -> Result<Option<entity::alumni::Model>, DbErr> {
        entity::prelude::Alumni::find()
            .filter(
                Condition::any()
                    .add(entity::alumni::Column::UserId.eq(user_id))
                    .add(entity::alumni::Column::StudentId.eq(student_id))
                    .add(entity::alumni::Column::OfficialEmail.eq(official_email)),
            )
            .one(self.db)
            .await
    }

    /// Find the alumni record of a user
    pub async fn get_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::alumni::Model>, DbErr> {
        entity::prelude::Alumni::find()
            .filter(entity::alumni::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// List alumni records, newest first, optionally filtered by status
    pub async fn list(
        &self,
        status: Option<VerificationStatus>,
    ) -> Result<Vec<entity::alumni::Model>, DbErr> {
        let mut query = entity::prelude::Alumni::find();

        if let Some(status) = status {
            query = query.filter(entity::alumni::Column::Status.eq(status));
        }

        query
            .order_by_desc(entity::alumni::Column::CreatedAt)
            .order_by_desc(entity::alumni::Column::Id)
            .all(self.db)
            .await
    }

    /// Set the verification status of a user's record
    ///
    /// Returns `None` if the user has no alumni record.
    pub async fn update_status(
        &self,
        user_id: &str,
        status: VerificationStatus,
    ) -> Result<Option<entity::alumni::Model>, DbErr> {
        let alumni = match self.get_by_user_id(user_id).await? {
            Some(alumni) => alumni,
            None => return Ok(None),
        };

        let mut alumni_am = alumni.into_active_model();
        alumni_am.status = ActiveValue::Set(status);
        alumni_am.verified_at = ActiveValue::Set(
            (status == VerificationStatus::Verified).then(|| Utc::now().naive_utc()),
        );

        let alumni = alumni_am.update(self.db).await?;

        Ok(Some(alumni))
    }
}
