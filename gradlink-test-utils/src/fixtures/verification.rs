use chrono::Utc;
use entity::sea_orm_active_enums::VerificationStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn verification(&self) -> VerificationFixtures<'_> {
        VerificationFixtures { context: self }
    }
}

pub struct VerificationFixtures<'a> {
    context: &'a TestContext,
}

fn verified_at(status: VerificationStatus) -> Option<chrono::NaiveDateTime> {
    match status {
        VerificationStatus::Verified => Some(Utc::now().naive_utc()),
        _ => None,
    }
}

impl<'a> VerificationFixtures<'a> {
    /// Insert a student identity record with the official email `<student_id>@g.bracu.ac.bd`
    pub async fn insert_student(
        &self,
        user_id: &str,
        student_id: &str,
        status: VerificationStatus,
    ) -> Result<entity::student::Model, TestError> {
        Ok(
            entity::prelude::Student::insert(entity::student::ActiveModel {
                user_id: ActiveValue::Set(user_id.to_string()),
                full_name: ActiveValue::Set("Test Student".to_string()),
                official_email: ActiveValue::Set(format!("{}@g.bracu.ac.bd", student_id)),
                student_id: ActiveValue::Set(student_id.to_string()),
                department: ActiveValue::Set("CSE".to_string()),
                batch_year: ActiveValue::Set("2022".to_string()),
                status: ActiveValue::Set(status),
                verified_at: ActiveValue::Set(verified_at(status)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }

    /// Insert an alumni identity record with the official email `<student_id>@g.bracu.ac.bd`
    pub async fn insert_alumni(
        &self,
        user_id: &str,
        student_id: &str,
        status: VerificationStatus,
    ) -> Result<entity::alumni::Model, TestError> {
        Ok(
            entity::prelude::Alumni::insert(entity::alumni::ActiveModel {
                user_id: ActiveValue::Set(user_id.to_string()),
                full_name: ActiveValue::Set("Test Alumni".to_string()),
                official_email: ActiveValue::Set(format!("{}@g.bracu.ac.bd", student_id)),
                student_id: ActiveValue::Set(student_id.to_string()),
                department: ActiveValue::Set("CSE".to_string()),
                graduation_year: ActiveValue::Set("2018".to_string()),
                company: ActiveValue::Set(Some("Acme".to_string())),
                status: ActiveValue::Set(status),
                verified_at: ActiveValue::Set(verified_at(status)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
