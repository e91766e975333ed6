//! Tests for VerificationService.

use entity::sea_orm_active_enums::{UserType, VerificationStatus};
use gradlink::{
    model::verification::VerifyUserDto,
    server::{
        error::{resource::ResourceError, validation::ValidationError, Error},
        service::verification::VerificationService,
    },
};
use gradlink_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

fn student_payload() -> VerifyUserDto {
    VerifyUserDto {
        user_id: "u1".to_string(),
        user_type: "student".to_string(),
        official_email: "a@g.bracu.ac.bd".to_string(),
        student_id: "20101234".to_string(),
        department: "CSE".to_string(),
        full_name: "A B".to_string(),
        batch_year: Some("2022".to_string()),
        graduation_year: None,
        company: None,
    }
}

fn alumni_payload() -> VerifyUserDto {
    VerifyUserDto {
        user_id: "u2".to_string(),
        user_type: "alumni".to_string(),
        official_email: "c@g.bracu.ac.bd".to_string(),
        student_id: "16101234".to_string(),
        department: "EEE".to_string(),
        full_name: "C D".to_string(),
        batch_year: None,
        graduation_year: Some("2020".to_string()),
        company: Some("Acme".to_string()),
    }
}

mod verify_user {
    use super::*;

    /// Expect a verified student record to be inserted
    #[tokio::test]
    async fn auto_verifies_student() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.verify_user(student_payload()).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert!(response.success);
        assert_eq!(response.auto_verified, Some(true));

        let student = entity::prelude::Student::find().one(&test.db).await?;
        assert!(matches!(student, Some(ref s) if s.status == VerificationStatus::Verified));

        Ok(())
    }

    /// Expect alumni submissions to land in the alumni table
    #[tokio::test]
    async fn auto_verifies_alumni() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.verify_user(alumni_payload()).await;

        assert!(matches!(result, Ok(ref r) if r.success));
        assert_eq!(entity::prelude::Alumni::find().count(&test.db).await?, 1);
        assert_eq!(entity::prelude::Student::find().count(&test.db).await?, 0);

        Ok(())
    }

    /// Expect a refusal without inserting when the student ID is already used
    #[tokio::test]
    async fn refuses_duplicate_student_id() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.verification()
            .insert_student("someone-else", "20101234", VerificationStatus::Pending)
            .await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.verify_user(student_payload()).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert!(!response.success);
        assert_eq!(response.status, Some(VerificationStatus::Pending));
        assert_eq!(
            response.message,
            "A verification record already exists for this user"
        );
        assert_eq!(entity::prelude::Student::find().count(&test.db).await?, 1);

        Ok(())
    }

    /// Expect "already verified" when submitting the same payload twice
    #[tokio::test]
    async fn refuses_second_submission() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let verification_service = VerificationService::new(&test.db);
        verification_service.verify_user(student_payload()).await.unwrap();
        let result = verification_service.verify_user(student_payload()).await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert!(!response.success);
        assert_eq!(response.status, Some(VerificationStatus::Verified));
        assert_eq!(response.message, "This user is already verified");

        Ok(())
    }

    /// Expect InvalidUserType for admin submissions
    #[tokio::test]
    async fn fails_for_admin() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let mut payload = student_payload();
        payload.user_type = "admin".to_string();

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.verify_user(payload).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::InvalidUserType(_)))
        ));

        Ok(())
    }

    /// Expect MissingField when a student omits the batch year
    #[tokio::test]
    async fn fails_without_batch_year() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let mut payload = student_payload();
        payload.batch_year = None;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.verify_user(payload).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MissingField("batchYear")))
        ));

        Ok(())
    }

    /// Expect MissingField when a required field is blank
    #[tokio::test]
    async fn fails_for_blank_official_email() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let mut payload = alumni_payload();
        payload.official_email = " ".to_string();

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.verify_user(payload).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::MissingField("officialEmail")))
        ));

        Ok(())
    }
}

mod get_status {
    use super::*;

    /// Expect the status of an alumni record
    #[tokio::test]
    async fn returns_alumni_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.verification()
            .insert_alumni("u2", "16101234", VerificationStatus::Rejected)
            .await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.get_status("u2").await;

        assert!(result.is_ok());
        let status = result.unwrap();
        assert_eq!(status.user_type, UserType::Alumni);
        assert_eq!(status.status, VerificationStatus::Rejected);
        assert!(status.verified_at.is_none());

        Ok(())
    }

    /// Expect NotFound when the user has no record in either table
    #[tokio::test]
    async fn fails_for_unverified_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.get_status("u1").await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }
}

mod list {
    use super::*;

    /// Expect only records of the requested type and status
    #[tokio::test]
    async fn filters_by_type_and_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.verification()
            .insert_student("u1", "1", VerificationStatus::Pending)
            .await?;
        test.verification()
            .insert_student("u2", "2", VerificationStatus::Verified)
            .await?;
        test.verification()
            .insert_alumni("u3", "3", VerificationStatus::Pending)
            .await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.list("student", Some("pending")).await;

        assert!(result.is_ok());
        let records = result.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "u1");
        assert_eq!(records[0].batch_year.as_deref(), Some("2022"));

        Ok(())
    }

    /// Expect InvalidStatus for an unknown status filter
    #[tokio::test]
    async fn fails_for_invalid_status_filter() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service.list("alumni", Some("approved")).await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::InvalidStatus(_)))
        ));

        Ok(())
    }
}

mod set_status {
    use super::*;

    /// Expect a pending record to become verified with a timestamp
    #[tokio::test]
    async fn verifies_pending_record() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.verification()
            .insert_student("u1", "1", VerificationStatus::Pending)
            .await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service
            .set_status("student", "u1", "verified")
            .await;

        assert!(result.is_ok());
        let record = result.unwrap();
        assert_eq!(record.status, VerificationStatus::Verified);
        assert!(record.verified_at.is_some());

        Ok(())
    }

    /// Expect InvalidStatus and an unchanged record for an unknown status
    #[tokio::test]
    async fn fails_for_invalid_status() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.verification()
            .insert_student("u1", "1", VerificationStatus::Pending)
            .await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service
            .set_status("student", "u1", "approved")
            .await;

        assert!(matches!(
            result,
            Err(Error::ValidationError(ValidationError::InvalidStatus(_)))
        ));
        let status = verification_service.get_status("u1").await.unwrap();
        assert_eq!(status.status, VerificationStatus::Pending);

        Ok(())
    }

    /// Expect NotFound when the user has no record of that type
    #[tokio::test]
    async fn fails_for_wrong_user_type() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;
        test.verification()
            .insert_student("u1", "1", VerificationStatus::Pending)
            .await?;

        let verification_service = VerificationService::new(&test.db);
        let result = verification_service
            .set_status("alumni", "u1", "verified")
            .await;

        assert!(matches!(
            result,
            Err(Error::ResourceError(ResourceError::NotFound { .. }))
        ));

        Ok(())
    }
}
