//! Identity verification of students and alumni.
//!
//! Submissions are verified automatically unless a record already exists with the same
//! user ID, university student ID or official email in the table matching the user
//! type. Admins may later flip any record between pending, verified and rejected.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::{UserType, VerificationStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::verification::{
        VerificationRecordDto, VerificationStatusDto, VerifyUserDto, VerifyUserResponseDto,
    },
    server::{
        data::{
            alumni::{AlumniRepository, NewAlumni},
            student::{NewStudent, StudentRepository},
        },
        error::{resource::ResourceError, Error},
        util::validation::{parse_member_type, parse_status, require_non_empty, require_some},
    },
};

static VERIFIED_MESSAGE: &str = "User verified successfully";
static ALREADY_VERIFIED_MESSAGE: &str = "This user is already verified";
static RECORD_EXISTS_MESSAGE: &str = "A verification record already exists for this user";

/// Identity verification of students and alumni
pub struct VerificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VerificationService<'a> {
    /// Creates a new instance of [`VerificationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submit and automatically verify an identity record
    ///
    /// # Returns
    /// - `Ok(VerifyUserResponseDto)` with `success: true`: A verified record was inserted
    /// - `Ok(VerifyUserResponseDto)` with `success: false`: A matching record already
    ///   exists, its status is returned and nothing is inserted
    /// - `Err(Error::ValidationError)`: Unknown user type or a required field is blank
    /// - `Err(Error::DbErr)`: Database error
    pub async fn verify_user(&self, payload: VerifyUserDto) -> Result<VerifyUserResponseDto, Error> {
        let user_type = parse_member_type(&payload.user_type)?;
        require_non_empty("userId", &payload.user_id)?;
        require_non_empty("officialEmail", &payload.official_email)?;
        require_non_empty("studentId", &payload.student_id)?;
        require_non_empty("department", &payload.department)?;
        require_non_empty("fullName", &payload.full_name)?;
        let year = match user_type {
            UserType::Student => require_some("batchYear", payload.batch_year.as_deref())?,
            _ => require_some("graduationYear", payload.graduation_year.as_deref())?,
        }
        .to_string();

        let existing_status = match user_type {
            UserType::Student => StudentRepository::new(self.db)
                .find_existing(
                    &payload.user_id,
                    &payload.student_id,
                    &payload.official_email,
                )
                .await?
                .map(|student| student.status),
            _ => AlumniRepository::new(self.db)
                .find_existing(
                    &payload.user_id,
                    &payload.student_id,
                    &payload.official_email,
                )
                .await?
                .map(|alumni| alumni.status),
        };

        if let Some(status) = existing_status {
            tracing::debug!(
                "Refused verification of {} as a record already exists with status {:?}",
                payload.user_id,
                status
            );

            let message = match status {
                VerificationStatus::Verified => ALREADY_VERIFIED_MESSAGE,
                _ => RECORD_EXISTS_MESSAGE,
            };

            return Ok(VerifyUserResponseDto {
                success: false,
                auto_verified: None,
                status: Some(status),
                message: message.to_string(),
            });
        }

        match user_type {
            UserType::Student => {
                let student = NewStudent {
                    batch_year: year,
                    user_id: payload.user_id,
                    full_name: payload.full_name,
                    official_email: payload.official_email,
                    student_id: payload.student_id,
                    department: payload.department,
                };

                StudentRepository::new(self.db)
                    .create(student, VerificationStatus::Verified)
                    .await?;
            }
            _ => {
                let alumni = NewAlumni {
                    graduation_year: year,
                    user_id: payload.user_id,
                    full_name: payload.full_name,
                    official_email: payload.official_email,
                    student_id: payload.student_id,
                    department: payload.department,
                    company: payload.company,
                };

                AlumniRepository::new(self.db)
                    .create(alumni, VerificationStatus::Verified)
                    .await?;
            }
        }

        tracing::info!("Verified new {:?} identity record", user_type);

        Ok(VerifyUserResponseDto {
            success: true,
            auto_verified: Some(true),
            status: None,
            message: VERIFIED_MESSAGE.to_string(),
        })
    }

    /// Look up the verification status of a user in either identity table
    ///
    /// The students table is consulted first.
    pub async fn get_status(&self, user_id: &str) -> Result<VerificationStatusDto, Error> {
        if let Some(student) = StudentRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
        {
            return Ok(VerificationStatusDto {
                user_id: student.user_id,
                user_type: UserType::Student,
                status: student.status,
                verified_at: student.verified_at,
            });
        }

        if let Some(alumni) = AlumniRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
        {
            return Ok(VerificationStatusDto {
                user_id: alumni.user_id,
                user_type: UserType::Alumni,
                status: alumni.status,
                verified_at: alumni.verified_at,
            });
        }

        Err(ResourceError::not_found("Verification record", user_id).into())
    }

    /// List identity records of one user type, optionally filtered by status
    pub async fn list(
        &self,
        user_type: &str,
        status: Option<&str>,
    ) -> Result<Vec<VerificationRecordDto>, Error> {
        let user_type = parse_member_type(user_type)?;
        let status: Option<VerificationStatus> = status.map(parse_status::<VerificationStatus>).transpose()?;

        let records = match user_type {
            UserType::Student => StudentRepository::new(self.db)
                .list(status)
                .await?
                .into_iter()
                .map(VerificationRecordDto::from)
                .collect(),
            _ => AlumniRepository::new(self.db)
                .list(status)
                .await?
                .into_iter()
                .map(VerificationRecordDto::from)
                .collect(),
        };

        Ok(records)
    }

    /// Set the verification status of a user's identity record
    ///
    /// # Returns
    /// - `Ok(VerificationRecordDto)`: The updated record
    /// - `Err(Error::ValidationError)`: Invalid user type or status
    /// - `Err(Error::ResourceError)`: The user has no record of that type
    /// - `Err(Error::DbErr)`: Database error
    pub async fn set_status(
        &self,
        user_type: &str,
        user_id: &str,
        status: &str,
    ) -> Result<VerificationRecordDto, Error> {
        let user_type = parse_member_type(user_type)?;
        let status: VerificationStatus = parse_status(status)?;

        let record = match user_type {
            UserType::Student => StudentRepository::new(self.db)
                .update_status(user_id, status)
                .await?
                .map(VerificationRecordDto::from),
            _ => AlumniRepository::new(self.db)
                .update_status(user_id, status)
                .await?
                .map(VerificationRecordDto::from),
        };

        let record =
            record.ok_or_else(|| ResourceError::not_found("Verification record", user_id))?;

        tracing::info!(
            "Verification of {:?} {} set to {:?}",
            user_type,
            user_id,
            status
        );

        Ok(record)
    }
}
