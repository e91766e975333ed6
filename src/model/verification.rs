use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{UserType, VerificationStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Identity verification submission for a student or alumni.
#[derive(Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyUserDto {
    pub user_id: String,
    /// Either `student` or `alumni`
    pub user_type: String,
    pub official_email: String,
    pub student_id: String,
    pub department: String,
    pub full_name: String,
    /// Required for students
    pub batch_year: Option<String>,
    /// Required for alumni
    pub graduation_year: Option<String>,
    pub company: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyUserResponseDto {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_verified: Option<bool>,
    /// Status of the existing record when the submission was refused
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub status: Option<VerificationStatus>,
    pub message: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStatusDto {
    pub user_id: String,
    #[schema(value_type = String)]
    pub user_type: UserType,
    #[schema(value_type = String)]
    pub status: VerificationStatus,
    pub verified_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRecordDto {
    pub user_id: String,
    #[schema(value_type = String)]
    pub user_type: UserType,
    pub full_name: String,
    pub official_email: String,
    pub student_id: String,
    pub department: String,
    pub batch_year: Option<String>,
    pub graduation_year: Option<String>,
    pub company: Option<String>,
    #[schema(value_type = String)]
    pub status: VerificationStatus,
    pub verified_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct VerificationListDto {
    pub verifications: Vec<VerificationRecordDto>,
}

#[derive(Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VerificationListQuery {
    /// Either `student` or `alumni`, required
    pub user_type: Option<String>,
    /// Optional `pending`, `verified` or `rejected` filter
    pub status: Option<String>,
}

impl From<entity::student::Model> for VerificationRecordDto {
    fn from(student: entity::student::Model) -> Self {
        Self {
            user_id: student.user_id,
            user_type: UserType::Student,
            full_name: student.full_name,
            official_email: student.official_email,
            student_id: student.student_id,
            department: student.department,
            batch_year: Some(student.batch_year),
            graduation_year: None,
            company: None,
            status: student.status,
            verified_at: student.verified_at,
            created_at: student.created_at,
        }
    }
}

impl From<entity::alumni::Model> for VerificationRecordDto {
    fn from(alumni: entity::alumni::Model) -> Self {
        Self {
            user_id: alumni.user_id,
            user_type: UserType::Alumni,
            full_name: alumni.full_name,
            official_email: alumni.official_email,
            student_id: alumni.student_id,
            department: alumni.department,
            batch_year: None,
            graduation_year: Some(alumni.graduation_year),
            company: alumni.company,
            status: alumni.status,
            verified_at: alumni.verified_at,
            created_at: alumni.created_at,
        }
    }
}
