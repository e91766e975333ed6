//! Request payload validation helpers.
//!
//! Status and user type literals are parsed against the string values of the
//! corresponding SeaORM active enums, so the allow-list of each entity lives in exactly
//! one place.

use entity::sea_orm_active_enums::UserType;
use sea_orm::ActiveEnum;

use crate::server::error::validation::ValidationError;

/// Ensure a required string field is present and not blank
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(())
}

/// Unwrap an optional field that is required in the current context
pub fn require_some<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// Unwrap a query parameter that the endpoint cannot operate without
pub fn require_filter<'a>(
    param: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingFilter(param)),
    }
}

/// Parse a status literal into its active enum
///
/// # Returns
/// - `Ok(T)`: The literal matches one of the enum's string values exactly
/// - `Err(ValidationError::InvalidStatus)`: Any other value, including different casing
pub fn parse_status<T>(value: &str) -> Result<T, ValidationError>
where
    T: ActiveEnum<Value = String>,
{
    T::try_from_value(&value.to_string())
        .map_err(|_| ValidationError::InvalidStatus(value.to_string()))
}

/// Parse any user type accepted at registration
pub fn parse_user_type(value: &str) -> Result<UserType, ValidationError> {
    UserType::try_from_value(&value.to_string())
        .map_err(|_| ValidationError::InvalidUserType(value.to_string()))
}

/// Parse a user type that owns an identity record, which excludes `admin`
pub fn parse_member_type(value: &str) -> Result<UserType, ValidationError> {
    match parse_user_type(value)? {
        UserType::Admin => Err(ValidationError::InvalidUserType(value.to_string())),
        user_type => Ok(user_type),
    }
}
