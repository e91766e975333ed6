//! Status transitions shared by every request table.
//!
//! Collaboration requests, mentorship requests, recommendation requests and job
//! applications all carry a [`RequestStatus`] column that moves between `pending`,
//! `accepted` and `rejected`. Transitions are not enforced: any of the three values may
//! be written at any time and writing the current value again succeeds.

use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, Value,
};

/// A table whose rows follow the pending/accepted/rejected request lifecycle
pub trait RequestEntity: EntityTrait {
    /// Resource name used in not found responses
    const RESOURCE: &'static str;

    /// Column holding the [`RequestStatus`]
    fn status_column() -> Self::Column;
}

impl RequestEntity for entity::collaboration_request::Entity {
    const RESOURCE: &'static str = "Collaboration request";

    fn status_column() -> Self::Column {
        entity::collaboration_request::Column::Status
    }
}

impl RequestEntity for entity::mentorship_request::Entity {
    const RESOURCE: &'static str = "Mentorship request";

    fn status_column() -> Self::Column {
        entity::mentorship_request::Column::Status
    }
}

impl RequestEntity for entity::recommendation_request::Entity {
    const RESOURCE: &'static str = "Recommendation request";

    fn status_column() -> Self::Column {
        entity::recommendation_request::Column::Status
    }
}

impl RequestEntity for entity::job_application::Entity {
    const RESOURCE: &'static str = "Job application";

    fn status_column() -> Self::Column {
        entity::job_application::Column::Status
    }
}

/// Set the status of a request row
///
/// # Returns
/// - `Ok(Some(Model))`: The row after the update
/// - `Ok(None)`: No row exists with the provided ID
/// - `Err(DbErr)`: Database error
pub async fn update_request_status<E, C>(
    db: &C,
    id: i32,
    status: RequestStatus,
) -> Result<Option<E::Model>, DbErr>
where
    E: RequestEntity,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let request = match E::find_by_id(id).one(db).await? {
        Some(request) => request,
        None => return Ok(None),
    };

    let mut request_am = request.into_active_model();
    request_am.set(E::status_column(), Value::from(status));

    let request = request_am.update(db).await?;

    Ok(Some(request))
}
