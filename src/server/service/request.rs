//! Status transitions shared by every user-to-user request.

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, IntoActiveModel, PrimaryKeyTrait,
};

use crate::server::{
    data::request::{update_request_status, RequestEntity},
    error::{resource::ResourceError, Error},
    util::validation::parse_status,
};

/// Validates and applies request status transitions
pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    /// Creates a new instance of [`RequestService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validate and apply a status transition to any request table
    ///
    /// The status literal is validated before the database is touched, so an invalid
    /// value leaves the row unchanged.
    ///
    /// # Arguments
    /// - `id` (`i32`): ID of the request row
    /// - `status` (`&str`): One of `pending`, `accepted` or `rejected`
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated row
    /// - `Err(Error::ValidationError)`: The status literal is not allowed
    /// - `Err(Error::ResourceError)`: No row exists with the provided ID
    /// - `Err(Error::DbErr)`: Database error
    pub async fn update_status<E>(&self, id: i32, status: &str) -> Result<E::Model, Error>
    where
        E: RequestEntity,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
        E::Model: IntoActiveModel<E::ActiveModel>,
        E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    {
        let status: RequestStatus = parse_status(status)?;

        let request = update_request_status::<E, _>(self.db, id, status)
            .await?
            .ok_or_else(|| ResourceError::not_found(E::RESOURCE, id))?;

        tracing::info!("{} {} set to {:?}", E::RESOURCE, id, status);

        Ok(request)
    }
}
