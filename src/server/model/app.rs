//! Shared application state passed to every handler.

use sea_orm::DatabaseConnection;

/// State cloned into each axum handler
#[derive(Clone)]
pub struct AppState {
    /// Pooled database connection
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
