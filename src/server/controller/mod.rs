//! HTTP controller endpoints for the GradLink web API.
//!
//! This module contains Axum handlers grouped by domain. Controllers extract path,
//! query and JSON body parameters, delegate to the service layer and map results to
//! HTTP responses. Every handler is annotated with `utoipa::path` so it appears in the
//! generated OpenAPI document.

pub mod collaboration;
pub mod event;
pub mod health;
pub mod job;
pub mod mentorship;
pub mod project;
pub mod recommendation;
pub mod user;
pub mod verification;
