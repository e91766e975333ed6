//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organized by
//! table. The status transition shared by every user-to-user request table lives in
//! [`request`].

pub mod alumni;
pub mod collaboration_request;
pub mod event;
pub mod event_registration;
pub mod job;
pub mod job_application;
pub mod mentorship;
pub mod mentorship_request;
pub mod project;
pub mod recommendation_request;
pub mod request;
pub mod student;
pub mod user;
