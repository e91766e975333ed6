//! SeaORM entity definitions for GradLink.

pub mod prelude;

pub mod alumni;
pub mod collaboration_request;
pub mod event;
pub mod event_registration;
pub mod job;
pub mod job_application;
pub mod json;
pub mod mentorship;
pub mod mentorship_request;
pub mod project;
pub mod recommendation_request;
pub mod sea_orm_active_enums;
pub mod student;
pub mod user;
