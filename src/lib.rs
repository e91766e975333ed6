//! GradLink REST API.
//!
//! Alumni and student networking backend: user registration, identity verification,
//! project collaboration, jobs, events, mentorship and recommendation letter requests.

pub mod model;
pub mod server;
