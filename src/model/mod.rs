//! Request and response bodies of the HTTP API.
//!
//! All bodies use camelCase field names on the wire.

pub mod api;
pub mod collaboration;
pub mod event;
pub mod job;
pub mod mentorship;
pub mod project;
pub mod recommendation;
pub mod user;
pub mod verification;
