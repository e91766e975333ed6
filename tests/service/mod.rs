//! Tests for the service layer.
//!
//! Services are exercised directly against an in-memory SQLite database, verifying
//! validation, reference resolution and the mapping of repository results to errors.

mod collaboration;
mod event;
mod job;
mod project;
mod recommendation;
mod verification;
