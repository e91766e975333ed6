//! Service layer for business logic.
//!
//! Services validate request payloads, resolve implicit references (the receiver of a
//! collaboration request, the mentor of a mentorship request), enforce the few
//! cross-table rules (closed jobs, full events, duplicate registrations) and map
//! repository results to domain errors. Controllers only translate between HTTP and
//! these services.

pub mod collaboration;
pub mod event;
pub mod job;
pub mod mentorship;
pub mod project;
pub mod recommendation;
pub mod request;
pub mod user;
pub mod verification;
