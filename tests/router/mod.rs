//! End-to-end tests through the full application router.
//!
//! Requests are sent with `tower::ServiceExt::oneshot`, so routing, JSON extraction,
//! error mapping and response bodies are all exercised together.

mod collaboration;
mod job;
