//! Shared test harness for GradLink.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares the tables and fixtures
//! a test needs, and `build()` returns a [`TestContext`] wrapping an in-memory SQLite
//! database with those tables created and fixtures inserted. Fixture helpers on the
//! context (`test.user()`, `test.project()`, ...) insert additional rows during the
//! test body.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
