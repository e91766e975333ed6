//! Server application core modules.
//!
//! This module contains all server-side functionality for GradLink: HTTP routing,
//! controllers, services, database repositories, configuration and startup. It
//! provides the REST API consumed by the GradLink single page application.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
