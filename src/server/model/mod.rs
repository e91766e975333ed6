//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and convenient
//! aliases for database entity models.

pub mod app;
pub mod db;
