//! Builder API for ergonomic description construction.
//!
//! This module provides a fluent builder and macros for declaring
//! descriptions with minimal boilerplate.

pub mod description;
pub mod error;
pub mod macros;

pub use description::DescriptionBuilder;
pub use error::BuildError;
