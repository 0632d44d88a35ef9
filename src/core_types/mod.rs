//! Core types shared across the recommendation service error model
//!
//! ## Organization
//! - `errors` - Classification trait, categories and severities

pub mod errors;

pub use errors::{CategorizedError, ErrorCategory, ErrorSeverity};
