//! # recommender-errors
//!
//! Error taxonomy for the retail recommendation service.
//!
//! ## Key Features
//!
//! - **Three Kinds**: Authentication, invalid argument and recommendation failures
//! - **Discriminant**: Branch on [`DomainErrorKind`] without parsing messages
//! - **Verbatim Messages**: The message supplied at construction is returned untouched
//! - **Classification**: Category, severity and user-safe messages for handlers
//! - **Structured Logging**: Handlers report errors through `tracing` with [`DomainError::log`]
//!
//! ## Example
//!
//! ```rust
//! use recommender_errors::{DomainError, DomainErrorKind, DomainResult};
//!
//! fn authenticate(token: &str) -> DomainResult<()> {
//!     if token.is_empty() {
//!         return Err(DomainError::authentication("invalid token"));
//!     }
//!     Ok(())
//! }
//!
//! let err = authenticate("").unwrap_err();
//! assert_eq!(err.kind(), DomainErrorKind::Authentication);
//! assert_eq!(err.message(), "invalid token");
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod error;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use core_types::{CategorizedError, ErrorCategory, ErrorSeverity};
pub use error::{DomainError, DomainErrorKind, DomainResult};
