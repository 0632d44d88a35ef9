//! Error types for the recommendation service.
//!
//! The recommendation service surfaces exactly three domain failures, each
//! carrying a human-readable message:
//! - Authentication failures (the caller's identity could not be validated)
//! - Invalid arguments (a request argument violated a precondition)
//! - Recommendation failures (the computation itself could not produce a result)
//!
//! Anything else (exhausted resources, broken connections) is not a
//! [`DomainError`] and travels through whatever error type the failing layer
//! already uses.
//!
//! # Error Handling Example
//!
//! ```rust
//! use recommender_errors::{DomainError, DomainErrorKind};
//!
//! fn status_for(err: &DomainError) -> u16 {
//!     match err.kind() {
//!         DomainErrorKind::Authentication => 401,
//!         DomainErrorKind::InvalidArgument => 400,
//!         DomainErrorKind::Recommendation => 500,
//!     }
//! }
//!
//! let err = DomainError::invalid_argument("top_k must be positive");
//! assert_eq!(status_for(&err), 400);
//! assert_eq!(err.message(), "top_k must be positive");
//! ```
//!
//! # Result Type
//!
//! Use [`DomainResult<T>`] as a convenient alias for `Result<T, DomainError>`:
//!
//! ```rust
//! use recommender_errors::{DomainError, DomainResult};
//!
//! fn top_k(requested: i64) -> DomainResult<usize> {
//!     usize::try_from(requested)
//!         .ok()
//!         .filter(|k| *k > 0)
//!         .ok_or_else(|| DomainError::invalid_argument("top_k must be positive"))
//! }
//!
//! assert!(top_k(0).is_err());
//! assert_eq!(top_k(5).unwrap(), 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core_types::{CategorizedError, ErrorCategory, ErrorSeverity};
use crate::logging::{log_error, log_info, log_warn};

/// Convenient result type for recommendation service operations.
pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Discriminant of a [`DomainError`].
///
/// Handlers branch on this instead of inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainErrorKind {
    /// Caller credentials or identity could not be validated.
    Authentication,
    /// A caller-supplied argument failed a precondition check.
    InvalidArgument,
    /// The recommendation computation failed on otherwise valid input.
    Recommendation,
}

impl DomainErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::Authentication,
        Self::InvalidArgument,
        Self::Recommendation,
    ];

    /// Stable name of the kind, as used in logs and documentation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authentication => "AuthenticationError",
            Self::InvalidArgument => "InvalidArgumentError",
            Self::Recommendation => "RecommendationError",
        }
    }

    fn error_type(self) -> &'static str {
        match self {
            Self::Authentication => "authentication_error",
            Self::InvalidArgument => "invalid_argument_error",
            Self::Recommendation => "recommendation_error",
        }
    }
}

impl fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the recommendation service's layers.
///
/// Each variant carries the message supplied at construction, unmodified.
/// Values are plain data: they are `Send + Sync`, compare structurally and
/// never change kind or message after construction.
///
/// # Creating Errors
///
/// Use the constructor methods; the handler that consumes the error decides
/// whether to report it with [`DomainError::log`]:
///
/// ```rust
/// use recommender_errors::DomainError;
///
/// let err = DomainError::authentication("invalid token");
/// let err = DomainError::invalid_argument("top_k must be positive");
/// let err = DomainError::recommendation("no candidates found");
/// ```
///
/// # Error Categories
///
/// | Variant | Category | Severity |
/// |---------|----------|----------|
/// | `Authentication` | Client | Warning |
/// | `InvalidArgument` | Client | Info |
/// | `Recommendation` | Internal | Error |
///
/// None of the variants is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainError {
    /// The caller's credentials or identity could not be validated.
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Details about the authentication failure.
        message: String,
    },

    /// A supplied argument violates a precondition.
    ///
    /// Raised by the input-validation layer before any recommendation work
    /// starts.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Which precondition failed, and how.
        message: String,
    },

    /// The recommendation computation failed after inputs were accepted.
    ///
    /// Typical causes are an empty candidate set or a failing downstream
    /// model.
    #[error("Recommendation failed: {message}")]
    Recommendation {
        /// Details about the failure.
        message: String,
    },
}

impl DomainError {
    // =========================================================================
    // Constructor methods
    // =========================================================================

    /// Create an error of the given kind.
    ///
    /// The message is stored verbatim; empty messages are accepted.
    /// Construction has no side effects, see [`log`](Self::log) for reporting.
    pub fn new(kind: DomainErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            DomainErrorKind::Authentication => Self::Authentication { message },
            DomainErrorKind::InvalidArgument => Self::InvalidArgument { message },
            DomainErrorKind::Recommendation => Self::Recommendation { message },
        }
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(DomainErrorKind::Authentication, message)
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(DomainErrorKind::InvalidArgument, message)
    }

    /// Create a recommendation error.
    pub fn recommendation(message: impl Into<String>) -> Self {
        Self::new(DomainErrorKind::Recommendation, message)
    }

    // =========================================================================
    // Reporting
    // =========================================================================

    /// Emit one structured log event for this error at its [`severity`](Self::severity).
    ///
    /// Meant for the handler that finally consumes the error. Fields are
    /// `error_type` (snake-case kind name) and `detail` (the message).
    pub fn log(&self) {
        let kind = self.kind();
        let error_type = kind.error_type();
        let detail = self.message();
        let summary = match kind {
            DomainErrorKind::Authentication => "Caller authentication failed",
            DomainErrorKind::InvalidArgument => "Request argument rejected",
            DomainErrorKind::Recommendation => "Recommendation computation failed",
        };
        match self.severity() {
            ErrorSeverity::Error => {
                log_error!(error_type = error_type, detail = %detail, "{}", summary)
            }
            ErrorSeverity::Warning => {
                log_warn!(error_type = error_type, detail = %detail, "{}", summary)
            }
            ErrorSeverity::Info => {
                log_info!(error_type = error_type, detail = %detail, "{}", summary)
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The discriminant of this error.
    pub fn kind(&self) -> DomainErrorKind {
        match self {
            Self::Authentication { .. } => DomainErrorKind::Authentication,
            Self::InvalidArgument { .. } => DomainErrorKind::InvalidArgument,
            Self::Recommendation { .. } => DomainErrorKind::Recommendation,
        }
    }

    /// The message exactly as supplied at construction.
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message }
            | Self::InvalidArgument { message }
            | Self::Recommendation { message } => message,
        }
    }

    /// Consume the error and return its message.
    pub fn into_message(self) -> String {
        match self {
            Self::Authentication { message }
            | Self::InvalidArgument { message }
            | Self::Recommendation { message } => message,
        }
    }

    /// Whether this is an authentication failure.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Whether a request argument was rejected.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Whether the recommendation computation failed.
    pub fn is_recommendation(&self) -> bool {
        matches!(self, Self::Recommendation { .. })
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Get the error category for routing and handling decisions.
    ///
    /// Authentication and argument failures are the caller's to fix; a failed
    /// computation is ours.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication { .. } => ErrorCategory::Client,
            Self::InvalidArgument { .. } => ErrorCategory::Client,
            Self::Recommendation { .. } => ErrorCategory::Internal,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Authentication { .. } => ErrorSeverity::Warning,
            Self::InvalidArgument { .. } => ErrorSeverity::Info,
            Self::Recommendation { .. } => ErrorSeverity::Error,
        }
    }

    /// Always `false`: these errors carry no retry hint.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Convert to a user-friendly message suitable for display.
    ///
    /// The technical message is never included.
    ///
    /// ```rust
    /// use recommender_errors::DomainError;
    ///
    /// let err = DomainError::authentication("token signature mismatch");
    /// assert_eq!(
    ///     err.user_message(),
    ///     "Authentication failed. Please check your credentials"
    /// );
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication { .. } => {
                "Authentication failed. Please check your credentials".to_string()
            }
            Self::InvalidArgument { .. } => {
                "The request contained an invalid argument".to_string()
            }
            Self::Recommendation { .. } => {
                "Unable to produce recommendations right now".to_string()
            }
        }
    }
}

impl CategorizedError for DomainError {
    fn category(&self) -> ErrorCategory {
        DomainError::category(self)
    }

    fn severity(&self) -> ErrorSeverity {
        DomainError::severity(self)
    }

    fn is_retryable(&self) -> bool {
        DomainError::is_retryable(self)
    }

    fn user_message(&self) -> String {
        DomainError::user_message(self)
    }
}
