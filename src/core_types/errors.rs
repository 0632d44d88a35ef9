//! Classification shared by recommendation service errors.
//!
//! Handlers that only need routing decisions can work against
//! [`CategorizedError`] instead of matching on concrete error types.

/// An error that knows who is responsible for it and how loudly to report it.
pub trait CategorizedError: std::error::Error + Send + Sync + 'static {
    /// Who has to act to resolve the failure
    fn category(&self) -> ErrorCategory;

    /// Level the failure is reported at
    fn severity(&self) -> ErrorSeverity;

    /// Whether repeating the same request could succeed
    fn is_retryable(&self) -> bool;

    /// Text safe to show an end user; never contains the technical message
    fn user_message(&self) -> String;
}

/// Party responsible for resolving a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The request was at fault (bad credentials, bad arguments)
    Client,
    /// The service failed to produce a result for an acceptable request
    Internal,
}

/// Reporting level, ordered from loudest to quietest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    Error,
    Warning,
    Info,
}
