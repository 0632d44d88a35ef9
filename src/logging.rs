//! Logging utilities for recommender-errors
//!
//! Re-exports the tracing macros the taxonomy needs under the crate's
//! log_* naming convention.

pub(crate) use tracing::{error as log_error, info as log_info, warn as log_warn};
