use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for the window stack tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("no current window: the stack is empty")]
    NoCurrentWindow,

    #[error("config load failed for '{path}': {source}")]
    ConfigLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse tracker config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller doesn't need to know.
///
/// The tracker swallows Screen Host failures by policy: its job is indexing
/// and best-effort cleanup, not transactional guarantees. These helpers keep
/// the swallow sites honest by logging file/line via `#[track_caller]`.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_current_window_message() {
        let err = TrackerError::NoCurrentWindow;
        assert_eq!(err.to_string(), "no current window: the stack is empty");
    }

    #[test]
    fn test_log_err_returns_value_on_ok() {
        let result: std::result::Result<i32, String> = Ok(42);
        assert_eq!(result.log_err(), Some(42));
    }

    #[test]
    fn test_log_err_returns_none_on_err() {
        let result: std::result::Result<i32, String> = Err("boom".to_string());
        assert_eq!(result.log_err(), None);
    }
}
