use std::time::Duration;

use thiserror::Error;

/// Errors from a completion endpoint client.
///
/// `Timeout` is kept separate from `Http` so callers can tell an elapsed
/// deadline apart from connectivity failures without digging into the
/// underlying error.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl CompletionError {
    /// Classify a reqwest failure, separating deadline expiry from other
    /// connection-level failures.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Http(err)
        }
    }

    /// Whether this error is an elapsed per-request deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
