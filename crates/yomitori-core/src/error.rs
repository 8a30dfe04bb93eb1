use thiserror::Error;

use yomitori_llm::error::CompletionError;

/// Errors from a single extraction call.
///
/// `Transport` failures are the caller's retry candidates. `Schema`
/// failures are not retried: they indicate a persistent template/model
/// mismatch, so the raw reply text is attached for diagnosis instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("transport error: {0}")]
    Transport(#[source] CompletionError),

    #[error("timed out waiting for the completion endpoint: {0}")]
    Timeout(#[source] CompletionError),

    #[error("reply did not match the expected schema: {reason}")]
    Schema { reason: String, raw: String },
}

impl ExtractError {
    /// The raw reply text, when this is a schema mismatch.
    pub fn raw_reply(&self) -> Option<&str> {
        match self {
            Self::Schema { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl From<CompletionError> for ExtractError {
    fn from(err: CompletionError) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }
}
