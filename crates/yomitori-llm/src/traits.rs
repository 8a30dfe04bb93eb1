//! Trait definition for text-completion backends.
//!
//! Endpoint clients implement this trait so the extraction layer can be
//! backend-agnostic (and run against a mock in tests).

use std::future::Future;

use crate::error::CompletionError;

/// A text-completion backend.
///
/// One outbound call per `complete` invocation; implementations hold no
/// mutable state across calls and are safe to share between tasks.
pub trait CompletionService: Send + Sync {
    /// Identifier of the model requests are dispatched to.
    fn model(&self) -> &str;

    /// Send a composed prompt and return the raw reply text.
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}
