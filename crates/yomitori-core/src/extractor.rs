//! Per-call extraction lifecycle: build → dispatch → parse → normalize.

use yomitori_llm::traits::CompletionService;

use crate::error::ExtractError;
use crate::json_scan;
use crate::media_info::{MediaInfo, RawMediaInfo};
use crate::normalize;
use crate::prompt;

/// LLM-backed filename metadata extractor.
///
/// Stateless across calls: the only held state is the endpoint client's
/// immutable configuration, so one extractor serves any number of
/// concurrent callers. Throughput bounding and retry policy belong to
/// the caller, since the endpoint is the scarce resource.
pub struct Extractor<C> {
    service: C,
}

impl<C: CompletionService> Extractor<C> {
    pub fn new(service: C) -> Self {
        Self { service }
    }

    /// Extract metadata for one filename.
    ///
    /// `template` is the extraction instruction; [`prompt::DEFAULT_TEMPLATE`]
    /// covers the common case. The reply may wrap its JSON object in
    /// prose or a code fence; only an unlocatable object or wrong field
    /// types are a schema error.
    pub async fn extract(&self, filename: &str, template: &str) -> Result<MediaInfo, ExtractError> {
        let payload = prompt::build(filename, template);
        tracing::debug!(model = self.service.model(), filename, "dispatching extraction request");

        let reply = self.service.complete(&payload).await?;

        let object = json_scan::first_object(&reply).ok_or_else(|| {
            tracing::warn!(filename, "no JSON object in completion reply");
            ExtractError::Schema {
                reason: "no JSON object found in reply".into(),
                raw: reply.clone(),
            }
        })?;

        let raw: RawMediaInfo = serde_json::from_str(object).map_err(|e| {
            tracing::warn!(filename, error = %e, "reply object failed to deserialize");
            ExtractError::Schema {
                reason: e.to_string(),
                raw: reply.clone(),
            }
        })?;

        let info = normalize::normalize(raw);
        tracing::debug!(
            filename,
            name = %info.name,
            year = info.year,
            season = info.season,
            episode = info.episode,
            "extraction complete"
        );
        Ok(info)
    }
}
