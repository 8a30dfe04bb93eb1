//! Structured media metadata extraction from release filenames, with the
//! semantic interpretation delegated to an LLM completion endpoint and
//! every hard invariant re-enforced locally.

pub mod error;
pub mod extractor;
pub mod json_scan;
pub mod media_info;
pub mod normalize;
pub mod prompt;

pub use error::ExtractError;
pub use extractor::Extractor;
pub use media_info::MediaInfo;
pub use prompt::DEFAULT_TEMPLATE;
