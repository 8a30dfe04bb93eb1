//! Prompt construction for extraction requests.
//!
//! Pure functions only: identical inputs always yield identical payloads,
//! so a request is reproducible from its filename and template alone.

/// Placeholder replaced by the filename when present in a template.
pub const FILENAME_PLACEHOLDER: &str = "{filename}";

/// Built-in extraction instruction.
///
/// Describes the target JSON shape and the extraction policy; callers
/// with their own template management can pass any other instruction to
/// [`build`].
pub const DEFAULT_TEMPLATE: &str = r#"You extract media metadata from a single torrent or release filename.

The filename may mix languages (Chinese, Japanese, Korean, English) and
may contain release-group tags, resolution/codec/audio markers, bracketed
markup, and decorative punctuation or emoji. Ignore all of that noise.

RULES:
1. "name" is the title only - no release group, resolution, codec, audio,
   or bracketed tags. If the filename carries both a localized and an
   original-language title, return one of them. If there is no
   discernible title at all, return "".
2. "year" is the 4-digit release year, or 0 if the filename has none.
   Never take it from resolution or bitrate numbers such as 1080 or 2160.
3. "season" is the season number. Use 0 for movies. For series without an
   explicit season marker, use 1.
4. "episode" is the episode number, or 0 for movies.

Respond with ONLY one JSON object in this exact format:
{"name": "", "year": 0, "season": 0, "episode": 0}

Filename: {filename}"#;

/// Compose the final request payload from a filename and a template.
///
/// If the template contains [`FILENAME_PLACEHOLDER`] the filename is
/// substituted there; otherwise it is appended on its own line. Neither
/// input is mutated.
pub fn build(filename: &str, template: &str) -> String {
    if template.contains(FILENAME_PLACEHOLDER) {
        template.replace(FILENAME_PLACEHOLDER, filename)
    } else {
        format!("{template}\n\nFilename: {filename}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_yield_identical_payloads() {
        let filename = "[SubsPlease] Spy x Family - 25 (1080p).mkv";
        let first = build(filename, DEFAULT_TEMPLATE);
        let second = build(filename, DEFAULT_TEMPLATE);
        assert_eq!(first, second);
    }

    #[test]
    fn placeholder_is_substituted() {
        let payload = build("movie.mkv", "Extract from: {filename}");
        assert_eq!(payload, "Extract from: movie.mkv");
    }

    #[test]
    fn filename_appended_when_no_placeholder() {
        let payload = build("movie.mkv", "Extract the metadata.");
        assert_eq!(payload, "Extract the metadata.\n\nFilename: movie.mkv");
    }

    #[test]
    fn default_template_embeds_the_filename() {
        let payload = build("人民的名义.S01E34.mkv", DEFAULT_TEMPLATE);
        assert!(payload.contains("人民的名义.S01E34.mkv"));
        assert!(!payload.contains(FILENAME_PLACEHOLDER));
    }

    #[test]
    fn emoji_and_control_punctuation_pass_through() {
        let filename = "【Movie】 Title ～完結編～ 🎬 (2020).mp4";
        let payload = build(filename, DEFAULT_TEMPLATE);
        assert!(payload.contains(filename));
    }
}
