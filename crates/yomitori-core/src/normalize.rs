//! Deterministic cleanup of model replies.
//!
//! The upstream model is treated as an untrusted, best-effort oracle:
//! every hard invariant on [`MediaInfo`] is enforced here rather than
//! trusted from the reply.

use chrono::Datelike;

use crate::media_info::{MediaInfo, RawMediaInfo};

/// Earliest plausible release year.
const MIN_YEAR: i64 = 1870;

/// Years this far past the current one still count as plausible.
const FUTURE_SLACK: i64 = 2;

/// Apply the defaulting and cleanup rules to a raw reply.
///
/// - implausible years collapse to 0 ("unknown")
/// - `season` defaults to 1 when `episode > 0` and no season was given
/// - negative counts clamp to 0
/// - the name is trimmed of decorative residue and lower-cased unless it
///   contains a CJK character
pub fn normalize(raw: RawMediaInfo) -> MediaInfo {
    normalize_at(raw, chrono::Utc::now().year())
}

/// Same as [`normalize`] with the current year pinned, for tests.
fn normalize_at(raw: RawMediaInfo, current_year: i32) -> MediaInfo {
    let episode = clamp_count(raw.episode);
    let mut season = clamp_count(raw.season);
    if episode > 0 && season == 0 {
        season = 1;
    }

    MediaInfo {
        name: clean_name(&raw.name),
        year: plausible_year(raw.year, current_year),
        season,
        episode,
    }
}

fn clamp_count(v: i64) -> u32 {
    v.clamp(0, u32::MAX as i64) as u32
}

/// Collapse implausible years to 0. The window rejects resolution-like
/// numbers (1080, 2160) as well as anything before 1870 or more than
/// [`FUTURE_SLACK`] years ahead.
fn plausible_year(year: i64, current_year: i32) -> u32 {
    if (MIN_YEAR..=current_year as i64 + FUTURE_SLACK).contains(&year) {
        year as u32
    } else {
        0
    }
}

/// Characters commonly left at title edges after tag stripping.
const DECORATIONS: &[char] = &[
    '.', '-', '_', '~', '·', '*', '[', ']', '(', ')', '{', '}', '【', '】', '「', '」', '《', '》',
    '"', '\'',
];

fn clean_name(name: &str) -> String {
    let trimmed = name.trim_matches(|c: char| c.is_whitespace() || DECORATIONS.contains(&c));
    if trimmed.chars().any(is_cjk) {
        trimmed.to_string()
    } else {
        trimmed.to_lowercase()
    }
}

/// Han ideographs plus kana and hangul ranges.
fn is_cjk(c: char) -> bool {
    matches!(c as u32,
        0x3040..=0x30FF        // hiragana, katakana
        | 0x3400..=0x4DBF      // CJK extension A
        | 0x4E00..=0x9FFF      // CJK unified ideographs
        | 0xAC00..=0xD7AF      // hangul syllables
        | 0xF900..=0xFAFF      // CJK compatibility ideographs
        | 0x20000..=0x2A6DF    // CJK extension B
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, year: i64, season: i64, episode: i64) -> RawMediaInfo {
        RawMediaInfo {
            name: name.to_string(),
            year,
            season,
            episode,
        }
    }

    // ── Year plausibility ─────────────────────────────────────────

    #[test]
    fn resolution_tokens_are_not_years() {
        assert_eq!(normalize_at(raw("t", 1080, 0, 0), 2026).year, 0);
        assert_eq!(normalize_at(raw("t", 2160, 0, 0), 2026).year, 0);
    }

    #[test]
    fn plausible_years_pass_through() {
        assert_eq!(normalize_at(raw("t", 1999, 0, 0), 2026).year, 1999);
        assert_eq!(normalize_at(raw("t", 1870, 0, 0), 2026).year, 1870);
    }

    #[test]
    fn year_window_edges() {
        assert_eq!(normalize_at(raw("t", 1869, 0, 0), 2026).year, 0);
        assert_eq!(normalize_at(raw("t", 2028, 0, 0), 2026).year, 2028);
        assert_eq!(normalize_at(raw("t", 2029, 0, 0), 2026).year, 0);
    }

    #[test]
    fn negative_year_collapses_to_unknown() {
        assert_eq!(normalize_at(raw("t", -3, 0, 0), 2026).year, 0);
    }

    // ── Season defaulting ─────────────────────────────────────────

    #[test]
    fn season_defaults_to_one_for_episodes() {
        let info = normalize_at(raw("t", 0, 0, 34), 2026);
        assert_eq!(info.season, 1);
        assert_eq!(info.episode, 34);
    }

    #[test]
    fn explicit_season_is_kept() {
        assert_eq!(normalize_at(raw("t", 0, 3, 12), 2026).season, 3);
    }

    #[test]
    fn movies_keep_season_zero() {
        let info = normalize_at(raw("t", 1999, 0, 0), 2026);
        assert_eq!(info.season, 0);
        assert_eq!(info.episode, 0);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let info = normalize_at(raw("t", 0, -1, -5), 2026);
        // Episode clamps to 0 first, so no season defaulting kicks in.
        assert_eq!(info.season, 0);
        assert_eq!(info.episode, 0);
    }

    // ── Name normalization ────────────────────────────────────────

    #[test]
    fn latin_names_are_lower_cased() {
        assert_eq!(
            normalize_at(raw("The Bone Collector", 0, 0, 0), 2026).name,
            "the bone collector"
        );
    }

    #[test]
    fn cjk_names_are_preserved_verbatim() {
        assert_eq!(normalize_at(raw("人民的名义", 0, 0, 0), 2026).name, "人民的名义");
        assert_eq!(normalize_at(raw("進撃の巨人", 0, 0, 0), 2026).name, "進撃の巨人");
        assert_eq!(normalize_at(raw("이상한 변호사 우영우", 0, 0, 0), 2026).name, "이상한 변호사 우영우");
    }

    #[test]
    fn mixed_script_names_count_as_cjk() {
        assert_eq!(
            normalize_at(raw("Fate/Zero 第二期", 0, 0, 0), 2026).name,
            "Fate/Zero 第二期"
        );
    }

    #[test]
    fn decorative_residue_is_trimmed() {
        assert_eq!(normalize_at(raw("  Title.- ", 0, 0, 0), 2026).name, "title");
        assert_eq!(normalize_at(raw("【人民的名义】", 0, 0, 0), 2026).name, "人民的名义");
    }

    #[test]
    fn empty_name_is_a_valid_result() {
        assert_eq!(normalize_at(raw("", 0, 0, 66), 2026).name, "");
    }
}
