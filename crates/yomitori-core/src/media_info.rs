use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized metadata extracted from a single media filename.
///
/// Zero values carry meaning: `year == 0` means the filename carries no
/// release year, and `season == 0` / `episode == 0` mark content that is
/// not episodic (movies). `name` may be empty when the filename has no
/// discernible title; that is a valid result, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub name: String,
    pub year: u32,
    pub season: u32,
    pub episode: u32,
}

impl MediaInfo {
    /// Whether this describes an episode of a series.
    pub fn is_episode(&self) -> bool {
        self.episode > 0
    }
}

impl fmt::Display for MediaInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "<no title>")?;
        } else {
            write!(f, "{}", self.name)?;
        }
        if self.year > 0 {
            write!(f, " ({})", self.year)?;
        }
        if self.episode > 0 {
            write!(f, " S{:02}E{:02}", self.season, self.episode)?;
        }
        Ok(())
    }
}

/// Reply fields as the model returned them, before any invariant is
/// enforced. Absent fields deserialize to zero values; wrong field
/// *types* fail deserialization and surface as a schema error.
#[derive(Debug, Default, Deserialize)]
pub struct RawMediaInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub season: i64,
    #[serde(default)]
    pub episode: i64,
}
