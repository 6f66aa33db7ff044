//! YouTube video identifier extraction
//!
//! Handles the common URL shapes (`watch?v=ID`, `youtu.be/ID`, `/embed/ID`,
//! `/v/ID`) and derives the thumbnail and embed URLs from the extracted token.

use crate::utils::config::EmbedParams;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Matches a run of word characters/hyphens immediately after one of the
/// recognized URL markers. Markers are case-insensitive, the token itself is
/// captured verbatim.
static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i:v/|be/|[?&]v=|embed/)([\w-]+)").expect("valid id pattern"));

/// A YouTube video identifier.
///
/// The token is opaque: no character-set validation happens beyond the
/// extraction pattern, and a widget constructed from an unextractable URL
/// carries an empty identifier (which degrades to a broken thumbnail and the
/// embed fallback, never an error).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap an explicit identifier, e.g. one supplied alongside a custom
    /// thumbnail URL.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Extract the identifier from a YouTube URL.
    ///
    /// Returns the first run of `[\w-]` preceded by `v/`, `be/`, `?v=`, `&v=`
    /// or `embed/`, or `None` when no marker is present.
    pub fn extract(input: &str) -> Option<Self> {
        ID_PATTERN
            .captures(input)
            .map(|caps| Self(caps[1].to_string()))
    }

    /// Like [`extract`](Self::extract), but degrades to an empty identifier
    /// instead of failing — the behavior the widget constructor wants.
    pub fn extract_or_empty(input: &str) -> Self {
        Self::extract(input).unwrap_or_else(|| Self(String::new()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `hqdefault` thumbnail URL for this video.
    pub fn thumbnail_url(&self) -> String {
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", self.0)
    }

    /// The embedded-player page URL for this video.
    pub fn embed_url(&self, params: &EmbedParams) -> String {
        format!(
            "https://www.youtube.com/embed/{}?{}",
            self.0,
            params.query_string()
        )
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
