//! Region marker classification
//!
//! The parser hands every comment body to an oracle, which decides whether
//! the comment denotes a protected region marker. The default grammar is
//! `[[region:<id>]]` / `[[end]]`; other marker grammars plug in through the
//! [`RegionOracle`] trait.

use regex::Regex;
use std::sync::LazyLock;

/// Classification of one comment body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// An ordinary comment, passed through untouched.
    NotAMarker,
    /// Opens the protected region `id`.
    Start { id: String },
    /// Closes the currently open region. When an id is carried it must match
    /// the open region's id.
    End { id: Option<String> },
}

/// Decides whether a comment body denotes a region marker.
pub trait RegionOracle: Send + Sync {
    fn classify(&self, comment_body: &str) -> Marker;
}

/// Pattern for start markers: `[[region:<id>]]`
static START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\[region:([A-Za-z0-9._-]+)\]\]$").expect("invalid start marker regex"));

/// Pattern for end markers: `[[end]]` or `[[end:<id>]]`
static END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\[end(?::([A-Za-z0-9._-]+))?\]\]$").expect("invalid end marker regex"));

/// Oracle for the default marker grammar.
///
/// The trimmed comment body must consist of exactly one marker; comments
/// with surrounding prose are not markers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOracle;

impl RegionOracle for DefaultOracle {
    fn classify(&self, comment_body: &str) -> Marker {
        let body = comment_body.trim();
        if let Some(caps) = START_PATTERN.captures(body) {
            return Marker::Start {
                id: caps[1].to_string(),
            };
        }
        if let Some(caps) = END_PATTERN.captures(body) {
            return Marker::End {
                id: caps.get(1).map(|m| m.as_str().to_string()),
            };
        }
        Marker::NotAMarker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" [[region:A]] ", Marker::Start { id: "A".into() })]
    #[case("[[region:model.fields-1]]", Marker::Start { id: "model.fields-1".into() })]
    #[case("[[end]]", Marker::End { id: None })]
    #[case("[[end:A]]", Marker::End { id: Some("A".into()) })]
    #[case("just a comment", Marker::NotAMarker)]
    #[case("[[region:A]] trailing prose", Marker::NotAMarker)]
    #[case("[[region:]]", Marker::NotAMarker)]
    #[case("[[region:has space]]", Marker::NotAMarker)]
    fn classifies_comment_bodies(#[case] body: &str, #[case] expected: Marker) {
        assert_eq!(DefaultOracle.classify(body), expected);
    }
}
