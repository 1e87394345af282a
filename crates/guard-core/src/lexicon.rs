//! Comment syntax configuration
//!
//! A lexicon is the ordered table of comment delimiters a parser recognizes.
//! Region markers only ever live inside comments, so the lexicon decides
//! where the parser looks for them.

use serde::{Deserialize, Serialize};

/// A single recognized comment syntax: a start token and an optional end
/// token. Without an end token the comment is line-based and terminates at
/// `\n`, `\r\n`, `\r`, or end of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSyntax {
    pub start: String,
    pub end: Option<String>,
}

/// Ordered table of comment syntaxes.
///
/// When several start tokens match at the same position, the longest one
/// wins; equal lengths are broken by registration order, first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentLexicon {
    entries: Vec<CommentSyntax>,
}

impl CommentLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a multi-line comment delimited by `start` and `end`.
    /// Start tokens must be non-empty.
    pub fn with_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        let start = start.into();
        debug_assert!(!start.is_empty(), "comment start token must be non-empty");
        self.entries.push(CommentSyntax {
            start,
            end: Some(end.into()),
        });
        self
    }

    /// Register a single-line comment ending at the line terminator or EOF.
    pub fn with_line_comment(mut self, start: impl Into<String>) -> Self {
        let start = start.into();
        debug_assert!(!start.is_empty(), "comment start token must be non-empty");
        self.entries.push(CommentSyntax { start, end: None });
        self
    }

    /// `//` and `/* ... */`, as in C, Java, and Rust sources.
    pub fn c_like() -> Self {
        Self::new()
            .with_line_comment("//")
            .with_comment("/*", "*/")
    }

    /// `#`, as in shell scripts, TOML, and YAML.
    pub fn hash() -> Self {
        Self::new().with_line_comment("#")
    }

    /// `<!-- ... -->`, as in XML and HTML.
    pub fn xml() -> Self {
        Self::new().with_comment("<!--", "-->")
    }

    pub fn entries(&self) -> &[CommentSyntax] {
        &self.entries
    }

    /// Find the comment syntax whose start token matches the head of `input`.
    pub(crate) fn match_at(&self, input: &str) -> Option<&CommentSyntax> {
        let mut best: Option<&CommentSyntax> = None;
        for entry in &self.entries {
            if input.starts_with(entry.start.as_str()) {
                // replace only on a strictly longer match: first registered wins ties
                if best.is_none_or(|b| entry.start.len() > b.start.len()) {
                    best = Some(entry);
                }
            }
        }
        best
    }
}
