//! Path filters selecting which files a parser applies to

use crate::path::NormalizedPath;

/// Capability deciding whether a path takes part in an operation.
pub trait PathFilter: Send + Sync {
    fn accept(&self, path: &NormalizedPath) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&NormalizedPath) -> bool + Send + Sync,
{
    fn accept(&self, path: &NormalizedPath) -> bool {
        self(path)
    }
}

/// Filter accepting every path; the default for parsers registered without
/// a filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PathFilter for AcceptAll {
    fn accept(&self, _path: &NormalizedPath) -> bool {
        true
    }
}

/// Filter accepting paths ending in one of the given suffixes.
///
/// Suffix semantics, not extension parsing: `"java"` accepts `Model.java`
/// but also `Model.xjava`; pass `".java"` to anchor at the dot.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new(suffixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl PathFilter for ExtensionFilter {
    fn accept(&self, path: &NormalizedPath) -> bool {
        self.suffixes
            .iter()
            .any(|suffix| path.as_str().ends_with(suffix.as_str()))
    }
}
