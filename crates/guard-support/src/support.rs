//! Merge orchestration over configured parsers

use guard_core::{RegionPool, fill_in, merge};
use guard_fs::{FileSystemReader, NormalizedPath};

use crate::builder::ParserBinding;
use crate::error::Result;

/// Merge-ready support: a populated region pool plus the configured
/// (filter, parser) bindings. Built once per generator run via
/// [`SupportBuilder`](crate::SupportBuilder); the pool is read-only from
/// here on.
pub struct RegionSupport {
    reader: Box<dyn FileSystemReader>,
    bindings: Vec<ParserBinding>,
    pool: RegionPool,
}

impl RegionSupport {
    pub(crate) fn new(
        reader: Box<dyn FileSystemReader>,
        bindings: Vec<ParserBinding>,
        pool: RegionPool,
    ) -> Self {
        Self {
            reader,
            bindings,
            pool,
        }
    }

    pub fn pool(&self) -> &RegionPool {
        &self.pool
    }

    /// Merge previously captured protected regions into the freshly
    /// generated `contents` for the file at `path`.
    ///
    /// Every parser whose filter accepts `path` takes a turn, each one
    /// re-parsing the output of the previous step, so regions resolved by an
    /// earlier parser are never misread as markers by a later one. Forward
    /// parsers substitute from the pool; inverse parsers read the previously
    /// generated file itself (skipped when it does not exist yet). The
    /// caller writes the returned text.
    pub fn merge_regions(&self, path: &NormalizedPath, contents: &str) -> Result<String> {
        let mut text = contents.to_string();
        for binding in &self.bindings {
            if !binding.accepts(path) {
                continue;
            }
            let document = binding.parser.parse(&text)?;
            if binding.parser.is_inverse() {
                if !self.reader.exists(path) {
                    continue;
                }
                let previous = self.reader.read_file(path)?;
                let source = binding.parser.parse(&previous)?;
                text = fill_in(&document, &source);
            } else {
                text = merge(&document, &self.pool);
            }
        }
        Ok(text)
    }
}
