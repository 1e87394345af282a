//! Two-state builder for [`RegionSupport`]
//!
//! [`SupportBuilder`] is the configuring state: parsers and filters may be
//! added. [`PoolReader`] is the reading state: roots are traversed and the
//! region pool fills up. The transition is one-way, so adding a parser after
//! the first read is unrepresentable rather than a guarded runtime error.

use tracing::{debug, warn};

use guard_core::{RegionParser, RegionPool};
use guard_fs::{ExtensionFilter, FileSystemReader, NormalizedPath, PathFilter};

use crate::error::{Error, Result};
use crate::support::RegionSupport;

/// A parser together with the filter selecting the files it applies to.
pub(crate) struct ParserBinding {
    filter: Option<Box<dyn PathFilter>>,
    pub(crate) parser: RegionParser,
}

impl ParserBinding {
    pub(crate) fn accepts(&self, path: &NormalizedPath) -> bool {
        self.filter.as_deref().is_none_or(|f| f.accept(path))
    }
}

/// Configuring state: collect (filter, parser) bindings.
pub struct SupportBuilder {
    reader: Box<dyn FileSystemReader>,
    bindings: Vec<ParserBinding>,
}

impl SupportBuilder {
    pub fn new(reader: Box<dyn FileSystemReader>) -> Self {
        Self {
            reader,
            bindings: Vec::new(),
        }
    }

    /// Add a parser applying to every file.
    pub fn add_parser(mut self, parser: RegionParser) -> Self {
        self.bindings.push(ParserBinding {
            filter: None,
            parser,
        });
        self
    }

    /// Add a parser applying to files ending in one of `suffixes`.
    pub fn add_parser_for_extensions(
        self,
        parser: RegionParser,
        suffixes: &[&str],
    ) -> Result<Self> {
        if suffixes.is_empty() {
            return Err(Error::EmptyExtensions);
        }
        Ok(self.add_parser_with_filter(parser, Box::new(ExtensionFilter::new(suffixes.iter().copied()))))
    }

    /// Add a parser applying to files accepted by `filter`.
    pub fn add_parser_with_filter(
        mut self,
        parser: RegionParser,
        filter: Box<dyn PathFilter>,
    ) -> Self {
        self.bindings.push(ParserBinding {
            filter: Some(filter),
            parser,
        });
        self
    }

    /// Transition to the reading state. At least one parser must have been
    /// added.
    pub fn reading(self) -> Result<PoolReader> {
        if self.bindings.is_empty() {
            return Err(Error::NoParsers);
        }
        Ok(PoolReader {
            reader: self.reader,
            bindings: self.bindings,
            pool: RegionPool::new(),
            visited: Vec::new(),
        })
    }
}

/// Reading state: traverse roots of previously generated sources and pool
/// their protected regions.
pub struct PoolReader {
    reader: Box<dyn FileSystemReader>,
    bindings: Vec<ParserBinding>,
    pool: RegionPool,
    visited: Vec<NormalizedPath>,
}

impl std::fmt::Debug for PoolReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoolReader")
            .field("bindings", &self.bindings.len())
            .field("pool", &self.pool)
            .field("visited", &self.visited)
            .finish_non_exhaustive()
    }
}

impl PoolReader {
    /// Read every file under `path` with every parser whose filter accepts it.
    ///
    /// A missing root is skipped; an existing non-directory root is a
    /// configuration error; a root beneath an already visited one is skipped
    /// with a warning.
    pub fn read(self, path: impl Into<NormalizedPath>) -> Result<Self> {
        self.read_inner(&path.into(), None)
    }

    /// Like [`read`](Self::read), with `filter` pruning the traversal itself.
    pub fn read_filtered(
        self,
        path: impl Into<NormalizedPath>,
        filter: &dyn PathFilter,
    ) -> Result<Self> {
        self.read_inner(&path.into(), Some(filter))
    }

    fn read_inner(mut self, path: &NormalizedPath, filter: Option<&dyn PathFilter>) -> Result<Self> {
        if !self.reader.exists(path) {
            debug!(%path, "skipping missing read root");
            return Ok(self);
        }
        if !self.reader.is_directory(path) {
            return Err(Error::NotADirectory { path: path.clone() });
        }
        let canonical = self.reader.canonical_path(path)?;
        if self.visited.iter().any(|root| canonical.starts_with(root)) {
            warn!(%path, "skipping already visited path");
            return Ok(self);
        }

        for file in self.reader.list_files(path, filter)? {
            let accepting: Vec<&ParserBinding> = self
                .bindings
                .iter()
                .filter(|binding| binding.accepts(&file))
                .collect();
            if accepting.is_empty() {
                continue;
            }
            let input = self.reader.read_file(&file)?;
            let documents = accepting
                .iter()
                .map(|binding| binding.parser.parse(&input))
                .collect::<guard_core::Result<Vec<_>>>()?;
            self.pool.ingest_file(&documents)?;
        }

        self.visited.push(canonical);
        Ok(self)
    }

    /// Finish reading and produce the merge-ready support.
    pub fn build(self) -> RegionSupport {
        RegionSupport::new(self.reader, self.bindings, self.pool)
    }
}
