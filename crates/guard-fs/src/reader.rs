//! Filesystem reader capability

use std::fs;

use tracing::debug;

use crate::error::{Error, Result};
use crate::filter::PathFilter;
use crate::path::NormalizedPath;

/// Read-only view of a file tree.
///
/// The merge core only ever calls [`read_file`](Self::read_file) on paths
/// previously vetted as files by [`list_files`](Self::list_files).
pub trait FileSystemReader {
    fn exists(&self, path: &NormalizedPath) -> bool;

    fn is_directory(&self, path: &NormalizedPath) -> bool;

    /// All files beneath `path`, recursively, in traversal order. Directories
    /// themselves are never yielded; `filter` (when given) prunes files only.
    fn list_files(
        &self,
        path: &NormalizedPath,
        filter: Option<&dyn PathFilter>,
    ) -> Result<Vec<NormalizedPath>>;

    fn read_file(&self, path: &NormalizedPath) -> Result<String>;

    /// Canonical absolute form of `path`, for visited-path bookkeeping.
    fn canonical_path(&self, path: &NormalizedPath) -> Result<NormalizedPath>;
}

/// [`FileSystemReader`] over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeReader;

impl NativeReader {
    pub fn new() -> Self {
        Self
    }

    fn walk(
        &self,
        dir: &NormalizedPath,
        filter: Option<&dyn PathFilter>,
        out: &mut Vec<NormalizedPath>,
    ) -> Result<()> {
        let entries = fs::read_dir(dir.to_native()).map_err(|e| Error::io(dir.to_native(), e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir.to_native(), e))?;
            let path = NormalizedPath::new(entry.path());
            let file_type = entry
                .file_type()
                .map_err(|e| Error::io(entry.path(), e))?;
            if file_type.is_dir() {
                self.walk(&path, filter, out)?;
            } else if file_type.is_file()
                && filter.is_none_or(|f| f.accept(&path))
            {
                out.push(path);
            }
        }
        Ok(())
    }
}

impl FileSystemReader for NativeReader {
    fn exists(&self, path: &NormalizedPath) -> bool {
        path.to_native().exists()
    }

    fn is_directory(&self, path: &NormalizedPath) -> bool {
        path.to_native().is_dir()
    }

    fn list_files(
        &self,
        path: &NormalizedPath,
        filter: Option<&dyn PathFilter>,
    ) -> Result<Vec<NormalizedPath>> {
        let mut files = Vec::new();
        self.walk(path, filter, &mut files)?;
        debug!(root = %path, count = files.len(), "listed files");
        Ok(files)
    }

    fn read_file(&self, path: &NormalizedPath) -> Result<String> {
        fs::read_to_string(path.to_native()).map_err(|e| Error::io(path.to_native(), e))
    }

    fn canonical_path(&self, path: &NormalizedPath) -> Result<NormalizedPath> {
        dunce::canonicalize(path.to_native())
            .map(NormalizedPath::new)
            .map_err(|e| Error::io(path.to_native(), e))
    }
}
