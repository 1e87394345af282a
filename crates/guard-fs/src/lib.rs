//! Filesystem reader capability for RegionGuard
//!
//! The core engine never touches the filesystem itself; traversal and file
//! reads go through the [`FileSystemReader`] capability so hosts can swap in
//! their own storage.

pub mod error;
pub mod filter;
pub mod path;
pub mod reader;

pub use error::{Error, Result};
pub use filter::{AcceptAll, ExtensionFilter, PathFilter};
pub use path::NormalizedPath;
pub use reader::{FileSystemReader, NativeReader};
