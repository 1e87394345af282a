//! Protected region parsing and merging for RegionGuard
//!
//! Recognizes comment-delimited protected regions in generated sources and
//! splices previously captured content back into regenerated output, keyed
//! by the stable id carried in each region's marker comment.

pub mod document;
pub mod error;
pub mod lexicon;
pub mod merge;
pub mod oracle;
pub mod parser;
pub mod pool;

pub use document::{Document, MarkedRegion, Segment};
pub use error::{Error, Result};
pub use lexicon::{CommentLexicon, CommentSyntax};
pub use merge::{fill_in, merge};
pub use oracle::{DefaultOracle, Marker, RegionOracle};
pub use parser::RegionParser;
pub use pool::RegionPool;
