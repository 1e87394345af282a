//! Traversal and merge orchestration for RegionGuard
//!
//! Wires parsers to path filters, drives the pool-building pass over
//! previously generated sources, and merges pooled regions into freshly
//! generated output.

pub mod builder;
pub mod error;
pub mod logging;
pub mod support;

pub use builder::{PoolReader, SupportBuilder};
pub use error::{Error, Result};
pub use support::RegionSupport;
