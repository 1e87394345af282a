//! Region pool built from previously generated sources

use std::collections::HashMap;

use crate::document::{Document, MarkedRegion};
use crate::error::{Error, Result};

/// Mapping from region id to its captured region, accumulated while
/// scanning the corpus of previously generated files.
///
/// Ids are unique across the whole corpus, not merely per file. The pool is
/// an explicit value owned by one build run: populated during traversal,
/// read-only during merging, discarded afterwards.
#[derive(Debug, Clone, Default)]
pub struct RegionPool {
    regions: HashMap<String, MarkedRegion>,
}

impl RegionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest every marked region of one file's parse results.
    ///
    /// `documents` holds one document per parser that accepted the file.
    /// The same region surfacing from several of those parsers is redundant
    /// coverage and recorded once; the same id carrying *different* content,
    /// or an id already pooled from another file, is a fatal
    /// [`Error::DuplicateRegionId`].
    pub fn ingest_file<'a>(
        &mut self,
        documents: impl IntoIterator<Item = &'a Document>,
    ) -> Result<()> {
        let mut seen: HashMap<&str, &MarkedRegion> = HashMap::new();
        for document in documents {
            for region in document.regions() {
                if let Some(first) = seen.get(region.id.as_str()) {
                    if first.content == region.content {
                        continue;
                    }
                    return Err(Error::DuplicateRegionId {
                        id: region.id.clone(),
                    });
                }
                if self.regions.contains_key(&region.id) {
                    return Err(Error::DuplicateRegionId {
                        id: region.id.clone(),
                    });
                }
                seen.insert(region.id.as_str(), region);
            }
        }
        for (_, region) in seen {
            self.regions.insert(region.id.clone(), region.clone());
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&MarkedRegion> {
        self.regions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
