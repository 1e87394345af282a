//! Error types for guard-core

/// Result type for guard-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or pooling protected regions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed protected region at byte {position}: {message}")]
    MalformedRegion { position: usize, message: String },

    #[error("Duplicate protected region id '{id}': region ids have to be globally unique")]
    DuplicateRegionId { id: String },
}

impl Error {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::MalformedRegion {
            position,
            message: message.into(),
        }
    }
}
