//! Error types for guard-support

use guard_fs::NormalizedPath;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Region error: {0}")]
    Core(#[from] guard_core::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] guard_fs::Error),

    #[error("Not a directory: {path}")]
    NotADirectory { path: NormalizedPath },

    #[error("At least one parser has to be added before reading")]
    NoParsers,

    #[error("File extension list cannot be empty")]
    EmptyExtensions,
}
