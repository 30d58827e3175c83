use thiserror::Error;

pub type SyncResult<T> = Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WalkDir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Path error: {0}")]
    Path(String),

    /// Missing or unparsable configuration. Raised before any network activity.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry API unreachable, or the project has no versions.
    #[error("Registry error: {0}")]
    Registry(String),

    /// Package archive could not be fetched or extracted.
    #[error("Archive error: {0}")]
    Archive(String),

    /// The resolved version ships no package archive artifact.
    #[error("No {0} file found in version")]
    MissingArchive(String),

    /// Manifest index document is absent or malformed.
    #[error("Manifest error: {0}")]
    Manifest(String),

    /// Ownership fixup failed. Callers log this as a warning.
    #[error("Permission error: {0}")]
    Permission(String),
}

/// Failure of a single verified fetch.
///
/// These are recoverable: the download coordinator counts them per file and
/// never turns them into a [`SyncError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("size mismatch (expected {expected} bytes, got {actual})")]
    SizeMismatch { expected: u64, actual: u64 },

    #[error("{algorithm} hash mismatch (expected {expected}, got {actual})")]
    HashMismatch {
        algorithm: String,
        expected: String,
        actual: String,
    },

    /// The verified payload could not be persisted.
    #[error("failed to write {path}: {message}")]
    Write { path: String, message: String },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        FetchError::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
