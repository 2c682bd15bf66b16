//! Error types for boardkit.

use thiserror::Error;

use crate::models::{BoardId, FileId};

/// Result type alias using boardkit's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for boardkit operations.
///
/// Validation variants (`EmptyTitle`, `EmptyBody`, `StagedIndex`) are
/// raised before any network call; transport variants are raised by the
/// server-facing operations and leave draft state intact for retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Draft title is empty after trimming
    #[error("Title must not be empty")]
    EmptyTitle,

    /// Draft body is empty after trimming
    #[error("Content must not be empty")]
    EmptyBody,

    /// Staged file index out of range
    #[error("Staged file index {index} out of range (have {len})")]
    StagedIndex { index: usize, len: usize },

    /// Board not found
    #[error("Board not found: {0}")]
    BoardNotFound(BoardId),

    /// Attachment not found
    #[error("File not found: {0}")]
    FileNotFound(FileId),

    /// The reference is a video hyperlink, not a downloadable binary
    #[error("Video links cannot be downloaded")]
    LinkOnly,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
