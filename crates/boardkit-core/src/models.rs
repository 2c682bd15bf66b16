//! Core data models for boardkit.
//!
//! These types are shared across the boardkit crates and mirror the
//! board API's wire representation (camelCase JSON fields).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side board identifier.
pub type BoardId = i64;

/// Server-side attachment identifier.
pub type FileId = i64;

// =============================================================================
// ATTACHMENT TYPES
// =============================================================================

/// Declared type of a server-known attachment.
///
/// Unknown wire values decode to [`FileType::Other`] so a server-side
/// addition never breaks deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileType {
    Image,
    Pdf,
    Video,
    #[default]
    #[serde(other)]
    Other,
}

/// A server-known binary resource associated with a board.
///
/// Immutable once fetched; the client holds a read-only copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: FileId,
    pub original_file_name: String,
    pub file_type: FileType,
    /// Size in bytes as reported by the server.
    pub file_size: u64,
}

/// A locally selected file that has not been uploaded yet.
///
/// Owned exclusively by one editing session; discarded on successful
/// save or when the session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl StagedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

// =============================================================================
// BOARD READ MODELS
// =============================================================================

/// A persisted board post (server entity, read model only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    /// Markdown body text.
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub links: Vec<String>,
}

/// One board entry as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub board_id: BoardId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// One page of board summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPage {
    pub content: Vec<BoardSummary>,
    pub total_pages: u32,
    /// True when this is the final page.
    pub last: bool,
}

// =============================================================================
// SAVE PAYLOAD
// =============================================================================

/// The JSON metadata part of a save/update request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardData {
    pub title: String,
    pub content: String,
    /// URLs referenced in the body, in order of appearance.
    pub links: Vec<String>,
    /// Ids of pre-existing attachments the board should keep.
    pub remaining_file_ids: Vec<FileId>,
}

/// A fully reconciled save/update request.
///
/// The metadata travels as one JSON part; each staged file is an
/// individual binary part in staged order. Order is significant: the
/// server associates new attachments with the request in sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SavePayload {
    pub board_data: BoardData,
    pub files: Vec<StagedFile>,
}
