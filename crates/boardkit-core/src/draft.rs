//! Draft state and save-payload reconciliation.
//!
//! A [`Draft`] is the client-side, not-yet-persisted editing state for
//! a board being created or edited. Reconciliation turns the draft's
//! current state into the single atomic save/update payload.

use tracing::debug;

use crate::error::{Error, Result};
use crate::links::extract_links;
use crate::manifest::{AttachmentManifest, ManifestSnapshot};
use crate::models::{Board, BoardData, BoardId, SavePayload};

/// Whether a draft creates a new board or edits an existing one.
///
/// The target id exists exactly when the draft is an edit, so the
/// invariant lives in the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(BoardId),
}

/// The editing state for one authoring session.
///
/// Created when the user opens the authoring view; destroyed on
/// navigation away, successful save, or cancel.
#[derive(Debug, Clone)]
pub struct Draft {
    pub title: String,
    pub body: String,
    pub manifest: AttachmentManifest,
    mode: DraftMode,
}

impl Draft {
    /// Start an empty CREATE session.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            body: String::new(),
            manifest: AttachmentManifest::new(),
            mode: DraftMode::Create,
        }
    }

    /// Start an EDIT session hydrated from a fetched board.
    pub fn from_board(board: &Board) -> Self {
        Self {
            title: board.title.clone(),
            body: board.content.clone(),
            manifest: AttachmentManifest::from_existing(board.attachments.iter().cloned()),
            mode: DraftMode::Edit(board.id),
        }
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    /// Reconcile the draft's current state into a save payload.
    pub fn build_payload(&self) -> Result<SavePayload> {
        build_payload(&self.title, &self.body, self.manifest.snapshot())
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the single save/update payload from title, body, and a
/// manifest snapshot.
///
/// Fails with [`Error::EmptyTitle`] or [`Error::EmptyBody`] when the
/// trimmed field is empty; no other client-side validation happens.
/// Links are extracted from the body in order, duplicates included.
pub fn build_payload(title: &str, body: &str, snapshot: ManifestSnapshot) -> Result<SavePayload> {
    if title.trim().is_empty() {
        return Err(Error::EmptyTitle);
    }
    if body.trim().is_empty() {
        return Err(Error::EmptyBody);
    }

    let links = extract_links(body);
    debug!(
        links = links.len(),
        retained = snapshot.retained_ids.len(),
        staged = snapshot.staged_files.len(),
        "Reconciled draft into save payload"
    );

    Ok(SavePayload {
        board_data: BoardData {
            title: title.to_string(),
            content: body.to_string(),
            links,
            remaining_file_ids: snapshot.retained_ids,
        },
        files: snapshot.staged_files,
    })
}
