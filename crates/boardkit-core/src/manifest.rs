//! Attachment manifest for one editing session.
//!
//! Tracks the retained subset of pre-existing server attachments plus
//! newly staged local files. Pure state: the manifest never performs
//! network I/O. Retained ids and staged files live in disjoint
//! identifier spaces (server ids vs. local handles), so no collision
//! check is needed.

use crate::error::{Error, Result};
use crate::models::{Attachment, FileId, StagedFile};

/// The set of attachments for one draft: retained server attachments
/// (unique by id, order preserved) plus staged local files (insertion
/// order preserved).
///
/// Removal from `retained` is one-way per session: a dropped id is
/// never re-added implicitly.
#[derive(Debug, Clone, Default)]
pub struct AttachmentManifest {
    retained: Vec<Attachment>,
    staged: Vec<StagedFile>,
}

/// The reconciliation input produced by [`AttachmentManifest::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSnapshot {
    pub retained_ids: Vec<FileId>,
    pub staged_files: Vec<StagedFile>,
}

impl ManifestSnapshot {
    /// An empty snapshot, as produced by a fresh CREATE session.
    pub fn empty() -> Self {
        Self {
            retained_ids: Vec::new(),
            staged_files: Vec::new(),
        }
    }
}

impl AttachmentManifest {
    /// Create an empty manifest for a CREATE session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a manifest from a fetched board's attachments (EDIT
    /// session). Duplicate ids keep the first occurrence.
    pub fn from_existing(attachments: impl IntoIterator<Item = Attachment>) -> Self {
        let mut retained: Vec<Attachment> = Vec::new();
        for attachment in attachments {
            if !retained.iter().any(|a| a.id == attachment.id) {
                retained.push(attachment);
            }
        }
        Self {
            retained,
            staged: Vec::new(),
        }
    }

    /// Append locally selected files, preserving arrival order.
    ///
    /// No size or type validation happens here; the server is the
    /// authority on what it accepts.
    pub fn stage_files(&mut self, files: impl IntoIterator<Item = StagedFile>) {
        self.staged.extend(files);
    }

    /// Remove exactly one staged file by position.
    ///
    /// Returns [`Error::StagedIndex`] and leaves state untouched when
    /// the index is out of bounds.
    pub fn unstage_at(&mut self, index: usize) -> Result<StagedFile> {
        if index >= self.staged.len() {
            return Err(Error::StagedIndex {
                index,
                len: self.staged.len(),
            });
        }
        Ok(self.staged.remove(index))
    }

    /// Remove the retained attachment with the given id, if present.
    /// Idempotent: a second call with the same id is a no-op.
    pub fn drop_retained(&mut self, id: FileId) {
        self.retained.retain(|a| a.id != id);
    }

    /// Retained server attachments, in order.
    pub fn retained(&self) -> &[Attachment] {
        &self.retained
    }

    /// Staged local files, in insertion order.
    pub fn staged(&self) -> &[StagedFile] {
        &self.staged
    }

    /// Capture the reconciliation input. The manifest itself is left
    /// intact so a failed save can be retried.
    pub fn snapshot(&self) -> ManifestSnapshot {
        ManifestSnapshot {
            retained_ids: self.retained.iter().map(|a| a.id).collect(),
            staged_files: self.staged.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileType;

    fn attachment(id: FileId) -> Attachment {
        Attachment {
            id,
            original_file_name: format!("file-{}.png", id),
            file_type: FileType::Image,
            file_size: 100,
        }
    }

    fn staged(name: &str) -> StagedFile {
        StagedFile::new(name, "text/plain", b"data".to_vec())
    }

    #[test]
    fn test_from_existing_preserves_order() {
        let manifest = AttachmentManifest::from_existing([attachment(3), attachment(1)]);
        let ids: Vec<_> = manifest.retained().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(manifest.staged().is_empty());
    }

    #[test]
    fn test_from_existing_dedups_by_id() {
        let manifest = AttachmentManifest::from_existing([attachment(1), attachment(1)]);
        assert_eq!(manifest.retained().len(), 1);
    }

    #[test]
    fn test_drop_retained_is_idempotent() {
        let mut manifest = AttachmentManifest::from_existing([attachment(1), attachment(2)]);
        manifest.drop_retained(1);
        let once: Vec<_> = manifest.retained().iter().map(|a| a.id).collect();
        manifest.drop_retained(1);
        let twice: Vec<_> = manifest.retained().iter().map(|a| a.id).collect();
        assert_eq!(once, vec![2]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_drop_retained_absent_id_is_noop() {
        let mut manifest = AttachmentManifest::from_existing([attachment(1)]);
        manifest.drop_retained(99);
        assert_eq!(manifest.retained().len(), 1);
    }

    #[test]
    fn test_stage_files_preserves_arrival_order() {
        let mut manifest = AttachmentManifest::new();
        manifest.stage_files([staged("a"), staged("b")]);
        manifest.stage_files([staged("c")]);
        let names: Vec<_> = manifest.staged().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unstage_in_reverse_order_empties_staged() {
        let mut manifest = AttachmentManifest::new();
        manifest.stage_files([staged("a"), staged("b"), staged("c")]);
        for index in (0..3).rev() {
            manifest.unstage_at(index).unwrap();
        }
        assert!(manifest.staged().is_empty());
    }

    #[test]
    fn test_unstage_returns_removed_file() {
        let mut manifest = AttachmentManifest::new();
        manifest.stage_files([staged("a"), staged("b")]);
        let removed = manifest.unstage_at(0).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(manifest.staged()[0].name, "b");
    }

    #[test]
    fn test_unstage_out_of_bounds_is_error_and_noop() {
        let mut manifest = AttachmentManifest::new();
        manifest.stage_files([staged("a")]);
        let err = manifest.unstage_at(5).unwrap_err();
        assert!(matches!(err, Error::StagedIndex { index: 5, len: 1 }));
        assert_eq!(manifest.staged().len(), 1);
    }

    #[test]
    fn test_snapshot_captures_both_subsets() {
        let mut manifest = AttachmentManifest::from_existing([attachment(7)]);
        manifest.stage_files([staged("new")]);
        let snap = manifest.snapshot();
        assert_eq!(snap.retained_ids, vec![7]);
        assert_eq!(snap.staged_files.len(), 1);
        // Manifest survives the snapshot for retry.
        assert_eq!(manifest.retained().len(), 1);
        assert_eq!(manifest.staged().len(), 1);
    }
}
