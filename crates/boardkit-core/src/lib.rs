//! # boardkit-core
//!
//! Core types and logic for the boardkit client library: draft
//! reconciliation, the attachment manifest, markdown link extraction,
//! attachment display classification, and download filename recovery.
//!
//! Everything in this crate is pure, single-writer state — network
//! I/O lives in `boardkit-client`.

pub mod defaults;
pub mod display;
pub mod download;
pub mod draft;
pub mod error;
pub mod links;
pub mod manifest;
pub mod models;

// Re-export commonly used types at crate root
pub use display::{classify, file_type_for_mime, format_file_size, icon_category, AttachmentDisplay};
pub use download::{file_name_from_path, resolve_filename};
pub use draft::{build_payload, Draft, DraftMode};
pub use error::{Error, Result};
pub use links::extract_links;
pub use manifest::{AttachmentManifest, ManifestSnapshot};
pub use models::*;
