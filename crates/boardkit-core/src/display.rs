//! Attachment display classification and size formatting.
//!
//! Turns a stored attachment reference into the pieces the UI needs:
//! an icon category and a human-readable size string. Also maps MIME
//! types of staged files onto the server's file-type enum.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{Attachment, FileType};

/// MIME type → declared file type, matching the server's accepted set.
static MIME_FILE_TYPES: Lazy<HashMap<&'static str, FileType>> = Lazy::new(|| {
    HashMap::from([
        // Images
        ("image/jpeg", FileType::Image),
        ("image/png", FileType::Image),
        ("image/gif", FileType::Image),
        ("image/webp", FileType::Image),
        // PDF
        ("application/pdf", FileType::Pdf),
        // Video
        ("video/mp4", FileType::Video),
        ("video/quicktime", FileType::Video),
        ("video/x-msvideo", FileType::Video),
        // Other documents
        ("application/msword", FileType::Other),
        (
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            FileType::Other,
        ),
        ("application/vnd.ms-excel", FileType::Other),
        (
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            FileType::Other,
        ),
        ("application/vnd.ms-powerpoint", FileType::Other),
        (
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            FileType::Other,
        ),
        ("text/plain", FileType::Other),
        ("application/zip", FileType::Other),
        ("application/x-rar-compressed", FileType::Other),
        ("application/x-7z-compressed", FileType::Other),
    ])
});

/// Size unit labels, one per power of 1024.
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Display information for one attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentDisplay {
    /// Icon category key ("image", "document-pdf", "video", "generic").
    pub category: &'static str,
    /// Human-readable size, e.g. "1.5 KB".
    pub size_label: String,
}

/// Derive the display category and formatted size for an attachment.
pub fn classify(attachment: &Attachment) -> AttachmentDisplay {
    AttachmentDisplay {
        category: icon_category(attachment.file_type),
        size_label: format_file_size(attachment.file_size),
    }
}

/// Icon category for a declared file type. Total: anything the server
/// reports outside the known set lands on "generic".
pub fn icon_category(file_type: FileType) -> &'static str {
    match file_type {
        FileType::Image => "image",
        FileType::Pdf => "document-pdf",
        FileType::Video => "video",
        FileType::Other => "generic",
    }
}

/// Declared file type for a staged file's MIME type. Total lookup with
/// an explicit default: unlisted MIME types are `Other`.
pub fn file_type_for_mime(mime_type: &str) -> FileType {
    MIME_FILE_TYPES
        .get(mime_type)
        .copied()
        .unwrap_or(FileType::Other)
}

/// Format a byte count with the largest unit from {Bytes, KB, MB, GB},
/// rounded to 2 decimal places with trailing zeros trimmed.
///
/// `0 -> "0 Bytes"`, `1024 -> "1 KB"`, `1536 -> "1.5 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).log(1024.0).floor() as usize).min(SIZE_UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let mut scaled = format!("{:.2}", value);
    // Drop trailing zeros so 1.00 renders as "1" and 1.50 as "1.5".
    while scaled.ends_with('0') {
        scaled.pop();
    }
    if scaled.ends_with('.') {
        scaled.pop();
    }
    format!("{} {}", scaled, SIZE_UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_sub_kilobyte() {
        assert_eq!(format_file_size(512), "512 Bytes");
    }

    #[test]
    fn test_format_exact_kilobyte() {
        assert_eq!(format_file_size(1024), "1 KB");
    }

    #[test]
    fn test_format_fractional_kilobyte() {
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_rounds_to_two_decimals() {
        // 1400 / 1024 = 1.3671875 -> "1.37 KB"
        assert_eq!(format_file_size(1400), "1.37 KB");
    }

    #[test]
    fn test_format_megabytes_and_gigabytes() {
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_format_clamps_to_largest_unit() {
        // Beyond the GB power the table clamps rather than panics.
        assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_icon_categories() {
        assert_eq!(icon_category(FileType::Image), "image");
        assert_eq!(icon_category(FileType::Pdf), "document-pdf");
        assert_eq!(icon_category(FileType::Video), "video");
        assert_eq!(icon_category(FileType::Other), "generic");
    }

    #[test]
    fn test_unknown_wire_file_type_maps_to_generic() {
        let file_type: FileType = serde_json::from_str("\"unexpected\"").unwrap();
        assert_eq!(icon_category(file_type), "generic");
    }

    #[test]
    fn test_mime_lookup() {
        assert_eq!(file_type_for_mime("image/png"), FileType::Image);
        assert_eq!(file_type_for_mime("application/pdf"), FileType::Pdf);
        assert_eq!(file_type_for_mime("video/mp4"), FileType::Video);
        assert_eq!(file_type_for_mime("application/zip"), FileType::Other);
    }

    #[test]
    fn test_mime_lookup_default_is_other() {
        assert_eq!(file_type_for_mime("application/x-unheard-of"), FileType::Other);
        assert_eq!(file_type_for_mime(""), FileType::Other);
    }

    #[test]
    fn test_classify_combines_category_and_size() {
        let attachment = Attachment {
            id: 1,
            original_file_name: "clip.mp4".to_string(),
            file_type: FileType::Video,
            file_size: 1536,
        };
        let display = classify(&attachment);
        assert_eq!(display.category, "video");
        assert_eq!(display.size_label, "1.5 KB");
    }
}
