//! Download filename recovery.
//!
//! The download endpoint labels the response with a
//! content-disposition header carrying a UTF-8 filename directive
//! (`filename*=UTF-8''<percent-encoded>`). Recovery degrades to the
//! caller's fallback name whenever the directive is absent or
//! malformed; it never fails.

const UTF8_FILENAME_DIRECTIVE: &str = "filename*=utf-8''";

/// Derive the filename to present when materializing a downloaded
/// file.
///
/// Returns the percent-decoded UTF-8 filename directive from the
/// header when present, the fallback otherwise.
pub fn resolve_filename(disposition: Option<&str>, fallback: &str) -> String {
    let Some(header) = disposition else {
        return fallback.to_string();
    };
    let lower = header.to_ascii_lowercase();
    let Some(position) = lower.find(UTF8_FILENAME_DIRECTIVE) else {
        return fallback.to_string();
    };

    // The directive value runs to the next parameter separator.
    let encoded = &header[position + UTF8_FILENAME_DIRECTIVE.len()..];
    let encoded = encoded.split(';').next().unwrap_or(encoded).trim();
    if encoded.is_empty() {
        return fallback.to_string();
    }

    match urlencoding::decode(encoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => fallback.to_string(),
    }
}

/// Last segment of a slash-separated path ("a/b/c.txt" -> "c.txt").
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_utf8_directive() {
        let header = "attachment; filename*=UTF-8''na%C3%AFve.pdf";
        assert_eq!(resolve_filename(Some(header), "x.pdf"), "naïve.pdf");
    }

    #[test]
    fn test_absent_header_returns_fallback() {
        assert_eq!(resolve_filename(None, "x.pdf"), "x.pdf");
    }

    #[test]
    fn test_header_without_directive_returns_fallback() {
        let header = "attachment; filename=\"plain.pdf\"";
        assert_eq!(resolve_filename(Some(header), "x.pdf"), "x.pdf");
    }

    #[test]
    fn test_directive_match_is_case_insensitive() {
        let header = "attachment; FILENAME*=utf-8''report.pdf";
        assert_eq!(resolve_filename(Some(header), "x.pdf"), "report.pdf");
    }

    #[test]
    fn test_directive_stops_at_parameter_separator() {
        let header = "attachment; filename*=UTF-8''report.pdf; size=42";
        assert_eq!(resolve_filename(Some(header), "x.pdf"), "report.pdf");
    }

    #[test]
    fn test_malformed_percent_encoding_returns_fallback() {
        // Truncated escape decodes to invalid UTF-8.
        let header = "attachment; filename*=UTF-8''bad%C3";
        assert_eq!(resolve_filename(Some(header), "x.pdf"), "x.pdf");
    }

    #[test]
    fn test_empty_directive_returns_fallback() {
        let header = "attachment; filename*=UTF-8''";
        assert_eq!(resolve_filename(Some(header), "x.pdf"), "x.pdf");
    }

    #[test]
    fn test_korean_filename_roundtrip() {
        let header = "attachment; filename*=UTF-8''%EB%B3%B4%EA%B3%A0%EC%84%9C.pdf";
        assert_eq!(resolve_filename(Some(header), "x.pdf"), "보고서.pdf");
    }

    #[test]
    fn test_file_name_from_path() {
        assert_eq!(file_name_from_path("uploads/2026/photo.png"), "photo.png");
        assert_eq!(file_name_from_path("photo.png"), "photo.png");
        assert_eq!(file_name_from_path(""), "");
    }
}
