//! Markdown inline-link extraction.
//!
//! A small left-to-right scan over `[label](url)` pairs. The label may
//! not contain `]`, the URL runs to the first unescaped `)`, and
//! malformed sequences simply fail to match. Kept as a hand-rolled
//! scanner rather than a regex so the escape rule is explicit.

/// Extract every URL referenced via markdown inline-link syntax,
/// in order of appearance. Duplicates are preserved; no URL
/// validation is performed.
///
/// This function is pure and total: malformed input yields fewer
/// matches, never an error.
pub fn extract_links(body: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut rest = body;
    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        match scan_link(after_open) {
            Some((url, consumed)) => {
                links.push(url.to_string());
                rest = &after_open[consumed..];
            }
            // Failed match: resume at the character after the `[`.
            None => rest = after_open,
        }
    }
    links
}

/// Try to match `label](url)` at the start of `s`. Returns the URL and
/// the number of bytes consumed up to and including the closing `)`.
fn scan_link(s: &str) -> Option<(&str, usize)> {
    let close = s.find(']')?;
    if close == 0 {
        // Empty label.
        return None;
    }
    if !s[close + 1..].starts_with('(') {
        return None;
    }
    let url_start = close + 2;
    let url = &s[url_start..];
    let mut escaped = false;
    for (i, c) in url.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ')' => {
                if i == 0 {
                    // Empty URL.
                    return None;
                }
                return Some((&url[..i], url_start + i + 1));
            }
            _ => {}
        }
    }
    // Unterminated URL segment.
    None
}
