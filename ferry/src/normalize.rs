//! Script result normalization.
//!
//! Raw automation output is messy: trailing newlines, the scripting
//! engine's `missing value` sentinel arriving as literal text, and
//! `file://` URLs from accessibility attributes. This module folds all of
//! that into either a plain path string or the empty string, which is the
//! single "no path" signal.

use url::Url;

/// The scripting engine's null sentinel, as it appears in captured output.
const MISSING_VALUE: &str = "missing value";

/// Normalize a raw script result into a plain path string.
///
/// Rules, in order:
/// 1. Surrounding whitespace is trimmed.
/// 2. An empty result or the literal `missing value` becomes `""`.
/// 3. A `file://` URL is decoded to its filesystem path; if it cannot be
///    parsed or converted, the trimmed text is returned unchanged.
/// 4. Anything else is returned trimmed, verbatim.
///
/// The function never fails. `""` is the only "no path" signal, and the
/// caller decides whether that is an error. Applying the function twice
/// gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use ferry::normalize::normalize_result;
///
/// assert_eq!(normalize_result("  /Users/me/notes.txt\n"), "/Users/me/notes.txt");
/// assert_eq!(normalize_result("missing value"), "");
/// assert_eq!(
///     normalize_result("file:///Users/me/My%20Report.pdf"),
///     "/Users/me/My Report.pdf"
/// );
/// ```
#[must_use]
pub fn normalize_result(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == MISSING_VALUE {
        return String::new();
    }

    if trimmed.starts_with("file://") {
        if let Some(path) = decode_file_url(trimmed) {
            return path;
        }
    }

    trimmed.to_string()
}

/// Decode a `file://` URL into a filesystem path string.
///
/// Returns `None` when the URL does not parse, does not convert to a local
/// path (for example a remote host), or the decoded path is not valid
/// UTF-8. Callers fall back to the raw text in that case.
fn decode_file_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let path = parsed.to_file_path().ok()?;
    path.into_os_string().into_string().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_result("  /Users/me/file.txt\n"), "/Users/me/file.txt");
        assert_eq!(normalize_result("\t/tmp\t"), "/tmp");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize_result(""), "");
        assert_eq!(normalize_result("   "), "");
        assert_eq!(normalize_result("\n\n"), "");
    }

    #[test]
    fn test_missing_value_sentinel() {
        assert_eq!(normalize_result("missing value"), "");
        assert_eq!(normalize_result("  missing value\n"), "");
    }

    #[test]
    fn test_sentinel_is_exact() {
        // The engine emits the sentinel in lowercase; anything else is a
        // real result.
        assert_eq!(normalize_result("Missing Value"), "Missing Value");
        assert_eq!(normalize_result("missing value extra"), "missing value extra");
    }

    #[test]
    fn test_file_url_decoding() {
        assert_eq!(
            normalize_result("file:///Users/me/Documents/report.pdf"),
            "/Users/me/Documents/report.pdf"
        );
    }

    #[test]
    fn test_file_url_percent_escapes() {
        assert_eq!(
            normalize_result("file:///Users/me/My%20Report.pdf"),
            "/Users/me/My Report.pdf"
        );
        assert_eq!(
            normalize_result("file:///Users/me/r%C3%A9sum%C3%A9.pdf"),
            "/Users/me/résumé.pdf"
        );
    }

    #[test]
    fn test_file_url_with_trailing_newline() {
        assert_eq!(
            normalize_result("file:///Users/me/a.pdf\n"),
            "/Users/me/a.pdf"
        );
    }

    #[test]
    fn test_remote_file_url_left_alone() {
        // A file URL with a remote host has no local path; the text passes
        // through trimmed.
        assert_eq!(
            normalize_result("file://fileserver/share/doc.pdf"),
            "file://fileserver/share/doc.pdf"
        );
    }

    #[test]
    fn test_non_file_url_passes_through() {
        let cloud = "https://contoso.sharepoint.com/sites/x/Documents/a.docx";
        assert_eq!(normalize_result(cloud), cloud);
    }

    #[test]
    fn test_plain_path_untouched() {
        assert_eq!(normalize_result("/Users/me/Projects"), "/Users/me/Projects");
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        assert_eq!(
            normalize_result(" /Users/me/My Report.pdf "),
            "/Users/me/My Report.pdf"
        );
    }

    #[test]
    fn test_idempotent_on_decoded_url() {
        let once = normalize_result("file:///Users/me/My%20Report.pdf");
        assert_eq!(normalize_result(&once), once);
    }
}

// Property-based tests for normalization
#[cfg(test)]
#[allow(unused_doc_comments)] // proptest! macro doesn't support doc comments
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn unix_path_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9_. -]{1,12}", 1..=6)
            .prop_map(|parts| format!("/{}", parts.join("/")))
    }

    proptest! {
        /// Normalization never panics, whatever the script produced.
        #[test]
        fn never_panics(s in "\\PC*") {
            let _ = normalize_result(&s);
        }

        /// Applying the function twice equals applying it once.
        #[test]
        fn idempotent(s in "\\PC*") {
            let once = normalize_result(&s);
            prop_assert_eq!(normalize_result(&once), once.clone());
        }

        /// Output never carries surrounding whitespace.
        #[test]
        fn output_is_trimmed(s in "\\PC*") {
            let out = normalize_result(&s);
            prop_assert_eq!(out.trim(), out.as_str());
        }

        /// Plain absolute paths survive unchanged apart from trimming.
        #[test]
        fn plain_paths_unchanged(p in unix_path_strategy()) {
            let trimmed = p.trim().to_string();
            prop_assert_eq!(normalize_result(&p), trimmed);
        }
    }
}
