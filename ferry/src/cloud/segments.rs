//! Decoding and slicing of sharing-URL path segments.

use std::sync::OnceLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

/// Marker segment that separates site structure from the document library.
const LIBRARY_MARKER: &str = "documents";

/// Upper bound on percent-decode passes for a single segment.
///
/// Sharing links produced by intermediate services are sometimes
/// double-encoded. Two passes cover that; the loop also stops as soon
/// as a pass changes nothing or fails to decode.
const MAX_DECODE_PASSES: usize = 2;

/// Decode one URL path segment into plain text.
///
/// Plus signs become spaces first, then percent-decoding is applied up
/// to [`MAX_DECODE_PASSES`] times. A pass that is a no-op or that
/// yields invalid UTF-8 ends the loop with the last good value.
pub(crate) fn decode_segment(raw: &str) -> String {
    let mut current = raw.replace('+', " ");
    for _ in 0..MAX_DECODE_PASSES {
        let decoded = match percent_decode_str(&current).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => break,
        };
        if decoded == current {
            break;
        }
        current = decoded;
    }
    current
}

/// Slice decoded segments down to the part that names the document.
///
/// Everything up to and including the first case-insensitive
/// `"documents"` segment is site structure and is dropped. A second
/// `"documents"` segment directly after the marker is the library root
/// showing up twice and is dropped as well. Returns `None` when no
/// marker exists or nothing follows it.
pub(crate) fn relative_segments(segments: &[String]) -> Option<Vec<String>> {
    let marker = segments
        .iter()
        .position(|segment| segment.eq_ignore_ascii_case(LIBRARY_MARKER))?;
    let mut relative = segments[marker + 1..].to_vec();
    if relative
        .first()
        .is_some_and(|segment| segment.eq_ignore_ascii_case(LIBRARY_MARKER))
    {
        relative.remove(0);
    }
    if relative.is_empty() {
        None
    } else {
        Some(relative)
    }
}

/// Expand a relative sequence into the candidate orderings to probe.
///
/// The sequence itself always comes first. When the final segment
/// embeds a date (or, failing that, any digit) after a descriptive
/// prefix, a second variant splits that segment into a folder name and
/// a file name. Web front ends flatten `Folder Name/2024.03.15.docx`
/// into a single `Folder Name2024.03.15.docx` display segment, and the
/// split undoes that.
pub(crate) fn segment_variants(segments: &[String]) -> Vec<Vec<String>> {
    let mut variants = vec![segments.to_vec()];
    if let Some((folder, file)) = segments.last().and_then(|last| split_embedded_name(last)) {
        let mut split = segments[..segments.len() - 1].to_vec();
        split.push(folder);
        split.push(file);
        variants.push(split);
    }
    variants
}

/// Split a flattened segment into folder and file halves.
///
/// The split point is the start of a `YYYY?MM?DD` date match, or the
/// first digit when no date is present. A match at the very start of
/// the segment means there is no descriptive prefix to peel off, so no
/// split happens; likewise when either trimmed half ends up empty.
fn split_embedded_name(segment: &str) -> Option<(String, String)> {
    let at = date_start(segment).or_else(|| digit_start(segment))?;
    let folder = segment[..at].trim();
    let file = segment[at..].trim();
    if folder.is_empty() || file.is_empty() {
        return None;
    }
    Some((folder.to_string(), file.to_string()))
}

fn date_start(segment: &str) -> Option<usize> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"\d{4}[-._]\d{2}[-._]\d{2}").expect("date pattern compiles"));
    pattern.find(segment).map(|m| m.start()).filter(|&at| at > 0)
}

fn digit_start(segment: &str) -> Option<usize> {
    segment
        .char_indices()
        .find(|(_, c)| c.is_ascii_digit())
        .map(|(at, _)| at)
        .filter(|&at| at > 0)
}
