//! Property-based tests for sharing-URL segment handling.
//!
//! Note: The normalize module already has property tests for result
//! normalization. This module focuses on segment decoding, slicing, and
//! candidate variant expansion.

use super::segments::{decode_segment, relative_segments, segment_variants};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use proptest::prelude::*;

// Strategy for segment text that is already fully decoded: no percent
// escapes and no plus signs, so decoding must leave it alone.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ._-]{1,24}"
}

fn segment_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._-]{1,12}"
}

// Site structure that never collides with the library marker.
fn site_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_text_strategy(), 0..5).prop_filter(
        "site structure must not contain the library marker",
        |head| head.iter().all(|s| !s.eq_ignore_ascii_case("documents")),
    )
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(plain_text_strategy(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Decoded text passes through unchanged
    #[test]
    fn decoding_plain_text_is_identity(text in plain_text_strategy()) {
        prop_assert_eq!(decode_segment(&text), text);
    }

    // One layer of percent encoding always comes back off
    #[test]
    fn decoding_reverses_single_encoding(text in plain_text_strategy()) {
        let encoded = utf8_percent_encode(&text, NON_ALPHANUMERIC).to_string();
        prop_assert_eq!(decode_segment(&encoded), text);
    }

    // Two layers come back off as well; that is the decode bound
    #[test]
    fn decoding_reverses_double_encoding(text in plain_text_strategy()) {
        let once = utf8_percent_encode(&text, NON_ALPHANUMERIC).to_string();
        let twice = utf8_percent_encode(&once, NON_ALPHANUMERIC).to_string();
        prop_assert_eq!(decode_segment(&twice), text);
    }

    // Slicing keeps the document name whenever it returns anything
    #[test]
    fn slicing_preserves_the_final_segment(
        head in site_strategy(),
        tail in prop::collection::vec(segment_text_strategy(), 0..5),
    ) {
        let mut segments = head;
        segments.push("Documents".to_string());
        segments.extend(tail.iter().cloned());

        match relative_segments(&segments) {
            Some(relative) => prop_assert_eq!(relative.last(), segments.last()),
            // Declines only happen when nothing usable follows the marker.
            None => prop_assert!(tail.iter().all(|s| s.eq_ignore_ascii_case("documents"))),
        }
    }

    // The unmodified ordering is always the first candidate probed
    #[test]
    fn variants_keep_the_original_first(segments in segments_strategy()) {
        let variants = segment_variants(&segments);
        prop_assert_eq!(&variants[0], &segments);
    }

    // A split adds at most one extra candidate with exactly one extra segment
    #[test]
    fn variants_are_bounded(segments in segments_strategy()) {
        let variants = segment_variants(&segments);
        prop_assert!(variants.len() <= 2);
        if let Some(split) = variants.get(1) {
            prop_assert_eq!(split.len(), segments.len() + 1);
        }
    }
}
