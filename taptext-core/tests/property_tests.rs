//! Property-based tests for the extraction invariants
//!
//! Inputs are built from a small vocabulary of words, mentions, hashtags,
//! URLs and emails joined by assorted separators, so generated texts contain
//! real elements instead of random noise.

use proptest::prelude::*;
use taptext_core::{
    extract_elements, extract_urls, CharRange, ElementPayload, ElementType, ExtractedElement,
};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zé]{1,8}",
        "@[a-z_]{0,6}",
        "#[a-zα-ω0-9]{0,6}",
        "https://[a-z]{1,6}\\.com(/[a-z]{1,12}){0,4}",
        "www\\.[a-z]{1,8}\\.org",
        "[a-z]{1,5}@[a-z]{1,5}\\.(com|net)",
        Just("👋".to_string()),
    ]
}

fn separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just(", ".to_string()),
        Just(".".to_string()),
        Just("  ".to_string()),
    ]
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec((token(), separator()), 0..12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(token, separator)| token + &separator)
            .collect()
    })
}

fn all_types() -> Vec<ElementType> {
    vec![
        ElementType::Mention,
        ElementType::Hashtag,
        ElementType::Url,
        ElementType::Email,
        ElementType::custom(r"\b[a-z]{3}\b"),
    ]
}

fn assert_sorted_and_disjoint(elements: &[ExtractedElement]) {
    for pair in elements.windows(2) {
        assert!(pair[0].range.start < pair[1].range.start);
        assert!(!pair[0].range.overlaps(&pair[1].range));
    }
}

proptest! {
    #[test]
    fn elements_are_sorted_disjoint_and_non_empty(text in text()) {
        for element_type in all_types() {
            let elements = extract_elements(&element_type, &text, CharRange::full(&text), None)
                .unwrap();

            assert_sorted_and_disjoint(&elements);
            for element in &elements {
                prop_assert!(element.range.length > element_type.min_length());
                prop_assert!(element.range.slice(&text).is_some());
                prop_assert_eq!(&element.element_type, &element_type);
            }
        }
    }

    #[test]
    fn marker_payloads_exclude_the_marker(text in text()) {
        for (element_type, marker) in [(ElementType::Mention, '@'), (ElementType::Hashtag, '#')] {
            let elements = extract_elements(&element_type, &text, CharRange::full(&text), None)
                .unwrap();

            for element in elements {
                let payload = element.payload.display_text();
                prop_assert!(!payload.starts_with('@') && !payload.starts_with('#'));

                let covered = element.range.slice(&text).unwrap();
                prop_assert!(covered.contains(marker));
                prop_assert!(covered.ends_with(payload));
            }
        }
    }

    #[test]
    fn rejecting_predicate_yields_nothing(text in text()) {
        let reject = |_: &str| false;
        for element_type in all_types() {
            let elements =
                extract_elements(&element_type, &text, CharRange::full(&text), Some(&reject))
                    .unwrap();
            prop_assert!(elements.is_empty());
        }
    }

    #[test]
    fn urls_without_maximum_keep_text(text in text()) {
        let result = extract_urls(&text, CharRange::full(&text), None, None).unwrap();

        prop_assert_eq!(&result.text, &text);
        assert_sorted_and_disjoint(&result.elements);
        for element in &result.elements {
            let covered = element.range.slice(&text).unwrap();
            prop_assert_eq!(covered.trim(), element.payload.display_text());
        }
    }

    #[test]
    fn truncated_ranges_point_into_returned_text(text in text(), maximum in 4usize..30) {
        let result = extract_urls(&text, CharRange::full(&text), Some(maximum), None).unwrap();

        assert_sorted_and_disjoint(&result.elements);
        for element in &result.elements {
            let covered = element.range.slice(&result.text).unwrap();
            prop_assert_eq!(covered, element.payload.display_text());
            prop_assert!(covered.chars().count() <= maximum);

            if let ElementPayload::TruncatedUrl { original, displayed } = &element.payload {
                prop_assert!(original.chars().count() > maximum);
                prop_assert!(displayed.ends_with("..."));
            }
        }

        let removed: usize = result
            .elements
            .iter()
            .map(|element| {
                element.payload.original_text().chars().count()
                    - element.payload.display_text().chars().count()
            })
            .sum();
        prop_assert_eq!(result.text.chars().count() + removed, text.chars().count());
    }
}
