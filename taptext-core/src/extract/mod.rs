//! Type-specific extraction strategies and the dispatch table
//!
//! Each element kind maps to one pure strategy function. Adding a type means
//! adding a row to [`STRATEGIES`]; the entry points never branch on type.

mod marker;
mod plain;
mod url;

pub use plain::extract_with_min_length;
pub use url::{truncate_for_display, UrlExtraction, ELLIPSIS};

use crate::error::{ExtractError, Result};
use crate::types::{CharRange, ElementKind, ElementType, ExtractedElement};
use tracing::debug;

/// Caller-supplied acceptance test over a candidate's normalized text
pub type FilterPredicate = dyn Fn(&str) -> bool + Send + Sync;

/// Signature shared by every extraction strategy
pub type Strategy =
    fn(&ElementType, &str, CharRange, Option<&FilterPredicate>) -> Vec<ExtractedElement>;

/// Type-to-strategy table
pub const STRATEGIES: [(ElementKind, Strategy); 5] = [
    (ElementKind::Mention, marker::extract),
    (ElementKind::Hashtag, marker::extract),
    (ElementKind::Url, url::extract),
    (ElementKind::Email, plain::extract),
    (ElementKind::Custom, plain::extract),
];

/// Look up the strategy for `kind`; kinds without a row use plain extraction
pub fn strategy_for(kind: ElementKind) -> Strategy {
    STRATEGIES
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map_or(plain::extract as Strategy, |(_, strategy)| *strategy)
}

/// Extract every element of `element_type` inside `range` of `text`.
///
/// Elements come back in ascending, non-overlapping order. URLs are never
/// rewritten here; use [`extract_urls`] for display truncation.
pub fn extract_elements(
    element_type: &ElementType,
    text: &str,
    range: CharRange,
    predicate: Option<&FilterPredicate>,
) -> Result<Vec<ExtractedElement>> {
    validate_range(text, range)?;
    debug!(%element_type, %range, "extracting elements");

    let strategy = strategy_for(element_type.kind());
    Ok(strategy(element_type, text, range, predicate))
}

/// Extract URLs inside `range` of `text`, shortening any URL longer than
/// `maximum_length` characters.
///
/// Ranges of the returned elements refer to the returned text.
pub fn extract_urls(
    text: &str,
    range: CharRange,
    maximum_length: Option<usize>,
    predicate: Option<&FilterPredicate>,
) -> Result<UrlExtraction> {
    validate_range(text, range)?;
    if maximum_length == Some(0) {
        return Err(ExtractError::Config(
            "url maximum length must be greater than 0".into(),
        ));
    }
    debug!(%range, ?maximum_length, "extracting urls");

    Ok(url::extract_with_rewrite(text, range, maximum_length, predicate))
}

/// Reject ranges that do not fit inside `text`
fn validate_range(text: &str, range: CharRange) -> Result<()> {
    let text_length = text.chars().count();
    if range.end() > text_length {
        return Err(ExtractError::InvalidRange {
            start: range.start,
            end: range.end(),
            text_length,
        });
    }
    Ok(())
}

/// Whether `predicate` accepts `word`; a missing predicate accepts everything
fn accepts(predicate: Option<&FilterPredicate>, word: &str) -> bool {
    predicate.map_or(true, |accept| accept(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ElementPayload;

    #[test]
    fn test_every_kind_has_a_strategy_row() {
        for kind in [
            ElementKind::Mention,
            ElementKind::Hashtag,
            ElementKind::Url,
            ElementKind::Email,
            ElementKind::Custom,
        ] {
            assert!(STRATEGIES.iter().any(|(candidate, _)| *candidate == kind));
        }
    }

    #[test]
    fn test_dispatch_mention() {
        let text = "Hello @john_doe, check #swift out!";
        let elements =
            extract_elements(&ElementType::Mention, text, CharRange::full(text), None).unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].payload, ElementPayload::Text("john_doe".into()));
        assert_eq!(elements[0].element_type, ElementType::Mention);
    }

    #[test]
    fn test_dispatch_rejects_out_of_bounds_range() {
        let text = "short";
        let result = extract_elements(&ElementType::Hashtag, text, CharRange::new(3, 5), None);

        assert!(matches!(
            result,
            Err(ExtractError::InvalidRange {
                start: 3,
                end: 8,
                text_length: 5
            })
        ));
    }

    #[test]
    fn test_extract_urls_rejects_zero_maximum() {
        let text = "see https://example.com";
        let result = extract_urls(text, CharRange::full(text), Some(0), None);
        assert!(matches!(result, Err(ExtractError::Config(_))));
    }

    #[test]
    fn test_predicate_applied_through_dispatch() {
        let text = "#keep #drop";
        let only_keep = |word: &str| word == "keep";
        let elements = extract_elements(
            &ElementType::Hashtag,
            text,
            CharRange::full(text),
            Some(&only_keep),
        )
        .unwrap();

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].payload.display_text(), "keep");
    }
}
