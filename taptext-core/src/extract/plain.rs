//! Plain extraction for emails and custom patterns

use super::{accepts, FilterPredicate};
use crate::matcher::PatternMatcher;
use crate::patterns;
use crate::types::{CharRange, ElementPayload, ElementType, ExtractedElement};
use tracing::warn;

/// Strategy-table entry: plain extraction with the type's own minimum
pub(crate) fn extract(
    element_type: &ElementType,
    text: &str,
    range: CharRange,
    predicate: Option<&FilterPredicate>,
) -> Vec<ExtractedElement> {
    extract_with_min_length(element_type, text, range, element_type.min_length(), predicate)
}

/// Emit one element per match longer than `min_length` characters, with the
/// whitespace-trimmed match as payload.
///
/// If the pattern cannot be used at all, falls back to a single
/// case-insensitive literal search for the pattern's skeleton (see
/// [`patterns::literal_skeleton`]). The fallback is best effort only.
pub fn extract_with_min_length(
    element_type: &ElementType,
    text: &str,
    range: CharRange,
    min_length: usize,
    predicate: Option<&FilterPredicate>,
) -> Vec<ExtractedElement> {
    match PatternMatcher::find(text, element_type.pattern(), range) {
        Ok(matches) => matches
            .filter(|found| found.range.length > min_length)
            .filter_map(|found| {
                let word = found.text.trim();
                accepts(predicate, word).then(|| {
                    ExtractedElement::new(
                        found.range,
                        element_type.clone(),
                        ElementPayload::Text(word.to_string()),
                    )
                })
            })
            .collect(),
        Err(err) => {
            warn!(%element_type, error = %err, "pattern failed, using literal fallback");
            literal_fallback(element_type, text, range, min_length, predicate)
                .into_iter()
                .collect()
        }
    }
}

/// First case-insensitive occurrence of the pattern skeleton inside `range`,
/// if it is longer than `min_length`
fn literal_fallback(
    element_type: &ElementType,
    text: &str,
    range: CharRange,
    min_length: usize,
    predicate: Option<&FilterPredicate>,
) -> Option<ExtractedElement> {
    let skeleton = patterns::literal_skeleton(element_type.pattern());
    if skeleton.is_empty() || !accepts(predicate, &skeleton) {
        return None;
    }

    let literal = format!("(?i){}", regex::escape(&skeleton));
    let found = PatternMatcher::find(text, &literal, range).ok()?.next()?;
    if found.range.length <= min_length {
        return None;
    }

    Some(ExtractedElement::new(
        found.range,
        element_type.clone(),
        ElementPayload::Text(skeleton),
    ))
}
