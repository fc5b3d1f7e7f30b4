//! Marker-stripping extraction for mentions and hashtags

use super::{accepts, FilterPredicate};
use crate::matcher::PatternMatcher;
use crate::types::{CharRange, ElementPayload, ElementType, ExtractedElement};
use tracing::warn;

/// Emit one element per match, keeping the full match range (marker
/// included) but only the name after the marker as payload.
pub(crate) fn extract(
    element_type: &ElementType,
    text: &str,
    range: CharRange,
    predicate: Option<&FilterPredicate>,
) -> Vec<ExtractedElement> {
    let matches = match PatternMatcher::find(text, element_type.pattern(), range) {
        Ok(matches) => matches,
        Err(err) => {
            warn!(%element_type, error = %err, "marker pattern failed, no elements extracted");
            return Vec::new();
        }
    };

    matches
        .filter(|found| found.range.length > element_type.min_length())
        .filter_map(|found| {
            let word = strip_marker(found.text);
            accepts(predicate, word).then(|| {
                ExtractedElement::new(
                    found.range,
                    element_type.clone(),
                    ElementPayload::Text(word.to_string()),
                )
            })
        })
        .collect()
}

/// Drop the first character, then one more leading `@` or `#` if present.
///
/// The first character is the boundary the pattern consumed, which is the
/// marker itself only when the element starts the scan range.
fn strip_marker(matched: &str) -> &str {
    let mut chars = matched.chars();
    chars.next();
    let inner = chars.as_str();
    inner
        .strip_prefix(|ch: char| ch == '@' || ch == '#')
        .unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker(" @john"), "john");
        assert_eq!(strip_marker("@john"), "john");
        assert_eq!(strip_marker(".@john"), "john");
        assert_eq!(strip_marker("\n#swift"), "swift");
        assert_eq!(strip_marker(" @"), "");
    }

    #[test]
    fn test_mention_at_text_start() {
        let text = "@alice said hi";
        let elements = extract(&ElementType::Mention, text, CharRange::full(text), None);

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].range, CharRange::new(0, 6));
        assert_eq!(elements[0].payload.display_text(), "alice");
    }

    #[test]
    fn test_short_matches_discarded() {
        // " @" and " #" alone are only marker plus boundary
        let text = "a @ b # c @x";
        let mentions = extract(&ElementType::Mention, text, CharRange::full(text), None);
        let hashtags = extract(&ElementType::Hashtag, text, CharRange::full(text), None);

        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].payload.display_text(), "x");
        assert!(hashtags.is_empty());
    }

    #[test]
    fn test_mention_after_period() {
        let text = "thanks.@bob";
        let elements = extract(&ElementType::Mention, text, CharRange::full(text), None);

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].range.slice(text), Some(".@bob"));
        assert_eq!(elements[0].payload.display_text(), "bob");
    }

    #[test]
    fn test_unicode_hashtag() {
        let text = "Tokyo #東京タワー trip";
        let elements = extract(&ElementType::Hashtag, text, CharRange::full(text), None);

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].range, CharRange::new(5, 7));
        assert_eq!(elements[0].payload.display_text(), "東京タワー");
    }

    #[test]
    fn test_email_is_not_a_mention() {
        let text = "mail a@b.com";
        let elements = extract(&ElementType::Mention, text, CharRange::full(text), None);
        assert!(elements.is_empty());
    }
}
