//! URL extraction with display truncation
//!
//! Truncation rewrites the working text, so every later position shifts.
//! The rewrite is a fold over the matches of the original text: each step
//! receives the text produced so far together with the number of characters
//! removed by earlier steps, and replaces the URL at its shifted position.
//! Replacement is position-addressed, so repeated identical URLs are each
//! rewritten in place.

use super::{accepts, FilterPredicate};
use crate::matcher::{PatternMatch, PatternMatcher};
use crate::types::{CharRange, ElementPayload, ElementType, ExtractedElement};
use serde::Serialize;
use tracing::{trace, warn};

/// Suffix appended to truncated URLs
pub const ELLIPSIS: &str = "...";

/// Elements together with the text their ranges refer to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlExtraction {
    /// Extracted URLs in ascending order
    pub elements: Vec<ExtractedElement>,
    /// Text after truncation; equal to the input when nothing was shortened
    pub text: String,
}

/// Strategy-table entry: URLs without truncation
pub(crate) fn extract(
    _element_type: &ElementType,
    text: &str,
    range: CharRange,
    predicate: Option<&FilterPredicate>,
) -> Vec<ExtractedElement> {
    extract_with_rewrite(text, range, None, predicate).elements
}

/// Accumulator threaded through the rewrite fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RewriteState {
    text: String,
    /// Characters removed from the original text so far
    removed: usize,
    elements: Vec<ExtractedElement>,
}

impl RewriteState {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            removed: 0,
            elements: Vec::new(),
        }
    }

    /// Fold step for one match of the original text
    fn apply(
        mut self,
        found: PatternMatch<'_>,
        maximum_length: Option<usize>,
        predicate: Option<&FilterPredicate>,
    ) -> Self {
        let word = found.text.trim();
        if !accepts(predicate, word) {
            return self;
        }

        let Some(maximum) = maximum_length else {
            self.push(found.range, ElementPayload::Text(word.to_string()));
            return self;
        };

        let leading = found.text.chars().count() - found.text.trim_start().chars().count();
        let word_length = word.chars().count();
        let located = CharRange::new(found.range.start + leading - self.removed, word_length);

        if word_length <= maximum {
            self.push(located, ElementPayload::Text(word.to_string()));
            return self;
        }

        let displayed = truncate_for_display(word, maximum);
        let displayed_length = displayed.chars().count();
        match located.to_byte_range(&self.text) {
            Some(bytes) => self.text.replace_range(bytes, &displayed),
            None => {
                warn!(range = %located, "url position out of sync with working text");
                return self;
            }
        }
        trace!(original = word, displayed = %displayed, "truncated url");

        self.removed += word_length - displayed_length;
        self.push(
            CharRange::new(located.start, displayed_length),
            ElementPayload::TruncatedUrl {
                original: word.to_string(),
                displayed,
            },
        );
        self
    }

    fn push(&mut self, range: CharRange, payload: ElementPayload) {
        self.elements
            .push(ExtractedElement::new(range, ElementType::Url, payload));
    }

    fn finish(self) -> UrlExtraction {
        UrlExtraction {
            elements: self.elements,
            text: self.text,
        }
    }
}

/// Extract URLs, shortening those longer than `maximum_length`.
///
/// Without a maximum, ranges are the raw match ranges and the text is
/// returned unchanged. With a maximum, ranges cover exactly the URL (or its
/// shortened form) in the returned text.
pub(crate) fn extract_with_rewrite(
    text: &str,
    range: CharRange,
    maximum_length: Option<usize>,
    predicate: Option<&FilterPredicate>,
) -> UrlExtraction {
    let matches = match PatternMatcher::find(text, ElementType::Url.pattern(), range) {
        Ok(matches) => matches,
        Err(err) => {
            warn!(error = %err, "url pattern failed, no elements extracted");
            return RewriteState::new(text).finish();
        }
    };

    matches
        .filter(|found| found.range.length > ElementType::Url.min_length())
        .fold(RewriteState::new(text), |state, found| {
            state.apply(found, maximum_length, predicate)
        })
        .finish()
}

/// Shorten `word` to at most `maximum_length` characters, ending in
/// [`ELLIPSIS`] when there is room for it
pub fn truncate_for_display(word: &str, maximum_length: usize) -> String {
    let ellipsis_length = ELLIPSIS.chars().count();
    if maximum_length <= ellipsis_length {
        return word.chars().take(maximum_length).collect();
    }

    let mut displayed: String = word.chars().take(maximum_length - ellipsis_length).collect();
    displayed.push_str(ELLIPSIS);
    displayed
}
