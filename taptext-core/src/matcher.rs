//! Pattern matching over a character range of a text
//!
//! Matches are produced lazily in ascending order and never overlap: after
//! each match the search resumes at its end. Positions are reported in
//! characters, so multi-byte content keeps correct offsets.

use crate::error::PatternError;
use crate::patterns;
use crate::types::CharRange;
use regex::Regex;

/// One match reported by [`PatternMatcher`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'t> {
    /// Span of the match in the full text
    pub range: CharRange,
    /// Matched text
    pub text: &'t str,
}

/// Stateless matcher entry point
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl PatternMatcher {
    /// Find all matches of `pattern` inside `scan` of `text`.
    ///
    /// `^` and `$` anchor at the bounds of `scan`, not of the whole text.
    pub fn find<'t>(
        text: &'t str,
        pattern: &str,
        scan: CharRange,
    ) -> Result<Matches<'t>, PatternError> {
        let bytes = scan
            .to_byte_range(text)
            .ok_or_else(|| PatternError::InvalidRange {
                start: scan.start,
                end: scan.end(),
                text_length: text.chars().count(),
            })?;
        let regex = patterns::compile(pattern)?;

        Ok(Matches {
            regex,
            haystack: &text[bytes],
            search_from: 0,
            cursor_byte: 0,
            cursor_char: scan.start,
        })
    }
}

/// Lazy, restartable sequence of matches
#[derive(Debug, Clone)]
pub struct Matches<'t> {
    regex: Regex,
    haystack: &'t str,
    /// Byte offset in `haystack` where the next search starts
    search_from: usize,
    /// Byte offset in `haystack` whose absolute character offset is `cursor_char`
    cursor_byte: usize,
    cursor_char: usize,
}

impl<'t> Matches<'t> {
    /// Advance the character cursor to `byte` and return its character offset
    fn char_offset_at(&mut self, byte: usize) -> usize {
        self.cursor_char += self.haystack[self.cursor_byte..byte].chars().count();
        self.cursor_byte = byte;
        self.cursor_char
    }

    /// Byte offset just past the character starting at `byte`
    fn next_char_boundary(&self, byte: usize) -> usize {
        self.haystack[byte..]
            .chars()
            .next()
            .map_or(self.haystack.len() + 1, |ch| byte + ch.len_utf8())
    }
}

impl<'t> Iterator for Matches<'t> {
    type Item = PatternMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.search_from > self.haystack.len() {
            return None;
        }

        let found = self.regex.find_at(self.haystack, self.search_from)?;
        self.search_from = if found.is_empty() {
            self.next_char_boundary(found.end())
        } else {
            found.end()
        };

        let start = self.char_offset_at(found.start());
        let end = self.char_offset_at(found.end());

        Some(PatternMatch {
            range: CharRange::new(start, end - start),
            text: found.as_str(),
        })
    }
}
