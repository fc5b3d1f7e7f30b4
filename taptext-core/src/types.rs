//! Element model shared by the matcher and the extraction strategies

use crate::error::ExtractError;
use crate::patterns;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Minimum match length for every built-in type
pub const DEFAULT_MIN_LENGTH: usize = 2;

/// Minimum match length for custom patterns
pub const CUSTOM_MIN_LENGTH: usize = 1;

/// Half-open span `[start, start + length)` of character positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CharRange {
    /// First character covered by the range
    pub start: usize,
    /// Number of characters covered
    pub length: usize,
}

impl CharRange {
    /// Create a range from a start position and a length
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Range covering every character of `text`
    pub fn full(text: &str) -> Self {
        Self::new(0, text.chars().count())
    }

    /// Position one past the last covered character
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.length)
    }

    /// Whether the range covers no characters
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Whether the two ranges share at least one character
    pub fn overlaps(&self, other: &CharRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Whether `other` lies entirely inside this range
    pub fn contains(&self, other: &CharRange) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }

    /// Convert to a byte range of `text`, or `None` if the range does not fit
    pub fn to_byte_range(&self, text: &str) -> Option<Range<usize>> {
        let start = char_to_byte(text, self.start)?;
        let end = start + char_to_byte(&text[start..], self.length)?;
        Some(start..end)
    }

    /// Substring of `text` covered by this range
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.to_byte_range(text).map(|bytes| &text[bytes])
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// Byte offset of the `chars`-th character, allowing one past the end
fn char_to_byte(text: &str, chars: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(chars)
}

/// Strategy selector used by the dispatch table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `@name`
    Mention,
    /// `#tag`
    Hashtag,
    /// Web address
    Url,
    /// Email address
    Email,
    /// Caller-supplied pattern
    Custom,
}

/// Element type tag, owning exactly one pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// `@name` mentions
    Mention,
    /// `#tag` hashtags
    Hashtag,
    /// Web addresses
    Url,
    /// Email addresses
    Email,
    /// Matches of a caller-supplied regular expression
    Custom(String),
}

impl ElementType {
    /// Create a custom type for the given pattern
    pub fn custom(pattern: impl Into<String>) -> Self {
        ElementType::Custom(pattern.into())
    }

    /// Strategy selector for this type
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementType::Mention => ElementKind::Mention,
            ElementType::Hashtag => ElementKind::Hashtag,
            ElementType::Url => ElementKind::Url,
            ElementType::Email => ElementKind::Email,
            ElementType::Custom(_) => ElementKind::Custom,
        }
    }

    /// Pattern source searched for this type
    pub fn pattern(&self) -> &str {
        match self {
            ElementType::Mention => patterns::MENTION,
            ElementType::Hashtag => patterns::HASHTAG,
            ElementType::Url => patterns::URL,
            ElementType::Email => patterns::EMAIL,
            ElementType::Custom(pattern) => pattern,
        }
    }

    /// Matches must be strictly longer than this to produce an element
    pub fn min_length(&self) -> usize {
        match self {
            ElementType::Custom(_) => CUSTOM_MIN_LENGTH,
            _ => DEFAULT_MIN_LENGTH,
        }
    }

    /// Names of the built-in types, as accepted by `from_str`
    pub fn builtin_names() -> &'static [&'static str] {
        &["mention", "hashtag", "url", "email"]
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Mention => f.write_str("mention"),
            ElementType::Hashtag => f.write_str("hashtag"),
            ElementType::Url => f.write_str("url"),
            ElementType::Email => f.write_str("email"),
            ElementType::Custom(pattern) => write!(f, "custom:{pattern}"),
        }
    }
}

impl FromStr for ElementType {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(pattern) = s.strip_prefix("custom:") {
            if pattern.is_empty() {
                return Err(ExtractError::UnknownElementType(s.to_string()));
            }
            return Ok(ElementType::custom(pattern));
        }

        match s.trim().to_ascii_lowercase().as_str() {
            "mention" => Ok(ElementType::Mention),
            "hashtag" => Ok(ElementType::Hashtag),
            "url" => Ok(ElementType::Url),
            "email" => Ok(ElementType::Email),
            _ => Err(ExtractError::UnknownElementType(s.to_string())),
        }
    }
}

impl Serialize for ElementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ElementType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Type-specific content of an extracted element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementPayload {
    /// Normalized text: marker-stripped for mentions and hashtags,
    /// whitespace-trimmed otherwise
    Text(String),
    /// URL rewritten to fit a maximum display length
    TruncatedUrl {
        /// Full URL as it appeared in the input
        original: String,
        /// Shortened form now present in the returned text
        displayed: String,
    },
}

impl ElementPayload {
    /// Text as it appears in the returned text
    pub fn display_text(&self) -> &str {
        match self {
            ElementPayload::Text(text) => text,
            ElementPayload::TruncatedUrl { displayed, .. } => displayed,
        }
    }

    /// Full semantic value of the element
    pub fn original_text(&self) -> &str {
        match self {
            ElementPayload::Text(text) => text,
            ElementPayload::TruncatedUrl { original, .. } => original,
        }
    }

    /// Whether the text was rewritten for display
    pub fn is_truncated(&self) -> bool {
        matches!(self, ElementPayload::TruncatedUrl { .. })
    }
}

/// A typed, ranged unit extracted from text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedElement {
    /// Span in the text the element was extracted from
    pub range: CharRange,
    /// Type the element was produced for
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Normalized content
    pub payload: ElementPayload,
}

impl ExtractedElement {
    /// Create a new element
    pub fn new(range: CharRange, element_type: ElementType, payload: ElementPayload) -> Self {
        Self {
            range,
            element_type,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_range_byte_conversion_multibyte() {
        let text = "héllo 👋 wörld";
        let range = CharRange::new(6, 1);
        assert_eq!(range.slice(text), Some("👋"));

        let range = CharRange::new(8, 5);
        assert_eq!(range.slice(text), Some("wörld"));
    }

    #[test]
    fn test_char_range_out_of_bounds() {
        let text = "abc";
        assert_eq!(CharRange::new(0, 3).slice(text), Some("abc"));
        assert_eq!(CharRange::new(3, 0).slice(text), Some(""));
        assert_eq!(CharRange::new(2, 2).slice(text), None);
        assert_eq!(CharRange::new(4, 0).slice(text), None);
    }

    #[test]
    fn test_char_range_overlap() {
        let a = CharRange::new(0, 5);
        let b = CharRange::new(4, 2);
        let c = CharRange::new(5, 3);

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.contains(&CharRange::new(1, 3)));
        assert!(!a.contains(&b));
        assert_eq!(a.to_string(), "0..5");
    }

    #[test]
    fn test_element_type_round_trip_names() {
        for name in ElementType::builtin_names() {
            let parsed: ElementType = name.parse().unwrap();
            assert_eq!(&parsed.to_string(), name);
        }

        let custom: ElementType = "custom:\\bfoo\\b".parse().unwrap();
        assert_eq!(custom, ElementType::custom("\\bfoo\\b"));
        assert_eq!(custom.min_length(), CUSTOM_MIN_LENGTH);
    }

    #[test]
    fn test_element_type_unknown() {
        assert!(matches!(
            "cashtag".parse::<ElementType>(),
            Err(ExtractError::UnknownElementType(name)) if name == "cashtag"
        ));
        assert!("custom:".parse::<ElementType>().is_err());
    }

    #[test]
    fn test_payload_accessors() {
        let payload = ElementPayload::TruncatedUrl {
            original: "https://example.com/long".to_string(),
            displayed: "https://e...".to_string(),
        };
        assert!(payload.is_truncated());
        assert_eq!(payload.display_text(), "https://e...");
        assert_eq!(payload.original_text(), "https://example.com/long");

        let payload = ElementPayload::Text("swift".to_string());
        assert_eq!(payload.display_text(), payload.original_text());
    }
}
