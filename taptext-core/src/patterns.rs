//! Built-in patterns and their shared compilations
//!
//! Every built-in pattern consumes the boundary character that precedes the
//! element (start of text, whitespace, or punctuation). The extraction
//! strategies account for that leading character.

use crate::error::PatternError;
use once_cell::sync::Lazy;
use regex::Regex;

/// `@name`, preceded by start of text, whitespace or a period
pub const MENTION: &str = r"(?:^|\s|$|[.])@[\p{L}0-9_]*";

/// `#tag`, preceded by start of text or whitespace
pub const HASHTAG: &str = r"(?:^|\s|$)#[\p{L}0-9_]*";

/// Email addresses
pub const EMAIL: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";

/// `http(s)://`, `www.` and `pic.` addresses ending in a word character,
/// slash or fragment marker
pub const URL: &str = concat!(
    r"(?:^|[\s.:;?\-\]<\(])",
    r"(?:https?://|www\.|pic\.)",
    r"[-\w;/?:@&=+$|.!~*'()\[\]%#,☺]+[\w/#](?:\(\))?",
);

/// Metacharacter fragments removed when approximating a pattern as a literal
const SKELETON_FRAGMENTS: [&str; 2] = [r"\s", r"\b"];

type Compiled = Lazy<Result<Regex, PatternError>>;

static MENTION_RE: Compiled = Lazy::new(|| build(MENTION));
static HASHTAG_RE: Compiled = Lazy::new(|| build(HASHTAG));
static EMAIL_RE: Compiled = Lazy::new(|| build(EMAIL));
static URL_RE: Compiled = Lazy::new(|| build(URL));

fn build(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|e| PatternError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Shared compilation of a built-in pattern source
fn builtin(pattern: &str) -> Option<&'static Compiled> {
    match pattern {
        MENTION => Some(&MENTION_RE),
        HASHTAG => Some(&HASHTAG_RE),
        EMAIL => Some(&EMAIL_RE),
        URL => Some(&URL_RE),
        _ => None,
    }
}

/// Compile `pattern`. Built-in patterns compile once per process; any other
/// pattern is compiled on every call and owned by the caller.
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    match builtin(pattern) {
        Some(compiled) => Lazy::force(compiled).clone(),
        None => build(pattern),
    }
}

/// Approximate `pattern` as a plain substring by dropping whitespace and
/// word-boundary escapes
pub fn literal_skeleton(pattern: &str) -> String {
    SKELETON_FRAGMENTS
        .iter()
        .fold(pattern.to_string(), |skeleton, fragment| {
            skeleton.replace(fragment, "")
        })
}
