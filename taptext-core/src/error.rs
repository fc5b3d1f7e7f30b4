//! Layered error types
//!
//! `PatternError` belongs to the matcher and never escapes the extraction
//! entry points. `ExtractError` is what callers of the public API see.

use thiserror::Error;

/// Matcher-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern text could not be compiled
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern source that failed to compile
        pattern: String,
        /// Message reported by the regex compiler
        message: String,
    },

    /// The scan range does not fit inside the text
    #[error("scan range {start}..{end} exceeds text of {text_length} characters")]
    InvalidRange {
        /// Start of the requested range, in characters
        start: usize,
        /// End of the requested range, in characters
        end: usize,
        /// Length of the text, in characters
        text_length: usize,
    },
}

/// Errors returned by the public extraction API
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Caller passed a range outside the text
    #[error("range {start}..{end} is outside text of {text_length} characters")]
    InvalidRange {
        /// Start of the requested range, in characters
        start: usize,
        /// End of the requested range, in characters
        end: usize,
        /// Length of the text, in characters
        text_length: usize,
    },

    /// An element type name could not be parsed
    #[error("unknown element type '{0}'")]
    UnknownElementType(String),

    /// Configuration values failed validation
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error while reading configuration
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
