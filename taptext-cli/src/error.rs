//! CLI-specific failures

use taptext_core::ExtractError;
use thiserror::Error;

/// Failures raised by the CLI itself, before or around extraction
#[derive(Error, Debug)]
pub enum CliError {
    /// A literal input path that does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// A glob pattern that could not be parsed
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidGlob { pattern: String, reason: String },

    /// Configuration or option values rejected by the extractor
    #[error("Configuration error: {0}")]
    Config(String),

    /// `default_format` names no known formatter
    #[error("Configuration error: unknown output format '{0}'")]
    UnknownFormat(String),

    /// Extraction failed for one input
    #[error("Extraction failed for {input}: {reason}")]
    Extraction { input: String, reason: String },
}

impl CliError {
    /// Attach the input name to an extraction failure
    pub fn extraction(input: &str, err: ExtractError) -> Self {
        CliError::Extraction {
            input: input.to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<ExtractError> for CliError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Config(msg) => CliError::Config(msg),
            ExtractError::UnknownElementType(name) => {
                CliError::Config(format!("unknown element type '{name}'"))
            }
            other => CliError::Config(other.to_string()),
        }
    }
}
