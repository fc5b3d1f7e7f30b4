//! Output formatting module

use anyhow::Result;
use taptext_core::{ElementPayload, ExtractedElement, Extraction};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the extraction of one source
    fn format_extraction(&mut self, source: &str, extraction: &Extraction) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Element text for human-readable formats, with the full URL for
/// truncated ones
fn describe(element: &ExtractedElement) -> String {
    match &element.payload {
        ElementPayload::Text(text) => text.clone(),
        ElementPayload::TruncatedUrl {
            original,
            displayed,
        } => format!("{displayed} ({original})"),
    }
}
