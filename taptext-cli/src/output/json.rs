//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use taptext_core::{ExtractedElement, Extraction};

/// JSON formatter - outputs one record per source as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<SourceReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct SourceReport {
    /// File name or `<stdin>`
    pub source: String,
    /// Text the element ranges refer to, after URL truncation
    pub text: String,
    /// Extracted elements
    pub elements: Vec<ExtractedElement>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_extraction(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        self.reports.push(SourceReport {
            source: source.to_string(),
            text: extraction.text.clone(),
            elements: extraction.elements.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
