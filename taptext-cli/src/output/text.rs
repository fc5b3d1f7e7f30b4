//! Plain text output formatter

use super::{describe, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use taptext_core::Extraction;

/// Plain text formatter - one tab-separated line per element
pub struct TextFormatter<W: Write> {
    writer: W,
    sources: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer, sources: 0 }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_extraction(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        if self.sources > 0 {
            writeln!(self.writer)?;
        }
        self.sources += 1;

        writeln!(self.writer, "# {source}")?;
        for element in &extraction.elements {
            writeln!(
                self.writer,
                "{}\t{}\t{}",
                element.element_type,
                element.range,
                describe(element)
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
