//! Markdown output formatter

use super::{describe, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use taptext_core::Extraction;

/// Markdown formatter - outputs a table of elements per source
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    element_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            element_count: 0,
        }
    }
}

/// Escape table cell separators
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_extraction(&mut self, source: &str, extraction: &Extraction) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;

        if extraction.is_empty() {
            writeln!(self.writer, "*No elements found*")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Type | Range | Text |")?;
        writeln!(self.writer, "|------|-------|------|")?;
        for element in &extraction.elements {
            self.element_count += 1;
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                cell(&element.element_type.to_string()),
                element.range,
                cell(&describe(element))
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total elements: {}*", self.element_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taptext_core::{ElementType, Extractor, ExtractorConfig};

    #[test]
    fn test_markdown_output() {
        let config = ExtractorConfig::builder()
            .enabled_types([ElementType::custom("ab|cd")])
            .build()
            .unwrap();
        let extraction = Extractor::new(config).extract("ab cd").unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_extraction("notes.txt", &extraction).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("## notes.txt\n\n| Type | Range | Text |"));
        assert!(output.contains("| custom:ab\\|cd | 0..2 | ab |"));
        assert!(output.contains("| custom:ab\\|cd | 3..5 | cd |"));
        assert!(output.ends_with("---\n*Total elements: 2*\n"));
    }

    #[test]
    fn test_markdown_without_elements() {
        let extraction = Extractor::default().extract("plain words").unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_extraction("empty.txt", &extraction).unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("*No elements found*"));
        assert!(output.ends_with("---\n*Total elements: 0*\n"));
    }
}
