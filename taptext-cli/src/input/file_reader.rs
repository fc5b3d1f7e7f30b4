//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Name used for text read from standard input
pub const STDIN_NAME: &str = "<stdin>";

/// One text to extract from, with the name it is reported under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSource {
    /// Path or `<stdin>`
    pub name: String,
    /// Full UTF-8 content
    pub text: String,
}

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file into a named source
    pub fn read_source(path: &Path) -> Result<InputSource> {
        Ok(InputSource {
            name: path.display().to_string(),
            text: Self::read_text(path)?,
        })
    }

    /// Read all of `reader` (normally stdin) into a named source
    pub fn read_stream(mut reader: impl Read) -> Result<InputSource> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;

        Ok(InputSource {
            name: STDIN_NAME.to_string(),
            text,
        })
    }
}
