//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use taptext_core::config::{ConfigFile, CustomPatternEntry, ExtractionSection};
use taptext_core::ExtractorConfig;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionSection,

    /// Custom patterns extracted after the enabled types
    #[serde(default)]
    pub custom: Vec<CustomPatternEntry>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|err| CliError::Config(format!("{}: {err}", path.display())).into())
    }

    /// Extractor configuration with command-line overrides applied
    pub fn extractor_config(
        &self,
        types: Option<Vec<taptext_core::ElementType>>,
        custom_patterns: &[String],
        url_maximum_length: Option<usize>,
    ) -> Result<ExtractorConfig> {
        let mut file = ConfigFile {
            extraction: self.extraction.clone(),
            custom: self.custom.clone(),
        };

        if let Some(types) = types {
            file.extraction.enabled = types;
        }
        if url_maximum_length.is_some() {
            file.extraction.url_maximum_length = url_maximum_length;
        }
        file.custom.extend(
            custom_patterns
                .iter()
                .map(|pattern| CustomPatternEntry {
                    pattern: pattern.clone(),
                }),
        );

        file.into_config().map_err(|err| CliError::from(err).into())
    }

    /// Worker threads to use for parallel runs
    pub fn worker_threads(&self, requested: Option<usize>) -> usize {
        match requested.unwrap_or(self.performance.worker_threads) {
            0 => num_cpus::get(),
            threads => threads,
        }
    }
}
