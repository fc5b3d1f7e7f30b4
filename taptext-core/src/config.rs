//! Extractor configuration and its TOML representation

use crate::error::{ExtractError, Result};
use crate::types::ElementType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    use crate::types::ElementType;

    /// Types enabled when none are configured
    pub fn enabled_types() -> Vec<ElementType> {
        vec![ElementType::Mention, ElementType::Hashtag, ElementType::Url]
    }
}

/// Which element types to extract, and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub(crate) enabled: Vec<ElementType>,
    pub(crate) url_maximum_length: Option<usize>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::enabled_types(),
            url_maximum_length: None,
        }
    }
}

impl ExtractorConfig {
    /// Create a configuration builder
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }

    /// Enabled types, in processing order
    pub fn enabled_types(&self) -> &[ElementType] {
        &self.enabled
    }

    /// Whether `element_type` is enabled
    pub fn is_enabled(&self, element_type: &ElementType) -> bool {
        self.enabled.contains(element_type)
    }

    /// Maximum display length for URLs, if any
    pub fn url_maximum_length(&self) -> Option<usize> {
        self.url_maximum_length
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        file.into_config()
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Serializable form of this configuration
    pub fn to_file(&self) -> ConfigFile {
        let (custom, enabled): (Vec<_>, Vec<_>) = self
            .enabled
            .iter()
            .cloned()
            .partition(|element_type| matches!(element_type, ElementType::Custom(_)));

        ConfigFile {
            extraction: ExtractionSection {
                enabled,
                url_maximum_length: self.url_maximum_length,
            },
            custom: custom
                .into_iter()
                .filter_map(|element_type| match element_type {
                    ElementType::Custom(pattern) => Some(CustomPatternEntry { pattern }),
                    _ => None,
                })
                .collect(),
        }
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.url_maximum_length == Some(0) {
            return Err(ExtractError::Config(
                "url_maximum_length must be greater than 0".into(),
            ));
        }

        for (index, element_type) in self.enabled.iter().enumerate() {
            if let ElementType::Custom(pattern) = element_type {
                if pattern.trim().is_empty() {
                    return Err(ExtractError::Config(
                        "custom patterns must not be empty".into(),
                    ));
                }
            }

            if self.enabled[..index].contains(element_type) {
                return Err(ExtractError::Config(format!(
                    "element type '{element_type}' is enabled more than once"
                )));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ExtractorConfigBuilder {
    enabled: Option<Vec<ElementType>>,
    url_maximum_length: Option<usize>,
    custom_patterns: Vec<String>,
}

impl ExtractorConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the enabled types
    pub fn enabled_types(mut self, types: impl IntoIterator<Item = ElementType>) -> Self {
        self.enabled = Some(types.into_iter().collect());
        self
    }

    /// Enable one more type, keeping the ones already enabled
    pub fn enable(mut self, element_type: ElementType) -> Self {
        let enabled = self.enabled.get_or_insert_with(defaults::enabled_types);
        if !enabled.contains(&element_type) {
            enabled.push(element_type);
        }
        self
    }

    /// Add a custom pattern, extracted after the enabled types
    pub fn custom_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.custom_patterns.push(pattern.into());
        self
    }

    /// Set the maximum URL display length (None = never truncate)
    pub fn url_maximum_length(mut self, length: Option<usize>) -> Self {
        self.url_maximum_length = length;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ExtractorConfig> {
        let mut enabled = self.enabled.unwrap_or_else(defaults::enabled_types);
        enabled.extend(self.custom_patterns.into_iter().map(ElementType::Custom));

        let config = ExtractorConfig {
            enabled,
            url_maximum_length: self.url_maximum_length,
        };
        config.validate()?;
        Ok(config)
    }
}

/// TOML layout of a configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// `[extraction]` table
    #[serde(default)]
    pub extraction: ExtractionSection,
    /// `[[custom]]` entries
    #[serde(default)]
    pub custom: Vec<CustomPatternEntry>,
}

/// `[extraction]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSection {
    /// Enabled type names, in processing order
    #[serde(default = "defaults::enabled_types")]
    pub enabled: Vec<ElementType>,
    /// Maximum URL display length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_maximum_length: Option<usize>,
}

impl Default for ExtractionSection {
    fn default() -> Self {
        Self {
            enabled: defaults::enabled_types(),
            url_maximum_length: None,
        }
    }
}

/// One `[[custom]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPatternEntry {
    /// Regular expression to extract
    pub pattern: String,
}

impl ConfigFile {
    /// Validate and convert into an [`ExtractorConfig`]
    pub fn into_config(self) -> Result<ExtractorConfig> {
        self.custom
            .into_iter()
            .fold(
                ExtractorConfig::builder()
                    .enabled_types(self.extraction.enabled)
                    .url_maximum_length(self.extraction.url_maximum_length),
                |builder, entry| builder.custom_pattern(entry.pattern),
            )
            .build()
    }
}
