//! Batch extraction over every configured element type

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::extract::{extract_elements, extract_urls, FilterPredicate};
use crate::types::{CharRange, ElementType, ExtractedElement};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Result of running every enabled type over one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Text the element ranges refer to (URLs possibly shortened)
    pub text: String,
    /// Elements grouped by type in enabled order, ascending within a group
    pub elements: Vec<ExtractedElement>,
}

impl Extraction {
    /// Elements of one type
    pub fn of_type<'a>(
        &'a self,
        element_type: &'a ElementType,
    ) -> impl Iterator<Item = &'a ExtractedElement> + 'a {
        self.elements
            .iter()
            .filter(move |element| &element.element_type == element_type)
    }

    /// Substring of the returned text covered by `element`
    pub fn resolve(&self, element: &ExtractedElement) -> Option<&str> {
        element.range.slice(&self.text)
    }

    /// Number of extracted elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing was extracted
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Runs the configured element types over texts
///
/// URLs are processed first because truncation rewrites the text; every
/// other type then runs over the rewritten text, so all ranges in one
/// [`Extraction`] refer to the same string.
#[derive(Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
    filters: HashMap<ElementType, Arc<FilterPredicate>>,
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .field("filtered_types", &self.filters.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Extractor {
    /// Create an extractor with the given configuration
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            filters: HashMap::new(),
        }
    }

    /// Only accept elements of `element_type` whose text satisfies `predicate`
    pub fn with_filter<F>(mut self, element_type: ElementType, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.filters.insert(element_type, Arc::new(predicate));
        self
    }

    /// Get the current configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn filter_for(&self, element_type: &ElementType) -> Option<&FilterPredicate> {
        self.filters.get(element_type).map(|filter| filter.as_ref())
    }

    /// Extract every enabled type from `text`
    pub fn extract(&self, text: &str) -> Result<Extraction> {
        let mut working = text.to_string();
        let mut elements = Vec::new();

        if self.config.is_enabled(&ElementType::Url) {
            let urls = extract_urls(
                &working,
                CharRange::full(&working),
                self.config.url_maximum_length(),
                self.filter_for(&ElementType::Url),
            )?;
            working = urls.text;
            elements.extend(urls.elements);
        }

        for element_type in self
            .config
            .enabled_types()
            .iter()
            .filter(|element_type| **element_type != ElementType::Url)
        {
            let found = extract_elements(
                element_type,
                &working,
                CharRange::full(&working),
                self.filter_for(element_type),
            )?;
            elements.extend(found);
        }

        debug!(count = elements.len(), "extraction complete");
        Ok(Extraction {
            text: working,
            elements,
        })
    }

    /// Extract from many independent texts, in parallel when the
    /// `parallel` feature is enabled. Results keep the input order.
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<Result<Extraction>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        let results = texts
            .par_iter()
            .map(|text| self.extract(text.as_ref()))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results = texts.iter().map(|text| self.extract(text.as_ref())).collect();

        results
    }
}
