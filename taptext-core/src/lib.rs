//! Extraction of typed, addressable elements from text
//!
//! This crate finds mentions, hashtags, URLs, emails and custom pattern
//! matches in a text and reports each one as a character range with a type
//! tag and a normalized payload, so a renderer can attach styling or tap
//! targets to exact positions.
//!
//! # Architecture
//!
//! - **Matcher**: lazy, non-overlapping pattern matches over a character
//!   range ([`PatternMatcher`])
//! - **Strategies**: per-type post-processing selected through a
//!   type-to-strategy table ([`extract::STRATEGIES`])
//! - **Extractor**: runs every configured type over a text, handling URL
//!   truncation first ([`Extractor`])
//!
//! Ranges count characters, not bytes.
//!
//! # Example
//!
//! ```rust
//! use taptext_core::{extract_elements, CharRange, ElementType};
//!
//! let text = "Hello @john_doe, check #swift out!";
//! let mentions = extract_elements(&ElementType::Mention, text, CharRange::full(text), None)
//!     .unwrap();
//!
//! assert_eq!(mentions.len(), 1);
//! assert_eq!(mentions[0].payload.display_text(), "john_doe");
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod extractor;
pub mod matcher;
pub mod patterns;
pub mod types;

pub use config::{ExtractorConfig, ExtractorConfigBuilder};
pub use error::{ExtractError, PatternError, Result};
pub use extract::{extract_elements, extract_urls, FilterPredicate, UrlExtraction};
pub use extractor::{Extraction, Extractor};
pub use matcher::{Matches, PatternMatch, PatternMatcher};
pub use types::{CharRange, ElementKind, ElementPayload, ElementType, ExtractedElement};
