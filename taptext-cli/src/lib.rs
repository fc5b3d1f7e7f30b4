//! taptext CLI library
//!
//! This library provides the command-line interface for extracting
//! mentions, hashtags, URLs, emails and custom patterns from text files.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::CliError;
