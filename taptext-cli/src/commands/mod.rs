//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use taptext_core::ElementType;

pub mod extract;
pub mod generate_config;

pub use extract::{ExtractArgs, OutputFormat};
pub use generate_config::GenerateConfigArgs;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract elements from text files or stdin
    Extract(ExtractArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List element types accepted by `--type`
    Types,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Types => {
                let mut lines: Vec<String> = ElementType::builtin_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect();
                lines.push("custom:<PATTERN>".to_string());
                lines
            }
            ListCommands::Formats => [
                OutputFormat::Text,
                OutputFormat::Json,
                OutputFormat::Markdown,
            ]
            .iter()
            .map(|format| format!("{:<10} {}", format.name(), format.description()))
            .collect(),
        }
    }
}
