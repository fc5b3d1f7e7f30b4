//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Commented configuration template
const TEMPLATE: &str = r#"# taptext configuration

[extraction]
# Element types to extract, in processing order.
# Built-in types: "mention", "hashtag", "url", "email"
enabled = ["mention", "hashtag", "url"]

# Shorten URLs longer than this many characters (remove to never shorten)
url_maximum_length = 30

# Custom patterns are extracted after the enabled types.
# Matches shorter than two characters are ignored.
# [[custom]]
# pattern = "\\bTODO\\b"

[output]
# One of "text", "json", "markdown"
default_format = "text"
pretty_json = true

[performance]
# Worker threads for --parallel (0 = all cores)
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to choose element types and patterns");
        println!("2. Use it for extraction:");
        println!(
            "   taptext extract -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
