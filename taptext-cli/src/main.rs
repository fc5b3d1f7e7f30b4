//! taptext command-line entry point

use anyhow::Result;
use clap::Parser;
use taptext_cli::commands::Commands;

/// Extract mentions, hashtags, URLs, emails and custom patterns from text
#[derive(Debug, Parser)]
#[command(name = "taptext", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
