//! Extract command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, InputSource};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use taptext_core::{ElementType, Extraction, Extractor};

/// Input argument that reads standard input
const STDIN_ARG: &str = "-";

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Element type to extract, repeatable (see `taptext list types`)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// Shorten URLs longer than this many characters
    #[arg(long, value_name = "N")]
    pub url_max: Option<usize>,

    /// Additional custom pattern, repeatable
    #[arg(long, value_name = "PATTERN")]
    pub custom: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extract from multiple sources in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel runs (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per element
    Text,
    /// JSON array with the rewritten text and elements per source
    Json,
    /// Markdown table per source
    Markdown,
}

impl OutputFormat {
    /// Name accepted by `--format` and `default_format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `taptext list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "One tab-separated line per element",
            OutputFormat::Json => "JSON array with the rewritten text and elements",
            OutputFormat::Markdown => "Markdown table per source",
        }
    }

    /// Parse a format name from configuration
    pub fn parse(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::UnknownFormat(name.to_string()).into())
    }
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting extraction");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&cli_config.output.default_format)?,
        };

        let extractor_config =
            cli_config.extractor_config(self.parse_types()?, &self.custom, self.url_max)?;
        log::debug!("Extractor configuration: {:?}", extractor_config);
        let extractor = Extractor::new(extractor_config);

        let sources = self.read_sources()?;
        log::info!("Extracting from {} source(s)", sources.len());

        let progress = ProgressReporter::new(sources.len(), self.quiet);

        let extractions = if self.parallel {
            let threads = cli_config.worker_threads(self.threads);
            log::info!("Using {threads} worker threads");
            extract_parallel(&extractor, &sources, &progress, threads)?
        } else {
            sources
                .iter()
                .map(|source| extract_source(&extractor, source, &progress))
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let mut formatter = self.create_formatter(format, cli_config.output.pretty_json)?;
        for (source, extraction) in sources.iter().zip(&extractions) {
            formatter.format_extraction(&source.name, extraction)?;
        }
        formatter.finish()?;

        log::info!("Extraction complete");
        Ok(())
    }

    /// Element types named with `--type`, if any
    fn parse_types(&self) -> Result<Option<Vec<ElementType>>> {
        if self.types.is_empty() {
            return Ok(None);
        }

        let types = self
            .types
            .iter()
            .map(|name| name.parse::<ElementType>().map_err(CliError::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(types))
    }

    /// Read stdin and every file matched by the input patterns
    fn read_sources(&self) -> Result<Vec<InputSource>> {
        let patterns: Vec<String> = self
            .input
            .iter()
            .filter(|arg| *arg != STDIN_ARG)
            .cloned()
            .collect();

        let mut sources = Vec::new();
        if patterns.len() < self.input.len() {
            sources.push(FileReader::read_stream(io::stdin().lock())?);
        }
        if !patterns.is_empty() {
            for path in resolve_patterns(&patterns)? {
                sources.push(FileReader::read_source(&path)?);
            }
        }
        Ok(sources)
    }

    /// Create the formatter for the selected format and destination
    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

fn extract_source(
    extractor: &Extractor,
    source: &InputSource,
    progress: &ProgressReporter,
) -> Result<Extraction> {
    let extraction = extractor
        .extract(&source.text)
        .map_err(|err| CliError::extraction(&source.name, err))?;
    progress.input_done(extraction.elements.len());
    Ok(extraction)
}

fn extract_parallel(
    extractor: &Extractor,
    sources: &[InputSource],
    progress: &ProgressReporter,
    threads: usize,
) -> Result<Vec<Extraction>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")?;

    pool.install(|| {
        sources
            .par_iter()
            .map(|source| extract_source(extractor, source, progress))
            .collect()
    })
}
