//! Process command implementation

use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::rule_source::RuleSource;
use anyhow::{Context, Result};
use capitalize_core::{Capitalizer, Options};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Names to capitalize (reads stdin when no names or files are given)
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Input files or patterns with one name per line (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Additional exception (fixed-casing word), repeatable
    #[arg(short, long = "exception", value_name = "WORD")]
    pub exceptions: Vec<String>,

    /// Additional surname with special casing, repeatable
    #[arg(short, long = "surname", value_name = "WORD")]
    pub surnames: Vec<String>,

    /// TOML rule file
    #[arg(short, long, value_name = "FILE", env = "CAPITALIZE_RULES")]
    pub rules: Option<PathBuf>,

    /// Ignore the built-in exception and surname lists
    #[arg(long)]
    pub no_defaults: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One capitalized name per line
    Text,
    /// JSON array of input/output pairs
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// All formats with their descriptions
    pub fn all() -> [(&'static str, &'static str); 3] {
        [
            ("text", "One capitalized name per line"),
            ("json", "JSON array of input/output pairs"),
            ("markdown", "Markdown table"),
        ]
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting name capitalization");
        log::debug!("Arguments: {:?}", self);

        let capitalizer = self.build_capitalizer()?;
        let mut formatter = self.create_formatter()?;

        if !self.names.is_empty() {
            log::info!("Capitalizing {} names from arguments", self.names.len());
            write_names(&capitalizer, &self.names, formatter.as_mut())?;
        } else if !self.input.is_empty() {
            self.process_files(&capitalizer, formatter.as_mut())?;
        } else {
            log::info!("Reading names from stdin");
            let names = FileReader::read_names_from(io::stdin().lock())?;
            write_names(&capitalizer, &names, formatter.as_mut())?;
        }

        formatter.finish()
    }

    /// Build the capitalizer from the rule file and command-line entries
    pub fn build_capitalizer(&self) -> Result<Capitalizer> {
        let extra = Options::new()
            .with_exceptions(self.exceptions.iter().cloned())
            .with_surnames(self.surnames.iter().cloned());

        RuleSource::from_path(self.rules.clone()).build_capitalizer(&extra, self.no_defaults)
    }

    fn process_files(
        &self,
        capitalizer: &Capitalizer,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for file in &files {
            let names = FileReader::read_names(file)?;
            write_names(capitalizer, &names, formatter)?;
            progress.file_completed(&file.display().to_string(), names.len());
        }

        progress.finish();
        log::info!("Capitalized {} names", progress.names_processed());
        Ok(())
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout().lock()),
        };

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };
        Ok(formatter)
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
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}

fn write_names(
    capitalizer: &Capitalizer,
    names: &[String],
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    for name in names {
        formatter.format_name(name, &capitalizer.capitalize(name))?;
    }
    Ok(())
}
