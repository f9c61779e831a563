//! CLI command implementations

use capitalize_core::config::defaults::{DEFAULT_EXCEPTIONS, DEFAULT_SURNAMES};
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Capitalize names from arguments, files, or stdin
    Process(process::ProcessArgs),

    /// Validate a rule file
    Validate(validate::ValidateArgs),

    /// Generate a rule file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the built-in exceptions (particles)
    Exceptions,

    /// List the built-in fixed-casing surnames
    Surnames,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Exceptions => word_lines("Built-in exceptions", DEFAULT_EXCEPTIONS),
            ListCommands::Surnames => word_lines("Built-in surnames", DEFAULT_SURNAMES),
            ListCommands::Formats => {
                let mut lines = vec!["Available output formats:".to_string()];
                lines.extend(
                    process::OutputFormat::all()
                        .iter()
                        .map(|(name, description)| format!("  {name:<10} - {description}")),
                );
                lines
            }
        }
    }

    /// Execute the list command
    pub fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}

fn word_lines(title: &str, words: &[&str]) -> Vec<String> {
    let mut lines = vec![format!("{title} ({}):", words.len())];
    lines.extend(words.iter().map(|word| format!("  {word}")));
    lines
}
