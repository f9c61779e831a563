//! Command-line entry point for name capitalization

use anyhow::Result;
use capitalize_cli::commands::Commands;
use clap::Parser;

/// Language-aware capitalization of personal names
#[derive(Debug, Parser)]
#[command(name = "capitalize", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_process_flags() {
        let cli = Cli::try_parse_from([
            "capitalize",
            "process",
            "-e",
            "of",
            "-s",
            "McElroy",
            "--no-defaults",
            "john mcelroy",
        ])
        .unwrap();

        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.exceptions, vec!["of"]);
                assert_eq!(args.surnames, vec!["McElroy"]);
                assert!(args.no_defaults);
                assert_eq!(args.names, vec!["john mcelroy"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
