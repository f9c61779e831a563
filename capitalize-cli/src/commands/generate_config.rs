//! Generate config command implementation

use anyhow::{Context, Result};
use capitalize_core::RuleConfig;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Write the full built-in lists instead of an extension template
    #[arg(long)]
    pub builtin: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rule file template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rule file generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add the particles and surnames your names need");
        println!("2. Validate your rules:");
        println!("   capitalize validate --rules {}", self.output.display());
        println!("3. Use them for processing:");
        println!(
            "   capitalize process -i names.txt --rules {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate the rule file content
    pub fn generate_template(&self) -> Result<String> {
        if self.builtin {
            let body = RuleConfig::builtin().to_toml_string()?;
            return Ok(format!(
                "# Built-in capitalization rules\n# Edit freely; inherit_defaults = false means only these words apply.\n\n{body}"
            ));
        }

        Ok(r#"# Name capitalization rules

# Keep the built-in particles (da, de, van, von, ...) and surnames
inherit_defaults = true

[metadata]
name = "Custom rules"
description = "Extra particles and surnames"

# Words rendered exactly as written, e.g. lowercase particles
[exceptions]
words = [
    # "af",
    # "of",
]

# Surnames with fixed internal casing
[surnames]
words = [
    # "McElroy",
    # "MacDonald",
]
"#
        .to_string())
    }
}
