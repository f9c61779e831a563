//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs a two-column table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    name_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            name_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_name(&mut self, input: &str, capitalized: &str) -> Result<()> {
        if self.name_count == 0 {
            writeln!(self.writer, "| Input | Capitalized |")?;
            writeln!(self.writer, "|-------|-------------|")?;
        }
        self.name_count += 1;
        writeln!(
            self.writer,
            "| {} | {} |",
            escape_cell(input),
            escape_cell(capitalized)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total names: {}*", self.name_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn escape_cell(text: &str) -> String {
    text.trim().replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_output() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter.format_name("wernher von braun", "Wernher von Braun").unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("| Input | Capitalized |\n"));
        assert!(output.contains("| wernher von braun | Wernher von Braun |"));
        assert!(output.contains("*Total names: 1*"));
    }

    #[test]
    fn test_pipe_is_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }
}
