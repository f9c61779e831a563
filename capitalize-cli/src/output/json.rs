//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs an array of input/output pairs
pub struct JsonFormatter<W: Write> {
    writer: W,
    names: Vec<NameData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NameData {
    /// The name as read
    pub input: String,
    /// The capitalized name
    pub output: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            names: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_name(&mut self, input: &str, capitalized: &str) -> Result<()> {
        self.names.push(NameData {
            input: input.to_string(),
            output: capitalized.to_string(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.names)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
