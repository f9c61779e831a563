//! Reading names from files and streams

use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Reads one name per line, skipping blank lines
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the names listed in a file
    pub fn read_names(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(Self::split_names(&content))
    }

    /// Read the names from any buffered reader (e.g. stdin)
    pub fn read_names_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for line in reader.lines() {
            let line = line.context("Failed to read input line")?;
            if !line.trim().is_empty() {
                names.push(line);
            }
        }

        Ok(names)
    }

    /// Split text into non-blank lines
    pub fn split_names(content: &str) -> Vec<String> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}
