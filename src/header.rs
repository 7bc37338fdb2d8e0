use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::{HeaderCompareError, Result};
use crate::utils::decode_text;

/// Trimmed column names from the first record of a file, in file order.
pub type HeaderRow = Vec<String>;

/// Reads the first record of delimiter-separated files.
#[derive(Debug, Clone)]
pub struct HeaderReader {
    delimiter: u8,
    lossy: bool,
}

impl Default for HeaderReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            lossy: false,
        }
    }
}

impl HeaderReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Decode invalid UTF-8 as Windows-1252 instead of failing.
    pub fn with_lossy(mut self, lossy: bool) -> Self {
        self.lossy = lossy;
        self
    }

    /// Returns the header row of `path`, or an empty row for an empty file.
    pub fn read_header(&self, path: &Path) -> Result<HeaderRow> {
        let bytes = fs::read(path).map_err(|source| HeaderCompareError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = decode_text(bytes, self.lossy, path)?;
        self.parse_header(&content, path)
    }

    fn parse_header(&self, content: &str, path: &Path) -> Result<HeaderRow> {
        // A blank first line is an empty header; the csv reader would skip it.
        if content.starts_with('\n') || content.starts_with('\r') {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(content.as_bytes());

        match reader.records().next() {
            None => Ok(Vec::new()),
            Some(Ok(record)) => Ok(record.iter().map(|f| f.trim().to_string()).collect()),
            Some(Err(err)) => Err(HeaderCompareError::MalformedRecord {
                path: path.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }
}

/// Reads the comma-separated header row of `path` with strict UTF-8 decoding.
pub fn read_header(path: &Path) -> Result<HeaderRow> {
    HeaderReader::default().read_header(path)
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
