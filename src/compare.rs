use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::cli::Options;
use crate::error::Result;
use crate::header::HeaderReader;
use crate::scanner::{index_dir, FileIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Match,
    Mismatch,
    Missing,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Match => "match",
            Status::Mismatch => "mismatch",
            Status::Missing => "missing",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonResult {
    pub filename: String,
    pub status: Status,
    pub details: String,
}

impl ComparisonResult {
    fn matched(filename: &str) -> Self {
        Self {
            filename: filename.to_string(),
            status: Status::Match,
            details: String::new(),
        }
    }

    fn missing_from(filename: &str, dir: &Path) -> Self {
        // Normalized so `dir/` and `dir` read the same.
        let label: PathBuf = dir.components().collect();
        Self {
            filename: filename.to_string(),
            status: Status::Missing,
            details: format!("{filename} not found in {}", label.display()),
        }
    }
}

#[derive(Default, Debug, PartialEq, Eq)]
pub struct Summary {
    pub matched: usize,
    pub mismatched: usize,
    pub missing: usize,
}

impl Summary {
    pub fn from_results(results: &[ComparisonResult]) -> Self {
        let mut summary = Summary::default();
        for result in results {
            match result.status {
                Status::Match => summary.matched += 1,
                Status::Mismatch => summary.mismatched += 1,
                Status::Missing => summary.missing += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.matched + self.mismatched + self.missing
    }
}

/// Entries of `headers` absent from `other`, in original order, duplicates kept.
fn missing_headers<'a>(headers: &'a [String], other: &[String]) -> Vec<&'a str> {
    let present: HashSet<&str> = other.iter().map(String::as_str).collect();
    headers
        .iter()
        .map(String::as_str)
        .filter(|h| !present.contains(h))
        .collect()
}

fn quoted_list(headers: &[&str]) -> String {
    headers
        .iter()
        .map(|h| format!("'{h}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn mismatch_details(missing_in_2: &[&str], missing_in_1: &[&str]) -> String {
    let mut parts = Vec::with_capacity(2);
    if !missing_in_2.is_empty() {
        parts.push(format!(
            "Dir1 headers missing in Dir2: {}",
            quoted_list(missing_in_2)
        ));
    }
    if !missing_in_1.is_empty() {
        parts.push(format!(
            "Dir2 headers missing in Dir1: {}",
            quoted_list(missing_in_1)
        ));
    }
    parts.join("; ")
}

fn compare_pair(
    filename: &str,
    file1: &Path,
    file2: &Path,
    reader: &HeaderReader,
) -> Result<ComparisonResult> {
    let headers1 = reader.read_header(file1)?;
    let headers2 = reader.read_header(file2)?;

    let missing_in_2 = missing_headers(&headers1, &headers2);
    let missing_in_1 = missing_headers(&headers2, &headers1);

    if missing_in_2.is_empty() && missing_in_1.is_empty() {
        return Ok(ComparisonResult::matched(filename));
    }

    Ok(ComparisonResult {
        filename: filename.to_string(),
        status: Status::Mismatch,
        details: mismatch_details(&missing_in_2, &missing_in_1),
    })
}

/// Classifies every filename in either index, sorted by filename.
pub fn compare(
    index1: &FileIndex,
    index2: &FileIndex,
    reader: &HeaderReader,
) -> Result<Vec<ComparisonResult>> {
    let all_names: BTreeSet<&str> = index1.names().chain(index2.names()).collect();
    let mut results = Vec::with_capacity(all_names.len());

    for name in all_names {
        let result = match (index1.get(name), index2.get(name)) {
            (None, _) => ComparisonResult::missing_from(name, &index1.root),
            (_, None) => ComparisonResult::missing_from(name, &index2.root),
            (Some(file1), Some(file2)) => compare_pair(name, file1, file2, reader)?,
        };
        debug!(file = name, status = %result.status, "compared");
        results.push(result);
    }

    Ok(results)
}

/// Indexes both directories, then compares them.
pub fn compare_dirs(dir1: &Path, dir2: &Path, opts: &Options) -> Result<Vec<ComparisonResult>> {
    let index1 = index_dir(dir1, &opts.ignore_patterns)?;
    let index2 = index_dir(dir2, &opts.ignore_patterns)?;

    let reader = HeaderReader::new()
        .with_delimiter(opts.delimiter)
        .with_lossy(opts.lossy);

    let results = compare(&index1, &index2, &reader)?;

    let summary = Summary::from_results(&results);
    info!(
        matched = summary.matched,
        mismatched = summary.mismatched,
        missing = summary.missing,
        "comparison finished"
    );

    Ok(results)
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
