use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use glob::Pattern;

/// Compare the header row of same-named CSV/TXT files in two directories
#[derive(Parser, Debug)]
#[command(name = "compare_headers", author, version, about, long_about = None)]
pub struct Args {
    /// First directory containing CSV/TXT files
    pub dir1: PathBuf,

    /// Second directory containing CSV/TXT files
    pub dir2: PathBuf,

    /// Path to the output CSV file
    #[arg(short, long, default_value = "header_comparison.csv")]
    pub output: PathBuf,

    /// Field delimiter of the input files
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Filename glob patterns to skip (can be repeated or comma separated)
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    pub ignore: Vec<String>,

    /// Decode files that are not valid UTF-8 as Windows-1252 instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Compare and print the summary without writing the report
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug)]
pub struct Options {
    pub output: PathBuf,
    pub delimiter: u8,
    pub ignore_patterns: Vec<Pattern>,
    pub lossy: bool,
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("header_comparison.csv"),
            delimiter: b',',
            ignore_patterns: Vec::new(),
            lossy: false,
            dry_run: false,
        }
    }
}

pub fn build_options(args: &Args) -> Result<Options> {
    let patterns = args
        .ignore
        .iter()
        .map(|s| Pattern::new(s).with_context(|| format!("Invalid glob pattern: {s}")))
        .collect::<Result<Vec<_>>>()?;

    if !args.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }

    Ok(Options {
        output: args.output.clone(),
        delimiter: args.delimiter as u8,
        ignore_patterns: patterns,
        lossy: args.lossy,
        dry_run: args.dry_run,
    })
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
