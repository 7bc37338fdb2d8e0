//
// lib.rs
// compare-headers
//
// Library entry that re-exports the enumerator, header extractor, comparator and report writer so the binary and tests share one pipeline.
//
// Thales Matheus Mendonça Santos - November 2025
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod compare;
pub mod error;
pub mod header;
pub mod report;
pub mod scanner;
pub mod utils;

pub use cli::{build_options, Args, Options};
pub use compare::{compare, compare_dirs, ComparisonResult, Status, Summary};
pub use error::{HeaderCompareError, Result};
pub use header::{read_header, HeaderReader, HeaderRow};
pub use report::{write_report, write_report_to};
pub use scanner::{index_dir, FileIndex};
