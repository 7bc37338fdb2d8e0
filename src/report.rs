use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use tracing::info;

use crate::compare::ComparisonResult;
use crate::error::{HeaderCompareError, Result};

pub const REPORT_HEADER: [&str; 3] = ["filename", "status", "details"];

/// Serializes `results` in their given order under a fixed three-column header.
pub fn write_report_to<W: Write>(results: &[ComparisonResult], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(REPORT_HEADER)?;
    for result in results {
        wtr.write_record([
            result.filename.as_str(),
            result.status.as_str(),
            result.details.as_str(),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the report to `output`, replacing any existing file.
pub fn write_report(results: &[ComparisonResult], output: &Path) -> Result<()> {
    let file = File::create(output).map_err(|source| HeaderCompareError::ReportIo {
        path: output.to_path_buf(),
        source,
    })?;
    write_report_to(results, file)?;
    info!(path = %output.display(), rows = results.len(), "report written");
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
