//! Append-only CSV result sink.
//!
//! One row per benchmark invocation. The header is written only when the
//! destination is missing or empty; after that, rows are appended and
//! never rewritten or deduplicated.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::runner::BenchRecord;

/// Appends one result record to `path`, writing the header first if the
/// file does not exist yet or is empty.
pub fn append_record(path: &Path, record: &BenchRecord) -> io::Result<()> {
    let need_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let mut f = OpenOptions::new().create(true).append(true).open(path)?;

    if need_header {
        writeln!(f, "{}", BenchRecord::CSV_HEADER)?;
    }
    writeln!(f, "{}", record.csv_row())
}
