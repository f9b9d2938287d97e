//! CSV export for hourly status records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::StatusRecord;

/// Column header for CSV telemetry export.
const HEADER: &str = "hour,sunlight,power_generated_w,charge_level_wh";

/// Exports status records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per hour. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[StatusRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes status records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[StatusRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for r in records {
        wtr.write_record(&[
            r.hour.to_string(),
            format!("{:.2}", r.sunlight),
            format!("{:.4}", r.power_generated_w),
            format!("{:.4}", r.charge_level_wh),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
