//! JSON and CSV output of the retained product records.
//!
//! Both files are UTF-8 without a BOM and are overwritten on every write.

use super::error::Result;
use super::extract::ProductRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row of the CSV output
pub const CSV_HEADER: [&str; 2] = ["Product Name", "Link"];

/// Write the records as a 2-space indented JSON array of `{name, url}`.
///
/// Non-ASCII text is written literally.
pub fn write_json(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Write the records as CSV with a header row.
///
/// Fields are quoted only when they need it; rows end with CRLF.
pub fn write_csv(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([record.name.as_str(), record.url.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
