//! Raw record reading with the `csv` crate.
//!
//! The reader is configured to behave like a plain delimiter split: no quote handling, no header
//! handling, rows of any width. Fields therefore reach the row normalizer exactly as they appear
//! in the file (minus the line terminator).

use std::path::Path;

use crate::error::AnalysisResult;

/// A reader builder that splits on `delimiter` and nothing else.
pub fn raw_reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false);
    builder
}

/// Read every record of the file at `path`, header row included.
///
/// The file handle is owned by the reader and released when this function returns, on success
/// and on error alike.
pub fn read_raw_records_from_path(
    path: impl AsRef<Path>,
    delimiter: u8,
) -> AnalysisResult<Vec<Vec<String>>> {
    let mut rdr = raw_reader_builder(delimiter).from_path(path)?;
    read_raw_records_from_reader(&mut rdr)
}

/// Read every record from an existing CSV reader.
pub fn read_raw_records_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> AnalysisResult<Vec<Vec<String>>> {
    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(record.iter().map(str::to_owned).collect());
    }
    Ok(records)
}
