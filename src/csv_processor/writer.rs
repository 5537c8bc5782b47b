use crate::csv_processor::TabularDocument;
use crate::utils::{CsvTokenizerError, Result};

/// Serializes a document back to CSV bytes: header row first, then data
/// rows in document order. Cell values pass through unmodified.
pub fn write_document(document: &TabularDocument) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(&document.headers)?;
    for row in &document.rows {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| CsvTokenizerError::IoError(e.into_error()))
}
