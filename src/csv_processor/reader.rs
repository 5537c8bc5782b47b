use crate::csv_processor::TabularDocument;
use crate::utils::{CsvTokenizerError, Result};
use std::collections::HashSet;

/// Parses raw payload bytes into a `TabularDocument`. First row is the
/// header. Invalid UTF-8, ragged rows, and duplicate header names are all
/// parse failures that abort the invocation.
pub fn parse_document(payload: &[u8]) -> Result<TabularDocument> {
    let content = String::from_utf8(payload.to_vec())?;

    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(CsvTokenizerError::CsvError)?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut seen = HashSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(CsvTokenizerError::DuplicateColumn(header.clone()));
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(TabularDocument::new(headers, rows))
}
