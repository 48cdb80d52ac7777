//! Load return records from an uploaded CSV export.

use std::io::Read;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::domains::returns::models::ReturnRecord;

/// Columns every returns CSV must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["sku", "category", "return_reason"];

#[derive(Debug, Error)]
pub enum CsvLoadError {
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
}

/// Parse a returns CSV into records.
///
/// Every column is kept as a string field and `return_reason` is copied to
/// `reason` so the analyze pipeline picks it up. Rows with an empty
/// `return_reason` are dropped.
pub fn load_returns_csv<R: Read>(input: R) -> Result<Vec<ReturnRecord>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CsvLoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.records() {
        let row = row?;
        let mut record = ReturnRecord::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            record.0.insert(header.to_string(), Value::String(value.to_string()));
        }

        let reason = match record.get("return_reason") {
            Some(Value::String(reason)) if !reason.is_empty() => reason.clone(),
            _ => {
                dropped += 1;
                continue;
            }
        };
        records.push(record.with_field("reason", reason));
    }

    info!(rows = records.len(), dropped, "Loaded returns CSV");
    Ok(records)
}
