use crate::error::ReadError;
use crate::readers::normalize::normalize_row;
use crate::readers::traits::{BookingReader, ReadOutcome};
use crate::readers::types::{RawCell, RawRow, SchemaVariant};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reader for comma-separated exports (Airbnb)
pub struct CsvReader {
    path: PathBuf,
    schema: SchemaVariant,
}

impl CsvReader {
    pub fn new(path: impl Into<PathBuf>, schema: SchemaVariant) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    /// Parse file content: header line discarded, one record per data line.
    ///
    /// Fields are split on every comma, so a stray quote or a bad byte only
    /// affects its own line.
    pub fn parse(&self, content: &[u8]) -> Result<ReadOutcome, ReadError> {
        let cols = self.schema.columns();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(content);

        let mut outcome = ReadOutcome::default();
        for (idx, result) in reader.byte_records().enumerate() {
            let record = result?;
            let row: RawRow = record.iter().map(to_cell).collect();
            match normalize_row(&row, &cols) {
                Ok(booking) => outcome.records.push(booking),
                Err(reason) => {
                    debug!("Skipping CSV row {}: {}", idx + 1, reason);
                    outcome.skipped.push((idx + 1, reason));
                }
            }
        }
        Ok(outcome)
    }
}

fn to_cell(field: &[u8]) -> RawCell {
    let text = String::from_utf8_lossy(field);
    let text = text.trim();
    let text = text
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text);
    RawCell::Text(text.to_string())
}

#[async_trait]
impl BookingReader for CsvReader {
    async fn read(&self) -> Result<ReadOutcome, ReadError> {
        info!("Reading CSV export {}", self.path.display());

        let content = tokio::fs::read(&self.path).await.map_err(|source| ReadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let outcome = self.parse(&content)?;
        info!(
            "CSV export: {} rows, {} kept, {} skipped",
            outcome.rows_read(),
            outcome.records.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    fn format_name(&self) -> &'static str {
        "csv"
    }
}
