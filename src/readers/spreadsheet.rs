use crate::error::ReadError;
use crate::readers::normalize::normalize_row;
use crate::readers::traits::{BookingReader, ReadOutcome};
use crate::readers::types::{RawCell, RawRow, SchemaVariant};
use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use std::path::PathBuf;
use tracing::{debug, info};

/// Reader for spreadsheet exports (Booking.com), first worksheet only
pub struct SpreadsheetReader {
    path: PathBuf,
    schema: SchemaVariant,
}

impl SpreadsheetReader {
    pub fn new(path: impl Into<PathBuf>, schema: SchemaVariant) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    /// Parse workbook bytes: row 0 is the header, the rest are bookings.
    pub fn parse(&self, content: &[u8]) -> Result<ReadOutcome, ReadError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(content))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(ReadError::NoWorksheet)??;

        debug!("Worksheet range: {:?}", range.get_size());

        let cols = self.schema.columns();
        let mut outcome = ReadOutcome::default();
        for (idx, cells) in range.rows().skip(1).enumerate() {
            let row: RawRow = cells.iter().map(to_raw).collect();
            match normalize_row(&row, &cols) {
                Ok(booking) => outcome.records.push(booking),
                Err(reason) => {
                    debug!("Skipping spreadsheet row {}: {}", idx + 1, reason);
                    outcome.skipped.push((idx + 1, reason));
                }
            }
        }
        Ok(outcome)
    }
}

fn to_raw(cell: &Data) -> RawCell {
    match cell {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Text(b.to_string()),
        // the workbook knows its own epoch (1900 or 1904)
        Data::DateTime(dt) if dt.is_datetime() => dt
            .as_datetime()
            .map_or(RawCell::Empty, |d| RawCell::Date(d.date())),
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
    }
}

#[async_trait]
impl BookingReader for SpreadsheetReader {
    async fn read(&self) -> Result<ReadOutcome, ReadError> {
        info!("Reading spreadsheet export {}", self.path.display());

        let content = tokio::fs::read(&self.path).await.map_err(|source| ReadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let outcome = self.parse(&content)?;
        info!(
            "Spreadsheet export: {} rows, {} kept, {} skipped",
            outcome.rows_read(),
            outcome.records.len(),
            outcome.skipped.len()
        );
        Ok(outcome)
    }

    fn format_name(&self) -> &'static str {
        "spreadsheet"
    }
}
