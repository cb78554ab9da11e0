use crate::error::ReadError;
use crate::models::{BookingRecord, SkipReason};
use async_trait::async_trait;

/// Records kept from one file, plus the rows that were dropped and why
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    pub records: Vec<BookingRecord>,
    /// (1-based data row number, reason)
    pub skipped: Vec<(usize, SkipReason)>,
}

impl ReadOutcome {
    pub fn rows_read(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Common trait for all booking export readers
/// Each file format gets one implementation; the column layout is chosen separately
#[async_trait]
pub trait BookingReader: Send + Sync {
    /// Read and normalize every row of the export
    async fn read(&self) -> Result<ReadOutcome, ReadError>;

    /// Name of the file format, for logging
    fn format_name(&self) -> &'static str;
}
