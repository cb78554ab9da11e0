pub mod dates;
pub mod delimited;
pub mod normalize;
pub mod spreadsheet;
pub mod traits;
pub mod types;

pub use delimited::CsvReader;
pub use spreadsheet::SpreadsheetReader;
pub use traits::{BookingReader, ReadOutcome};
pub use types::SchemaVariant;
