use crate::models::Source;
use std::path::PathBuf;
use thiserror::Error;

/// A file that could not be turned into rows at all
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed delimited text: {0}")]
    Csv(#[from] csv::Error),
    #[error("corrupt spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("spreadsheet has no worksheet")]
    NoWorksheet,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("a load is already in progress")]
    AlreadyLoading,
    #[error("{platform} export could not be read: {error}")]
    Read {
        platform: Source,
        #[source]
        error: ReadError,
    },
}
