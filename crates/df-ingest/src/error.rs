//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading headers or preview rows.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file could not be opened.
    #[error("open csv {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contains no records at all, so there is no header.
    #[error("read headers: CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// First record could not be parsed.
    #[error("read headers {path}: {source}")]
    ReadHeaders {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    /// A data row could not be parsed.
    #[error("read row {row} of {path}: {source}")]
    ReadRow {
        path: PathBuf,
        /// 1-based data row number (header excluded).
        row: u64,
        #[source]
        source: ReadError,
    },
}

/// A record that could not be read from the CSV stream.
#[derive(Debug, Error)]
pub enum ReadError {
    /// I/O or parse failure reported by the csv reader.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Input ended inside a quoted field. `line` is where the record began.
    #[error("line {line}: extraneous or missing \" in quoted-field")]
    UnterminatedQuote { line: u64 },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::EmptyCsv {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(
            err.to_string(),
            "read headers: CSV file is empty: /path/to/file.csv"
        );
    }

    #[test]
    fn test_unterminated_quote_display() {
        let err = IngestError::ReadRow {
            path: PathBuf::from("list.csv"),
            row: 7,
            source: ReadError::UnterminatedQuote { line: 8 },
        };
        assert_eq!(
            err.to_string(),
            "read row 7 of list.csv: line 8: extraneous or missing \" in quoted-field"
        );
    }

    #[test]
    fn test_open_error_keeps_source() {
        let err = IngestError::Open {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("open csv missing.csv: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
