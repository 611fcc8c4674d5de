//! CSV ingestion for df.
//!
//! The df tool is CSV-first and the header defines the schema: every data
//! row is coerced to the header width, padding short rows with empty fields
//! and truncating long ones.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use df_ingest::{read_head, read_headers};
//!
//! let headers = read_headers(Path::new("contacts.csv"))?;
//! let preview = read_head(Path::new("contacts.csv"), 5)?;
//! assert_eq!(preview.width(), headers.len());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, ReadError, Result};

// === CSV Reading ===
pub use self::csv::{CsvPreview, RecordReader, normalize_row, read_head, read_headers};
