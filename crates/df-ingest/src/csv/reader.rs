//! CSV file reading where the first record defines the schema.
//!
//! Real-world lists often contain rows with missing or extra fields, so the
//! reader never enforces a field count. Rows are coerced to the header width
//! with [`normalize_row`] instead.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

use super::row::normalize_row;
use super::source::RecordReader;

/// Upper bound on rows pre-allocated for a preview.
const PREVIEW_PREALLOC_ROWS: usize = 1024;

/// Headers plus a bounded number of normalized data rows, as display text.
///
/// Bytes that are not valid UTF-8 are shown as U+FFFD.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvPreview {
    pub headers: Vec<String>,
    /// Each row has exactly `headers.len()` cells.
    pub rows: Vec<Vec<String>>,
}

impl CsvPreview {
    /// Number of columns defined by the header.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

fn to_text(row: Vec<Vec<u8>>) -> Vec<String> {
    row.iter()
        .map(|cell| String::from_utf8_lossy(cell).into_owned())
        .collect()
}

fn open_csv(path: &Path) -> Result<RecordReader<File>> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RecordReader::new(file))
}

fn read_header_row(reader: &mut RecordReader<File>, path: &Path) -> Result<Vec<String>> {
    reader
        .read_header()
        .map_err(|source| IngestError::ReadHeaders {
            path: path.to_path_buf(),
            source,
        })?
        .map(to_text)
        .ok_or_else(|| IngestError::EmptyCsv {
            path: path.to_path_buf(),
        })
}

/// Reads only the header row.
///
/// Column names are returned as they appear in the file, a leading BOM
/// included: no trimming, de-duplication, or validation.
pub fn read_headers(path: &Path) -> Result<Vec<String>> {
    let mut reader = open_csv(path)?;
    read_header_row(&mut reader, path)
}

/// Reads the headers and the first `n` data rows, each normalized to the
/// header width.
///
/// `n = 0` yields the headers and no rows. Reading stops early at end of input.
pub fn read_head(path: &Path, n: usize) -> Result<CsvPreview> {
    let mut reader = open_csv(path)?;
    let headers = read_header_row(&mut reader, path)?;
    let width = headers.len();

    let mut rows = Vec::with_capacity(n.min(PREVIEW_PREALLOC_ROWS));
    while rows.len() < n {
        let row_number = rows.len() as u64 + 1;
        let row = reader.read_row().map_err(|source| IngestError::ReadRow {
            path: path.to_path_buf(),
            row: row_number,
            source,
        })?;
        let Some(row) = row else {
            break;
        };
        rows.push(normalize_row(to_text(row), width));
    }

    debug!(
        path = %path.display(),
        columns = width,
        rows = rows.len(),
        requested = n,
        "read csv preview"
    );

    Ok(CsvPreview { headers, rows })
}
