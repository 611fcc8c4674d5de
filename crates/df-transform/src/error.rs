//! Error types for streaming transforms.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use df_ingest::ReadError;
use df_model::{Phase, TransformStats};
use thiserror::Error;

/// A fatal failure in one phase of a nullify run.
#[derive(Debug, Error)]
pub enum TransformError {
    // === Setup ===
    /// Input file could not be opened.
    #[error("open input csv {path}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be created or truncated.
    #[error("create output csv {path}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input has no records, so there is no header to copy.
    #[error("read headers: input is empty")]
    EmptyInput,

    /// Header record could not be parsed.
    #[error("read headers: {source}")]
    ReadHeader {
        #[source]
        source: ReadError,
    },

    /// Output rejected the header.
    #[error("write headers: {source}")]
    WriteHeader {
        #[source]
        source: csv::Error,
    },

    // === Streaming ===
    /// A data row could not be parsed. `row` is 1-based, header excluded.
    #[error("read row {row}: {source}")]
    ReadRow {
        row: u64,
        #[source]
        source: ReadError,
    },

    /// Output rejected a transformed row.
    #[error("write row {row}: {source}")]
    WriteRow {
        row: u64,
        #[source]
        source: csv::Error,
    },

    /// Buffered output could not be flushed at the end of the run.
    #[error("flush output csv: {source}")]
    Flush {
        #[source]
        source: io::Error,
    },

    /// Run was stopped through its cancel handle between records.
    #[error("cancelled after {rows} rows")]
    Cancelled { rows: u64 },
}

impl TransformError {
    pub fn phase(&self) -> Phase {
        match self {
            TransformError::OpenInput { .. } => Phase::OpenInput,
            TransformError::CreateOutput { .. } => Phase::CreateOutput,
            TransformError::EmptyInput | TransformError::ReadHeader { .. } => Phase::ReadHeader,
            TransformError::WriteHeader { .. } => Phase::WriteHeader,
            TransformError::ReadRow { .. } => Phase::ReadRow,
            TransformError::WriteRow { .. } => Phase::WriteRow,
            TransformError::Flush { .. } => Phase::Flush,
            TransformError::Cancelled { .. } => Phase::Cancelled,
        }
    }
}

/// A failed run: the error plus whatever statistics were accumulated before it.
///
/// The output file is left partially written and should not be treated as
/// authoritative.
#[derive(Debug)]
pub struct TransformFailure {
    pub stats: TransformStats,
    pub error: TransformError,
}

impl TransformFailure {
    pub fn new(stats: TransformStats, error: TransformError) -> Self {
        Self { stats, error }
    }

    pub fn phase(&self) -> Phase {
        self.error.phase()
    }
}

impl fmt::Display for TransformFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for TransformFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.error.source()
    }
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformFailure>;
