//! Streaming NULL normalization.
//!
//! NULL is written as an empty field. The run is a single pass:
//!
//! - the header is copied verbatim, leading BOM included, and fixes the width,
//! - each data row is read, normalized to that width, checked cell by cell
//!   against the policy, and written immediately,
//! - buffered output is flushed at the end and its error checked.
//!
//! Cells are handled as bytes. A cell that is not valid UTF-8 never matches
//! a NULL rule and is written back unchanged.
//!
//! At most one record is held at a time, so memory does not grow with the
//! size of the input.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use csv::Writer;
use tracing::{debug, info, info_span, trace, warn};

use df_common::redact_value;
use df_ingest::{RecordReader, normalize_row};
use df_model::{NullPolicy, TransformStats};

use crate::cancel::CancelHandle;
use crate::error::{Result, TransformError, TransformFailure};

/// Options for a nullify run beyond the policy itself.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    /// Checked before each record is read.
    pub cancel: Option<CancelHandle>,
}

impl TransformOptions {
    #[must_use]
    pub fn with_cancel(mut self, handle: CancelHandle) -> Self {
        self.cancel = Some(handle);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelHandle::is_cancelled)
    }
}

/// Reads `input`, writes a copy to `output` with NULL-like values replaced by
/// empty fields, and returns the run statistics.
///
/// The output is created or truncated. On failure the returned
/// [`TransformFailure`] carries the statistics accumulated so far.
pub fn nullify_file(input: &Path, output: &Path, policy: &NullPolicy) -> Result<TransformStats> {
    nullify_file_with_options(input, output, policy, &TransformOptions::default())
}

/// [`nullify_file`] with cancellation support.
pub fn nullify_file_with_options(
    input: &Path,
    output: &Path,
    policy: &NullPolicy,
    options: &TransformOptions,
) -> Result<TransformStats> {
    let span = info_span!(
        "nullify",
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let source = File::open(input).map_err(|source| {
        TransformFailure::new(
            TransformStats::default(),
            TransformError::OpenInput {
                path: input.to_path_buf(),
                source,
            },
        )
    })?;
    let sink = File::create(output).map_err(|source| {
        TransformFailure::new(
            TransformStats::default(),
            TransformError::CreateOutput {
                path: output.to_path_buf(),
                source,
            },
        )
    })?;

    let result = nullify_stream(source, sink, policy, options);
    match &result {
        Ok(stats) => info!(
            rows_read = stats.rows_read,
            cells_checked = stats.cells_checked,
            cells_nullified = stats.cells_nullified,
            cells_unchanged = stats.cells_unchanged(),
            duration_ms = start.elapsed().as_millis(),
            "nullify complete"
        ),
        Err(failure) if failure.phase().is_setup() => warn!(
            phase = %failure.phase(),
            "nullify failed before any row was written"
        ),
        Err(failure) => warn!(
            phase = %failure.phase(),
            rows_read = failure.stats.rows_read,
            cells_checked = failure.stats.cells_checked,
            cells_nullified = failure.stats.cells_nullified,
            "nullify aborted; output is incomplete"
        ),
    }
    result
}

/// Runs the nullify pass over any reader/writer pair.
///
/// `input` is consumed exactly once; `output` receives the header followed
/// by one normalized record per input data row, in input order.
pub fn nullify_stream<R: Read, W: Write>(
    input: R,
    output: W,
    policy: &NullPolicy,
    options: &TransformOptions,
) -> Result<TransformStats> {
    let mut reader = RecordReader::new(input);
    let mut writer = Writer::from_writer(output);
    let mut stats = TransformStats::default();

    if let Err(error) = stream_records(&mut reader, &mut writer, policy, options, &mut stats) {
        if matches!(
            error,
            TransformError::ReadRow { .. } | TransformError::Cancelled { .. }
        ) {
            // Rows already written stay usable for diagnosis.
            if let Err(flush_error) = writer.flush() {
                warn!(error = %flush_error, "flush after failed run also failed");
            }
        }
        return Err(TransformFailure::new(stats, error));
    }

    writer
        .flush()
        .map_err(|source| TransformFailure::new(stats, TransformError::Flush { source }))?;

    Ok(stats)
}

fn stream_records<R: Read, W: Write>(
    reader: &mut RecordReader<R>,
    writer: &mut Writer<W>,
    policy: &NullPolicy,
    options: &TransformOptions,
    stats: &mut TransformStats,
) -> std::result::Result<(), TransformError> {
    let headers = reader
        .read_header()
        .map_err(|source| TransformError::ReadHeader { source })?
        .ok_or(TransformError::EmptyInput)?;
    writer
        .write_record(&headers)
        .map_err(|source| TransformError::WriteHeader { source })?;
    let width = headers.len();
    debug!(columns = width, ?policy, "copied header");

    loop {
        if options.is_cancelled() {
            warn!(rows_read = stats.rows_read, "nullify cancelled");
            return Err(TransformError::Cancelled {
                rows: stats.rows_read,
            });
        }

        let row_number = stats.rows_read + 1;
        let Some(row) = reader.read_row().map_err(|source| TransformError::ReadRow {
            row: row_number,
            source,
        })?
        else {
            break;
        };
        stats.rows_read += 1;

        let mut row = normalize_row(row, width);
        nullify_record(&mut row, policy, stats);

        writer
            .write_record(&row)
            .map_err(|source| TransformError::WriteRow {
                row: row_number,
                source,
            })?;
    }

    Ok(())
}

/// Applies `policy` to every cell of one record, in place, left to right.
///
/// Every cell counts as checked. Only cells that go from non-empty to empty
/// count as nullified; an empty cell matching the blank rule is left alone.
/// Cells that are not valid UTF-8 never match.
pub fn nullify_record(row: &mut [Vec<u8>], policy: &NullPolicy, stats: &mut TransformStats) {
    for (column, cell) in row.iter_mut().enumerate() {
        stats.cells_checked += 1;
        let Ok(value) = std::str::from_utf8(cell) else {
            continue;
        };
        if policy.is_null(value) && !value.is_empty() {
            trace!(
                row = stats.rows_read,
                column,
                value = redact_value(value),
                "nullified cell"
            );
            stats.cells_nullified += 1;
            cell.clear();
        }
    }
}
