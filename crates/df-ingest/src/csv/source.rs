//! Record-at-a-time CSV reading over raw bytes.
//!
//! Cells are kept as bytes so files in legacy encodings (Latin-1 exports are
//! common) pass through untouched. The input is wrapped in [`TrackedInput`],
//! which watches the byte stream for the two things the csv parser does not
//! report: a leading UTF-8 BOM, which the parser strips, and end of input
//! inside a quoted field, which the parser accepts as a complete record.

use std::io::{self, Read};

use csv::{ByteRecord, Reader, ReaderBuilder};

use crate::error::ReadError;

const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";

/// Where the byte stream currently sits relative to CSV field syntax.
///
/// Mirrors the parser's default dialect: `,` delimiter, `"` quote with
/// doubling as the escape, and any of `\r`, `\n` ending a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

impl FieldState {
    fn next(self, byte: u8) -> Self {
        match (self, byte) {
            (FieldState::Quoted, b'"') => FieldState::QuoteInQuoted,
            (FieldState::Quoted, _) => FieldState::Quoted,
            (FieldState::QuoteInQuoted, b'"') => FieldState::Quoted,
            (_, b',' | b'\n' | b'\r') => FieldState::Start,
            (FieldState::Start, b'"') => FieldState::Quoted,
            _ => FieldState::Unquoted,
        }
    }
}

/// Pass-through reader that records what went by.
struct TrackedInput<R> {
    inner: R,
    bytes_read: u64,
    /// Leading bytes held back until a BOM is ruled in or out.
    head: Vec<u8>,
    head_settled: bool,
    has_bom: bool,
    state: FieldState,
    exhausted: bool,
}

impl<R> TrackedInput<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            bytes_read: 0,
            head: Vec::with_capacity(UTF8_BOM.len()),
            head_settled: false,
            has_bom: false,
            state: FieldState::Start,
            exhausted: false,
        }
    }

    fn observe(&mut self, mut bytes: &[u8]) {
        while !self.head_settled
            && let Some((&byte, rest)) = bytes.split_first()
        {
            bytes = rest;
            self.head.push(byte);
            if !UTF8_BOM.starts_with(&self.head) {
                self.settle_head();
            } else if self.head.len() == UTF8_BOM.len() {
                // The parser skips the BOM, so it never reaches field syntax.
                self.has_bom = true;
                self.head_settled = true;
                self.head.clear();
            }
        }
        for &byte in bytes {
            self.state = self.state.next(byte);
        }
    }

    fn settle_head(&mut self) {
        if self.head_settled {
            return;
        }
        self.head_settled = true;
        for byte in std::mem::take(&mut self.head) {
            self.state = self.state.next(byte);
        }
    }

    /// True once input is exhausted while a quoted field is still open.
    fn ended_in_quotes(&self) -> bool {
        self.exhausted && self.state == FieldState::Quoted
    }
}

impl<R: Read> Read for TrackedInput<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n == 0 {
            self.settle_head();
            self.exhausted = true;
        } else {
            self.bytes_read += n as u64;
            self.observe(&buf[..n]);
        }
        Ok(n)
    }
}

/// Streaming CSV record reader with no header handling of its own.
///
/// Any field count is accepted; callers coerce rows to the header width.
/// One [`ByteRecord`] is reused as the parse buffer.
pub struct RecordReader<R> {
    reader: Reader<TrackedInput<R>>,
    record: ByteRecord,
}

impl<R: Read> RecordReader<R> {
    pub fn new(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(TrackedInput::new(source));
        Self {
            reader,
            record: ByteRecord::new(),
        }
    }

    /// Reads the first record, restoring a leading UTF-8 BOM onto its first
    /// field so the header is byte-identical to the input.
    ///
    /// Must be the first read. Returns `Ok(None)` for empty input.
    pub fn read_header(&mut self) -> Result<Option<Vec<Vec<u8>>>, ReadError> {
        let mut header = self.read_row()?;
        if self.reader.get_ref().has_bom
            && let Some(first) = header.as_mut().and_then(|fields| fields.first_mut())
            && !first.starts_with(UTF8_BOM)
        {
            let mut restored = UTF8_BOM.to_vec();
            restored.extend_from_slice(first);
            *first = restored;
        }
        Ok(header)
    }

    /// Reads the next record as owned byte fields.
    ///
    /// Returns `Ok(None)` at end of input. A record cut off by end of input
    /// inside a quoted field is an error, not a record.
    pub fn read_row(&mut self) -> Result<Option<Vec<Vec<u8>>>, ReadError> {
        if !self.reader.read_byte_record(&mut self.record)? {
            return Ok(None);
        }
        let input = self.reader.get_ref();
        if input.ended_in_quotes() && self.reader.position().byte() == input.bytes_read {
            let line = self.record.position().map_or(0, csv::Position::line);
            return Err(ReadError::UnterminatedQuote { line });
        }
        Ok(Some(self.record.iter().map(<[u8]>::to_vec).collect()))
    }
}
