//! Plain-text table rendering for `df head`.
//!
//! The layout is one header line, one separator line and one line per row,
//! with no outer borders, so N rows always render as N + 2 lines and paste
//! cleanly into Markdown. Cells never wrap; long values are clipped by
//! character count and end in `…`.

use std::borrow::Cow;
use std::io::{self, Write};

use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Cell width used when none (or zero) is requested.
pub const DEFAULT_MAX_CELL_WIDTH: usize = 32;

const ELLIPSIS: char = '…';

/// Options controlling table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Maximum characters per cell, ellipsis included. Zero means the default.
    pub max_cell_width: usize,
    /// Prefix each row with its zero-based index.
    pub show_row_index: bool,
    /// Emit ANSI styling (bold cyan header, dim row index).
    pub styled: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            show_row_index: true,
            styled: false,
        }
    }
}

impl TableOptions {
    fn cell_width(&self) -> usize {
        if self.max_cell_width == 0 {
            DEFAULT_MAX_CELL_WIDTH
        } else {
            self.max_cell_width
        }
    }
}

/// Writes `headers` and `rows` to `out` as a table.
///
/// Rows shorter than the header show empty cells; extra cells are not shown.
pub fn print_table(
    out: &mut dyn Write,
    headers: &[String],
    rows: &[Vec<String>],
    options: &TableOptions,
) -> io::Result<()> {
    let table = build_table(headers, rows, options);
    writeln!(out, "{table}")
}

/// Builds the comfy-table representation of a preview.
pub fn build_table(headers: &[String], rows: &[Vec<String>], options: &TableOptions) -> Table {
    let width = options.cell_width();
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_content_arrangement(ContentArrangement::Disabled);
    if options.styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }

    let mut header = Vec::with_capacity(headers.len() + 1);
    if options.show_row_index {
        header.push(header_cell("#", options.styled));
    }
    header.extend(
        headers
            .iter()
            .map(|name| header_cell(&clip(name, width), options.styled)),
    );
    table.set_header(header);

    for (index, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(headers.len() + 1);
        if options.show_row_index {
            cells.push(index_cell(index, options.styled));
        }
        cells.extend((0..headers.len()).map(|column| {
            let value = row.get(column).map_or("", String::as_str);
            Cell::new(clip(value, width))
        }));
        table.add_row(cells);
    }

    if options.show_row_index
        && let Some(column) = table.column_mut(0)
    {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

/// Clips `value` to at most `max` characters, ending in `…` when clipped.
///
/// Line breaks become spaces so every row stays on one line. A `max` of
/// zero leaves the value unclipped.
pub fn clip(value: &str, max: usize) -> Cow<'_, str> {
    let value = if value.contains(['\r', '\n']) {
        Cow::Owned(value.replace(['\r', '\n'], " "))
    } else {
        Cow::Borrowed(value)
    };
    if max == 0 || value.chars().count() <= max {
        return value;
    }
    let mut clipped = take_chars(&value, max - 1).to_string();
    clipped.push(ELLIPSIS);
    Cow::Owned(clipped)
}

/// Returns the prefix of `value` holding its first `count` characters.
fn take_chars(value: &str, count: usize) -> &str {
    match value.char_indices().nth(count) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

fn header_cell(label: &str, styled: bool) -> Cell {
    let cell = Cell::new(label);
    if styled {
        cell.fg(Color::Cyan).add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn index_cell(index: usize, styled: bool) -> Cell {
    let cell = Cell::new(index);
    if styled {
        cell.fg(Color::DarkGrey)
    } else {
        cell
    }
}
