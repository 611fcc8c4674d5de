//! CSV reading utilities.

mod reader;
mod row;
mod source;

pub use reader::{CsvPreview, read_head, read_headers};
pub use row::normalize_row;
pub use source::RecordReader;
