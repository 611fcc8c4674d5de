//! Structural coercion of records to the header width.

/// Coerces a record to exactly `width` fields.
///
/// - Rows already at `width` are returned untouched.
/// - Short rows are padded with empty fields.
/// - Long rows lose their trailing fields, silently.
///
/// Cell contents are never interpreted: no trimming, no NULL detection.
/// Works for text cells and raw byte cells alike.
pub fn normalize_row<T: Clone + Default>(mut row: Vec<T>, width: usize) -> Vec<T> {
    if row.len() != width {
        row.resize(width, T::default());
    }
    row
}
