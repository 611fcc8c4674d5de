use serde::{Deserialize, Serialize};

/// Summary of a nullify run, for operator visibility and auditing.
///
/// A cell that is already empty and matches the policy is checked but not
/// nullified, so `cells_nullified` only counts values that actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformStats {
    /// Data rows processed (header excluded).
    pub rows_read: u64,
    /// Cells inspected against the policy, after width normalization.
    pub cells_checked: u64,
    /// Cells whose value changed from non-empty to empty.
    pub cells_nullified: u64,
}

impl TransformStats {
    /// Cells that were checked but left as they were.
    pub fn cells_unchanged(&self) -> u64 {
        self.cells_checked.saturating_sub(self.cells_nullified)
    }
}
