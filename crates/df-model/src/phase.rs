use std::fmt;

use serde::{Deserialize, Serialize};

/// Stage of a streaming run at which a failure occurred.
///
/// Callers branch on this to tell an unreadable input from a rejected output,
/// and a late flush error (e.g. disk full) from an immediate write error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    OpenInput,
    CreateOutput,
    ReadHeader,
    WriteHeader,
    ReadRow,
    WriteRow,
    Flush,
    Cancelled,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::OpenInput => "open-input",
            Phase::CreateOutput => "create-output",
            Phase::ReadHeader => "read-header",
            Phase::WriteHeader => "write-header",
            Phase::ReadRow => "read-row",
            Phase::WriteRow => "write-row",
            Phase::Flush => "flush",
            Phase::Cancelled => "cancelled",
        }
    }

    /// True for failures raised before any data row was written.
    pub fn is_setup(self) -> bool {
        matches!(
            self,
            Phase::OpenInput | Phase::CreateOutput | Phase::ReadHeader | Phase::WriteHeader
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
