//! Core value types for df: the NULL policy, run statistics, and failure phases.

pub mod phase;
pub mod policy;
pub mod stats;

pub use phase::Phase;
pub use policy::NullPolicy;
pub use stats::TransformStats;
