//! CLI library components for `df`.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
pub mod summary;
