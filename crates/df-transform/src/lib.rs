//! Streaming transforms over CSV files.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use df_model::NullPolicy;
//! use df_transform::nullify_file;
//!
//! let policy = NullPolicy::default().with_na(true);
//! let stats = nullify_file(Path::new("list.csv"), Path::new("clean.csv"), &policy)?;
//! println!("{} cells nullified", stats.cells_nullified);
//! ```

mod cancel;
mod error;
mod nullify;

// === Error Types ===
pub use error::{Result, TransformError, TransformFailure};

// === Nullify ===
pub use cancel::CancelHandle;
pub use nullify::{
    TransformOptions, nullify_file, nullify_file_with_options, nullify_record, nullify_stream,
};
