//! In-place line sorter
//!
//! Reads a text file, derives comparison keys for each line (every
//! whitespace-separated field, or a single selected field), orders the lines
//! with integer, human-numeric, month-name or plain text rules, optionally
//! reverses and deduplicates them, and writes the result back over the file.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

pub mod key;
pub mod compare;
pub mod core_sort;
pub mod row_store;

// Re-export commonly used types
pub use error::{SortError, SortResult};
pub use config::{SortConfig, SortConfigBuilder};
pub use core_sort::{CoreSort, SortOutcome};
pub use key::Row;

use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Sort `path` in place according to `config`
pub fn sort(config: &SortConfig, path: &Path) -> SortResult<SortOutcome> {
    CoreSort::new(config.clone()).sort_file(path)
}
