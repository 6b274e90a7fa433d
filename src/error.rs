//! Error handling for the sort utility

use std::io;
use std::path::Path;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("{message}")]
    Usage { message: String },

    #[error("cannot read {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {file}: {source}")]
    Write {
        file: String,
        #[source]
        source: io::Error,
    },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::Read { .. } | SortError::Write { .. } => crate::SORT_FAILURE,
            SortError::Usage { .. } => crate::EXIT_FAILURE,
        }
    }

    /// Create a usage error
    pub fn usage(message: &str) -> Self {
        SortError::Usage {
            message: message.to_string(),
        }
    }

    /// Create a read error for `file`
    pub fn read(file: &Path, source: io::Error) -> Self {
        SortError::Read {
            file: file.display().to_string(),
            source,
        }
    }

    /// Create a write error for `file`
    pub fn write(file: &Path, source: io::Error) -> Self {
        SortError::Write {
            file: file.display().to_string(),
            source,
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching the failing file and direction to I/O errors
pub trait SortContext<T> {
    fn with_read_context(self, file: &Path) -> SortResult<T>;

    fn with_write_context(self, file: &Path) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_read_context(self, file: &Path) -> SortResult<T> {
        self.map_err(|io_err| SortError::read(file, io_err))
    }

    fn with_write_context(self, file: &Path) -> SortResult<T> {
        self.map_err(|io_err| SortError::write(file, io_err))
    }
}
