use std::path::PathBuf;

use thiserror::Error;

use recordkeep_core::{DomainError, ErrorKind};

/// Flat-file storage error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A persisted line could not be turned back into a record.
    #[error("malformed record at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// The file exists but could not be read or written.
    #[error("storage unavailable at {}: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StorageError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }

    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Format { .. } => ErrorKind::Format,
            StorageError::Unavailable { .. } => ErrorKind::IoUnavailable,
            StorageError::Domain(e) => e.kind(),
        }
    }
}
