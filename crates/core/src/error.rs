//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Closed taxonomy of failure kinds surfaced by repositories and storage.
///
/// Storage-level errors (format, I/O) live in the infrastructure crate but map
/// onto the same kinds so callers can branch without knowing the concrete type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DuplicateKey,
    NotFound,
    InvalidValue,
    Format,
    IoUnavailable,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ErrorKind::DuplicateKey => "duplicate key",
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::Format => "format error",
            ErrorKind::IoUnavailable => "io unavailable",
        };
        f.write_str(s)
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// key collisions, missing keys). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An item with the same identifier is already stored.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// No item is stored under the requested identifier.
    #[error("not found: {0}")]
    NotFound(String),

    /// A value violated a domain constraint (negative quantity, blank name, ...).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl DomainError {
    pub fn duplicate(msg: impl Into<String>) -> Self {
        Self::DuplicateKey(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::DuplicateKey(_) => ErrorKind::DuplicateKey,
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::InvalidValue(_) => ErrorKind::InvalidValue,
        }
    }
}
