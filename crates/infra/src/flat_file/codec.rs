//! Record <-> line conversion.

use recordkeep_core::{DomainError, DomainResult};

use super::error::StorageError;

pub const DELIMITER: char = ',';

/// Timestamp layout used by every date-time field.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Entity with a fixed flat-file schema.
pub trait FlatRecord: Sized {
    /// Number of fields on every line.
    const ARITY: usize;

    /// Fields in schema order. Must return exactly `ARITY` values.
    fn to_fields(&self) -> Vec<String>;

    /// Rebuild (and validate) a record from exactly `ARITY` trimmed fields.
    fn from_fields(fields: &[&str]) -> DomainResult<Self>;
}

/// Encode one record as a single line, without the terminator.
pub fn encode<T: FlatRecord>(record: &T) -> DomainResult<String> {
    let fields = record.to_fields();
    if fields.len() != T::ARITY {
        return Err(DomainError::invalid(format!(
            "record produced {} fields, schema has {}",
            fields.len(),
            T::ARITY
        )));
    }
    if let Some(bad) = fields
        .iter()
        .find(|f| f.contains(DELIMITER) || f.contains('\n') || f.contains('\r'))
    {
        return Err(DomainError::invalid(format!(
            "field '{}' contains the delimiter or a line break",
            bad.escape_debug()
        )));
    }
    Ok(fields.join(DELIMITER.to_string().as_str()))
}

/// Decode one line. `line_no` is 1-based and only used for error reporting.
pub fn decode<T: FlatRecord>(line: &str, line_no: usize) -> Result<T, StorageError> {
    let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
    if fields.len() != T::ARITY {
        return Err(StorageError::format(
            line_no,
            format!("expected {} fields, found {}", T::ARITY, fields.len()),
        ));
    }
    T::from_fields(&fields).map_err(|e| StorageError::format(line_no, e.to_string()))
}
