//! Line-oriented, comma-delimited persistence.
//!
//! One record per line, fields in a fixed order per entity type, no header and
//! no escaping. Values containing the delimiter or a line break are refused at
//! save time instead of being written out corrupt.

pub mod codec;
pub mod error;
pub mod inventory;
pub mod store;

pub use codec::{DATE_TIME_FORMAT, DELIMITER, FlatRecord};
pub use error::StorageError;
pub use store::{FlatFileStore, LoadOutcome, LoadPolicy, LoadReport, SkippedLine};
