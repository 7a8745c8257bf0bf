//! Infrastructure layer: persistence adapters.

pub mod flat_file;

pub use flat_file::{
    FlatFileStore, FlatRecord, LoadOutcome, LoadPolicy, LoadReport, SkippedLine, StorageError,
};
