//! Inventory domain module.
//!
//! Stock records with a last-updated timestamp, the entity type persisted by the
//! flat-file store. Pure domain logic: no IO.

pub mod record;

pub use record::{InventoryRecord, StockChange};
