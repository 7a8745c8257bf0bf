//! Warehouse domain module.
//!
//! Catalogue items (electronics, groceries) held in keyed repositories, plus a
//! stock manager for quantity adjustments and valuation. Pure domain logic:
//! no IO, no storage.

pub mod electronics;
pub mod grocery;
pub mod stock;

pub use electronics::Electronics;
pub use grocery::Grocery;
pub use stock::{StockManager, Stocked};
