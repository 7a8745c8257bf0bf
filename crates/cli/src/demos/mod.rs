//! One module per demo; each builds its records, runs its scenarios and
//! returns a serializable summary.

pub mod finance;
pub mod healthcare;
pub mod inventory;
pub mod school;
pub mod warehouse;
