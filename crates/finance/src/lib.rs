//! Personal finance domain module.
//!
//! Accounts with a running balance, immutable transaction records and a ledger
//! that keeps the two in step.

pub mod account;
pub mod ledger;
pub mod transaction;

pub use account::Account;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
