//! `recordkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, value objects, the entity capabilities and the keyed repository.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod value_object;

pub use entity::{Adjustable, Entity};
pub use error::{DomainError, DomainResult, ErrorKind};
pub use id::ItemId;
pub use repository::{InMemoryRepository, Repository, SeedReport, seed};
pub use value_object::{Money, Name, Quantity, ValueObject};
