//! Entity traits: identity plus the optional mutable-field capability.

use crate::error::DomainResult;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier type, unique within a repository.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Human-readable entity kind, used in error messages and logs.
    const KIND: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// An entity with one designated mutable field (quantity, balance, score, ...).
///
/// Stored items are only ever mutated through `Repository::update`, which calls
/// `validate_input` first and `apply_value` only once the id is known to exist.
/// `validate_input` is an associated function: it never sees the
/// stored item, so a malformed value is rejected even for an unknown id.
pub trait Adjustable: Entity {
    /// Raw value as supplied by a caller.
    type Input;
    /// Value that already satisfies the field's constraints.
    type Value;

    fn validate_input(input: Self::Input) -> DomainResult<Self::Value>;

    fn apply_value(&mut self, value: Self::Value);
}
