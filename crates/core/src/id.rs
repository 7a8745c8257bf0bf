//! Identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Positive integer identifier, unique within a repository.
///
/// Zero is rejected at construction, so every `ItemId` in circulation is valid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemId(u32);

impl ItemId {
    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::invalid("identifier must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The identifier that follows this one, if it fits in `u32`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<u32> for ItemId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for u32 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u32>()
            .map_err(|e| DomainError::invalid(format!("ItemId '{s}': {e}")))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(ItemId::new(0), Err(DomainError::InvalidValue(_))));
    }

    #[test]
    fn parses_decimal_text() {
        let id: ItemId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!("-1".parse::<ItemId>().is_err());
        assert!("abc".parse::<ItemId>().is_err());
        assert!("0".parse::<ItemId>().is_err());
    }

    #[test]
    fn next_increments_and_stops_at_max() {
        let id = ItemId::new(1).unwrap();
        assert_eq!(id.next().map(ItemId::get), Some(2));
        assert!(ItemId::new(u32::MAX).unwrap().next().is_none());
    }
}
