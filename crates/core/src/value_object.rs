//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Each constructor validates, so a value object that exists
//! is a value object that satisfies its constraints.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-empty, trimmed text (names, brands, medication labels).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid("name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Like `new`, but names the offending field in the error message.
    pub fn field(field: &str, value: impl AsRef<str>) -> DomainResult<Self> {
        Self::new(value).map_err(|_| DomainError::invalid(format!("{field} cannot be empty")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Name {}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

/// Monetary amount in the smallest currency unit (cents).
///
/// Deserializes through `Money::non_negative`; callers needing a strictly
/// positive amount check again in their own constructor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount that must be strictly greater than zero (prices, transaction amounts).
    pub fn positive(cents: i64) -> DomainResult<Self> {
        if cents <= 0 {
            return Err(DomainError::invalid(format!(
                "amount must be positive (got {cents} cents)"
            )));
        }
        Ok(Self(cents))
    }

    /// Amount that may be zero but never negative (balances).
    pub fn non_negative(cents: i64) -> DomainResult<Self> {
        if cents < 0 {
            return Err(DomainError::invalid(format!(
                "amount cannot be negative (got {cents} cents)"
            )));
        }
        Ok(Self(cents))
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtraction that refuses to go below zero.
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).filter(|v| *v >= 0).map(Money)
    }

    pub fn checked_mul(self, factor: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(factor)).map(Money)
    }
}

impl ValueObject for Money {}

impl TryFrom<i64> for Money {
    type Error = DomainError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Self::non_negative(cents)
    }
}

impl From<Money> for i64 {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        f.pad(&format!("{sign}{}.{:02}", abs / 100, abs % 100))
    }
}

/// Non-negative stock count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::invalid(format!(
                "quantity cannot be negative (got {value})"
            )));
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::invalid(format!("quantity {value} is out of range")))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for Quantity {}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
