use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use recordkeep_core::{Adjustable, DomainError, DomainResult, Entity, ItemId, Money, Name, Quantity};

use crate::stock::Stocked;

/// Perishable grocery item held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroceryFields")]
pub struct Grocery {
    id: ItemId,
    name: Name,
    price: Money,
    quantity: Quantity,
    expires_on: NaiveDate,
}

#[derive(Deserialize)]
struct GroceryFields {
    id: ItemId,
    name: String,
    price: i64,
    quantity: i64,
    expires_on: NaiveDate,
}

impl TryFrom<GroceryFields> for Grocery {
    type Error = DomainError;

    fn try_from(f: GroceryFields) -> Result<Self, Self::Error> {
        Self::new(f.id, &f.name, f.price, f.quantity, f.expires_on)
    }
}

impl Grocery {
    pub fn new(
        id: ItemId,
        name: &str,
        price_cents: i64,
        quantity: i64,
        expires_on: NaiveDate,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: Name::field("name", name)?,
            price: Money::positive(price_cents)?,
            quantity: Quantity::new(quantity)?,
            expires_on,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }

    /// An item is expired from the day after its expiry date.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        today > self.expires_on
    }

    /// Days left until expiry; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expires_on - today).num_days()
    }
}

impl Entity for Grocery {
    type Id = ItemId;
    const KIND: &'static str = "grocery";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Adjustable for Grocery {
    type Input = i64;
    type Value = Quantity;

    fn validate_input(input: i64) -> DomainResult<Quantity> {
        Quantity::new(input)
    }

    fn apply_value(&mut self, value: Quantity) {
        self.quantity = value;
    }
}

impl Stocked for Grocery {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn unit_price(&self) -> Money {
        self.price
    }
}
