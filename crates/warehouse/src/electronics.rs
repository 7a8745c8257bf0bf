use serde::{Deserialize, Serialize};

use recordkeep_core::{Adjustable, DomainError, DomainResult, Entity, ItemId, Money, Name, Quantity};

use crate::stock::Stocked;

/// Longest warranty the warehouse will record, in months.
pub const MAX_WARRANTY_MONTHS: u32 = 120;

/// Electronic device held in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ElectronicsFields")]
pub struct Electronics {
    id: ItemId,
    name: Name,
    brand: Name,
    price: Money,
    quantity: Quantity,
    warranty_months: u32,
}

/// Unvalidated wire shape; deserialization goes through `Electronics::new`.
#[derive(Deserialize)]
struct ElectronicsFields {
    id: ItemId,
    name: String,
    brand: String,
    price: i64,
    quantity: i64,
    warranty_months: u32,
}

impl TryFrom<ElectronicsFields> for Electronics {
    type Error = DomainError;

    fn try_from(f: ElectronicsFields) -> Result<Self, Self::Error> {
        Self::new(f.id, &f.name, &f.brand, f.price, f.quantity, f.warranty_months)
    }
}

impl Electronics {
    /// Build a validated device. `price_cents` must be positive, `quantity`
    /// non-negative and `warranty_months` within `1..=MAX_WARRANTY_MONTHS`.
    pub fn new(
        id: ItemId,
        name: &str,
        brand: &str,
        price_cents: i64,
        quantity: i64,
        warranty_months: u32,
    ) -> DomainResult<Self> {
        if !(1..=MAX_WARRANTY_MONTHS).contains(&warranty_months) {
            return Err(DomainError::invalid(format!(
                "warranty must be between 1 and {MAX_WARRANTY_MONTHS} months (got {warranty_months})"
            )));
        }

        Ok(Self {
            id,
            name: Name::field("name", name)?,
            brand: Name::field("brand", brand)?,
            price: Money::positive(price_cents)?,
            quantity: Quantity::new(quantity)?,
            warranty_months,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn brand(&self) -> &str {
        self.brand.as_str()
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Entity for Electronics {
    type Id = ItemId;
    const KIND: &'static str = "electronics";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Adjustable for Electronics {
    type Input = i64;
    type Value = Quantity;

    fn validate_input(input: i64) -> DomainResult<Quantity> {
        Quantity::new(input)
    }

    fn apply_value(&mut self, value: Quantity) {
        self.quantity = value;
    }
}

impl Stocked for Electronics {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    #[test]
    fn valid_device_is_built() {
        let laptop = Electronics::new(id(1), " Laptop ", "Dell", 129_999, 10, 24).unwrap();
        assert_eq!(laptop.name(), "Laptop");
        assert_eq!(laptop.brand(), "Dell");
        assert_eq!(laptop.price().cents(), 129_999);
        assert_eq!(Stocked::quantity(&laptop).get(), 10);
        assert_eq!(laptop.warranty_months(), 24);
    }

    #[test]
    fn rejects_blank_brand() {
        let err = Electronics::new(id(1), "Laptop", "  ", 100, 1, 12).unwrap_err();
        assert_eq!(err, DomainError::invalid("brand cannot be empty"));
    }

    #[test]
    fn rejects_non_positive_price_and_negative_quantity() {
        assert!(Electronics::new(id(1), "Laptop", "Dell", 0, 1, 12).is_err());
        assert!(Electronics::new(id(1), "Laptop", "Dell", 100, -1, 12).is_err());
    }

    #[test]
    fn rejects_out_of_range_warranty() {
        assert!(Electronics::new(id(1), "Laptop", "Dell", 100, 1, 0).is_err());
        assert!(Electronics::new(id(1), "Laptop", "Dell", 100, 1, MAX_WARRANTY_MONTHS + 1).is_err());
        assert!(Electronics::new(id(1), "Laptop", "Dell", 100, 1, MAX_WARRANTY_MONTHS).is_ok());
    }

    #[test]
    fn deserializing_runs_constructor_checks() {
        let laptop = Electronics::new(id(1), "Laptop", "Dell", 129_999, 10, 24).unwrap();
        let json = serde_json::to_string(&laptop).unwrap();
        assert_eq!(serde_json::from_str::<Electronics>(&json).unwrap(), laptop);

        let bad = r#"{"id":1,"name":"Laptop","brand":"Dell","price":-500,"quantity":1,"warranty_months":0}"#;
        assert!(serde_json::from_str::<Electronics>(bad).is_err());
    }
}
