use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use recordkeep_core::{Adjustable, DomainError, DomainResult, Entity, ItemId, Name, Quantity};

/// Inventory record: a named stock count stamped with its last change.
///
/// Timestamps are truncated to whole seconds so a record survives a text
/// round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InventoryRecordFields")]
pub struct InventoryRecord {
    id: ItemId,
    name: Name,
    quantity: Quantity,
    last_updated: NaiveDateTime,
}

#[derive(Deserialize)]
struct InventoryRecordFields {
    id: ItemId,
    name: String,
    quantity: i64,
    last_updated: NaiveDateTime,
}

impl TryFrom<InventoryRecordFields> for InventoryRecord {
    type Error = DomainError;

    fn try_from(f: InventoryRecordFields) -> Result<Self, Self::Error> {
        Self::new(f.id, &f.name, f.quantity, f.last_updated)
    }
}

impl InventoryRecord {
    pub fn new(
        id: ItemId,
        name: &str,
        quantity: i64,
        last_updated: NaiveDateTime,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: Name::field("name", name)?,
            quantity: Quantity::new(quantity)?,
            last_updated: last_updated.trunc_subsecs(0),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn last_updated(&self) -> NaiveDateTime {
        self.last_updated
    }
}

impl Entity for InventoryRecord {
    type Id = ItemId;
    const KIND: &'static str = "inventory record";

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Requested stock level and the moment it was observed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StockChange {
    pub quantity: i64,
    pub at: NaiveDateTime,
}

/// Quantity and timestamp always change together.
impl Adjustable for InventoryRecord {
    type Input = StockChange;
    type Value = (Quantity, NaiveDateTime);

    fn validate_input(input: StockChange) -> DomainResult<Self::Value> {
        Ok((Quantity::new(input.quantity)?, input.at.trunc_subsecs(0)))
    }

    fn apply_value(&mut self, (quantity, at): Self::Value) {
        self.quantity = quantity;
        self.last_updated = at;
    }
}
