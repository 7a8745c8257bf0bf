//! Flat-file schema for inventory records: `id,name,quantity,last_updated`.

use chrono::NaiveDateTime;

use recordkeep_core::{DomainError, DomainResult, Entity, ItemId};
use recordkeep_inventory::InventoryRecord;

use super::codec::{DATE_TIME_FORMAT, FlatRecord};

impl FlatRecord for InventoryRecord {
    const ARITY: usize = 4;

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id().to_string(),
            self.name().to_string(),
            self.quantity().to_string(),
            self.last_updated().format(DATE_TIME_FORMAT).to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> DomainResult<Self> {
        let id: ItemId = fields[0].parse()?;
        let quantity: i64 = fields[2]
            .parse()
            .map_err(|e| DomainError::invalid(format!("quantity '{}': {e}", fields[2])))?;
        let last_updated = NaiveDateTime::parse_from_str(fields[3], DATE_TIME_FORMAT)
            .map_err(|e| DomainError::invalid(format!("timestamp '{}': {e}", fields[3])))?;

        InventoryRecord::new(id, fields[1], quantity, last_updated)
    }
}
