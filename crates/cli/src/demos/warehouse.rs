//! Warehouse demo: electronics and groceries in separate repositories.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use recordkeep_core::{DomainResult, Entity, ItemId, Money, Repository, seed};
use recordkeep_warehouse::{Electronics, Grocery, StockManager, Stocked};

use crate::report::{Scenario, write_scenarios};

/// Items below this quantity are flagged for reordering.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

pub fn sample_electronics() -> DomainResult<Vec<Electronics>> {
    Ok(vec![
        Electronics::new(ItemId::new(1)?, "Laptop", "Dell", 129_999, 15, 24)?,
        Electronics::new(ItemId::new(2)?, "Smartphone", "Samsung", 89_900, 30, 12)?,
        Electronics::new(ItemId::new(3)?, "Headphones", "Sony", 19_950, 8, 12)?,
    ])
}

/// Three groceries, ids 1-3, plus a repeated delivery of id 2 that seeding
/// reports as a duplicate.
pub fn sample_groceries(today: NaiveDate) -> DomainResult<Vec<Grocery>> {
    Ok(vec![
        Grocery::new(ItemId::new(1)?, "Apples", 120, 50, today + Duration::days(14))?,
        Grocery::new(ItemId::new(2)?, "Milk", 249, 20, today + Duration::days(3))?,
        Grocery::new(ItemId::new(3)?, "Bread", 300, 6, today - Duration::days(1))?,
        Grocery::new(ItemId::new(2)?, "Milk", 249, 40, today + Duration::days(7))?,
    ])
}

#[derive(Debug, Clone, Serialize)]
pub struct WarehouseSummary {
    pub electronics: Vec<Electronics>,
    pub groceries: Vec<Grocery>,
    pub seed_duplicates: Vec<ItemId>,
    pub expired_groceries: Vec<ItemId>,
    pub low_stock: Vec<String>,
    pub electronics_value: Money,
    pub groceries_value: Money,
    pub scenarios: Vec<Scenario>,
}

pub fn run(today: NaiveDate) -> DomainResult<WarehouseSummary> {
    let mut electronics: StockManager<Electronics> = StockManager::new();
    let mut groceries: StockManager<Grocery> = StockManager::new();

    seed(electronics.repository_mut(), sample_electronics()?)?;
    let grocery_seed = seed(groceries.repository_mut(), sample_groceries(today)?)?;

    let mut scenarios = Vec::new();

    let tablet = Electronics::new(ItemId::new(1)?, "Tablet", "Apple", 49_900, 5, 12)?;
    scenarios.push(Scenario::domain(
        "add electronics id 1 again",
        electronics.repository_mut().add(tablet),
        |_| "added".to_string(),
    ));

    scenarios.push(Scenario::domain(
        "remove grocery id 999",
        groceries.repository_mut().remove(ItemId::new(999)?),
        |g| format!("removed {}", g.name()),
    ));

    scenarios.push(Scenario::domain(
        "set grocery id 1 quantity to -10",
        groceries.set_quantity(ItemId::new(1)?, -10),
        |_| "updated".to_string(),
    ));

    let apples = ItemId::new(1)?;
    let before = groceries.repository().get(apples)?.quantity();
    scenarios.push(Scenario::domain(
        "increase grocery id 1 quantity by 5",
        groceries.restock(apples, 5),
        |after| format!("quantity {before} -> {after}"),
    ));

    scenarios.push(Scenario::domain(
        "sell 3 of electronics id 3",
        electronics.restock(ItemId::new(3)?, -3),
        |after| format!("{after} left"),
    ));

    let mut low_stock: Vec<String> = electronics
        .low_stock(LOW_STOCK_THRESHOLD)
        .iter()
        .map(|e| Stocked::name(e).to_string())
        .collect();
    low_stock.extend(
        groceries
            .low_stock(LOW_STOCK_THRESHOLD)
            .iter()
            .map(|g| g.name().to_string()),
    );

    Ok(WarehouseSummary {
        electronics: electronics.repository().all(),
        expired_groceries: groceries
            .repository()
            .iter()
            .filter(|g| g.is_expired(today))
            .map(|g| g.id())
            .collect(),
        groceries: groceries.repository().all(),
        seed_duplicates: grocery_seed.duplicates,
        low_stock,
        electronics_value: electronics.stock_value()?,
        groceries_value: groceries.stock_value()?,
        scenarios,
    })
}

impl fmt::Display for WarehouseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Warehouse ==")?;
        writeln!(f, "Electronics:")?;
        for e in &self.electronics {
            writeln!(
                f,
                "  #{:<3} {:<12} {:<8} qty {:>4}  ${:>9}  warranty {} mo",
                e.id(),
                e.name(),
                e.brand(),
                Stocked::quantity(e),
                e.price(),
                e.warranty_months()
            )?;
        }
        writeln!(f, "Groceries:")?;
        for g in &self.groceries {
            let id = g.id();
            let flag = if self.expired_groceries.contains(&id) {
                " (expired)"
            } else {
                ""
            };
            writeln!(
                f,
                "  #{:<3} {:<12} qty {:>4}  ${:>9}  expires {}{flag}",
                id,
                g.name(),
                g.quantity(),
                g.price(),
                g.expires_on()
            )?;
        }
        if !self.seed_duplicates.is_empty() {
            let ids: Vec<String> = self.seed_duplicates.iter().map(|id| id.to_string()).collect();
            writeln!(f, "Duplicate ids skipped while seeding: {}", ids.join(", "))?;
        }
        writeln!(f, "Low stock (< {LOW_STOCK_THRESHOLD}): {}", self.low_stock.join(", "))?;
        writeln!(
            f,
            "Stock value: electronics ${}, groceries ${}",
            self.electronics_value, self.groceries_value
        )?;
        write_scenarios(f, &self.scenarios)
    }
}
