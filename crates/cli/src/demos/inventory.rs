//! Inventory persistence demo: load, modify, save, reload.

use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

use recordkeep_core::{DomainResult, Entity, InMemoryRepository, ItemId, Repository, seed};
use recordkeep_infra::{FlatFileStore, LoadOutcome, StorageError};
use recordkeep_inventory::{InventoryRecord, StockChange};

use crate::report::{Scenario, write_scenarios};

/// Records written when the data file does not exist yet.
pub fn sample_records(now: NaiveDateTime) -> DomainResult<Vec<InventoryRecord>> {
    Ok(vec![
        InventoryRecord::new(ItemId::new(1)?, "Steel bolts", 500, now)?,
        InventoryRecord::new(ItemId::new(2)?, "Hex nuts", 750, now)?,
        InventoryRecord::new(ItemId::new(3)?, "Washers", 1_200, now)?,
        InventoryRecord::new(ItemId::new(4)?, "Wood screws", 300, now)?,
    ])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum LoadStatus {
    /// No file yet; sample records were seeded instead.
    Missing,
    Loaded { loaded: usize, skipped: Vec<String> },
}

#[derive(Debug, Clone, Serialize)]
pub struct InventorySummary {
    pub data_file: String,
    pub load: LoadStatus,
    pub records: Vec<InventoryRecord>,
    pub saved: usize,
    pub reload_matches: bool,
    pub scenarios: Vec<Scenario>,
}

pub fn run(store: &FlatFileStore, now: NaiveDateTime) -> Result<InventorySummary, StorageError> {
    let mut repo: InMemoryRepository<InventoryRecord> = InMemoryRepository::new();

    let load = match store.load(&mut repo)? {
        LoadOutcome::Missing => {
            seed(&mut repo, sample_records(now)?)?;
            LoadStatus::Missing
        }
        LoadOutcome::Loaded(report) => LoadStatus::Loaded {
            loaded: report.loaded,
            skipped: report
                .skipped
                .iter()
                .map(|s| format!("line {}: {}", s.line, s.reason))
                .collect(),
        },
    };

    let mut scenarios = Vec::new();

    let first = repo.iter().next().map(|r| (r.id(), r.quantity()));
    if let Some((id, quantity)) = first {
        let target = i64::from(quantity.get()) + 10;
        scenarios.push(Scenario::domain(
            &format!("receive 10 more of record {id}"),
            repo.update(id, StockChange { quantity: target, at: now }),
            |_| format!("quantity {quantity} -> {target}"),
        ));
    }

    scenarios.push(Scenario::domain(
        "set record 2 quantity to -5",
        repo.update(
            ItemId::new(2)?,
            StockChange {
                quantity: -5,
                at: now,
            },
        ),
        |_| "updated".to_string(),
    ));

    scenarios.push(Scenario::domain(
        "remove record 999",
        repo.remove(ItemId::new(999)?),
        |r| format!("removed {}", r.name()),
    ));

    let saved = store.save_repository(&repo)?;

    let mut reloaded: InMemoryRepository<InventoryRecord> = InMemoryRepository::new();
    FlatFileStore::new(store.path()).load(&mut reloaded)?;
    let records = repo.all();
    let reload_matches = reloaded.all() == records;

    let comma_name = InventoryRecord::new(ItemId::new(50)?, "Nuts, large", 10, now)?;
    scenarios.push(Scenario::storage(
        "save a record whose name contains the delimiter",
        store.save(&[comma_name]),
        |n| format!("saved {n} records"),
    ));

    Ok(InventorySummary {
        data_file: store.path().display().to_string(),
        load,
        records,
        saved,
        reload_matches,
        scenarios,
    })
}

impl fmt::Display for InventorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Inventory ({}) ==", self.data_file)?;
        match &self.load {
            LoadStatus::Missing => writeln!(f, "No data file found; seeded sample records")?,
            LoadStatus::Loaded { loaded, skipped } => {
                writeln!(f, "Loaded {loaded} records, skipped {}", skipped.len())?;
                for s in skipped {
                    writeln!(f, "  skipped {s}")?;
                }
            }
        }
        for r in &self.records {
            writeln!(
                f,
                "  #{:<3} {:<14} qty {:>6}  updated {}",
                r.id(),
                r.name(),
                r.quantity(),
                r.last_updated()
            )?;
        }
        writeln!(
            f,
            "Saved {} records; reload {}",
            self.saved,
            if self.reload_matches {
                "matches"
            } else {
                "DIFFERS"
            }
        )?;
        write_scenarios(f, &self.scenarios)
    }
}
