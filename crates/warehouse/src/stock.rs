//! Stock-level operations shared by every catalogue item type.

use recordkeep_core::{
    Adjustable, DomainError, DomainResult, InMemoryRepository, Money, Quantity, Repository,
};

/// Catalogue item whose mutable field is its on-hand quantity.
pub trait Stocked: Adjustable<Input = i64, Value = Quantity> + Clone {
    fn name(&self) -> &str;
    fn quantity(&self) -> Quantity;
    fn unit_price(&self) -> Money;
}

/// Repository-backed stock operations for one item type.
#[derive(Debug, Clone)]
pub struct StockManager<T: Stocked> {
    repo: InMemoryRepository<T>,
}

impl<T: Stocked> StockManager<T> {
    pub fn new() -> Self {
        Self {
            repo: InMemoryRepository::new(),
        }
    }

    pub fn repository(&self) -> &InMemoryRepository<T> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut InMemoryRepository<T> {
        &mut self.repo
    }

    /// Set the on-hand quantity outright.
    pub fn set_quantity(&mut self, id: T::Id, quantity: i64) -> DomainResult<()> {
        self.repo.update(id, quantity)
    }

    /// Adjust quantity by `delta` (negative to draw stock down).
    ///
    /// Returns the new quantity. Fails with `NotFound` for an unknown id and
    /// with `InvalidValue` when the result would be negative.
    pub fn restock(&mut self, id: T::Id, delta: i64) -> DomainResult<Quantity> {
        let current = self.repo.get(id)?.quantity();
        let target = i64::from(current.get())
            .checked_add(delta)
            .ok_or_else(|| DomainError::invalid(format!("adjustment {delta} overflows")))?;

        self.repo.update(id, target)?;
        let updated = self.repo.get(id)?.quantity();

        tracing::info!(
            kind = T::KIND,
            %id,
            from = current.get(),
            to = updated.get(),
            "stock adjusted"
        );
        Ok(updated)
    }

    /// Items whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_stock(&self, threshold: u32) -> Vec<T> {
        self.repo
            .iter()
            .filter(|item| item.quantity().get() < threshold)
            .cloned()
            .collect()
    }

    /// Total value of stock on hand (unit price x quantity, summed).
    pub fn stock_value(&self) -> DomainResult<Money> {
        self.repo.iter().try_fold(Money::ZERO, |acc, item| {
            item.unit_price()
                .checked_mul(item.quantity().get())
                .and_then(|line| acc.checked_add(line))
                .ok_or_else(|| DomainError::invalid("stock value overflows"))
        })
    }
}

impl<T: Stocked> Default for StockManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Electronics, Grocery};
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use recordkeep_core::ItemId;

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    fn groceries() -> StockManager<Grocery> {
        let expiry = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        let mut manager = StockManager::new();
        let repo = manager.repository_mut();
        repo.add(Grocery::new(id(1), "Apples", 120, 50, expiry).unwrap()).unwrap();
        repo.add(Grocery::new(id(2), "Bread", 300, 3, expiry).unwrap()).unwrap();
        repo.add(Grocery::new(id(3), "Cheese", 850, 8, expiry).unwrap()).unwrap();
        manager
    }

    #[test]
    fn restock_adds_delta() {
        let mut manager = groceries();
        let updated = manager.restock(id(1), 5).unwrap();
        assert_eq!(updated.get(), 55);
        assert_eq!(manager.repository().get(id(1)).unwrap().quantity().get(), 55);
    }

    #[test]
    fn restock_below_zero_is_invalid_and_leaves_quantity() {
        let mut manager = groceries();
        let err = manager.restock(id(2), -4).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
        assert_eq!(manager.repository().get(id(2)).unwrap().quantity().get(), 3);
    }

    #[test]
    fn restock_unknown_id_is_not_found() {
        let mut manager = groceries();
        assert!(matches!(manager.restock(id(999), 1), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn set_quantity_validates_before_lookup() {
        let mut manager = groceries();
        assert!(matches!(
            manager.set_quantity(id(999), -10),
            Err(DomainError::InvalidValue(_))
        ));
    }

    #[test]
    fn low_stock_filters_strictly_below_threshold() {
        let manager = groceries();
        let names: Vec<String> = manager
            .low_stock(8)
            .iter()
            .map(|g| g.name().to_string())
            .collect();
        assert_eq!(names, vec!["Bread".to_string()]);
    }

    #[test]
    fn stock_value_sums_price_times_quantity() {
        let manager = groceries();
        // 120*50 + 300*3 + 850*8
        assert_eq!(manager.stock_value().unwrap().cents(), 6000 + 900 + 6800);
    }

    #[test]
    fn empty_manager_is_worth_nothing() {
        let manager: StockManager<Electronics> = StockManager::new();
        assert_eq!(manager.stock_value().unwrap(), Money::ZERO);
        assert!(manager.low_stock(10).is_empty());
    }

    proptest! {
        /// Property: a successful restock always lands on old + delta, and a failed
        /// one leaves the quantity unchanged.
        #[test]
        fn restock_is_exact_or_no_op(start in 0i64..1_000, delta in -2_000i64..2_000) {
            let expiry = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
            let mut manager = StockManager::new();
            manager
                .repository_mut()
                .add(Grocery::new(id(1), "Rice", 100, start, expiry).unwrap())
                .unwrap();

            match manager.restock(id(1), delta) {
                Ok(q) => prop_assert_eq!(i64::from(q.get()), start + delta),
                Err(_) => {
                    prop_assert!(start + delta < 0);
                    let q = manager.repository().get(id(1)).unwrap().quantity();
                    prop_assert_eq!(i64::from(q.get()), start);
                }
            }
        }
    }
}
