//! Keyed repository abstraction and its in-memory implementation.

use std::collections::{BTreeMap, HashMap};

use crate::entity::{Adjustable, Entity};
use crate::error::{DomainError, DomainResult};

/// Keyed store for one entity type. Identifiers are unique within a repository.
pub trait Repository<T>
where
    T: Entity + Clone,
{
    /// Insert an item; fails with `DuplicateKey` when the id is already stored.
    fn add(&mut self, item: T) -> DomainResult<()>;

    /// Borrow the stored item; fails with `NotFound` when absent.
    fn get(&self, id: T::Id) -> DomainResult<&T>;

    /// Delete and return the stored item; fails with `NotFound` when absent.
    fn remove(&mut self, id: T::Id) -> DomainResult<T>;

    /// Overwrite the item's mutable field.
    ///
    /// The input is validated before the id is looked up, so `InvalidValue`
    /// takes precedence over `NotFound`.
    fn update(&mut self, id: T::Id, input: <T as Adjustable>::Input) -> DomainResult<()>
    where
        T: Adjustable;

    /// Snapshot of every item in insertion order.
    fn all(&self) -> Vec<T>;

    fn contains(&self, id: T::Id) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory repository preserving insertion order.
///
/// Each insert is stamped with a monotonically increasing sequence number;
/// enumeration walks the sequence, lookups go through the id index.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T: Entity> {
    index: HashMap<T::Id, u64>,
    items: BTreeMap<u64, T>,
    next_seq: u64,
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            items: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Borrowing iterator in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    fn missing(id: T::Id) -> DomainError {
        DomainError::not_found(format!("{} {id} does not exist", T::KIND))
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone,
{
    fn add(&mut self, item: T) -> DomainResult<()> {
        let id = item.id();
        if self.index.contains_key(&id) {
            return Err(DomainError::duplicate(format!(
                "{} {id} already exists",
                T::KIND
            )));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(id, seq);
        self.items.insert(seq, item);

        tracing::debug!(kind = T::KIND, %id, "item added");
        Ok(())
    }

    fn get(&self, id: T::Id) -> DomainResult<&T> {
        self.index
            .get(&id)
            .and_then(|seq| self.items.get(seq))
            .ok_or_else(|| Self::missing(id))
    }

    fn remove(&mut self, id: T::Id) -> DomainResult<T> {
        let seq = self.index.remove(&id).ok_or_else(|| Self::missing(id))?;
        let item = self.items.remove(&seq).ok_or_else(|| Self::missing(id))?;

        tracing::debug!(kind = T::KIND, %id, "item removed");
        Ok(item)
    }

    fn update(&mut self, id: T::Id, input: <T as Adjustable>::Input) -> DomainResult<()>
    where
        T: Adjustable,
    {
        let value = T::validate_input(input)?;

        let item = self
            .index
            .get(&id)
            .and_then(|seq| self.items.get_mut(seq))
            .ok_or_else(|| Self::missing(id))?;
        item.apply_value(value);

        tracing::debug!(kind = T::KIND, %id, "item updated");
        Ok(())
    }

    fn all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.index.len()
    }
}

/// Outcome of a bulk insert that tolerates duplicate ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport<Id> {
    pub inserted: usize,
    pub duplicates: Vec<Id>,
}

/// Insert every item, reporting (not failing on) duplicate ids.
///
/// Any error other than `DuplicateKey` stops the seeding and is returned.
pub fn seed<T, R, I>(repo: &mut R, items: I) -> DomainResult<SeedReport<T::Id>>
where
    T: Entity + Clone,
    R: Repository<T> + ?Sized,
    I: IntoIterator<Item = T>,
{
    let mut report = SeedReport {
        inserted: 0,
        duplicates: Vec::new(),
    };

    for item in items {
        let id = item.id();
        match repo.add(item) {
            Ok(()) => report.inserted += 1,
            Err(DomainError::DuplicateKey(msg)) => {
                tracing::warn!(kind = T::KIND, %id, "skipping duplicate while seeding: {msg}");
                report.duplicates.push(id);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ItemId;
    use crate::value_object::Quantity;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Widget {
        id: ItemId,
        label: String,
        quantity: Quantity,
    }

    impl Entity for Widget {
        type Id = ItemId;
        const KIND: &'static str = "widget";

        fn id(&self) -> ItemId {
            self.id
        }
    }

    impl Adjustable for Widget {
        type Input = i64;
        type Value = Quantity;

        fn validate_input(input: i64) -> DomainResult<Quantity> {
            Quantity::new(input)
        }

        fn apply_value(&mut self, value: Quantity) {
            self.quantity = value;
        }
    }

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    fn widget(raw: u32, quantity: u32) -> Widget {
        Widget {
            id: id(raw),
            label: format!("widget-{raw}"),
            quantity: Quantity::from(quantity),
        }
    }

    #[test]
    fn add_then_get_returns_equal_item() {
        let mut repo = InMemoryRepository::new();
        repo.add(widget(1, 5)).unwrap();

        assert_eq!(repo.get(id(1)).unwrap(), &widget(1, 5));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn duplicate_add_is_rejected_and_keeps_original() {
        let mut repo = InMemoryRepository::new();
        repo.add(widget(1, 5)).unwrap();

        let err = repo.add(widget(1, 99)).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateKey(_)));
        assert_eq!(repo.get(id(1)).unwrap().quantity.get(), 5);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn absent_ids_are_not_found() {
        let mut repo: InMemoryRepository<Widget> = InMemoryRepository::new();

        assert!(matches!(repo.get(id(999)), Err(DomainError::NotFound(_))));
        assert!(matches!(repo.remove(id(999)), Err(DomainError::NotFound(_))));
        assert!(matches!(repo.update(id(999), 3), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn invalid_value_precedes_not_found() {
        let mut repo: InMemoryRepository<Widget> = InMemoryRepository::new();

        let err = repo.update(id(999), -10).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue(_)));
    }

    #[test]
    fn update_overwrites_field_in_place() {
        let mut repo = InMemoryRepository::new();
        repo.add(widget(1, 5)).unwrap();
        repo.add(widget(2, 1)).unwrap();

        repo.update(id(1), 10).unwrap();

        let ids: Vec<u32> = repo.iter().map(|w| w.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(repo.get(id(1)).unwrap().quantity.get(), 10);
    }

    #[test]
    fn remove_returns_item_and_frees_id() {
        let mut repo = InMemoryRepository::new();
        repo.add(widget(1, 5)).unwrap();

        let removed = repo.remove(id(1)).unwrap();
        assert_eq!(removed, widget(1, 5));
        assert!(repo.is_empty());

        repo.add(widget(1, 7)).unwrap();
        assert!(repo.contains(id(1)));
    }

    #[test]
    fn readded_item_moves_to_end_of_enumeration() {
        let mut repo = InMemoryRepository::new();
        repo.add(widget(1, 0)).unwrap();
        repo.add(widget(2, 0)).unwrap();
        repo.remove(id(1)).unwrap();
        repo.add(widget(1, 0)).unwrap();

        let ids: Vec<u32> = repo.all().iter().map(|w| w.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn snapshot_is_not_affected_by_later_mutation() {
        let mut repo = InMemoryRepository::new();
        repo.add(widget(1, 5)).unwrap();

        let snapshot = repo.all();
        repo.update(id(1), 50).unwrap();
        repo.add(widget(2, 1)).unwrap();
        repo.remove(id(1)).unwrap();

        assert_eq!(snapshot, vec![widget(1, 5)]);
    }

    #[test]
    fn seed_reports_duplicates_and_keeps_going() {
        let mut repo = InMemoryRepository::new();
        let report = seed(&mut repo, vec![widget(1, 1), widget(2, 2), widget(1, 3), widget(3, 3)])
            .unwrap();

        assert_eq!(report.inserted, 3);
        assert_eq!(report.duplicates, vec![id(1)]);
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.get(id(1)).unwrap().quantity.get(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: enumeration equals first-occurrence order of the inserted ids,
        /// and every inserted id is retrievable.
        #[test]
        fn enumeration_follows_first_insertion(raw_ids in proptest::collection::vec(1u32..50, 0..40)) {
            let mut repo = InMemoryRepository::new();
            let mut expected: Vec<u32> = Vec::new();

            for raw in &raw_ids {
                let result = repo.add(widget(*raw, *raw));
                if expected.contains(raw) {
                    prop_assert!(matches!(result, Err(DomainError::DuplicateKey(_))));
                } else {
                    prop_assert!(result.is_ok());
                    expected.push(*raw);
                }
            }

            let listed: Vec<u32> = repo.all().iter().map(|w| w.id.get()).collect();
            prop_assert_eq!(listed, expected.clone());
            for raw in expected {
                prop_assert_eq!(repo.get(id(raw)).unwrap(), &widget(raw, raw));
            }
        }

        /// Property: ids never added (or already removed) are not found by
        /// get, remove or a valid update, and the failed calls change nothing.
        #[test]
        fn absent_ids_are_never_found(
            present in proptest::collection::btree_set(1u32..30, 0..15),
            removed in proptest::collection::btree_set(1u32..30, 0..5),
            absent in 1u32..40,
            value in 0i64..1_000,
        ) {
            let mut repo = InMemoryRepository::new();
            for raw in &present {
                repo.add(widget(*raw, 1)).unwrap();
            }
            for raw in &removed {
                let _ = repo.remove(id(*raw));
            }
            prop_assume!(!present.contains(&absent) || removed.contains(&absent));

            let before = repo.all();
            prop_assert!(matches!(repo.get(id(absent)), Err(DomainError::NotFound(_))));
            prop_assert!(matches!(repo.remove(id(absent)), Err(DomainError::NotFound(_))));
            prop_assert!(matches!(repo.update(id(absent), value), Err(DomainError::NotFound(_))));
            prop_assert_eq!(repo.all(), before);
        }

        /// Property: a snapshot taken by `all` is unaffected by any later
        /// add, update or remove.
        #[test]
        fn snapshot_survives_later_mutation(
            raw_ids in proptest::collection::btree_set(1u32..30, 1..15),
            extra in 30u32..60,
            value in 0i64..1_000,
        ) {
            let mut repo = InMemoryRepository::new();
            for raw in &raw_ids {
                repo.add(widget(*raw, 1)).unwrap();
            }
            let snapshot = repo.all();
            let expected = snapshot.clone();

            let first = *raw_ids.iter().next().unwrap();
            let last = *raw_ids.iter().next_back().unwrap();
            repo.update(id(first), value).unwrap();
            repo.remove(id(last)).unwrap();
            repo.add(widget(extra, 9)).unwrap();

            prop_assert_eq!(snapshot, expected);
        }

        /// Property: negative inputs are always rejected as invalid, present or not.
        #[test]
        fn negative_update_is_always_invalid(raw in 1u32..20, present in any::<bool>(), value in i64::MIN..0) {
            let mut repo = InMemoryRepository::new();
            if present {
                repo.add(widget(raw, 1)).unwrap();
            }

            let result = repo.update(id(raw), value);
            prop_assert!(matches!(result, Err(DomainError::InvalidValue(_))));
            if present {
                prop_assert_eq!(repo.get(id(raw)).unwrap().quantity.get(), 1);
            }
        }
    }
}
