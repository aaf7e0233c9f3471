//! Soft-deleted records awaiting restore or purge.

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::item::Item;

/// Insertion-ordered holding area for deleted records.
///
/// Entries are owned copies; the same ID may appear more than once when an
/// item is deleted, re-created and deleted again. The bin never writes back
/// into the inventory itself: `restore` hands the record to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecycleBin<E = Item> {
    entries: Vec<E>,
}

impl<E> Default for RecycleBin<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<E> RecycleBin<E>
where
    E: Entity + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn admit(&mut self, entry: E) {
        tracing::info!(id = %entry.id(), "moved to recycle bin");
        self.entries.push(entry);
    }

    pub fn list_all(&self) -> Vec<E> {
        self.entries.clone()
    }

    /// Take the first entry with `id` out of the bin.
    pub fn restore(&mut self, id: &E::Id) -> DomainResult<E> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id() == id)
            .ok_or_else(|| DomainError::not_found(id.to_string()))?;
        Ok(self.entries.remove(index))
    }

    /// Discard everything. Returns how many entries were dropped.
    pub fn purge_all(&mut self) -> usize {
        let purged = self.entries.len();
        self.entries.clear();
        tracing::info!(purged, "recycle bin purged");
        purged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn item(sku: &str, name: &str) -> Item {
        Item::parse(sku, name, "1", "100", "2026-01-01").unwrap()
    }

    fn sku(raw: &str) -> ItemId {
        ItemId::parse(raw).unwrap()
    }

    #[test]
    fn admit_keeps_insertion_order_and_allows_repeated_ids() {
        let mut bin = RecycleBin::new();
        bin.admit(item("SKU001", "first"));
        bin.admit(item("SKU002", "other"));
        bin.admit(item("SKU001", "second"));

        let names: Vec<_> = bin.list_all().into_iter().map(|i| i.item_name).collect();
        assert_eq!(names, vec!["first", "other", "second"]);
    }

    #[test]
    fn restore_takes_the_first_match_only() {
        let mut bin = RecycleBin::new();
        bin.admit(item("SKU001", "first"));
        bin.admit(item("SKU002", "other"));
        bin.admit(item("SKU001", "second"));

        let restored = bin.restore(&sku("sku001")).unwrap();
        assert_eq!(restored.item_name, "first");

        let remaining: Vec<_> = bin.list_all().into_iter().map(|i| i.item_name).collect();
        assert_eq!(remaining, vec!["other", "second"]);
    }

    #[test]
    fn restore_of_unknown_id_is_not_found() {
        let mut bin: RecycleBin = RecycleBin::new();
        let err = bin.restore(&sku("SKU404")).unwrap_err();
        match err {
            DomainError::NotFound(id) => assert_eq!(id, "SKU404"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn purge_empties_regardless_of_contents() {
        let mut bin = RecycleBin::new();
        assert_eq!(bin.purge_all(), 0);

        bin.admit(item("SKU001", "a"));
        bin.admit(item("SKU001", "b"));
        assert_eq!(bin.purge_all(), 2);
        assert!(bin.list_all().is_empty());
    }

    #[test]
    fn entries_are_detached_from_the_caller() {
        let mut original = item("SKU001", "Yakult");
        let mut bin = RecycleBin::new();
        bin.admit(original.clone());

        original.stock_quantity = 999;
        assert_eq!(bin.list_all()[0].stock_quantity, 1);
    }
}
