//! Active inventory: the authoritative, insertion-ordered set of items.

use stockroom_core::{DomainError, DomainResult, Entity};

use crate::item::{FieldUpdate, Item, ItemField, ItemId};

/// How `add` treats a name already used by another active item.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NameCheck {
    /// Refuse with `DuplicateNameWarning` so the caller can ask the user.
    Advise,
    /// The user has already confirmed the duplicate name.
    Acknowledged,
}

/// Active items, in insertion order.
///
/// Lookups are linear scans; order only changes when items are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStore {
    items: Vec<Item>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store by adding each item in turn (duplicate names allowed,
    /// duplicate IDs rejected).
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> DomainResult<Self> {
        let mut store = Self::new();
        for item in items {
            store.add(item, NameCheck::Acknowledged)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_id(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Case-insensitive check against every active item's name.
    pub fn name_in_use(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.items
            .iter()
            .any(|item| item.item_name.to_lowercase() == wanted)
    }

    /// Append a new item after the uniqueness gates.
    ///
    /// A duplicate ID always fails. A duplicate name fails with the advisory
    /// `DuplicateNameWarning` unless `names` is `Acknowledged`.
    pub fn add(&mut self, candidate: Item, names: NameCheck) -> DomainResult<()> {
        if self.contains_id(&candidate.item_id) {
            return Err(DomainError::duplicate_id(candidate.item_id.as_str()));
        }
        if names == NameCheck::Advise && self.name_in_use(&candidate.item_name) {
            return Err(DomainError::duplicate_name(candidate.item_name));
        }

        tracing::info!(item_id = %candidate.item_id, name = %candidate.item_name, "item added");
        self.items.push(candidate);
        Ok(())
    }

    pub fn find_by_id(&self, id: &ItemId) -> Option<Item> {
        let found = self.items.iter().find(|item| item.id() == id).cloned();
        tracing::debug!(item_id = %id, found = found.is_some(), "lookup by id");
        found
    }

    /// Every item whose name contains `fragment`, ignoring case, in store order.
    pub fn find_by_name_substring(&self, fragment: &str) -> Vec<Item> {
        let needle = fragment.to_lowercase();
        let matches: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.item_name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        tracing::debug!(fragment, matches = matches.len(), "search by name");
        matches
    }

    /// Replace one field of an active item.
    ///
    /// The value is validated before the item is touched; name updates skip
    /// the duplicate-name advisory.
    pub fn update_field(&mut self, id: &ItemId, field: ItemField, new_value: &str) -> DomainResult<()> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(id.as_str()))?;
        let update = FieldUpdate::parse(field, new_value)?;

        tracing::info!(item_id = %id, field = %update.field(), "item updated");
        self.items[index].apply(update);
        Ok(())
    }

    pub fn remove(&mut self, id: &ItemId) -> DomainResult<Item> {
        let index = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(id.as_str()))?;
        Ok(self.items.remove(index))
    }

    pub fn remove_all(&mut self) -> Vec<Item> {
        core::mem::take(&mut self.items)
    }

    pub fn list_all(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Append without any uniqueness check. Used only by the restore path.
    pub(crate) fn reinstate(&mut self, item: Item) {
        self.items.push(item);
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
