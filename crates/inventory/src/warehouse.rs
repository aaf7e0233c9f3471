//! Session state: one inventory plus one recycle bin, and the transfers
//! between them.
//!
//! Item lifecycle: `Active -> Binned -> (Active | Purged)`.
//!
//! - delete / delete all: store removes, bin admits
//! - restore: bin hands back the first matching entry, the store appends it
//!   without re-running the add gate
//! - purge: bin drops everything (terminal)

use stockroom_core::DomainResult;

use crate::item::{Item, ItemId};
use crate::recycle_bin::RecycleBin;
use crate::seed::sample_stock;
use crate::store::InventoryStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warehouse {
    store: InventoryStore,
    bin: RecycleBin<Item>,
}

impl Warehouse {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store,
            bin: RecycleBin::new(),
        }
    }

    /// A session pre-loaded with the ten sample SKUs.
    pub fn with_sample_stock() -> DomainResult<Self> {
        Ok(Self::new(InventoryStore::with_items(sample_stock()?)?))
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Mutable access for add and update. Removal goes through [`Warehouse::delete`].
    pub fn store_mut(&mut self) -> &mut InventoryStore {
        &mut self.store
    }

    pub fn bin(&self) -> &RecycleBin<Item> {
        &self.bin
    }

    /// Soft-delete one item. Returns a copy of what was moved.
    pub fn delete(&mut self, id: &ItemId) -> DomainResult<Item> {
        let removed = self.store.remove(id)?;
        self.bin.admit(removed.clone());
        Ok(removed)
    }

    /// Soft-delete every active item. Returns how many were moved.
    pub fn delete_all(&mut self) -> usize {
        let removed = self.store.remove_all();
        let moved = removed.len();
        for item in removed {
            self.bin.admit(item);
        }
        tracing::info!(moved, "inventory cleared into recycle bin");
        moved
    }

    /// Move the first bin entry with `id` back into the inventory.
    ///
    /// No duplicate-ID or duplicate-name check is made; a clash with a live
    /// item is logged and allowed.
    pub fn restore(&mut self, id: &ItemId) -> DomainResult<Item> {
        let item = self.bin.restore(id)?;
        if self.store.contains_id(&item.item_id) {
            tracing::warn!(item_id = %item.item_id, "restored item shares its ID with an active item");
        }
        tracing::info!(item_id = %item.item_id, "item restored");
        self.store.reinstate(item.clone());
        Ok(item)
    }

    /// Permanently drop everything in the bin. Returns how many were dropped.
    pub fn purge_bin(&mut self) -> usize {
        self.bin.purge_all()
    }
}
