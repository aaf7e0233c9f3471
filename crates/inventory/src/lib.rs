//! Inventory domain module.
//!
//! This crate contains the business rules for a single warehouse's stock:
//! the active inventory, the recycle bin, and the transfers between them.
//! It is deterministic domain logic (no terminal IO, no storage).

pub mod item;
pub mod recycle_bin;
pub mod seed;
pub mod store;
pub mod warehouse;

pub use item::{ExpirationDate, FieldUpdate, Item, ItemField, ItemId};
pub use recycle_bin::RecycleBin;
pub use seed::sample_stock;
pub use store::{InventoryStore, NameCheck};
pub use warehouse::Warehouse;
