//! Interactive terminal front end for the warehouse inventory.
//!
//! All state lives in a [`stockroom_inventory::Warehouse`] owned by `main`;
//! this crate only collects input, calls the domain operations and renders
//! the results.

pub mod config;
pub mod menu;
pub mod prompt;
pub mod table;

pub use config::Config;
pub use prompt::{Prompt, Terminal};
