//! Menu loops. Each submenu returns to the main menu when the user backs out.

mod create;
mod delete;
mod read;
mod update;

use stockroom_inventory::Warehouse;

use crate::prompt::Prompt;

const MAIN_MENU: [&str; 5] = [
    "View Inventory",
    "Add New Item",
    "Update Existing Item",
    "Delete Item from Inventory",
    "Exit Program",
];

/// Run the main menu until the user picks "Exit Program".
pub fn run(prompt: &mut dyn Prompt, warehouse: &mut Warehouse) -> anyhow::Result<()> {
    loop {
        prompt.say("\n=== WAREHOUSE INVENTORY SYSTEM ===");
        let choice = prompt.select("Please select an option", &MAIN_MENU)?;
        tracing::debug!(choice, "main menu");

        match choice {
            0 => read::run(prompt, warehouse.store())?,
            1 => create::run(prompt, warehouse.store_mut())?,
            2 => update::run(prompt, warehouse.store_mut())?,
            3 => delete::run(prompt, warehouse)?,
            4 => {
                prompt.say("Thank you! Exiting the program.");
                return Ok(());
            }
            _ => {
                prompt.say("Invalid input. Please choose one of the listed options.");
                continue;
            }
        }
        prompt.pause()?;
    }
}
