use stockroom_inventory::{InventoryStore, ItemId};

use crate::prompt::Prompt;
use crate::table;

const READ_MENU: [&str; 4] = [
    "View All Items",
    "Search Item by ID (Exact Match)",
    "Search Item by Name (Partial Match)",
    "Return to Main Menu",
];

pub(super) fn run(prompt: &mut dyn Prompt, store: &InventoryStore) -> anyhow::Result<()> {
    loop {
        prompt.say("\n--- READ INVENTORY MENU ---");
        let choice = prompt.select("Enter your choice", &READ_MENU)?;

        match choice {
            0..=2 if store.is_empty() => prompt.say("Inventory is empty."),
            0 => {
                let items = store.list_all();
                prompt.say(&format!("\nTotal items in inventory: {}", items.len()));
                prompt.say("\n--- INVENTORY LIST ---");
                prompt.say(&table::grid(&items));
            }
            1 => search_by_id(prompt, store)?,
            2 => search_by_name(prompt, store)?,
            3 => {
                prompt.say("Returning to Main Menu...");
                return Ok(());
            }
            _ => prompt.say("Invalid input. Please choose one of the listed options."),
        }
    }
}

fn search_by_id(prompt: &mut dyn Prompt, store: &InventoryStore) -> anyhow::Result<()> {
    let raw = prompt.input("Enter Item ID to search (e.g., SKU001)")?;
    let found = ItemId::parse(&raw)
        .ok()
        .and_then(|id| store.find_by_id(&id));

    match found {
        Some(item) => {
            prompt.say("\n=== ITEM FOUND ===");
            prompt.say(&table::grid(&[item]));
        }
        None => prompt.say(&format!(
            "No item found with ID: {}. Make sure it matches exactly (e.g., SKU001).",
            raw.trim().to_uppercase()
        )),
    }
    Ok(())
}

fn search_by_name(prompt: &mut dyn Prompt, store: &InventoryStore) -> anyhow::Result<()> {
    let answer = prompt.input("Enter part of the item name to search")?;
    let fragment = answer.trim();
    let matches = store.find_by_name_substring(fragment);

    if matches.is_empty() {
        prompt.say(&format!("No item found containing name: {fragment}"));
    } else {
        prompt.say(&format!("\n=== MATCHING ITEMS FOR '{fragment}' ==="));
        prompt.say(&table::grid(&matches));
    }
    Ok(())
}
