use stockroom_core::{parse_integer, parse_non_negative};
use stockroom_inventory::{ExpirationDate, InventoryStore, Item, ItemId, NameCheck};

use crate::prompt::{Prompt, ask_until};
use crate::table;

pub(super) fn run(prompt: &mut dyn Prompt, store: &mut InventoryStore) -> anyhow::Result<()> {
    prompt.say("\n[Add New Item]");
    if store.is_empty() {
        prompt.say("\nInventory is currently empty.");
    } else {
        prompt.say("\nCurrent Inventory (ID | Name):");
        prompt.say(&table::id_and_name(&store.list_all()));
    }

    let item_id = ask_until(prompt, "Enter New Item ID (e.g., SKU011)", ItemId::parse)?;
    if store.contains_id(&item_id) {
        prompt.say(" Item ID already exists. Please use a different ID.");
        return Ok(());
    }

    let item_name = prompt.input("Enter New Item Name (e.g., Sunlight 750ml)")?;
    let names = if store.name_in_use(&item_name) {
        let question =
            format!("An item with the name '{item_name}' already exists. Continue anyway?");
        if !prompt.confirm(&question)? {
            prompt.say(" Canceled. Item not saved.");
            return Ok(());
        }
        NameCheck::Acknowledged
    } else {
        NameCheck::Advise
    };

    let stock_quantity = ask_until(
        prompt,
        "Enter stock quantity (number, e.g., 20)",
        parse_non_negative,
    )?;
    let price = ask_until(prompt, "Enter price (e.g., 15000)", parse_integer)?;
    let expiration_date = ask_until(prompt, "Enter Expiration Date (e.g., 2026-12-25)", |raw| {
        raw.parse::<ExpirationDate>()
    })?;

    if !prompt.confirm("Do you want to save this item?")? {
        prompt.say(" Canceled. Item not saved.");
        return Ok(());
    }

    let item = Item::new(item_id, item_name, stock_quantity, price, expiration_date);
    match store.add(item, names) {
        Ok(()) => {
            prompt.say("Item added successfully!\n");
            prompt.say(" Updated Inventory:");
            prompt.say(&table::grid(&store.list_all()));
        }
        Err(err) => prompt.say(&format!(" Item not saved: {err}")),
    }
    Ok(())
}
