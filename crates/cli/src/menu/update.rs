use stockroom_inventory::{FieldUpdate, InventoryStore, Item, ItemField, ItemId};

use crate::prompt::{Prompt, ask_until};
use crate::table;

pub(super) fn run(prompt: &mut dyn Prompt, store: &mut InventoryStore) -> anyhow::Result<()> {
    loop {
        prompt.say("\n=== UPDATE ITEM MENU ===");
        if store.is_empty() {
            prompt.say("Inventory is empty. Nothing to update.");
            return Ok(());
        }

        prompt.say("\nAvailable items in inventory:");
        for item in store.list_all() {
            prompt.say(&format!(
                "ID: {}, Name: {}, Stock: {}, Price: Rp{}, Expiry: {}",
                item.item_id, item.item_name, item.stock_quantity, item.price, item.expiration_date
            ));
        }

        let raw = prompt.input("Enter the Item ID to update")?;
        let found = ItemId::parse(&raw)
            .ok()
            .and_then(|id| store.find_by_id(&id));
        match found {
            Some(item) => update_one(prompt, store, item)?,
            None => prompt.say("Item not found in the inventory."),
        }

        if !prompt.confirm("Do you want to update another item?")? {
            return Ok(());
        }
    }
}

fn update_one(prompt: &mut dyn Prompt, store: &mut InventoryStore, item: Item) -> anyhow::Result<()> {
    prompt.say("Item found:");
    prompt.say(&table::grid(core::slice::from_ref(&item)));

    if !prompt.confirm("Do you want to update this item?")? {
        prompt.say("Update cancelled.");
        return Ok(());
    }

    let labels = ItemField::ALL.map(ItemField::label);
    let choice = prompt.select("Which item detail would you like to update?", &labels)?;
    let Some(&field) = ItemField::ALL.get(choice) else {
        prompt.say("Invalid choice. Returning to update menu.");
        return Ok(());
    };

    let question = match field {
        ItemField::ExpirationDate => format!("Enter new {field} (YYYY-MM-DD)"),
        _ => format!("Enter new {field}"),
    };
    let new_value = ask_until(prompt, &question, |raw| {
        let value = raw.trim();
        FieldUpdate::parse(field, value).map(|_| value.to_string())
    })?;

    let question = format!("Are you sure you want to update the item detail '{field}' to '{new_value}'?");
    if prompt.confirm(&question)? {
        store.update_field(&item.item_id, field, &new_value)?;
        prompt.say("Item updated successfully.");
    } else {
        prompt.say("Update cancelled.");
    }
    Ok(())
}
