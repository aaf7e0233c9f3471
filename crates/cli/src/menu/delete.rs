use stockroom_inventory::{ItemId, Warehouse};

use crate::prompt::Prompt;
use crate::table;

const DELETE_MENU: [&str; 6] = [
    "Delete an item by ID",
    "Delete ALL items",
    "View Recycle Bin",
    "Restore item from Recycle Bin",
    "Empty Recycle Bin Permanently",
    "Return to Main Menu",
];

pub(super) fn run(prompt: &mut dyn Prompt, warehouse: &mut Warehouse) -> anyhow::Result<()> {
    loop {
        prompt.say("\n=== Delete Menu ===");
        if warehouse.store().is_empty() {
            prompt.say("Inventory is empty.");
        } else {
            prompt.say("\nCurrent Inventory:");
            prompt.say(&table::grid(&warehouse.store().list_all()));
        }

        match prompt.select("Choose an option", &DELETE_MENU)? {
            0 => delete_one(prompt, warehouse)?,
            1 => delete_all(prompt, warehouse)?,
            2 => {
                let binned = warehouse.bin().list_all();
                if binned.is_empty() {
                    prompt.say("Recycle bin is empty.");
                } else {
                    prompt.say("\nRecycle Bin Contents:");
                    prompt.say(&table::grid(&binned));
                }
            }
            3 => restore(prompt, warehouse)?,
            4 => purge(prompt, warehouse)?,
            5 => {
                prompt.say("Returning to Main Menu...");
                return Ok(());
            }
            _ => prompt.say("Invalid choice. Please choose one of the listed options."),
        }
    }
}

fn delete_one(prompt: &mut dyn Prompt, warehouse: &mut Warehouse) -> anyhow::Result<()> {
    let raw = prompt.input("Enter the ID of the item to delete")?;
    let Some(item) = ItemId::parse(&raw)
        .ok()
        .and_then(|id| warehouse.store().find_by_id(&id))
    else {
        prompt.say("Item ID not found. Please try again.");
        return Ok(());
    };

    prompt.say("\nItem found:");
    prompt.say(&table::grid(core::slice::from_ref(&item)));

    let question = format!("Are you sure you want to delete item '{}'?", item.item_name);
    if prompt.confirm(&question)? {
        warehouse.delete(&item.item_id)?;
        prompt.say(&format!(
            "Item '{}' with ID {} has been removed and moved to the recycle bin.",
            item.item_name, item.item_id
        ));
    } else {
        prompt.say("Deletion canceled.");
    }
    Ok(())
}

fn delete_all(prompt: &mut dyn Prompt, warehouse: &mut Warehouse) -> anyhow::Result<()> {
    if warehouse.store().is_empty() {
        prompt.say("Inventory is already empty.");
        return Ok(());
    }
    if prompt.confirm("Are you sure you want to delete ALL items in the inventory?")? {
        let moved = warehouse.delete_all();
        prompt.say(&format!(
            "All {moved} items have been deleted and moved to the recycle bin."
        ));
    } else {
        prompt.say("Bulk deletion canceled.");
    }
    Ok(())
}

fn restore(prompt: &mut dyn Prompt, warehouse: &mut Warehouse) -> anyhow::Result<()> {
    if warehouse.bin().is_empty() {
        prompt.say("Recycle bin is empty. Nothing to restore.");
        return Ok(());
    }

    let raw = prompt.input("Enter the ID of the item to restore")?;
    let restored = ItemId::parse(&raw).and_then(|id| warehouse.restore(&id));
    match restored {
        Ok(item) => prompt.say(&format!(
            "Item '{}' has been restored to the inventory.",
            item.item_name
        )),
        Err(_) => prompt.say("Item not found in the recycle bin."),
    }
    Ok(())
}

fn purge(prompt: &mut dyn Prompt, warehouse: &mut Warehouse) -> anyhow::Result<()> {
    if warehouse.bin().is_empty() {
        prompt.say("Recycle bin is already empty.");
        return Ok(());
    }
    if prompt.confirm("Are you sure you want to permanently delete all items in the recycle bin?")? {
        let purged = warehouse.purge_bin();
        prompt.say(&format!("Recycle bin has been emptied ({purged} items removed)."));
    } else {
        prompt.say("Action canceled.");
    }
    Ok(())
}
