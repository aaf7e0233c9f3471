//! Grid rendering of item records.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use stockroom_inventory::Item;

#[derive(Tabled)]
struct ItemRow {
    item_id: String,
    item_name: String,
    stock_quantity: u64,
    price: i64,
    expiration_date: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.item_id.to_string(),
            item_name: item.item_name.clone(),
            stock_quantity: item.stock_quantity,
            price: item.price,
            expiration_date: item.expiration_date.to_string(),
        }
    }
}

/// All fields, one row per item, with a header row.
pub fn grid(items: &[Item]) -> String {
    let mut table = Table::new(items.iter().map(ItemRow::from));
    table.with(Style::ascii());
    table.to_string()
}

/// Compact `ID | Name` listing.
pub fn id_and_name(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| format!("{} | {}", item.item_id, item.item_name))
        .collect::<Vec<_>>()
        .join("\n")
}
