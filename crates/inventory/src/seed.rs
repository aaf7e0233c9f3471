//! Sample stock loaded at startup so a fresh session has something to work with.

use stockroom_core::DomainResult;

use crate::item::Item;

// (id, name, quantity, price, expiration date)
const SAMPLE_STOCK: [(&str, &str, &str, &str, &str); 10] = [
    ("SKU001", "Yakult 10 pack", "20", "25000", "2025-07-01"),
    ("SKU002", "Susu Greenfields", "15", "18000", "2025-06-20"),
    ("SKU003", "Olive Oil Felipo Berio", "10", "95000", "2026-01-01"),
    ("SKU004", "Rinso Liquid Frontloading Machine", "25", "32000", "2027-05-01"),
    ("SKU005", "Rapika for Clothes", "30", "15000", "2026-08-15"),
    ("SKU006", "Bebek Kloset", "40", "13000", "2026-02-10"),
    ("SKU007", "Wangshan Fuji Apples", "12", "30000", "2025-06-15"),
    ("SKU008", "Sunpride Bananas", "18", "22000", "2025-06-14"),
    ("SKU009", "Ready to Go Mix Salad", "8", "17000", "2025-06-13"),
    ("SKU010", "Sunlight", "35", "14000", "2026-03-30"),
];

pub fn sample_stock() -> DomainResult<Vec<Item>> {
    SAMPLE_STOCK
        .iter()
        .map(|(id, name, quantity, price, expires)| Item::parse(id, name, quantity, price, expires))
        .collect()
}
