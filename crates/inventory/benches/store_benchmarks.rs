use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use stockroom_inventory::{InventoryStore, Item, ItemId, NameCheck};

fn populated(size: usize) -> InventoryStore {
    let mut store = InventoryStore::new();
    for n in 0..size {
        let item = Item::parse(
            &format!("SKU{n:06}"),
            &format!("Product {n}"),
            "10",
            "15000",
            "2026-12-25",
        )
        .unwrap();
        store.add(item, NameCheck::Acknowledged).unwrap();
    }
    store
}

fn bench_find_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_id");
    for size in [10usize, 1_000, 10_000] {
        let store = populated(size);
        let last = ItemId::parse(&format!("SKU{:06}", size - 1)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &last, |b, id| {
            b.iter(|| black_box(store.find_by_id(black_box(id))))
        });
    }
    group.finish();
}

fn bench_name_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_name_substring");
    for size in [10usize, 1_000, 10_000] {
        let store = populated(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(store.find_by_name_substring(black_box("product 9"))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find_by_id, bench_name_search);
criterion_main!(benches);
