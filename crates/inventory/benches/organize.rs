use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use satchel_inventory::{Organize, OrganizationStrategy};
use satchel_items::{Item, Rarity};

fn sample_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            let rarity = Rarity::ALL[i % Rarity::ALL.len()];
            let weight = (i % 17) as f64 * 0.5;
            let value = ((i * 37) % 1000) as u32;
            match i % 4 {
                0 => Item::weapon("w", weight, rarity, value, (i % 50) as u32, "Slashing"),
                1 => Item::armor("a", weight, rarity, value, (i % 30) as u32, "Metal"),
                2 => Item::consumable("c", weight, rarity, value, "Heal", 1),
                _ => Item::quest("q", weight, rarity, value, "Quest", false),
            }
        })
        .collect()
}

fn bench_organize(c: &mut Criterion) {
    let mut group = c.benchmark_group("organize");
    let items = sample_items(1_000);

    for strategy in OrganizationStrategy::ALL {
        let id = BenchmarkId::from_parameter(format!("{strategy:?}"));
        group.bench_with_input(id, &items, |b, items| {
            b.iter(|| black_box(strategy.organize(black_box(items))).len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_organize);
criterion_main!(benches);
