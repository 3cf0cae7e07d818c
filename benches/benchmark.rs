// Performance benchmarks for the bozor catalog engine
use bozor_core::{evaluate, interpret, ConstraintSet, Listing, ListingId};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;

const CATEGORIES: &[&str] = &["Квартиры", "Дома", "Cars", "Телефоны"];
const DISTRICTS: &[&str] = &["Mirabad", "Yunusabad", "Chilanzar", "Sergeli"];

fn generate_listing(id: usize, rng: &mut impl Rng) -> Listing {
    let category = CATEGORIES[id % CATEGORIES.len()];
    Listing::new(
        ListingId::Integer(id as u64),
        category,
        rng.random_range(500.0..150000.0),
    )
    .with_name(format!("listing number {}", id))
    .with_attributes(serde_json::json!({
        "rooms": rng.random_range(1..6),
        "district": DISTRICTS[id % DISTRICTS.len()],
        "year": rng.random_range(2000..2025),
    }))
}

fn generate_catalog(size: usize) -> Vec<Listing> {
    let mut rng = rand::rng();
    (0..size).map(|i| generate_listing(i, &mut rng)).collect()
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for size in [100, 1000, 10000].iter() {
        let listings = generate_catalog(*size);
        let constraints = ConstraintSet {
            category: Some(vec!["Квартиры".to_string(), "Квартира".to_string()]),
            max_price: Some(80000.0),
            rooms: Some(2),
            location_keyword: Some("mirabad".to_string()),
            ..Default::default()
        };

        group.bench_with_input(BenchmarkId::new("bozor", size), size, |b, _| {
            b.iter(|| evaluate(black_box(&listings), black_box(&constraints)))
        });
    }

    group.finish();
}

fn benchmark_interpret(c: &mut Criterion) {
    let phrases = [
        "квартира 2 комнаты до 50k в мирабад",
        "бюджет до 60000",
        "house with land in chilanzar, 3 rooms, 120 тыс",
        "машина автомат до 20000",
    ];

    c.bench_function("interpret", |b| {
        b.iter(|| {
            for phrase in &phrases {
                black_box(interpret(black_box(phrase)));
            }
        })
    });
}

criterion_group!(benches, benchmark_evaluate, benchmark_interpret);
criterion_main!(benches);
