//! Calculator benchmarks: single listing and a catalog sweep.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use profitcalc::{CalculationInput, compute, suggest_custom};

/// Generate `n` listings with deterministically varied prices and rates.
fn generate_catalog(n: usize) -> Vec<CalculationInput> {
    // Simple deterministic PRNG (xorshift32)
    let mut rng_state: u32 = 42;
    let mut next = move || {
        rng_state ^= rng_state << 13;
        rng_state ^= rng_state >> 17;
        rng_state ^= rng_state << 5;
        rng_state
    };

    (0..n)
        .map(|_| {
            let price = 10.0 + (next() % 50_000) as f64 / 100.0;
            CalculationInput::new(price)
                .with_product_cost(price * 0.4)
                .with_shipping_cost((next() % 2_000) as f64 / 100.0)
                .with_packaging_cost(2.5)
                .with_ads_cost((next() % 500) as f64 / 100.0)
                .with_discount((next() % 1_000) as f64 / 100.0)
                .with_platform_fee_rate([12.0, 15.0][(next() % 2) as usize])
                .with_tax_rate((next() % 20) as f64)
                .with_projection(1 + next() % 20, 30)
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let input = CalculationInput::new(79.90)
        .with_discount(10.0)
        .with_product_cost(35.0)
        .with_shipping_cost(12.0)
        .with_packaging_cost(5.0)
        .with_ads_cost(5.0)
        .with_platform_fee_rate(12.0)
        .with_tax_rate(8.0)
        .with_projection(4, 30);

    c.bench_function("compute/single", |b| b.iter(|| compute(black_box(&input))));
    c.bench_function("suggest/custom_margin", |b| {
        b.iter(|| suggest_custom(black_box(&input), black_box(25.0)))
    });
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute/catalog");

    for size in [100, 10_000] {
        let catalog = generate_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| {
                catalog
                    .iter()
                    .map(|input| compute(input).projected_profit)
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single, bench_catalog);
criterion_main!(benches);
