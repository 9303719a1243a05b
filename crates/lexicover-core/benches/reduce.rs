use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lexicover_core::{Dictionary, GraphReducer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Tier {
    name: &'static str,
    words: usize,
    words_per_definition: usize,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "small",
        words: 500,
        words_per_definition: 4,
    },
    Tier {
        name: "medium",
        words: 2_000,
        words_per_definition: 6,
    },
    Tier {
        name: "large",
        words: 8_000,
        words_per_definition: 8,
    },
];

/// Synthetic dictionary: every word is defined by a few random other words.
fn generate_dictionary(tier: &Tier, seed: u64) -> Dictionary {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dict = Dictionary::new();
    for idx in 0..tier.words {
        let count = rng.gen_range(1..=tier.words_per_definition);
        let words = (0..count)
            .map(|_| format!("w{}", rng.gen_range(0..tier.words)))
            .collect();
        dict.push(format!("w{idx}"), words);
    }
    dict
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce.tiered");
    group.sample_size(10);

    for tier in &TIERS {
        let dict = generate_dictionary(tier, 0x1E_C0DE_u64 + tier.words as u64);
        group.throughput(Throughput::Elements(tier.words as u64));

        group.bench_with_input(BenchmarkId::new("populate", tier.name), &dict, |b, dict| {
            b.iter(|| black_box(dict.to_graph()));
        });

        group.bench_with_input(BenchmarkId::new("peel_all", tier.name), &dict, |b, dict| {
            b.iter_batched(
                || dict.to_graph(),
                |mut graph| black_box(GraphReducer::new(&mut graph).peel_all()),
                criterion::BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("reduce", tier.name), &dict, |b, dict| {
            b.iter_batched(
                || dict.to_graph(),
                |mut graph| black_box(GraphReducer::new(&mut graph).reduce()),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reduce);
criterion_main!(benches);
