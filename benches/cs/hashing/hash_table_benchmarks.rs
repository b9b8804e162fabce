//! Insert and lookup throughput for each collision strategy and hash function.
//!
//! Tables are sized at twice the key count so linear probing never fills up.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use strtab::{HashFunction, HashTable, HashTableBuilder, Strategy};

const SIZES: &[usize] = &[100, 1_000, 10_000];
const HASHES: [HashFunction; 3] = [HashFunction::Djb2, HashFunction::Fnv1a, HashFunction::Jenkins];
const STRATEGIES: [Strategy; 2] = [Strategy::Chaining, Strategy::LinearProbing];

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..count)
        .map(|i| format!("{}-{}", i, rng.gen::<u32>()))
        .collect()
}

fn build(capacity: usize, strategy: Strategy, hash_fn: HashFunction) -> HashTable {
    HashTableBuilder::new()
        .with_capacity(capacity)
        .with_strategy(strategy)
        .with_hash_function(hash_fn)
        .build()
        .unwrap()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_table_insert");
    for &size in SIZES {
        let keys = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));
        for strategy in STRATEGIES {
            for hash_fn in HASHES {
                let id = BenchmarkId::new(format!("{strategy}/{hash_fn}"), size);
                group.bench_with_input(id, &keys, |b, keys| {
                    b.iter(|| {
                        let mut table = build(size * 2, strategy, hash_fn);
                        for (i, key) in keys.iter().enumerate() {
                            table.insert(black_box(key), i as i64).unwrap();
                        }
                        black_box(table)
                    });
                });
            }
        }
    }
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_table_get");
    for &size in SIZES {
        let keys = random_keys(size);
        group.throughput(Throughput::Elements(size as u64));
        for strategy in STRATEGIES {
            for hash_fn in HASHES {
                let mut table = build(size * 2, strategy, hash_fn);
                for (i, key) in keys.iter().enumerate() {
                    table.insert(key, i as i64).unwrap();
                }
                let id = BenchmarkId::new(format!("{strategy}/{hash_fn}"), size);
                group.bench_with_input(id, &keys, |b, keys| {
                    b.iter(|| {
                        let mut hits = 0usize;
                        for key in keys {
                            if table.get(black_box(key)).is_some() {
                                hits += 1;
                            }
                        }
                        black_box(hits)
                    });
                });
            }
        }
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_get);
criterion_main!(benches);
