//! Benchmark for OrderedMap and BalancedOrderedMap vs standard BTreeMap.
//!
//! Keys are inserted both in a shuffled order, where the plain tree stays
//! shallow, and in ascending order, where it degrades into a chain.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ordered_trees::{BalancedOrderedMap, OrderedMap};
use std::collections::BTreeMap;

/// Deterministic permutation of `0..size`.
fn shuffled(size: u64) -> Vec<u64> {
    let mut keys: Vec<u64> = (0..size).collect();
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    for index in (1..keys.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let other = usize::try_from(state % (index as u64 + 1)).unwrap_or(0);
        keys.swap(index, other);
    }
    keys
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    for (label, ascending) in [("insert_shuffled", false), ("insert_ascending", true)] {
        let mut group = criterion.benchmark_group(label);

        for size in [100, 1000, 10000] {
            let keys = if ascending {
                (0..size).collect()
            } else {
                shuffled(size)
            };

            // OrderedMap insert
            group.bench_with_input(BenchmarkId::new("OrderedMap", size), &keys, |bencher, keys| {
                bencher.iter(|| {
                    let mut map = OrderedMap::new();
                    for &key in keys {
                        let _ = map.insert(black_box(key), black_box(key * 2));
                    }
                    black_box(map)
                });
            });

            // BalancedOrderedMap insert
            group.bench_with_input(
                BenchmarkId::new("BalancedOrderedMap", size),
                &keys,
                |bencher, keys| {
                    bencher.iter(|| {
                        let mut map = BalancedOrderedMap::new();
                        for &key in keys {
                            let _ = map.insert(black_box(key), black_box(key * 2));
                        }
                        black_box(map)
                    });
                },
            );

            // Standard BTreeMap insert
            group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
                bencher.iter(|| {
                    let mut map = BTreeMap::new();
                    for &key in keys {
                        map.insert(black_box(key), black_box(key * 2));
                    }
                    black_box(map)
                });
            });
        }

        group.finish();
    }
}

// =============================================================================
// find Benchmark
// =============================================================================

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");

    for size in [100, 1000, 10000] {
        let keys = shuffled(size);
        let mut plain = OrderedMap::new();
        let mut balanced = BalancedOrderedMap::new();
        let mut btree = BTreeMap::new();
        for &key in &keys {
            let _ = plain.insert(key, key);
            let _ = balanced.insert(key, key);
            btree.insert(key, key);
        }

        group.bench_with_input(BenchmarkId::new("OrderedMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(plain.find(black_box(&key)));
                }
            });
        });

        group.bench_with_input(
            BenchmarkId::new("BalancedOrderedMap", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    for key in 0..size {
                        black_box(balanced.find(black_box(&key)));
                    }
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in 0..size {
                    black_box(btree.get(black_box(&key)));
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// delete Benchmark
// =============================================================================

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete");

    for size in [100, 1000, 10000] {
        let keys = shuffled(size);
        let balanced: BalancedOrderedMap<u64, u64> =
            BalancedOrderedMap::try_from_iter(keys.iter().map(|&key| (key, key)))
                .unwrap_or_default();
        let btree: BTreeMap<u64, u64> = keys.iter().map(|&key| (key, key)).collect();

        group.bench_with_input(
            BenchmarkId::new("BalancedOrderedMap", size),
            &keys,
            |bencher, keys| {
                bencher.iter_batched(
                    || balanced.clone(),
                    |mut map| {
                        for key in keys {
                            black_box(map.delete(key));
                        }
                        map
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter_batched(
                || btree.clone(),
                |mut map| {
                    for key in keys {
                        black_box(map.remove(key));
                    }
                    map
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100, 1000, 10000] {
        let balanced: BalancedOrderedMap<u64, u64> =
            BalancedOrderedMap::try_from_iter((0..size).map(|key| (key, key))).unwrap_or_default();
        let btree: BTreeMap<u64, u64> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(
            BenchmarkId::new("BalancedOrderedMap", size),
            &balanced,
            |bencher, map| {
                bencher.iter(|| black_box(map.iter().map(|(_, value)| value).sum::<u64>()));
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &btree, |bencher, map| {
            bencher.iter(|| black_box(map.values().sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_find,
    benchmark_delete,
    benchmark_iteration
);

criterion_main!(benches);
