//! Benchmarks for TallyKV store operations

use std::sync::Arc;
use std::thread;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tallykv::{Key, Store};

const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 1_000;

fn single_key_benchmarks(c: &mut Criterion) {
    let store = Store::new();
    let key = Key::new_v4();
    store.create_if_absent(key, 0.0).unwrap();

    c.bench_function("increment_single_key", |b| {
        b.iter(|| store.increment(black_box(&key)).unwrap())
    });

    c.bench_function("read_existing_key", |b| b.iter(|| store.read(black_box(&key))));

    let missing = Key::new_v4();
    c.bench_function("read_missing_key", |b| b.iter(|| store.read(black_box(&missing))));

    c.bench_function("create_fresh_key", |b| {
        b.iter(|| store.create_if_absent(Key::new_v4(), black_box(1.0)).unwrap())
    });
}

fn contention_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_increments_distinct_keys");

    for shards in [1usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(shards), &shards, |b, &shards| {
            let store = Arc::new(Store::with_shards(shards));
            let keys: Vec<Key> = (0..THREADS).map(|_| Key::new_v4()).collect();
            for key in &keys {
                store.create_if_absent(*key, 0.0).unwrap();
            }

            b.iter(|| {
                let handles: Vec<_> = keys
                    .iter()
                    .map(|key| {
                        let store = Arc::clone(&store);
                        let key = *key;
                        thread::spawn(move || {
                            for _ in 0..OPS_PER_THREAD {
                                store.increment(&key).unwrap();
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, single_key_benchmarks, contention_benchmarks);
criterion_main!(benches);
