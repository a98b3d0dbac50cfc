//! Benchmarks for indexed queue operations.
//!
//! Build/drain churn is compared against std's BinaryHeap. The in-place
//! operations (relax, change_priority, contains) have no std counterpart
//! and are measured on their own, including the effect of the membership
//! hasher.

use cairn_collections::{IndexedPriorityQueue, KeyOrder, PriorityQueue};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fnv::FnvBuildHasher;
use std::collections::BinaryHeap;

// ============================================================================
// Build then drain
// ============================================================================

fn bench_build_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_drain");

    for size in [100usize, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |b, &n| {
            b.iter(|| {
                let mut queue: IndexedPriorityQueue<u64> =
                    IndexedPriorityQueue::with_capacity(n);
                for i in 0..n as u64 {
                    queue.add_with_priority(black_box(i), ((i * 7 + 13) % n as u64) as f64);
                }
                while let Ok(key) = queue.extract_first() {
                    black_box(key);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", size), &size, |b, &n| {
            b.iter(|| {
                let mut heap: BinaryHeap<(u64, u64)> = BinaryHeap::with_capacity(n);
                for i in 0..n as u64 {
                    heap.push(black_box(((i * 7 + 13) % n as u64, i)));
                }
                while let Some(item) = heap.pop() {
                    black_box(item);
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Membership lookups under different hashers
// ============================================================================

fn bench_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");

    const SIZE: u64 = 1000;

    group.bench_function("contains/random_state", |b| {
        let mut queue: IndexedPriorityQueue<u64> =
            IndexedPriorityQueue::with_capacity(SIZE as usize);
        for i in 0..SIZE {
            queue.add_with_priority(i, i as f64);
        }
        let mut probe = 0u64;
        b.iter(|| {
            probe = (probe * 31 + 7) % SIZE;
            black_box(queue.contains(&black_box(probe)))
        });
    });

    group.bench_function("contains/fnv", |b| {
        let mut queue: IndexedPriorityQueue<u64, KeyOrder, FnvBuildHasher> =
            IndexedPriorityQueue::with_capacity_and_hasher(
                SIZE as usize,
                FnvBuildHasher::default(),
            );
        for i in 0..SIZE {
            queue.add_with_priority(i, i as f64);
        }
        let mut probe = 0u64;
        b.iter(|| {
            probe = (probe * 31 + 7) % SIZE;
            black_box(queue.contains(&black_box(probe)))
        });
    });

    group.finish();
}

// ============================================================================
// In-place priority mutation
// ============================================================================

fn bench_in_place_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_place_mutation");

    const SIZE: u64 = 1000;
    group.throughput(Throughput::Elements(1));

    group.bench_function("relax", |b| {
        let mut queue: IndexedPriorityQueue<u64> =
            IndexedPriorityQueue::with_capacity(SIZE as usize);
        for i in 0..SIZE {
            queue.add_with_priority(i, i as f64);
        }
        let mut victim = 0u64;
        let mut bump = SIZE as f64;
        b.iter(|| {
            victim = (victim * 17 + 3) % SIZE;
            bump += 1.0;
            black_box(queue.relax(&victim, bump).unwrap())
        });
    });

    group.bench_function("change_priority", |b| {
        let mut queue: IndexedPriorityQueue<u64> =
            IndexedPriorityQueue::with_capacity(SIZE as usize);
        for i in 0..SIZE {
            queue.add_with_priority(i, i as f64);
        }
        let mut victim = 0u64;
        let mut flip = 1.0f64;
        b.iter(|| {
            victim = (victim * 17 + 3) % SIZE;
            flip = -flip;
            queue
                .change_priority(&victim, flip * victim as f64)
                .unwrap();
            black_box(victim)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build_drain,
    bench_membership,
    bench_in_place_mutation,
);

criterion_main!(benches);
