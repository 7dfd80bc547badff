use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use std::thread;

use stocksim_core::ProductId;
use stocksim_inventory::{LockedInventory, StockEngine};

const THREADS: usize = 4;
const OPS_PER_THREAD: u32 = 1_000;

/// All threads hammer cell 0: every operation serializes on one guard.
fn same_cell(inv: &LockedInventory) {
    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..OPS_PER_THREAD {
                    inv.restock(ProductId(0), 1).unwrap();
                    inv.sell(ProductId(0), 1).unwrap();
                }
            });
        }
    });
}

/// Each thread owns its cell: guards are disjoint, no cross-thread blocking.
fn disjoint_cells(inv: &LockedInventory) {
    thread::scope(|scope| {
        for i in 0..THREADS {
            scope.spawn(move || {
                for _ in 0..OPS_PER_THREAD {
                    inv.restock(ProductId(i), 1).unwrap();
                    inv.sell(ProductId(i), 1).unwrap();
                }
            });
        }
    });
}

fn bench_per_cell_locking(c: &mut Criterion) {
    let mut group = c.benchmark_group("per_cell_locking");
    group.throughput(Throughput::Elements(
        (THREADS as u64) * u64::from(OPS_PER_THREAD) * 2,
    ));

    group.bench_function(BenchmarkId::new("contention", "same_cell"), |b| {
        b.iter(|| {
            let inv = LockedInventory::new(THREADS, 1_000);
            same_cell(&inv);
        });
    });

    group.bench_function(BenchmarkId::new("contention", "disjoint_cells"), |b| {
        b.iter(|| {
            let inv = LockedInventory::new(THREADS, 1_000);
            disjoint_cells(&inv);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_per_cell_locking);
criterion_main!(benches);
