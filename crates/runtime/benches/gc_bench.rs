//! Allocation throughput and collection pause time, grounded in the
//! `fgc` crate's `benches/gc_bench.rs` shape: one `criterion_group!`
//! covering allocation, one covering a full mark-and-sweep pass.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lazc_core::{ArPtr, Value};
use lazc_runtime::{AtomTable, Runtime, RuntimeConfig};

fn leaf(_parent: Option<ArPtr>) -> Value {
    Value::Integer(0)
}

fn atoms() -> AtomTable {
    AtomTable::new(vec!["nil".into(), "true".into(), "false".into()])
}

fn bench_ar_allocation(c: &mut Criterion) {
    c.bench_function("ar_new allocates a leaf record", |b| {
        // A threshold high enough that the benchmark loop measures raw
        // allocation cost, not collection cost.
        let rt = Runtime::with_config(atoms(), RuntimeConfig { gc_threshold: usize::MAX });
        b.iter(|| {
            let ar = rt.ar_new(None, &[leaf]);
            black_box(ar);
        });
    });
}

fn bench_collect_mostly_garbage(c: &mut Criterion) {
    c.bench_function("collect sweeps 10k unrooted records", |b| {
        b.iter_batched(
            || {
                let rt = Runtime::with_config(atoms(), RuntimeConfig { gc_threshold: usize::MAX });
                for _ in 0..10_000 {
                    rt.ar_new(None, &[leaf]);
                }
                rt
            },
            |rt| {
                rt.collect();
                black_box(rt.live_count());
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_collect_mostly_live(c: &mut Criterion) {
    c.bench_function("collect marks 10k rooted records", |b| {
        b.iter_batched(
            || {
                let rt = Runtime::with_config(atoms(), RuntimeConfig { gc_threshold: usize::MAX });
                let ars: Vec<_> = (0..10_000).map(|_| rt.ar_new(None, &[leaf])).collect();
                for ar in &ars {
                    unsafe { ar.as_ref() }.push();
                }
                rt
            },
            |rt| {
                rt.collect();
                black_box(rt.live_count());
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_ar_allocation,
    bench_collect_mostly_garbage,
    bench_collect_mostly_live
);
criterion_main!(benches);
