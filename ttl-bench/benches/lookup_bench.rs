//! Criterion benchmark harness: array scan vs keyed map lookup on synthetic
//! record sets of increasing size, with the queried type placed in the last
//! entry.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use ttl_bench::synthetic::{array_record_set, map_record_set, SyntheticParams};
use ttl_core::TtlLookup;

const RECORD_TYPE: &str = "A";

/// (entries, types per entry) combinations to benchmark.
fn shapes() -> Vec<(usize, usize)> {
    vec![(1, 2), (4, 2), (16, 3), (64, 4), (256, 4)]
}

fn bench_lookup_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("ttl_lookup");
    group.measurement_time(Duration::from_secs(5));

    for (entries, per_entry) in shapes() {
        let params = SyntheticParams::worst_case(entries, per_entry);
        let array = array_record_set(&params, RECORD_TYPE);
        let map = map_record_set(&array);
        let label = format!("{entries}x{per_entry}");

        group.bench_with_input(BenchmarkId::new("array", &label), &array, |b, data| {
            b.iter(|| data.ttl(black_box(RECORD_TYPE)));
        });
        group.bench_with_input(BenchmarkId::new("object", &label), &map, |b, data| {
            b.iter(|| data.ttl(black_box(RECORD_TYPE)));
        });
    }
    group.finish();
}

fn bench_lookup_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("ttl_lookup_miss");

    let params = SyntheticParams::worst_case(64, 4);
    let array = array_record_set(&params, RECORD_TYPE);
    let map = map_record_set(&array);

    group.bench_function("array", |b| b.iter(|| array.ttl(black_box("CNAME"))));
    group.bench_function("object", |b| b.iter(|| map.ttl(black_box("CNAME"))));
    group.finish();
}

criterion_group!(benches, bench_lookup_strategies, bench_lookup_miss);
criterion_main!(benches);
