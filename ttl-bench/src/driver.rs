//! Timing driver: one timed pass per strategy, no warm-up.

use crate::config::BenchConfig;
use std::hint::black_box;
use std::time::{Duration, Instant};
use ttl_core::{ArrayRecordSet, MapRecordSet, Strategy, TtlLookup};

/// Outcome of timing one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    pub strategy: Strategy,
    pub iterations: u64,
    pub elapsed: Duration,
    /// Result of the final lookup in the loop.
    pub last: Option<i64>,
}

impl BenchResult {
    /// Total wall time in milliseconds, at microsecond resolution.
    pub fn total_ms(&self) -> f64 {
        self.elapsed.as_micros() as f64 / 1000.0
    }

    /// Average time per lookup in microseconds, rescaled from `total_ms`.
    pub fn avg_us_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.total_ms() / self.iterations as f64 * 1000.0
    }

    /// The retrieved TTL, with a miss reported as zero.
    pub fn retrieved(&self) -> i64 {
        self.last.unwrap_or(0)
    }
}

/// Both strategies timed against the same record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub record_type: String,
    pub iterations: u64,
    pub array: BenchResult,
    pub object: BenchResult,
}

impl Comparison {
    /// How many times longer the array pass took than the object pass.
    ///
    /// NaN when both passes measured zero; infinite when only the object
    /// pass did.
    pub fn speedup(&self) -> f64 {
        let array_ms = self.array.total_ms();
        let object_ms = self.object.total_ms();
        if object_ms == 0.0 {
            return if array_ms == 0.0 {
                f64::NAN
            } else {
                f64::INFINITY
            };
        }
        array_ms / object_ms
    }
}

/// Calls `lookup` `iterations` times and measures the whole loop.
pub fn run_timed<F>(strategy: Strategy, iterations: u64, mut lookup: F) -> BenchResult
where
    F: FnMut() -> Option<i64>,
{
    let mut last = None;
    let start = Instant::now();
    for _ in 0..iterations {
        last = black_box(lookup());
    }
    let elapsed = start.elapsed();

    BenchResult {
        strategy,
        iterations,
        elapsed,
        last,
    }
}

/// Times `data.ttl(record_type)` for `iterations` calls.
pub fn bench_lookup<T: TtlLookup>(data: &T, record_type: &str, iterations: u64) -> BenchResult {
    run_timed(data.strategy(), iterations, || {
        black_box(data).ttl(black_box(record_type))
    })
}

/// Runs the array pass and then the object pass.
pub fn run_benchmark(
    config: &BenchConfig,
    array: &ArrayRecordSet,
    object: &MapRecordSet,
) -> Comparison {
    let record_type = config.record_type.as_str();

    log::info!(
        "Benchmarking array lookup: {} x '{}'...",
        config.iterations,
        record_type
    );
    let array_result = bench_lookup(array, record_type, config.iterations);
    log::info!("Array pass done in {:.2}ms", array_result.total_ms());

    log::info!(
        "Benchmarking object lookup: {} x '{}'...",
        config.iterations,
        record_type
    );
    let object_result = bench_lookup(object, record_type, config.iterations);
    log::info!("Object pass done in {:.2}ms", object_result.total_ms());

    if array_result.last.is_none() || object_result.last.is_none() {
        log::warn!("Record type '{record_type}' was not found in every fixture");
    }

    Comparison {
        record_type: record_type.to_string(),
        iterations: config.iterations,
        array: array_result,
        object: object_result,
    }
}
