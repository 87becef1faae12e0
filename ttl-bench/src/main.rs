//! Standalone benchmark runner that prints the comparison report.
//!
//! Reads `/data/array_data.json` and `/data/object_data.json` unless the
//! `TTL_BENCH_*` variables (see `config`) say otherwise.
//!
//! Usage:
//!   cargo run --release
//!   TTL_BENCH_PRESET=extended cargo run --release   # 10M iterations, strict values

use log::Level;
use std::process;
use ttl_bench::config::BenchConfig;
use ttl_bench::driver::run_benchmark;
use ttl_bench::fixture::{load_array_fixture, load_map_fixture};
use ttl_bench::report::print_report;

fn main() {
    let config = match BenchConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e:#}. Exiting.");
            process::exit(1);
        }
    };

    ttl_core::initialize_logger(config.log_level, None).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logger: {e:#}. Exiting.");
        process::exit(1);
    });

    log::debug!("Configuration: {config:?}");

    let array = load_array_fixture(&config.array_path).unwrap_or_else(|e| fatal(&e));
    let object =
        load_map_fixture(&config.object_path, config.value_policy).unwrap_or_else(|e| fatal(&e));

    let comparison = run_benchmark(&config, &array, &object);
    print_report(&comparison);
}

/// Report a load failure on stderr and exit before any report output.
fn fatal(e: &anyhow::Error) -> ! {
    if log::log_enabled!(Level::Error) {
        log::error!("{e:#}. Exiting.");
    } else {
        // Logging switched off; the failure still has to reach stderr.
        eprintln!("{e:#}. Exiting.");
    }
    process::exit(1);
}
