//! TTL Lookup Latency Benchmark
//!
//! Compares two in-memory shapes of the same TTL record set:
//! - **Array shape**: ordered entries, each tagged with the record types it
//!   applies to; looked up by linear scan
//! - **Map shape**: record type → `{ "value": ttl }`; looked up by key
//!
//! Run the timed comparison: `cargo run --release`
//! Run benchmarks: `cargo bench`
//! Run tests: `cargo test`

pub mod config;
pub mod driver;
pub mod fixture;
pub mod report;
pub mod synthetic;
