//! Run configuration.
//!
//! With nothing set in the environment the benchmark reads the two fixtures
//! from `/data`, looks up `A` one million times, and logs at `info`. Every
//! field can be overridden through a `TTL_BENCH_*` variable, either exported
//! or placed in a `.env` file in the working directory.

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use std::path::PathBuf;
use ttl_core::ValuePolicy;

pub const DEFAULT_ARRAY_PATH: &str = "/data/array_data.json";
pub const DEFAULT_OBJECT_PATH: &str = "/data/object_data.json";
pub const DEFAULT_RECORD_TYPE: &str = "A";

pub const STANDARD_ITERATIONS: u64 = 1_000_000;
pub const EXTENDED_ITERATIONS: u64 = 10_000_000;

pub const ENV_PRESET: &str = "TTL_BENCH_PRESET";
pub const ENV_ARRAY_PATH: &str = "TTL_BENCH_ARRAY_PATH";
pub const ENV_OBJECT_PATH: &str = "TTL_BENCH_OBJECT_PATH";
pub const ENV_RECORD_TYPE: &str = "TTL_BENCH_RECORD_TYPE";
pub const ENV_ITERATIONS: &str = "TTL_BENCH_ITERATIONS";
pub const ENV_VALUE_POLICY: &str = "TTL_BENCH_VALUE_POLICY";
pub const ENV_LOG_LEVEL: &str = "TTL_BENCH_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub array_path: PathBuf,
    pub object_path: PathBuf,
    pub record_type: String,
    pub iterations: u64,
    pub value_policy: ValuePolicy,
    pub log_level: LevelFilter,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl BenchConfig {
    /// One million lookups; float TTLs in the map fixture are truncated.
    pub fn standard() -> Self {
        Self {
            array_path: PathBuf::from(DEFAULT_ARRAY_PATH),
            object_path: PathBuf::from(DEFAULT_OBJECT_PATH),
            record_type: DEFAULT_RECORD_TYPE.to_string(),
            iterations: STANDARD_ITERATIONS,
            value_policy: ValuePolicy::Truncate,
            log_level: LevelFilter::Info,
        }
    }

    /// Ten million lookups; the map fixture must hold integer TTLs.
    pub fn extended() -> Self {
        Self {
            iterations: EXTENDED_ITERATIONS,
            value_policy: ValuePolicy::Strict,
            ..Self::standard()
        }
    }

    /// Loads `.env` (if any) and applies the `TTL_BENCH_*` overrides from the
    /// process environment.
    pub fn from_env() -> Result<Self> {
        check_dotenv(dotenvy::dotenv())?;
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let mut config = match var(ENV_PRESET) {
            Some(preset) => Self::preset(&preset)?,
            None => Self::standard(),
        };

        if let Some(path) = var(ENV_ARRAY_PATH) {
            config.array_path = PathBuf::from(path);
        }
        if let Some(path) = var(ENV_OBJECT_PATH) {
            config.object_path = PathBuf::from(path);
        }
        if let Some(record_type) = var(ENV_RECORD_TYPE) {
            config.record_type = record_type.trim().to_string();
        }
        if let Some(raw) = var(ENV_ITERATIONS) {
            config.iterations =
                parse_iterations(&raw).with_context(|| format!("Invalid {ENV_ITERATIONS}"))?;
        }
        if let Some(raw) = var(ENV_VALUE_POLICY) {
            config.value_policy = raw
                .parse::<ValuePolicy>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("Invalid {ENV_VALUE_POLICY}"))?;
        }
        if let Some(raw) = var(ENV_LOG_LEVEL) {
            config.log_level = raw
                .trim()
                .parse::<LevelFilter>()
                .with_context(|| format!("Invalid {ENV_LOG_LEVEL} '{raw}'"))?;
        }

        Ok(config)
    }

    fn preset(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "extended" => Ok(Self::extended()),
            other => bail!("Unknown {ENV_PRESET} '{other}' (expected 'standard' or 'extended')"),
        }
    }
}

/// A missing `.env` is the normal case; anything else (unreadable file,
/// malformed line) is a configuration error.
pub fn check_dotenv(result: dotenvy::Result<PathBuf>) -> Result<()> {
    match result {
        Ok(path) => {
            log::debug!("Loaded environment overrides from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e).context("Failed to load .env"),
    }
}

/// Parses a positive iteration count; `_` separators are allowed.
pub fn parse_iterations(raw: &str) -> Result<u64> {
    let digits: String = raw.trim().chars().filter(|c| *c != '_').collect();
    let n: u64 = digits
        .parse()
        .with_context(|| format!("'{raw}' is not a whole number"))?;
    if n == 0 {
        bail!("iteration count must be greater than zero");
    }
    Ok(n)
}
