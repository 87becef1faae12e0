//! Fixture loading. Any read or decode failure is returned with the fixture
//! path in its context; the caller treats both as fatal.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use ttl_core::{ArrayRecordSet, MapRecordSet, ValuePolicy};

pub fn load_array_fixture(path: &Path) -> Result<ArrayRecordSet> {
    log::info!("Loading array fixture from {}...", path.display());
    let raw = read_fixture(path)?;
    let data = ArrayRecordSet::from_json(&raw)
        .with_context(|| format!("Error parsing {}", path.display()))?;

    log::info!(
        "Array fixture loaded: {} ({}), {} entries.",
        data.ldh_name,
        data.object_class_name,
        data.len()
    );
    Ok(data)
}

pub fn load_map_fixture(path: &Path, policy: ValuePolicy) -> Result<MapRecordSet> {
    log::info!(
        "Loading object fixture from {} (value policy: {policy})...",
        path.display()
    );
    let raw = read_fixture(path)?;
    let data = MapRecordSet::from_json(&raw, policy)
        .with_context(|| format!("Error parsing {}", path.display()))?;

    log::info!(
        "Object fixture loaded: {} ({}), {} record types.",
        data.ldh_name,
        data.object_class_name,
        data.len()
    );
    Ok(data)
}

fn read_fixture(path: &Path) -> Result<Vec<u8>> {
    let raw = fs::read(path).with_context(|| format!("Error reading {}", path.display()))?;
    log::debug!("Read {} bytes from {}", raw.len(), path.display());
    Ok(raw)
}
