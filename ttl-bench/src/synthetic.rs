//! Synthetic record sets for the Criterion benchmark and tests.
//!
//! Uses a fixed seed for deterministic, reproducible data.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use ttl_core::{ArrayEntry, ArrayRecordSet, MapEntry, MapRecordSet};

const SEED: u64 = 0x7717_0DA7_A5E7_0001;

/// Shape of a generated record set.
#[derive(Debug, Clone, Copy)]
pub struct SyntheticParams {
    /// Number of entries in the array representation.
    pub entries: usize,
    /// Tags per array entry.
    pub types_per_entry: usize,
    /// Index of the entry that carries the queried type. Clamped to the last
    /// entry.
    pub target_entry: usize,
    pub target_value: i64,
}

impl SyntheticParams {
    /// Queried type sits in the last entry: worst case for the array scan.
    pub fn worst_case(entries: usize, types_per_entry: usize) -> Self {
        Self {
            entries,
            types_per_entry,
            target_entry: entries.saturating_sub(1),
            target_value: 300,
        }
    }
}

/// Tag names: `T0`, `T1`, ... Every generated tag is distinct.
fn tag(n: usize) -> String {
    format!("T{n}")
}

/// Build an array-shaped set where `record_type` appears once, in the entry
/// at `params.target_entry`, at a random position among that entry's tags.
pub fn array_record_set(params: &SyntheticParams, record_type: &str) -> ArrayRecordSet {
    let mut rng = StdRng::seed_from_u64(SEED);
    let target = params.target_entry.min(params.entries.saturating_sub(1));
    let per_entry = params.types_per_entry.max(1);

    let mut next_tag = 0usize;
    let ttl0_data = (0..params.entries)
        .map(|i| {
            let mut types: Vec<String> = (0..per_entry)
                .map(|_| {
                    next_tag += 1;
                    tag(next_tag)
                })
                .collect();

            if i == target {
                let slot = rng.gen_range(0..types.len());
                types[slot] = record_type.to_string();
                ArrayEntry::new(types, params.target_value)
            } else {
                types.shuffle(&mut rng);
                let value = rng.gen_range(60..86_400);
                ArrayEntry::new(types, value)
            }
        })
        .collect();

    ArrayRecordSet {
        object_class_name: "domain".to_string(),
        ldh_name: "synthetic.example".to_string(),
        ttl0_data,
    }
}

/// Flatten an array-shaped set into the equivalent map-shaped set. Where a
/// type appears in several entries the first entry wins, matching the array
/// scan.
pub fn map_record_set(array: &ArrayRecordSet) -> MapRecordSet {
    let mut ttl0_data = HashMap::new();
    for entry in &array.ttl0_data {
        for t in &entry.types {
            ttl0_data.entry(t.clone()).or_insert(MapEntry {
                value: Some(entry.value),
            });
        }
    }

    MapRecordSet {
        object_class_name: array.object_class_name.clone(),
        ldh_name: array.ldh_name.clone(),
        ttl0_data,
    }
}
