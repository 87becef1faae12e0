//! The two TTL lookup strategies being compared.
//!
//! Both return `None` for a record type that has no TTL; that is a normal
//! negative result, not an error.

use crate::types::{ArrayRecordSet, MapRecordSet};

/// Linear scan: the value of the first entry whose tag list contains
/// `record_type`. Entries and tags are visited in document order.
pub fn lookup_array(data: &ArrayRecordSet, record_type: &str) -> Option<i64> {
    for entry in &data.ttl0_data {
        for t in &entry.types {
            if t == record_type {
                return Some(entry.value);
            }
        }
    }
    None
}

/// Keyed lookup: record type first, then the nested `value`.
pub fn lookup_map(data: &MapRecordSet, record_type: &str) -> Option<i64> {
    data.ttl0_data.get(record_type)?.value
}
