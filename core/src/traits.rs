use std::fmt;

use crate::lookup::{lookup_array, lookup_map};
use crate::types::{ArrayRecordSet, MapRecordSet};

/// Which record-set representation a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Array,
    Object,
}

impl Strategy {
    /// Label used in reports and benchmark ids.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Array => "Array",
            Strategy::Object => "Object",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record set that can answer "what is the TTL for this record type".
pub trait TtlLookup {
    fn strategy(&self) -> Strategy;

    fn ttl(&self, record_type: &str) -> Option<i64>;
}

impl TtlLookup for ArrayRecordSet {
    fn strategy(&self) -> Strategy {
        Strategy::Array
    }

    #[inline]
    fn ttl(&self, record_type: &str) -> Option<i64> {
        lookup_array(self, record_type)
    }
}

impl TtlLookup for MapRecordSet {
    fn strategy(&self) -> Strategy {
        Strategy::Object
    }

    #[inline]
    fn ttl(&self, record_type: &str) -> Option<i64> {
        lookup_map(self, record_type)
    }
}
