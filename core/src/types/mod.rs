//! Record-set data types, decoded from the JSON fixtures.

mod array_record;
mod map_record;
mod value_policy;

// Re-export all types
pub use array_record::{ArrayEntry, ArrayRecordSet};
pub use map_record::{MapEntry, MapRecordSet};
pub use value_policy::ValuePolicy;
