use std::collections::HashMap;

use serde::Deserialize;
use serde::de::Error as _;

use super::ValuePolicy;

/// Nested object stored under a record type in the map-shaped record set.
///
/// `value` is `None` when the JSON object carried no `value` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapEntry {
    pub value: Option<i64>,
}

/// Record set holding its TTLs keyed directly by record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRecordSet {
    pub object_class_name: String,
    pub ldh_name: String,
    pub ttl0_data: HashMap<String, MapEntry>,
}

// Wire shapes. `value` stays a raw JSON number until the policy has been
// applied, so lookups never have to switch on the numeric representation.
// A `null` entry decodes like an entry without `value`.
#[derive(Deserialize)]
struct RawMapRecordSet {
    #[serde(rename = "objectClassName", default)]
    object_class_name: String,
    #[serde(rename = "ldhName", default)]
    ldh_name: String,
    #[serde(default)]
    ttl0_data: HashMap<String, Option<RawMapEntry>>,
}

#[derive(Deserialize)]
struct RawMapEntry {
    #[serde(default)]
    value: Option<serde_json::Number>,
}

impl MapRecordSet {
    /// Decodes a map-shaped record set, normalising every nested `value`
    /// according to `policy`.
    pub fn from_json(bytes: &[u8], policy: ValuePolicy) -> Result<Self, serde_json::Error> {
        let raw: RawMapRecordSet = serde_json::from_slice(bytes)?;

        let mut ttl0_data = HashMap::with_capacity(raw.ttl0_data.len());
        for (record_type, entry) in raw.ttl0_data {
            let value = match entry.and_then(|e| e.value) {
                Some(number) => Some(policy.normalize(&number).map_err(|msg| {
                    serde_json::Error::custom(format!("ttl0_data.{record_type}: {msg}"))
                })?),
                None => None,
            };
            ttl0_data.insert(record_type, MapEntry { value });
        }

        Ok(Self {
            object_class_name: raw.object_class_name,
            ldh_name: raw.ldh_name,
            ttl0_data,
        })
    }

    pub fn len(&self) -> usize {
        self.ttl0_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ttl0_data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &[u8] = br#"{
        "objectClassName": "domain",
        "ldhName": "example.com",
        "ttl0_data": {
            "A": { "value": 300, "source": "zone" },
            "MX": { "value": 3600.0 },
            "TXT": { "comment": "no ttl here" }
        }
    }"#;

    #[test]
    fn truncate_policy_accepts_float_values() {
        let set = MapRecordSet::from_json(MIXED, ValuePolicy::Truncate).unwrap();
        assert_eq!(set.object_class_name, "domain");
        assert_eq!(set.len(), 3);
        assert_eq!(set.ttl0_data["A"].value, Some(300));
        assert_eq!(set.ttl0_data["MX"].value, Some(3600));
        assert_eq!(set.ttl0_data["TXT"].value, None);
    }

    #[test]
    fn strict_policy_rejects_float_values() {
        let err = MapRecordSet::from_json(MIXED, ValuePolicy::Strict).unwrap_err();
        assert!(err.to_string().contains("ttl0_data.MX"), "{err}");
    }

    #[test]
    fn non_numeric_value_is_a_decode_error() {
        let raw = br#"{
            "objectClassName": "domain",
            "ldhName": "example.com",
            "ttl0_data": { "A": { "value": "300" } }
        }"#;
        assert!(MapRecordSet::from_json(raw, ValuePolicy::Truncate).is_err());
    }

    #[test]
    fn null_entry_decodes_as_missing() {
        let raw = br#"{
            "objectClassName": "domain",
            "ldhName": "example.com",
            "ttl0_data": { "MX": null, "A": { "value": 300 } }
        }"#;
        let set = MapRecordSet::from_json(raw, ValuePolicy::Strict).unwrap();
        assert_eq!(set.ttl0_data["MX"], MapEntry { value: None });
        assert_eq!(set.ttl0_data["A"].value, Some(300));
    }

    #[test]
    fn missing_top_level_fields_default() {
        let raw = br#"{ "ttl0_data": { "A": { "value": 300 } } }"#;
        let set = MapRecordSet::from_json(raw, ValuePolicy::Strict).unwrap();
        assert_eq!(set.object_class_name, "");
        assert_eq!(set.ldh_name, "");
        assert_eq!(set.ttl0_data["A"].value, Some(300));

        let raw = br#"{ "ldhName": "example.com" }"#;
        let empty = MapRecordSet::from_json(raw, ValuePolicy::Strict).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn null_value_decodes_as_missing() {
        let raw = br#"{
            "objectClassName": "domain",
            "ldhName": "example.com",
            "ttl0_data": { "A": { "value": null } }
        }"#;
        let set = MapRecordSet::from_json(raw, ValuePolicy::Strict).unwrap();
        assert_eq!(set.ttl0_data["A"].value, None);
    }
}
