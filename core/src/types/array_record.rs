use serde::Deserialize;

/// One entry of the array-shaped record set: a TTL shared by every record
/// type listed in `types`. Missing fields decode to empty/zero.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArrayEntry {
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub value: i64,
}

impl ArrayEntry {
    pub fn new<S: Into<String>>(types: impl IntoIterator<Item = S>, value: i64) -> Self {
        Self {
            types: types.into_iter().map(Into::into).collect(),
            value,
        }
    }
}

/// Record set holding its TTLs as an ordered list of tagged entries.
///
/// Unknown JSON fields, at either level, are ignored; missing ones default.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArrayRecordSet {
    #[serde(rename = "objectClassName", default)]
    pub object_class_name: String,
    #[serde(rename = "ldhName", default)]
    pub ldh_name: String,
    #[serde(default)]
    pub ttl0_data: Vec<ArrayEntry>,
}

impl ArrayRecordSet {
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn len(&self) -> usize {
        self.ttl0_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ttl0_data.is_empty()
    }
}
