//! The single conversion rule for child record keys.
//!
//! Child records inside topics and missions are addressed by string keys. Mission
//! cities may carry a numeric `order` (older documents and some clients send one), so
//! every key crossing the serde boundary is normalized here: strings pass through,
//! numbers become their decimal string form (`3` → `"3"`, `1.5` → `"1.5"`).

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<RawKey> for String {
    fn from(raw: RawKey) -> Self {
        match raw {
            RawKey::Text(text) => text,
            RawKey::Integer(n) => n.to_string(),
            RawKey::Float(f) => f.to_string(),
        }
    }
}

/// Deserializes a key given as a string or a number.
pub fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawKey::deserialize(deserializer).map(String::from)
}

/// Deserializes an optional key given as a string, a number or null.
pub fn deserialize_optional_key<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawKey>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// Deserializes a list of keys, each given as a string or a number.
pub fn deserialize_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<RawKey>::deserialize(deserializer).map(|raw| raw.into_iter().map(String::from).collect())
}
