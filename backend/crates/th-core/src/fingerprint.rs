//! Deterministic digests over named field subsets.
//!
//! A fingerprint covers an ordered list of `key -> value` pairs. Missing
//! values are recorded as JSON `null` rather than dropped, so adding or
//! clearing a field always changes the digest. Object keys inside values are
//! sorted before hashing, which makes the digest independent of map
//! insertion order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

/// Fields covered by the standard fingerprint, in hashing order.
pub const STANDARD_CHECKSUM_FIELDS: [&str; 8] = [
    "first_name",
    "last_name",
    "username",
    "company",
    "location",
    "website",
    "preferred_locale",
    "extras",
];

/// Fields covered by the smart fingerprint, in hashing order.
pub const SMART_CHECKSUM_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "username",
    "company",
    "location",
    "is_active",
];

/// Hex-encoded SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered field subset awaiting hashing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChecksumFields {
    fields: Vec<(&'static str, Value)>,
}

impl ChecksumFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    /// Optional text field; `None` becomes the `null` sentinel.
    pub fn with_opt(self, key: &'static str, value: Option<&str>) -> Self {
        let value = value.map_or(Value::Null, |v| Value::String(v.to_string()));
        self.with(key, value)
    }

    /// Pick `keys` out of an arbitrary JSON document (an import payload, an
    /// API body). Keys the document lacks hash as `null`, exactly like an
    /// unset field on a stored identity.
    pub fn from_document(document: &Value, keys: &[&'static str]) -> Self {
        keys.iter().fold(Self::new(), |fields, key| {
            let value = document.get(*key).cloned().unwrap_or(Value::Null);
            fields.with(*key, value)
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(key, _)| *key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| value)
    }

    pub fn fingerprint(&self) -> Fingerprint {
        let pairs = self
            .fields
            .iter()
            .map(|(key, value)| {
                Value::Array(vec![Value::String((*key).to_string()), canonicalize(value)])
            })
            .collect();

        let canonical = Value::Array(pairs).to_string();
        let digest = Sha256::digest(canonical.as_bytes());

        Fingerprint(hex::encode(digest))
    }
}

fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            let mut sorted = Map::with_capacity(map.len());
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
