//! Nested and shared types returned inside NetBox objects

use serde::{Deserialize, Serialize};

/// Custom field values keyed by field name
pub type CustomFields = serde_json::Map<String, serde_json::Value>;

/// Choice field (`{"value": ..., "label": ...}`)
///
/// Most choices carry string values; a few (rack width) are numeric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceField {
    pub value: serde_json::Value,
    pub label: Option<String>,
}

impl ChoiceField {
    /// Build a string choice
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: serde_json::Value::String(value.to_string()),
            label: Some(label.to_string()),
        }
    }

    /// Choice value rendered as text
    pub fn text(&self) -> Option<String> {
        match &self.value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Choice value as an integer
    pub fn number(&self) -> Option<i64> {
        match &self.value {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

/// Brief representation of a related object
///
/// NetBox nests a "brief" serializer for every foreign key. Only `id` is
/// guaranteed; the identifying field depends on the object type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedRef {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub model: Option<String>,
    pub address: Option<String>,
    pub prefix: Option<String>,
    pub cid: Option<String>,
    pub vid: Option<i64>,
    pub username: Option<String>,
}

/// Nested tag
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NestedTag {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
}

/// Smallest decodable shape of any object: its ID
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefObject {
    pub id: u64,
    pub display: Option<String>,
}
