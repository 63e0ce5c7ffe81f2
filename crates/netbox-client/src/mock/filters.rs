//! Query parameter matching for the mock client
//!
//! Mirrors the parts of NetBox's filtersets the provider relies on:
//! distinct keys are ANDed, repeated keys are ORed.

use serde_json::Value;
use std::collections::BTreeMap;

/// Parameters that only affect paging or rendering
const IGNORED: &[&str] = &["limit", "offset", "brief", "ordering"];

/// Whether `object` satisfies every filter
pub(crate) fn matches(object: &Value, filters: &[(&str, &str)]) -> bool {
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (key, value) in filters {
        if !IGNORED.contains(key) {
            grouped.entry(*key).or_default().push(*value);
        }
    }

    grouped
        .iter()
        .all(|(key, values)| values.iter().any(|value| matches_one(object, key, value)))
}

fn matches_one(object: &Value, key: &str, expected: &str) -> bool {
    if key == "q" {
        return search(object, expected);
    }
    if key == "tag" {
        return object
            .get("tags")
            .and_then(Value::as_array)
            .is_some_and(|tags| {
                tags.iter()
                    .any(|tag| tag.get("slug").and_then(Value::as_str) == Some(expected))
            });
    }
    if let Some(base) = key.strip_suffix("__ic") {
        return object
            .get(base)
            .and_then(Value::as_str)
            .is_some_and(|s| s.to_lowercase().contains(&expected.to_lowercase()));
    }
    if let Some(base) = key.strip_suffix("_id") {
        // `site_id` filters on the nested site unless the object has a plain
        // `<base>_id` field of its own (e.g. a tunnel's `tunnel_id`).
        match object.get(base) {
            Some(Value::Object(nested)) => return id_matches(nested.get("id"), expected),
            Some(Value::Null) => return false,
            _ => {}
        }
    }

    match object.get(key) {
        Some(field) => field_matches(field, expected),
        None => false,
    }
}

fn id_matches(id: Option<&Value>, expected: &str) -> bool {
    id.and_then(Value::as_u64)
        .is_some_and(|id| id.to_string() == expected)
}

fn field_matches(field: &Value, expected: &str) -> bool {
    match field {
        Value::String(s) => s == expected,
        Value::Number(n) => n.to_string() == expected,
        Value::Bool(b) => b.to_string() == expected,
        Value::Array(items) => items.iter().any(|item| field_matches(item, expected)),
        Value::Object(nested) => {
            if let Some(choice) = nested.get("value") {
                return field_matches(choice, expected);
            }
            ["slug", "name", "model", "cid"]
                .iter()
                .any(|k| nested.get(*k).and_then(Value::as_str) == Some(expected))
                || id_matches(nested.get("id"), expected)
        }
        Value::Null => false,
    }
}

/// Free-text search over the identifying string fields
fn search(object: &Value, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    ["name", "display", "slug", "serial", "description", "prefix", "address"]
        .iter()
        .filter_map(|k| object.get(*k).and_then(Value::as_str))
        .any(|s| s.to_lowercase().contains(&needle))
}
