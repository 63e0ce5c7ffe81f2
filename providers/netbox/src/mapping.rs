//! Field mapper: NetBox JSON fields to Terraform values.
//!
//! Every helper is pure and total. An absent field and an empty one map to
//! the same null, so a config that omits an attribute and an object that
//! leaves it blank agree.

use netbox_client::{ChoiceField, CustomFields, NestedRef, NestedTag};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;

/// Tag as exposed in state
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TagModel {
    pub name: String,
    pub slug: String,
}

/// Custom field as exposed in state
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomFieldModel {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: String,
}

/// String, null when absent or empty
pub fn string_value(value: Option<&str>) -> Value<String> {
    match value {
        Some(s) if !s.is_empty() => Value::Value(s.to_string()),
        _ => Value::Null,
    }
}

/// String, null only when absent
pub fn string_preserve_empty(value: Option<&str>) -> Value<String> {
    match value {
        Some(s) => Value::Value(s.to_string()),
        None => Value::Null,
    }
}

/// Integer, null when absent
pub fn int_value(value: Option<i64>) -> Value<i64> {
    value.map_or(Value::Null, Value::Value)
}

/// Decimal, null when absent
pub fn float_value(value: Option<f64>) -> Value<f64> {
    value.map_or(Value::Null, Value::Value)
}

/// Boolean, null when absent
pub fn bool_value(value: Option<bool>) -> Value<bool> {
    value.map_or(Value::Null, Value::Value)
}

/// Object ID rendered as the string Terraform uses for `id`
pub fn id_string(id: u64) -> Value<String> {
    Value::Value(id.to_string())
}

/// Value of a choice object (`{"value": "active", ...}` → `active`)
pub fn choice_value(choice: Option<&ChoiceField>) -> Value<String> {
    string_value(choice.and_then(ChoiceField::text).as_deref())
}

/// Integer value of a numeric choice object
pub fn choice_number(choice: Option<&ChoiceField>) -> Value<i64> {
    int_value(choice.and_then(ChoiceField::number))
}

/// Name of a nested reference
pub fn reference_name(reference: Option<&NestedRef>) -> Value<String> {
    string_value(reference.and_then(|r| r.name.as_deref()))
}

/// Slug of a nested reference
pub fn reference_slug(reference: Option<&NestedRef>) -> Value<String> {
    string_value(reference.and_then(|r| r.slug.as_deref()))
}

/// Display text of a nested reference
pub fn reference_display(reference: Option<&NestedRef>) -> Value<String> {
    string_value(reference.and_then(|r| r.display.as_deref()))
}

/// Numeric ID of a nested reference
pub fn reference_id(reference: Option<&NestedRef>) -> Value<i64> {
    int_value(reference.and_then(|r| i64::try_from(r.id).ok()))
}

/// ID of a nested reference rendered as a string
pub fn reference_id_string(reference: Option<&NestedRef>) -> Value<String> {
    reference.map_or(Value::Null, |r| id_string(r.id))
}

/// Names of nested references (display text when unnamed), null when empty
pub fn reference_names(references: &[NestedRef]) -> Value<Vec<String>> {
    let names: Vec<String> = references
        .iter()
        .filter_map(|r| r.name.as_deref().or(r.display.as_deref()))
        .map(str::to_string)
        .collect();
    list_value(names)
}

/// IDs of nested references, null when empty
pub fn reference_ids(references: &[NestedRef]) -> Value<Vec<i64>> {
    list_value(
        references
            .iter()
            .filter_map(|r| i64::try_from(r.id).ok())
            .collect(),
    )
}

/// List, null when empty
pub fn list_value<T>(items: Vec<T>) -> Value<Vec<T>> {
    if items.is_empty() {
        Value::Null
    } else {
        Value::Value(items)
    }
}

/// JSON document as compact text, null when absent or JSON `null`
pub fn json_text(value: Option<&serde_json::Value>) -> Value<String> {
    match value {
        None | Some(serde_json::Value::Null) => Value::Null,
        Some(serde_json::Value::String(s)) => string_value(Some(s.as_str())),
        Some(other) => Value::Value(other.to_string()),
    }
}

/// Tags as a set of `{name, slug}`, null when there are none
pub fn tags_value(tags: &[NestedTag]) -> Value<Vec<TagModel>> {
    if tags.is_empty() {
        return Value::Null;
    }
    let mut models: Vec<TagModel> = tags
        .iter()
        .map(|tag| TagModel {
            name: tag.name.clone(),
            slug: tag.slug.clone(),
        })
        .collect();
    models.sort();
    models.dedup();
    Value::Value(models)
}

/// Custom fields as a set of `{name, type, value}`, null when none has a value
pub fn custom_fields_value(fields: &CustomFields) -> Value<Vec<CustomFieldModel>> {
    let mut models: Vec<CustomFieldModel> = fields
        .iter()
        .filter_map(|(name, value)| infer_custom_field(name, value))
        .collect();
    if models.is_empty() {
        return Value::Null;
    }
    models.sort();
    Value::Value(models)
}

/// Infer the custom field type from its JSON value
///
/// Returns `None` for null values and empty lists, which NetBox sends for
/// unset fields.
pub fn infer_custom_field(name: &str, value: &serde_json::Value) -> Option<CustomFieldModel> {
    use serde_json::Value as Json;

    let (field_type, rendered) = match value {
        Json::Null => return None,
        Json::Array(items) if items.is_empty() => return None,
        Json::Bool(b) => ("boolean", b.to_string()),
        Json::Number(n) if n.is_i64() || n.is_u64() => ("integer", n.to_string()),
        Json::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => ("integer", format!("{}", f as i64)),
            _ => ("decimal", n.to_string()),
        },
        Json::String(s) => (string_field_type(s), s.clone()),
        Json::Array(items) if items.iter().all(Json::is_string) => (
            "multiselect",
            items
                .iter()
                .filter_map(Json::as_str)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Json::Array(_) | Json::Object(_) => ("json", value.to_string()),
    };

    Some(CustomFieldModel {
        name: name.to_string(),
        field_type: field_type.to_string(),
        value: rendered,
    })
}

fn string_field_type(s: &str) -> &'static str {
    if is_date(s) {
        "date"
    } else if s.starts_with("http://") || s.starts_with("https://") {
        "url"
    } else if s.len() > 100 || s.contains('\n') {
        "longtext"
    } else {
        "text"
    }
}

/// `YYYY-MM-DD`
fn is_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
