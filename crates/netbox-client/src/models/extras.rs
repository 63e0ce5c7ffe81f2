//! Extras models (tags, custom fields, automation)

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Tag model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub description: Option<String>,
    pub tagged_items: Option<i64>,
}
netbox_object!(Tag, "extras/tags", "tag");

/// Custom field definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub object_types: Vec<String>,
    #[serde(rename = "type")]
    pub field_type: Option<ChoiceField>,
    pub related_object_type: Option<String>,
    pub data_type: Option<String>,
    pub label: Option<String>,
    pub group_name: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub search_weight: Option<i64>,
    pub filter_logic: Option<ChoiceField>,
    pub ui_visible: Option<ChoiceField>,
    pub ui_editable: Option<ChoiceField>,
    pub is_cloneable: Option<bool>,
    pub default: Option<serde_json::Value>,
    pub weight: Option<i64>,
    pub validation_minimum: Option<i64>,
    pub validation_maximum: Option<i64>,
    pub validation_regex: Option<String>,
    pub choice_set: Option<NestedRef>,
    pub comments: Option<String>,
}
netbox_object!(CustomField, "extras/custom-fields", "custom field");

/// Webhook model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub payload_url: Option<String>,
    pub http_method: Option<String>,
    pub http_content_type: Option<String>,
    pub additional_headers: Option<String>,
    pub body_template: Option<String>,
    pub ssl_verification: Option<bool>,
    pub ca_file_path: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Webhook, "extras/webhooks", "webhook");

/// Config context model
///
/// Every assignment list is a set of brief objects; an empty list means the
/// context is not limited by that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigContext {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub weight: Option<i64>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub regions: Vec<NestedRef>,
    pub site_groups: Vec<NestedRef>,
    pub sites: Vec<NestedRef>,
    pub locations: Vec<NestedRef>,
    pub device_types: Vec<NestedRef>,
    pub roles: Vec<NestedRef>,
    pub platforms: Vec<NestedRef>,
    pub cluster_types: Vec<NestedRef>,
    pub cluster_groups: Vec<NestedRef>,
    pub clusters: Vec<NestedRef>,
    pub tenant_groups: Vec<NestedRef>,
    pub tenants: Vec<NestedRef>,
    pub tags: Vec<String>,
    pub data: serde_json::Value,
}
netbox_object!(ConfigContext, "extras/config-contexts", "config context");

/// Event rule model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRule {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub object_types: Vec<String>,
    pub event_types: Vec<String>,
    pub enabled: Option<bool>,
    pub conditions: Option<serde_json::Value>,
    pub action_type: Option<ChoiceField>,
    pub action_object_type: Option<String>,
    pub action_object_id: Option<i64>,
    pub action_object: Option<NestedRef>,
    pub description: Option<String>,
    pub created: Option<String>,
    pub last_updated: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(EventRule, "extras/event-rules", "event rule");

/// Notification group model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationGroup {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub groups: Vec<NestedRef>,
    pub users: Vec<NestedRef>,
}
netbox_object!(NotificationGroup, "extras/notification-groups", "notification group");
