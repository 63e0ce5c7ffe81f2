//! Device components and the templates that create them
//!
//! Components hang off a device and are looked up by device and name.
//! Templates hang off a device type (or module type) instead.

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Console port model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolePort {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub module: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub speed: Option<ChoiceField>,
    pub description: Option<String>,
    pub mark_connected: Option<bool>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(ConsolePort, "dcim/console-ports", "console port");

/// Console server port model; same shape as [`ConsolePort`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleServerPort {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub module: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub speed: Option<ChoiceField>,
    pub description: Option<String>,
    pub mark_connected: Option<bool>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(ConsoleServerPort, "dcim/console-server-ports", "console server port");

/// Power port model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPort {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub module: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub maximum_draw: Option<i64>,
    pub allocated_draw: Option<i64>,
    pub description: Option<String>,
    pub mark_connected: Option<bool>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(PowerPort, "dcim/power-ports", "power port");

/// Power outlet model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerOutlet {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub module: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub outlet_type: Option<ChoiceField>,
    pub power_port: Option<NestedRef>,
    pub feed_leg: Option<ChoiceField>,
    pub description: Option<String>,
    pub mark_connected: Option<bool>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(PowerOutlet, "dcim/power-outlets", "power outlet");

/// Front port model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontPort {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub module: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub color: Option<String>,
    pub rear_port: Option<NestedRef>,
    pub rear_port_position: Option<i64>,
    pub description: Option<String>,
    pub mark_connected: Option<bool>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(FrontPort, "dcim/front-ports", "front port");

/// Device bay model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceBay {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub installed_device: Option<NestedRef>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(DeviceBay, "dcim/device-bays", "device bay");

/// Inventory item model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub parent: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    pub role: Option<NestedRef>,
    pub manufacturer: Option<NestedRef>,
    pub part_id: Option<String>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub discovered: Option<bool>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(InventoryItem, "dcim/inventory-items", "inventory item");

/// Installed module model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub module_bay: Option<NestedRef>,
    pub module_type: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Module, "dcim/modules", "module");

/// Console port template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolePortTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device_type: Option<NestedRef>,
    pub module_type: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub description: Option<String>,
}
netbox_object!(ConsolePortTemplate, "dcim/console-port-templates", "console port template");

/// Power port template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPortTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device_type: Option<NestedRef>,
    pub module_type: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub maximum_draw: Option<i64>,
    pub allocated_draw: Option<i64>,
    pub description: Option<String>,
}
netbox_object!(PowerPortTemplate, "dcim/power-port-templates", "power port template");

/// Power outlet template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerOutletTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device_type: Option<NestedRef>,
    pub module_type: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub outlet_type: Option<ChoiceField>,
    pub power_port: Option<NestedRef>,
    pub feed_leg: Option<ChoiceField>,
    pub description: Option<String>,
}
netbox_object!(PowerOutletTemplate, "dcim/power-outlet-templates", "power outlet template");

/// Interface template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device_type: Option<NestedRef>,
    pub module_type: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub interface_type: Option<ChoiceField>,
    pub enabled: Option<bool>,
    pub mgmt_only: Option<bool>,
    pub bridge: Option<NestedRef>,
    pub poe_mode: Option<ChoiceField>,
    pub poe_type: Option<ChoiceField>,
    pub rf_role: Option<ChoiceField>,
    pub description: Option<String>,
}
netbox_object!(InterfaceTemplate, "dcim/interface-templates", "interface template");

/// Front port template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontPortTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device_type: Option<NestedRef>,
    pub module_type: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub color: Option<String>,
    pub rear_port: Option<NestedRef>,
    pub rear_port_position: Option<i64>,
    pub description: Option<String>,
}
netbox_object!(FrontPortTemplate, "dcim/front-port-templates", "front port template");

/// Rear port template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RearPortTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device_type: Option<NestedRef>,
    pub module_type: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub port_type: Option<ChoiceField>,
    pub color: Option<String>,
    pub positions: Option<i64>,
    pub description: Option<String>,
}
netbox_object!(RearPortTemplate, "dcim/rear-port-templates", "rear port template");

/// Inventory item template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItemTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device_type: Option<NestedRef>,
    pub parent: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    pub role: Option<NestedRef>,
    pub manufacturer: Option<NestedRef>,
    pub part_id: Option<String>,
    pub description: Option<String>,
    pub component_type: Option<String>,
    pub component_id: Option<i64>,
}
netbox_object!(InventoryItemTemplate, "dcim/inventory-item-templates", "inventory item template");
