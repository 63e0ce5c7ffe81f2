//! DCIM models (sites, racks, devices, interfaces, ...)

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Site model matching NetBox SiteSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub status: Option<ChoiceField>,
    pub region: Option<NestedRef>,
    pub group: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub facility: Option<String>,
    pub time_zone: Option<String>,
    pub description: Option<String>,
    pub physical_address: Option<String>,
    pub shipping_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Site, "dcim/sites", "site");

/// Site group model (hierarchical)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteGroup {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub parent: Option<NestedRef>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(SiteGroup, "dcim/site-groups", "site group");

/// Region model (hierarchical)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub parent: Option<NestedRef>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Region, "dcim/regions", "region");

/// Location model (hierarchical, within a site)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub site: Option<NestedRef>,
    pub parent: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub tenant: Option<NestedRef>,
    pub facility: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Location, "dcim/locations", "location");

/// Rack model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rack {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub site: Option<NestedRef>,
    pub location: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<NestedRef>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub form_factor: Option<ChoiceField>,
    pub width: Option<ChoiceField>,
    pub u_height: Option<i64>,
    pub starting_unit: Option<i64>,
    pub desc_units: Option<bool>,
    pub weight: Option<f64>,
    pub max_weight: Option<i64>,
    pub weight_unit: Option<ChoiceField>,
    pub mounting_depth: Option<i64>,
    pub airflow: Option<ChoiceField>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Rack, "dcim/racks", "rack");

/// Rack role model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackRole {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(RackRole, "dcim/rack-roles", "rack role");

/// Manufacturer model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manufacturer {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub devicetype_count: Option<i64>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Manufacturer, "dcim/manufacturers", "manufacturer");

/// Platform model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub manufacturer: Option<NestedRef>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Platform, "dcim/platforms", "platform");

/// Device role model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceRole {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
    pub vm_role: Option<bool>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(DeviceRole, "dcim/device-roles", "device role");

/// Device type model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceType {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub manufacturer: Option<NestedRef>,
    pub default_platform: Option<NestedRef>,
    pub model: String,
    pub slug: String,
    pub part_number: Option<String>,
    pub u_height: Option<f64>,
    pub exclude_from_utilization: Option<bool>,
    pub is_full_depth: Option<bool>,
    pub subdevice_role: Option<ChoiceField>,
    pub airflow: Option<ChoiceField>,
    pub weight: Option<f64>,
    pub weight_unit: Option<ChoiceField>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub device_count: Option<i64>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(DeviceType, "dcim/device-types", "device type");

/// Device model
///
/// NetBox 3.x calls the role `device_role`; 4.x calls it `role`. Some
/// releases send both, so both are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Device {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: Option<String>,
    pub device_type: Option<NestedRef>,
    pub role: Option<NestedRef>,
    pub device_role: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub platform: Option<NestedRef>,
    pub serial: Option<String>,
    pub asset_tag: Option<String>,
    pub site: Option<NestedRef>,
    pub location: Option<NestedRef>,
    pub rack: Option<NestedRef>,
    pub position: Option<f64>,
    pub face: Option<ChoiceField>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<ChoiceField>,
    pub airflow: Option<ChoiceField>,
    pub primary_ip4: Option<NestedRef>,
    pub primary_ip6: Option<NestedRef>,
    pub vc_position: Option<i64>,
    pub vc_priority: Option<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Device, "dcim/devices", "device");

impl Device {
    /// Device role regardless of NetBox release
    pub fn role(&self) -> Option<&NestedRef> {
        self.role.as_ref().or(self.device_role.as_ref())
    }
}

/// Interface model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interface {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub name: String,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub interface_type: Option<ChoiceField>,
    pub enabled: Option<bool>,
    pub parent: Option<NestedRef>,
    pub bridge: Option<NestedRef>,
    pub lag: Option<NestedRef>,
    pub mtu: Option<i64>,
    pub mac_address: Option<String>,
    pub speed: Option<i64>,
    pub duplex: Option<ChoiceField>,
    pub wwn: Option<String>,
    pub mgmt_only: Option<bool>,
    pub description: Option<String>,
    pub mode: Option<ChoiceField>,
    pub mark_connected: Option<bool>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Interface, "dcim/interfaces", "interface");

/// Module type model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleType {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub manufacturer: Option<NestedRef>,
    pub model: String,
    pub part_number: Option<String>,
    pub airflow: Option<ChoiceField>,
    pub weight: Option<f64>,
    pub weight_unit: Option<ChoiceField>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(ModuleType, "dcim/module-types", "module type");

/// Rack type model (NetBox 4.1+)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackType {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub manufacturer: Option<NestedRef>,
    pub model: String,
    pub slug: String,
    pub form_factor: Option<ChoiceField>,
    pub width: Option<ChoiceField>,
    pub u_height: Option<i64>,
    pub starting_unit: Option<i64>,
    pub desc_units: Option<bool>,
    pub outer_width: Option<i64>,
    pub outer_depth: Option<i64>,
    pub outer_unit: Option<ChoiceField>,
    pub weight: Option<f64>,
    pub max_weight: Option<i64>,
    pub weight_unit: Option<ChoiceField>,
    pub mounting_depth: Option<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(RackType, "dcim/rack-types", "rack type");

/// Rack reservation model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackReservation {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub rack: Option<NestedRef>,
    pub units: Vec<i64>,
    pub user: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(RackReservation, "dcim/rack-reservations", "rack reservation");

/// Virtual chassis model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualChassis {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub domain: Option<String>,
    pub master: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub member_count: Option<i64>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(VirtualChassis, "dcim/virtual-chassis", "virtual chassis");

/// Virtual device context model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualDeviceContext {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub device: Option<NestedRef>,
    pub identifier: Option<i64>,
    pub tenant: Option<NestedRef>,
    pub primary_ip4: Option<NestedRef>,
    pub primary_ip6: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(VirtualDeviceContext, "dcim/virtual-device-contexts", "virtual device context");

/// One end point of a cable
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableTermination {
    pub object_type: String,
    pub object_id: u64,
}

/// Cable model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cable {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    #[serde(rename = "type")]
    pub cable_type: Option<String>,
    pub a_terminations: Vec<CableTermination>,
    pub b_terminations: Vec<CableTermination>,
    pub status: Option<ChoiceField>,
    pub tenant: Option<NestedRef>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub length: Option<f64>,
    pub length_unit: Option<ChoiceField>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Cable, "dcim/cables", "cable");

/// Power panel model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPanel {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub site: Option<NestedRef>,
    pub location: Option<NestedRef>,
    pub name: String,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(PowerPanel, "dcim/power-panels", "power panel");

/// Power feed model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerFeed {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub power_panel: Option<NestedRef>,
    pub rack: Option<NestedRef>,
    pub name: String,
    pub status: Option<ChoiceField>,
    #[serde(rename = "type")]
    pub feed_type: Option<ChoiceField>,
    pub supply: Option<ChoiceField>,
    pub phase: Option<ChoiceField>,
    pub voltage: Option<i64>,
    pub amperage: Option<i64>,
    pub max_utilization: Option<i64>,
    pub mark_connected: Option<bool>,
    pub tenant: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(PowerFeed, "dcim/power-feeds", "power feed");
