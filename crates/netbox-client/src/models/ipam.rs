//! IPAM models

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Prefix model matching NetBox PrefixSerializer
///
/// NetBox 4.2 replaced `site` with a generic scope and exposes the cached
/// site as `_site`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefix {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub family: Option<ChoiceField>,
    pub prefix: String,
    #[serde(alias = "_site")]
    pub site: Option<NestedRef>,
    pub vrf: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub vlan: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<NestedRef>,
    pub is_pool: Option<bool>,
    pub mark_utilized: Option<bool>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Prefix, "ipam/prefixes", "prefix");

/// IP address model matching NetBox IPAddressSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IPAddress {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub family: Option<ChoiceField>,
    pub address: String,
    pub vrf: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<ChoiceField>,
    pub assigned_object_type: Option<String>,
    pub assigned_object_id: Option<i64>,
    pub nat_inside: Option<NestedRef>,
    pub dns_name: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(IPAddress, "ipam/ip-addresses", "IP address");

/// Aggregate model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Aggregate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub prefix: String,
    pub rir: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub date_added: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Aggregate, "ipam/aggregates", "aggregate");

/// Autonomous system number model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asn {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub asn: i64,
    pub rir: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub site_count: Option<i64>,
    pub provider_count: Option<i64>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Asn, "ipam/asns", "ASN");

/// Regional Internet Registry model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rir {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub is_private: Option<bool>,
    pub description: Option<String>,
    pub aggregate_count: Option<i64>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Rir, "ipam/rirs", "RIR");

/// Prefix/VLAN role model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub weight: Option<i64>,
    pub description: Option<String>,
    pub prefix_count: Option<i64>,
    pub vlan_count: Option<i64>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Role, "ipam/roles", "role");

/// VLAN model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vlan {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub vid: i64,
    pub name: String,
    pub site: Option<NestedRef>,
    pub group: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Vlan, "ipam/vlans", "VLAN");

/// VLAN group model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanGroup {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub scope_type: Option<String>,
    pub scope_id: Option<i64>,
    pub description: Option<String>,
    pub vlan_count: Option<i64>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(VlanGroup, "ipam/vlan-groups", "VLAN group");

/// VRF model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vrf {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub rd: Option<String>,
    pub tenant: Option<NestedRef>,
    pub enforce_unique: Option<bool>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Vrf, "ipam/vrfs", "VRF");

/// IP range model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpRange {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub start_address: String,
    pub end_address: String,
    pub size: Option<i64>,
    pub vrf: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub role: Option<NestedRef>,
    pub mark_utilized: Option<bool>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(IpRange, "ipam/ip-ranges", "IP range");

/// ASN range model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnRange {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub rir: Option<NestedRef>,
    pub start: i64,
    pub end: i64,
    pub tenant: Option<NestedRef>,
    pub asn_count: Option<i64>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(AsnRange, "ipam/asn-ranges", "ASN range");

/// Route target model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTarget {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub tenant: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(RouteTarget, "ipam/route-targets", "route target");

/// Service model (a listening application on a device or VM)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub device: Option<NestedRef>,
    pub virtual_machine: Option<NestedRef>,
    pub name: String,
    pub protocol: Option<ChoiceField>,
    pub ports: Vec<i64>,
    pub ipaddresses: Vec<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Service, "ipam/services", "service");

/// Service template model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceTemplate {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub protocol: Option<ChoiceField>,
    pub ports: Vec<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(ServiceTemplate, "ipam/service-templates", "service template");
