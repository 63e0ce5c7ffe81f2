//! Virtualization models (clusters and virtual machines)

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Cluster model
///
/// NetBox 4.2 moved the site onto a generic scope; `_site` keeps the cached site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cluster {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub cluster_type: Option<NestedRef>,
    pub group: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub tenant: Option<NestedRef>,
    #[serde(alias = "_site")]
    pub site: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Cluster, "virtualization/clusters", "cluster");

/// Cluster type model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterType {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(ClusterType, "virtualization/cluster-types", "cluster type");

/// Virtual machine model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachine {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub status: Option<ChoiceField>,
    pub site: Option<NestedRef>,
    pub cluster: Option<NestedRef>,
    pub role: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub platform: Option<NestedRef>,
    pub primary_ip4: Option<NestedRef>,
    pub primary_ip6: Option<NestedRef>,
    pub vcpus: Option<f64>,
    pub memory: Option<i64>,
    pub disk: Option<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(VirtualMachine, "virtualization/virtual-machines", "virtual machine");

/// Virtual machine interface model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VmInterface {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub virtual_machine: Option<NestedRef>,
    pub name: String,
    pub enabled: Option<bool>,
    pub parent: Option<NestedRef>,
    pub bridge: Option<NestedRef>,
    pub mtu: Option<i64>,
    pub mac_address: Option<String>,
    pub mode: Option<ChoiceField>,
    pub untagged_vlan: Option<NestedRef>,
    pub vrf: Option<NestedRef>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(VmInterface, "virtualization/interfaces", "VM interface");

/// Virtual disk model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualDisk {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub virtual_machine: Option<NestedRef>,
    pub name: String,
    pub size: Option<i64>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(VirtualDisk, "virtualization/virtual-disks", "virtual disk");
