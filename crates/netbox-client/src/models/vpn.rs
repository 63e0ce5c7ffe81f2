//! VPN models (tunnels, L2VPNs, IKE and IPSec)

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Tunnel model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunnel {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub status: Option<ChoiceField>,
    pub group: Option<NestedRef>,
    pub encapsulation: Option<ChoiceField>,
    pub ipsec_profile: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub tunnel_id: Option<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Tunnel, "vpn/tunnels", "tunnel");

/// Tunnel group model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelGroup {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(TunnelGroup, "vpn/tunnel-groups", "tunnel group");

/// Tunnel termination model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelTermination {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub tunnel: Option<NestedRef>,
    pub role: Option<ChoiceField>,
    pub termination_type: Option<String>,
    pub termination_id: Option<i64>,
    pub outside_ip: Option<NestedRef>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(TunnelTermination, "vpn/tunnel-terminations", "tunnel termination");

/// L2VPN model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct L2vpn {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub l2vpn_type: Option<ChoiceField>,
    pub identifier: Option<i64>,
    pub import_targets: Vec<NestedRef>,
    pub export_targets: Vec<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(L2vpn, "vpn/l2vpns", "L2VPN");

/// IKE policy model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IkePolicy {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub version: Option<ChoiceField>,
    pub mode: Option<ChoiceField>,
    pub proposals: Vec<NestedRef>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(IkePolicy, "vpn/ike-policies", "IKE policy");

/// IKE proposal model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IkeProposal {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub authentication_method: Option<ChoiceField>,
    pub encryption_algorithm: Option<ChoiceField>,
    pub authentication_algorithm: Option<ChoiceField>,
    pub group: Option<ChoiceField>,
    pub sa_lifetime: Option<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(IkeProposal, "vpn/ike-proposals", "IKE proposal");

/// IPSec proposal model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpsecProposal {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub encryption_algorithm: Option<ChoiceField>,
    pub authentication_algorithm: Option<ChoiceField>,
    pub sa_lifetime_seconds: Option<i64>,
    pub sa_lifetime_data: Option<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(IpsecProposal, "vpn/ipsec-proposals", "IPSec proposal");
