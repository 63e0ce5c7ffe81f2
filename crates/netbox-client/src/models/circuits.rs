//! Circuit models

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Circuit model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Circuit {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub cid: String,
    pub provider: Option<NestedRef>,
    pub provider_account: Option<NestedRef>,
    #[serde(rename = "type")]
    pub circuit_type: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub tenant: Option<NestedRef>,
    pub install_date: Option<String>,
    pub termination_date: Option<String>,
    pub commit_rate: Option<i64>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(Circuit, "circuits/circuits", "circuit");

/// Circuit type model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitType {
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
netbox_object!(CircuitType, "circuits/circuit-types", "circuit type");

/// Circuit group model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitGroup {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub name: String,
    pub slug: String,
    pub tenant: Option<NestedRef>,
    pub circuit_count: Option<i64>,
    pub description: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(CircuitGroup, "circuits/circuit-groups", "circuit group");

/// Circuit termination model (A or Z side of a circuit)
///
/// NetBox 4.2 replaced `site`/`provider_network` with a generic
/// `termination`; both shapes are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitTermination {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub circuit: Option<NestedRef>,
    pub term_side: Option<String>,
    pub site: Option<NestedRef>,
    pub provider_network: Option<NestedRef>,
    pub termination_type: Option<String>,
    pub termination_id: Option<i64>,
    pub port_speed: Option<i64>,
    pub upstream_speed: Option<i64>,
    pub xconnect_id: Option<String>,
    pub pp_info: Option<String>,
    pub description: Option<String>,
    pub mark_connected: Option<bool>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(CircuitTermination, "circuits/circuit-terminations", "circuit termination");

/// Provider account model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderAccount {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub provider: Option<NestedRef>,
    pub name: Option<String>,
    pub account: String,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(ProviderAccount, "circuits/provider-accounts", "provider account");

/// Provider network model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderNetwork {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub provider: Option<NestedRef>,
    pub name: String,
    pub service_id: Option<String>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(ProviderNetwork, "circuits/provider-networks", "provider network");
