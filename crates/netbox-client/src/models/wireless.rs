//! Wireless models

use super::common::{ChoiceField, CustomFields, NestedRef, NestedTag};
use super::netbox_object;
use serde::{Deserialize, Serialize};

/// Wireless LAN model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessLan {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub ssid: String,
    pub group: Option<NestedRef>,
    pub status: Option<ChoiceField>,
    pub vlan: Option<NestedRef>,
    pub tenant: Option<NestedRef>,
    pub auth_type: Option<ChoiceField>,
    pub auth_cipher: Option<ChoiceField>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(WirelessLan, "wireless/wireless-lans", "wireless LAN");

/// Wireless link model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessLink {
    pub id: u64,
    pub url: Option<String>,
    pub display: Option<String>,
    pub interface_a: Option<NestedRef>,
    pub interface_b: Option<NestedRef>,
    pub ssid: Option<String>,
    pub status: Option<ChoiceField>,
    pub tenant: Option<NestedRef>,
    pub auth_type: Option<ChoiceField>,
    pub auth_cipher: Option<ChoiceField>,
    pub distance: Option<f64>,
    pub distance_unit: Option<ChoiceField>,
    pub description: Option<String>,
    pub comments: Option<String>,
    pub tags: Vec<NestedTag>,
    pub custom_fields: CustomFields,
}
netbox_object!(WirelessLink, "wireless/wireless-links", "wireless link");
