//! Wireless data sources.

use super::NetBoxDataSource;
use crate::lookup::Lookup;
use crate::mapping::*;
use crate::schema;
use netbox_client::{NetBoxObject, WirelessLan, WirelessLink};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessLanModel {
    pub id: Value<String>,
    pub ssid: Value<String>,
    pub group: Value<String>,
    pub group_id: Value<i64>,
    pub status: Value<String>,
    pub vlan: Value<String>,
    pub vlan_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub auth_type: Value<String>,
    pub auth_cipher: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_wireless_lan`
#[derive(Debug, Clone, Copy, Default)]
pub struct WirelessLanDataSource;

impl NetBoxDataSource for WirelessLanDataSource {
    type Object = WirelessLan;
    type Model = WirelessLanModel;
    const TYPE_NAME: &'static str = "wireless_lan";

    fn description() -> &'static str {
        "Use this data source to get information about a wireless LAN in NetBox. The pre-shared key is never read."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the wireless LAN. Takes precedence over `ssid`.")),
            ("ssid", schema::lookup_string("SSID of the wireless LAN.")),
            ("group", schema::computed_string("Name of the wireless LAN group.")),
            ("group_id", schema::computed_number("ID of the wireless LAN group.")),
            ("status", schema::computed_string("Operational status.")),
            ("vlan", schema::computed_string("Name of the bridged VLAN.")),
            ("vlan_id", schema::computed_number("ID of the bridged VLAN.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("auth_type", schema::computed_string("Authentication type.")),
            ("auth_cipher", schema::computed_string("Authentication cipher.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("wireless LAN")),
            ("tags", schema::tags("wireless LAN")),
            ("custom_fields", schema::custom_fields("wireless LAN")),
        ]
    }

    fn lookup(model: &WirelessLanModel) -> Lookup {
        Lookup::new(WirelessLan::KIND)
            .id("id", &model.id)
            .key("ssid", "ssid", &model.ssid)
    }

    fn map(lan: &WirelessLan, model: &mut WirelessLanModel) {
        model.id = id_string(lan.id);
        model.ssid = string_value(Some(&lan.ssid));
        model.group = reference_name(lan.group.as_ref());
        model.group_id = reference_id(lan.group.as_ref());
        model.status = choice_value(lan.status.as_ref());
        model.vlan = reference_name(lan.vlan.as_ref());
        model.vlan_id = reference_id(lan.vlan.as_ref());
        model.tenant = reference_name(lan.tenant.as_ref());
        model.tenant_id = reference_id(lan.tenant.as_ref());
        model.auth_type = choice_value(lan.auth_type.as_ref());
        model.auth_cipher = choice_value(lan.auth_cipher.as_ref());
        model.description = string_value(lan.description.as_deref());
        model.comments = string_value(lan.comments.as_deref());
        model.display_name = string_value(lan.display.as_deref());
        model.tags = tags_value(&lan.tags);
        model.custom_fields = custom_fields_value(&lan.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessLinkModel {
    pub id: Value<String>,
    pub interface_a_id: Value<i64>,
    pub interface_b_id: Value<i64>,
    pub ssid: Value<String>,
    pub status: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub auth_type: Value<String>,
    pub auth_cipher: Value<String>,
    pub distance: Value<f64>,
    pub distance_unit: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_wireless_link`
#[derive(Debug, Clone, Copy, Default)]
pub struct WirelessLinkDataSource;

impl NetBoxDataSource for WirelessLinkDataSource {
    type Object = WirelessLink;
    type Model = WirelessLinkModel;
    const TYPE_NAME: &'static str = "wireless_link";

    fn description() -> &'static str {
        "Use this data source to get information about a wireless link in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::required_string("ID of the wireless link.")),
            ("interface_a_id", schema::computed_number("ID of the A side interface.")),
            ("interface_b_id", schema::computed_number("ID of the B side interface.")),
            ("ssid", schema::computed_string("SSID of the link.")),
            ("status", schema::computed_string("Connection status.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("auth_type", schema::computed_string("Authentication type.")),
            ("auth_cipher", schema::computed_string("Authentication cipher.")),
            ("distance", schema::computed_number("Link distance.")),
            ("distance_unit", schema::computed_string("Unit for `distance`.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("wireless link")),
            ("tags", schema::tags("wireless link")),
            ("custom_fields", schema::custom_fields("wireless link")),
        ]
    }

    fn lookup(model: &WirelessLinkModel) -> Lookup {
        Lookup::new(WirelessLink::KIND).id("id", &model.id)
    }

    fn map(link: &WirelessLink, model: &mut WirelessLinkModel) {
        model.id = id_string(link.id);
        model.interface_a_id = reference_id(link.interface_a.as_ref());
        model.interface_b_id = reference_id(link.interface_b.as_ref());
        model.ssid = string_value(link.ssid.as_deref());
        model.status = choice_value(link.status.as_ref());
        model.tenant = reference_name(link.tenant.as_ref());
        model.tenant_id = reference_id(link.tenant.as_ref());
        model.auth_type = choice_value(link.auth_type.as_ref());
        model.auth_cipher = choice_value(link.auth_cipher.as_ref());
        model.distance = float_value(link.distance);
        model.distance_unit = choice_value(link.distance_unit.as_ref());
        model.description = string_value(link.description.as_deref());
        model.comments = string_value(link.comments.as_deref());
        model.display_name = string_value(link.display.as_deref());
        model.tags = tags_value(&link.tags);
        model.custom_fields = custom_fields_value(&link.custom_fields);
    }
}
