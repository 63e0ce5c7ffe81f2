//! Power distribution: panels and the feeds they supply.

use super::NetBoxDataSource;
use crate::lookup::{KeyPart, Lookup};
use crate::mapping::*;
use crate::schema;
use netbox_client::{NetBoxObject, PowerFeed, PowerPanel};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPanelModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub site_id: Value<i64>,
    pub site: Value<String>,
    pub location: Value<String>,
    pub location_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_power_panel`
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerPanelDataSource;

impl NetBoxDataSource for PowerPanelDataSource {
    type Object = PowerPanel;
    type Model = PowerPanelModel;
    const TYPE_NAME: &'static str = "power_panel";

    fn description() -> &'static str {
        "Use this data source to get information about a power panel in NetBox. Panel names are only unique per site; set `site_id` to narrow a lookup by `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the power panel. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the power panel.")),
            ("site_id", schema::lookup_number("ID of the site. Narrows a lookup by `name`.")),
            ("site", schema::computed_string("Name of the site.")),
            ("location", schema::computed_string("Name of the location.")),
            ("location_id", schema::computed_number("ID of the location.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("power panel")),
            ("tags", schema::tags("power panel")),
            ("custom_fields", schema::custom_fields("power panel")),
        ]
    }

    fn lookup(model: &PowerPanelModel) -> Lookup {
        Lookup::new(PowerPanel::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("name", "name", &model.name),
            KeyPart::optional("site_id", "site_id", &model.site_id),
        ])
    }

    fn map(panel: &PowerPanel, model: &mut PowerPanelModel) {
        model.id = id_string(panel.id);
        model.name = string_value(Some(&panel.name));
        model.site_id = reference_id(panel.site.as_ref());
        model.site = reference_name(panel.site.as_ref());
        model.location = reference_name(panel.location.as_ref());
        model.location_id = reference_id(panel.location.as_ref());
        model.description = string_value(panel.description.as_deref());
        model.comments = string_value(panel.comments.as_deref());
        model.display_name = string_value(panel.display.as_deref());
        model.tags = tags_value(&panel.tags);
        model.custom_fields = custom_fields_value(&panel.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerFeedModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub power_panel_id: Value<i64>,
    pub power_panel: Value<String>,
    pub rack: Value<String>,
    pub rack_id: Value<i64>,
    pub status: Value<String>,
    #[serde(rename = "type")]
    pub feed_type: Value<String>,
    pub supply: Value<String>,
    pub phase: Value<String>,
    pub voltage: Value<i64>,
    pub amperage: Value<i64>,
    pub max_utilization: Value<i64>,
    pub mark_connected: Value<bool>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_power_feed`
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerFeedDataSource;

impl NetBoxDataSource for PowerFeedDataSource {
    type Object = PowerFeed;
    type Model = PowerFeedModel;
    const TYPE_NAME: &'static str = "power_feed";

    fn description() -> &'static str {
        "Use this data source to get information about a power feed in NetBox. Set `power_panel_id` to narrow a lookup by `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the power feed. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the power feed.")),
            ("power_panel_id", schema::lookup_number("ID of the power panel. Narrows a lookup by `name`.")),
            ("power_panel", schema::computed_string("Name of the power panel.")),
            ("rack", schema::computed_string("Name of the rack fed.")),
            ("rack_id", schema::computed_number("ID of the rack fed.")),
            ("status", schema::computed_string("Operational status.")),
            ("type", schema::computed_string("Feed type, `primary` or `redundant`.")),
            ("supply", schema::computed_string("Supply type, `ac` or `dc`.")),
            ("phase", schema::computed_string("Phase, `single-phase` or `three-phase`.")),
            ("voltage", schema::computed_number("Voltage.")),
            ("amperage", schema::computed_number("Amperage.")),
            ("max_utilization", schema::computed_number("Maximum permissible draw in percent.")),
            ("mark_connected", schema::computed_bool("Whether the feed is treated as connected.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("power feed")),
            ("tags", schema::tags("power feed")),
            ("custom_fields", schema::custom_fields("power feed")),
        ]
    }

    fn lookup(model: &PowerFeedModel) -> Lookup {
        Lookup::new(PowerFeed::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("name", "name", &model.name),
            KeyPart::optional("power_panel_id", "power_panel_id", &model.power_panel_id),
        ])
    }

    fn map(feed: &PowerFeed, model: &mut PowerFeedModel) {
        model.id = id_string(feed.id);
        model.name = string_value(Some(&feed.name));
        model.power_panel_id = reference_id(feed.power_panel.as_ref());
        model.power_panel = reference_name(feed.power_panel.as_ref());
        model.rack = reference_name(feed.rack.as_ref());
        model.rack_id = reference_id(feed.rack.as_ref());
        model.status = choice_value(feed.status.as_ref());
        model.feed_type = choice_value(feed.feed_type.as_ref());
        model.supply = choice_value(feed.supply.as_ref());
        model.phase = choice_value(feed.phase.as_ref());
        model.voltage = int_value(feed.voltage);
        model.amperage = int_value(feed.amperage);
        model.max_utilization = int_value(feed.max_utilization);
        model.mark_connected = bool_value(feed.mark_connected);
        model.tenant = reference_name(feed.tenant.as_ref());
        model.tenant_id = reference_id(feed.tenant.as_ref());
        model.description = string_value(feed.description.as_deref());
        model.comments = string_value(feed.comments.as_deref());
        model.display_name = string_value(feed.display.as_deref());
        model.tags = tags_value(&feed.tags);
        model.custom_fields = custom_fields_value(&feed.custom_fields);
    }
}
