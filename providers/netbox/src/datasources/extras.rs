//! Extras data sources: tags, custom field definitions, config contexts and
//! the event machinery (webhooks, event rules, notification groups).

use super::{slugged, NetBoxDataSource};
use crate::lookup::Lookup;
use crate::mapping::*;
use crate::schema;
use netbox_client::{ConfigContext, CustomField, EventRule, NetBoxObject, NotificationGroup, Tag, Webhook};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagDataModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub color: Value<String>,
    pub description: Value<String>,
    pub tagged_items: Value<i64>,
    pub display_name: Value<String>,
}

/// `netbox_tag`
#[derive(Debug, Clone, Copy, Default)]
pub struct TagDataSource;

impl NetBoxDataSource for TagDataSource {
    type Object = Tag;
    type Model = TagDataModel;
    const TYPE_NAME: &'static str = "tag";

    fn description() -> &'static str {
        "Use this data source to get information about a tag in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the tag. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the tag.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("color", schema::computed_string("Color as a 6 digit hex code.")),
            ("description", schema::computed_string("Brief description.")),
            ("tagged_items", schema::computed_number("Number of objects carrying the tag.")),
            ("display_name", schema::display_name("tag")),
        ]
    }

    fn lookup(model: &TagDataModel) -> Lookup {
        slugged::<Tag>(&model.id, &model.slug, &model.name)
    }

    fn map(tag: &Tag, model: &mut TagDataModel) {
        model.id = id_string(tag.id);
        model.name = string_value(Some(&tag.name));
        model.slug = string_value(Some(&tag.slug));
        model.color = string_value(tag.color.as_deref());
        model.description = string_value(tag.description.as_deref());
        model.tagged_items = int_value(tag.tagged_items);
        model.display_name = string_value(tag.display.as_deref());
    }
}

// ---------------------------------------------------------------------------
// Custom field
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomFieldDataModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub object_types: Value<Vec<String>>,
    #[serde(rename = "type")]
    pub field_type: Value<String>,
    pub related_object_type: Value<String>,
    pub data_type: Value<String>,
    pub label: Value<String>,
    pub group_name: Value<String>,
    pub description: Value<String>,
    pub required: Value<bool>,
    pub search_weight: Value<i64>,
    pub filter_logic: Value<String>,
    pub ui_visible: Value<String>,
    pub ui_editable: Value<String>,
    pub is_cloneable: Value<bool>,
    pub default: Value<String>,
    pub weight: Value<i64>,
    pub validation_minimum: Value<i64>,
    pub validation_maximum: Value<i64>,
    pub validation_regex: Value<String>,
    pub choice_set: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
}

/// `netbox_custom_field`
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomFieldDataSource;

impl NetBoxDataSource for CustomFieldDataSource {
    type Object = CustomField;
    type Model = CustomFieldDataModel;
    const TYPE_NAME: &'static str = "custom_field";

    fn description() -> &'static str {
        "Use this data source to get information about a custom field definition in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the custom field. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Internal name of the custom field.")),
            ("object_types", schema::computed_string_list("Object types the field applies to, e.g. `dcim.device`.")),
            ("type", schema::computed_string("Field type, e.g. `text` or `integer`.")),
            ("related_object_type", schema::computed_string("Object type referenced by object fields.")),
            ("data_type", schema::computed_string("Data type of the stored value.")),
            ("label", schema::computed_string("Label shown in the UI.")),
            ("group_name", schema::computed_string("Group the field is displayed in.")),
            ("description", schema::computed_string("Brief description.")),
            ("required", schema::computed_bool("Whether a value is required.")),
            ("search_weight", schema::computed_number("Weighting for search.")),
            ("filter_logic", schema::computed_string("Filter logic, `disabled`, `loose` or `exact`.")),
            ("ui_visible", schema::computed_string("When the field is shown in the UI.")),
            ("ui_editable", schema::computed_string("Whether the field is editable in the UI.")),
            ("is_cloneable", schema::computed_bool("Whether the value is copied when cloning objects.")),
            ("default", schema::computed_string("Default value as JSON.")),
            ("weight", schema::computed_number("Display weight.")),
            ("validation_minimum", schema::computed_number("Minimum allowed numeric value.")),
            ("validation_maximum", schema::computed_number("Maximum allowed numeric value.")),
            ("validation_regex", schema::computed_string("Regular expression text values must match.")),
            ("choice_set", schema::computed_string("Name of the choice set.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("custom field")),
        ]
    }

    fn lookup(model: &CustomFieldDataModel) -> Lookup {
        Lookup::new(CustomField::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(field: &CustomField, model: &mut CustomFieldDataModel) {
        model.id = id_string(field.id);
        model.name = string_value(Some(&field.name));
        model.object_types = list_value(field.object_types.clone());
        model.field_type = choice_value(field.field_type.as_ref());
        model.related_object_type = string_value(field.related_object_type.as_deref());
        model.data_type = string_value(field.data_type.as_deref());
        model.label = string_value(field.label.as_deref());
        model.group_name = string_value(field.group_name.as_deref());
        model.description = string_value(field.description.as_deref());
        model.required = bool_value(field.required);
        model.search_weight = int_value(field.search_weight);
        model.filter_logic = choice_value(field.filter_logic.as_ref());
        model.ui_visible = choice_value(field.ui_visible.as_ref());
        model.ui_editable = choice_value(field.ui_editable.as_ref());
        model.is_cloneable = bool_value(field.is_cloneable);
        model.default = json_text(field.default.as_ref());
        model.weight = int_value(field.weight);
        model.validation_minimum = int_value(field.validation_minimum);
        model.validation_maximum = int_value(field.validation_maximum);
        model.validation_regex = string_value(field.validation_regex.as_deref());
        model.choice_set = reference_name(field.choice_set.as_ref());
        model.comments = string_value(field.comments.as_deref());
        model.display_name = string_value(field.display.as_deref());
    }
}

// ---------------------------------------------------------------------------
// Config context
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigContextModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub description: Value<String>,
    pub weight: Value<i64>,
    pub is_active: Value<bool>,
    pub data: Value<String>,
    pub regions: Value<Vec<i64>>,
    pub site_groups: Value<Vec<i64>>,
    pub sites: Value<Vec<i64>>,
    pub locations: Value<Vec<i64>>,
    pub device_types: Value<Vec<i64>>,
    pub roles: Value<Vec<i64>>,
    pub platforms: Value<Vec<i64>>,
    pub cluster_types: Value<Vec<i64>>,
    pub cluster_groups: Value<Vec<i64>>,
    pub clusters: Value<Vec<i64>>,
    pub tenant_groups: Value<Vec<i64>>,
    pub tenants: Value<Vec<i64>>,
    pub tags: Value<Vec<String>>,
    pub display_name: Value<String>,
}

/// `netbox_config_context`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigContextDataSource;

impl NetBoxDataSource for ConfigContextDataSource {
    type Object = ConfigContext;
    type Model = ConfigContextModel;
    const TYPE_NAME: &'static str = "config_context";

    fn description() -> &'static str {
        "Use this data source to get information about a config context in NetBox. Assignment attributes hold the IDs of the objects the context applies to; null means unrestricted."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the config context. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the config context.")),
            ("description", schema::computed_string("Brief description.")),
            ("weight", schema::computed_number("Merge weight; higher weights win.")),
            ("is_active", schema::computed_bool("Whether the context is applied.")),
            ("data", schema::computed_string("Context data as JSON.")),
            ("regions", schema::computed_number_list("IDs of assigned regions.")),
            ("site_groups", schema::computed_number_list("IDs of assigned site groups.")),
            ("sites", schema::computed_number_list("IDs of assigned sites.")),
            ("locations", schema::computed_number_list("IDs of assigned locations.")),
            ("device_types", schema::computed_number_list("IDs of assigned device types.")),
            ("roles", schema::computed_number_list("IDs of assigned device roles.")),
            ("platforms", schema::computed_number_list("IDs of assigned platforms.")),
            ("cluster_types", schema::computed_number_list("IDs of assigned cluster types.")),
            ("cluster_groups", schema::computed_number_list("IDs of assigned cluster groups.")),
            ("clusters", schema::computed_number_list("IDs of assigned clusters.")),
            ("tenant_groups", schema::computed_number_list("IDs of assigned tenant groups.")),
            ("tenants", schema::computed_number_list("IDs of assigned tenants.")),
            ("tags", schema::computed_string_list("Slugs of assigned tags.")),
            ("display_name", schema::display_name("config context")),
        ]
    }

    fn lookup(model: &ConfigContextModel) -> Lookup {
        Lookup::new(ConfigContext::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(context: &ConfigContext, model: &mut ConfigContextModel) {
        model.id = id_string(context.id);
        model.name = string_value(Some(&context.name));
        model.description = string_value(context.description.as_deref());
        model.weight = int_value(context.weight);
        model.is_active = bool_value(context.is_active);
        model.data = json_text(Some(&context.data));
        model.regions = reference_ids(&context.regions);
        model.site_groups = reference_ids(&context.site_groups);
        model.sites = reference_ids(&context.sites);
        model.locations = reference_ids(&context.locations);
        model.device_types = reference_ids(&context.device_types);
        model.roles = reference_ids(&context.roles);
        model.platforms = reference_ids(&context.platforms);
        model.cluster_types = reference_ids(&context.cluster_types);
        model.cluster_groups = reference_ids(&context.cluster_groups);
        model.clusters = reference_ids(&context.clusters);
        model.tenant_groups = reference_ids(&context.tenant_groups);
        model.tenants = reference_ids(&context.tenants);
        model.tags = list_value(context.tags.clone());
        model.display_name = string_value(context.display.as_deref());
    }
}

// ---------------------------------------------------------------------------
// Webhook, event rule, notification group
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub description: Value<String>,
    pub payload_url: Value<String>,
    pub http_method: Value<String>,
    pub http_content_type: Value<String>,
    pub additional_headers: Value<String>,
    pub body_template: Value<String>,
    pub ssl_verification: Value<bool>,
    pub ca_file_path: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_webhook`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebhookDataSource;

impl NetBoxDataSource for WebhookDataSource {
    type Object = Webhook;
    type Model = WebhookModel;
    const TYPE_NAME: &'static str = "webhook";

    fn description() -> &'static str {
        "Use this data source to get information about a webhook in NetBox. The signing secret is never read."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the webhook. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the webhook.")),
            ("description", schema::computed_string("Brief description.")),
            ("payload_url", schema::computed_string("URL called when the webhook fires.")),
            ("http_method", schema::computed_string("HTTP method.")),
            ("http_content_type", schema::computed_string("Content type of the request body.")),
            ("additional_headers", schema::computed_string("Extra headers, one `Name: Value` per line.")),
            ("body_template", schema::computed_string("Jinja2 template for the request body.")),
            ("ssl_verification", schema::computed_bool("Whether the server certificate is verified.")),
            ("ca_file_path", schema::computed_string("CA bundle used for verification.")),
            ("display_name", schema::display_name("webhook")),
            ("tags", schema::tags("webhook")),
            ("custom_fields", schema::custom_fields("webhook")),
        ]
    }

    fn lookup(model: &WebhookModel) -> Lookup {
        Lookup::new(Webhook::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(webhook: &Webhook, model: &mut WebhookModel) {
        model.id = id_string(webhook.id);
        model.name = string_value(Some(&webhook.name));
        model.description = string_value(webhook.description.as_deref());
        model.payload_url = string_value(webhook.payload_url.as_deref());
        model.http_method = string_value(webhook.http_method.as_deref());
        model.http_content_type = string_value(webhook.http_content_type.as_deref());
        model.additional_headers = string_value(webhook.additional_headers.as_deref());
        model.body_template = string_value(webhook.body_template.as_deref());
        model.ssl_verification = bool_value(webhook.ssl_verification);
        model.ca_file_path = string_value(webhook.ca_file_path.as_deref());
        model.display_name = string_value(webhook.display.as_deref());
        model.tags = tags_value(&webhook.tags);
        model.custom_fields = custom_fields_value(&webhook.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRuleModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub object_types: Value<Vec<String>>,
    pub event_types: Value<Vec<String>>,
    pub enabled: Value<bool>,
    pub conditions: Value<String>,
    pub action_type: Value<String>,
    pub action_object_type: Value<String>,
    pub action_object_id: Value<String>,
    pub action_object: Value<String>,
    pub description: Value<String>,
    pub created: Value<String>,
    pub last_updated: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_event_rule`
#[derive(Debug, Clone, Copy, Default)]
pub struct EventRuleDataSource;

impl NetBoxDataSource for EventRuleDataSource {
    type Object = EventRule;
    type Model = EventRuleModel;
    const TYPE_NAME: &'static str = "event_rule";

    fn description() -> &'static str {
        "Use this data source to get information about an event rule in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::required_string("ID of the event rule.")),
            ("name", schema::computed_string("Name of the event rule.")),
            ("object_types", schema::computed_string_list("Object types that trigger the rule.")),
            ("event_types", schema::computed_string_list("Events that trigger the rule, e.g. `object_created`.")),
            ("enabled", schema::computed_bool("Whether the rule is enabled.")),
            ("conditions", schema::computed_string("Conditions as JSON.")),
            ("action_type", schema::computed_string("Action type, e.g. `webhook` or `script`.")),
            ("action_object_type", schema::computed_string("Object type of the action target.")),
            ("action_object_id", schema::computed_string("ID of the action target.")),
            ("action_object", schema::computed_string("Name of the action target.")),
            ("description", schema::computed_string("Brief description.")),
            ("created", schema::computed_string("Creation timestamp.")),
            ("last_updated", schema::computed_string("Last update timestamp.")),
            ("display_name", schema::display_name("event rule")),
            ("tags", schema::tags("event rule")),
            ("custom_fields", schema::custom_fields("event rule")),
        ]
    }

    fn lookup(model: &EventRuleModel) -> Lookup {
        Lookup::new(EventRule::KIND).id("id", &model.id)
    }

    fn map(rule: &EventRule, model: &mut EventRuleModel) {
        model.id = id_string(rule.id);
        model.name = string_value(Some(&rule.name));
        model.object_types = list_value(rule.object_types.clone());
        model.event_types = list_value(rule.event_types.clone());
        model.enabled = bool_value(rule.enabled);
        model.conditions = json_text(rule.conditions.as_ref());
        model.action_type = choice_value(rule.action_type.as_ref());
        model.action_object_type = string_value(rule.action_object_type.as_deref());
        model.action_object_id = match rule.action_object_id {
            Some(id) => Value::Value(id.to_string()),
            None => Value::Null,
        };
        model.action_object = string_value(
            rule.action_object
                .as_ref()
                .and_then(|o| o.name.as_deref().or(o.display.as_deref())),
        );
        model.description = string_value(rule.description.as_deref());
        model.created = string_value(rule.created.as_deref());
        model.last_updated = string_value(rule.last_updated.as_deref());
        model.display_name = string_value(rule.display.as_deref());
        model.tags = tags_value(&rule.tags);
        model.custom_fields = custom_fields_value(&rule.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationGroupModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub description: Value<String>,
    pub group_ids: Value<Vec<i64>>,
    pub groups: Value<Vec<String>>,
    pub user_ids: Value<Vec<i64>>,
    pub users: Value<Vec<String>>,
    pub display_name: Value<String>,
}

/// `netbox_notification_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationGroupDataSource;

impl NetBoxDataSource for NotificationGroupDataSource {
    type Object = NotificationGroup;
    type Model = NotificationGroupModel;
    const TYPE_NAME: &'static str = "notification_group";

    fn description() -> &'static str {
        "Use this data source to get information about a notification group in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::required_string("ID of the notification group.")),
            ("name", schema::computed_string("Name of the notification group.")),
            ("description", schema::computed_string("Brief description.")),
            ("group_ids", schema::computed_number_list("IDs of the member user groups.")),
            ("groups", schema::computed_string_list("Names of the member user groups.")),
            ("user_ids", schema::computed_number_list("IDs of the member users.")),
            ("users", schema::computed_string_list("Usernames of the member users.")),
            ("display_name", schema::display_name("notification group")),
        ]
    }

    fn lookup(model: &NotificationGroupModel) -> Lookup {
        Lookup::new(NotificationGroup::KIND).id("id", &model.id)
    }

    fn map(group: &NotificationGroup, model: &mut NotificationGroupModel) {
        model.id = id_string(group.id);
        model.name = string_value(Some(&group.name));
        model.description = string_value(group.description.as_deref());
        model.group_ids = reference_ids(&group.groups);
        model.groups = reference_names(&group.groups);
        model.user_ids = reference_ids(&group.users);
        model.users = list_value(group.users.iter().filter_map(|u| u.username.clone()).collect());
        model.display_name = string_value(group.display.as_deref());
    }
}
