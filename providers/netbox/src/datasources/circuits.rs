//! Circuit data sources.

use super::{slugged, NetBoxDataSource};
use crate::lookup::{KeyPart, Lookup};
use crate::mapping::*;
use crate::schema;
use netbox_client::{
    Circuit, CircuitGroup, CircuitTermination, CircuitType, NetBoxObject, ProviderAccount, ProviderNetwork,
};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitModel {
    pub id: Value<String>,
    pub cid: Value<String>,
    pub provider: Value<String>,
    pub provider_id: Value<i64>,
    pub provider_account: Value<String>,
    #[serde(rename = "type")]
    pub circuit_type: Value<String>,
    pub type_id: Value<i64>,
    pub status: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub install_date: Value<String>,
    pub termination_date: Value<String>,
    pub commit_rate: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_circuit`
#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitDataSource;

impl NetBoxDataSource for CircuitDataSource {
    type Object = Circuit;
    type Model = CircuitModel;
    const TYPE_NAME: &'static str = "circuit";

    fn description() -> &'static str {
        "Use this data source to get information about a circuit in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the circuit. Takes precedence over `cid`.")),
            ("cid", schema::lookup_string("Provider-assigned circuit ID.")),
            ("provider", schema::computed_string("Name of the circuit provider.")),
            ("provider_id", schema::computed_number("ID of the circuit provider.")),
            ("provider_account", schema::computed_string("Provider account the circuit is billed to.")),
            ("type", schema::computed_string("Name of the circuit type.")),
            ("type_id", schema::computed_number("ID of the circuit type.")),
            ("status", schema::computed_string("Operational status.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("install_date", schema::computed_string("Installation date (YYYY-MM-DD).")),
            ("termination_date", schema::computed_string("Termination date (YYYY-MM-DD).")),
            ("commit_rate", schema::computed_number("Committed rate in Kbps.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("circuit")),
            ("tags", schema::tags("circuit")),
            ("custom_fields", schema::custom_fields("circuit")),
        ]
    }

    fn lookup(model: &CircuitModel) -> Lookup {
        Lookup::new(Circuit::KIND).id("id", &model.id).key("cid", "cid", &model.cid)
    }

    fn map(circuit: &Circuit, model: &mut CircuitModel) {
        model.id = id_string(circuit.id);
        model.cid = string_value(Some(&circuit.cid));
        model.provider = reference_name(circuit.provider.as_ref());
        model.provider_id = reference_id(circuit.provider.as_ref());
        model.provider_account = reference_display(circuit.provider_account.as_ref());
        model.circuit_type = reference_name(circuit.circuit_type.as_ref());
        model.type_id = reference_id(circuit.circuit_type.as_ref());
        model.status = choice_value(circuit.status.as_ref());
        model.tenant = reference_name(circuit.tenant.as_ref());
        model.tenant_id = reference_id(circuit.tenant.as_ref());
        model.install_date = string_value(circuit.install_date.as_deref());
        model.termination_date = string_value(circuit.termination_date.as_deref());
        model.commit_rate = int_value(circuit.commit_rate);
        model.description = string_value(circuit.description.as_deref());
        model.comments = string_value(circuit.comments.as_deref());
        model.display_name = string_value(circuit.display.as_deref());
        model.tags = tags_value(&circuit.tags);
        model.custom_fields = custom_fields_value(&circuit.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitTypeModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub color: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_circuit_type`
#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitTypeDataSource;

impl NetBoxDataSource for CircuitTypeDataSource {
    type Object = CircuitType;
    type Model = CircuitTypeModel;
    const TYPE_NAME: &'static str = "circuit_type";

    fn description() -> &'static str {
        "Use this data source to get information about a circuit type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the circuit type. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the circuit type.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("color", schema::computed_string("Color as a 6 digit hex code.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("circuit type")),
            ("tags", schema::tags("circuit type")),
            ("custom_fields", schema::custom_fields("circuit type")),
        ]
    }

    fn lookup(model: &CircuitTypeModel) -> Lookup {
        slugged::<CircuitType>(&model.id, &model.slug, &model.name)
    }

    fn map(circuit_type: &CircuitType, model: &mut CircuitTypeModel) {
        model.id = id_string(circuit_type.id);
        model.name = string_value(Some(&circuit_type.name));
        model.slug = string_value(Some(&circuit_type.slug));
        model.color = string_value(circuit_type.color.as_deref());
        model.description = string_value(circuit_type.description.as_deref());
        model.display_name = string_value(circuit_type.display.as_deref());
        model.tags = tags_value(&circuit_type.tags);
        model.custom_fields = custom_fields_value(&circuit_type.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitGroupModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub circuit_count: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_circuit_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitGroupDataSource;

impl NetBoxDataSource for CircuitGroupDataSource {
    type Object = CircuitGroup;
    type Model = CircuitGroupModel;
    const TYPE_NAME: &'static str = "circuit_group";

    fn description() -> &'static str {
        "Use this data source to get information about a circuit group in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the circuit group. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the circuit group.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("circuit_count", schema::computed_number("Number of circuits assigned to the group.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("circuit group")),
            ("tags", schema::tags("circuit group")),
            ("custom_fields", schema::custom_fields("circuit group")),
        ]
    }

    fn lookup(model: &CircuitGroupModel) -> Lookup {
        slugged::<CircuitGroup>(&model.id, &model.slug, &model.name)
    }

    fn map(group: &CircuitGroup, model: &mut CircuitGroupModel) {
        model.id = id_string(group.id);
        model.name = string_value(Some(&group.name));
        model.slug = string_value(Some(&group.slug));
        model.tenant = reference_name(group.tenant.as_ref());
        model.tenant_id = reference_id(group.tenant.as_ref());
        model.circuit_count = int_value(group.circuit_count);
        model.description = string_value(group.description.as_deref());
        model.display_name = string_value(group.display.as_deref());
        model.tags = tags_value(&group.tags);
        model.custom_fields = custom_fields_value(&group.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircuitTerminationModel {
    pub id: Value<String>,
    pub circuit: Value<String>,
    pub circuit_id: Value<i64>,
    pub term_side: Value<String>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub provider_network: Value<String>,
    pub provider_network_id: Value<i64>,
    pub termination_type: Value<String>,
    pub termination_id: Value<i64>,
    pub port_speed: Value<i64>,
    pub upstream_speed: Value<i64>,
    pub xconnect_id: Value<String>,
    pub pp_info: Value<String>,
    pub description: Value<String>,
    pub mark_connected: Value<bool>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_circuit_termination`
#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitTerminationDataSource;

impl NetBoxDataSource for CircuitTerminationDataSource {
    type Object = CircuitTermination;
    type Model = CircuitTerminationModel;
    const TYPE_NAME: &'static str = "circuit_termination";

    fn description() -> &'static str {
        "Use this data source to get information about one side of a circuit in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::required_string("ID of the circuit termination.")),
            ("circuit", schema::computed_string("Circuit ID as assigned by the provider.")),
            ("circuit_id", schema::computed_number("NetBox ID of the circuit.")),
            ("term_side", schema::computed_string("Side of the circuit, `A` or `Z`.")),
            ("site", schema::computed_string("Name of the terminating site.")),
            ("site_id", schema::computed_number("ID of the terminating site.")),
            ("provider_network", schema::computed_string("Name of the terminating provider network.")),
            ("provider_network_id", schema::computed_number("ID of the terminating provider network.")),
            ("termination_type", schema::computed_string("Content type of the termination point.")),
            ("termination_id", schema::computed_number("ID of the termination point.")),
            ("port_speed", schema::computed_number("Physical port speed in Kbps.")),
            ("upstream_speed", schema::computed_number("Upstream speed in Kbps when it differs.")),
            ("xconnect_id", schema::computed_string("Cross-connect ID.")),
            ("pp_info", schema::computed_string("Patch panel and port.")),
            ("description", schema::computed_string("Brief description.")),
            ("mark_connected", schema::computed_bool("Whether the termination is treated as connected.")),
            ("display_name", schema::display_name("circuit termination")),
            ("tags", schema::tags("circuit termination")),
            ("custom_fields", schema::custom_fields("circuit termination")),
        ]
    }

    fn lookup(model: &CircuitTerminationModel) -> Lookup {
        Lookup::new(CircuitTermination::KIND).id("id", &model.id)
    }

    fn map(termination: &CircuitTermination, model: &mut CircuitTerminationModel) {
        model.id = id_string(termination.id);
        model.circuit = string_value(termination.circuit.as_ref().and_then(|c| c.cid.as_deref()));
        model.circuit_id = reference_id(termination.circuit.as_ref());
        model.term_side = string_value(termination.term_side.as_deref());
        model.site = reference_name(termination.site.as_ref());
        model.site_id = reference_id(termination.site.as_ref());
        model.provider_network = reference_name(termination.provider_network.as_ref());
        model.provider_network_id = reference_id(termination.provider_network.as_ref());
        model.termination_type = string_value(termination.termination_type.as_deref());
        model.termination_id = int_value(termination.termination_id);
        model.port_speed = int_value(termination.port_speed);
        model.upstream_speed = int_value(termination.upstream_speed);
        model.xconnect_id = string_value(termination.xconnect_id.as_deref());
        model.pp_info = string_value(termination.pp_info.as_deref());
        model.description = string_value(termination.description.as_deref());
        model.mark_connected = bool_value(termination.mark_connected);
        model.display_name = string_value(termination.display.as_deref());
        model.tags = tags_value(&termination.tags);
        model.custom_fields = custom_fields_value(&termination.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderAccountModel {
    pub id: Value<String>,
    pub account: Value<String>,
    pub provider_id: Value<i64>,
    pub provider: Value<String>,
    pub name: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_provider_account`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderAccountDataSource;

impl NetBoxDataSource for ProviderAccountDataSource {
    type Object = ProviderAccount;
    type Model = ProviderAccountModel;
    const TYPE_NAME: &'static str = "provider_account";

    fn description() -> &'static str {
        "Use this data source to get information about a circuit provider account in NetBox. Set `provider_id` to narrow a lookup by `account`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the provider account. Takes precedence over `account`.")),
            ("account", schema::lookup_string("Account number.")),
            ("provider_id", schema::lookup_number("ID of the provider. Narrows a lookup by `account`.")),
            ("provider", schema::computed_string("Name of the provider.")),
            ("name", schema::computed_string("Name of the account.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("provider account")),
            ("tags", schema::tags("provider account")),
            ("custom_fields", schema::custom_fields("provider account")),
        ]
    }

    fn lookup(model: &ProviderAccountModel) -> Lookup {
        Lookup::new(ProviderAccount::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("account", "account", &model.account),
            KeyPart::optional("provider_id", "provider_id", &model.provider_id),
        ])
    }

    fn map(account: &ProviderAccount, model: &mut ProviderAccountModel) {
        model.id = id_string(account.id);
        model.account = string_value(Some(&account.account));
        model.provider_id = reference_id(account.provider.as_ref());
        model.provider = reference_name(account.provider.as_ref());
        model.name = string_value(account.name.as_deref());
        model.description = string_value(account.description.as_deref());
        model.comments = string_value(account.comments.as_deref());
        model.display_name = string_value(account.display.as_deref());
        model.tags = tags_value(&account.tags);
        model.custom_fields = custom_fields_value(&account.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderNetworkModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub provider_id: Value<i64>,
    pub provider: Value<String>,
    pub service_id: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_provider_network`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProviderNetworkDataSource;

impl NetBoxDataSource for ProviderNetworkDataSource {
    type Object = ProviderNetwork;
    type Model = ProviderNetworkModel;
    const TYPE_NAME: &'static str = "provider_network";

    fn description() -> &'static str {
        "Use this data source to get information about a provider network in NetBox. Set `provider_id` to narrow a lookup by `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the provider network. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the provider network.")),
            ("provider_id", schema::lookup_number("ID of the provider. Narrows a lookup by `name`.")),
            ("provider", schema::computed_string("Name of the provider.")),
            ("service_id", schema::computed_string("Service ID assigned by the provider.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("provider network")),
            ("tags", schema::tags("provider network")),
            ("custom_fields", schema::custom_fields("provider network")),
        ]
    }

    fn lookup(model: &ProviderNetworkModel) -> Lookup {
        Lookup::new(ProviderNetwork::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("name", "name", &model.name),
            KeyPart::optional("provider_id", "provider_id", &model.provider_id),
        ])
    }

    fn map(network: &ProviderNetwork, model: &mut ProviderNetworkModel) {
        model.id = id_string(network.id);
        model.name = string_value(Some(&network.name));
        model.provider_id = reference_id(network.provider.as_ref());
        model.provider = reference_name(network.provider.as_ref());
        model.service_id = string_value(network.service_id.as_deref());
        model.description = string_value(network.description.as_deref());
        model.comments = string_value(network.comments.as_deref());
        model.display_name = string_value(network.display.as_deref());
        model.tags = tags_value(&network.tags);
        model.custom_fields = custom_fields_value(&network.custom_fields);
    }
}
