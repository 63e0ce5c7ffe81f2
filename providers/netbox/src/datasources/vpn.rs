//! VPN data sources: tunnels and their terminations, L2VPNs, and the IKE
//! and IPSec building blocks.

use super::{slugged, NetBoxDataSource};
use crate::lookup::{KeyPart, Lookup, LookupValue, Reference};
use crate::mapping::*;
use crate::schema;
use netbox_client::{
    IkePolicy, IkeProposal, IpsecProposal, L2vpn, NetBoxObject, Tunnel, TunnelGroup, TunnelTermination,
};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub status: Value<String>,
    pub group: Value<String>,
    pub group_id: Value<i64>,
    pub encapsulation: Value<String>,
    pub ipsec_profile: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub tunnel_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_tunnel`
#[derive(Debug, Clone, Copy, Default)]
pub struct TunnelDataSource;

impl NetBoxDataSource for TunnelDataSource {
    type Object = Tunnel;
    type Model = TunnelModel;
    const TYPE_NAME: &'static str = "tunnel";

    fn description() -> &'static str {
        "Use this data source to get information about a VPN tunnel in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the tunnel. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the tunnel.")),
            ("status", schema::computed_string("Operational status (planned, active, disabled).")),
            ("group", schema::computed_string("Name of the tunnel group.")),
            ("group_id", schema::computed_number("ID of the tunnel group.")),
            ("encapsulation", schema::computed_string("Encapsulation, e.g. `ipsec-tunnel` or `gre`.")),
            ("ipsec_profile", schema::computed_string("Name of the IPSec profile.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("tunnel_id", schema::computed_number("Numeric tunnel identifier.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("tunnel")),
            ("tags", schema::tags("tunnel")),
            ("custom_fields", schema::custom_fields("tunnel")),
        ]
    }

    fn lookup(model: &TunnelModel) -> Lookup {
        Lookup::new(Tunnel::KIND).id("id", &model.id).key("name", "name", &model.name)
    }

    fn map(tunnel: &Tunnel, model: &mut TunnelModel) {
        model.id = id_string(tunnel.id);
        model.name = string_value(Some(&tunnel.name));
        model.status = choice_value(tunnel.status.as_ref());
        model.group = reference_name(tunnel.group.as_ref());
        model.group_id = reference_id(tunnel.group.as_ref());
        model.encapsulation = choice_value(tunnel.encapsulation.as_ref());
        model.ipsec_profile = reference_name(tunnel.ipsec_profile.as_ref());
        model.tenant = reference_name(tunnel.tenant.as_ref());
        model.tenant_id = reference_id(tunnel.tenant.as_ref());
        model.tunnel_id = int_value(tunnel.tunnel_id);
        model.description = string_value(tunnel.description.as_deref());
        model.comments = string_value(tunnel.comments.as_deref());
        model.display_name = string_value(tunnel.display.as_deref());
        model.tags = tags_value(&tunnel.tags);
        model.custom_fields = custom_fields_value(&tunnel.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelGroupModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_tunnel_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct TunnelGroupDataSource;

impl NetBoxDataSource for TunnelGroupDataSource {
    type Object = TunnelGroup;
    type Model = TunnelGroupModel;
    const TYPE_NAME: &'static str = "tunnel_group";

    fn description() -> &'static str {
        "Use this data source to get information about a tunnel group in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the tunnel group. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the tunnel group.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("tunnel group")),
            ("tags", schema::tags("tunnel group")),
            ("custom_fields", schema::custom_fields("tunnel group")),
        ]
    }

    fn lookup(model: &TunnelGroupModel) -> Lookup {
        slugged::<TunnelGroup>(&model.id, &model.slug, &model.name)
    }

    fn map(group: &TunnelGroup, model: &mut TunnelGroupModel) {
        model.id = id_string(group.id);
        model.name = string_value(Some(&group.name));
        model.slug = string_value(Some(&group.slug));
        model.description = string_value(group.description.as_deref());
        model.display_name = string_value(group.display.as_deref());
        model.tags = tags_value(&group.tags);
        model.custom_fields = custom_fields_value(&group.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunnelTerminationModel {
    pub id: Value<String>,
    pub tunnel: Value<String>,
    pub tunnel_name: Value<String>,
    pub role: Value<String>,
    pub termination_type: Value<String>,
    pub termination_id: Value<i64>,
    pub outside_ip: Value<String>,
    pub outside_ip_id: Value<i64>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

const TUNNELS: Reference = Reference::by_name(Tunnel::ENDPOINT, Tunnel::KIND);

/// `netbox_tunnel_termination`
#[derive(Debug, Clone, Copy, Default)]
pub struct TunnelTerminationDataSource;

impl NetBoxDataSource for TunnelTerminationDataSource {
    type Object = TunnelTermination;
    type Model = TunnelTerminationModel;
    const TYPE_NAME: &'static str = "tunnel_termination";

    fn description() -> &'static str {
        "Use this data source to get information about a tunnel termination in NetBox. A tunnel usually has one termination per role, so `role` narrows a lookup by tunnel."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the termination. Takes precedence over `tunnel` and `tunnel_name`.")),
            ("tunnel", schema::lookup_string("ID or name of the tunnel. Takes precedence over `tunnel_name`.")),
            ("tunnel_name", schema::lookup_string("Name of the tunnel.")),
            ("role", schema::lookup_string("Termination role (peer, hub or spoke). Narrows a lookup by tunnel.")),
            ("termination_type", schema::computed_string("Content type of the terminating object, e.g. `dcim.interface`.")),
            ("termination_id", schema::computed_number("ID of the terminating object.")),
            ("outside_ip", schema::computed_string("Outside IP address with prefix length.")),
            ("outside_ip_id", schema::computed_number("ID of the outside IP address.")),
            ("display_name", schema::display_name("tunnel termination")),
            ("tags", schema::tags("tunnel termination")),
            ("custom_fields", schema::custom_fields("tunnel termination")),
        ]
    }

    fn lookup(model: &TunnelTerminationModel) -> Lookup {
        Lookup::new(TunnelTermination::KIND)
            .id("id", &model.id)
            .composite(vec![
                KeyPart::required("tunnel", "tunnel_id", &model.tunnel).reference(TUNNELS),
                KeyPart::optional("role", "role", &model.role),
            ])
            .composite(vec![
                KeyPart::required("tunnel_name", "tunnel", &model.tunnel_name),
                KeyPart::optional("role", "role", &model.role),
            ])
    }

    fn map(termination: &TunnelTermination, model: &mut TunnelTerminationModel) {
        model.id = id_string(termination.id);
        // A tunnel given by name stays as configured.
        if model.tunnel.lookup_text().is_none() {
            model.tunnel = reference_id_string(termination.tunnel.as_ref());
        }
        model.tunnel_name = reference_name(termination.tunnel.as_ref());
        model.role = choice_value(termination.role.as_ref());
        model.termination_type = string_value(termination.termination_type.as_deref());
        model.termination_id = int_value(termination.termination_id);
        model.outside_ip = string_value(termination.outside_ip.as_ref().and_then(|ip| ip.address.as_deref()));
        model.outside_ip_id = reference_id(termination.outside_ip.as_ref());
        model.display_name = string_value(termination.display.as_deref());
        model.tags = tags_value(&termination.tags);
        model.custom_fields = custom_fields_value(&termination.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct L2vpnModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    #[serde(rename = "type")]
    pub l2vpn_type: Value<String>,
    pub identifier: Value<i64>,
    pub import_targets: Value<Vec<String>>,
    pub export_targets: Value<Vec<String>>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_l2vpn`
#[derive(Debug, Clone, Copy, Default)]
pub struct L2vpnDataSource;

impl NetBoxDataSource for L2vpnDataSource {
    type Object = L2vpn;
    type Model = L2vpnModel;
    const TYPE_NAME: &'static str = "l2vpn";

    fn description() -> &'static str {
        "Use this data source to get information about an L2VPN in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the L2VPN. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the L2VPN.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("type", schema::computed_string("L2VPN type, e.g. `vxlan-evpn`.")),
            ("identifier", schema::computed_number("Numeric identifier such as a VNI.")),
            ("import_targets", schema::computed_string_list("Import route targets.")),
            ("export_targets", schema::computed_string_list("Export route targets.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("L2VPN")),
            ("tags", schema::tags("L2VPN")),
            ("custom_fields", schema::custom_fields("L2VPN")),
        ]
    }

    fn lookup(model: &L2vpnModel) -> Lookup {
        slugged::<L2vpn>(&model.id, &model.slug, &model.name)
    }

    fn map(l2vpn: &L2vpn, model: &mut L2vpnModel) {
        model.id = id_string(l2vpn.id);
        model.name = string_value(Some(&l2vpn.name));
        model.slug = string_value(Some(&l2vpn.slug));
        model.l2vpn_type = choice_value(l2vpn.l2vpn_type.as_ref());
        model.identifier = int_value(l2vpn.identifier);
        model.import_targets = reference_names(&l2vpn.import_targets);
        model.export_targets = reference_names(&l2vpn.export_targets);
        model.tenant = reference_name(l2vpn.tenant.as_ref());
        model.tenant_id = reference_id(l2vpn.tenant.as_ref());
        model.description = string_value(l2vpn.description.as_deref());
        model.comments = string_value(l2vpn.comments.as_deref());
        model.display_name = string_value(l2vpn.display.as_deref());
        model.tags = tags_value(&l2vpn.tags);
        model.custom_fields = custom_fields_value(&l2vpn.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IkePolicyModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub version: Value<i64>,
    pub mode: Value<String>,
    pub proposals: Value<Vec<String>>,
    pub proposal_ids: Value<Vec<i64>>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_ike_policy`
#[derive(Debug, Clone, Copy, Default)]
pub struct IkePolicyDataSource;

impl NetBoxDataSource for IkePolicyDataSource {
    type Object = IkePolicy;
    type Model = IkePolicyModel;
    const TYPE_NAME: &'static str = "ike_policy";

    fn description() -> &'static str {
        "Use this data source to get information about an IKE policy in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the IKE policy. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the IKE policy.")),
            ("version", schema::computed_number("IKE version, 1 or 2.")),
            ("mode", schema::computed_string("IKEv1 mode, `aggressive` or `main`.")),
            ("proposals", schema::computed_string_list("Names of the IKE proposals.")),
            ("proposal_ids", schema::computed_number_list("IDs of the IKE proposals.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("IKE policy")),
            ("tags", schema::tags("IKE policy")),
            ("custom_fields", schema::custom_fields("IKE policy")),
        ]
    }

    fn lookup(model: &IkePolicyModel) -> Lookup {
        Lookup::new(IkePolicy::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(policy: &IkePolicy, model: &mut IkePolicyModel) {
        model.id = id_string(policy.id);
        model.name = string_value(Some(&policy.name));
        model.version = choice_number(policy.version.as_ref());
        model.mode = choice_value(policy.mode.as_ref());
        model.proposals = reference_names(&policy.proposals);
        model.proposal_ids = reference_ids(&policy.proposals);
        model.description = string_value(policy.description.as_deref());
        model.comments = string_value(policy.comments.as_deref());
        model.display_name = string_value(policy.display.as_deref());
        model.tags = tags_value(&policy.tags);
        model.custom_fields = custom_fields_value(&policy.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IkeProposalModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub authentication_method: Value<String>,
    pub encryption_algorithm: Value<String>,
    pub authentication_algorithm: Value<String>,
    pub group: Value<i64>,
    pub sa_lifetime: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_ike_proposal`
#[derive(Debug, Clone, Copy, Default)]
pub struct IkeProposalDataSource;

impl NetBoxDataSource for IkeProposalDataSource {
    type Object = IkeProposal;
    type Model = IkeProposalModel;
    const TYPE_NAME: &'static str = "ike_proposal";

    fn description() -> &'static str {
        "Use this data source to get information about an IKE proposal in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the IKE proposal. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the IKE proposal.")),
            ("authentication_method", schema::computed_string("Authentication method, e.g. `preshared-keys`.")),
            ("encryption_algorithm", schema::computed_string("Encryption algorithm, e.g. `aes-256-gcm`.")),
            ("authentication_algorithm", schema::computed_string("Authentication algorithm, e.g. `hmac-sha256`.")),
            ("group", schema::computed_number("Diffie-Hellman group.")),
            ("sa_lifetime", schema::computed_number("Security association lifetime in seconds.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("IKE proposal")),
            ("tags", schema::tags("IKE proposal")),
            ("custom_fields", schema::custom_fields("IKE proposal")),
        ]
    }

    fn lookup(model: &IkeProposalModel) -> Lookup {
        Lookup::new(IkeProposal::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(proposal: &IkeProposal, model: &mut IkeProposalModel) {
        model.id = id_string(proposal.id);
        model.name = string_value(Some(&proposal.name));
        model.authentication_method = choice_value(proposal.authentication_method.as_ref());
        model.encryption_algorithm = choice_value(proposal.encryption_algorithm.as_ref());
        model.authentication_algorithm = choice_value(proposal.authentication_algorithm.as_ref());
        model.group = choice_number(proposal.group.as_ref());
        model.sa_lifetime = int_value(proposal.sa_lifetime);
        model.description = string_value(proposal.description.as_deref());
        model.comments = string_value(proposal.comments.as_deref());
        model.display_name = string_value(proposal.display.as_deref());
        model.tags = tags_value(&proposal.tags);
        model.custom_fields = custom_fields_value(&proposal.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpsecProposalModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub encryption_algorithm: Value<String>,
    pub authentication_algorithm: Value<String>,
    pub sa_lifetime_seconds: Value<i64>,
    pub sa_lifetime_data: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_ipsec_proposal`
#[derive(Debug, Clone, Copy, Default)]
pub struct IpsecProposalDataSource;

impl NetBoxDataSource for IpsecProposalDataSource {
    type Object = IpsecProposal;
    type Model = IpsecProposalModel;
    const TYPE_NAME: &'static str = "ipsec_proposal";

    fn description() -> &'static str {
        "Use this data source to get information about an IPSec proposal in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the IPSec proposal. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the IPSec proposal.")),
            ("encryption_algorithm", schema::computed_string("Encryption algorithm.")),
            ("authentication_algorithm", schema::computed_string("Authentication algorithm.")),
            ("sa_lifetime_seconds", schema::computed_number("Security association lifetime in seconds.")),
            ("sa_lifetime_data", schema::computed_number("Security association lifetime in kilobytes.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("IPSec proposal")),
            ("tags", schema::tags("IPSec proposal")),
            ("custom_fields", schema::custom_fields("IPSec proposal")),
        ]
    }

    fn lookup(model: &IpsecProposalModel) -> Lookup {
        Lookup::new(IpsecProposal::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(proposal: &IpsecProposal, model: &mut IpsecProposalModel) {
        model.id = id_string(proposal.id);
        model.name = string_value(Some(&proposal.name));
        model.encryption_algorithm = choice_value(proposal.encryption_algorithm.as_ref());
        model.authentication_algorithm = choice_value(proposal.authentication_algorithm.as_ref());
        model.sa_lifetime_seconds = int_value(proposal.sa_lifetime_seconds);
        model.sa_lifetime_data = int_value(proposal.sa_lifetime_data);
        model.description = string_value(proposal.description.as_deref());
        model.comments = string_value(proposal.comments.as_deref());
        model.display_name = string_value(proposal.display.as_deref());
        model.tags = tags_value(&proposal.tags);
        model.custom_fields = custom_fields_value(&proposal.custom_fields);
    }
}
