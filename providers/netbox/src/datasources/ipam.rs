//! IPAM data sources.

use super::{slugged, NetBoxDataSource};
use crate::lookup::{KeyPart, Lookup};
use crate::mapping::*;
use crate::schema;
use netbox_client::{
    Aggregate, Asn, AsnRange, IPAddress, IpRange, NetBoxObject, Prefix, Rir, Role, RouteTarget, Service,
    ServiceTemplate, Vlan, VlanGroup, Vrf,
};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixModel {
    pub id: Value<String>,
    pub prefix: Value<String>,
    pub family: Value<i64>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub vrf: Value<String>,
    pub vrf_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub vlan: Value<String>,
    pub vlan_id: Value<i64>,
    pub status: Value<String>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub is_pool: Value<bool>,
    pub mark_utilized: Value<bool>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_prefix`
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixDataSource;

impl NetBoxDataSource for PrefixDataSource {
    type Object = Prefix;
    type Model = PrefixModel;
    const TYPE_NAME: &'static str = "prefix";

    fn description() -> &'static str {
        "Use this data source to get information about an IP prefix in NetBox. The same prefix may exist in several VRFs; set `vrf_id` to pick one."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the prefix. Takes precedence over `prefix`.")),
            ("prefix", schema::lookup_string("Prefix in CIDR notation, e.g. `10.0.0.0/24`.")),
            ("family", schema::computed_number("Address family (4 or 6).")),
            ("site", schema::computed_string("Name of the site.")),
            ("site_id", schema::computed_number("ID of the site.")),
            ("vrf", schema::computed_string("Name of the VRF.")),
            ("vrf_id", schema::lookup_number("ID of the VRF. Narrows a lookup by `prefix`.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("vlan", schema::computed_string("Display name of the VLAN.")),
            ("vlan_id", schema::computed_number("ID of the VLAN.")),
            ("status", schema::computed_string("Operational status.")),
            ("role", schema::computed_string("Name of the IPAM role.")),
            ("role_id", schema::computed_number("ID of the IPAM role.")),
            ("is_pool", schema::computed_bool("Whether all addresses in the prefix are usable.")),
            ("mark_utilized", schema::computed_bool("Whether the prefix is treated as fully utilized.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("prefix")),
            ("tags", schema::tags("prefix")),
            ("custom_fields", schema::custom_fields("prefix")),
        ]
    }

    fn lookup(model: &PrefixModel) -> Lookup {
        Lookup::new(Prefix::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("prefix", "prefix", &model.prefix),
            KeyPart::optional("vrf_id", "vrf_id", &model.vrf_id),
        ])
    }

    fn map(prefix: &Prefix, model: &mut PrefixModel) {
        model.id = id_string(prefix.id);
        model.prefix = string_value(Some(&prefix.prefix));
        model.family = choice_number(prefix.family.as_ref());
        model.site = reference_name(prefix.site.as_ref());
        model.site_id = reference_id(prefix.site.as_ref());
        model.vrf = reference_name(prefix.vrf.as_ref());
        model.vrf_id = reference_id(prefix.vrf.as_ref());
        model.tenant = reference_name(prefix.tenant.as_ref());
        model.tenant_id = reference_id(prefix.tenant.as_ref());
        model.vlan = reference_display(prefix.vlan.as_ref());
        model.vlan_id = reference_id(prefix.vlan.as_ref());
        model.status = choice_value(prefix.status.as_ref());
        model.role = reference_name(prefix.role.as_ref());
        model.role_id = reference_id(prefix.role.as_ref());
        model.is_pool = bool_value(prefix.is_pool);
        model.mark_utilized = bool_value(prefix.mark_utilized);
        model.description = string_value(prefix.description.as_deref());
        model.comments = string_value(prefix.comments.as_deref());
        model.display_name = string_value(prefix.display.as_deref());
        model.tags = tags_value(&prefix.tags);
        model.custom_fields = custom_fields_value(&prefix.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpAddressModel {
    pub id: Value<String>,
    pub address: Value<String>,
    pub family: Value<i64>,
    pub vrf: Value<String>,
    pub vrf_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub status: Value<String>,
    pub role: Value<String>,
    pub assigned_object_type: Value<String>,
    pub assigned_object_id: Value<i64>,
    pub nat_inside: Value<String>,
    pub dns_name: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_ip_address`
#[derive(Debug, Clone, Copy, Default)]
pub struct IpAddressDataSource;

impl NetBoxDataSource for IpAddressDataSource {
    type Object = IPAddress;
    type Model = IpAddressModel;
    const TYPE_NAME: &'static str = "ip_address";

    fn description() -> &'static str {
        "Use this data source to get information about an IP address in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the IP address. Takes precedence over `address`.")),
            ("address", schema::lookup_string("Address with prefix length, e.g. `10.0.0.1/24`.")),
            ("family", schema::computed_number("Address family (4 or 6).")),
            ("vrf", schema::computed_string("Name of the VRF.")),
            ("vrf_id", schema::lookup_number("ID of the VRF. Narrows a lookup by `address`.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("status", schema::computed_string("Operational status.")),
            ("role", schema::computed_string("Functional role, e.g. `loopback` or `vip`.")),
            ("assigned_object_type", schema::computed_string("Content type of the assigned object, e.g. `dcim.interface`.")),
            ("assigned_object_id", schema::computed_number("ID of the assigned object.")),
            ("nat_inside", schema::computed_string("Inside address this address is NATed from.")),
            ("dns_name", schema::computed_string("Hostname or FQDN.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("IP address")),
            ("tags", schema::tags("IP address")),
            ("custom_fields", schema::custom_fields("IP address")),
        ]
    }

    fn lookup(model: &IpAddressModel) -> Lookup {
        Lookup::new(IPAddress::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("address", "address", &model.address),
            KeyPart::optional("vrf_id", "vrf_id", &model.vrf_id),
        ])
    }

    fn map(ip: &IPAddress, model: &mut IpAddressModel) {
        model.id = id_string(ip.id);
        model.address = string_value(Some(&ip.address));
        model.family = choice_number(ip.family.as_ref());
        model.vrf = reference_name(ip.vrf.as_ref());
        model.vrf_id = reference_id(ip.vrf.as_ref());
        model.tenant = reference_name(ip.tenant.as_ref());
        model.tenant_id = reference_id(ip.tenant.as_ref());
        model.status = choice_value(ip.status.as_ref());
        model.role = choice_value(ip.role.as_ref());
        model.assigned_object_type = string_value(ip.assigned_object_type.as_deref());
        model.assigned_object_id = int_value(ip.assigned_object_id);
        model.nat_inside = string_value(ip.nat_inside.as_ref().and_then(|n| n.address.as_deref()));
        model.dns_name = string_value(ip.dns_name.as_deref());
        model.description = string_value(ip.description.as_deref());
        model.comments = string_value(ip.comments.as_deref());
        model.display_name = string_value(ip.display.as_deref());
        model.tags = tags_value(&ip.tags);
        model.custom_fields = custom_fields_value(&ip.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateModel {
    pub id: Value<String>,
    pub prefix: Value<String>,
    pub rir: Value<String>,
    pub rir_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub date_added: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_aggregate`
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateDataSource;

impl NetBoxDataSource for AggregateDataSource {
    type Object = Aggregate;
    type Model = AggregateModel;
    const TYPE_NAME: &'static str = "aggregate";

    fn description() -> &'static str {
        "Use this data source to get information about an aggregate (a top-level allocation from a RIR) in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the aggregate. Takes precedence over `prefix`.")),
            ("prefix", schema::lookup_string("Aggregate prefix in CIDR notation.")),
            ("rir", schema::computed_string("Name of the RIR.")),
            ("rir_id", schema::computed_number("ID of the RIR.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("date_added", schema::computed_string("Date the aggregate was allocated.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("aggregate")),
            ("tags", schema::tags("aggregate")),
            ("custom_fields", schema::custom_fields("aggregate")),
        ]
    }

    fn lookup(model: &AggregateModel) -> Lookup {
        Lookup::new(Aggregate::KIND)
            .id("id", &model.id)
            .key("prefix", "prefix", &model.prefix)
    }

    fn map(aggregate: &Aggregate, model: &mut AggregateModel) {
        model.id = id_string(aggregate.id);
        model.prefix = string_value(Some(&aggregate.prefix));
        model.rir = reference_name(aggregate.rir.as_ref());
        model.rir_id = reference_id(aggregate.rir.as_ref());
        model.tenant = reference_name(aggregate.tenant.as_ref());
        model.tenant_id = reference_id(aggregate.tenant.as_ref());
        model.date_added = string_value(aggregate.date_added.as_deref());
        model.description = string_value(aggregate.description.as_deref());
        model.comments = string_value(aggregate.comments.as_deref());
        model.display_name = string_value(aggregate.display.as_deref());
        model.tags = tags_value(&aggregate.tags);
        model.custom_fields = custom_fields_value(&aggregate.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnModel {
    pub id: Value<String>,
    pub asn: Value<i64>,
    pub rir: Value<String>,
    pub rir_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub site_count: Value<i64>,
    pub provider_count: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_asn`
#[derive(Debug, Clone, Copy, Default)]
pub struct AsnDataSource;

impl NetBoxDataSource for AsnDataSource {
    type Object = Asn;
    type Model = AsnModel;
    const TYPE_NAME: &'static str = "asn";

    fn description() -> &'static str {
        "Use this data source to get information about an autonomous system number in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the ASN record. Takes precedence over `asn`.")),
            ("asn", schema::lookup_number("The 16- or 32-bit autonomous system number.")),
            ("rir", schema::computed_string("Name of the RIR.")),
            ("rir_id", schema::computed_number("ID of the RIR.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("site_count", schema::computed_number("Number of sites using this ASN.")),
            ("provider_count", schema::computed_number("Number of circuit providers using this ASN.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("ASN")),
            ("tags", schema::tags("ASN")),
            ("custom_fields", schema::custom_fields("ASN")),
        ]
    }

    fn lookup(model: &AsnModel) -> Lookup {
        Lookup::new(Asn::KIND).id("id", &model.id).key("asn", "asn", &model.asn)
    }

    fn map(asn: &Asn, model: &mut AsnModel) {
        model.id = id_string(asn.id);
        model.asn = Value::Value(asn.asn);
        model.rir = reference_name(asn.rir.as_ref());
        model.rir_id = reference_id(asn.rir.as_ref());
        model.tenant = reference_name(asn.tenant.as_ref());
        model.tenant_id = reference_id(asn.tenant.as_ref());
        model.site_count = int_value(asn.site_count);
        model.provider_count = int_value(asn.provider_count);
        model.description = string_value(asn.description.as_deref());
        model.comments = string_value(asn.comments.as_deref());
        model.display_name = string_value(asn.display.as_deref());
        model.tags = tags_value(&asn.tags);
        model.custom_fields = custom_fields_value(&asn.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RirModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub is_private: Value<bool>,
    pub aggregate_count: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_rir`
#[derive(Debug, Clone, Copy, Default)]
pub struct RirDataSource;

impl NetBoxDataSource for RirDataSource {
    type Object = Rir;
    type Model = RirModel;
    const TYPE_NAME: &'static str = "rir";

    fn description() -> &'static str {
        "Use this data source to get information about a Regional Internet Registry in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the RIR. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the RIR.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("is_private", schema::computed_bool("Whether the RIR manages private address space.")),
            ("aggregate_count", schema::computed_number("Number of aggregates allocated from this RIR.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("RIR")),
            ("tags", schema::tags("RIR")),
            ("custom_fields", schema::custom_fields("RIR")),
        ]
    }

    fn lookup(model: &RirModel) -> Lookup {
        slugged::<Rir>(&model.id, &model.slug, &model.name)
    }

    fn map(rir: &Rir, model: &mut RirModel) {
        model.id = id_string(rir.id);
        model.name = string_value(Some(&rir.name));
        model.slug = string_value(Some(&rir.slug));
        model.is_private = bool_value(rir.is_private);
        model.aggregate_count = int_value(rir.aggregate_count);
        model.description = string_value(rir.description.as_deref());
        model.display_name = string_value(rir.display.as_deref());
        model.tags = tags_value(&rir.tags);
        model.custom_fields = custom_fields_value(&rir.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub weight: Value<i64>,
    pub prefix_count: Value<i64>,
    pub vlan_count: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_role`, the IPAM role assigned to prefixes and VLANs
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleDataSource;

impl NetBoxDataSource for RoleDataSource {
    type Object = Role;
    type Model = RoleModel;
    const TYPE_NAME: &'static str = "role";

    fn description() -> &'static str {
        "Use this data source to get information about an IPAM role (the function of a prefix or VLAN) in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the role. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the role.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("weight", schema::computed_number("Sort weight.")),
            ("prefix_count", schema::computed_number("Number of prefixes with this role.")),
            ("vlan_count", schema::computed_number("Number of VLANs with this role.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("role")),
            ("tags", schema::tags("role")),
            ("custom_fields", schema::custom_fields("role")),
        ]
    }

    fn lookup(model: &RoleModel) -> Lookup {
        slugged::<Role>(&model.id, &model.slug, &model.name)
    }

    fn map(role: &Role, model: &mut RoleModel) {
        model.id = id_string(role.id);
        model.name = string_value(Some(&role.name));
        model.slug = string_value(Some(&role.slug));
        model.weight = int_value(role.weight);
        model.prefix_count = int_value(role.prefix_count);
        model.vlan_count = int_value(role.vlan_count);
        model.description = string_value(role.description.as_deref());
        model.display_name = string_value(role.display.as_deref());
        model.tags = tags_value(&role.tags);
        model.custom_fields = custom_fields_value(&role.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanModel {
    pub id: Value<String>,
    pub vid: Value<i64>,
    pub name: Value<String>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub group: Value<String>,
    pub group_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub status: Value<String>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_vlan`
#[derive(Debug, Clone, Copy, Default)]
pub struct VlanDataSource;

impl NetBoxDataSource for VlanDataSource {
    type Object = Vlan;
    type Model = VlanModel;
    const TYPE_NAME: &'static str = "vlan";

    fn description() -> &'static str {
        "Use this data source to get information about a VLAN in NetBox. A VLAN ID is usually reused across sites and groups, so `vid` can be combined with `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the VLAN object. Takes precedence over `vid` and `name`.")),
            ("vid", schema::lookup_number("802.1Q VLAN ID (1-4094). Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the VLAN. Narrows a lookup by `vid`.")),
            ("site", schema::computed_string("Name of the site.")),
            ("site_id", schema::computed_number("ID of the site.")),
            ("group", schema::computed_string("Name of the VLAN group.")),
            ("group_id", schema::computed_number("ID of the VLAN group.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("status", schema::computed_string("Operational status.")),
            ("role", schema::computed_string("Name of the IPAM role.")),
            ("role_id", schema::computed_number("ID of the IPAM role.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("VLAN")),
            ("tags", schema::tags("VLAN")),
            ("custom_fields", schema::custom_fields("VLAN")),
        ]
    }

    fn lookup(model: &VlanModel) -> Lookup {
        Lookup::new(Vlan::KIND)
            .id("id", &model.id)
            .composite(vec![
                KeyPart::required("vid", "vid", &model.vid),
                KeyPart::optional("name", "name", &model.name),
            ])
            .key("name", "name", &model.name)
    }

    fn map(vlan: &Vlan, model: &mut VlanModel) {
        model.id = id_string(vlan.id);
        model.vid = Value::Value(vlan.vid);
        model.name = string_value(Some(&vlan.name));
        model.site = reference_name(vlan.site.as_ref());
        model.site_id = reference_id(vlan.site.as_ref());
        model.group = reference_name(vlan.group.as_ref());
        model.group_id = reference_id(vlan.group.as_ref());
        model.tenant = reference_name(vlan.tenant.as_ref());
        model.tenant_id = reference_id(vlan.tenant.as_ref());
        model.status = choice_value(vlan.status.as_ref());
        model.role = reference_name(vlan.role.as_ref());
        model.role_id = reference_id(vlan.role.as_ref());
        model.description = string_value(vlan.description.as_deref());
        model.comments = string_value(vlan.comments.as_deref());
        model.display_name = string_value(vlan.display.as_deref());
        model.tags = tags_value(&vlan.tags);
        model.custom_fields = custom_fields_value(&vlan.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanGroupModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub scope_type: Value<String>,
    pub scope_id: Value<i64>,
    pub vlan_count: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_vlan_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct VlanGroupDataSource;

impl NetBoxDataSource for VlanGroupDataSource {
    type Object = VlanGroup;
    type Model = VlanGroupModel;
    const TYPE_NAME: &'static str = "vlan_group";

    fn description() -> &'static str {
        "Use this data source to get information about a VLAN group in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the VLAN group. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the VLAN group.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("scope_type", schema::computed_string("Content type of the scope, e.g. `dcim.site`.")),
            ("scope_id", schema::computed_number("ID of the scope object.")),
            ("vlan_count", schema::computed_number("Number of VLANs in the group.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("VLAN group")),
            ("tags", schema::tags("VLAN group")),
            ("custom_fields", schema::custom_fields("VLAN group")),
        ]
    }

    fn lookup(model: &VlanGroupModel) -> Lookup {
        slugged::<VlanGroup>(&model.id, &model.slug, &model.name)
    }

    fn map(group: &VlanGroup, model: &mut VlanGroupModel) {
        model.id = id_string(group.id);
        model.name = string_value(Some(&group.name));
        model.slug = string_value(Some(&group.slug));
        model.scope_type = string_value(group.scope_type.as_deref());
        model.scope_id = int_value(group.scope_id);
        model.vlan_count = int_value(group.vlan_count);
        model.description = string_value(group.description.as_deref());
        model.display_name = string_value(group.display.as_deref());
        model.tags = tags_value(&group.tags);
        model.custom_fields = custom_fields_value(&group.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VrfModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub rd: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub enforce_unique: Value<bool>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_vrf`
#[derive(Debug, Clone, Copy, Default)]
pub struct VrfDataSource;

impl NetBoxDataSource for VrfDataSource {
    type Object = Vrf;
    type Model = VrfModel;
    const TYPE_NAME: &'static str = "vrf";

    fn description() -> &'static str {
        "Use this data source to get information about a VRF in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the VRF. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the VRF.")),
            ("rd", schema::computed_string("Route distinguisher (RFC 4364).")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("enforce_unique", schema::computed_bool("Whether duplicate prefixes and addresses are prevented.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("VRF")),
            ("tags", schema::tags("VRF")),
            ("custom_fields", schema::custom_fields("VRF")),
        ]
    }

    fn lookup(model: &VrfModel) -> Lookup {
        Lookup::new(Vrf::KIND).id("id", &model.id).key("name", "name", &model.name)
    }

    fn map(vrf: &Vrf, model: &mut VrfModel) {
        model.id = id_string(vrf.id);
        model.name = string_value(Some(&vrf.name));
        model.rd = string_value(vrf.rd.as_deref());
        model.tenant = reference_name(vrf.tenant.as_ref());
        model.tenant_id = reference_id(vrf.tenant.as_ref());
        model.enforce_unique = bool_value(vrf.enforce_unique);
        model.description = string_value(vrf.description.as_deref());
        model.comments = string_value(vrf.comments.as_deref());
        model.display_name = string_value(vrf.display.as_deref());
        model.tags = tags_value(&vrf.tags);
        model.custom_fields = custom_fields_value(&vrf.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// IP range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpRangeModel {
    pub id: Value<String>,
    pub start_address: Value<String>,
    pub end_address: Value<String>,
    pub size: Value<i64>,
    pub vrf_id: Value<i64>,
    pub vrf: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub status: Value<String>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub mark_utilized: Value<bool>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_ip_range`
#[derive(Debug, Clone, Copy, Default)]
pub struct IpRangeDataSource;

impl NetBoxDataSource for IpRangeDataSource {
    type Object = IpRange;
    type Model = IpRangeModel;
    const TYPE_NAME: &'static str = "ip_range";

    fn description() -> &'static str {
        "Use this data source to get information about an IP range in NetBox. The same start address may exist in several VRFs; set `vrf_id` to pick one."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the IP range. Takes precedence over `start_address`.")),
            ("start_address", schema::lookup_string("First address of the range with prefix length, e.g. `10.0.0.10/24`.")),
            ("end_address", schema::computed_string("Last address of the range with prefix length.")),
            ("size", schema::computed_number("Number of addresses in the range.")),
            ("vrf_id", schema::lookup_number("ID of the VRF. Narrows a lookup by `start_address`.")),
            ("vrf", schema::computed_string("Name of the VRF.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("status", schema::computed_string("Operational status.")),
            ("role", schema::computed_string("Name of the IPAM role.")),
            ("role_id", schema::computed_number("ID of the IPAM role.")),
            ("mark_utilized", schema::computed_bool("Whether the range is reported fully utilized.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("IP range")),
            ("tags", schema::tags("IP range")),
            ("custom_fields", schema::custom_fields("IP range")),
        ]
    }

    fn lookup(model: &IpRangeModel) -> Lookup {
        Lookup::new(IpRange::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("start_address", "start_address", &model.start_address),
            KeyPart::optional("vrf_id", "vrf_id", &model.vrf_id),
        ])
    }

    fn map(range: &IpRange, model: &mut IpRangeModel) {
        model.id = id_string(range.id);
        model.start_address = string_value(Some(&range.start_address));
        model.end_address = string_value(Some(&range.end_address));
        model.size = int_value(range.size);
        model.vrf_id = reference_id(range.vrf.as_ref());
        model.vrf = reference_name(range.vrf.as_ref());
        model.tenant = reference_name(range.tenant.as_ref());
        model.tenant_id = reference_id(range.tenant.as_ref());
        model.status = choice_value(range.status.as_ref());
        model.role = reference_name(range.role.as_ref());
        model.role_id = reference_id(range.role.as_ref());
        model.mark_utilized = bool_value(range.mark_utilized);
        model.description = string_value(range.description.as_deref());
        model.comments = string_value(range.comments.as_deref());
        model.display_name = string_value(range.display.as_deref());
        model.tags = tags_value(&range.tags);
        model.custom_fields = custom_fields_value(&range.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// ASN range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsnRangeModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub rir: Value<String>,
    pub rir_id: Value<i64>,
    pub start: Value<i64>,
    pub end: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub asn_count: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_asn_range`
#[derive(Debug, Clone, Copy, Default)]
pub struct AsnRangeDataSource;

impl NetBoxDataSource for AsnRangeDataSource {
    type Object = AsnRange;
    type Model = AsnRangeModel;
    const TYPE_NAME: &'static str = "asn_range";

    fn description() -> &'static str {
        "Use this data source to get information about an ASN range in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the ASN range. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the ASN range.")),
            ("slug", schema::lookup_string("Slug of the ASN range. Takes precedence over `name`.")),
            ("rir", schema::computed_string("Name of the RIR.")),
            ("rir_id", schema::computed_number("ID of the RIR.")),
            ("start", schema::computed_number("First ASN of the range.")),
            ("end", schema::computed_number("Last ASN of the range.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("asn_count", schema::computed_number("Number of ASNs allocated from the range.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("ASN range")),
            ("tags", schema::tags("ASN range")),
            ("custom_fields", schema::custom_fields("ASN range")),
        ]
    }

    fn lookup(model: &AsnRangeModel) -> Lookup {
        slugged::<AsnRange>(&model.id, &model.slug, &model.name)
    }

    fn map(range: &AsnRange, model: &mut AsnRangeModel) {
        model.id = id_string(range.id);
        model.name = string_value(Some(&range.name));
        model.slug = string_value(Some(&range.slug));
        model.rir = reference_name(range.rir.as_ref());
        model.rir_id = reference_id(range.rir.as_ref());
        model.start = Value::Value(range.start);
        model.end = Value::Value(range.end);
        model.tenant = reference_name(range.tenant.as_ref());
        model.tenant_id = reference_id(range.tenant.as_ref());
        model.asn_count = int_value(range.asn_count);
        model.description = string_value(range.description.as_deref());
        model.display_name = string_value(range.display.as_deref());
        model.tags = tags_value(&range.tags);
        model.custom_fields = custom_fields_value(&range.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Route target
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteTargetModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_route_target`
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTargetDataSource;

impl NetBoxDataSource for RouteTargetDataSource {
    type Object = RouteTarget;
    type Model = RouteTargetModel;
    const TYPE_NAME: &'static str = "route_target";

    fn description() -> &'static str {
        "Use this data source to get information about a route target in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the route target. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Route target value, e.g. `65000:100`.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("route target")),
            ("tags", schema::tags("route target")),
            ("custom_fields", schema::custom_fields("route target")),
        ]
    }

    fn lookup(model: &RouteTargetModel) -> Lookup {
        Lookup::new(RouteTarget::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(target: &RouteTarget, model: &mut RouteTargetModel) {
        model.id = id_string(target.id);
        model.name = string_value(Some(&target.name));
        model.tenant = reference_name(target.tenant.as_ref());
        model.tenant_id = reference_id(target.tenant.as_ref());
        model.description = string_value(target.description.as_deref());
        model.comments = string_value(target.comments.as_deref());
        model.display_name = string_value(target.display.as_deref());
        model.tags = tags_value(&target.tags);
        model.custom_fields = custom_fields_value(&target.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Services
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_id: Value<i64>,
    pub device: Value<String>,
    pub virtual_machine_id: Value<i64>,
    pub virtual_machine: Value<String>,
    pub protocol: Value<String>,
    pub ports: Value<Vec<i64>>,
    pub ip_addresses: Value<Vec<String>>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_service`
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceDataSource;

impl NetBoxDataSource for ServiceDataSource {
    type Object = Service;
    type Model = ServiceModel;
    const TYPE_NAME: &'static str = "service";

    fn description() -> &'static str {
        "Use this data source to get information about a service in NetBox. Service names repeat across hosts; set `device_id` or `virtual_machine_id` to narrow a lookup by `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the service. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the service.")),
            ("device_id", schema::lookup_number("ID of the device running the service.")),
            ("device", schema::computed_string("Name of the device running the service.")),
            ("virtual_machine_id", schema::lookup_number("ID of the virtual machine running the service.")),
            ("virtual_machine", schema::computed_string("Name of the virtual machine running the service.")),
            ("protocol", schema::computed_string("Protocol, `tcp`, `udp` or `sctp`.")),
            ("ports", schema::computed_number_list("Port numbers.")),
            ("ip_addresses", schema::computed_string_list("Addresses the service listens on.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("service")),
            ("tags", schema::tags("service")),
            ("custom_fields", schema::custom_fields("service")),
        ]
    }

    fn lookup(model: &ServiceModel) -> Lookup {
        Lookup::new(Service::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("name", "name", &model.name),
            KeyPart::optional("device_id", "device_id", &model.device_id),
            KeyPart::optional("virtual_machine_id", "virtual_machine_id", &model.virtual_machine_id),
        ])
    }

    fn map(service: &Service, model: &mut ServiceModel) {
        model.id = id_string(service.id);
        model.name = string_value(Some(&service.name));
        model.device_id = reference_id(service.device.as_ref());
        model.device = reference_name(service.device.as_ref());
        model.virtual_machine_id = reference_id(service.virtual_machine.as_ref());
        model.virtual_machine = reference_name(service.virtual_machine.as_ref());
        model.protocol = choice_value(service.protocol.as_ref());
        model.ports = list_value(service.ports.clone());
        model.ip_addresses = list_value(
            service
                .ipaddresses
                .iter()
                .filter_map(|ip| ip.address.clone())
                .collect(),
        );
        model.description = string_value(service.description.as_deref());
        model.comments = string_value(service.comments.as_deref());
        model.display_name = string_value(service.display.as_deref());
        model.tags = tags_value(&service.tags);
        model.custom_fields = custom_fields_value(&service.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub protocol: Value<String>,
    pub ports: Value<Vec<i64>>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_service_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceTemplateDataSource;

impl NetBoxDataSource for ServiceTemplateDataSource {
    type Object = ServiceTemplate;
    type Model = ServiceTemplateModel;
    const TYPE_NAME: &'static str = "service_template";

    fn description() -> &'static str {
        "Use this data source to get information about a service template in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the service template. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the service template.")),
            ("protocol", schema::computed_string("Protocol, `tcp`, `udp` or `sctp`.")),
            ("ports", schema::computed_number_list("Port numbers.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("service template")),
            ("tags", schema::tags("service template")),
            ("custom_fields", schema::custom_fields("service template")),
        ]
    }

    fn lookup(model: &ServiceTemplateModel) -> Lookup {
        Lookup::new(ServiceTemplate::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(template: &ServiceTemplate, model: &mut ServiceTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.protocol = choice_value(template.protocol.as_ref());
        model.ports = list_value(template.ports.clone());
        model.description = string_value(template.description.as_deref());
        model.comments = string_value(template.comments.as_deref());
        model.display_name = string_value(template.display.as_deref());
        model.tags = tags_value(&template.tags);
        model.custom_fields = custom_fields_value(&template.custom_fields);
    }
}
