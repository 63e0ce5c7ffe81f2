//! DCIM data sources: sites, regions, locations, racks, devices and their
//! supporting types.

use super::{slugged, NetBoxDataSource};
use crate::lookup::{KeyPart, Lookup, LookupValue, Reference};
use crate::mapping::*;
use crate::schema;
use netbox_client::{
    Device, DeviceRole, DeviceType, Interface, Location, Manufacturer, NetBoxObject, Platform, Rack,
    RackRole, Region, Site, SiteGroup,
};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

// ---------------------------------------------------------------------------
// Site
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub status: Value<String>,
    pub region: Value<String>,
    pub region_id: Value<i64>,
    pub group: Value<String>,
    pub group_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub facility: Value<String>,
    pub time_zone: Value<String>,
    pub description: Value<String>,
    pub physical_address: Value<String>,
    pub shipping_address: Value<String>,
    pub latitude: Value<f64>,
    pub longitude: Value<f64>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_site`
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteDataSource;

impl NetBoxDataSource for SiteDataSource {
    type Object = Site;
    type Model = SiteModel;
    const TYPE_NAME: &'static str = "site";

    fn description() -> &'static str {
        "Use this data source to get information about a site in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the site. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the site.")),
            ("slug", schema::lookup_string("URL-friendly slug of the site. Takes precedence over `name`.")),
            ("status", schema::computed_string("Operational status (planned, staging, active, decommissioning, retired).")),
            ("region", schema::computed_string("Name of the region the site belongs to.")),
            ("region_id", schema::computed_number("ID of the region.")),
            ("group", schema::computed_string("Name of the site group.")),
            ("group_id", schema::computed_number("ID of the site group.")),
            ("tenant", schema::computed_string("Name of the tenant that owns the site.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("facility", schema::computed_string("Local facility identifier.")),
            ("time_zone", schema::computed_string("Time zone of the site.")),
            ("description", schema::computed_string("Brief description.")),
            ("physical_address", schema::computed_string("Physical address.")),
            ("shipping_address", schema::computed_string("Shipping address, if different.")),
            ("latitude", schema::computed_number("GPS latitude in decimal format.")),
            ("longitude", schema::computed_number("GPS longitude in decimal format.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("site")),
            ("tags", schema::tags("site")),
            ("custom_fields", schema::custom_fields("site")),
        ]
    }

    fn lookup(model: &SiteModel) -> Lookup {
        slugged::<Site>(&model.id, &model.slug, &model.name)
    }

    fn map(site: &Site, model: &mut SiteModel) {
        model.id = id_string(site.id);
        model.name = string_value(Some(&site.name));
        model.slug = string_value(Some(&site.slug));
        model.status = choice_value(site.status.as_ref());
        model.region = reference_name(site.region.as_ref());
        model.region_id = reference_id(site.region.as_ref());
        model.group = reference_name(site.group.as_ref());
        model.group_id = reference_id(site.group.as_ref());
        model.tenant = reference_name(site.tenant.as_ref());
        model.tenant_id = reference_id(site.tenant.as_ref());
        model.facility = string_value(site.facility.as_deref());
        model.time_zone = string_value(site.time_zone.as_deref());
        model.description = string_value(site.description.as_deref());
        model.physical_address = string_value(site.physical_address.as_deref());
        model.shipping_address = string_value(site.shipping_address.as_deref());
        model.latitude = float_value(site.latitude);
        model.longitude = float_value(site.longitude);
        model.comments = string_value(site.comments.as_deref());
        model.display_name = string_value(site.display.as_deref());
        model.tags = tags_value(&site.tags);
        model.custom_fields = custom_fields_value(&site.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Site group / region (hierarchical groupings)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub parent: Value<String>,
    pub parent_id: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

fn hierarchy_attributes(kind: &str) -> Vec<(&'static str, Attribute)> {
    vec![
        ("id", schema::lookup_string(&format!("ID of the {kind}. Takes precedence over `slug` and `name`."))),
        ("name", schema::lookup_string(&format!("Name of the {kind}."))),
        ("slug", schema::lookup_string(&format!("URL-friendly slug of the {kind}. Takes precedence over `name`."))),
        ("parent", schema::computed_string(&format!("Name of the parent {kind}."))),
        ("parent_id", schema::computed_number(&format!("ID of the parent {kind}."))),
        ("description", schema::computed_string("Brief description.")),
        ("display_name", schema::display_name(kind)),
        ("tags", schema::tags(kind)),
        ("custom_fields", schema::custom_fields(kind)),
    ]
}

/// `netbox_site_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct SiteGroupDataSource;

impl NetBoxDataSource for SiteGroupDataSource {
    type Object = SiteGroup;
    type Model = HierarchyModel;
    const TYPE_NAME: &'static str = "site_group";

    fn description() -> &'static str {
        "Use this data source to get information about a site group in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        hierarchy_attributes("site group")
    }

    fn lookup(model: &HierarchyModel) -> Lookup {
        slugged::<SiteGroup>(&model.id, &model.slug, &model.name)
    }

    fn map(group: &SiteGroup, model: &mut HierarchyModel) {
        model.id = id_string(group.id);
        model.name = string_value(Some(&group.name));
        model.slug = string_value(Some(&group.slug));
        model.parent = reference_name(group.parent.as_ref());
        model.parent_id = reference_id(group.parent.as_ref());
        model.description = string_value(group.description.as_deref());
        model.display_name = string_value(group.display.as_deref());
        model.tags = tags_value(&group.tags);
        model.custom_fields = custom_fields_value(&group.custom_fields);
    }
}

/// `netbox_region`
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionDataSource;

impl NetBoxDataSource for RegionDataSource {
    type Object = Region;
    type Model = HierarchyModel;
    const TYPE_NAME: &'static str = "region";

    fn description() -> &'static str {
        "Use this data source to get information about a region in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        hierarchy_attributes("region")
    }

    fn lookup(model: &HierarchyModel) -> Lookup {
        slugged::<Region>(&model.id, &model.slug, &model.name)
    }

    fn map(region: &Region, model: &mut HierarchyModel) {
        model.id = id_string(region.id);
        model.name = string_value(Some(&region.name));
        model.slug = string_value(Some(&region.slug));
        model.parent = reference_name(region.parent.as_ref());
        model.parent_id = reference_id(region.parent.as_ref());
        model.description = string_value(region.description.as_deref());
        model.display_name = string_value(region.display.as_deref());
        model.tags = tags_value(&region.tags);
        model.custom_fields = custom_fields_value(&region.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub parent: Value<String>,
    pub parent_id: Value<i64>,
    pub status: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub facility: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_location`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationDataSource;

impl NetBoxDataSource for LocationDataSource {
    type Object = Location;
    type Model = LocationModel;
    const TYPE_NAME: &'static str = "location";

    fn description() -> &'static str {
        "Use this data source to get information about a location (a room, floor or cage within a site) in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the location. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the location.")),
            ("slug", schema::lookup_string("URL-friendly slug of the location. Takes precedence over `name`.")),
            ("site", schema::computed_string("Name of the site.")),
            ("site_id", schema::computed_number("ID of the site.")),
            ("parent", schema::computed_string("Name of the parent location.")),
            ("parent_id", schema::computed_number("ID of the parent location.")),
            ("status", schema::computed_string("Operational status.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("facility", schema::computed_string("Local facility identifier.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("location")),
            ("tags", schema::tags("location")),
            ("custom_fields", schema::custom_fields("location")),
        ]
    }

    fn lookup(model: &LocationModel) -> Lookup {
        slugged::<Location>(&model.id, &model.slug, &model.name)
    }

    fn map(location: &Location, model: &mut LocationModel) {
        model.id = id_string(location.id);
        model.name = string_value(Some(&location.name));
        model.slug = string_value(Some(&location.slug));
        model.site = reference_name(location.site.as_ref());
        model.site_id = reference_id(location.site.as_ref());
        model.parent = reference_name(location.parent.as_ref());
        model.parent_id = reference_id(location.parent.as_ref());
        model.status = choice_value(location.status.as_ref());
        model.tenant = reference_name(location.tenant.as_ref());
        model.tenant_id = reference_id(location.tenant.as_ref());
        model.facility = string_value(location.facility.as_deref());
        model.description = string_value(location.description.as_deref());
        model.display_name = string_value(location.display.as_deref());
        model.tags = tags_value(&location.tags);
        model.custom_fields = custom_fields_value(&location.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Rack
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub location: Value<String>,
    pub location_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub status: Value<String>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub serial: Value<String>,
    pub asset_tag: Value<String>,
    pub form_factor: Value<String>,
    pub width: Value<i64>,
    pub u_height: Value<i64>,
    pub starting_unit: Value<i64>,
    pub desc_units: Value<bool>,
    pub weight: Value<f64>,
    pub max_weight: Value<i64>,
    pub weight_unit: Value<String>,
    pub mounting_depth: Value<i64>,
    pub airflow: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_rack`
#[derive(Debug, Clone, Copy, Default)]
pub struct RackDataSource;

impl NetBoxDataSource for RackDataSource {
    type Object = Rack;
    type Model = RackModel;
    const TYPE_NAME: &'static str = "rack";

    fn description() -> &'static str {
        "Use this data source to get information about a rack in NetBox. Rack names are only unique per location, so looking up by `name` fails when several racks share it."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the rack. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the rack.")),
            ("site", schema::computed_string("Name of the site.")),
            ("site_id", schema::computed_number("ID of the site.")),
            ("location", schema::computed_string("Name of the location.")),
            ("location_id", schema::computed_number("ID of the location.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("status", schema::computed_string("Operational status.")),
            ("role", schema::computed_string("Name of the rack role.")),
            ("role_id", schema::computed_number("ID of the rack role.")),
            ("serial", schema::computed_string("Serial number.")),
            ("asset_tag", schema::computed_string("Unique asset tag.")),
            ("form_factor", schema::computed_string("Physical form factor.")),
            ("width", schema::computed_number("Rail-to-rail width in inches.")),
            ("u_height", schema::computed_number("Height in rack units.")),
            ("starting_unit", schema::computed_number("Number of the lowest unit.")),
            ("desc_units", schema::computed_bool("Whether units are numbered top-to-bottom.")),
            ("weight", schema::computed_number("Weight of the rack.")),
            ("max_weight", schema::computed_number("Maximum load capacity.")),
            ("weight_unit", schema::computed_string("Unit for `weight` and `max_weight`.")),
            ("mounting_depth", schema::computed_number("Maximum mounting depth in millimeters.")),
            ("airflow", schema::computed_string("Airflow direction.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("rack")),
            ("tags", schema::tags("rack")),
            ("custom_fields", schema::custom_fields("rack")),
        ]
    }

    fn lookup(model: &RackModel) -> Lookup {
        Lookup::new(Rack::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(rack: &Rack, model: &mut RackModel) {
        model.id = id_string(rack.id);
        model.name = string_value(Some(&rack.name));
        model.site = reference_name(rack.site.as_ref());
        model.site_id = reference_id(rack.site.as_ref());
        model.location = reference_name(rack.location.as_ref());
        model.location_id = reference_id(rack.location.as_ref());
        model.tenant = reference_name(rack.tenant.as_ref());
        model.tenant_id = reference_id(rack.tenant.as_ref());
        model.status = choice_value(rack.status.as_ref());
        model.role = reference_name(rack.role.as_ref());
        model.role_id = reference_id(rack.role.as_ref());
        model.serial = string_value(rack.serial.as_deref());
        model.asset_tag = string_value(rack.asset_tag.as_deref());
        model.form_factor = choice_value(rack.form_factor.as_ref());
        model.width = choice_number(rack.width.as_ref());
        model.u_height = int_value(rack.u_height);
        model.starting_unit = int_value(rack.starting_unit);
        model.desc_units = bool_value(rack.desc_units);
        model.weight = float_value(rack.weight);
        model.max_weight = int_value(rack.max_weight);
        model.weight_unit = choice_value(rack.weight_unit.as_ref());
        model.mounting_depth = int_value(rack.mounting_depth);
        model.airflow = choice_value(rack.airflow.as_ref());
        model.description = string_value(rack.description.as_deref());
        model.comments = string_value(rack.comments.as_deref());
        model.display_name = string_value(rack.display.as_deref());
        model.tags = tags_value(&rack.tags);
        model.custom_fields = custom_fields_value(&rack.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Rack role / device role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackRoleModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub color: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_rack_role`
#[derive(Debug, Clone, Copy, Default)]
pub struct RackRoleDataSource;

impl NetBoxDataSource for RackRoleDataSource {
    type Object = RackRole;
    type Model = RackRoleModel;
    const TYPE_NAME: &'static str = "rack_role";

    fn description() -> &'static str {
        "Use this data source to get information about a rack role in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the rack role. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the rack role.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("color", schema::computed_string("Color as a 6 digit hex code.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("rack role")),
            ("tags", schema::tags("rack role")),
            ("custom_fields", schema::custom_fields("rack role")),
        ]
    }

    fn lookup(model: &RackRoleModel) -> Lookup {
        slugged::<RackRole>(&model.id, &model.slug, &model.name)
    }

    fn map(role: &RackRole, model: &mut RackRoleModel) {
        model.id = id_string(role.id);
        model.name = string_value(Some(&role.name));
        model.slug = string_value(Some(&role.slug));
        model.color = string_value(role.color.as_deref());
        model.description = string_value(role.description.as_deref());
        model.display_name = string_value(role.display.as_deref());
        model.tags = tags_value(&role.tags);
        model.custom_fields = custom_fields_value(&role.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceRoleModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub color: Value<String>,
    pub vm_role: Value<bool>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_device_role`
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceRoleDataSource;

impl NetBoxDataSource for DeviceRoleDataSource {
    type Object = DeviceRole;
    type Model = DeviceRoleModel;
    const TYPE_NAME: &'static str = "device_role";

    fn description() -> &'static str {
        "Use this data source to get information about a device role in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the device role. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the device role.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("color", schema::computed_string("Color as a 6 digit hex code.")),
            ("vm_role", schema::computed_bool("Whether virtual machines may be assigned this role.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("device role")),
            ("tags", schema::tags("device role")),
            ("custom_fields", schema::custom_fields("device role")),
        ]
    }

    fn lookup(model: &DeviceRoleModel) -> Lookup {
        slugged::<DeviceRole>(&model.id, &model.slug, &model.name)
    }

    fn map(role: &DeviceRole, model: &mut DeviceRoleModel) {
        model.id = id_string(role.id);
        model.name = string_value(Some(&role.name));
        model.slug = string_value(Some(&role.slug));
        model.color = string_value(role.color.as_deref());
        model.vm_role = bool_value(role.vm_role);
        model.description = string_value(role.description.as_deref());
        model.display_name = string_value(role.display.as_deref());
        model.tags = tags_value(&role.tags);
        model.custom_fields = custom_fields_value(&role.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Manufacturer / platform
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManufacturerModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub description: Value<String>,
    pub device_type_count: Value<i64>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_manufacturer`
#[derive(Debug, Clone, Copy, Default)]
pub struct ManufacturerDataSource;

impl NetBoxDataSource for ManufacturerDataSource {
    type Object = Manufacturer;
    type Model = ManufacturerModel;
    const TYPE_NAME: &'static str = "manufacturer";

    fn description() -> &'static str {
        "Use this data source to get information about a manufacturer in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the manufacturer. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the manufacturer.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("description", schema::computed_string("Brief description.")),
            ("device_type_count", schema::computed_number("Number of device types from this manufacturer.")),
            ("display_name", schema::display_name("manufacturer")),
            ("tags", schema::tags("manufacturer")),
            ("custom_fields", schema::custom_fields("manufacturer")),
        ]
    }

    fn lookup(model: &ManufacturerModel) -> Lookup {
        slugged::<Manufacturer>(&model.id, &model.slug, &model.name)
    }

    fn map(manufacturer: &Manufacturer, model: &mut ManufacturerModel) {
        model.id = id_string(manufacturer.id);
        model.name = string_value(Some(&manufacturer.name));
        model.slug = string_value(Some(&manufacturer.slug));
        model.description = string_value(manufacturer.description.as_deref());
        model.device_type_count = int_value(manufacturer.devicetype_count);
        model.display_name = string_value(manufacturer.display.as_deref());
        model.tags = tags_value(&manufacturer.tags);
        model.custom_fields = custom_fields_value(&manufacturer.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub manufacturer: Value<String>,
    pub manufacturer_id: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_platform`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDataSource;

impl NetBoxDataSource for PlatformDataSource {
    type Object = Platform;
    type Model = PlatformModel;
    const TYPE_NAME: &'static str = "platform";

    fn description() -> &'static str {
        "Use this data source to get information about a platform (operating system or firmware) in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the platform. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the platform.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("manufacturer", schema::computed_string("Name of the manufacturer the platform is limited to.")),
            ("manufacturer_id", schema::computed_number("ID of the manufacturer.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("platform")),
            ("tags", schema::tags("platform")),
            ("custom_fields", schema::custom_fields("platform")),
        ]
    }

    fn lookup(model: &PlatformModel) -> Lookup {
        slugged::<Platform>(&model.id, &model.slug, &model.name)
    }

    fn map(platform: &Platform, model: &mut PlatformModel) {
        model.id = id_string(platform.id);
        model.name = string_value(Some(&platform.name));
        model.slug = string_value(Some(&platform.slug));
        model.manufacturer = reference_name(platform.manufacturer.as_ref());
        model.manufacturer_id = reference_id(platform.manufacturer.as_ref());
        model.description = string_value(platform.description.as_deref());
        model.display_name = string_value(platform.display.as_deref());
        model.tags = tags_value(&platform.tags);
        model.custom_fields = custom_fields_value(&platform.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Device type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceTypeModel {
    pub id: Value<String>,
    pub model: Value<String>,
    pub slug: Value<String>,
    pub manufacturer: Value<String>,
    pub manufacturer_id: Value<i64>,
    pub default_platform: Value<String>,
    pub part_number: Value<String>,
    pub u_height: Value<f64>,
    pub exclude_from_utilization: Value<bool>,
    pub is_full_depth: Value<bool>,
    pub subdevice_role: Value<String>,
    pub airflow: Value<String>,
    pub weight: Value<f64>,
    pub weight_unit: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub device_count: Value<i64>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_device_type`
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceTypeDataSource;

impl NetBoxDataSource for DeviceTypeDataSource {
    type Object = DeviceType;
    type Model = DeviceTypeModel;
    const TYPE_NAME: &'static str = "device_type";

    fn description() -> &'static str {
        "Use this data source to get information about a device type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the device type. Takes precedence over `slug` and `model`.")),
            ("model", schema::lookup_string("Model name of the device type.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `model`.")),
            ("manufacturer", schema::computed_string("Name of the manufacturer.")),
            ("manufacturer_id", schema::computed_number("ID of the manufacturer.")),
            ("default_platform", schema::computed_string("Name of the default platform.")),
            ("part_number", schema::computed_string("Discrete part number.")),
            ("u_height", schema::computed_number("Height in rack units.")),
            ("exclude_from_utilization", schema::computed_bool("Whether devices of this type are excluded from rack utilization.")),
            ("is_full_depth", schema::computed_bool("Whether the device consumes both front and rear rack faces.")),
            ("subdevice_role", schema::computed_string("Parent/child status.")),
            ("airflow", schema::computed_string("Airflow direction.")),
            ("weight", schema::computed_number("Weight.")),
            ("weight_unit", schema::computed_string("Unit for `weight`.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("device_count", schema::computed_number("Number of devices of this type.")),
            ("display_name", schema::display_name("device type")),
            ("tags", schema::tags("device type")),
            ("custom_fields", schema::custom_fields("device type")),
        ]
    }

    fn lookup(model: &DeviceTypeModel) -> Lookup {
        Lookup::new(DeviceType::KIND)
            .id("id", &model.id)
            .key("slug", "slug", &model.slug)
            .key("model", "model", &model.model)
    }

    fn map(device_type: &DeviceType, model: &mut DeviceTypeModel) {
        model.id = id_string(device_type.id);
        model.model = string_value(Some(&device_type.model));
        model.slug = string_value(Some(&device_type.slug));
        model.manufacturer = reference_name(device_type.manufacturer.as_ref());
        model.manufacturer_id = reference_id(device_type.manufacturer.as_ref());
        model.default_platform = reference_name(device_type.default_platform.as_ref());
        model.part_number = string_value(device_type.part_number.as_deref());
        model.u_height = float_value(device_type.u_height);
        model.exclude_from_utilization = bool_value(device_type.exclude_from_utilization);
        model.is_full_depth = bool_value(device_type.is_full_depth);
        model.subdevice_role = choice_value(device_type.subdevice_role.as_ref());
        model.airflow = choice_value(device_type.airflow.as_ref());
        model.weight = float_value(device_type.weight);
        model.weight_unit = choice_value(device_type.weight_unit.as_ref());
        model.description = string_value(device_type.description.as_deref());
        model.comments = string_value(device_type.comments.as_deref());
        model.device_count = int_value(device_type.device_count);
        model.display_name = string_value(device_type.display.as_deref());
        model.tags = tags_value(&device_type.tags);
        model.custom_fields = custom_fields_value(&device_type.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Device
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub serial: Value<String>,
    pub device_type: Value<String>,
    pub device_type_id: Value<i64>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub platform: Value<String>,
    pub asset_tag: Value<String>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub location: Value<String>,
    pub rack: Value<String>,
    pub position: Value<f64>,
    pub face: Value<String>,
    pub latitude: Value<f64>,
    pub longitude: Value<f64>,
    pub status: Value<String>,
    pub airflow: Value<String>,
    pub primary_ip4: Value<String>,
    pub primary_ip6: Value<String>,
    pub vc_position: Value<i64>,
    pub vc_priority: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_device`
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceDataSource;

impl NetBoxDataSource for DeviceDataSource {
    type Object = Device;
    type Model = DeviceModel;
    const TYPE_NAME: &'static str = "device";

    fn description() -> &'static str {
        "Use this data source to get information about a device in NetBox by ID, name or serial number."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the device. Takes precedence over `name` and `serial`.")),
            ("name", schema::lookup_string("Name of the device. Takes precedence over `serial`.")),
            ("serial", schema::lookup_string("Chassis serial number.")),
            ("device_type", schema::computed_string("Model of the device type.")),
            ("device_type_id", schema::computed_number("ID of the device type.")),
            ("role", schema::computed_string("Name of the device role.")),
            ("role_id", schema::computed_number("ID of the device role.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("platform", schema::computed_string("Name of the platform.")),
            ("asset_tag", schema::computed_string("Unique asset tag.")),
            ("site", schema::computed_string("Name of the site.")),
            ("site_id", schema::computed_number("ID of the site.")),
            ("location", schema::computed_string("Name of the location.")),
            ("rack", schema::computed_string("Name of the rack.")),
            ("position", schema::computed_number("Lowest rack unit occupied by the device.")),
            ("face", schema::computed_string("Rack face (front or rear).")),
            ("latitude", schema::computed_number("GPS latitude in decimal format.")),
            ("longitude", schema::computed_number("GPS longitude in decimal format.")),
            ("status", schema::computed_string("Operational status.")),
            ("airflow", schema::computed_string("Airflow direction.")),
            ("primary_ip4", schema::computed_string("Primary IPv4 address with prefix length.")),
            ("primary_ip6", schema::computed_string("Primary IPv6 address with prefix length.")),
            ("vc_position", schema::computed_number("Position in the virtual chassis.")),
            ("vc_priority", schema::computed_number("Master election priority in the virtual chassis.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("device")),
            ("tags", schema::tags("device")),
            ("custom_fields", schema::custom_fields("device")),
        ]
    }

    fn lookup(model: &DeviceModel) -> Lookup {
        Lookup::new(Device::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
            .key("serial", "serial", &model.serial)
    }

    fn map(device: &Device, model: &mut DeviceModel) {
        model.id = id_string(device.id);
        model.name = string_value(device.name.as_deref());
        model.serial = string_value(device.serial.as_deref());
        model.device_type = string_value(device.device_type.as_ref().and_then(|t| t.model.as_deref()));
        model.device_type_id = reference_id(device.device_type.as_ref());
        model.role = reference_name(device.role());
        model.role_id = reference_id(device.role());
        model.tenant = reference_name(device.tenant.as_ref());
        model.tenant_id = reference_id(device.tenant.as_ref());
        model.platform = reference_name(device.platform.as_ref());
        model.asset_tag = string_value(device.asset_tag.as_deref());
        model.site = reference_name(device.site.as_ref());
        model.site_id = reference_id(device.site.as_ref());
        model.location = reference_name(device.location.as_ref());
        model.rack = reference_name(device.rack.as_ref());
        model.position = float_value(device.position);
        model.face = choice_value(device.face.as_ref());
        model.latitude = float_value(device.latitude);
        model.longitude = float_value(device.longitude);
        model.status = choice_value(device.status.as_ref());
        model.airflow = choice_value(device.airflow.as_ref());
        model.primary_ip4 = string_value(device.primary_ip4.as_ref().and_then(|ip| ip.address.as_deref()));
        model.primary_ip6 = string_value(device.primary_ip6.as_ref().and_then(|ip| ip.address.as_deref()));
        model.vc_position = int_value(device.vc_position);
        model.vc_priority = int_value(device.vc_priority);
        model.description = string_value(device.description.as_deref());
        model.comments = string_value(device.comments.as_deref());
        model.display_name = string_value(device.display.as_deref());
        model.tags = tags_value(&device.tags);
        model.custom_fields = custom_fields_value(&device.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Interface
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceModel {
    pub id: Value<String>,
    pub device: Value<String>,
    pub device_name: Value<String>,
    pub name: Value<String>,
    pub label: Value<String>,
    #[serde(rename = "type")]
    pub interface_type: Value<String>,
    pub enabled: Value<bool>,
    pub parent: Value<String>,
    pub bridge: Value<String>,
    pub lag: Value<String>,
    pub mtu: Value<i64>,
    pub mac_address: Value<String>,
    pub speed: Value<i64>,
    pub duplex: Value<String>,
    pub wwn: Value<String>,
    pub mgmt_only: Value<bool>,
    pub description: Value<String>,
    pub mode: Value<String>,
    pub mark_connected: Value<bool>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

pub(crate) const DEVICES: Reference = Reference::by_name(Device::ENDPOINT, Device::KIND);

/// `netbox_interface`
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceDataSource;

impl NetBoxDataSource for InterfaceDataSource {
    type Object = Interface;
    type Model = InterfaceModel;
    const TYPE_NAME: &'static str = "interface";

    fn description() -> &'static str {
        "Use this data source to get information about a device interface in NetBox, by ID or by device and interface name."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the interface. Takes precedence over `device` and `name`.")),
            ("device", schema::lookup_string("ID or name of the device. Used together with `name`.")),
            ("device_name", schema::computed_string("Name of the device.")),
            ("name", schema::lookup_string("Name of the interface. Used together with `device`.")),
            ("label", schema::computed_string("Physical label.")),
            ("type", schema::computed_string("Interface type, e.g. `1000base-t`.")),
            ("enabled", schema::computed_bool("Whether the interface is enabled.")),
            ("parent", schema::computed_string("ID of the parent interface.")),
            ("bridge", schema::computed_string("ID of the bridge interface.")),
            ("lag", schema::computed_string("ID of the parent LAG interface.")),
            ("mtu", schema::computed_number("Maximum transmission unit.")),
            ("mac_address", schema::computed_string("MAC address.")),
            ("speed", schema::computed_number("Speed in Kbps.")),
            ("duplex", schema::computed_string("Duplex mode.")),
            ("wwn", schema::computed_string("64-bit World Wide Name.")),
            ("mgmt_only", schema::computed_bool("Whether the interface is used for out-of-band management only.")),
            ("description", schema::computed_string("Brief description.")),
            ("mode", schema::computed_string("802.1Q mode.")),
            ("mark_connected", schema::computed_bool("Whether the interface is treated as connected.")),
            ("display_name", schema::display_name("interface")),
            ("tags", schema::tags("interface")),
            ("custom_fields", schema::custom_fields("interface")),
        ]
    }

    fn lookup(model: &InterfaceModel) -> Lookup {
        Lookup::new(Interface::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("device", "device_id", &model.device).reference(DEVICES),
            KeyPart::required("name", "name", &model.name),
        ])
    }

    fn map(interface: &Interface, model: &mut InterfaceModel) {
        model.id = id_string(interface.id);
        // A device given by name stays as configured.
        if model.device.lookup_text().is_none() {
            model.device = reference_id_string(interface.device.as_ref());
        }
        model.device_name = reference_name(interface.device.as_ref());
        model.name = string_value(Some(&interface.name));
        model.label = string_value(interface.label.as_deref());
        model.interface_type = choice_value(interface.interface_type.as_ref());
        model.enabled = bool_value(interface.enabled);
        model.parent = reference_id_string(interface.parent.as_ref());
        model.bridge = reference_id_string(interface.bridge.as_ref());
        model.lag = reference_id_string(interface.lag.as_ref());
        model.mtu = int_value(interface.mtu);
        model.mac_address = string_value(interface.mac_address.as_deref());
        model.speed = int_value(interface.speed);
        model.duplex = choice_value(interface.duplex.as_ref());
        model.wwn = string_value(interface.wwn.as_deref());
        model.mgmt_only = bool_value(interface.mgmt_only);
        model.description = string_value(interface.description.as_deref());
        model.mode = choice_value(interface.mode.as_ref());
        model.mark_connected = bool_value(interface.mark_connected);
        model.display_name = string_value(interface.display.as_deref());
        model.tags = tags_value(&interface.tags);
        model.custom_fields = custom_fields_value(&interface.custom_fields);
    }
}
