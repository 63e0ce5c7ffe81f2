//! Hardware data sources: module types, rack types, rack reservations,
//! virtual chassis, virtual device contexts and cables.

use super::NetBoxDataSource;
use crate::lookup::Lookup;
use crate::mapping::*;
use crate::schema;
use netbox_client::{
    Cable, CableTermination, ModuleType, NetBoxObject, RackReservation, RackType, VirtualChassis,
    VirtualDeviceContext,
};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::{Attribute, AttributeType};

// ---------------------------------------------------------------------------
// Module type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleTypeModel {
    pub id: Value<String>,
    pub model: Value<String>,
    pub manufacturer: Value<String>,
    pub manufacturer_id: Value<i64>,
    pub part_number: Value<String>,
    pub airflow: Value<String>,
    pub weight: Value<f64>,
    pub weight_unit: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_module_type`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleTypeDataSource;

impl NetBoxDataSource for ModuleTypeDataSource {
    type Object = ModuleType;
    type Model = ModuleTypeModel;
    const TYPE_NAME: &'static str = "module_type";

    fn description() -> &'static str {
        "Use this data source to get information about a module type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the module type. Takes precedence over `model`.")),
            ("model", schema::lookup_string("Model name of the module type.")),
            ("manufacturer", schema::computed_string("Name of the manufacturer.")),
            ("manufacturer_id", schema::computed_number("ID of the manufacturer.")),
            ("part_number", schema::computed_string("Manufacturer part number.")),
            ("airflow", schema::computed_string("Airflow direction.")),
            ("weight", schema::computed_number("Weight of the module.")),
            ("weight_unit", schema::computed_string("Unit for `weight`.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("module type")),
            ("tags", schema::tags("module type")),
            ("custom_fields", schema::custom_fields("module type")),
        ]
    }

    fn lookup(model: &ModuleTypeModel) -> Lookup {
        Lookup::new(ModuleType::KIND)
            .id("id", &model.id)
            .key("model", "model", &model.model)
    }

    fn map(module_type: &ModuleType, model: &mut ModuleTypeModel) {
        model.id = id_string(module_type.id);
        model.model = string_value(Some(&module_type.model));
        model.manufacturer = reference_name(module_type.manufacturer.as_ref());
        model.manufacturer_id = reference_id(module_type.manufacturer.as_ref());
        model.part_number = string_value(module_type.part_number.as_deref());
        model.airflow = choice_value(module_type.airflow.as_ref());
        model.weight = float_value(module_type.weight);
        model.weight_unit = choice_value(module_type.weight_unit.as_ref());
        model.description = string_value(module_type.description.as_deref());
        model.comments = string_value(module_type.comments.as_deref());
        model.display_name = string_value(module_type.display.as_deref());
        model.tags = tags_value(&module_type.tags);
        model.custom_fields = custom_fields_value(&module_type.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Rack type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackTypeModel {
    pub id: Value<String>,
    pub model: Value<String>,
    pub slug: Value<String>,
    pub manufacturer: Value<String>,
    pub manufacturer_id: Value<i64>,
    pub form_factor: Value<String>,
    pub width: Value<i64>,
    pub u_height: Value<i64>,
    pub starting_unit: Value<i64>,
    pub desc_units: Value<bool>,
    pub outer_width: Value<i64>,
    pub outer_depth: Value<i64>,
    pub outer_unit: Value<String>,
    pub weight: Value<f64>,
    pub max_weight: Value<i64>,
    pub weight_unit: Value<String>,
    pub mounting_depth: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_rack_type`
#[derive(Debug, Clone, Copy, Default)]
pub struct RackTypeDataSource;

impl NetBoxDataSource for RackTypeDataSource {
    type Object = RackType;
    type Model = RackTypeModel;
    const TYPE_NAME: &'static str = "rack_type";

    fn description() -> &'static str {
        "Use this data source to get information about a rack type in NetBox. Rack types require NetBox 4.1 or later."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the rack type. Takes precedence over `slug` and `model`.")),
            ("model", schema::lookup_string("Model name of the rack type.")),
            ("slug", schema::lookup_string("Slug of the rack type. Takes precedence over `model`.")),
            ("manufacturer", schema::computed_string("Name of the manufacturer.")),
            ("manufacturer_id", schema::computed_number("ID of the manufacturer.")),
            ("form_factor", schema::computed_string("Physical form factor.")),
            ("width", schema::computed_number("Rail-to-rail width in inches.")),
            ("u_height", schema::computed_number("Height in rack units.")),
            ("starting_unit", schema::computed_number("Number of the lowest unit.")),
            ("desc_units", schema::computed_bool("Whether units are numbered top-to-bottom.")),
            ("outer_width", schema::computed_number("Outer width.")),
            ("outer_depth", schema::computed_number("Outer depth.")),
            ("outer_unit", schema::computed_string("Unit for the outer dimensions.")),
            ("weight", schema::computed_number("Weight of the rack type.")),
            ("max_weight", schema::computed_number("Maximum load capacity.")),
            ("weight_unit", schema::computed_string("Unit for `weight` and `max_weight`.")),
            ("mounting_depth", schema::computed_number("Maximum mounting depth in millimeters.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("rack type")),
            ("tags", schema::tags("rack type")),
            ("custom_fields", schema::custom_fields("rack type")),
        ]
    }

    fn lookup(model: &RackTypeModel) -> Lookup {
        Lookup::new(RackType::KIND)
            .id("id", &model.id)
            .key("slug", "slug", &model.slug)
            .key("model", "model", &model.model)
    }

    fn map(rack_type: &RackType, model: &mut RackTypeModel) {
        model.id = id_string(rack_type.id);
        model.model = string_value(Some(&rack_type.model));
        model.slug = string_value(Some(&rack_type.slug));
        model.manufacturer = reference_name(rack_type.manufacturer.as_ref());
        model.manufacturer_id = reference_id(rack_type.manufacturer.as_ref());
        model.form_factor = choice_value(rack_type.form_factor.as_ref());
        model.width = choice_number(rack_type.width.as_ref());
        model.u_height = int_value(rack_type.u_height);
        model.starting_unit = int_value(rack_type.starting_unit);
        model.desc_units = bool_value(rack_type.desc_units);
        model.outer_width = int_value(rack_type.outer_width);
        model.outer_depth = int_value(rack_type.outer_depth);
        model.outer_unit = choice_value(rack_type.outer_unit.as_ref());
        model.weight = float_value(rack_type.weight);
        model.max_weight = int_value(rack_type.max_weight);
        model.weight_unit = choice_value(rack_type.weight_unit.as_ref());
        model.mounting_depth = int_value(rack_type.mounting_depth);
        model.description = string_value(rack_type.description.as_deref());
        model.comments = string_value(rack_type.comments.as_deref());
        model.display_name = string_value(rack_type.display.as_deref());
        model.tags = tags_value(&rack_type.tags);
        model.custom_fields = custom_fields_value(&rack_type.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Rack reservation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RackReservationModel {
    pub id: Value<String>,
    pub rack: Value<String>,
    pub rack_id: Value<i64>,
    pub units: Value<Vec<i64>>,
    pub user: Value<String>,
    pub user_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_rack_reservation`
#[derive(Debug, Clone, Copy, Default)]
pub struct RackReservationDataSource;

impl NetBoxDataSource for RackReservationDataSource {
    type Object = RackReservation;
    type Model = RackReservationModel;
    const TYPE_NAME: &'static str = "rack_reservation";

    fn description() -> &'static str {
        "Use this data source to get information about a rack reservation in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::required_string("ID of the rack reservation.")),
            ("rack", schema::computed_string("Name of the reserved rack.")),
            ("rack_id", schema::computed_number("ID of the reserved rack.")),
            ("units", schema::computed_number_list("Reserved rack units.")),
            ("user", schema::computed_string("User who made the reservation.")),
            ("user_id", schema::computed_number("ID of the user who made the reservation.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("rack reservation")),
            ("tags", schema::tags("rack reservation")),
            ("custom_fields", schema::custom_fields("rack reservation")),
        ]
    }

    fn lookup(model: &RackReservationModel) -> Lookup {
        Lookup::new(RackReservation::KIND).id("id", &model.id)
    }

    fn map(reservation: &RackReservation, model: &mut RackReservationModel) {
        model.id = id_string(reservation.id);
        model.rack = reference_name(reservation.rack.as_ref());
        model.rack_id = reference_id(reservation.rack.as_ref());
        model.units = list_value(reservation.units.clone());
        model.user = string_value(reservation.user.as_ref().and_then(|u| u.username.as_deref()));
        model.user_id = reference_id(reservation.user.as_ref());
        model.tenant = reference_name(reservation.tenant.as_ref());
        model.tenant_id = reference_id(reservation.tenant.as_ref());
        model.description = string_value(reservation.description.as_deref());
        model.comments = string_value(reservation.comments.as_deref());
        model.display_name = string_value(reservation.display.as_deref());
        model.tags = tags_value(&reservation.tags);
        model.custom_fields = custom_fields_value(&reservation.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Virtual chassis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualChassisModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub domain: Value<String>,
    pub master: Value<String>,
    pub master_id: Value<i64>,
    pub member_count: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_virtual_chassis`
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualChassisDataSource;

impl NetBoxDataSource for VirtualChassisDataSource {
    type Object = VirtualChassis;
    type Model = VirtualChassisModel;
    const TYPE_NAME: &'static str = "virtual_chassis";

    fn description() -> &'static str {
        "Use this data source to get information about a virtual chassis in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the virtual chassis. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the virtual chassis.")),
            ("domain", schema::computed_string("Virtual chassis domain.")),
            ("master", schema::computed_string("Name of the master device.")),
            ("master_id", schema::computed_number("ID of the master device.")),
            ("member_count", schema::computed_number("Number of member devices.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("virtual chassis")),
            ("tags", schema::tags("virtual chassis")),
            ("custom_fields", schema::custom_fields("virtual chassis")),
        ]
    }

    fn lookup(model: &VirtualChassisModel) -> Lookup {
        Lookup::new(VirtualChassis::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(chassis: &VirtualChassis, model: &mut VirtualChassisModel) {
        model.id = id_string(chassis.id);
        model.name = string_value(Some(&chassis.name));
        model.domain = string_value(chassis.domain.as_deref());
        model.master = reference_name(chassis.master.as_ref());
        model.master_id = reference_id(chassis.master.as_ref());
        model.member_count = int_value(chassis.member_count);
        model.description = string_value(chassis.description.as_deref());
        model.comments = string_value(chassis.comments.as_deref());
        model.display_name = string_value(chassis.display.as_deref());
        model.tags = tags_value(&chassis.tags);
        model.custom_fields = custom_fields_value(&chassis.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Virtual device context
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualDeviceContextModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device: Value<String>,
    pub device_id: Value<i64>,
    pub identifier: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub primary_ip4: Value<String>,
    pub primary_ip6: Value<String>,
    pub status: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_virtual_device_context`
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualDeviceContextDataSource;

impl NetBoxDataSource for VirtualDeviceContextDataSource {
    type Object = VirtualDeviceContext;
    type Model = VirtualDeviceContextModel;
    const TYPE_NAME: &'static str = "virtual_device_context";

    fn description() -> &'static str {
        "Use this data source to get information about a virtual device context in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::required_string("ID of the virtual device context.")),
            ("name", schema::computed_string("Name of the virtual device context.")),
            ("device", schema::computed_string("Name of the parent device.")),
            ("device_id", schema::computed_number("ID of the parent device.")),
            ("identifier", schema::computed_number("Numeric identifier unique to the parent device.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("primary_ip4", schema::computed_string("Primary IPv4 address with prefix length.")),
            ("primary_ip6", schema::computed_string("Primary IPv6 address with prefix length.")),
            ("status", schema::computed_string("Operational status.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("virtual device context")),
            ("tags", schema::tags("virtual device context")),
            ("custom_fields", schema::custom_fields("virtual device context")),
        ]
    }

    fn lookup(model: &VirtualDeviceContextModel) -> Lookup {
        Lookup::new(VirtualDeviceContext::KIND).id("id", &model.id)
    }

    fn map(context: &VirtualDeviceContext, model: &mut VirtualDeviceContextModel) {
        model.id = id_string(context.id);
        model.name = string_value(Some(&context.name));
        model.device = reference_name(context.device.as_ref());
        model.device_id = reference_id(context.device.as_ref());
        model.identifier = int_value(context.identifier);
        model.tenant = reference_name(context.tenant.as_ref());
        model.tenant_id = reference_id(context.tenant.as_ref());
        model.primary_ip4 = string_value(context.primary_ip4.as_ref().and_then(|ip| ip.address.as_deref()));
        model.primary_ip6 = string_value(context.primary_ip6.as_ref().and_then(|ip| ip.address.as_deref()));
        model.status = choice_value(context.status.as_ref());
        model.description = string_value(context.description.as_deref());
        model.comments = string_value(context.comments.as_deref());
        model.display_name = string_value(context.display.as_deref());
        model.tags = tags_value(&context.tags);
        model.custom_fields = custom_fields_value(&context.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Cable
// ---------------------------------------------------------------------------

/// Cable end as exposed in state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CableTerminationModel {
    pub object_type: String,
    pub object_id: i64,
}

fn terminations(ends: &[CableTermination]) -> Value<Vec<CableTerminationModel>> {
    list_value(
        ends.iter()
            .filter_map(|end| {
                Some(CableTerminationModel {
                    object_type: end.object_type.clone(),
                    object_id: i64::try_from(end.object_id).ok()?,
                })
            })
            .collect(),
    )
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CableModel {
    pub id: Value<String>,
    #[serde(rename = "type")]
    pub cable_type: Value<String>,
    pub a_terminations: Value<Vec<CableTerminationModel>>,
    pub b_terminations: Value<Vec<CableTerminationModel>>,
    pub status: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub label: Value<String>,
    pub color: Value<String>,
    pub length: Value<f64>,
    pub length_unit: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_cable`
#[derive(Debug, Clone, Copy, Default)]
pub struct CableDataSource;

impl NetBoxDataSource for CableDataSource {
    type Object = Cable;
    type Model = CableModel;
    const TYPE_NAME: &'static str = "cable";

    fn description() -> &'static str {
        "Use this data source to get information about a cable in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let end = [("object_type", AttributeType::String), ("object_id", AttributeType::Number)];
        vec![
            ("id", schema::required_string("ID of the cable.")),
            ("type", schema::computed_string("Cable type, e.g. `cat6`.")),
            ("a_terminations", schema::computed_object_list("Objects on the A side.", &end)),
            ("b_terminations", schema::computed_object_list("Objects on the B side.", &end)),
            ("status", schema::computed_string("Operational status.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("label", schema::computed_string("Physical label.")),
            ("color", schema::computed_string("Color as a six digit hex code.")),
            ("length", schema::computed_number("Cable length.")),
            ("length_unit", schema::computed_string("Unit for `length`.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("cable")),
            ("tags", schema::tags("cable")),
            ("custom_fields", schema::custom_fields("cable")),
        ]
    }

    fn lookup(model: &CableModel) -> Lookup {
        Lookup::new(Cable::KIND).id("id", &model.id)
    }

    fn map(cable: &Cable, model: &mut CableModel) {
        model.id = id_string(cable.id);
        model.cable_type = string_value(cable.cable_type.as_deref());
        model.a_terminations = terminations(&cable.a_terminations);
        model.b_terminations = terminations(&cable.b_terminations);
        model.status = choice_value(cable.status.as_ref());
        model.tenant = reference_name(cable.tenant.as_ref());
        model.tenant_id = reference_id(cable.tenant.as_ref());
        model.label = string_value(cable.label.as_deref());
        model.color = string_value(cable.color.as_deref());
        model.length = float_value(cable.length);
        model.length_unit = choice_value(cable.length_unit.as_ref());
        model.description = string_value(cable.description.as_deref());
        model.comments = string_value(cable.comments.as_deref());
        model.display_name = string_value(cable.display.as_deref());
        model.tags = tags_value(&cable.tags);
        model.custom_fields = custom_fields_value(&cable.custom_fields);
    }
}
