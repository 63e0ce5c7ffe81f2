//! Device components (ports, outlets, bays, inventory, modules) and the
//! device type templates they are created from.
//!
//! Components are unique per device: `device` and `name` together select
//! one. Templates are unique per device type or module type, so `name` is
//! usually paired with `device_type_id` or `module_type_id`.

use super::dcim::DEVICES;
use super::NetBoxDataSource;
use crate::lookup::{KeyPart, Lookup, LookupValue};
use crate::mapping::*;
use crate::schema;
use netbox_client::{
    ConsolePort, ConsolePortTemplate, ConsoleServerPort, DeviceBay, FrontPort, FrontPortTemplate,
    InterfaceTemplate, InventoryItem, InventoryItemTemplate, Module, NestedRef, NetBoxObject,
    PowerOutlet, PowerOutletTemplate, PowerPort, PowerPortTemplate, RearPortTemplate,
};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

/// Keep a device given by name; otherwise report the device ID
fn map_device(configured: &mut Value<String>, device: Option<&NestedRef>) {
    if configured.lookup_text().is_none() {
        *configured = reference_id_string(device);
    }
}

fn component_lookup(kind: &'static str, id: &Value<String>, device: &Value<String>, name: &Value<String>) -> Lookup {
    Lookup::new(kind).id("id", id).composite(vec![
        KeyPart::required("device", "device_id", device).reference(DEVICES),
        KeyPart::required("name", "name", name),
    ])
}

fn component_keys(kind: &'static str) -> Vec<(&'static str, Attribute)> {
    vec![
        ("id", schema::lookup_string(&format!("ID of the {}. Takes precedence over `device` and `name`.", kind))),
        ("device", schema::lookup_string("ID or name of the device. Used together with `name`.")),
        ("device_name", schema::computed_string("Name of the device.")),
        ("name", schema::lookup_string(&format!("Name of the {}. Used together with `device`.", kind))),
    ]
}

// ---------------------------------------------------------------------------
// Console ports
// ---------------------------------------------------------------------------

/// State shared by console ports and console server ports
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolePortModel {
    pub id: Value<String>,
    pub device: Value<String>,
    pub device_name: Value<String>,
    pub name: Value<String>,
    pub module_id: Value<i64>,
    pub label: Value<String>,
    #[serde(rename = "type")]
    pub port_type: Value<String>,
    pub speed: Value<i64>,
    pub description: Value<String>,
    pub mark_connected: Value<bool>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

fn console_attributes(kind: &'static str) -> Vec<(&'static str, Attribute)> {
    let mut attributes = component_keys(kind);
    attributes.extend(vec![
        ("module_id", schema::computed_number("ID of the module the port belongs to.")),
        ("label", schema::computed_string("Physical label.")),
        ("type", schema::computed_string("Port type, e.g. `rj-45`.")),
        ("speed", schema::computed_number("Port speed in bps.")),
        ("description", schema::computed_string("Brief description.")),
        ("mark_connected", schema::computed_bool("Whether the port is treated as connected.")),
        ("display_name", schema::display_name(kind)),
        ("tags", schema::tags(kind)),
        ("custom_fields", schema::custom_fields(kind)),
    ]);
    attributes
}

/// `netbox_console_port`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePortDataSource;

impl NetBoxDataSource for ConsolePortDataSource {
    type Object = ConsolePort;
    type Model = ConsolePortModel;
    const TYPE_NAME: &'static str = "console_port";

    fn description() -> &'static str {
        "Use this data source to get information about a console port of a device in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        console_attributes("console port")
    }

    fn lookup(model: &ConsolePortModel) -> Lookup {
        component_lookup(ConsolePort::KIND, &model.id, &model.device, &model.name)
    }

    fn map(port: &ConsolePort, model: &mut ConsolePortModel) {
        model.id = id_string(port.id);
        map_device(&mut model.device, port.device.as_ref());
        model.device_name = reference_name(port.device.as_ref());
        model.name = string_value(Some(&port.name));
        model.module_id = reference_id(port.module.as_ref());
        model.label = string_value(port.label.as_deref());
        model.port_type = choice_value(port.port_type.as_ref());
        model.speed = choice_number(port.speed.as_ref());
        model.description = string_value(port.description.as_deref());
        model.mark_connected = bool_value(port.mark_connected);
        model.display_name = string_value(port.display.as_deref());
        model.tags = tags_value(&port.tags);
        model.custom_fields = custom_fields_value(&port.custom_fields);
    }
}

/// `netbox_console_server_port`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleServerPortDataSource;

impl NetBoxDataSource for ConsoleServerPortDataSource {
    type Object = ConsoleServerPort;
    type Model = ConsolePortModel;
    const TYPE_NAME: &'static str = "console_server_port";

    fn description() -> &'static str {
        "Use this data source to get information about a console server port of a device in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        console_attributes("console server port")
    }

    fn lookup(model: &ConsolePortModel) -> Lookup {
        component_lookup(ConsoleServerPort::KIND, &model.id, &model.device, &model.name)
    }

    fn map(port: &ConsoleServerPort, model: &mut ConsolePortModel) {
        model.id = id_string(port.id);
        map_device(&mut model.device, port.device.as_ref());
        model.device_name = reference_name(port.device.as_ref());
        model.name = string_value(Some(&port.name));
        model.module_id = reference_id(port.module.as_ref());
        model.label = string_value(port.label.as_deref());
        model.port_type = choice_value(port.port_type.as_ref());
        model.speed = choice_number(port.speed.as_ref());
        model.description = string_value(port.description.as_deref());
        model.mark_connected = bool_value(port.mark_connected);
        model.display_name = string_value(port.display.as_deref());
        model.tags = tags_value(&port.tags);
        model.custom_fields = custom_fields_value(&port.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Power ports and outlets
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPortModel {
    pub id: Value<String>,
    pub device: Value<String>,
    pub device_name: Value<String>,
    pub name: Value<String>,
    pub module_id: Value<i64>,
    pub label: Value<String>,
    #[serde(rename = "type")]
    pub port_type: Value<String>,
    pub maximum_draw: Value<i64>,
    pub allocated_draw: Value<i64>,
    pub description: Value<String>,
    pub mark_connected: Value<bool>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_power_port`
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerPortDataSource;

impl NetBoxDataSource for PowerPortDataSource {
    type Object = PowerPort;
    type Model = PowerPortModel;
    const TYPE_NAME: &'static str = "power_port";

    fn description() -> &'static str {
        "Use this data source to get information about a power port of a device in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = component_keys("power port");
        attributes.extend(vec![
            ("module_id", schema::computed_number("ID of the module the port belongs to.")),
            ("label", schema::computed_string("Physical label.")),
            ("type", schema::computed_string("Connector type, e.g. `iec-60320-c14`.")),
            ("maximum_draw", schema::computed_number("Maximum power draw in watts.")),
            ("allocated_draw", schema::computed_number("Allocated power draw in watts.")),
            ("description", schema::computed_string("Brief description.")),
            ("mark_connected", schema::computed_bool("Whether the port is treated as connected.")),
            ("display_name", schema::display_name("power port")),
            ("tags", schema::tags("power port")),
            ("custom_fields", schema::custom_fields("power port")),
        ]);
        attributes
    }

    fn lookup(model: &PowerPortModel) -> Lookup {
        component_lookup(PowerPort::KIND, &model.id, &model.device, &model.name)
    }

    fn map(port: &PowerPort, model: &mut PowerPortModel) {
        model.id = id_string(port.id);
        map_device(&mut model.device, port.device.as_ref());
        model.device_name = reference_name(port.device.as_ref());
        model.name = string_value(Some(&port.name));
        model.module_id = reference_id(port.module.as_ref());
        model.label = string_value(port.label.as_deref());
        model.port_type = choice_value(port.port_type.as_ref());
        model.maximum_draw = int_value(port.maximum_draw);
        model.allocated_draw = int_value(port.allocated_draw);
        model.description = string_value(port.description.as_deref());
        model.mark_connected = bool_value(port.mark_connected);
        model.display_name = string_value(port.display.as_deref());
        model.tags = tags_value(&port.tags);
        model.custom_fields = custom_fields_value(&port.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerOutletModel {
    pub id: Value<String>,
    pub device: Value<String>,
    pub device_name: Value<String>,
    pub name: Value<String>,
    pub module_id: Value<i64>,
    pub label: Value<String>,
    #[serde(rename = "type")]
    pub outlet_type: Value<String>,
    pub power_port_id: Value<i64>,
    pub feed_leg: Value<String>,
    pub description: Value<String>,
    pub mark_connected: Value<bool>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_power_outlet`
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerOutletDataSource;

impl NetBoxDataSource for PowerOutletDataSource {
    type Object = PowerOutlet;
    type Model = PowerOutletModel;
    const TYPE_NAME: &'static str = "power_outlet";

    fn description() -> &'static str {
        "Use this data source to get information about a power outlet of a device in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = component_keys("power outlet");
        attributes.extend(vec![
            ("module_id", schema::computed_number("ID of the module the outlet belongs to.")),
            ("label", schema::computed_string("Physical label.")),
            ("type", schema::computed_string("Receptacle type, e.g. `iec-60320-c13`.")),
            ("power_port_id", schema::computed_number("ID of the power port feeding the outlet.")),
            ("feed_leg", schema::computed_string("Phase for three-phase feeds.")),
            ("description", schema::computed_string("Brief description.")),
            ("mark_connected", schema::computed_bool("Whether the outlet is treated as connected.")),
            ("display_name", schema::display_name("power outlet")),
            ("tags", schema::tags("power outlet")),
            ("custom_fields", schema::custom_fields("power outlet")),
        ]);
        attributes
    }

    fn lookup(model: &PowerOutletModel) -> Lookup {
        component_lookup(PowerOutlet::KIND, &model.id, &model.device, &model.name)
    }

    fn map(outlet: &PowerOutlet, model: &mut PowerOutletModel) {
        model.id = id_string(outlet.id);
        map_device(&mut model.device, outlet.device.as_ref());
        model.device_name = reference_name(outlet.device.as_ref());
        model.name = string_value(Some(&outlet.name));
        model.module_id = reference_id(outlet.module.as_ref());
        model.label = string_value(outlet.label.as_deref());
        model.outlet_type = choice_value(outlet.outlet_type.as_ref());
        model.power_port_id = reference_id(outlet.power_port.as_ref());
        model.feed_leg = choice_value(outlet.feed_leg.as_ref());
        model.description = string_value(outlet.description.as_deref());
        model.mark_connected = bool_value(outlet.mark_connected);
        model.display_name = string_value(outlet.display.as_deref());
        model.tags = tags_value(&outlet.tags);
        model.custom_fields = custom_fields_value(&outlet.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Front port
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontPortModel {
    pub id: Value<String>,
    pub device: Value<String>,
    pub device_name: Value<String>,
    pub name: Value<String>,
    pub module_id: Value<i64>,
    pub label: Value<String>,
    #[serde(rename = "type")]
    pub port_type: Value<String>,
    pub color: Value<String>,
    pub rear_port_id: Value<i64>,
    pub rear_port_position: Value<i64>,
    pub description: Value<String>,
    pub mark_connected: Value<bool>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_front_port`
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontPortDataSource;

impl NetBoxDataSource for FrontPortDataSource {
    type Object = FrontPort;
    type Model = FrontPortModel;
    const TYPE_NAME: &'static str = "front_port";

    fn description() -> &'static str {
        "Use this data source to get information about a front port of a device in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = component_keys("front port");
        attributes.extend(vec![
            ("module_id", schema::computed_number("ID of the module the port belongs to.")),
            ("label", schema::computed_string("Physical label.")),
            ("type", schema::computed_string("Port type, e.g. `lc`.")),
            ("color", schema::computed_string("Color as a six digit hex code.")),
            ("rear_port_id", schema::computed_number("ID of the rear port mapped to this port.")),
            ("rear_port_position", schema::computed_number("Position on the rear port.")),
            ("description", schema::computed_string("Brief description.")),
            ("mark_connected", schema::computed_bool("Whether the port is treated as connected.")),
            ("display_name", schema::display_name("front port")),
            ("tags", schema::tags("front port")),
            ("custom_fields", schema::custom_fields("front port")),
        ]);
        attributes
    }

    fn lookup(model: &FrontPortModel) -> Lookup {
        component_lookup(FrontPort::KIND, &model.id, &model.device, &model.name)
    }

    fn map(port: &FrontPort, model: &mut FrontPortModel) {
        model.id = id_string(port.id);
        map_device(&mut model.device, port.device.as_ref());
        model.device_name = reference_name(port.device.as_ref());
        model.name = string_value(Some(&port.name));
        model.module_id = reference_id(port.module.as_ref());
        model.label = string_value(port.label.as_deref());
        model.port_type = choice_value(port.port_type.as_ref());
        model.color = string_value(port.color.as_deref());
        model.rear_port_id = reference_id(port.rear_port.as_ref());
        model.rear_port_position = int_value(port.rear_port_position);
        model.description = string_value(port.description.as_deref());
        model.mark_connected = bool_value(port.mark_connected);
        model.display_name = string_value(port.display.as_deref());
        model.tags = tags_value(&port.tags);
        model.custom_fields = custom_fields_value(&port.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Device bay, inventory item, module
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceBayModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_id: Value<i64>,
    pub device_name: Value<String>,
    pub label: Value<String>,
    pub installed_device_id: Value<i64>,
    pub installed_device: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_device_bay`
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceBayDataSource;

impl NetBoxDataSource for DeviceBayDataSource {
    type Object = DeviceBay;
    type Model = DeviceBayModel;
    const TYPE_NAME: &'static str = "device_bay";

    fn description() -> &'static str {
        "Use this data source to get information about a device bay in NetBox. Bay names repeat across devices, so `device_id` narrows a lookup by `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the device bay. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the device bay.")),
            ("device_id", schema::lookup_number("ID of the parent device. Narrows a lookup by `name`.")),
            ("device_name", schema::computed_string("Name of the parent device.")),
            ("label", schema::computed_string("Physical label.")),
            ("installed_device_id", schema::computed_number("ID of the device installed in the bay.")),
            ("installed_device", schema::computed_string("Name of the device installed in the bay.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("device bay")),
            ("tags", schema::tags("device bay")),
            ("custom_fields", schema::custom_fields("device bay")),
        ]
    }

    fn lookup(model: &DeviceBayModel) -> Lookup {
        Lookup::new(DeviceBay::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("name", "name", &model.name),
            KeyPart::optional("device_id", "device_id", &model.device_id),
        ])
    }

    fn map(bay: &DeviceBay, model: &mut DeviceBayModel) {
        model.id = id_string(bay.id);
        model.name = string_value(Some(&bay.name));
        model.device_id = reference_id(bay.device.as_ref());
        model.device_name = reference_name(bay.device.as_ref());
        model.label = string_value(bay.label.as_deref());
        model.installed_device_id = reference_id(bay.installed_device.as_ref());
        model.installed_device = reference_name(bay.installed_device.as_ref());
        model.description = string_value(bay.description.as_deref());
        model.display_name = string_value(bay.display.as_deref());
        model.tags = tags_value(&bay.tags);
        model.custom_fields = custom_fields_value(&bay.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItemModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_id: Value<i64>,
    pub device_name: Value<String>,
    pub parent_id: Value<i64>,
    pub label: Value<String>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub manufacturer: Value<String>,
    pub manufacturer_id: Value<i64>,
    pub part_id: Value<String>,
    pub serial: Value<String>,
    pub asset_tag: Value<String>,
    pub discovered: Value<bool>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_inventory_item`
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryItemDataSource;

impl NetBoxDataSource for InventoryItemDataSource {
    type Object = InventoryItem;
    type Model = InventoryItemModel;
    const TYPE_NAME: &'static str = "inventory_item";

    fn description() -> &'static str {
        "Use this data source to get information about an inventory item in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the inventory item. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the inventory item.")),
            ("device_id", schema::lookup_number("ID of the device. Narrows a lookup by `name`.")),
            ("device_name", schema::computed_string("Name of the device.")),
            ("parent_id", schema::computed_number("ID of the parent inventory item.")),
            ("label", schema::computed_string("Physical label.")),
            ("role", schema::computed_string("Name of the inventory item role.")),
            ("role_id", schema::computed_number("ID of the inventory item role.")),
            ("manufacturer", schema::computed_string("Name of the manufacturer.")),
            ("manufacturer_id", schema::computed_number("ID of the manufacturer.")),
            ("part_id", schema::computed_string("Manufacturer part number.")),
            ("serial", schema::computed_string("Serial number.")),
            ("asset_tag", schema::computed_string("Unique asset tag.")),
            ("discovered", schema::computed_bool("Whether the item was discovered automatically.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("inventory item")),
            ("tags", schema::tags("inventory item")),
            ("custom_fields", schema::custom_fields("inventory item")),
        ]
    }

    fn lookup(model: &InventoryItemModel) -> Lookup {
        Lookup::new(InventoryItem::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("name", "name", &model.name),
            KeyPart::optional("device_id", "device_id", &model.device_id),
        ])
    }

    fn map(item: &InventoryItem, model: &mut InventoryItemModel) {
        model.id = id_string(item.id);
        model.name = string_value(Some(&item.name));
        model.device_id = reference_id(item.device.as_ref());
        model.device_name = reference_name(item.device.as_ref());
        model.parent_id = reference_id(item.parent.as_ref());
        model.label = string_value(item.label.as_deref());
        model.role = reference_name(item.role.as_ref());
        model.role_id = reference_id(item.role.as_ref());
        model.manufacturer = reference_name(item.manufacturer.as_ref());
        model.manufacturer_id = reference_id(item.manufacturer.as_ref());
        model.part_id = string_value(item.part_id.as_deref());
        model.serial = string_value(item.serial.as_deref());
        model.asset_tag = string_value(item.asset_tag.as_deref());
        model.discovered = bool_value(item.discovered);
        model.description = string_value(item.description.as_deref());
        model.display_name = string_value(item.display.as_deref());
        model.tags = tags_value(&item.tags);
        model.custom_fields = custom_fields_value(&item.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleModel {
    pub id: Value<String>,
    pub device: Value<String>,
    pub device_name: Value<String>,
    pub module_bay_id: Value<i64>,
    pub serial: Value<String>,
    pub module_type: Value<String>,
    pub module_type_id: Value<i64>,
    pub status: Value<String>,
    pub asset_tag: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_module`
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleDataSource;

impl NetBoxDataSource for ModuleDataSource {
    type Object = Module;
    type Model = ModuleModel;
    const TYPE_NAME: &'static str = "module";

    fn description() -> &'static str {
        "Use this data source to get information about a module installed in a device in NetBox. Without `id`, the module is selected by `device`, optionally narrowed by `module_bay_id` or `serial`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the module. Takes precedence over `device`.")),
            ("device", schema::lookup_string("ID or name of the device the module is installed in.")),
            ("device_name", schema::computed_string("Name of the device.")),
            ("module_bay_id", schema::lookup_number("ID of the module bay. Narrows a lookup by `device`.")),
            ("serial", schema::lookup_string("Serial number. Narrows a lookup by `device`.")),
            ("module_type", schema::computed_string("Model of the module type.")),
            ("module_type_id", schema::computed_number("ID of the module type.")),
            ("status", schema::computed_string("Operational status.")),
            ("asset_tag", schema::computed_string("Unique asset tag.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("module")),
            ("tags", schema::tags("module")),
            ("custom_fields", schema::custom_fields("module")),
        ]
    }

    fn lookup(model: &ModuleModel) -> Lookup {
        Lookup::new(Module::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("device", "device_id", &model.device).reference(DEVICES),
            KeyPart::optional("module_bay_id", "module_bay_id", &model.module_bay_id),
            KeyPart::optional("serial", "serial", &model.serial),
        ])
    }

    fn map(module: &Module, model: &mut ModuleModel) {
        model.id = id_string(module.id);
        map_device(&mut model.device, module.device.as_ref());
        model.device_name = reference_name(module.device.as_ref());
        model.module_bay_id = reference_id(module.module_bay.as_ref());
        model.serial = string_value(module.serial.as_deref());
        model.module_type = reference_display(module.module_type.as_ref());
        model.module_type_id = reference_id(module.module_type.as_ref());
        model.status = choice_value(module.status.as_ref());
        model.asset_tag = string_value(module.asset_tag.as_deref());
        model.description = string_value(module.description.as_deref());
        model.comments = string_value(module.comments.as_deref());
        model.display_name = string_value(module.display.as_deref());
        model.tags = tags_value(&module.tags);
        model.custom_fields = custom_fields_value(&module.custom_fields);
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

fn template_lookup(
    kind: &'static str,
    id: &Value<String>,
    name: &Value<String>,
    device_type_id: &Value<i64>,
    module_type_id: &Value<i64>,
) -> Lookup {
    Lookup::new(kind).id("id", id).composite(vec![
        KeyPart::required("name", "name", name),
        KeyPart::optional("device_type_id", "device_type_id", device_type_id),
        KeyPart::optional("module_type_id", "module_type_id", module_type_id),
    ])
}

fn template_keys(kind: &'static str) -> Vec<(&'static str, Attribute)> {
    vec![
        ("id", schema::lookup_string(&format!("ID of the {}. Takes precedence over `name`.", kind))),
        ("name", schema::lookup_string(&format!("Name of the {}.", kind))),
        ("device_type_id", schema::lookup_number("ID of the device type. Narrows a lookup by `name`.")),
        ("device_type", schema::computed_string("Model of the device type.")),
        ("module_type_id", schema::lookup_number("ID of the module type. Narrows a lookup by `name`.")),
        ("module_type", schema::computed_string("Model of the module type.")),
        ("label", schema::computed_string("Physical label given to created components.")),
        ("description", schema::computed_string("Brief description.")),
        ("display_name", schema::display_name(kind)),
    ]
}

fn port_template_attributes(kind: &'static str, type_example: &'static str) -> Vec<(&'static str, Attribute)> {
    let mut attributes = template_keys(kind);
    attributes.push(("type", schema::computed_string(type_example)));
    attributes
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolePortTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_type_id: Value<i64>,
    pub device_type: Value<String>,
    pub module_type_id: Value<i64>,
    pub module_type: Value<String>,
    pub label: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    #[serde(rename = "type")]
    pub port_type: Value<String>,
}

/// `netbox_console_port_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePortTemplateDataSource;

impl NetBoxDataSource for ConsolePortTemplateDataSource {
    type Object = ConsolePortTemplate;
    type Model = ConsolePortTemplateModel;
    const TYPE_NAME: &'static str = "console_port_template";

    fn description() -> &'static str {
        "Use this data source to get information about a console port template of a device type or module type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        port_template_attributes("console port template", "Port type, e.g. `rj-45`.")
    }

    fn lookup(model: &ConsolePortTemplateModel) -> Lookup {
        template_lookup(ConsolePortTemplate::KIND, &model.id, &model.name, &model.device_type_id, &model.module_type_id)
    }

    fn map(template: &ConsolePortTemplate, model: &mut ConsolePortTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.device_type_id = reference_id(template.device_type.as_ref());
        model.device_type = reference_display(template.device_type.as_ref());
        model.module_type_id = reference_id(template.module_type.as_ref());
        model.module_type = reference_display(template.module_type.as_ref());
        model.label = string_value(template.label.as_deref());
        model.description = string_value(template.description.as_deref());
        model.display_name = string_value(template.display.as_deref());
        model.port_type = choice_value(template.port_type.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RearPortTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_type_id: Value<i64>,
    pub device_type: Value<String>,
    pub module_type_id: Value<i64>,
    pub module_type: Value<String>,
    pub label: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    #[serde(rename = "type")]
    pub port_type: Value<String>,
    pub color: Value<String>,
    pub positions: Value<i64>,
}

/// `netbox_rear_port_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct RearPortTemplateDataSource;

impl NetBoxDataSource for RearPortTemplateDataSource {
    type Object = RearPortTemplate;
    type Model = RearPortTemplateModel;
    const TYPE_NAME: &'static str = "rear_port_template";

    fn description() -> &'static str {
        "Use this data source to get information about a rear port template of a device type or module type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = port_template_attributes("rear port template", "Port type, e.g. `mpo`.");
        attributes.extend(vec![
            ("color", schema::computed_string("Color as a six digit hex code.")),
            ("positions", schema::computed_number("Number of front ports that may be mapped.")),
        ]);
        attributes
    }

    fn lookup(model: &RearPortTemplateModel) -> Lookup {
        template_lookup(RearPortTemplate::KIND, &model.id, &model.name, &model.device_type_id, &model.module_type_id)
    }

    fn map(template: &RearPortTemplate, model: &mut RearPortTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.device_type_id = reference_id(template.device_type.as_ref());
        model.device_type = reference_display(template.device_type.as_ref());
        model.module_type_id = reference_id(template.module_type.as_ref());
        model.module_type = reference_display(template.module_type.as_ref());
        model.label = string_value(template.label.as_deref());
        model.description = string_value(template.description.as_deref());
        model.display_name = string_value(template.display.as_deref());
        model.port_type = choice_value(template.port_type.as_ref());
        model.color = string_value(template.color.as_deref());
        model.positions = int_value(template.positions);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontPortTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_type_id: Value<i64>,
    pub device_type: Value<String>,
    pub module_type_id: Value<i64>,
    pub module_type: Value<String>,
    pub label: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    #[serde(rename = "type")]
    pub port_type: Value<String>,
    pub color: Value<String>,
    pub rear_port_id: Value<i64>,
    pub rear_port_position: Value<i64>,
}

/// `netbox_front_port_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontPortTemplateDataSource;

impl NetBoxDataSource for FrontPortTemplateDataSource {
    type Object = FrontPortTemplate;
    type Model = FrontPortTemplateModel;
    const TYPE_NAME: &'static str = "front_port_template";

    fn description() -> &'static str {
        "Use this data source to get information about a front port template of a device type or module type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = port_template_attributes("front port template", "Port type, e.g. `lc`.");
        attributes.extend(vec![
            ("color", schema::computed_string("Color as a six digit hex code.")),
            ("rear_port_id", schema::computed_number("ID of the rear port template.")),
            ("rear_port_position", schema::computed_number("Position on the rear port template.")),
        ]);
        attributes
    }

    fn lookup(model: &FrontPortTemplateModel) -> Lookup {
        template_lookup(FrontPortTemplate::KIND, &model.id, &model.name, &model.device_type_id, &model.module_type_id)
    }

    fn map(template: &FrontPortTemplate, model: &mut FrontPortTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.device_type_id = reference_id(template.device_type.as_ref());
        model.device_type = reference_display(template.device_type.as_ref());
        model.module_type_id = reference_id(template.module_type.as_ref());
        model.module_type = reference_display(template.module_type.as_ref());
        model.label = string_value(template.label.as_deref());
        model.description = string_value(template.description.as_deref());
        model.display_name = string_value(template.display.as_deref());
        model.port_type = choice_value(template.port_type.as_ref());
        model.color = string_value(template.color.as_deref());
        model.rear_port_id = reference_id(template.rear_port.as_ref());
        model.rear_port_position = int_value(template.rear_port_position);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerPortTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_type_id: Value<i64>,
    pub device_type: Value<String>,
    pub module_type_id: Value<i64>,
    pub module_type: Value<String>,
    pub label: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    #[serde(rename = "type")]
    pub port_type: Value<String>,
    pub maximum_draw: Value<i64>,
    pub allocated_draw: Value<i64>,
}

/// `netbox_power_port_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerPortTemplateDataSource;

impl NetBoxDataSource for PowerPortTemplateDataSource {
    type Object = PowerPortTemplate;
    type Model = PowerPortTemplateModel;
    const TYPE_NAME: &'static str = "power_port_template";

    fn description() -> &'static str {
        "Use this data source to get information about a power port template of a device type or module type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = port_template_attributes("power port template", "Connector type, e.g. `iec-60320-c14`.");
        attributes.extend(vec![
            ("maximum_draw", schema::computed_number("Maximum power draw in watts.")),
            ("allocated_draw", schema::computed_number("Allocated power draw in watts.")),
        ]);
        attributes
    }

    fn lookup(model: &PowerPortTemplateModel) -> Lookup {
        template_lookup(PowerPortTemplate::KIND, &model.id, &model.name, &model.device_type_id, &model.module_type_id)
    }

    fn map(template: &PowerPortTemplate, model: &mut PowerPortTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.device_type_id = reference_id(template.device_type.as_ref());
        model.device_type = reference_display(template.device_type.as_ref());
        model.module_type_id = reference_id(template.module_type.as_ref());
        model.module_type = reference_display(template.module_type.as_ref());
        model.label = string_value(template.label.as_deref());
        model.description = string_value(template.description.as_deref());
        model.display_name = string_value(template.display.as_deref());
        model.port_type = choice_value(template.port_type.as_ref());
        model.maximum_draw = int_value(template.maximum_draw);
        model.allocated_draw = int_value(template.allocated_draw);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerOutletTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_type_id: Value<i64>,
    pub device_type: Value<String>,
    pub module_type_id: Value<i64>,
    pub module_type: Value<String>,
    pub label: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    #[serde(rename = "type")]
    pub outlet_type: Value<String>,
    pub power_port_id: Value<i64>,
    pub feed_leg: Value<String>,
}

/// `netbox_power_outlet_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerOutletTemplateDataSource;

impl NetBoxDataSource for PowerOutletTemplateDataSource {
    type Object = PowerOutletTemplate;
    type Model = PowerOutletTemplateModel;
    const TYPE_NAME: &'static str = "power_outlet_template";

    fn description() -> &'static str {
        "Use this data source to get information about a power outlet template of a device type or module type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = port_template_attributes("power outlet template", "Receptacle type, e.g. `iec-60320-c13`.");
        attributes.extend(vec![
            ("power_port_id", schema::computed_number("ID of the power port template feeding the outlet.")),
            ("feed_leg", schema::computed_string("Phase for three-phase feeds.")),
        ]);
        attributes
    }

    fn lookup(model: &PowerOutletTemplateModel) -> Lookup {
        template_lookup(PowerOutletTemplate::KIND, &model.id, &model.name, &model.device_type_id, &model.module_type_id)
    }

    fn map(template: &PowerOutletTemplate, model: &mut PowerOutletTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.device_type_id = reference_id(template.device_type.as_ref());
        model.device_type = reference_display(template.device_type.as_ref());
        model.module_type_id = reference_id(template.module_type.as_ref());
        model.module_type = reference_display(template.module_type.as_ref());
        model.label = string_value(template.label.as_deref());
        model.description = string_value(template.description.as_deref());
        model.display_name = string_value(template.display.as_deref());
        model.outlet_type = choice_value(template.outlet_type.as_ref());
        model.power_port_id = reference_id(template.power_port.as_ref());
        model.feed_leg = choice_value(template.feed_leg.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_type_id: Value<i64>,
    pub device_type: Value<String>,
    pub module_type_id: Value<i64>,
    pub module_type: Value<String>,
    pub label: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    #[serde(rename = "type")]
    pub interface_type: Value<String>,
    pub enabled: Value<bool>,
    pub mgmt_only: Value<bool>,
    pub bridge_id: Value<i64>,
    pub poe_mode: Value<String>,
    pub poe_type: Value<String>,
    pub rf_role: Value<String>,
}

/// `netbox_interface_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceTemplateDataSource;

impl NetBoxDataSource for InterfaceTemplateDataSource {
    type Object = InterfaceTemplate;
    type Model = InterfaceTemplateModel;
    const TYPE_NAME: &'static str = "interface_template";

    fn description() -> &'static str {
        "Use this data source to get information about an interface template of a device type or module type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        let mut attributes = port_template_attributes("interface template", "Interface type, e.g. `1000base-t`.");
        attributes.extend(vec![
            ("enabled", schema::computed_bool("Whether created interfaces start enabled.")),
            ("mgmt_only", schema::computed_bool("Whether created interfaces are management only.")),
            ("bridge_id", schema::computed_number("ID of the bridge interface template.")),
            ("poe_mode", schema::computed_string("PoE mode.")),
            ("poe_type", schema::computed_string("PoE type.")),
            ("rf_role", schema::computed_string("Wireless role.")),
        ]);
        attributes
    }

    fn lookup(model: &InterfaceTemplateModel) -> Lookup {
        template_lookup(InterfaceTemplate::KIND, &model.id, &model.name, &model.device_type_id, &model.module_type_id)
    }

    fn map(template: &InterfaceTemplate, model: &mut InterfaceTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.device_type_id = reference_id(template.device_type.as_ref());
        model.device_type = reference_display(template.device_type.as_ref());
        model.module_type_id = reference_id(template.module_type.as_ref());
        model.module_type = reference_display(template.module_type.as_ref());
        model.label = string_value(template.label.as_deref());
        model.description = string_value(template.description.as_deref());
        model.display_name = string_value(template.display.as_deref());
        model.interface_type = choice_value(template.interface_type.as_ref());
        model.enabled = bool_value(template.enabled);
        model.mgmt_only = bool_value(template.mgmt_only);
        model.bridge_id = reference_id(template.bridge.as_ref());
        model.poe_mode = choice_value(template.poe_mode.as_ref());
        model.poe_type = choice_value(template.poe_type.as_ref());
        model.rf_role = choice_value(template.rf_role.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItemTemplateModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub device_type_id: Value<i64>,
    pub device_type: Value<String>,
    pub parent_id: Value<i64>,
    pub label: Value<String>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub manufacturer: Value<String>,
    pub manufacturer_id: Value<i64>,
    pub part_id: Value<String>,
    pub component_type: Value<String>,
    pub component_id: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
}

/// `netbox_inventory_item_template`
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryItemTemplateDataSource;

impl NetBoxDataSource for InventoryItemTemplateDataSource {
    type Object = InventoryItemTemplate;
    type Model = InventoryItemTemplateModel;
    const TYPE_NAME: &'static str = "inventory_item_template";

    fn description() -> &'static str {
        "Use this data source to get information about an inventory item template of a device type in NetBox by ID."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::required_string("ID of the inventory item template.")),
            ("name", schema::computed_string("Name of the inventory item template.")),
            ("device_type_id", schema::computed_number("ID of the device type.")),
            ("device_type", schema::computed_string("Model of the device type.")),
            ("parent_id", schema::computed_number("ID of the parent template.")),
            ("label", schema::computed_string("Physical label given to created items.")),
            ("role", schema::computed_string("Name of the inventory item role.")),
            ("role_id", schema::computed_number("ID of the inventory item role.")),
            ("manufacturer", schema::computed_string("Name of the manufacturer.")),
            ("manufacturer_id", schema::computed_number("ID of the manufacturer.")),
            ("part_id", schema::computed_string("Manufacturer part number.")),
            ("component_type", schema::computed_string("Content type of the assigned component.")),
            ("component_id", schema::computed_number("ID of the assigned component.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("inventory item template")),
        ]
    }

    fn lookup(model: &InventoryItemTemplateModel) -> Lookup {
        Lookup::new(InventoryItemTemplate::KIND).id("id", &model.id)
    }

    fn map(template: &InventoryItemTemplate, model: &mut InventoryItemTemplateModel) {
        model.id = id_string(template.id);
        model.name = string_value(Some(&template.name));
        model.device_type_id = reference_id(template.device_type.as_ref());
        model.device_type = reference_display(template.device_type.as_ref());
        model.parent_id = reference_id(template.parent.as_ref());
        model.label = string_value(template.label.as_deref());
        model.role = reference_name(template.role.as_ref());
        model.role_id = reference_id(template.role.as_ref());
        model.manufacturer = reference_name(template.manufacturer.as_ref());
        model.manufacturer_id = reference_id(template.manufacturer.as_ref());
        model.part_id = string_value(template.part_id.as_deref());
        model.component_type = string_value(template.component_type.as_deref());
        model.component_id = int_value(template.component_id);
        model.description = string_value(template.description.as_deref());
        model.display_name = string_value(template.display.as_deref());
    }
}
