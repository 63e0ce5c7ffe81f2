//! Virtualization data sources.

use super::{slugged, NetBoxDataSource};
use crate::lookup::{KeyPart, Lookup, LookupValue, Reference};
use crate::mapping::*;
use crate::schema;
use netbox_client::{Cluster, ClusterType, NetBoxObject, VirtualDisk, VirtualMachine, VmInterface};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterModel {
    pub id: Value<String>,
    pub name: Value<String>,
    #[serde(rename = "type")]
    pub cluster_type: Value<String>,
    pub type_id: Value<i64>,
    pub group: Value<String>,
    pub group_id: Value<i64>,
    pub status: Value<String>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_cluster`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterDataSource;

impl NetBoxDataSource for ClusterDataSource {
    type Object = Cluster;
    type Model = ClusterModel;
    const TYPE_NAME: &'static str = "cluster";

    fn description() -> &'static str {
        "Use this data source to get information about a virtualization cluster in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the cluster. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the cluster.")),
            ("type", schema::computed_string("Name of the cluster type.")),
            ("type_id", schema::computed_number("ID of the cluster type.")),
            ("group", schema::computed_string("Name of the cluster group.")),
            ("group_id", schema::computed_number("ID of the cluster group.")),
            ("status", schema::computed_string("Operational status.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("site", schema::computed_string("Name of the site.")),
            ("site_id", schema::computed_number("ID of the site.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("cluster")),
            ("tags", schema::tags("cluster")),
            ("custom_fields", schema::custom_fields("cluster")),
        ]
    }

    fn lookup(model: &ClusterModel) -> Lookup {
        Lookup::new(Cluster::KIND).id("id", &model.id).key("name", "name", &model.name)
    }

    fn map(cluster: &Cluster, model: &mut ClusterModel) {
        model.id = id_string(cluster.id);
        model.name = string_value(Some(&cluster.name));
        model.cluster_type = reference_name(cluster.cluster_type.as_ref());
        model.type_id = reference_id(cluster.cluster_type.as_ref());
        model.group = reference_name(cluster.group.as_ref());
        model.group_id = reference_id(cluster.group.as_ref());
        model.status = choice_value(cluster.status.as_ref());
        model.tenant = reference_name(cluster.tenant.as_ref());
        model.tenant_id = reference_id(cluster.tenant.as_ref());
        model.site = reference_name(cluster.site.as_ref());
        model.site_id = reference_id(cluster.site.as_ref());
        model.description = string_value(cluster.description.as_deref());
        model.comments = string_value(cluster.comments.as_deref());
        model.display_name = string_value(cluster.display.as_deref());
        model.tags = tags_value(&cluster.tags);
        model.custom_fields = custom_fields_value(&cluster.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterTypeModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_cluster_type`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterTypeDataSource;

impl NetBoxDataSource for ClusterTypeDataSource {
    type Object = ClusterType;
    type Model = ClusterTypeModel;
    const TYPE_NAME: &'static str = "cluster_type";

    fn description() -> &'static str {
        "Use this data source to get information about a cluster type in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the cluster type. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the cluster type.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("cluster type")),
            ("tags", schema::tags("cluster type")),
            ("custom_fields", schema::custom_fields("cluster type")),
        ]
    }

    fn lookup(model: &ClusterTypeModel) -> Lookup {
        slugged::<ClusterType>(&model.id, &model.slug, &model.name)
    }

    fn map(cluster_type: &ClusterType, model: &mut ClusterTypeModel) {
        model.id = id_string(cluster_type.id);
        model.name = string_value(Some(&cluster_type.name));
        model.slug = string_value(Some(&cluster_type.slug));
        model.description = string_value(cluster_type.description.as_deref());
        model.display_name = string_value(cluster_type.display.as_deref());
        model.tags = tags_value(&cluster_type.tags);
        model.custom_fields = custom_fields_value(&cluster_type.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachineModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub status: Value<String>,
    pub site: Value<String>,
    pub site_id: Value<i64>,
    pub cluster: Value<String>,
    pub cluster_id: Value<i64>,
    pub role: Value<String>,
    pub role_id: Value<i64>,
    pub tenant: Value<String>,
    pub tenant_id: Value<i64>,
    pub platform: Value<String>,
    pub platform_id: Value<i64>,
    pub primary_ip4: Value<String>,
    pub primary_ip6: Value<String>,
    pub vcpus: Value<f64>,
    pub memory: Value<i64>,
    pub disk: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_virtual_machine`
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualMachineDataSource;

impl NetBoxDataSource for VirtualMachineDataSource {
    type Object = VirtualMachine;
    type Model = VirtualMachineModel;
    const TYPE_NAME: &'static str = "virtual_machine";

    fn description() -> &'static str {
        "Use this data source to get information about a virtual machine in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the virtual machine. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the virtual machine.")),
            ("status", schema::computed_string("Operational status.")),
            ("site", schema::computed_string("Name of the site.")),
            ("site_id", schema::computed_number("ID of the site.")),
            ("cluster", schema::computed_string("Name of the cluster.")),
            ("cluster_id", schema::computed_number("ID of the cluster.")),
            ("role", schema::computed_string("Name of the device role.")),
            ("role_id", schema::computed_number("ID of the device role.")),
            ("tenant", schema::computed_string("Name of the tenant.")),
            ("tenant_id", schema::computed_number("ID of the tenant.")),
            ("platform", schema::computed_string("Name of the platform.")),
            ("platform_id", schema::computed_number("ID of the platform.")),
            ("primary_ip4", schema::computed_string("Primary IPv4 address with prefix length.")),
            ("primary_ip6", schema::computed_string("Primary IPv6 address with prefix length.")),
            ("vcpus", schema::computed_number("Number of virtual CPUs.")),
            ("memory", schema::computed_number("Memory in MB.")),
            ("disk", schema::computed_number("Disk space in GB.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("virtual machine")),
            ("tags", schema::tags("virtual machine")),
            ("custom_fields", schema::custom_fields("virtual machine")),
        ]
    }

    fn lookup(model: &VirtualMachineModel) -> Lookup {
        Lookup::new(VirtualMachine::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
    }

    fn map(vm: &VirtualMachine, model: &mut VirtualMachineModel) {
        model.id = id_string(vm.id);
        model.name = string_value(Some(&vm.name));
        model.status = choice_value(vm.status.as_ref());
        model.site = reference_name(vm.site.as_ref());
        model.site_id = reference_id(vm.site.as_ref());
        model.cluster = reference_name(vm.cluster.as_ref());
        model.cluster_id = reference_id(vm.cluster.as_ref());
        model.role = reference_name(vm.role.as_ref());
        model.role_id = reference_id(vm.role.as_ref());
        model.tenant = reference_name(vm.tenant.as_ref());
        model.tenant_id = reference_id(vm.tenant.as_ref());
        model.platform = reference_name(vm.platform.as_ref());
        model.platform_id = reference_id(vm.platform.as_ref());
        model.primary_ip4 = string_value(vm.primary_ip4.as_ref().and_then(|ip| ip.address.as_deref()));
        model.primary_ip6 = string_value(vm.primary_ip6.as_ref().and_then(|ip| ip.address.as_deref()));
        model.vcpus = float_value(vm.vcpus);
        model.memory = int_value(vm.memory);
        model.disk = int_value(vm.disk);
        model.description = string_value(vm.description.as_deref());
        model.comments = string_value(vm.comments.as_deref());
        model.display_name = string_value(vm.display.as_deref());
        model.tags = tags_value(&vm.tags);
        model.custom_fields = custom_fields_value(&vm.custom_fields);
    }
}

const VIRTUAL_MACHINES: Reference = Reference::by_name(VirtualMachine::ENDPOINT, VirtualMachine::KIND);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VmInterfaceModel {
    pub id: Value<String>,
    pub virtual_machine: Value<String>,
    pub virtual_machine_name: Value<String>,
    pub name: Value<String>,
    pub enabled: Value<bool>,
    pub parent_id: Value<i64>,
    pub bridge_id: Value<i64>,
    pub mtu: Value<i64>,
    pub mac_address: Value<String>,
    pub mode: Value<String>,
    pub untagged_vlan_id: Value<i64>,
    pub vrf: Value<String>,
    pub vrf_id: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_vm_interface`
#[derive(Debug, Clone, Copy, Default)]
pub struct VmInterfaceDataSource;

impl NetBoxDataSource for VmInterfaceDataSource {
    type Object = VmInterface;
    type Model = VmInterfaceModel;
    const TYPE_NAME: &'static str = "vm_interface";

    fn description() -> &'static str {
        "Use this data source to get information about an interface of a virtual machine in NetBox, by `id` or by `virtual_machine` and `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the VM interface. Takes precedence over `virtual_machine` and `name`.")),
            ("virtual_machine", schema::lookup_string("ID or name of the virtual machine. Used together with `name`.")),
            ("virtual_machine_name", schema::computed_string("Name of the virtual machine.")),
            ("name", schema::lookup_string("Name of the interface. Used together with `virtual_machine`.")),
            ("enabled", schema::computed_bool("Whether the interface is enabled.")),
            ("parent_id", schema::computed_number("ID of the parent interface.")),
            ("bridge_id", schema::computed_number("ID of the bridge interface.")),
            ("mtu", schema::computed_number("MTU.")),
            ("mac_address", schema::computed_string("MAC address.")),
            ("mode", schema::computed_string("802.1Q mode.")),
            ("untagged_vlan_id", schema::computed_number("ID of the untagged VLAN.")),
            ("vrf", schema::computed_string("Name of the VRF.")),
            ("vrf_id", schema::computed_number("ID of the VRF.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("VM interface")),
            ("tags", schema::tags("VM interface")),
            ("custom_fields", schema::custom_fields("VM interface")),
        ]
    }

    fn lookup(model: &VmInterfaceModel) -> Lookup {
        Lookup::new(VmInterface::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("virtual_machine", "virtual_machine_id", &model.virtual_machine)
                .reference(VIRTUAL_MACHINES),
            KeyPart::required("name", "name", &model.name),
        ])
    }

    fn map(interface: &VmInterface, model: &mut VmInterfaceModel) {
        model.id = id_string(interface.id);
        // A virtual machine given by name stays as configured.
        if model.virtual_machine.lookup_text().is_none() {
            model.virtual_machine = reference_id_string(interface.virtual_machine.as_ref());
        }
        model.virtual_machine_name = reference_name(interface.virtual_machine.as_ref());
        model.name = string_value(Some(&interface.name));
        model.enabled = bool_value(interface.enabled);
        model.parent_id = reference_id(interface.parent.as_ref());
        model.bridge_id = reference_id(interface.bridge.as_ref());
        model.mtu = int_value(interface.mtu);
        model.mac_address = string_value(interface.mac_address.as_deref());
        model.mode = choice_value(interface.mode.as_ref());
        model.untagged_vlan_id = reference_id(interface.untagged_vlan.as_ref());
        model.vrf = reference_name(interface.vrf.as_ref());
        model.vrf_id = reference_id(interface.vrf.as_ref());
        model.description = string_value(interface.description.as_deref());
        model.display_name = string_value(interface.display.as_deref());
        model.tags = tags_value(&interface.tags);
        model.custom_fields = custom_fields_value(&interface.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualDiskModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub virtual_machine_id: Value<i64>,
    pub virtual_machine: Value<String>,
    pub size: Value<i64>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_virtual_disk`
#[derive(Debug, Clone, Copy, Default)]
pub struct VirtualDiskDataSource;

impl NetBoxDataSource for VirtualDiskDataSource {
    type Object = VirtualDisk;
    type Model = VirtualDiskModel;
    const TYPE_NAME: &'static str = "virtual_disk";

    fn description() -> &'static str {
        "Use this data source to get information about a virtual disk in NetBox. Set `virtual_machine_id` to narrow a lookup by `name`."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the virtual disk. Takes precedence over `name`.")),
            ("name", schema::lookup_string("Name of the virtual disk.")),
            ("virtual_machine_id", schema::lookup_number("ID of the virtual machine. Narrows a lookup by `name`.")),
            ("virtual_machine", schema::computed_string("Name of the virtual machine.")),
            ("size", schema::computed_number("Size in MB.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("virtual disk")),
            ("tags", schema::tags("virtual disk")),
            ("custom_fields", schema::custom_fields("virtual disk")),
        ]
    }

    fn lookup(model: &VirtualDiskModel) -> Lookup {
        Lookup::new(VirtualDisk::KIND).id("id", &model.id).composite(vec![
            KeyPart::required("name", "name", &model.name),
            KeyPart::optional("virtual_machine_id", "virtual_machine_id", &model.virtual_machine_id),
        ])
    }

    fn map(disk: &VirtualDisk, model: &mut VirtualDiskModel) {
        model.id = id_string(disk.id);
        model.name = string_value(Some(&disk.name));
        model.virtual_machine_id = reference_id(disk.virtual_machine.as_ref());
        model.virtual_machine = reference_name(disk.virtual_machine.as_ref());
        model.size = int_value(disk.size);
        model.description = string_value(disk.description.as_deref());
        model.display_name = string_value(disk.display.as_deref());
        model.tags = tags_value(&disk.tags);
        model.custom_fields = custom_fields_value(&disk.custom_fields);
    }
}
