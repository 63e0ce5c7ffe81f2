//! Tenancy data sources: tenants, contacts and their groupings.

use super::{slugged, NetBoxDataSource};
use crate::lookup::Lookup;
use crate::mapping::*;
use crate::schema;
use netbox_client::{Contact, ContactGroup, ContactRole, NetBoxObject, Tenant, TenantGroup};
use serde::{Deserialize, Serialize};
use tf_provider::value::Value;
use tf_provider::schema::Attribute;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub group: Value<String>,
    pub group_id: Value<i64>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_tenant`
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantDataSource;

impl NetBoxDataSource for TenantDataSource {
    type Object = Tenant;
    type Model = TenantModel;
    const TYPE_NAME: &'static str = "tenant";

    fn description() -> &'static str {
        "Use this data source to get information about a tenant in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the tenant. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the tenant.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("group", schema::computed_string("Name of the tenant group.")),
            ("group_id", schema::computed_number("ID of the tenant group.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("tenant")),
            ("tags", schema::tags("tenant")),
            ("custom_fields", schema::custom_fields("tenant")),
        ]
    }

    fn lookup(model: &TenantModel) -> Lookup {
        slugged::<Tenant>(&model.id, &model.slug, &model.name)
    }

    fn map(tenant: &Tenant, model: &mut TenantModel) {
        model.id = id_string(tenant.id);
        model.name = string_value(Some(&tenant.name));
        model.slug = string_value(Some(&tenant.slug));
        model.group = reference_name(tenant.group.as_ref());
        model.group_id = reference_id(tenant.group.as_ref());
        model.description = string_value(tenant.description.as_deref());
        model.comments = string_value(tenant.comments.as_deref());
        model.display_name = string_value(tenant.display.as_deref());
        model.tags = tags_value(&tenant.tags);
        model.custom_fields = custom_fields_value(&tenant.custom_fields);
    }
}

/// Tenant groups and contact groups share one shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupModel {
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

fn group_attributes(kind: &str) -> Vec<(&'static str, Attribute)> {
    vec![
        ("id", schema::lookup_string(&format!("ID of the {kind}. Takes precedence over `slug` and `name`."))),
        ("name", schema::lookup_string(&format!("Name of the {kind}."))),
        ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
        ("parent", schema::computed_string(&format!("Name of the parent {kind}."))),
        ("parent_id", schema::computed_number(&format!("ID of the parent {kind}."))),
        ("description", schema::computed_string("Brief description.")),
        ("display_name", schema::display_name(kind)),
        ("tags", schema::tags(kind)),
        ("custom_fields", schema::custom_fields(kind)),
    ]
}

/// `netbox_tenant_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct TenantGroupDataSource;

impl NetBoxDataSource for TenantGroupDataSource {
    type Object = TenantGroup;
    type Model = GroupModel;
    const TYPE_NAME: &'static str = "tenant_group";

    fn description() -> &'static str {
        "Use this data source to get information about a tenant group in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        group_attributes("tenant group")
    }

    fn lookup(model: &GroupModel) -> Lookup {
        slugged::<TenantGroup>(&model.id, &model.slug, &model.name)
    }

    fn map(group: &TenantGroup, model: &mut GroupModel) {
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

/// `netbox_contact_group`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactGroupDataSource;

impl NetBoxDataSource for ContactGroupDataSource {
    type Object = ContactGroup;
    type Model = GroupModel;
    const TYPE_NAME: &'static str = "contact_group";

    fn description() -> &'static str {
        "Use this data source to get information about a contact group in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        group_attributes("contact group")
    }

    fn lookup(model: &GroupModel) -> Lookup {
        slugged::<ContactGroup>(&model.id, &model.slug, &model.name)
    }

    fn map(group: &ContactGroup, model: &mut GroupModel) {
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub email: Value<String>,
    pub group: Value<String>,
    pub group_id: Value<i64>,
    pub title: Value<String>,
    pub phone: Value<String>,
    pub address: Value<String>,
    pub link: Value<String>,
    pub description: Value<String>,
    pub comments: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_contact`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactDataSource;

impl NetBoxDataSource for ContactDataSource {
    type Object = Contact;
    type Model = ContactModel;
    const TYPE_NAME: &'static str = "contact";

    fn description() -> &'static str {
        "Use this data source to get information about a contact in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the contact. Takes precedence over `name` and `email`.")),
            ("name", schema::lookup_string("Name of the contact. Takes precedence over `email`.")),
            ("email", schema::lookup_string("Email address of the contact.")),
            ("group", schema::computed_string("Name of the contact group.")),
            ("group_id", schema::computed_number("ID of the contact group.")),
            ("title", schema::computed_string("Job title.")),
            ("phone", schema::computed_string("Phone number.")),
            ("address", schema::computed_string("Postal address.")),
            ("link", schema::computed_string("External link.")),
            ("description", schema::computed_string("Brief description.")),
            ("comments", schema::computed_string("Comments.")),
            ("display_name", schema::display_name("contact")),
            ("tags", schema::tags("contact")),
            ("custom_fields", schema::custom_fields("contact")),
        ]
    }

    fn lookup(model: &ContactModel) -> Lookup {
        Lookup::new(Contact::KIND)
            .id("id", &model.id)
            .key("name", "name", &model.name)
            .key("email", "email", &model.email)
    }

    fn map(contact: &Contact, model: &mut ContactModel) {
        model.id = id_string(contact.id);
        model.name = string_value(Some(&contact.name));
        model.email = string_value(contact.email.as_deref());
        model.group = reference_name(contact.group.as_ref());
        model.group_id = reference_id(contact.group.as_ref());
        model.title = string_value(contact.title.as_deref());
        model.phone = string_value(contact.phone.as_deref());
        model.address = string_value(contact.address.as_deref());
        model.link = string_value(contact.link.as_deref());
        model.description = string_value(contact.description.as_deref());
        model.comments = string_value(contact.comments.as_deref());
        model.display_name = string_value(contact.display.as_deref());
        model.tags = tags_value(&contact.tags);
        model.custom_fields = custom_fields_value(&contact.custom_fields);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactRoleModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub slug: Value<String>,
    pub description: Value<String>,
    pub display_name: Value<String>,
    pub tags: Value<Vec<TagModel>>,
    pub custom_fields: Value<Vec<CustomFieldModel>>,
}

/// `netbox_contact_role`
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactRoleDataSource;

impl NetBoxDataSource for ContactRoleDataSource {
    type Object = ContactRole;
    type Model = ContactRoleModel;
    const TYPE_NAME: &'static str = "contact_role";

    fn description() -> &'static str {
        "Use this data source to get information about a contact role in NetBox."
    }

    fn attributes() -> Vec<(&'static str, Attribute)> {
        vec![
            ("id", schema::lookup_string("ID of the contact role. Takes precedence over `slug` and `name`.")),
            ("name", schema::lookup_string("Name of the contact role.")),
            ("slug", schema::lookup_string("URL-friendly slug. Takes precedence over `name`.")),
            ("description", schema::computed_string("Brief description.")),
            ("display_name", schema::display_name("contact role")),
            ("tags", schema::tags("contact role")),
            ("custom_fields", schema::custom_fields("contact role")),
        ]
    }

    fn lookup(model: &ContactRoleModel) -> Lookup {
        slugged::<ContactRole>(&model.id, &model.slug, &model.name)
    }

    fn map(role: &ContactRole, model: &mut ContactRoleModel) {
        model.id = id_string(role.id);
        model.name = string_value(Some(&role.name));
        model.slug = string_value(Some(&role.slug));
        model.description = string_value(role.description.as_deref());
        model.display_name = string_value(role.display.as_deref());
        model.tags = tags_value(&role.tags);
        model.custom_fields = custom_fields_value(&role.custom_fields);
    }
}
