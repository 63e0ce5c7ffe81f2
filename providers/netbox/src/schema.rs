//! Schema building helpers shared by every data source.

use std::collections::HashMap;
use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block, Description, Schema};

/// Schema version of every data source
pub const SCHEMA_VERSION: i64 = 1;

fn attribute(attr_type: AttributeType, description: &str, constraint: AttributeConstraint) -> Attribute {
    Attribute {
        attr_type,
        description: Description::markdown(description.to_string()),
        constraint,
        sensitive: false,
        deprecated: false,
    }
}

/// Optional string the user may set to select the object; filled in on read
pub fn lookup_string(description: &str) -> Attribute {
    attribute(AttributeType::String, description, AttributeConstraint::OptionalComputed)
}

/// Optional number the user may set to select the object; filled in on read
pub fn lookup_number(description: &str) -> Attribute {
    attribute(AttributeType::Number, description, AttributeConstraint::OptionalComputed)
}

/// Read-only string
pub fn computed_string(description: &str) -> Attribute {
    attribute(AttributeType::String, description, AttributeConstraint::Computed)
}

/// Read-only number
pub fn computed_number(description: &str) -> Attribute {
    attribute(AttributeType::Number, description, AttributeConstraint::Computed)
}

/// Read-only boolean
pub fn computed_bool(description: &str) -> Attribute {
    attribute(AttributeType::Bool, description, AttributeConstraint::Computed)
}

/// Read-only list of strings
pub fn computed_string_list(description: &str) -> Attribute {
    attribute(
        AttributeType::List(Box::new(AttributeType::String)),
        description,
        AttributeConstraint::Computed,
    )
}

/// Read-only list of numbers
pub fn computed_number_list(description: &str) -> Attribute {
    attribute(
        AttributeType::List(Box::new(AttributeType::Number)),
        description,
        AttributeConstraint::Computed,
    )
}

/// Read-only list of objects
pub fn computed_object_list(description: &str, fields: &[(&str, AttributeType)]) -> Attribute {
    attribute(
        AttributeType::List(Box::new(object_type(fields))),
        description,
        AttributeConstraint::Computed,
    )
}

/// Required string
pub fn required_string(description: &str) -> Attribute {
    attribute(AttributeType::String, description, AttributeConstraint::Required)
}

/// Required list of strings
pub fn required_string_list(description: &str) -> Attribute {
    attribute(
        AttributeType::List(Box::new(AttributeType::String)),
        description,
        AttributeConstraint::Required,
    )
}

/// Provider configuration string
pub fn optional_string(description: &str) -> Attribute {
    attribute(AttributeType::String, description, AttributeConstraint::Optional)
}

/// Provider configuration string that must never be shown
pub fn sensitive_string(description: &str) -> Attribute {
    Attribute {
        sensitive: true,
        ..optional_string(description)
    }
}

/// Provider configuration boolean
pub fn optional_bool(description: &str) -> Attribute {
    attribute(AttributeType::Bool, description, AttributeConstraint::Optional)
}

/// Provider configuration number
pub fn optional_number(description: &str) -> Attribute {
    attribute(AttributeType::Number, description, AttributeConstraint::Optional)
}

fn object_type(fields: &[(&str, AttributeType)]) -> AttributeType {
    AttributeType::Object(
        fields
            .iter()
            .map(|(name, attr_type)| ((*name).to_string(), attr_type.clone()))
            .collect(),
    )
}

/// `tags` attribute: set of `{name, slug}`
pub fn tags(kind: &str) -> Attribute {
    attribute(
        AttributeType::Set(Box::new(object_type(&[
            ("name", AttributeType::String),
            ("slug", AttributeType::String),
        ]))),
        &format!("Tags assigned to the {}.", kind),
        AttributeConstraint::Computed,
    )
}

/// `custom_fields` attribute: set of `{name, type, value}`
pub fn custom_fields(kind: &str) -> Attribute {
    attribute(
        AttributeType::Set(Box::new(object_type(&[
            ("name", AttributeType::String),
            ("type", AttributeType::String),
            ("value", AttributeType::String),
        ]))),
        &format!(
            "Custom fields set on the {}. The type is inferred from the value.",
            kind
        ),
        AttributeConstraint::Computed,
    )
}

/// `display_name` attribute
pub fn display_name(kind: &str) -> Attribute {
    computed_string(&format!("Display name of the {} as rendered by NetBox.", kind))
}

/// Assemble a data source schema
pub fn build(description: &str, attributes: Vec<(&'static str, Attribute)>) -> Schema {
    Schema {
        version: SCHEMA_VERSION,
        block: Block {
            attributes: attributes
                .into_iter()
                .map(|(name, attr)| (name.to_string(), attr))
                .collect::<HashMap<_, _>>(),
            description: Description::markdown(description.to_string()),
            ..Default::default()
        },
    }
}
