//! Plural query data sources (`netbox_devices`, `netbox_prefixes`, ...).
//!
//! A query is a set of `filter` blocks. Blocks are ANDed and the values of a
//! block are ORed, which is how NetBox treats repeated query parameters.
//! Filter names are checked against a per-kind allow-list before anything is
//! sent. `custom_field` and `custom_field_value` have no server-side
//! equivalent and are applied to the listed records.

use crate::error::LookupError;
use crate::lookup::parse_id;
use crate::provider::ProviderData;
use crate::schema;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tf_provider::schema::{AttributeType, Block, Description, NestedBlock, Schema};
use tf_provider::value::Value;
use tf_provider::value::ValueEmpty;
use tf_provider::{DataSource, Diagnostics};
use tracing::debug;

const CUSTOM_FIELD: &str = "custom_field";
const CUSTOM_FIELD_VALUE: &str = "custom_field_value";

/// How the values of an allowed filter are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// Any number of values, passed through
    Many,
    /// Exactly one value
    Single,
    /// Numeric IDs
    Ids,
    /// Exactly one boolean (`true`/`1`/`yes`, `false`/`0`/`no`)
    Bool,
}

/// One queryable object kind
#[derive(Debug, Clone, Copy)]
pub struct QueryKind {
    /// Type name without the provider prefix
    pub type_name: &'static str,
    /// List endpoint
    pub endpoint: &'static str,
    /// Singular kind used in error messages
    pub kind: &'static str,
    /// Plural used in descriptions
    pub plural: &'static str,
    /// Field reported in `names`
    pub name_field: &'static str,
    /// Allowed server-side filters
    pub filters: &'static [(&'static str, FilterRule)],
}

impl QueryKind {
    fn rule(&self, name: &str) -> Option<FilterRule> {
        self.filters
            .iter()
            .find(|(allowed, _)| *allowed == name)
            .map(|(_, rule)| *rule)
    }

    fn filter_names(&self) -> String {
        self.filters
            .iter()
            .map(|(name, _)| *name)
            .chain([CUSTOM_FIELD, CUSTOM_FIELD_VALUE])
            .map(|name| format!("`{}`", name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

use FilterRule::{Bool, Ids, Many, Single};

/// Every query data source
pub const QUERY_KINDS: &[QueryKind] = &[
    QueryKind {
        type_name: "devices",
        endpoint: "dcim/devices",
        kind: "device",
        plural: "devices",
        name_field: "name",
        filters: &[
            ("name", Many),
            ("name__ic", Many),
            ("serial", Many),
            ("status", Many),
            ("site", Many),
            ("tag", Many),
            ("q", Single),
        ],
    },
    QueryKind {
        type_name: "interfaces",
        endpoint: "dcim/interfaces",
        kind: "interface",
        plural: "interfaces",
        name_field: "name",
        filters: &[
            ("name", Many),
            ("name__ic", Many),
            ("device", Many),
            ("device_id", Ids),
            ("site", Many),
            ("site_id", Ids),
            ("type", Many),
            ("enabled", Bool),
            ("tag", Many),
            ("q", Single),
        ],
    },
    QueryKind {
        type_name: "virtual_machines",
        endpoint: "virtualization/virtual-machines",
        kind: "virtual machine",
        plural: "virtual machines",
        name_field: "name",
        filters: &[
            ("name", Many),
            ("name__ic", Many),
            ("status", Many),
            ("cluster", Many),
            ("site", Many),
            ("tag", Many),
            ("q", Single),
        ],
    },
    QueryKind {
        type_name: "prefixes",
        endpoint: "ipam/prefixes",
        kind: "prefix",
        plural: "prefixes",
        name_field: "prefix",
        filters: &[
            ("prefix", Many),
            ("status", Many),
            ("role", Many),
            ("tenant", Many),
            ("tenant_id", Ids),
            ("vrf", Many),
            ("vrf_id", Ids),
            ("site", Many),
            ("site_id", Ids),
            ("description", Many),
            ("tag", Many),
            ("within", Single),
            ("contains", Single),
            ("q", Single),
        ],
    },
    QueryKind {
        type_name: "ip_addresses",
        endpoint: "ipam/ip-addresses",
        kind: "IP address",
        plural: "IP addresses",
        name_field: "address",
        filters: &[
            ("address", Many),
            ("status", Many),
            ("role", Many),
            ("tenant", Many),
            ("tenant_id", Ids),
            ("vrf", Many),
            ("vrf_id", Ids),
            ("dns_name", Many),
            ("description", Many),
            ("tag", Many),
            ("q", Single),
        ],
    },
];

/// One `filter` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterModel {
    pub name: Value<String>,
    pub values: Value<Vec<String>>,
}

/// One matching record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryItem {
    pub id: Value<String>,
    pub name: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryModel {
    pub filter: Value<Vec<FilterModel>>,
    pub ids: Value<Vec<String>>,
    pub names: Value<Vec<String>>,
    pub items: Value<Vec<QueryItem>>,
}

/// Validated filters, split into server-side parameters and
/// custom field checks
#[derive(Debug, Default, PartialEq, Eq)]
pub struct QueryPlan {
    /// Query parameters sent to NetBox
    pub params: Vec<(String, String)>,
    /// Custom fields that must hold a value (any of them)
    pub custom_fields: Vec<String>,
    /// Required custom field values: field name to accepted values
    pub custom_field_values: BTreeMap<String, Vec<String>>,
}

impl QueryPlan {
    fn query(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn describe(&self) -> String {
        let mut parts: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{} '{}'", k, v))
            .collect();
        parts.extend(self.custom_fields.iter().map(|f| format!("custom_field '{}'", f)));
        for (field, values) in &self.custom_field_values {
            parts.extend(values.iter().map(|v| format!("custom_field_value '{}={}'", field, v)));
        }
        format!("filters {}", parts.join(" and "))
    }

    /// Whether a listed record passes the custom field checks
    pub fn matches(&self, object: &serde_json::Value) -> bool {
        let fields = object.get("custom_fields");
        let field = |name: &str| fields.and_then(|f| f.get(name));

        let has_field = self.custom_fields.is_empty()
            || self.custom_fields.iter().any(|name| field(name).is_some_and(has_value));
        has_field
            && self.custom_field_values.iter().all(|(name, accepted)| {
                field(name).is_some_and(|value| accepted.iter().any(|a| value_matches(value, a)))
            })
    }
}

fn has_value(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn value_matches(value: &serde_json::Value, expected: &str) -> bool {
    match value {
        serde_json::Value::String(s) => s == expected,
        serde_json::Value::Number(n) => n.to_string() == expected,
        serde_json::Value::Bool(b) => b.to_string() == expected,
        serde_json::Value::Array(items) => items.iter().any(|item| value_matches(item, expected)),
        serde_json::Value::Object(object) => object
            .get("name")
            .or_else(|| object.get("id"))
            .is_some_and(|inner| value_matches(inner, expected)),
        serde_json::Value::Null => false,
    }
}

fn invalid(summary: &'static str, detail: String) -> LookupError {
    LookupError::InvalidFilter { summary, detail }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Validate the configured filter blocks against `kind`
pub fn expand_filters(kind: &QueryKind, blocks: &[FilterModel]) -> Result<QueryPlan, LookupError> {
    // Blocks sharing a name are merged; order of first appearance is kept.
    let mut merged: Vec<(String, Vec<String>)> = Vec::new();
    for block in blocks {
        let Value::Value(name) = &block.name else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let values = match &block.values {
            Value::Value(values) => values.clone(),
            _ => Vec::new(),
        };
        match merged.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => existing.extend(values),
            None => merged.push((name.to_string(), values)),
        }
    }

    if merged.is_empty() {
        return Err(invalid(
            "Missing filters",
            format!(
                "At least one `filter` block must be provided to avoid accidentally listing all {}.",
                kind.plural
            ),
        ));
    }

    let mut plan = QueryPlan::default();
    for (name, values) in merged {
        match name.as_str() {
            CUSTOM_FIELD => plan.custom_fields.extend(values),
            CUSTOM_FIELD_VALUE => {
                for entry in values {
                    let Some((field, value)) = entry.split_once('=') else {
                        return Err(invalid(
                            "Invalid filter values",
                            format!(
                                "Filter `custom_field_value` expects entries of the form name=value, got {:?}.",
                                entry
                            ),
                        ));
                    };
                    let field = field.trim();
                    if field.is_empty() {
                        return Err(invalid(
                            "Invalid filter values",
                            format!("Filter `custom_field_value` entry {:?} has no field name.", entry),
                        ));
                    }
                    plan.custom_field_values
                        .entry(field.to_string())
                        .or_default()
                        .push(value.trim().to_string());
                }
            }
            _ => {
                let rule = kind.rule(&name).ok_or_else(|| {
                    invalid(
                        "Unsupported filter",
                        format!(
                            "Unsupported filter name {:?} for netbox_{}. Supported filters: {}.",
                            name,
                            kind.type_name,
                            kind.filter_names()
                        ),
                    )
                })?;
                for value in checked_values(kind, &name, rule, values)? {
                    plan.params.push((name.clone(), value));
                }
            }
        }
    }

    Ok(plan)
}

fn checked_values(
    kind: &QueryKind,
    name: &str,
    rule: FilterRule,
    values: Vec<String>,
) -> Result<Vec<String>, LookupError> {
    match rule {
        Many => Ok(values),
        Single if values.len() == 1 => Ok(values),
        Single => Err(invalid(
            "Invalid filter values",
            format!("Filter `{}` requires exactly one value.", name),
        )),
        Ids => values
            .iter()
            .map(|raw| {
                parse_id(kind.kind, "filter", raw.trim())
                    .map(|id| id.to_string())
                    .map_err(|e| {
                        invalid(
                            "Invalid filter values",
                            format!("Filter {} must be numeric IDs: {}", name, e),
                        )
                    })
            })
            .collect(),
        Bool => match values.as_slice() {
            [raw] => parse_bool(raw).map(|b| vec![b.to_string()]).ok_or_else(|| {
                invalid(
                    "Invalid filter values",
                    format!("Filter `{}` requires exactly one boolean value (true/false), got {:?}.", name, raw),
                )
            }),
            _ => Err(invalid(
                "Invalid filter values",
                format!("Filter `{}` requires exactly one boolean value (true/false).", name),
            )),
        },
    }
}

/// Filter blocks whose names and values are all known
fn known_filters(filter: &Value<Vec<FilterModel>>) -> Option<&[FilterModel]> {
    match filter {
        Value::Value(blocks)
            if blocks
                .iter()
                .all(|b| !matches!(b.name, Value::Unknown) && !matches!(b.values, Value::Unknown)) =>
        {
            Some(blocks.as_slice())
        }
        _ => None,
    }
}

/// Serves one [`QueryKind`] through the Terraform plugin protocol
#[derive(Debug, Clone)]
pub struct QueryDataSource {
    kind: QueryKind,
    data: ProviderData,
}

impl QueryDataSource {
    pub fn new(kind: QueryKind, data: ProviderData) -> Self {
        Self { kind, data }
    }

    /// List every record matching the configured filters
    pub async fn read_model(&self, config: QueryModel) -> Result<QueryModel, LookupError> {
        let client = self.data.client()?;
        let blocks = match &config.filter {
            Value::Value(blocks) => blocks.as_slice(),
            _ => &[],
        };
        let plan = expand_filters(&self.kind, blocks)?;
        let criteria = plan.describe();
        debug!("Querying netbox_{} with {}", self.kind.type_name, criteria);

        let objects = client
            .list(self.kind.endpoint, &plan.query(), true)
            .await
            .map_err(|source| LookupError::Upstream {
                kind: self.kind.kind,
                criteria,
                source,
            })?;

        let mut ids = Vec::new();
        let mut names = Vec::new();
        let mut items = Vec::new();
        for object in objects.iter().filter(|o| plan.matches(o)) {
            let Some(id) = object.get("id").and_then(serde_json::Value::as_u64) else {
                continue;
            };
            let name = object
                .get(self.kind.name_field)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string();
            ids.push(id.to_string());
            items.push(QueryItem {
                id: Value::Value(id.to_string()),
                name: Value::Value(name.clone()),
            });
            names.push(name);
        }
        debug!("netbox_{} matched {} records", self.kind.type_name, ids.len());

        Ok(QueryModel {
            ids: Value::Value(ids),
            names: Value::Value(names),
            items: Value::Value(items),
            ..config
        })
    }
}

#[async_trait]
impl DataSource for QueryDataSource {
    type State<'a> = QueryModel;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        let plural = self.kind.plural;
        let filter = Block {
            attributes: [
                (
                    "name".to_string(),
                    schema::required_string(&format!(
                        "Filter name, one of {}.",
                        self.kind.filter_names()
                    )),
                ),
                (
                    "values".to_string(),
                    schema::required_string_list("Values for this filter. Values are ORed."),
                ),
            ]
            .into_iter()
            .collect(),
            description: Description::markdown("Filter criteria. At least one filter must be provided.".to_string()),
            ..Default::default()
        };

        let mut schema = schema::build(
            &format!(
                "Query {} in NetBox using filter blocks. Multiple `filter` blocks are ANDed; values within a filter are ORed.",
                plural
            ),
            vec![
                ("ids", schema::computed_string_list(&format!("IDs of the matching {}.", plural))),
                (
                    "names",
                    schema::computed_string_list(&format!(
                        "Best-effort list of the `{}` of each matching record; an empty string when unset.",
                        self.kind.name_field
                    )),
                ),
                (
                    "items",
                    schema::computed_object_list(
                        &format!("Matching {} as objects with `id` and `name`.", plural),
                        &[("id", AttributeType::String), ("name", AttributeType::String)],
                    ),
                ),
            ],
        );
        schema.block.blocks = HashMap::from([("filter".to_string(), NestedBlock::Set(filter))]);
        Some(schema)
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        // Filters computed from other resources are checked on read.
        let Some(blocks) = known_filters(&config.filter) else {
            return Some(());
        };
        if let Err(e) = expand_filters(&self.kind, blocks) {
            diags.root_error(e.summary(), e.to_string());
            return None;
        }
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        match self.read_model(config).await {
            Ok(model) => Some(model),
            Err(e) => {
                diags.root_error(e.summary(), e.to_string());
                None
            }
        }
    }
}
