//! Generic lookup resolver.
//!
//! A [`Lookup`] lists the keys a data source accepts, in precedence order.
//! [`resolve`] picks the first key that is set and turns it into exactly one
//! NetBox object:
//!
//! - an ID key is parsed locally and fetched with a detail request;
//! - any other key becomes list filters, and the result must contain exactly
//!   one record.
//!
//! A key part may name a parent object (`Reference`). Numeric values are used
//! as the parent ID directly; anything else is resolved to an ID first.

use crate::error::LookupError;
use netbox_client::{
    decode_page, get_object, query_page, BriefObject, NetBoxClientTrait, NetBoxError, NetBoxObject, PaginatedResponse,
};
use std::num::IntErrorKind;
use tf_provider::value::Value;
use tracing::debug;

/// Records requested per alternate-key lookup; two tell unique from ambiguous
const LOOKUP_PAGE: usize = 2;

/// Configuration values that can act as lookup keys.
///
/// A value is set when it is known, not null and not empty.
pub trait LookupValue {
    /// The value as a filter string, or `None` when unset
    fn lookup_text(&self) -> Option<String>;
}

impl LookupValue for Value<String> {
    fn lookup_text(&self) -> Option<String> {
        match self {
            Value::Value(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl LookupValue for Value<i64> {
    fn lookup_text(&self) -> Option<String> {
        match self {
            Value::Value(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Parent object a key part refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    endpoint: &'static str,
    kind: &'static str,
    filter: &'static str,
}

impl Reference {
    /// Parent identified by name
    pub const fn by_name(endpoint: &'static str, kind: &'static str) -> Self {
        Self {
            endpoint,
            kind,
            filter: "name",
        }
    }

    /// Parent identified by slug
    pub const fn by_slug(endpoint: &'static str, kind: &'static str) -> Self {
        Self {
            endpoint,
            kind,
            filter: "slug",
        }
    }
}

/// One attribute of an alternate key
#[derive(Debug, Clone)]
pub struct KeyPart {
    attribute: &'static str,
    filter: &'static str,
    value: Option<String>,
    required: bool,
    reference: Option<Reference>,
}

impl KeyPart {
    /// Part that must be set for the key to apply
    pub fn required(attribute: &'static str, filter: &'static str, value: &impl LookupValue) -> Self {
        Self {
            attribute,
            filter,
            value: value.lookup_text(),
            required: true,
            reference: None,
        }
    }

    /// Qualifier added to the filters only when set
    pub fn optional(attribute: &'static str, filter: &'static str, value: &impl LookupValue) -> Self {
        Self {
            required: false,
            ..Self::required(attribute, filter, value)
        }
    }

    /// Resolve non-numeric values through a parent object
    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }
}

#[derive(Debug, Clone)]
enum Key {
    Id {
        attribute: &'static str,
        value: Option<String>,
    },
    Filter(Vec<KeyPart>),
}

impl Key {
    fn is_set(&self) -> bool {
        match self {
            Key::Id { value, .. } => value.is_some(),
            Key::Filter(parts) => {
                let mut required = parts.iter().filter(|p| p.required).peekable();
                required.peek().is_some() && required.all(|p| p.value.is_some())
            }
        }
    }

    fn label(&self) -> String {
        match self {
            Key::Id { attribute, .. } => format!("'{}'", attribute),
            Key::Filter(parts) => parts
                .iter()
                .filter(|p| p.required)
                .map(|p| format!("'{}'", p.attribute))
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

/// How a lookup will be carried out
#[derive(Debug)]
pub(crate) enum Strategy<'a> {
    ById {
        attribute: &'static str,
        raw: &'a str,
    },
    ByFilter {
        position: usize,
        parts: Vec<&'a KeyPart>,
    },
}

/// Keys accepted by a data source, in precedence order
#[derive(Debug, Clone)]
pub struct Lookup {
    kind: &'static str,
    keys: Vec<Key>,
}

impl Lookup {
    /// Start a lookup for objects of `kind`
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            keys: Vec::new(),
        }
    }

    /// Numeric ID key
    pub fn id(mut self, attribute: &'static str, value: &impl LookupValue) -> Self {
        self.keys.push(Key::Id {
            attribute,
            value: value.lookup_text(),
        });
        self
    }

    /// Single attribute alternate key
    pub fn key(self, attribute: &'static str, filter: &'static str, value: &impl LookupValue) -> Self {
        self.composite(vec![KeyPart::required(attribute, filter, value)])
    }

    /// Alternate key made of several parts
    pub fn composite(mut self, parts: Vec<KeyPart>) -> Self {
        self.keys.push(Key::Filter(parts));
        self
    }

    /// Object kind used in messages
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Quoted names of every key, in precedence order
    pub fn attributes(&self) -> Vec<String> {
        self.keys.iter().map(Key::label).collect()
    }

    pub(crate) fn strategy(&self) -> Option<Strategy<'_>> {
        let (position, key) = self.keys.iter().enumerate().find(|(_, k)| k.is_set())?;
        Some(match key {
            Key::Id { attribute, value } => Strategy::ById {
                attribute: *attribute,
                raw: value.as_deref().unwrap_or_default(),
            },
            Key::Filter(parts) => Strategy::ByFilter {
                position,
                parts: parts.iter().filter(|p| p.value.is_some()).collect(),
            },
        })
    }

    /// Check every set ID key without touching the network
    pub fn validate(&self) -> Result<(), LookupError> {
        for key in &self.keys {
            if let Key::Id {
                attribute,
                value: Some(raw),
            } = key
            {
                parse_id(self.kind, *attribute, raw)?;
            }
        }
        Ok(())
    }

    fn missing(&self) -> LookupError {
        LookupError::MissingIdentifier {
            kind: self.kind,
            attributes: join_alternatives(&self.attributes()),
        }
    }

    fn hint(&self, position: usize) -> String {
        let earlier: Vec<String> = self.keys[..position].iter().map(Key::label).collect();
        if earlier.is_empty() {
            "additional attributes".to_string()
        } else {
            join_alternatives(&earlier)
        }
    }
}

fn join_alternatives(labels: &[String]) -> String {
    match labels {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} or {}", first, second),
        [init @ .., last] => format!("{}, or {}", init.join(", "), last),
    }
}

fn describe(parts: &[&KeyPart]) -> String {
    parts
        .iter()
        .map(|p| format!("{} '{}'", p.attribute, p.value.as_deref().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Parse a NetBox ID: a non-negative integer that fits in 32 bits
pub fn parse_id(kind: &'static str, attribute: &'static str, raw: &str) -> Result<u64, LookupError> {
    let invalid = |reason| LookupError::InvalidIdentifier {
        kind,
        attribute,
        value: raw.to_string(),
        reason,
    };

    match raw.parse::<i32>() {
        Ok(id) if id < 0 => Err(invalid("IDs cannot be negative")),
        Ok(id) => Ok(u64::from(id.unsigned_abs())),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(invalid("the value does not fit in a 32-bit integer"))
            }
            _ => Err(invalid("expected a whole number")),
        },
    }
}

/// Reduce a list page to its single record
///
/// Ambiguity is judged on the page's total `count`, so the error names every
/// match even when only the first page was read.
pub fn expect_single<T>(
    page: PaginatedResponse<T>,
    kind: &'static str,
    criteria: String,
    hint: String,
) -> Result<T, LookupError> {
    let PaginatedResponse {
        count, mut results, ..
    } = page;
    let count = count.max(results.len() as u64);
    if count > 1 {
        return Err(LookupError::AmbiguousResult {
            kind,
            criteria,
            count,
            hint,
        });
    }
    results.pop().ok_or(LookupError::NotFound { kind, criteria })
}

/// Resolve `lookup` to exactly one object
pub async fn resolve<T: NetBoxObject>(
    client: &dyn NetBoxClientTrait,
    lookup: &Lookup,
) -> Result<T, LookupError> {
    let kind = lookup.kind();
    match lookup.strategy() {
        None => Err(lookup.missing()),
        Some(Strategy::ById { attribute, raw }) => {
            let id = parse_id(kind, attribute, raw)?;
            let criteria = format!("ID {}", id);
            debug!("Reading {} by ID {}", kind, id);
            get_object::<T>(client, id)
                .await
                .map_err(|source| classify(kind, criteria, source))
        }
        Some(Strategy::ByFilter { position, parts }) => {
            let mut filters: Vec<(&str, String)> = Vec::with_capacity(parts.len());
            for part in &parts {
                filters.push((part.filter, resolve_part(client, part).await?));
            }
            let query: Vec<(&str, &str)> = filters.iter().map(|(k, v)| (*k, v.as_str())).collect();
            let criteria = describe(&parts);
            debug!("Listing {} with {}", kind, criteria);

            let page = query_page::<T>(client, &query, LOOKUP_PAGE)
                .await
                .map_err(|source| LookupError::Upstream {
                    kind,
                    criteria: criteria.clone(),
                    source,
                })?;
            expect_single(page, kind, criteria, lookup.hint(position))
        }
    }
}

fn classify(kind: &'static str, criteria: String, source: NetBoxError) -> LookupError {
    if source.is_not_found() {
        LookupError::NotFound { kind, criteria }
    } else {
        LookupError::Upstream {
            kind,
            criteria,
            source,
        }
    }
}

/// Filter value for a key part, resolving parent references to IDs
async fn resolve_part(client: &dyn NetBoxClientTrait, part: &KeyPart) -> Result<String, LookupError> {
    let raw = part.value.as_deref().unwrap_or_default();
    let Some(reference) = part.reference else {
        return Ok(raw.to_string());
    };

    if raw.parse::<i64>().is_ok() {
        return parse_id(reference.kind, part.attribute, raw).map(|id| id.to_string());
    }

    let criteria = format!("{} '{}'", reference.filter, raw);
    debug!("Resolving {} {} to an ID", reference.kind, criteria);
    let parents = client
        .list_page(reference.endpoint, &[(reference.filter, raw)], LOOKUP_PAGE)
        .await
        .and_then(decode_page::<BriefObject>)
        .map_err(|source| LookupError::Upstream {
            kind: reference.kind,
            criteria: criteria.clone(),
            source,
        })?;

    let parent = expect_single(parents, reference.kind, criteria, "a numeric ID".to_string())?;
    Ok(parent.id.to_string())
}

