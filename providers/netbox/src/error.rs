//! Provider error types.
//!
//! Every failure surfaced to Terraform is a [`LookupError`] or a
//! [`ProviderConfigError`]. Each carries a short diagnostic summary
//! (`summary()`); its `Display` text becomes the diagnostic detail.

use netbox_client::NetBoxError;
use thiserror::Error;

/// Errors that can occur while resolving a data source.
#[derive(Debug, Error)]
pub enum LookupError {
    /// None of the lookup attributes was set
    #[error("Either {attributes} must be specified to identify the {kind}.")]
    MissingIdentifier {
        /// Object kind, e.g. `site`
        kind: &'static str,
        /// Accepted attributes, already quoted and joined
        attributes: String,
    },

    /// An ID attribute does not hold a usable NetBox ID
    #[error("The {attribute} {value:?} is not a valid {kind} ID: {reason}.")]
    InvalidIdentifier {
        /// Object kind
        kind: &'static str,
        /// Attribute holding the bad value
        attribute: &'static str,
        /// Raw value as configured
        value: String,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// The lookup matched nothing
    #[error("No {kind} found with {criteria}.")]
    NotFound {
        /// Object kind
        kind: &'static str,
        /// Human readable lookup criteria, e.g. `name 'edge-01'`
        criteria: String,
    },

    /// An alternate key matched more than one record
    #[error("Found {count} {kind} records with {criteria}. Use {hint} for a unique lookup.")]
    AmbiguousResult {
        /// Object kind
        kind: &'static str,
        /// Human readable lookup criteria
        criteria: String,
        /// Number of matching records, as reported by NetBox
        count: u64,
        /// Attributes that would disambiguate
        hint: String,
    },

    /// NetBox could not be reached or answered with an error
    #[error("Could not read {kind} with {criteria}: {source}")]
    Upstream {
        /// Object kind
        kind: &'static str,
        /// Human readable lookup criteria
        criteria: String,
        /// Underlying client error
        #[source]
        source: NetBoxError,
    },

    /// A data source was read before the provider was configured
    #[error(
        "Expected a configured NetBox client, got none. The provider block may be missing or failed to configure."
    )]
    NotConfigured,

    /// A query data source filter was rejected
    #[error("{detail}")]
    InvalidFilter {
        /// Diagnostic summary, e.g. `Unsupported filter`
        summary: &'static str,
        /// What was wrong with the filter
        detail: String,
    },
}

impl LookupError {
    /// Short diagnostic summary
    pub fn summary(&self) -> String {
        match self {
            LookupError::MissingIdentifier { kind, .. } => {
                format!("Missing {} identifier", kind)
            }
            LookupError::InvalidIdentifier { kind, .. } => format!("Invalid {} ID", kind),
            LookupError::NotFound { kind, .. } => format!("{} not found", capitalize(kind)),
            LookupError::AmbiguousResult { kind, .. } => {
                format!("Multiple {} records found", kind)
            }
            LookupError::Upstream { kind, .. } => format!("Error reading {}", kind),
            LookupError::NotConfigured => "Unconfigured NetBox client".to_string(),
            LookupError::InvalidFilter { summary, .. } => summary.to_string(),
        }
    }
}

/// Errors raised while resolving the provider configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderConfigError {
    /// No server URL in the provider block or environment
    #[error(
        "The provider cannot create the NetBox API client as there is a missing or empty value for the NetBox server URL. Set the server_url value in the configuration or use the NETBOX_SERVER_URL environment variable."
    )]
    MissingServerUrl,

    /// No API token in the provider block or environment
    #[error(
        "The provider cannot create the NetBox API client as there is a missing or empty value for the NetBox API token. Set the api_token value in the configuration or use the NETBOX_API_TOKEN environment variable."
    )]
    MissingApiToken,

    /// A provider attribute is only known after apply
    #[error(
        "The provider cannot create the NetBox API client as there is an unknown configuration value for {attribute}. Either apply the source of the value first, set the value statically in the configuration, or use the {env} environment variable."
    )]
    UnknownValue {
        /// Provider block attribute
        attribute: &'static str,
        /// Environment variable that could supply it instead
        env: &'static str,
    },

    /// The server URL is not an http(s) URL
    #[error("The server URL {0:?} must start with http:// or https://.")]
    InvalidServerUrl(String),

    /// `insecure` from the environment is not a recognised boolean
    #[error("NETBOX_INSECURE must be one of true, false, 1, 0, yes or no, got {0:?}.")]
    InvalidInsecure(String),

    /// `timeout` is not a positive number of seconds
    #[error("The timeout must be a positive number of seconds, got {0:?}.")]
    InvalidTimeout(String),
}

impl ProviderConfigError {
    /// Short diagnostic summary
    pub fn summary(&self) -> &'static str {
        match self {
            ProviderConfigError::MissingServerUrl => "Missing NetBox server URL",
            ProviderConfigError::MissingApiToken => "Missing NetBox API token",
            ProviderConfigError::UnknownValue { .. } => "Unknown NetBox configuration value",
            ProviderConfigError::InvalidServerUrl(_) => "Invalid NetBox server URL",
            ProviderConfigError::InvalidInsecure(_) => "Invalid insecure setting",
            ProviderConfigError::InvalidTimeout(_) => "Invalid timeout",
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
