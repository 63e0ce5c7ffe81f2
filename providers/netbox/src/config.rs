//! Provider configuration.
//!
//! Values come from the `provider "netbox"` block first and fall back to
//! environment variables:
//!
//! - `NETBOX_SERVER_URL`: NetBox base URL
//! - `NETBOX_API_TOKEN`: API token
//! - `NETBOX_INSECURE`: skip TLS verification (`true`/`1`/`yes`)
//! - `NETBOX_TIMEOUT`: request timeout in seconds

use crate::error::ProviderConfigError;
use crate::schema;
use netbox_client::{ClientOptions, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tf_provider::value::Value;
use tf_provider::schema::{Attribute, Block, Description, Schema};

/// Environment variable for the server URL
pub const ENV_SERVER_URL: &str = "NETBOX_SERVER_URL";
/// Environment variable for the API token
pub const ENV_API_TOKEN: &str = "NETBOX_API_TOKEN";
/// Environment variable for TLS verification
pub const ENV_INSECURE: &str = "NETBOX_INSECURE";
/// Environment variable for the request timeout
pub const ENV_TIMEOUT: &str = "NETBOX_TIMEOUT";

/// Provider block as sent by Terraform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub server_url: Value<String>,
    pub api_token: Value<String>,
    pub insecure: Value<bool>,
    pub timeout: Value<i64>,
}

/// Provider schema
pub fn provider_schema() -> Schema {
    let attributes: Vec<(&str, Attribute)> = vec![
        (
            "server_url",
            schema::optional_string(
                "NetBox server URL, e.g. `https://netbox.example.com`. May also be provided via the `NETBOX_SERVER_URL` environment variable.",
            ),
        ),
        (
            "api_token",
            schema::sensitive_string(
                "NetBox API token. May also be provided via the `NETBOX_API_TOKEN` environment variable.",
            ),
        ),
        (
            "insecure",
            schema::optional_bool(
                "Skip TLS certificate verification. May also be provided via the `NETBOX_INSECURE` environment variable.",
            ),
        ),
        (
            "timeout",
            schema::optional_number(
                "Request timeout in seconds (default 30). May also be provided via the `NETBOX_TIMEOUT` environment variable.",
            ),
        ),
    ];

    Schema {
        version: schema::SCHEMA_VERSION,
        block: Block {
            attributes: attributes
                .into_iter()
                .map(|(name, attr)| (name.to_string(), attr))
                .collect(),
            description: Description::markdown(
                "Read NetBox DCIM and IPAM objects as Terraform data sources.".to_string(),
            ),
            ..Default::default()
        },
    }
}

/// Fully resolved settings used to build the client
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub server_url: String,
    pub api_token: String,
    pub insecure: bool,
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("server_url", &self.server_url)
            .field("api_token", &"<redacted>")
            .field("insecure", &self.insecure)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderSettings {
    /// Options for the HTTP client
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout,
            insecure: self.insecure,
        }
    }
}

fn configured(value: &Value<String>) -> Option<String> {
    match value {
        Value::Value(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Resolve settings from the provider block and the environment
///
/// `env` looks up an environment variable; tests pass a closure over a map.
/// Every problem is reported, not just the first. Attributes whose value is
/// unknown are rejected before the environment is consulted.
pub fn resolve_settings(
    config: &ProviderConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ProviderSettings, Vec<ProviderConfigError>> {
    let unknown: Vec<ProviderConfigError> = [
        ("server_url", ENV_SERVER_URL, matches!(config.server_url, Value::Unknown)),
        ("api_token", ENV_API_TOKEN, matches!(config.api_token, Value::Unknown)),
        ("insecure", ENV_INSECURE, matches!(config.insecure, Value::Unknown)),
        ("timeout", ENV_TIMEOUT, matches!(config.timeout, Value::Unknown)),
    ]
    .into_iter()
    .filter(|(_, _, is_unknown)| *is_unknown)
    .map(|(attribute, env, _)| ProviderConfigError::UnknownValue { attribute, env })
    .collect();
    if !unknown.is_empty() {
        return Err(unknown);
    }

    let mut errors = Vec::new();
    let from_env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    let server_url = configured(&config.server_url)
        .or_else(|| from_env(ENV_SERVER_URL).map(|v| v.trim().to_string()))
        .map(|url| url.trim_end_matches('/').to_string());
    match &server_url {
        None => errors.push(ProviderConfigError::MissingServerUrl),
        Some(url) if !(url.starts_with("http://") || url.starts_with("https://")) => {
            errors.push(ProviderConfigError::InvalidServerUrl(url.clone()));
        }
        Some(_) => {}
    }

    let api_token = configured(&config.api_token).or_else(|| from_env(ENV_API_TOKEN));
    if api_token.is_none() {
        errors.push(ProviderConfigError::MissingApiToken);
    }

    let insecure = match &config.insecure {
        Value::Value(flag) => *flag,
        _ => match from_env(ENV_INSECURE) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                errors.push(ProviderConfigError::InvalidInsecure(raw.clone()));
                false
            }),
            None => false,
        },
    };

    let timeout = match &config.timeout {
        Value::Value(seconds) => positive_seconds(&seconds.to_string()),
        _ => from_env(ENV_TIMEOUT).map_or(Ok(DEFAULT_TIMEOUT), |raw| positive_seconds(&raw)),
    }
    .unwrap_or_else(|e| {
        errors.push(e);
        DEFAULT_TIMEOUT
    });

    match (server_url, api_token) {
        (Some(server_url), Some(api_token)) if errors.is_empty() => Ok(ProviderSettings {
            server_url,
            api_token,
            insecure,
            timeout,
        }),
        _ => Err(errors),
    }
}

fn positive_seconds(raw: &str) -> Result<Duration, ProviderConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(seconds) if seconds > 0 => Ok(Duration::from_secs(seconds)),
        _ => Err(ProviderConfigError::InvalidTimeout(raw.to_string())),
    }
}
