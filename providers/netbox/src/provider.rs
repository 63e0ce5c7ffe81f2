//! The NetBox provider: configuration and data source registry.

use crate::config::{provider_schema, resolve_settings, ProviderConfig};
use crate::datasources;
use crate::error::LookupError;
use async_trait::async_trait;
use netbox_client::{NetBoxClient, NetBoxClientTrait};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tf_provider::DynamicDataSource;
use tf_provider::DynamicResource;
use tf_provider::schema::Schema;
use tf_provider::value::ValueEmpty;
use tf_provider::{Diagnostics, Provider};
use tracing::{info, warn};

/// Client handle shared between the provider and its data sources.
///
/// Installed once by `configure`; read-only afterwards.
#[derive(Clone, Default)]
pub struct ProviderData {
    client: Arc<OnceLock<Arc<dyn NetBoxClientTrait>>>,
}

impl std::fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderData")
            .field("configured", &self.client.get().is_some())
            .finish()
    }
}

impl ProviderData {
    /// Handle already holding `client`
    pub fn with_client(client: Arc<dyn NetBoxClientTrait>) -> Self {
        let data = Self::default();
        data.install(client);
        data
    }

    /// Install the client; returns `false` if one was already installed
    pub fn install(&self, client: Arc<dyn NetBoxClientTrait>) -> bool {
        self.client.set(client).is_ok()
    }

    /// The configured client
    pub fn client(&self) -> Result<Arc<dyn NetBoxClientTrait>, LookupError> {
        self.client.get().cloned().ok_or(LookupError::NotConfigured)
    }
}

/// Terraform provider for NetBox
#[derive(Debug, Default, Clone)]
pub struct NetBoxProvider {
    data: ProviderData,
}

#[async_trait]
impl Provider for NetBoxProvider {
    type Config<'a> = ProviderConfig;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(provider_schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        if let tf_provider::value::Value::Value(seconds) = config.timeout {
            if seconds <= 0 {
                diags.root_error(
                    "Invalid timeout",
                    format!("The timeout must be a positive number of seconds, got {}.", seconds),
                );
                return None;
            }
        }
        Some(())
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let settings = match resolve_settings(&config, |name| std::env::var(name).ok()) {
            Ok(settings) => settings,
            Err(errors) => {
                for e in errors {
                    diags.root_error(e.summary(), e.to_string());
                }
                return None;
            }
        };

        info!("Configuring NetBox provider (Terraform {})", terraform_version);
        info!("  NetBox URL: {}", settings.server_url);
        if settings.insecure {
            warn!("  TLS certificate verification disabled");
        }

        let client = match NetBoxClient::with_options(
            settings.server_url.clone(),
            settings.api_token.clone(),
            &settings.client_options(),
        ) {
            Ok(client) => client,
            Err(e) => {
                diags.root_error("Unable to create NetBox API client", e.to_string());
                return None;
            }
        };

        if let Err(e) = client.validate_token().await {
            diags.root_error(
                "Unable to connect to NetBox",
                format!("Could not validate the API token against {}: {}", settings.server_url, e),
            );
            return None;
        }

        if !self.data.install(Arc::new(client)) {
            warn!("Provider configured more than once; keeping the first client");
        }
        Some(())
    }

    fn get_resources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicResource>>> {
        Some(HashMap::new())
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        Some(datasources::registry(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netbox_client::MockNetBoxClient;

    #[test]
    fn test_unconfigured_data_is_not_configured() {
        let data = ProviderData::default();
        assert!(matches!(data.client(), Err(LookupError::NotConfigured)));
    }

    #[test]
    fn test_install_keeps_first_client() {
        let data = ProviderData::default();
        assert!(data.install(Arc::new(MockNetBoxClient::new("http://first"))));
        assert!(!data.install(Arc::new(MockNetBoxClient::new("http://second"))));
        assert_eq!(data.client().unwrap().base_url(), "http://first");
    }

    #[test]
    fn test_clones_share_the_client() {
        let data = ProviderData::default();
        let shared = data.clone();
        data.install(Arc::new(MockNetBoxClient::new("http://netbox")));
        assert!(shared.client().is_ok(), "Data sources see the client installed by configure");
    }

    #[test]
    fn test_registry_exposes_every_data_source() {
        let provider = NetBoxProvider::default();
        let mut diags = Diagnostics::default();
        let sources = provider.get_data_sources(&mut diags).unwrap();
        for name in ["site", "device", "interface", "vlan", "prefix", "devices", "ip_addresses"] {
            assert!(sources.contains_key(name), "Missing data source {name}");
        }
        assert_eq!(sources.len(), datasources::DATA_SOURCE_COUNT);
    }
}
