//! NetBox API client
//!
//! Read-only client for the NetBox REST API. Objects are exchanged as raw
//! JSON so one client serves every endpoint; typed access goes through
//! [`crate::netbox_trait::get_object`] and [`crate::netbox_trait::query_objects`].

use crate::common::query::{detail_path, query_page, query_resources};
use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options applied when building the underlying HTTP client
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout
    pub timeout: Duration,
    /// Skip TLS certificate verification
    pub insecure: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            insecure: false,
        }
    }
}

/// NetBox API client
#[derive(Debug)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client with default options
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        Self::with_options(base_url, token, &ClientOptions::default())
    }

    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "https://netbox.example.com")
    /// * `token` - API token for authentication
    /// * `options` - timeout and TLS settings
    pub fn with_options(
        base_url: String,
        token: String,
        options: &ClientOptions,
    ) -> Result<Self, NetBoxError> {
        if base_url.trim().is_empty() {
            return Err(NetBoxError::InvalidRequest(
                "NetBox base URL must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.insecure)
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// Uses the status endpoint as it is lightweight and requires authentication.
    ///
    /// # Returns
    /// * `Ok(())` - Token is valid and NetBox is reachable
    /// * `Err(NetBoxError::Authentication)` - Token was rejected
    /// * `Err(NetBoxError)` - NetBox is unreachable or answered with an error
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");

        let status: serde_json::Value = self.http.get("/api/status/").await?;
        let version = status
            .get("netbox-version")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown");

        debug!("Token validated successfully (NetBox {})", version);
        Ok(())
    }

    /// Retrieve a single object by ID
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint without the `/api/` prefix (e.g., "dcim/sites")
    /// * `id` - NetBox object ID
    pub async fn retrieve(
        &self,
        endpoint: &str,
        id: u64,
    ) -> Result<serde_json::Value, NetBoxError> {
        self.http.get(&detail_path(endpoint, id)).await
    }

    /// List objects matching the given filters
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint without the `/api/` prefix
    /// * `filters` - query parameters; repeated keys are ORed by NetBox
    /// * `fetch_all` - follow `next` links until every page is read
    pub async fn list(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError> {
        query_resources(&self.http, endpoint, filters, fetch_all).await
    }

    /// List the first page of matches, at most `limit` records
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint without the `/api/` prefix
    /// * `filters` - query parameters
    /// * `limit` - page size sent as `limit`
    pub async fn list_page(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        limit: usize,
    ) -> Result<PaginatedResponse<serde_json::Value>, NetBoxError> {
        query_page(&self.http, endpoint, filters, limit).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        NetBoxClient::base_url(self)
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        NetBoxClient::validate_token(self).await
    }

    async fn retrieve(&self, endpoint: &str, id: u64) -> Result<serde_json::Value, NetBoxError> {
        NetBoxClient::retrieve(self, endpoint, id).await
    }

    async fn list(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError> {
        NetBoxClient::list(self, endpoint, filters, fetch_all).await
    }

    async fn list_page(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        limit: usize,
    ) -> Result<PaginatedResponse<serde_json::Value>, NetBoxError> {
        NetBoxClient::list_page(self, endpoint, filters, limit).await
    }
}
