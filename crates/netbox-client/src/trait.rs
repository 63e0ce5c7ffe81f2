//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use
//! [`crate::mock::MockNetBoxClient`] (feature `test-util`).
//!
//! The trait is object-safe and works on raw JSON; [`NetBoxObject`] together
//! with [`get_object`] and [`query_objects`] layer typed access on top.

use crate::common::PaginatedResponse;
use crate::error::NetBoxError;
use serde::de::DeserializeOwned;

/// Trait for NetBox API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    /// Retrieve one object from `endpoint` by ID
    async fn retrieve(&self, endpoint: &str, id: u64) -> Result<serde_json::Value, NetBoxError>;

    /// List objects from `endpoint` matching `filters`
    async fn list(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError>;

    /// First page of at most `limit` objects matching `filters`
    ///
    /// `count` on the returned page is the total number of matches, not
    /// the number of records returned.
    async fn list_page(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        limit: usize,
    ) -> Result<PaginatedResponse<serde_json::Value>, NetBoxError>;
}

/// A NetBox object type served by a single API endpoint
pub trait NetBoxObject: DeserializeOwned + Send {
    /// Endpoint without the `/api/` prefix, e.g. `dcim/sites`
    const ENDPOINT: &'static str;
    /// Human readable object kind used in messages, e.g. `site`
    const KIND: &'static str;

    /// NetBox object ID
    fn id(&self) -> u64;
}

/// Retrieve and decode a single object
pub async fn get_object<T: NetBoxObject>(
    client: &dyn NetBoxClientTrait,
    id: u64,
) -> Result<T, NetBoxError> {
    let value = client.retrieve(T::ENDPOINT, id).await?;
    Ok(serde_json::from_value(value)?)
}

/// List and decode objects matching `filters`
pub async fn query_objects<T: NetBoxObject>(
    client: &dyn NetBoxClientTrait,
    filters: &[(&str, &str)],
    fetch_all: bool,
) -> Result<Vec<T>, NetBoxError> {
    client
        .list(T::ENDPOINT, filters, fetch_all)
        .await?
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(NetBoxError::from)
}

/// List one page of at most `limit` objects, keeping the total match count
pub async fn query_page<T: NetBoxObject>(
    client: &dyn NetBoxClientTrait,
    filters: &[(&str, &str)],
    limit: usize,
) -> Result<PaginatedResponse<T>, NetBoxError> {
    decode_page(client.list_page(T::ENDPOINT, filters, limit).await?)
}

/// Decode the records of a raw page
pub fn decode_page<T: DeserializeOwned>(
    page: PaginatedResponse<serde_json::Value>,
) -> Result<PaginatedResponse<T>, NetBoxError> {
    let results = page
        .results
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()?;
    Ok(PaginatedResponse {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results,
    })
}
