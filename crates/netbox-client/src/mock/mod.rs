//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! Objects are stored as JSON per endpoint and list calls are filtered the way
//! NetBox filters them (see `filters.rs`). Every call is recorded so tests can
//! assert how many requests a lookup made.
//!
//! - `filters.rs` - query parameter matching
//! - `helpers.rs` - Helper functions for creating nested types

mod filters;
mod helpers;

pub use helpers::Helpers;

use crate::common::query::detail_path;
use crate::common::PaginatedResponse;
use crate::error::NetBoxError;
use crate::netbox_trait::{NetBoxClientTrait, NetBoxObject};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Canned failure returned for every call against an endpoint
#[derive(Debug, Clone)]
pub(crate) struct MockFailure {
    status: u16,
    body: String,
}

impl MockFailure {
    fn to_error(&self, path: &str) -> NetBoxError {
        match self.status {
            404 => NetBoxError::NotFound(format!("{} - {}", path, self.body)),
            401 | 403 => NetBoxError::Authentication {
                status: self.status,
                message: format!("{} - {}", path, self.body),
            },
            status => NetBoxError::Api {
                status,
                body: self.body.clone(),
            },
        }
    }
}

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory and can be configured to return
/// specific responses for testing different scenarios.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage: endpoint -> id -> object
    pub(crate) objects: Arc<Mutex<HashMap<String, BTreeMap<u64, serde_json::Value>>>>,
    pub(crate) failures: Arc<Mutex<HashMap<String, MockFailure>>>,
    pub(crate) requests: Arc<Mutex<Vec<String>>>,
    pub(crate) token_valid: Arc<Mutex<bool>>,
    // Records per page when a list call does not fetch every page
    pub(crate) page_size: Arc<Mutex<Option<usize>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            token_valid: Arc::new(Mutex::new(true)),
            page_size: Arc::new(Mutex::new(None)),
        }
    }

    /// Helpers for building nested references that point back at this mock
    pub fn helpers(&self) -> Helpers {
        Helpers::new(self.base_url.clone())
    }

    /// Add a typed object to the mock store (for test setup)
    pub fn add<T: NetBoxObject + Serialize>(&self, object: &T) {
        match serde_json::to_value(object) {
            Ok(value) => self.insert(T::ENDPOINT, value),
            Err(e) => panic!("mock object for {} does not serialize: {}", T::ENDPOINT, e),
        }
    }

    /// Add a raw JSON object to an endpoint; its `id` field is the key
    pub fn insert(&self, endpoint: &str, object: serde_json::Value) {
        let id = object
            .get("id")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or_default();
        lock(&self.objects)
            .entry(endpoint.trim_matches('/').to_string())
            .or_default()
            .insert(id, object);
    }

    /// Make every call against `endpoint` fail with the given status and body
    pub fn fail_endpoint(&self, endpoint: &str, status: u16, body: impl Into<String>) {
        lock(&self.failures).insert(
            endpoint.trim_matches('/').to_string(),
            MockFailure {
                status,
                body: body.into(),
            },
        );
    }

    /// Make `validate_token` reject the token
    pub fn reject_token(&self) {
        *lock(&self.token_valid) = false;
    }

    /// Serve single-page list calls `size` records at a time, like NetBox's
    /// `PAGINATE_COUNT`
    pub fn set_page_size(&self, size: usize) {
        *lock(&self.page_size) = Some(size);
    }

    /// Number of API calls made so far
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Paths of the API calls made so far, in order
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    fn record(&self, path: String) {
        lock(&self.requests).push(path);
    }

    fn failure_for(&self, endpoint: &str) -> Option<MockFailure> {
        lock(&self.failures).get(endpoint).cloned()
    }

    /// Record a list call and return every stored match
    fn matching(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        extra: Option<(&str, String)>,
    ) -> Result<Vec<serde_json::Value>, NetBoxError> {
        let mut query: Vec<String> = filters.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        if let Some((k, v)) = extra {
            query.push(format!("{}={}", k, v));
        }
        let path = format!("/api/{}/?{}", endpoint, query.join("&"));
        self.record(path.clone());

        if let Some(failure) = self.failure_for(endpoint) {
            return Err(failure.to_error(&path));
        }

        let objects = lock(&self.objects);
        Ok(objects
            .get(endpoint)
            .map(|objects| {
                objects
                    .values()
                    .filter(|object| filters::matches(object, filters))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.record("/api/status/".to_string());
        if *lock(&self.token_valid) {
            Ok(())
        } else {
            Err(NetBoxError::Authentication {
                status: 403,
                message: "/api/status/ - Invalid token".to_string(),
            })
        }
    }

    async fn retrieve(&self, endpoint: &str, id: u64) -> Result<serde_json::Value, NetBoxError> {
        let endpoint = endpoint.trim_matches('/');
        let path = detail_path(endpoint, id);
        self.record(path.clone());

        if let Some(failure) = self.failure_for(endpoint) {
            return Err(failure.to_error(&path));
        }

        lock(&self.objects)
            .get(endpoint)
            .and_then(|objects| objects.get(&id))
            .cloned()
            .ok_or_else(|| {
                NetBoxError::NotFound(format!(
                    "{} - {{\"detail\":\"No {} matches the given query.\"}}",
                    path, endpoint
                ))
            })
    }

    async fn list(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        fetch_all: bool,
    ) -> Result<Vec<serde_json::Value>, NetBoxError> {
        let mut results = self.matching(endpoint.trim_matches('/'), filters, None)?;
        if !fetch_all {
            if let Some(size) = *lock(&self.page_size) {
                results.truncate(size);
            }
        }
        Ok(results)
    }

    async fn list_page(
        &self,
        endpoint: &str,
        filters: &[(&str, &str)],
        limit: usize,
    ) -> Result<PaginatedResponse<serde_json::Value>, NetBoxError> {
        let endpoint = endpoint.trim_matches('/');
        let mut results = self.matching(endpoint, filters, Some(("limit", limit.to_string())))?;
        let count = results.len() as u64;
        let size = lock(&self.page_size).map_or(limit, |size| size.min(limit));
        results.truncate(size);

        let next = (count > results.len() as u64).then(|| {
            format!("{}/api/{}/?limit={}&offset={}", self.base_url, endpoint, size, size)
        });
        Ok(PaginatedResponse {
            count,
            next,
            previous: None,
            results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NestedTag, Site};
    use crate::netbox_trait::{get_object, query_objects, query_page};

    fn site(id: u64, name: &str, slug: &str) -> Site {
        Site {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_retrieve_and_list() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.add(&site(1, "DC One", "dc-one"));
        mock.add(&site(2, "DC Two", "dc-two"));

        let found: Site = get_object(&mock, 2).await.unwrap();
        assert_eq!(found.slug, "dc-two");

        let listed: Vec<Site> = query_objects(&mock, &[("slug", "dc-one")], false).await.unwrap();
        assert_eq!(listed.len(), 1, "Slug filter should match exactly one site");
        assert_eq!(listed[0].id, 1);

        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_retrieve_missing_is_not_found() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        let err = get_object::<Site>(&mock, 42).await.unwrap_err();
        assert!(err.is_not_found(), "Expected NotFound, got {err:?}");
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.add(&site(1, "DC One", "dc-one"));
        mock.fail_endpoint("dcim/sites", 500, "boom");

        let err = query_objects::<Site>(&mock, &[], false).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_tag_filter_matches_any_slug() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        let mut tagged = site(1, "DC One", "dc-one");
        tagged.tags = vec![
            NestedTag {
                id: 7,
                name: "Prod".to_string(),
                slug: "prod".to_string(),
                ..Default::default()
            },
        ];
        mock.add(&tagged);
        mock.add(&site(2, "DC Two", "dc-two"));

        let listed: Vec<Site> = query_objects(&mock, &[("tag", "prod")], true).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 1);
    }

    #[tokio::test]
    async fn test_page_size_limits_single_page_lists() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        for id in 1..=5 {
            mock.add(&site(id, "Edge", &format!("edge-{id}")));
        }
        mock.set_page_size(2);

        let first: Vec<Site> = query_objects(&mock, &[("name", "Edge")], false).await.unwrap();
        assert_eq!(first.len(), 2);
        let all: Vec<Site> = query_objects(&mock, &[("name", "Edge")], true).await.unwrap();
        assert_eq!(all.len(), 5);
    }

    #[tokio::test]
    async fn test_list_page_reports_total_count() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        for id in 1..=4 {
            mock.add(&site(id, "Edge", &format!("edge-{id}")));
        }

        let page = query_page::<Site>(&mock, &[("name", "Edge")], 2).await.unwrap();

        assert_eq!(page.count, 4);
        assert_eq!(page.results.len(), 2);
        assert!(page.next.is_some());
        assert_eq!(mock.requests(), vec!["/api/dcim/sites/?name=Edge&limit=2".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_token_keeps_status() {
        let mock = MockNetBoxClient::new("http://netbox.test");
        mock.reject_token();

        let err = mock.validate_token().await.unwrap_err();
        assert_eq!(err.status(), Some(403));
    }
}
