//! List and detail paths for NetBox endpoints

use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use serde::de::DeserializeOwned;

/// Detail path, e.g. `/api/dcim/sites/1/`
pub fn detail_path(endpoint: &str, id: u64) -> String {
    format!("/api/{}/{}/", endpoint.trim_matches('/'), id)
}

/// List path with percent-encoded filters, e.g. `/api/dcim/sites/?slug=dc-one`
///
/// Filter order is preserved. NetBox ORs repeated keys and ANDs distinct
/// ones.
pub fn list_path(endpoint: &str, filters: &[(&str, &str)]) -> String {
    let base = format!("/api/{}/", endpoint.trim_matches('/'));
    if filters.is_empty() {
        return base;
    }
    let query: Vec<String> = filters
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("{}?{}", base, query.join("&"))
}

/// List `endpoint`, either the first page or every page
pub async fn query_resources<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
    fetch_all: bool,
) -> Result<Vec<T>, NetBoxError> {
    let path = list_path(endpoint, filters);
    if fetch_all {
        return http.get_all(&path).await;
    }
    let page: PaginatedResponse<T> = http.get(&path).await?;
    Ok(page.results)
}

/// First page of `endpoint` with at most `limit` records
///
/// The page's `count` still reports every match, so callers can tell how
/// many records a filter hits without reading them all.
pub async fn query_page<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
    limit: usize,
) -> Result<PaginatedResponse<T>, NetBoxError> {
    let limit = limit.to_string();
    let mut paged = filters.to_vec();
    paged.push(("limit", limit.as_str()));
    http.get(&list_path(endpoint, &paged)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(detail_path("dcim/sites", 7), "/api/dcim/sites/7/");
        assert_eq!(list_path("/ipam/vlans/", &[]), "/api/ipam/vlans/");
        assert_eq!(
            list_path("dcim/devices", &[("name", "leaf 01"), ("site_id", "3")]),
            "/api/dcim/devices/?name=leaf%2001&site_id=3"
        );
    }
}
