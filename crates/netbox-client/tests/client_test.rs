//! HTTP-level tests for the NetBox client against a wiremock server

#![allow(clippy::unwrap_used)]

use netbox_client::{get_object, query_objects, query_page, NetBoxClient, NetBoxError, Site};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NetBoxClient {
    NetBoxClient::new(format!("{}/", server.uri()), "secret-token".to_string()).unwrap()
}

fn site_json(id: u64, slug: &str) -> serde_json::Value {
    json!({
        "id": id,
        "url": format!("http://netbox/api/dcim/sites/{id}/"),
        "display": slug,
        "name": slug,
        "slug": slug,
        "status": {"value": "active", "label": "Active"},
        "description": "",
        "tags": [],
        "custom_fields": {}
    })
}

#[tokio::test]
async fn test_retrieve_sends_token_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/7/"))
        .and(header("Authorization", "Token secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(site_json(7, "dc-one")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let site: Site = get_object(&client, 7).await.unwrap();

    assert_eq!(site.id, 7);
    assert_eq!(site.slug, "dc-one");
    assert_eq!(site.description.as_deref(), Some(""));
}

#[tokio::test]
async fn test_retrieve_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/99/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "No Site matches the given query."})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = get_object::<Site>(&client, 99).await.unwrap_err();

    assert!(err.is_not_found(), "Expected NotFound, got {err:?}");
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = query_objects::<Site>(&client, &[("slug", "x")], false)
        .await
        .unwrap_err();

    match err {
        NetBoxError::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_passes_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/"))
        .and(query_param("slug", "dc one"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [site_json(1, "dc one")]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sites: Vec<Site> = query_objects(&client, &[("slug", "dc one")], false)
        .await
        .unwrap();

    assert_eq!(sites.len(), 1);
}

#[tokio::test]
async fn test_fetch_all_follows_next_links() {
    let server = MockServer::start().await;
    let second_page = format!("{}/api/dcim/sites/?limit=1&offset=1", server.uri());

    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": null,
            "previous": null,
            "results": [site_json(2, "dc-two")]
        })))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "next": second_page,
            "previous": null,
            "results": [site_json(1, "dc-one")]
        })))
        .with_priority(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let sites: Vec<Site> = query_objects(&client, &[], true).await.unwrap();

    let ids: Vec<u64> = sites.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_list_page_sends_limit_and_keeps_total_count() {
    let server = MockServer::start().await;
    let next = format!("{}/api/dcim/sites/?name=test&limit=2&offset=2", server.uri());
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/"))
        .and(query_param("name", "test"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 120,
            "next": next,
            "previous": null,
            "results": [site_json(1, "test"), site_json(2, "test")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = query_page::<Site>(&client, &[("name", "test")], 2).await.unwrap();

    assert_eq!(page.count, 120);
    assert_eq!(page.results.len(), 2);
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dcim/sites/3/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = get_object::<Site>(&client, 3).await.unwrap_err();

    assert!(matches!(err, NetBoxError::Serialization(_)), "Got {err:?}");
}

#[tokio::test]
async fn test_validate_token_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status/"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Invalid token"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.validate_token().await.unwrap_err();

    assert!(matches!(err, NetBoxError::Authentication { status: 403, .. }), "Got {err:?}");
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_validate_token_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"netbox-version": "4.2.1"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.validate_token().await.is_ok());
    assert_eq!(client.base_url(), server.uri());
}

#[test]
fn test_empty_base_url_rejected() {
    let err = NetBoxClient::new("  ".to_string(), "t".to_string()).unwrap_err();
    assert!(matches!(err, NetBoxError::InvalidRequest(_)));
}
