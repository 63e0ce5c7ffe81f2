//! Read-only HTTP transport for the NetBox REST API
//!
//! Every request is a token-authenticated `GET` that expects JSON. List
//! endpoints are paginated; [`HttpClient::get_all`] follows `next` links
//! until the last page.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One page of a NetBox list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total number of records matching the query
    pub count: u64,
    /// Absolute URL of the next page
    pub next: Option<String>,
    /// Absolute URL of the previous page
    pub previous: Option<String>,
    /// Records on this page
    pub results: Vec<T>,
}

/// Longest body excerpt kept in debug logs when decoding fails
const BODY_EXCERPT: usize = 500;

/// Authenticated `GET` transport bound to one NetBox instance
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Wrap `client`; a trailing `/` on `base_url` is dropped
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// NetBox root URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`; `next` links are already absolute
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Fetch and decode a single document
    ///
    /// 404 becomes [`NetBoxError::NotFound`], 401/403
    /// [`NetBoxError::Authentication`], anything else unsuccessful
    /// [`NetBoxError::Api`] with the body NetBox sent.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);
        let response = self.send(&url).await?;
        decode(classify(response, path).await?).await
    }

    /// Fetch every page starting at `path`
    pub async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, NetBoxError> {
        let mut records = Vec::new();
        let mut next = Some(self.build_url(path));

        while let Some(url) = next.take() {
            debug!("GET {} (paginated)", url);
            let response = classify(self.send(&url).await?, &url).await?;
            let page: PaginatedResponse<T> = decode(response).await?;
            records.extend(page.results);
            next = page.next.map(|link| self.build_url(&link));
        }

        Ok(records)
    }

    async fn send(&self, url: &str) -> Result<Response, NetBoxError> {
        self.client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, format!("Token {}", self.token))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(NetBoxError::Http)
    }
}

async fn classify(response: Response, path: &str) -> Result<Response, NetBoxError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::NOT_FOUND => NetBoxError::NotFound(format!("{} - {}", path, body)),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => NetBoxError::Authentication {
            status: status.as_u16(),
            message: format!("{} - {}", path, body),
        },
        _ => NetBoxError::Api {
            status: status.as_u16(),
            body,
        },
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, NetBoxError> {
    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| {
        let excerpt: String = text.chars().take(BODY_EXCERPT).collect();
        debug!("Undecodable NetBox response ({}): {}", e, excerpt);
        NetBoxError::Serialization(e)
    })
}
