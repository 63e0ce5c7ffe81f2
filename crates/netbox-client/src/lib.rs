//! NetBox REST API Client
//!
//! A read-only Rust client for the NetBox REST API, used by the NetBox
//! Terraform provider to look objects up by ID or by filter.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{get_object, query_objects, NetBoxClient, Site};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Fetch a site by ID
//! let site: Site = get_object(&client, 1).await?;
//!
//! // Query sites by slug
//! let sites: Vec<Site> = query_objects(&client, &[("slug", "dc-one")], false).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Typed models**: DCIM, IPAM, tenancy, extras, VPN, virtualization, circuits
//! - **Pagination**: Support for fetching all pages of large result sets
//! - **Mocking**: `test-util` feature ships an in-memory `MockNetBoxClient`

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::{ClientOptions, NetBoxClient, DEFAULT_TIMEOUT};
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::{
    decode_page, get_object, query_objects, query_page, NetBoxClientTrait, NetBoxObject,
};
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockNetBoxClient;
