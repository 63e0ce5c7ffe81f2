//! Terraform provider for NetBox
//!
//! Exposes NetBox objects as read-only Terraform data sources:
//! - singular data sources (`netbox_site`, `netbox_device`, `netbox_vlan`, ...)
//!   that resolve exactly one object by ID or by an alternate key
//! - query data sources (`netbox_devices`, `netbox_prefixes`, ...) that list
//!   every object matching a set of filters
//!
//! The binary speaks the Terraform plugin protocol on stdout, so logs go to
//! stderr.

mod config;
mod datasources;
mod error;
mod lookup;
mod mapping;
mod provider;
mod schema;

#[cfg(test)]
mod lookup_test;
#[cfg(test)]
mod mapping_test;
#[cfg(test)]
mod test_utils;

use provider::NetBoxProvider;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("Starting NetBox provider v{}", env!("CARGO_PKG_VERSION"));

    tf_provider::serve("netbox", NetBoxProvider::default()).await
}
