//! Test utilities for data source and resolver tests
//!
//! Builders for mock-backed provider data and typed NetBox objects, plus
//! helpers that run a data source read the way Terraform would.

use crate::datasources::{DataSourceAdapter, NetBoxDataSource};
use crate::error::LookupError;
use crate::provider::ProviderData;
use netbox_client::{
    Device, IPAddress, Interface, MockNetBoxClient, NetBoxClientTrait, Prefix, Site, Vlan,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

pub const TEST_URL: &str = "http://netbox.test";

/// Empty mock client
pub fn mock() -> MockNetBoxClient {
    MockNetBoxClient::new(TEST_URL)
}

/// Provider data sharing `mock`'s store and request log
pub fn provider_data(mock: &MockNetBoxClient) -> ProviderData {
    let client: Arc<dyn NetBoxClientTrait> = Arc::new(mock.clone());
    ProviderData::with_client(client)
}

/// Run `D`'s read against `mock` with the given configuration
pub async fn read<D: NetBoxDataSource>(
    mock: &MockNetBoxClient,
    config: D::Model,
) -> Result<D::Model, LookupError> {
    DataSourceAdapter::<D>::new(provider_data(mock))
        .read_model(config)
        .await
}

/// Attribute names in `D`'s schema
pub fn schema_keys<D: NetBoxDataSource>() -> BTreeSet<String> {
    D::attributes()
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Field names of a state model as Terraform sees them
pub fn model_keys<M: Serialize + Default>() -> BTreeSet<String> {
    match serde_json::to_value(M::default()) {
        Ok(serde_json::Value::Object(fields)) => fields.keys().cloned().collect(),
        other => panic!("state model does not serialize to an object: {:?}", other),
    }
}

/// Site with a name, slug and active status
pub fn create_test_site(mock: &MockNetBoxClient, id: u64, name: &str, slug: &str) -> Site {
    let h = mock.helpers();
    Site {
        id,
        url: Some(format!("{}/api/dcim/sites/{}/", TEST_URL, id)),
        display: Some(name.to_string()),
        name: name.to_string(),
        slug: slug.to_string(),
        status: Some(h.status("active")),
        ..Default::default()
    }
}

/// Device at a site
pub fn create_test_device(mock: &MockNetBoxClient, id: u64, name: &str, serial: &str) -> Device {
    let h = mock.helpers();
    Device {
        id,
        url: Some(format!("{}/api/dcim/devices/{}/", TEST_URL, id)),
        display: Some(name.to_string()),
        name: Some(name.to_string()),
        serial: Some(serial.to_string()),
        device_type: Some(h.device_type(7, "DCS-7050")),
        role: Some(h.nested("dcim/device-roles", 4, "Leaf")),
        site: Some(h.site(1, "DC One")),
        status: Some(h.status("active")),
        ..Default::default()
    }
}

/// Interface on `device`
pub fn create_test_interface(
    mock: &MockNetBoxClient,
    id: u64,
    device: (u64, &str),
    name: &str,
) -> Interface {
    let h = mock.helpers();
    Interface {
        id,
        display: Some(name.to_string()),
        device: Some(h.device(device.0, device.1)),
        name: name.to_string(),
        enabled: Some(true),
        mtu: Some(9216),
        ..Default::default()
    }
}

/// Prefix, optionally in a VRF
pub fn create_test_prefix(mock: &MockNetBoxClient, id: u64, prefix: &str, vrf: Option<(u64, &str)>) -> Prefix {
    let h = mock.helpers();
    Prefix {
        id,
        display: Some(prefix.to_string()),
        prefix: prefix.to_string(),
        vrf: vrf.map(|(vrf_id, name)| h.vrf(vrf_id, name)),
        status: Some(h.status("active")),
        ..Default::default()
    }
}

/// IP address, optionally in a VRF
pub fn create_test_ip_address(
    mock: &MockNetBoxClient,
    id: u64,
    address: &str,
    vrf: Option<(u64, &str)>,
) -> IPAddress {
    let h = mock.helpers();
    IPAddress {
        id,
        display: Some(address.to_string()),
        address: address.to_string(),
        vrf: vrf.map(|(vrf_id, name)| h.vrf(vrf_id, name)),
        status: Some(h.status("active")),
        ..Default::default()
    }
}

/// VLAN with a VLAN ID and name
pub fn create_test_vlan(mock: &MockNetBoxClient, id: u64, vid: i64, name: &str) -> Vlan {
    let h = mock.helpers();
    Vlan {
        id,
        display: Some(format!("{} ({})", name, vid)),
        vid,
        name: name.to_string(),
        status: Some(h.status("active")),
        ..Default::default()
    }
}
