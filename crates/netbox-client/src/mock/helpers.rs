//! Helper functions for creating nested NetBox model types

use crate::models::{ChoiceField, NestedRef, NestedTag};

/// Helper functions for creating nested types in tests
#[derive(Debug, Clone)]
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    /// Create helpers whose URLs point at `base_url`
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn slugify(name: &str) -> String {
        name.to_lowercase().replace(' ', "-")
    }

    /// Nested reference carrying a name and a derived slug
    pub fn nested(&self, endpoint: &str, id: u64, name: &str) -> NestedRef {
        NestedRef {
            id,
            url: Some(format!("{}/api/{}/{}/", self.base_url, endpoint, id)),
            display: Some(name.to_string()),
            name: Some(name.to_string()),
            slug: Some(Self::slugify(name)),
            ..Default::default()
        }
    }

    /// Nested site
    pub fn site(&self, id: u64, name: &str) -> NestedRef {
        self.nested("dcim/sites", id, name)
    }

    /// Nested tenant
    pub fn tenant(&self, id: u64, name: &str) -> NestedRef {
        self.nested("tenancy/tenants", id, name)
    }

    /// Nested device (brief devices carry no slug)
    pub fn device(&self, id: u64, name: &str) -> NestedRef {
        NestedRef {
            slug: None,
            ..self.nested("dcim/devices", id, name)
        }
    }

    /// Nested device type (identified by model)
    pub fn device_type(&self, id: u64, model: &str) -> NestedRef {
        NestedRef {
            name: None,
            model: Some(model.to_string()),
            ..self.nested("dcim/device-types", id, model)
        }
    }

    /// Nested VRF
    pub fn vrf(&self, id: u64, name: &str) -> NestedRef {
        NestedRef {
            slug: None,
            ..self.nested("ipam/vrfs", id, name)
        }
    }

    /// Nested VLAN
    pub fn vlan(&self, id: u64, vid: i64, name: &str) -> NestedRef {
        NestedRef {
            slug: None,
            vid: Some(vid),
            display: Some(format!("{} ({})", name, vid)),
            ..self.nested("ipam/vlans", id, name)
        }
    }

    /// Nested IP address
    pub fn ip_address(&self, id: u64, address: &str) -> NestedRef {
        NestedRef {
            id,
            url: Some(format!("{}/api/ipam/ip-addresses/{}/", self.base_url, id)),
            display: Some(address.to_string()),
            address: Some(address.to_string()),
            ..Default::default()
        }
    }

    /// Nested tunnel
    pub fn tunnel(&self, id: u64, name: &str) -> NestedRef {
        NestedRef {
            slug: None,
            ..self.nested("vpn/tunnels", id, name)
        }
    }

    /// Nested tag
    pub fn tag(&self, id: u64, name: &str) -> NestedTag {
        NestedTag {
            id,
            url: Some(format!("{}/api/extras/tags/{}/", self.base_url, id)),
            display: Some(name.to_string()),
            name: name.to_string(),
            slug: Self::slugify(name),
            color: Some("9e9e9e".to_string()),
        }
    }

    /// Status choice (`active` → `Active`)
    pub fn status(&self, value: &str) -> ChoiceField {
        let mut label = value.to_string();
        if let Some(first) = label.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        ChoiceField::new(value, &label)
    }
}
