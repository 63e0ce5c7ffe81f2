//! NetBox API models
//!
//! These models match the NetBox REST API serializers closely enough for
//! read-only use. Every struct tolerates missing fields (`#[serde(default)]`)
//! so responses from older and newer NetBox releases decode alike.

/// Implement [`crate::netbox_trait::NetBoxObject`] for a model
macro_rules! netbox_object {
    ($ty:ty, $endpoint:literal, $kind:literal) => {
        impl $crate::netbox_trait::NetBoxObject for $ty {
            const ENDPOINT: &'static str = $endpoint;
            const KIND: &'static str = $kind;

            fn id(&self) -> u64 {
                self.id
            }
        }
    };
}

pub(crate) use netbox_object;

pub mod circuits;
pub mod common;
pub mod components;
pub mod dcim;
pub mod extras;
pub mod ipam;
pub mod tenancy;
pub mod virtualization;
pub mod vpn;
pub mod wireless;

pub use circuits::*;
pub use common::*;
pub use components::*;
pub use dcim::*;
pub use extras::*;
pub use ipam::*;
pub use tenancy::*;
pub use virtualization::*;
pub use vpn::*;
pub use wireless::*;
