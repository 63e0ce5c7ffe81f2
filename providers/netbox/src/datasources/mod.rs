//! Data sources.
//!
//! Each singular data source is a unit struct implementing
//! [`NetBoxDataSource`]: its state model, schema attributes, lookup keys and
//! field mapping. [`DataSourceAdapter`] serves any of them to Terraform
//! (validate, resolve, map). The plural query data sources live in `query.rs`.

pub mod circuits;
pub mod components;
pub mod dcim;
pub mod extras;
pub mod hardware;
pub mod ipam;
pub mod power;
pub mod query;
pub mod tenancy;
pub mod virtualization;
pub mod vpn;
pub mod wireless;

#[cfg(test)]
mod components_test;
#[cfg(test)]
mod dcim_test;
#[cfg(test)]
mod ipam_test;
#[cfg(test)]
mod others_test;
#[cfg(test)]
mod query_test;

use crate::error::LookupError;
use crate::lookup::{resolve, Lookup};
use crate::provider::ProviderData;
use crate::schema;
use async_trait::async_trait;
use netbox_client::NetBoxObject;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;
use tf_provider::DynamicDataSource;
use tf_provider::value::Value;
use tf_provider::schema::{Attribute, Schema};
use tf_provider::value::ValueEmpty;
use tf_provider::{DataSource, Diagnostics};
use tracing::debug;

/// A singular NetBox data source
pub trait NetBoxDataSource: Send + Sync + 'static {
    /// NetBox object the data source reads
    type Object: NetBoxObject;
    /// Terraform state model
    type Model: Serialize + DeserializeOwned + Default + Clone + std::fmt::Debug + Send + Sync + 'static;

    /// Type name without the provider prefix, e.g. `site`
    const TYPE_NAME: &'static str;

    /// Markdown description shown in the registry docs
    fn description() -> &'static str;

    /// Schema attributes, keyed by the model's field names
    fn attributes() -> Vec<(&'static str, Attribute)>;

    /// Lookup keys taken from the configuration, in precedence order
    fn lookup(model: &Self::Model) -> Lookup;

    /// Copy every field of `object` into `model`
    fn map(object: &Self::Object, model: &mut Self::Model);
}

/// Lookup shared by objects with a slug: `id`, then `slug`, then `name`
pub(crate) fn slugged<T: NetBoxObject>(
    id: &Value<String>,
    slug: &Value<String>,
    name: &Value<String>,
) -> Lookup {
    Lookup::new(T::KIND)
        .id("id", id)
        .key("slug", "slug", slug)
        .key("name", "name", name)
}

/// Serves a [`NetBoxDataSource`] through the Terraform plugin protocol
pub struct DataSourceAdapter<D> {
    data: ProviderData,
    marker: PhantomData<fn() -> D>,
}

impl<D: NetBoxDataSource> std::fmt::Debug for DataSourceAdapter<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSourceAdapter")
            .field("type_name", &D::TYPE_NAME)
            .field("data", &self.data)
            .finish()
    }
}

impl<D: NetBoxDataSource> DataSourceAdapter<D> {
    /// Adapter reading through the shared client handle
    pub fn new(data: ProviderData) -> Self {
        Self {
            data,
            marker: PhantomData,
        }
    }

    /// Resolve the configured object and map it onto the configuration
    pub async fn read_model(&self, config: D::Model) -> Result<D::Model, LookupError> {
        let client = self.data.client()?;
        let lookup = D::lookup(&config);
        let object: D::Object = resolve(client.as_ref(), &lookup).await?;
        debug!("Read netbox_{} {}", D::TYPE_NAME, object.id());

        let mut model = config;
        D::map(&object, &mut model);
        Ok(model)
    }
}

#[async_trait]
impl<D: NetBoxDataSource> DataSource for DataSourceAdapter<D> {
    type State<'a> = D::Model;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(schema::build(D::description(), D::attributes()))
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Err(e) = D::lookup(&config).validate() {
            diags.root_error(e.summary(), e.to_string());
            return None;
        }
        Some(())
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        match self.read_model(config).await {
            Ok(model) => Some(model),
            Err(e) => {
                diags.root_error(e.summary(), e.to_string());
                None
            }
        }
    }
}

/// Number of data sources in [`registry`]
pub const DATA_SOURCE_COUNT: usize = 85;

fn add<D: NetBoxDataSource>(
    sources: &mut HashMap<String, Box<dyn DynamicDataSource>>,
    data: &ProviderData,
) {
    sources.insert(
        D::TYPE_NAME.to_string(),
        DataSourceAdapter::<D>::new(data.clone()).into(),
    );
}

/// Every data source, keyed by type name without the `netbox_` prefix
pub fn registry(data: &ProviderData) -> HashMap<String, Box<dyn DynamicDataSource>> {
    let mut sources = HashMap::new();

    add::<dcim::SiteDataSource>(&mut sources, data);
    add::<dcim::SiteGroupDataSource>(&mut sources, data);
    add::<dcim::RegionDataSource>(&mut sources, data);
    add::<dcim::LocationDataSource>(&mut sources, data);
    add::<dcim::RackDataSource>(&mut sources, data);
    add::<dcim::RackRoleDataSource>(&mut sources, data);
    add::<dcim::ManufacturerDataSource>(&mut sources, data);
    add::<dcim::PlatformDataSource>(&mut sources, data);
    add::<dcim::DeviceRoleDataSource>(&mut sources, data);
    add::<dcim::DeviceTypeDataSource>(&mut sources, data);
    add::<dcim::DeviceDataSource>(&mut sources, data);
    add::<dcim::InterfaceDataSource>(&mut sources, data);

    add::<components::ConsolePortDataSource>(&mut sources, data);
    add::<components::ConsoleServerPortDataSource>(&mut sources, data);
    add::<components::PowerPortDataSource>(&mut sources, data);
    add::<components::PowerOutletDataSource>(&mut sources, data);
    add::<components::FrontPortDataSource>(&mut sources, data);
    add::<components::DeviceBayDataSource>(&mut sources, data);
    add::<components::InventoryItemDataSource>(&mut sources, data);
    add::<components::ModuleDataSource>(&mut sources, data);
    add::<components::ConsolePortTemplateDataSource>(&mut sources, data);
    add::<components::PowerPortTemplateDataSource>(&mut sources, data);
    add::<components::PowerOutletTemplateDataSource>(&mut sources, data);
    add::<components::InterfaceTemplateDataSource>(&mut sources, data);
    add::<components::FrontPortTemplateDataSource>(&mut sources, data);
    add::<components::RearPortTemplateDataSource>(&mut sources, data);
    add::<components::InventoryItemTemplateDataSource>(&mut sources, data);

    add::<hardware::ModuleTypeDataSource>(&mut sources, data);
    add::<hardware::RackTypeDataSource>(&mut sources, data);
    add::<hardware::RackReservationDataSource>(&mut sources, data);
    add::<hardware::VirtualChassisDataSource>(&mut sources, data);
    add::<hardware::VirtualDeviceContextDataSource>(&mut sources, data);
    add::<hardware::CableDataSource>(&mut sources, data);

    add::<power::PowerPanelDataSource>(&mut sources, data);
    add::<power::PowerFeedDataSource>(&mut sources, data);

    add::<tenancy::TenantDataSource>(&mut sources, data);
    add::<tenancy::TenantGroupDataSource>(&mut sources, data);
    add::<tenancy::ContactDataSource>(&mut sources, data);
    add::<tenancy::ContactGroupDataSource>(&mut sources, data);
    add::<tenancy::ContactRoleDataSource>(&mut sources, data);

    add::<ipam::PrefixDataSource>(&mut sources, data);
    add::<ipam::IpAddressDataSource>(&mut sources, data);
    add::<ipam::AggregateDataSource>(&mut sources, data);
    add::<ipam::AsnDataSource>(&mut sources, data);
    add::<ipam::RirDataSource>(&mut sources, data);
    add::<ipam::RoleDataSource>(&mut sources, data);
    add::<ipam::VlanDataSource>(&mut sources, data);
    add::<ipam::VlanGroupDataSource>(&mut sources, data);
    add::<ipam::VrfDataSource>(&mut sources, data);
    add::<ipam::IpRangeDataSource>(&mut sources, data);
    add::<ipam::AsnRangeDataSource>(&mut sources, data);
    add::<ipam::RouteTargetDataSource>(&mut sources, data);
    add::<ipam::ServiceDataSource>(&mut sources, data);
    add::<ipam::ServiceTemplateDataSource>(&mut sources, data);

    add::<extras::TagDataSource>(&mut sources, data);
    add::<extras::CustomFieldDataSource>(&mut sources, data);
    add::<extras::ConfigContextDataSource>(&mut sources, data);
    add::<extras::WebhookDataSource>(&mut sources, data);
    add::<extras::EventRuleDataSource>(&mut sources, data);
    add::<extras::NotificationGroupDataSource>(&mut sources, data);

    add::<vpn::TunnelDataSource>(&mut sources, data);
    add::<vpn::TunnelGroupDataSource>(&mut sources, data);
    add::<vpn::TunnelTerminationDataSource>(&mut sources, data);
    add::<vpn::L2vpnDataSource>(&mut sources, data);
    add::<vpn::IkePolicyDataSource>(&mut sources, data);
    add::<vpn::IkeProposalDataSource>(&mut sources, data);
    add::<vpn::IpsecProposalDataSource>(&mut sources, data);

    add::<virtualization::ClusterDataSource>(&mut sources, data);
    add::<virtualization::ClusterTypeDataSource>(&mut sources, data);
    add::<virtualization::VirtualMachineDataSource>(&mut sources, data);
    add::<virtualization::VmInterfaceDataSource>(&mut sources, data);
    add::<virtualization::VirtualDiskDataSource>(&mut sources, data);

    add::<circuits::CircuitDataSource>(&mut sources, data);
    add::<circuits::CircuitTypeDataSource>(&mut sources, data);
    add::<circuits::CircuitGroupDataSource>(&mut sources, data);
    add::<circuits::CircuitTerminationDataSource>(&mut sources, data);
    add::<circuits::ProviderAccountDataSource>(&mut sources, data);
    add::<circuits::ProviderNetworkDataSource>(&mut sources, data);

    add::<wireless::WirelessLanDataSource>(&mut sources, data);
    add::<wireless::WirelessLinkDataSource>(&mut sources, data);

    for kind in query::QUERY_KINDS {
        sources.insert(
            kind.type_name.to_string(),
            query::QueryDataSource::new(*kind, data.clone()).into(),
        );
    }

    sources
}
