//! Unit tests for the DCIM data sources

#[cfg(test)]
mod tests {
    use crate::datasources::dcim::*;
    use crate::datasources::{DataSourceAdapter, NetBoxDataSource};
    use crate::error::LookupError;
    use crate::mapping::{CustomFieldModel, TagModel};
    use crate::provider::ProviderData;
    use crate::test_utils::*;
    use netbox_client::{ChoiceField, Device, DeviceType, Rack, Region};
    use serde_json::json;
    use tf_provider::value::Value;

    fn text(s: &str) -> Value<String> {
        Value::Value(s.to_string())
    }

    #[test]
    fn test_schemas_match_models() {
        assert_eq!(schema_keys::<SiteDataSource>(), model_keys::<SiteModel>());
        assert_eq!(schema_keys::<SiteGroupDataSource>(), model_keys::<HierarchyModel>());
        assert_eq!(schema_keys::<RegionDataSource>(), model_keys::<HierarchyModel>());
        assert_eq!(schema_keys::<LocationDataSource>(), model_keys::<LocationModel>());
        assert_eq!(schema_keys::<RackDataSource>(), model_keys::<RackModel>());
        assert_eq!(schema_keys::<RackRoleDataSource>(), model_keys::<RackRoleModel>());
        assert_eq!(schema_keys::<DeviceRoleDataSource>(), model_keys::<DeviceRoleModel>());
        assert_eq!(schema_keys::<ManufacturerDataSource>(), model_keys::<ManufacturerModel>());
        assert_eq!(schema_keys::<PlatformDataSource>(), model_keys::<PlatformModel>());
        assert_eq!(schema_keys::<DeviceTypeDataSource>(), model_keys::<DeviceTypeModel>());
        assert_eq!(schema_keys::<DeviceDataSource>(), model_keys::<DeviceModel>());
        assert_eq!(schema_keys::<InterfaceDataSource>(), model_keys::<InterfaceModel>());
    }

    #[tokio::test]
    async fn test_site_read_by_id() {
        let mock = mock();
        let h = mock.helpers();
        let mut site = create_test_site(&mock, 1, "DC One", "dc-one");
        site.region = Some(h.nested("dcim/regions", 2, "Europe"));
        site.tenant = Some(h.tenant(5, "Ops"));
        site.time_zone = Some("Europe/Berlin".to_string());
        site.latitude = Some(52.52);
        site.tags = vec![h.tag(1, "prod")];
        site.custom_fields = match json!({"owner": "netops", "unset": null}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        mock.add(&site);

        let config = SiteModel {
            id: text("1"),
            ..Default::default()
        };
        let model = read::<SiteDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("1"));
        assert_eq!(model.name, text("DC One"));
        assert_eq!(model.slug, text("dc-one"));
        assert_eq!(model.status, text("active"));
        assert_eq!(model.region, text("Europe"));
        assert_eq!(model.region_id, Value::Value(2));
        assert_eq!(model.tenant, text("Ops"));
        assert_eq!(model.tenant_id, Value::Value(5));
        assert_eq!(model.time_zone, text("Europe/Berlin"));
        assert_eq!(model.latitude, Value::Value(52.52));
        assert_eq!(model.longitude, Value::Null);
        assert_eq!(model.group, Value::Null);
        assert_eq!(model.display_name, text("DC One"));
        assert_eq!(
            model.tags,
            Value::Value(vec![TagModel {
                name: "prod".to_string(),
                slug: "prod".to_string()
            }])
        );
        assert_eq!(
            model.custom_fields,
            Value::Value(vec![CustomFieldModel {
                name: "owner".to_string(),
                field_type: "text".to_string(),
                value: "netops".to_string(),
            }])
        );
    }

    #[tokio::test]
    async fn test_empty_description_maps_to_null() {
        let mock = mock();
        let mut blank = create_test_site(&mock, 1, "Blank", "blank");
        blank.description = Some(String::new());
        let absent = create_test_site(&mock, 2, "Absent", "absent");
        mock.add(&blank);
        mock.add(&absent);

        let a = read::<SiteDataSource>(&mock, SiteModel { id: text("1"), ..Default::default() })
            .await
            .unwrap();
        let b = read::<SiteDataSource>(&mock, SiteModel { id: text("2"), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(a.description, Value::Null);
        assert_eq!(a.description, b.description);
    }

    #[tokio::test]
    async fn test_mapping_is_idempotent() {
        let mock = mock();
        mock.add(&create_test_site(&mock, 1, "DC One", "dc-one"));

        let config = SiteModel {
            slug: text("dc-one"),
            ..Default::default()
        };
        let first = read::<SiteDataSource>(&mock, config).await.unwrap();
        let second = read::<SiteDataSource>(&mock, first.clone()).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_region_hierarchy() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&Region {
            id: 3,
            name: "Berlin".to_string(),
            slug: "berlin".to_string(),
            parent: Some(h.nested("dcim/regions", 2, "Germany")),
            ..Default::default()
        });

        let config = HierarchyModel {
            name: text("Berlin"),
            ..Default::default()
        };
        let model = read::<RegionDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("3"));
        assert_eq!(model.parent, text("Germany"));
        assert_eq!(model.parent_id, Value::Value(2));
    }

    #[tokio::test]
    async fn test_rack_width_is_numeric() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&Rack {
            id: 8,
            name: "R01".to_string(),
            site: Some(h.site(1, "DC One")),
            width: Some(ChoiceField {
                value: json!(19),
                label: Some("19 inches".to_string()),
            }),
            u_height: Some(42),
            ..Default::default()
        });

        let config = RackModel {
            name: text("R01"),
            ..Default::default()
        };
        let model = read::<RackDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.width, Value::Value(19));
        assert_eq!(model.site, text("DC One"));
    }

    #[tokio::test]
    async fn test_device_type_by_model() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&DeviceType {
            id: 7,
            model: "DCS-7050".to_string(),
            slug: "dcs-7050".to_string(),
            manufacturer: Some(h.nested("dcim/manufacturers", 1, "Arista")),
            ..Default::default()
        });

        let config = DeviceTypeModel {
            model: text("DCS-7050"),
            ..Default::default()
        };
        let model = read::<DeviceTypeDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("7"));
        assert_eq!(model.manufacturer, text("Arista"));
        assert_eq!(mock.requests(), vec!["/api/dcim/device-types/?model=DCS-7050&limit=2".to_string()]);
    }

    #[tokio::test]
    async fn test_device_by_name() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));
        mock.add(&create_test_device(&mock, 11, "leaf-02", "SN2"));

        let config = DeviceModel {
            name: text("leaf-02"),
            ..Default::default()
        };
        let model = read::<DeviceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("11"));
        assert_eq!(model.serial, text("SN2"));
        assert_eq!(model.device_type, text("DCS-7050"));
        assert_eq!(model.device_type_id, Value::Value(7));
        assert_eq!(model.role, text("Leaf"));
        assert_eq!(model.site, text("DC One"));
        assert_eq!(model.site_id, Value::Value(1));
        assert_eq!(model.status, text("active"));
        assert_eq!(model.primary_ip4, Value::Null);
    }

    #[tokio::test]
    async fn test_device_by_serial() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));

        let config = DeviceModel {
            serial: text("SN1"),
            ..Default::default()
        };
        let model = read::<DeviceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.name, text("leaf-01"));
        assert_eq!(mock.requests(), vec!["/api/dcim/devices/?serial=SN1&limit=2".to_string()]);
    }

    #[tokio::test]
    async fn test_device_role_falls_back_to_device_role() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&Device {
            id: 12,
            name: Some("spine-01".to_string()),
            device_role: Some(h.nested("dcim/device-roles", 6, "Spine")),
            ..Default::default()
        });

        let config = DeviceModel {
            id: text("12"),
            ..Default::default()
        };
        let model = read::<DeviceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.role, text("Spine"));
        assert_eq!(model.role_id, Value::Value(6));
    }

    #[tokio::test]
    async fn test_duplicate_device_names_are_ambiguous() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf", "SN1"));
        mock.add(&create_test_device(&mock, 11, "leaf", "SN2"));

        let config = DeviceModel {
            name: text("leaf"),
            ..Default::default()
        };
        let err = read::<DeviceDataSource>(&mock, config).await.unwrap_err();

        assert!(matches!(err, LookupError::AmbiguousResult { count: 2, .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_interface_by_device_name_keeps_configured_device() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));
        mock.add(&create_test_interface(&mock, 100, (10, "leaf-01"), "eth0"));

        let config = InterfaceModel {
            device: text("leaf-01"),
            name: text("eth0"),
            ..Default::default()
        };
        let model = read::<InterfaceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("100"));
        assert_eq!(model.device, text("leaf-01"));
        assert_eq!(model.device_name, text("leaf-01"));
        assert_eq!(model.enabled, Value::Value(true));
        assert_eq!(model.mtu, Value::Value(9216));
    }

    #[tokio::test]
    async fn test_interface_by_id_fills_device_id() {
        let mock = mock();
        mock.add(&create_test_interface(&mock, 100, (10, "leaf-01"), "eth0"));

        let config = InterfaceModel {
            id: text("100"),
            ..Default::default()
        };
        let model = read::<InterfaceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.device, text("10"));
        assert_eq!(model.device_name, text("leaf-01"));
        assert_eq!(model.name, text("eth0"));
    }

    #[tokio::test]
    async fn test_read_without_client_is_not_configured() {
        let adapter = DataSourceAdapter::<SiteDataSource>::new(ProviderData::default());
        let config = SiteModel {
            id: text("1"),
            ..Default::default()
        };

        let err = adapter.read_model(config).await.unwrap_err();

        assert!(matches!(err, LookupError::NotConfigured));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SiteDataSource::TYPE_NAME, "site");
        assert_eq!(DeviceTypeDataSource::TYPE_NAME, "device_type");
        assert_eq!(InterfaceDataSource::TYPE_NAME, "interface");
    }
}
