//! Unit tests for the IPAM data sources

#[cfg(test)]
mod tests {
    use crate::datasources::ipam::*;
    use crate::error::LookupError;
    use crate::test_utils::*;
    use netbox_client::{Asn, AsnRange, ChoiceField, Service};
    use serde_json::json;
    use tf_provider::value::Value;

    fn text(s: &str) -> Value<String> {
        Value::Value(s.to_string())
    }

    fn family(n: i64) -> Option<ChoiceField> {
        Some(ChoiceField {
            value: json!(n),
            label: Some(format!("IPv{}", n)),
        })
    }

    #[test]
    fn test_schemas_match_models() {
        assert_eq!(schema_keys::<PrefixDataSource>(), model_keys::<PrefixModel>());
        assert_eq!(schema_keys::<IpAddressDataSource>(), model_keys::<IpAddressModel>());
        assert_eq!(schema_keys::<AggregateDataSource>(), model_keys::<AggregateModel>());
        assert_eq!(schema_keys::<AsnDataSource>(), model_keys::<AsnModel>());
        assert_eq!(schema_keys::<RirDataSource>(), model_keys::<RirModel>());
        assert_eq!(schema_keys::<RoleDataSource>(), model_keys::<RoleModel>());
        assert_eq!(schema_keys::<VlanDataSource>(), model_keys::<VlanModel>());
        assert_eq!(schema_keys::<VlanGroupDataSource>(), model_keys::<VlanGroupModel>());
        assert_eq!(schema_keys::<VrfDataSource>(), model_keys::<VrfModel>());
        assert_eq!(schema_keys::<IpRangeDataSource>(), model_keys::<IpRangeModel>());
        assert_eq!(schema_keys::<AsnRangeDataSource>(), model_keys::<AsnRangeModel>());
        assert_eq!(schema_keys::<RouteTargetDataSource>(), model_keys::<RouteTargetModel>());
        assert_eq!(schema_keys::<ServiceDataSource>(), model_keys::<ServiceModel>());
        assert_eq!(schema_keys::<ServiceTemplateDataSource>(), model_keys::<ServiceTemplateModel>());
    }

    #[tokio::test]
    async fn test_prefix_by_prefix() {
        let mock = mock();
        let h = mock.helpers();
        let mut prefix = create_test_prefix(&mock, 1, "10.0.0.0/24", None);
        prefix.family = family(4);
        prefix.vlan = Some(h.vlan(9, 100, "servers"));
        mock.add(&prefix);

        let config = PrefixModel {
            prefix: text("10.0.0.0/24"),
            ..Default::default()
        };
        let model = read::<PrefixDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("1"));
        assert_eq!(model.family, Value::Value(4));
        assert_eq!(model.vlan, text("servers (100)"));
        assert_eq!(model.vlan_id, Value::Value(9));
        assert_eq!(model.vrf, Value::Null);
        assert_eq!(model.vrf_id, Value::Null);
        assert_eq!(model.status, text("active"));
    }

    #[tokio::test]
    async fn test_prefix_in_vrf() {
        let mock = mock();
        mock.add(&create_test_prefix(&mock, 1, "10.0.0.0/24", None));
        mock.add(&create_test_prefix(&mock, 2, "10.0.0.0/24", Some((3, "blue"))));

        let config = PrefixModel {
            prefix: text("10.0.0.0/24"),
            vrf_id: Value::Value(3),
            ..Default::default()
        };
        let model = read::<PrefixDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("2"));
        assert_eq!(model.vrf, text("blue"));
        assert_eq!(model.vrf_id, Value::Value(3));
    }

    #[tokio::test]
    async fn test_prefix_reused_across_vrfs_is_ambiguous() {
        let mock = mock();
        mock.add(&create_test_prefix(&mock, 1, "10.0.0.0/24", Some((3, "blue"))));
        mock.add(&create_test_prefix(&mock, 2, "10.0.0.0/24", Some((4, "red"))));

        let config = PrefixModel {
            prefix: text("10.0.0.0/24"),
            ..Default::default()
        };
        let err = read::<PrefixDataSource>(&mock, config).await.unwrap_err();

        match &err {
            LookupError::AmbiguousResult { count, hint, .. } => {
                assert_eq!(*count, 2);
                assert!(hint.contains("'id'"), "{}", hint);
            }
            other => panic!("expected AmbiguousResult, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ip_address_by_address() {
        let mock = mock();
        let h = mock.helpers();
        let mut ip = create_test_ip_address(&mock, 20, "10.0.0.1/24", None);
        ip.family = family(4);
        ip.role = Some(ChoiceField::new("loopback", "Loopback"));
        ip.assigned_object_type = Some("dcim.interface".to_string());
        ip.assigned_object_id = Some(100);
        ip.nat_inside = Some(h.ip_address(21, "192.168.0.1/24"));
        ip.dns_name = Some(String::new());
        mock.add(&ip);

        let config = IpAddressModel {
            address: text("10.0.0.1/24"),
            ..Default::default()
        };
        let model = read::<IpAddressDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("20"));
        assert_eq!(model.family, Value::Value(4));
        assert_eq!(model.role, text("loopback"));
        assert_eq!(model.assigned_object_type, text("dcim.interface"));
        assert_eq!(model.assigned_object_id, Value::Value(100));
        assert_eq!(model.nat_inside, text("192.168.0.1/24"));
        assert_eq!(model.dns_name, Value::Null);
    }

    #[tokio::test]
    async fn test_ip_address_in_vrf() {
        let mock = mock();
        mock.add(&create_test_ip_address(&mock, 20, "10.0.0.1/24", Some((3, "blue"))));
        mock.add(&create_test_ip_address(&mock, 21, "10.0.0.1/24", Some((4, "red"))));

        let config = IpAddressModel {
            address: text("10.0.0.1/24"),
            vrf_id: Value::Value(4),
            ..Default::default()
        };
        let model = read::<IpAddressDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("21"));
        assert_eq!(model.vrf, text("red"));
    }

    #[tokio::test]
    async fn test_asn_by_number() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&Asn {
            id: 5,
            asn: 65001,
            rir: Some(h.nested("ipam/rirs", 1, "RFC 6996")),
            site_count: Some(2),
            ..Default::default()
        });

        let config = AsnModel {
            asn: Value::Value(65001),
            ..Default::default()
        };
        let model = read::<AsnDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("5"));
        assert_eq!(model.rir, text("RFC 6996"));
        assert_eq!(model.site_count, Value::Value(2));
        assert_eq!(model.provider_count, Value::Null);
        assert_eq!(mock.requests(), vec!["/api/ipam/asns/?asn=65001&limit=2".to_string()]);
    }

    #[tokio::test]
    async fn test_vlan_by_vid_and_name() {
        let mock = mock();
        mock.add(&create_test_vlan(&mock, 7, 100, "servers"));
        mock.add(&create_test_vlan(&mock, 8, 100, "storage"));

        let config = VlanModel {
            vid: Value::Value(100),
            name: text("storage"),
            ..Default::default()
        };
        let model = read::<VlanDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("8"));
        assert_eq!(model.vid, Value::Value(100));
        assert_eq!(mock.requests(), vec!["/api/ipam/vlans/?vid=100&name=storage&limit=2".to_string()]);
    }

    #[tokio::test]
    async fn test_vlan_vid_alone_can_be_ambiguous() {
        let mock = mock();
        mock.add(&create_test_vlan(&mock, 7, 100, "servers"));
        mock.add(&create_test_vlan(&mock, 8, 100, "storage"));

        let config = VlanModel {
            vid: Value::Value(100),
            ..Default::default()
        };
        let err = read::<VlanDataSource>(&mock, config).await.unwrap_err();

        assert!(matches!(err, LookupError::AmbiguousResult { count: 2, .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_vlan_by_name_only() {
        let mock = mock();
        mock.add(&create_test_vlan(&mock, 7, 100, "servers"));

        let config = VlanModel {
            name: text("servers"),
            ..Default::default()
        };
        let model = read::<VlanDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("7"));
        assert_eq!(model.display_name, text("servers (100)"));
    }

    #[tokio::test]
    async fn test_vlan_without_keys_names_every_option() {
        let mock = mock();
        let err = read::<VlanDataSource>(&mock, VlanModel::default()).await.unwrap_err();

        assert!(matches!(err, LookupError::MissingIdentifier { .. }), "got {:?}", err);
        assert!(err.to_string().contains("'vid'"), "{}", err);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_service_narrowed_by_device() {
        let mock = mock();
        let h = mock.helpers();
        for (id, device) in [(40, 10), (41, 11)] {
            mock.add(&Service {
                id,
                device: Some(h.device(device, &format!("leaf-{:02}", device))),
                name: "ssh".to_string(),
                protocol: Some(ChoiceField::new("tcp", "TCP")),
                ports: vec![22, 2222],
                ipaddresses: vec![h.ip_address(7, "10.0.0.7/24")],
                ..Default::default()
            });
        }

        let config = ServiceModel {
            name: text("ssh"),
            device_id: Value::Value(11),
            ..Default::default()
        };
        let model = read::<ServiceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("41"));
        assert_eq!(model.device, text("leaf-11"));
        assert_eq!(model.protocol, text("tcp"));
        assert_eq!(model.ports, Value::Value(vec![22, 2222]));
        assert_eq!(model.ip_addresses, Value::Value(vec!["10.0.0.7/24".to_string()]));
        assert_eq!(model.virtual_machine_id, Value::Null);
        assert_eq!(
            mock.requests(),
            vec!["/api/ipam/services/?name=ssh&device_id=11&limit=2".to_string()]
        );

        let config = ServiceModel {
            name: text("ssh"),
            ..Default::default()
        };
        let err = read::<ServiceDataSource>(&mock, config).await.unwrap_err();
        assert!(matches!(err, LookupError::AmbiguousResult { count: 2, .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_asn_range_by_slug() {
        let mock = mock();
        mock.add(&AsnRange {
            id: 3,
            name: "Private 16-bit".to_string(),
            slug: "private-16".to_string(),
            rir: Some(mock.helpers().nested("ipam/rirs", 1, "RFC 6996")),
            start: 64512,
            end: 65534,
            ..Default::default()
        });

        let config = AsnRangeModel {
            slug: text("private-16"),
            ..Default::default()
        };
        let model = read::<AsnRangeDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.name, text("Private 16-bit"));
        assert_eq!(model.rir, text("RFC 6996"));
        assert_eq!(model.start, Value::Value(64512));
        assert_eq!(model.end, Value::Value(65534));
    }

    #[tokio::test]
    async fn test_service_without_ports_is_null() {
        let mock = mock();
        mock.add(&Service {
            id: 1,
            name: "dns".to_string(),
            ..Default::default()
        });

        let config = ServiceModel {
            id: text("1"),
            ..Default::default()
        };
        let model = read::<ServiceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.ports, Value::Null);
        assert_eq!(model.ip_addresses, Value::Null);
    }
}
