//! Unit tests for the tenancy, extras, VPN, virtualization and circuit data sources

#[cfg(test)]
mod tests {
    use crate::datasources::circuits::*;
    use crate::datasources::extras::*;
    use crate::datasources::tenancy::*;
    use crate::datasources::virtualization::*;
    use crate::datasources::vpn::*;
    use crate::error::LookupError;
    use crate::test_utils::*;
    use netbox_client::{
        ChoiceField, Circuit, Cluster, ConfigContext, Contact, L2vpn, MockNetBoxClient, NestedRef,
        NotificationGroup, Tag, Tenant, Tunnel, TunnelTermination, VirtualMachine, VmInterface,
    };
    use serde_json::json;
    use tf_provider::value::Value;

    fn text(s: &str) -> Value<String> {
        Value::Value(s.to_string())
    }

    #[test]
    fn test_schemas_match_models() {
        assert_eq!(schema_keys::<TenantDataSource>(), model_keys::<TenantModel>());
        assert_eq!(schema_keys::<TenantGroupDataSource>(), model_keys::<GroupModel>());
        assert_eq!(schema_keys::<ContactGroupDataSource>(), model_keys::<GroupModel>());
        assert_eq!(schema_keys::<ContactDataSource>(), model_keys::<ContactModel>());
        assert_eq!(schema_keys::<ContactRoleDataSource>(), model_keys::<ContactRoleModel>());
        assert_eq!(schema_keys::<TagDataSource>(), model_keys::<TagDataModel>());
        assert_eq!(schema_keys::<TunnelDataSource>(), model_keys::<TunnelModel>());
        assert_eq!(schema_keys::<TunnelGroupDataSource>(), model_keys::<TunnelGroupModel>());
        assert_eq!(
            schema_keys::<TunnelTerminationDataSource>(),
            model_keys::<TunnelTerminationModel>()
        );
        assert_eq!(schema_keys::<ClusterDataSource>(), model_keys::<ClusterModel>());
        assert_eq!(schema_keys::<ClusterTypeDataSource>(), model_keys::<ClusterTypeModel>());
        assert_eq!(
            schema_keys::<VirtualMachineDataSource>(),
            model_keys::<VirtualMachineModel>()
        );
        assert_eq!(schema_keys::<CircuitDataSource>(), model_keys::<CircuitModel>());
        assert_eq!(schema_keys::<CircuitTypeDataSource>(), model_keys::<CircuitTypeModel>());
        assert_eq!(schema_keys::<CircuitGroupDataSource>(), model_keys::<CircuitGroupModel>());
        assert_eq!(
            schema_keys::<CircuitTerminationDataSource>(),
            model_keys::<CircuitTerminationModel>()
        );
        assert_eq!(schema_keys::<ProviderAccountDataSource>(), model_keys::<ProviderAccountModel>());
        assert_eq!(schema_keys::<ProviderNetworkDataSource>(), model_keys::<ProviderNetworkModel>());
        assert_eq!(schema_keys::<VmInterfaceDataSource>(), model_keys::<VmInterfaceModel>());
        assert_eq!(schema_keys::<VirtualDiskDataSource>(), model_keys::<VirtualDiskModel>());
        assert_eq!(schema_keys::<L2vpnDataSource>(), model_keys::<L2vpnModel>());
        assert_eq!(schema_keys::<IkePolicyDataSource>(), model_keys::<IkePolicyModel>());
        assert_eq!(schema_keys::<IkeProposalDataSource>(), model_keys::<IkeProposalModel>());
        assert_eq!(schema_keys::<IpsecProposalDataSource>(), model_keys::<IpsecProposalModel>());
        assert_eq!(schema_keys::<CustomFieldDataSource>(), model_keys::<CustomFieldDataModel>());
        assert_eq!(schema_keys::<ConfigContextDataSource>(), model_keys::<ConfigContextModel>());
        assert_eq!(schema_keys::<WebhookDataSource>(), model_keys::<WebhookModel>());
        assert_eq!(schema_keys::<EventRuleDataSource>(), model_keys::<EventRuleModel>());
        assert_eq!(
            schema_keys::<NotificationGroupDataSource>(),
            model_keys::<NotificationGroupModel>()
        );
    }

    #[tokio::test]
    async fn test_tenant_by_slug() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&Tenant {
            id: 5,
            name: "Ops".to_string(),
            slug: "ops".to_string(),
            group: Some(h.nested("tenancy/tenant-groups", 2, "Internal")),
            comments: Some(String::new()),
            ..Default::default()
        });

        let config = TenantModel {
            slug: text("ops"),
            ..Default::default()
        };
        let model = read::<TenantDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("5"));
        assert_eq!(model.group, text("Internal"));
        assert_eq!(model.group_id, Value::Value(2));
        assert_eq!(model.comments, Value::Null);
        assert_eq!(model.tags, Value::Null);
    }

    #[tokio::test]
    async fn test_contact_by_email() {
        let mock = mock();
        mock.add(&Contact {
            id: 3,
            name: "Jane Roe".to_string(),
            email: Some("jane@example.com".to_string()),
            phone: Some("+49 30 123".to_string()),
            ..Default::default()
        });

        let config = ContactModel {
            email: text("jane@example.com"),
            ..Default::default()
        };
        let model = read::<ContactDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("3"));
        assert_eq!(model.name, text("Jane Roe"));
        assert_eq!(model.phone, text("+49 30 123"));
        assert_eq!(model.title, Value::Null);
    }

    #[tokio::test]
    async fn test_tag_by_name() {
        let mock = mock();
        mock.add(&Tag {
            id: 1,
            name: "Production".to_string(),
            slug: "production".to_string(),
            color: Some("ff0000".to_string()),
            tagged_items: Some(12),
            ..Default::default()
        });

        let config = TagDataModel {
            name: text("Production"),
            ..Default::default()
        };
        let model = read::<TagDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.slug, text("production"));
        assert_eq!(model.color, text("ff0000"));
        assert_eq!(model.tagged_items, Value::Value(12));
    }

    fn add_tunnel_terminations(mock: &MockNetBoxClient) {
        let h = mock.helpers();
        mock.add(&Tunnel {
            id: 4,
            name: "wan-1".to_string(),
            status: Some(h.status("active")),
            ..Default::default()
        });
        for (id, role) in [(40, "hub"), (41, "spoke")] {
            mock.add(&TunnelTermination {
                id,
                tunnel: Some(h.tunnel(4, "wan-1")),
                role: Some(h.status(role)),
                termination_type: Some("dcim.interface".to_string()),
                termination_id: Some(100 + id as i64),
                outside_ip: Some(h.ip_address(9, "203.0.113.1/32")),
                ..Default::default()
            });
        }
    }

    #[tokio::test]
    async fn test_tunnel_termination_by_tunnel_name_and_role() {
        let mock = mock();
        add_tunnel_terminations(&mock);

        let config = TunnelTerminationModel {
            tunnel: text("wan-1"),
            role: text("spoke"),
            ..Default::default()
        };
        let model = read::<TunnelTerminationDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("41"));
        assert_eq!(model.tunnel, text("wan-1"), "Configured tunnel is kept");
        assert_eq!(model.tunnel_name, text("wan-1"));
        assert_eq!(model.role, text("spoke"));
        assert_eq!(model.termination_id, Value::Value(141));
        assert_eq!(model.outside_ip, text("203.0.113.1/32"));
        assert_eq!(model.outside_ip_id, Value::Value(9));
        assert_eq!(
            mock.requests(),
            vec![
                "/api/vpn/tunnels/?name=wan-1&limit=2".to_string(),
                "/api/vpn/tunnel-terminations/?tunnel_id=4&role=spoke&limit=2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_tunnel_termination_by_tunnel_id() {
        let mock = mock();
        add_tunnel_terminations(&mock);

        let config = TunnelTerminationModel {
            tunnel: text("4"),
            role: text("hub"),
            ..Default::default()
        };
        let model = read::<TunnelTerminationDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("40"));
        assert_eq!(model.tunnel, text("4"));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_tunnel_termination_without_role_is_ambiguous() {
        let mock = mock();
        add_tunnel_terminations(&mock);

        let config = TunnelTerminationModel {
            tunnel_name: text("wan-1"),
            ..Default::default()
        };
        let err = read::<TunnelTerminationDataSource>(&mock, config)
            .await
            .unwrap_err();

        match err {
            LookupError::AmbiguousResult { count, hint, .. } => {
                assert_eq!(count, 2);
                assert_eq!(hint, "'id' or 'tunnel'");
            }
            other => panic!("expected AmbiguousResult, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_tunnel_termination_by_tunnel_name_filter() {
        let mock = mock();
        add_tunnel_terminations(&mock);

        let config = TunnelTerminationModel {
            tunnel_name: text("wan-1"),
            role: text("hub"),
            ..Default::default()
        };
        let model = read::<TunnelTerminationDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("40"));
        assert_eq!(model.tunnel, text("4"));
        assert_eq!(
            mock.requests(),
            vec!["/api/vpn/tunnel-terminations/?tunnel=wan-1&role=hub&limit=2".to_string()]
        );
    }

    #[tokio::test]
    async fn test_cluster_type_reference() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&Cluster {
            id: 2,
            name: "vmware-a".to_string(),
            cluster_type: Some(h.nested("virtualization/cluster-types", 1, "VMware")),
            site: Some(h.site(1, "DC One")),
            ..Default::default()
        });

        let config = ClusterModel {
            name: text("vmware-a"),
            ..Default::default()
        };
        let model = read::<ClusterDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.cluster_type, text("VMware"));
        assert_eq!(model.type_id, Value::Value(1));
        assert_eq!(model.site_id, Value::Value(1));
    }

    #[tokio::test]
    async fn test_virtual_machine_by_name() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&VirtualMachine {
            id: 30,
            name: "app-01".to_string(),
            cluster: Some(h.nested("virtualization/clusters", 2, "vmware-a")),
            platform: Some(h.nested("dcim/platforms", 3, "Ubuntu")),
            vcpus: Some(2.5),
            memory: Some(4096),
            ..Default::default()
        });

        let config = VirtualMachineModel {
            name: text("app-01"),
            ..Default::default()
        };
        let model = read::<VirtualMachineDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("30"));
        assert_eq!(model.cluster, text("vmware-a"));
        assert_eq!(model.cluster_id, Value::Value(2));
        assert_eq!(model.platform_id, Value::Value(3));
        assert_eq!(model.vcpus, Value::Value(2.5));
        assert_eq!(model.memory, Value::Value(4096));
        assert_eq!(model.disk, Value::Null);
    }

    #[tokio::test]
    async fn test_circuit_by_cid() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&Circuit {
            id: 6,
            cid: "CID-1001".to_string(),
            provider: Some(h.nested("circuits/providers", 1, "Transit Co")),
            circuit_type: Some(h.nested("circuits/circuit-types", 2, "Internet")),
            status: Some(ChoiceField::new("active", "Active")),
            commit_rate: Some(10_000),
            ..Default::default()
        });

        let config = CircuitModel {
            cid: text("CID-1001"),
            ..Default::default()
        };
        let model = read::<CircuitDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("6"));
        assert_eq!(model.provider, text("Transit Co"));
        assert_eq!(model.circuit_type, text("Internet"));
        assert_eq!(model.type_id, Value::Value(2));
        assert_eq!(model.commit_rate, Value::Value(10_000));
        assert_eq!(model.provider_account, Value::Null);
        assert_eq!(mock.requests(), vec!["/api/circuits/circuits/?cid=CID-1001&limit=2".to_string()]);
    }

    #[tokio::test]
    async fn test_circuit_missing_cid_is_not_found() {
        let mock = mock();
        let config = CircuitModel {
            cid: text("nope"),
            ..Default::default()
        };

        let err = read::<CircuitDataSource>(&mock, config).await.unwrap_err();

        assert_eq!(err.to_string(), "No circuit found with cid 'nope'.");
    }

    #[tokio::test]
    async fn test_vm_interface_by_machine_name() {
        let mock = mock();
        let h = mock.helpers();
        for (id, name) in [(30, "app-01"), (31, "app-02")] {
            mock.add(&VirtualMachine {
                id,
                name: name.to_string(),
                ..Default::default()
            });
            mock.add(&VmInterface {
                id: id + 100,
                virtual_machine: Some(h.nested("virtualization/virtual-machines", id, name)),
                name: "eth0".to_string(),
                enabled: Some(true),
                mtu: Some(1500),
                ..Default::default()
            });
        }

        let config = VmInterfaceModel {
            virtual_machine: text("app-01"),
            name: text("eth0"),
            ..Default::default()
        };
        let model = read::<VmInterfaceDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("130"));
        assert_eq!(model.virtual_machine, text("app-01"));
        assert_eq!(model.virtual_machine_name, text("app-01"));
        assert_eq!(model.mtu, Value::Value(1500));
        assert_eq!(model.vrf_id, Value::Null);
        assert_eq!(
            mock.requests(),
            vec![
                "/api/virtualization/virtual-machines/?name=app-01&limit=2".to_string(),
                "/api/virtualization/interfaces/?virtual_machine_id=30&name=eth0&limit=2".to_string(),
            ]
        );

        let config = VmInterfaceModel {
            id: text("131"),
            ..Default::default()
        };
        let model = read::<VmInterfaceDataSource>(&mock, config).await.unwrap();
        assert_eq!(model.virtual_machine, text("31"));
    }

    #[tokio::test]
    async fn test_config_context_data_and_assignments() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&ConfigContext {
            id: 12,
            name: "ntp".to_string(),
            weight: Some(1000),
            is_active: Some(true),
            sites: vec![h.site(3, "DC One"), h.site(4, "DC Two")],
            tags: vec!["edge".to_string()],
            data: json!({"ntp": ["10.0.0.1"]}),
            ..Default::default()
        });

        let config = ConfigContextModel {
            name: text("ntp"),
            ..Default::default()
        };
        let model = read::<ConfigContextDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.data, text(r#"{"ntp":["10.0.0.1"]}"#));
        assert_eq!(model.sites, Value::Value(vec![3, 4]));
        assert_eq!(model.regions, Value::Null, "Unrestricted assignments are null");
        assert_eq!(model.tags, Value::Value(vec!["edge".to_string()]));
        assert_eq!(model.weight, Value::Value(1000));
    }

    #[tokio::test]
    async fn test_l2vpn_route_targets() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&L2vpn {
            id: 2,
            name: "Tenant A".to_string(),
            slug: "tenant-a".to_string(),
            l2vpn_type: Some(ChoiceField::new("vxlan-evpn", "VXLAN-EVPN")),
            identifier: Some(10100),
            import_targets: vec![h.nested("ipam/route-targets", 1, "65000:100")],
            ..Default::default()
        });

        let config = L2vpnModel {
            slug: text("tenant-a"),
            ..Default::default()
        };
        let model = read::<L2vpnDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.l2vpn_type, text("vxlan-evpn"));
        assert_eq!(model.identifier, Value::Value(10100));
        assert_eq!(model.import_targets, Value::Value(vec!["65000:100".to_string()]));
        assert_eq!(model.export_targets, Value::Null);
    }

    #[tokio::test]
    async fn test_notification_group_members() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&NotificationGroup {
            id: 6,
            name: "NOC".to_string(),
            groups: vec![h.nested("users/groups", 2, "operators")],
            users: vec![NestedRef {
                id: 9,
                username: Some("jdoe".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        });

        let config = NotificationGroupModel {
            id: text("6"),
            ..Default::default()
        };
        let model = read::<NotificationGroupDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.groups, Value::Value(vec!["operators".to_string()]));
        assert_eq!(model.group_ids, Value::Value(vec![2]));
        assert_eq!(model.users, Value::Value(vec!["jdoe".to_string()]));
        assert_eq!(model.user_ids, Value::Value(vec![9]));

        let err = read::<NotificationGroupDataSource>(&mock, NotificationGroupModel::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::MissingIdentifier { .. }), "got {:?}", err);
    }
}
