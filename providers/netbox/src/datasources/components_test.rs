//! Unit tests for the component, template, hardware, power and wireless data sources

#[cfg(test)]
mod tests {
    use crate::datasources::components::*;
    use crate::datasources::hardware::*;
    use crate::datasources::power::*;
    use crate::datasources::wireless::*;
    use crate::datasources::NetBoxDataSource;
    use crate::error::LookupError;
    use crate::test_utils::*;
    use netbox_client::{
        Cable, CableTermination, ChoiceField, ConsolePort, InterfaceTemplate, MockNetBoxClient,
        Module, NestedRef, PowerFeed, PowerPanel, RackReservation, WirelessLan,
    };
    use serde_json::json;
    use tf_provider::value::Value;

    fn text(s: &str) -> Value<String> {
        Value::Value(s.to_string())
    }

    #[test]
    fn test_schemas_match_models() {
        assert_eq!(schema_keys::<ConsolePortDataSource>(), model_keys::<ConsolePortModel>());
        assert_eq!(schema_keys::<ConsoleServerPortDataSource>(), model_keys::<ConsolePortModel>());
        assert_eq!(schema_keys::<PowerPortDataSource>(), model_keys::<PowerPortModel>());
        assert_eq!(schema_keys::<PowerOutletDataSource>(), model_keys::<PowerOutletModel>());
        assert_eq!(schema_keys::<FrontPortDataSource>(), model_keys::<FrontPortModel>());
        assert_eq!(schema_keys::<DeviceBayDataSource>(), model_keys::<DeviceBayModel>());
        assert_eq!(schema_keys::<InventoryItemDataSource>(), model_keys::<InventoryItemModel>());
        assert_eq!(schema_keys::<ModuleDataSource>(), model_keys::<ModuleModel>());
        assert_eq!(
            schema_keys::<ConsolePortTemplateDataSource>(),
            model_keys::<ConsolePortTemplateModel>()
        );
        assert_eq!(
            schema_keys::<PowerPortTemplateDataSource>(),
            model_keys::<PowerPortTemplateModel>()
        );
        assert_eq!(
            schema_keys::<PowerOutletTemplateDataSource>(),
            model_keys::<PowerOutletTemplateModel>()
        );
        assert_eq!(
            schema_keys::<InterfaceTemplateDataSource>(),
            model_keys::<InterfaceTemplateModel>()
        );
        assert_eq!(
            schema_keys::<FrontPortTemplateDataSource>(),
            model_keys::<FrontPortTemplateModel>()
        );
        assert_eq!(
            schema_keys::<RearPortTemplateDataSource>(),
            model_keys::<RearPortTemplateModel>()
        );
        assert_eq!(
            schema_keys::<InventoryItemTemplateDataSource>(),
            model_keys::<InventoryItemTemplateModel>()
        );
        assert_eq!(schema_keys::<ModuleTypeDataSource>(), model_keys::<ModuleTypeModel>());
        assert_eq!(schema_keys::<RackTypeDataSource>(), model_keys::<RackTypeModel>());
        assert_eq!(schema_keys::<RackReservationDataSource>(), model_keys::<RackReservationModel>());
        assert_eq!(schema_keys::<VirtualChassisDataSource>(), model_keys::<VirtualChassisModel>());
        assert_eq!(
            schema_keys::<VirtualDeviceContextDataSource>(),
            model_keys::<VirtualDeviceContextModel>()
        );
        assert_eq!(schema_keys::<CableDataSource>(), model_keys::<CableModel>());
        assert_eq!(schema_keys::<PowerPanelDataSource>(), model_keys::<PowerPanelModel>());
        assert_eq!(schema_keys::<PowerFeedDataSource>(), model_keys::<PowerFeedModel>());
        assert_eq!(schema_keys::<WirelessLanDataSource>(), model_keys::<WirelessLanModel>());
        assert_eq!(schema_keys::<WirelessLinkDataSource>(), model_keys::<WirelessLinkModel>());
    }

    fn console_port(mock: &MockNetBoxClient, id: u64, device: (u64, &str), name: &str) -> ConsolePort {
        let h = mock.helpers();
        ConsolePort {
            id,
            display: Some(name.to_string()),
            device: Some(h.device(device.0, device.1)),
            name: name.to_string(),
            port_type: Some(ChoiceField::new("rj-45", "RJ-45")),
            speed: Some(ChoiceField {
                value: json!(9600),
                label: Some("9600 bps".to_string()),
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_console_port_by_device_name_and_name() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));
        mock.add(&create_test_device(&mock, 11, "leaf-02", "SN2"));
        mock.add(&console_port(&mock, 200, (10, "leaf-01"), "con0"));
        mock.add(&console_port(&mock, 201, (11, "leaf-02"), "con0"));

        let config = ConsolePortModel {
            device: text("leaf-02"),
            name: text("con0"),
            ..Default::default()
        };
        let model = read::<ConsolePortDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("201"));
        assert_eq!(model.device, text("leaf-02"), "Configured device is kept");
        assert_eq!(model.device_name, text("leaf-02"));
        assert_eq!(model.port_type, text("rj-45"));
        assert_eq!(model.speed, Value::Value(9600));
        assert_eq!(model.module_id, Value::Null);
        assert_eq!(
            mock.requests(),
            vec![
                "/api/dcim/devices/?name=leaf-02&limit=2".to_string(),
                "/api/dcim/console-ports/?device_id=11&name=con0&limit=2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_console_port_by_id_fills_device_id() {
        let mock = mock();
        mock.add(&console_port(&mock, 200, (10, "leaf-01"), "con0"));

        let config = ConsolePortModel {
            id: text("200"),
            ..Default::default()
        };
        let model = read::<ConsolePortDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.device, text("10"));
        assert_eq!(model.name, text("con0"));
        assert_eq!(mock.requests(), vec!["/api/dcim/console-ports/200/".to_string()]);
    }

    #[tokio::test]
    async fn test_component_needs_device_and_name_together() {
        let mock = mock();
        let config = ConsolePortModel {
            name: text("con0"),
            ..Default::default()
        };

        let err = read::<ConsolePortDataSource>(&mock, config).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Either 'id' or 'device' and 'name' must be specified to identify the console port."
        );
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_module_by_device_and_bay() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));
        for (id, bay) in [(70, 1), (71, 2)] {
            mock.add(&Module {
                id,
                device: Some(h.device(10, "leaf-01")),
                module_bay: Some(h.nested("dcim/module-bays", bay, &format!("Slot {}", bay))),
                module_type: Some(h.device_type(5, "QSFP-LC")),
                status: Some(h.status("active")),
                serial: Some(format!("MOD{}", id)),
                ..Default::default()
            });
        }

        let config = ModuleModel {
            device: text("10"),
            module_bay_id: Value::Value(2),
            ..Default::default()
        };
        let model = read::<ModuleDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("71"));
        assert_eq!(model.serial, text("MOD71"));
        assert_eq!(model.module_type, text("QSFP-LC"));
        assert_eq!(model.status, text("active"));
        assert_eq!(
            mock.requests(),
            vec!["/api/dcim/modules/?device_id=10&module_bay_id=2&limit=2".to_string()],
            "Numeric devices skip the name lookup"
        );

        let config = ModuleModel {
            device: text("leaf-01"),
            ..Default::default()
        };
        let err = read::<ModuleDataSource>(&mock, config).await.unwrap_err();
        assert!(matches!(err, LookupError::AmbiguousResult { count: 2, .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_interface_template_by_name_and_device_type() {
        let mock = mock();
        let h = mock.helpers();
        for (id, device_type) in [(300, 1), (301, 2)] {
            mock.add(&InterfaceTemplate {
                id,
                device_type: Some(h.device_type(device_type, &format!("DT-{}", device_type))),
                name: "eth0".to_string(),
                interface_type: Some(ChoiceField::new("1000base-t", "1000BASE-T")),
                enabled: Some(true),
                ..Default::default()
            });
        }

        let config = InterfaceTemplateModel {
            name: text("eth0"),
            device_type_id: Value::Value(2),
            ..Default::default()
        };
        let model = read::<InterfaceTemplateDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("301"));
        assert_eq!(model.device_type, text("DT-2"));
        assert_eq!(model.interface_type, text("1000base-t"));
        assert_eq!(model.enabled, Value::Value(true));
        assert_eq!(model.module_type_id, Value::Null);

        let config = InterfaceTemplateModel {
            name: text("eth0"),
            ..Default::default()
        };
        let err = read::<InterfaceTemplateDataSource>(&mock, config).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Found 2 interface template records with name 'eth0'. Use 'id' for a unique lookup."
        );
    }

    #[tokio::test]
    async fn test_cable_by_id_lists_terminations() {
        let mock = mock();
        mock.add(&Cable {
            id: 5,
            cable_type: Some("cat6".to_string()),
            a_terminations: vec![CableTermination {
                object_type: "dcim.interface".to_string(),
                object_id: 100,
            }],
            b_terminations: vec![CableTermination {
                object_type: "dcim.interface".to_string(),
                object_id: 101,
            }],
            length: Some(2.5),
            ..Default::default()
        });

        let config = CableModel {
            id: text("5"),
            ..Default::default()
        };
        let model = read::<CableDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.cable_type, text("cat6"));
        assert_eq!(
            model.a_terminations,
            Value::Value(vec![CableTerminationModel {
                object_type: "dcim.interface".to_string(),
                object_id: 100,
            }])
        );
        assert_eq!(
            model.b_terminations,
            Value::Value(vec![CableTerminationModel {
                object_type: "dcim.interface".to_string(),
                object_id: 101,
            }])
        );
        assert_eq!(model.length, Value::Value(2.5));
        assert_eq!(model.tenant, Value::Null);
    }

    #[tokio::test]
    async fn test_cable_requires_id() {
        let mock = mock();

        let err = read::<CableDataSource>(&mock, CableModel::default()).await.unwrap_err();
        assert!(matches!(err, LookupError::MissingIdentifier { .. }), "got {:?}", err);

        let config = CableModel {
            id: text("five"),
            ..Default::default()
        };
        let err = CableDataSource::lookup(&config).validate().unwrap_err();
        assert!(matches!(err, LookupError::InvalidIdentifier { .. }), "got {:?}", err);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_rack_reservation_units_and_user() {
        let mock = mock();
        mock.add(&RackReservation {
            id: 8,
            rack: Some(mock.helpers().nested("dcim/racks", 3, "R1")),
            units: vec![10, 11, 12],
            user: Some(NestedRef {
                id: 2,
                username: Some("jdoe".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });

        let config = RackReservationModel {
            id: text("8"),
            ..Default::default()
        };
        let model = read::<RackReservationDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.rack, text("R1"));
        assert_eq!(model.units, Value::Value(vec![10, 11, 12]));
        assert_eq!(model.user, text("jdoe"));
        assert_eq!(model.user_id, Value::Value(2));
    }

    #[tokio::test]
    async fn test_power_feed_narrowed_by_panel() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&PowerPanel {
            id: 1,
            site: Some(h.site(3, "DC One")),
            name: "PP-A".to_string(),
            ..Default::default()
        });
        for (id, panel) in [(20, 1), (21, 2)] {
            mock.add(&PowerFeed {
                id,
                power_panel: Some(h.nested("dcim/power-panels", panel, &format!("PP-{}", panel))),
                name: "Feed A".to_string(),
                feed_type: Some(ChoiceField::new("primary", "Primary")),
                voltage: Some(230),
                ..Default::default()
            });
        }

        let config = PowerFeedModel {
            name: text("Feed A"),
            power_panel_id: Value::Value(1),
            ..Default::default()
        };
        let model = read::<PowerFeedDataSource>(&mock, config).await.unwrap();
        assert_eq!(model.id, text("20"));
        assert_eq!(model.feed_type, text("primary"));
        assert_eq!(model.voltage, Value::Value(230));

        let config = PowerPanelModel {
            name: text("PP-A"),
            ..Default::default()
        };
        let model = read::<PowerPanelDataSource>(&mock, config).await.unwrap();
        assert_eq!(model.site, text("DC One"));
        assert_eq!(model.site_id, Value::Value(3));
    }

    #[tokio::test]
    async fn test_wireless_lan_by_ssid() {
        let mock = mock();
        let h = mock.helpers();
        mock.add(&WirelessLan {
            id: 4,
            ssid: "corp".to_string(),
            vlan: Some(h.vlan(9, 100, "wifi")),
            auth_type: Some(ChoiceField::new("wpa-enterprise", "WPA Enterprise")),
            ..Default::default()
        });

        let config = WirelessLanModel {
            ssid: text("corp"),
            ..Default::default()
        };
        let model = read::<WirelessLanDataSource>(&mock, config).await.unwrap();

        assert_eq!(model.id, text("4"));
        assert_eq!(model.vlan, text("wifi"));
        assert_eq!(model.vlan_id, Value::Value(9));
        assert_eq!(model.auth_type, text("wpa-enterprise"));
        assert_eq!(mock.requests(), vec!["/api/wireless/wireless-lans/?ssid=corp&limit=2".to_string()]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ConsoleServerPortDataSource::TYPE_NAME, "console_server_port");
        assert_eq!(InventoryItemTemplateDataSource::TYPE_NAME, "inventory_item_template");
        assert_eq!(VirtualDeviceContextDataSource::TYPE_NAME, "virtual_device_context");
        assert_eq!(WirelessLinkDataSource::TYPE_NAME, "wireless_link");
    }
}
