//! Unit tests for the query data sources

#[cfg(test)]
mod tests {
    use crate::datasources::query::*;
    use crate::error::LookupError;
    use crate::provider::ProviderData;
    use crate::test_utils::*;
    use serde_json::json;
    use tf_provider::value::Value;

    fn kind(type_name: &str) -> QueryKind {
        *QUERY_KINDS
            .iter()
            .find(|k| k.type_name == type_name)
            .unwrap_or_else(|| panic!("no query kind {}", type_name))
    }

    fn filter(name: &str, values: &[&str]) -> FilterModel {
        FilterModel {
            name: Value::Value(name.to_string()),
            values: Value::Value(values.iter().map(|v| v.to_string()).collect()),
        }
    }

    fn config(blocks: Vec<FilterModel>) -> QueryModel {
        QueryModel {
            filter: Value::Value(blocks),
            ..Default::default()
        }
    }

    fn summary_and_detail(err: LookupError) -> (String, String) {
        let detail = err.to_string();
        (err.summary(), detail)
    }

    #[test]
    fn test_query_kinds_are_registered_once() {
        let mut names: Vec<&str> = QUERY_KINDS.iter().map(|k| k.type_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names, vec!["devices", "interfaces", "ip_addresses", "prefixes", "virtual_machines"]);
    }

    #[test]
    fn test_missing_filters() {
        let devices = kind("devices");
        let err = expand_filters(&devices, &[]).unwrap_err();

        let (summary, detail) = summary_and_detail(err);
        assert_eq!(summary, "Missing filters");
        assert!(detail.contains("listing all devices"), "{}", detail);

        let blank = FilterModel {
            name: Value::Value("  ".to_string()),
            values: Value::Null,
        };
        assert!(expand_filters(&devices, &[blank]).is_err(), "Blank names do not count");
    }

    #[test]
    fn test_unsupported_filter_lists_supported_names() {
        let err = expand_filters(&kind("devices"), &[filter("rack", &["r1"])]).unwrap_err();

        let (summary, detail) = summary_and_detail(err);
        assert_eq!(summary, "Unsupported filter");
        assert!(
            detail.starts_with("Unsupported filter name \"rack\" for netbox_devices. Supported filters:"),
            "{}",
            detail
        );
        assert!(detail.contains("serial"), "{}", detail);
    }

    #[test]
    fn test_blocks_with_the_same_name_are_merged() {
        let plan = expand_filters(
            &kind("devices"),
            &[
                filter("name", &["leaf-01"]),
                filter("status", &["active"]),
                filter("name", &["leaf-02"]),
            ],
        )
        .unwrap();

        assert_eq!(
            plan.params,
            vec![
                ("name".to_string(), "leaf-01".to_string()),
                ("name".to_string(), "leaf-02".to_string()),
                ("status".to_string(), "active".to_string()),
            ]
        );
    }

    #[test]
    fn test_q_takes_exactly_one_value() {
        let devices = kind("devices");
        assert!(expand_filters(&devices, &[filter("q", &["leaf"])]).is_ok());

        let err = expand_filters(&devices, &[filter("q", &["leaf", "spine"])]).unwrap_err();
        let (summary, detail) = summary_and_detail(err);
        assert_eq!(summary, "Invalid filter values");
        assert!(detail.contains("exactly one value"), "{}", detail);
    }

    #[test]
    fn test_id_filters_must_be_numeric() {
        let prefixes = kind("prefixes");
        let plan = expand_filters(&prefixes, &[filter("vrf_id", &[" 3 ", "4"])]).unwrap();
        assert_eq!(
            plan.params,
            vec![
                ("vrf_id".to_string(), "3".to_string()),
                ("vrf_id".to_string(), "4".to_string()),
            ]
        );

        let err = expand_filters(&prefixes, &[filter("vrf_id", &["blue"])]).unwrap_err();
        assert_eq!(err.summary(), "Invalid filter values");
    }

    #[test]
    fn test_bool_filters_are_normalized() {
        let interfaces = kind("interfaces");
        let plan = expand_filters(&interfaces, &[filter("enabled", &["Yes"])]).unwrap();
        assert_eq!(plan.params, vec![("enabled".to_string(), "true".to_string())]);

        assert!(expand_filters(&interfaces, &[filter("enabled", &["maybe"])]).is_err());
        assert!(expand_filters(&interfaces, &[filter("enabled", &["true", "false"])]).is_err());
    }

    #[test]
    fn test_custom_field_value_needs_name_and_value() {
        let devices = kind("devices");
        let plan = expand_filters(
            &devices,
            &[
                filter("custom_field", &["owner"]),
                filter("custom_field_value", &["rack_zone=a", "rack_zone = b"]),
            ],
        )
        .unwrap();
        assert!(plan.params.is_empty(), "Custom fields are checked locally");
        assert_eq!(plan.custom_fields, vec!["owner".to_string()]);
        assert_eq!(
            plan.custom_field_values.get("rack_zone"),
            Some(&vec!["a".to_string(), "b".to_string()])
        );

        assert!(expand_filters(&devices, &[filter("custom_field_value", &["zone"])]).is_err());
        assert!(expand_filters(&devices, &[filter("custom_field_value", &["=a"])]).is_err());
    }

    #[test]
    fn test_plan_matches_custom_fields() {
        let plan = expand_filters(
            &kind("devices"),
            &[
                filter("custom_field", &["owner", "contact"]),
                filter("custom_field_value", &["zone=a", "zone=b"]),
            ],
        )
        .unwrap();

        assert!(plan.matches(&json!({"custom_fields": {"owner": "netops", "zone": "b"}})));
        assert!(plan.matches(&json!({"custom_fields": {"contact": "x", "zone": ["a", "c"]}})));
        assert!(!plan.matches(&json!({"custom_fields": {"owner": null, "zone": "a"}})));
        assert!(!plan.matches(&json!({"custom_fields": {"owner": "netops", "zone": "c"}})));
        assert!(!plan.matches(&json!({"id": 1})));
    }

    #[tokio::test]
    async fn test_devices_query_returns_ids_names_and_items() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));
        mock.add(&create_test_device(&mock, 11, "leaf-02", "SN2"));
        mock.add(&create_test_device(&mock, 12, "spine-01", "SN3"));

        let source = QueryDataSource::new(kind("devices"), provider_data(&mock));
        let model = source
            .read_model(config(vec![filter("name__ic", &["LEAF"])]))
            .await
            .unwrap();

        assert_eq!(
            model.ids,
            Value::Value(vec!["10".to_string(), "11".to_string()])
        );
        assert_eq!(
            model.names,
            Value::Value(vec!["leaf-01".to_string(), "leaf-02".to_string()])
        );
        assert_eq!(
            model.items,
            Value::Value(vec![
                QueryItem {
                    id: Value::Value("10".to_string()),
                    name: Value::Value("leaf-01".to_string()),
                },
                QueryItem {
                    id: Value::Value("11".to_string()),
                    name: Value::Value("leaf-02".to_string()),
                },
            ])
        );
        assert!(matches!(model.filter, Value::Value(ref blocks) if blocks.len() == 1));
    }

    #[tokio::test]
    async fn test_prefixes_are_named_by_prefix() {
        let mock = mock();
        mock.add(&create_test_prefix(&mock, 1, "10.0.0.0/24", Some((3, "blue"))));
        mock.add(&create_test_prefix(&mock, 2, "10.0.1.0/24", None));

        let source = QueryDataSource::new(kind("prefixes"), provider_data(&mock));
        let model = source
            .read_model(config(vec![filter("vrf_id", &["3"])]))
            .await
            .unwrap();

        assert_eq!(model.ids, Value::Value(vec!["1".to_string()]));
        assert_eq!(model.names, Value::Value(vec!["10.0.0.0/24".to_string()]));
    }

    #[tokio::test]
    async fn test_custom_field_filters_apply_after_listing() {
        let mock = mock();
        let mut owned = create_test_device(&mock, 10, "leaf-01", "SN1");
        owned.custom_fields = match json!({"owner": "netops"}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        mock.add(&owned);
        mock.add(&create_test_device(&mock, 11, "leaf-02", "SN2"));

        let source = QueryDataSource::new(kind("devices"), provider_data(&mock));
        let model = source
            .read_model(config(vec![
                filter("status", &["active"]),
                filter("custom_field_value", &["owner=netops"]),
            ]))
            .await
            .unwrap();

        assert_eq!(model.ids, Value::Value(vec!["10".to_string()]));
    }

    #[tokio::test]
    async fn test_no_match_is_an_empty_list() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));

        let source = QueryDataSource::new(kind("devices"), provider_data(&mock));
        let model = source
            .read_model(config(vec![filter("serial", &["nope"])]))
            .await
            .unwrap();

        assert_eq!(model.ids, Value::Value(Vec::new()));
        assert_eq!(model.items, Value::Value(Vec::new()));
    }

    #[tokio::test]
    async fn test_invalid_filters_never_reach_netbox() {
        let mock = mock();
        let source = QueryDataSource::new(kind("devices"), provider_data(&mock));

        let err = source
            .read_model(config(vec![filter("rack", &["r1"])]))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::InvalidFilter { .. }), "got {:?}", err);
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let mock = mock();
        mock.fail_endpoint("dcim/devices", 500, "boom");
        let source = QueryDataSource::new(kind("devices"), provider_data(&mock));

        let err = source
            .read_model(config(vec![filter("name", &["leaf-01"])]))
            .await
            .unwrap_err();

        match err {
            LookupError::Upstream { kind, criteria, .. } => {
                assert_eq!(kind, "device");
                assert_eq!(criteria, "filters name 'leaf-01'");
            }
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_query_without_client_is_not_configured() {
        let source = QueryDataSource::new(kind("devices"), ProviderData::default());

        let err = source
            .read_model(config(vec![filter("name", &["leaf-01"])]))
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::NotConfigured));
    }
}
