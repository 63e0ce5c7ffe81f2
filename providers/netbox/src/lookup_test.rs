//! Unit tests for the lookup resolver

#[cfg(test)]
mod tests {
    use crate::error::LookupError;
    use crate::lookup::*;
    use crate::test_utils::*;
    use netbox_client::{Device, Interface, NetBoxObject, PaginatedResponse, Prefix, Site, Vlan};
    use tf_provider::value::Value;

    fn text(s: &str) -> Value<String> {
        Value::Value(s.to_string())
    }

    fn site_lookup(id: Value<String>, slug: Value<String>, name: Value<String>) -> Lookup {
        Lookup::new(Site::KIND)
            .id("id", &id)
            .key("slug", "slug", &slug)
            .key("name", "name", &name)
    }

    #[tokio::test]
    async fn test_no_key_set_is_missing_identifier() {
        let mock = mock();
        let lookup = site_lookup(Value::Null, Value::Null, text(""));

        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        match &err {
            LookupError::MissingIdentifier { kind, attributes } => {
                assert_eq!(*kind, "site");
                assert_eq!(attributes, "'id', 'slug', or 'name'");
            }
            other => panic!("expected MissingIdentifier, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Either 'id', 'slug', or 'name' must be specified to identify the site."
        );
        assert_eq!(mock.request_count(), 0, "No request without a key");
    }

    #[tokio::test]
    async fn test_non_numeric_id_fails_without_request() {
        let mock = mock();
        let lookup = site_lookup(text("abc"), Value::Null, text("DC One"));

        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        assert!(
            matches!(err, LookupError::InvalidIdentifier { attribute: "id", ref value, .. } if value == "abc"),
            "got {:?}",
            err
        );
        assert_eq!(err.summary(), "Invalid site ID");
        assert_eq!(mock.request_count(), 0, "A bad ID never reaches NetBox");
    }

    #[test]
    fn test_parse_id_bounds() {
        assert_eq!(parse_id("site", "id", "0").unwrap(), 0);
        assert_eq!(parse_id("site", "id", "2147483647").unwrap(), 2_147_483_647);

        let negative = parse_id("site", "id", "-1").unwrap_err();
        assert!(negative.to_string().contains("cannot be negative"), "{}", negative);

        let overflow = parse_id("site", "id", "2147483648").unwrap_err();
        assert!(overflow.to_string().contains("32-bit"), "{}", overflow);

        let decimal = parse_id("site", "id", "1.5").unwrap_err();
        assert!(decimal.to_string().contains("whole number"), "{}", decimal);
    }

    #[test]
    fn test_validate_checks_set_ids_only() {
        assert!(site_lookup(text("12"), Value::Null, Value::Null).validate().is_ok());
        assert!(site_lookup(Value::Unknown, Value::Null, Value::Null).validate().is_ok());
        assert!(site_lookup(Value::Null, Value::Null, text("x")).validate().is_ok());
        assert!(site_lookup(text("twelve"), Value::Null, Value::Null).validate().is_err());
    }

    #[tokio::test]
    async fn test_id_takes_precedence_over_other_keys() {
        let mock = mock();
        mock.add(&create_test_site(&mock, 1, "DC One", "dc-one"));
        mock.add(&create_test_site(&mock, 2, "DC Two", "dc-two"));

        let lookup = site_lookup(text("1"), text("dc-two"), text("DC Two"));
        let site: Site = resolve(&mock, &lookup).await.unwrap();

        assert_eq!(site.id, 1);
        assert_eq!(mock.requests(), vec!["/api/dcim/sites/1/".to_string()]);
    }

    #[tokio::test]
    async fn test_slug_takes_precedence_over_name() {
        let mock = mock();
        mock.add(&create_test_site(&mock, 1, "DC One", "dc-one"));
        mock.add(&create_test_site(&mock, 2, "DC Two", "dc-two"));

        let lookup = site_lookup(Value::Null, text("dc-two"), text("DC One"));
        let site: Site = resolve(&mock, &lookup).await.unwrap();

        assert_eq!(site.id, 2);
        assert_eq!(mock.requests(), vec!["/api/dcim/sites/?slug=dc-two&limit=2".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_value_is_not_set() {
        let mock = mock();
        mock.add(&create_test_site(&mock, 5, "DC Five", "dc-five"));

        let lookup = site_lookup(Value::Unknown, Value::Null, text("DC Five"));
        let site: Site = resolve(&mock, &lookup).await.unwrap();

        assert_eq!(site.id, 5);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let mock = mock();
        let lookup = site_lookup(text("99"), Value::Null, Value::Null);

        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        assert!(matches!(err, LookupError::NotFound { .. }), "got {:?}", err);
        assert_eq!(err.to_string(), "No site found with ID 99.");
        assert_eq!(err.summary(), "Site not found");
    }

    #[tokio::test]
    async fn test_name_without_match_names_the_criteria() {
        let mock = mock();
        mock.add(&create_test_site(&mock, 1, "DC One", "dc-one"));

        let lookup = site_lookup(Value::Null, Value::Null, text("nowhere"));
        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        assert!(matches!(err, LookupError::NotFound { .. }));
        assert!(err.to_string().contains("name 'nowhere'"), "{}", err);
    }

    #[tokio::test]
    async fn test_duplicate_names_are_ambiguous() {
        let mock = mock();
        mock.add(&create_test_site(&mock, 1, "Edge", "edge-a"));
        mock.add(&create_test_site(&mock, 2, "Edge", "edge-b"));

        let lookup = site_lookup(Value::Null, Value::Null, text("Edge"));
        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        match &err {
            LookupError::AmbiguousResult { count, hint, .. } => {
                assert_eq!(*count, 2);
                assert_eq!(hint, "'id' or 'slug'");
            }
            other => panic!("expected AmbiguousResult, got {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Found 2 site records with name 'Edge'. Use 'id' or 'slug' for a unique lookup."
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_keeps_status() {
        let mock = mock();
        mock.fail_endpoint("dcim/sites", 500, "boom");

        let lookup = site_lookup(Value::Null, text("dc-one"), Value::Null);
        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        match &err {
            LookupError::Upstream { source, .. } => assert_eq!(source.status(), Some(500)),
            other => panic!("expected Upstream, got {:?}", other),
        }
        assert!(err.to_string().contains("boom"), "{}", err);
    }

    #[tokio::test]
    async fn test_id_lookup_upstream_failure_is_not_not_found() {
        let mock = mock();
        mock.fail_endpoint("dcim/sites", 503, "maintenance");

        let lookup = site_lookup(text("1"), Value::Null, Value::Null);
        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        assert!(matches!(err, LookupError::Upstream { .. }), "got {:?}", err);
    }

    fn interface_lookup(device: Value<String>, name: Value<String>) -> Lookup {
        Lookup::new(Interface::KIND).id("id", &Value::<String>::Null).composite(vec![
            KeyPart::required("device", "device_id", &device)
                .reference(Reference::by_name(Device::ENDPOINT, Device::KIND)),
            KeyPart::required("name", "name", &name),
        ])
    }

    #[tokio::test]
    async fn test_reference_by_name_resolves_parent_first() {
        let mock = mock();
        mock.add(&create_test_device(&mock, 10, "leaf-01", "SN1"));
        mock.add(&create_test_device(&mock, 11, "leaf-02", "SN2"));
        mock.add(&create_test_interface(&mock, 100, (10, "leaf-01"), "eth0"));
        mock.add(&create_test_interface(&mock, 101, (11, "leaf-02"), "eth0"));

        let lookup = interface_lookup(text("leaf-02"), text("eth0"));
        let interface: Interface = resolve(&mock, &lookup).await.unwrap();

        assert_eq!(interface.id, 101);
        assert_eq!(
            mock.requests(),
            vec![
                "/api/dcim/devices/?name=leaf-02&limit=2".to_string(),
                "/api/dcim/interfaces/?device_id=11&name=eth0&limit=2".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_numeric_reference_skips_parent_lookup() {
        let mock = mock();
        mock.add(&create_test_interface(&mock, 100, (10, "leaf-01"), "eth0"));

        let lookup = interface_lookup(text("10"), text("eth0"));
        let interface: Interface = resolve(&mock, &lookup).await.unwrap();

        assert_eq!(interface.id, 100);
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_parent_is_not_found() {
        let mock = mock();
        let lookup = interface_lookup(text("ghost"), text("eth0"));

        let err = resolve::<Interface>(&mock, &lookup).await.unwrap_err();

        match err {
            LookupError::NotFound { kind, criteria } => {
                assert_eq!(kind, "device");
                assert_eq!(criteria, "name 'ghost'");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_composite_key_needs_every_required_part() {
        let mock = mock();
        let lookup = interface_lookup(text("leaf-01"), Value::Null);

        let err = resolve::<Interface>(&mock, &lookup).await.unwrap_err();

        assert!(
            err.to_string().contains("'id' or 'device' and 'name'"),
            "{}",
            err
        );
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_optional_qualifier_narrows_the_match() {
        let mock = mock();
        mock.add(&create_test_prefix(&mock, 1, "10.0.0.0/24", None));
        mock.add(&create_test_prefix(&mock, 2, "10.0.0.0/24", Some((3, "blue"))));

        let prefix = text("10.0.0.0/24");
        let unqualified = Lookup::new(Prefix::KIND)
            .composite(vec![KeyPart::required("prefix", "prefix", &prefix)]);
        let err = resolve::<Prefix>(&mock, &unqualified).await.unwrap_err();
        assert!(matches!(err, LookupError::AmbiguousResult { count: 2, .. }));

        let vrf_id = Value::Value(3_i64);
        let qualified = Lookup::new(Prefix::KIND).composite(vec![
            KeyPart::required("prefix", "prefix", &prefix),
            KeyPart::optional("vrf_id", "vrf_id", &vrf_id),
        ]);
        let found: Prefix = resolve(&mock, &qualified).await.unwrap();
        assert_eq!(found.id, 2);
    }

    #[tokio::test]
    async fn test_numeric_key_values_are_rendered_as_filters() {
        let mock = mock();
        mock.add(&create_test_vlan(&mock, 7, 100, "servers"));

        let vid = Value::Value(100_i64);
        let lookup = Lookup::new(Vlan::KIND).key("vid", "vid", &vid);
        let vlan: Vlan = resolve(&mock, &lookup).await.unwrap();

        assert_eq!(vlan.id, 7);
        assert_eq!(mock.requests(), vec!["/api/ipam/vlans/?vid=100&limit=2".to_string()]);
    }

    fn page<T>(count: u64, results: Vec<T>) -> PaginatedResponse<T> {
        PaginatedResponse {
            count,
            next: None,
            previous: None,
            results,
        }
    }

    #[test]
    fn test_expect_single() {
        assert_eq!(
            expect_single(page(1, vec![1]), "site", "x".to_string(), "h".to_string()).unwrap(),
            1
        );
        assert!(matches!(
            expect_single(page(0, Vec::<u8>::new()), "site", "x".to_string(), "h".to_string()),
            Err(LookupError::NotFound { .. })
        ));
        assert!(matches!(
            expect_single(page(120, vec![1, 2]), "site", "x".to_string(), "h".to_string()),
            Err(LookupError::AmbiguousResult { count: 120, .. })
        ));
    }

    #[tokio::test]
    async fn test_ambiguous_count_covers_every_page() {
        let mock = mock();
        for id in 1..=7 {
            mock.add(&create_test_site(&mock, id, "Edge", &format!("edge-{id}")));
        }
        mock.set_page_size(3);

        let lookup = site_lookup(Value::Null, Value::Null, text("Edge"));
        let err = resolve::<Site>(&mock, &lookup).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Found 7 site records with name 'Edge'. Use 'id' or 'slug' for a unique lookup."
        );
        assert_eq!(mock.requests(), vec!["/api/dcim/sites/?name=Edge&limit=2".to_string()]);
    }
}
