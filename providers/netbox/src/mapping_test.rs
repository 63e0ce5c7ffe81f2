//! Unit tests for the field mapper

#[cfg(test)]
mod tests {
    use crate::mapping::*;
    use netbox_client::{ChoiceField, CustomFields, NestedRef, NestedTag};
    use serde_json::json;
    use tf_provider::value::Value;

    fn tag(name: &str, slug: &str) -> NestedTag {
        NestedTag {
            id: 1,
            name: name.to_string(),
            slug: slug.to_string(),
            ..Default::default()
        }
    }

    fn fields(value: serde_json::Value) -> CustomFields {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("custom fields must be an object, got {}", other),
        }
    }

    #[test]
    fn test_absent_and_empty_strings_are_both_null() {
        assert_eq!(string_value(None), Value::Null);
        assert_eq!(string_value(Some("")), Value::Null);
        assert_eq!(string_value(Some("x")), Value::Value("x".to_string()));
    }

    #[test]
    fn test_preserve_empty_keeps_blank_strings() {
        assert_eq!(string_preserve_empty(Some("")), Value::Value(String::new()));
        assert_eq!(string_preserve_empty(None), Value::Null);
    }

    #[test]
    fn test_numbers_and_bools_keep_zero_and_false() {
        assert_eq!(int_value(Some(0)), Value::Value(0));
        assert_eq!(int_value(None), Value::Null);
        assert_eq!(float_value(Some(0.0)), Value::Value(0.0));
        assert_eq!(bool_value(Some(false)), Value::Value(false));
        assert_eq!(bool_value(None), Value::Null);
    }

    #[test]
    fn test_id_string() {
        assert_eq!(id_string(42), Value::Value("42".to_string()));
    }

    #[test]
    fn test_choices() {
        let status = ChoiceField::new("active", "Active");
        assert_eq!(choice_value(Some(&status)), Value::Value("active".to_string()));
        assert_eq!(choice_value(None), Value::Null);

        let width = ChoiceField {
            value: json!(19),
            label: Some("19 inches".to_string()),
        };
        assert_eq!(choice_number(Some(&width)), Value::Value(19));
        assert_eq!(choice_value(Some(&width)), Value::Value("19".to_string()));
    }

    #[test]
    fn test_references() {
        let site = NestedRef {
            id: 3,
            name: Some("DC One".to_string()),
            slug: Some("dc-one".to_string()),
            display: Some("DC One".to_string()),
            ..Default::default()
        };
        assert_eq!(reference_name(Some(&site)), Value::Value("DC One".to_string()));
        assert_eq!(reference_slug(Some(&site)), Value::Value("dc-one".to_string()));
        assert_eq!(reference_display(Some(&site)), Value::Value("DC One".to_string()));
        assert_eq!(reference_id(Some(&site)), Value::Value(3));
        assert_eq!(reference_id_string(Some(&site)), Value::Value("3".to_string()));

        assert_eq!(reference_name(None), Value::Null);
        assert_eq!(reference_id(None), Value::Null);
        assert_eq!(reference_id_string(None), Value::Null);

        let unnamed = NestedRef {
            id: 4,
            ..Default::default()
        };
        assert_eq!(reference_name(Some(&unnamed)), Value::Null, "Brief objects may lack a name");
    }

    #[test]
    fn test_reference_lists() {
        let targets = vec![
            NestedRef {
                id: 1,
                name: Some("65000:100".to_string()),
                ..Default::default()
            },
            NestedRef {
                id: 2,
                display: Some("65000:200".to_string()),
                ..Default::default()
            },
        ];
        assert_eq!(
            reference_names(&targets),
            Value::Value(vec!["65000:100".to_string(), "65000:200".to_string()]),
            "Display text stands in for a missing name"
        );
        assert_eq!(reference_ids(&targets), Value::Value(vec![1, 2]));
        assert_eq!(reference_names(&[]), Value::Null);
        assert_eq!(reference_ids(&[]), Value::Null);
        assert_eq!(list_value(Vec::<i64>::new()), Value::Null);
    }

    #[test]
    fn test_json_text() {
        assert_eq!(json_text(None), Value::Null);
        assert_eq!(json_text(Some(&json!(null))), Value::Null);
        assert_eq!(json_text(Some(&json!("plain"))), Value::Value("plain".to_string()));
        assert_eq!(json_text(Some(&json!(""))), Value::Null);
        assert_eq!(json_text(Some(&json!({"a": [1, 2]}))), Value::Value(r#"{"a":[1,2]}"#.to_string()));
        assert_eq!(json_text(Some(&json!(true))), Value::Value("true".to_string()));
    }

    #[test]
    fn test_tags_are_sorted_and_deduplicated() {
        assert_eq!(tags_value(&[]), Value::Null);

        let tags = tags_value(&[tag("prod", "prod"), tag("edge", "edge"), tag("prod", "prod")]);
        assert_eq!(
            tags,
            Value::Value(vec![
                TagModel {
                    name: "edge".to_string(),
                    slug: "edge".to_string()
                },
                TagModel {
                    name: "prod".to_string(),
                    slug: "prod".to_string()
                },
            ])
        );
    }

    #[test]
    fn test_tag_order_does_not_matter() {
        let a = tags_value(&[tag("a", "a"), tag("b", "b")]);
        let b = tags_value(&[tag("b", "b"), tag("a", "a")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_field_type_inference() {
        let cases = [
            (json!(true), "boolean", "true"),
            (json!(42), "integer", "42"),
            (json!(3.0), "integer", "3"),
            (json!(2.5), "decimal", "2.5"),
            (json!(0.125), "decimal", "0.125"),
            (json!("2024-01-31"), "date", "2024-01-31"),
            (json!("https://example.com"), "url", "https://example.com"),
            (json!("line one\nline two"), "longtext", "line one\nline two"),
            (json!("rack A"), "text", "rack A"),
            (json!(["a", "b"]), "multiselect", "a,b"),
            (json!({"id": 1}), "json", "{\"id\":1}"),
            (json!([1, 2]), "json", "[1,2]"),
        ];

        for (value, field_type, rendered) in cases {
            let field = infer_custom_field("cf", &value)
                .unwrap_or_else(|| panic!("{} should produce a field", value));
            assert_eq!(field.field_type, field_type, "type of {}", value);
            assert_eq!(field.value, rendered, "value of {}", value);
        }
    }

    #[test]
    fn test_long_text_threshold() {
        let short = "x".repeat(100);
        let long = "x".repeat(101);
        assert_eq!(infer_custom_field("cf", &json!(short)).unwrap().field_type, "text");
        assert_eq!(infer_custom_field("cf", &json!(long)).unwrap().field_type, "longtext");
    }

    #[test]
    fn test_unset_custom_fields_are_skipped() {
        assert_eq!(infer_custom_field("cf", &json!(null)), None);
        assert_eq!(infer_custom_field("cf", &json!([])), None);

        let all_unset = fields(json!({"owner": null, "labels": []}));
        assert_eq!(custom_fields_value(&all_unset), Value::Null);
        assert_eq!(custom_fields_value(&CustomFields::new()), Value::Null);
    }

    #[test]
    fn test_custom_fields_are_sorted_by_name() {
        let map = fields(json!({"zone": "b", "owner": "netops", "unset": null}));

        let Value::Value(models) = custom_fields_value(&map) else {
            panic!("expected custom fields");
        };
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["owner", "zone"]);
    }
}
