//! Document loading and saving tests

use croissant_sdk::model::{
    LoadError, load_from_path, load_from_str, load_from_value, save_to_path, to_json_value,
};
use croissant_sdk::models::{Key, TypeUnion, vocab};
use croissant_sdk::validation::{ValidationConfig, validate_file};
use serde_json::json;
use std::io::Write;

mod shape_tests {
    use super::*;

    fn with_record_set(record_set: serde_json::Value) -> serde_json::Value {
        json!({"@type": "sc:Dataset", "name": "d", "recordSet": [record_set]})
    }

    #[test]
    fn test_type_union_scalar_or_list() {
        let doc = with_record_set(json!({
            "@type": "cr:RecordSet",
            "name": "rs",
            "field": [
                {"@type": "cr:Field", "name": "a", "dataType": "sc:Text"},
                {"@type": "cr:Field", "name": "b", "dataType": ["sc:Text"]},
                {"@type": "cr:Field", "name": "c", "dataType": ["sc:ImageObject", "cr:Label"]}
            ]
        }));
        let dataset = load_from_value(doc).unwrap();
        let fields = &dataset.record_sets[0].fields;
        assert_eq!(fields[0].data_type, fields[1].data_type);
        assert_eq!(
            fields[2].data_type,
            TypeUnion::from_tokens(["sc:ImageObject", vocab::data_types::LABEL])
        );
    }

    #[test]
    fn test_key_object_or_list() {
        let single = load_from_value(with_record_set(json!({
            "@type": "cr:RecordSet", "name": "rs", "key": {"@id": "rs/a"}
        })))
        .unwrap();
        assert_eq!(single.record_sets[0].key, Some(Key::single("rs/a")));

        let composite = load_from_value(with_record_set(json!({
            "@type": "cr:RecordSet", "name": "rs", "key": [{"@id": "rs/a"}, {"@id": "rs/b"}]
        })))
        .unwrap();
        let key = composite.record_sets[0].key.as_ref().unwrap();
        assert!(key.is_composite());
        assert_eq!(key.refs(), ["rs/a", "rs/b"]);
    }

    #[test]
    fn test_malformed_shapes_fail_to_load() {
        for record_set in [
            json!({"@type": "cr:RecordSet", "name": "rs", "key": "rs/a"}),
            json!({"@type": "cr:RecordSet", "name": "rs", "key": []}),
            json!({"@type": "cr:RecordSet", "name": "rs", "field": [
                {"@type": "cr:Field", "name": "a", "dataType": 7}
            ]}),
            json!({"@type": "cr:RecordSet", "name": "rs", "field": [
                {"@type": "cr:Field", "name": "a", "dataType": {"@id": "sc:Text"}}
            ]}),
        ] {
            let result = load_from_value(with_record_set(record_set.clone()));
            assert!(
                matches!(result, Err(LoadError::Json(_))),
                "expected a load failure for {}",
                record_set
            );
        }
    }

    #[test]
    fn test_informational_properties_accept_any_shape() {
        let doc = json!({
            "@type": "sc:Dataset",
            "name": "d",
            "version": 1,
            "license": ["https://creativecommons.org/licenses/by/4.0/", "MIT"],
            "url": {"@id": "https://example.org/d"},
            "description": {"@language": "en", "@value": "A dataset"}
        });
        let dataset = load_from_value(doc).unwrap();
        assert_eq!(dataset.version, Some(json!(1)));
        assert_eq!(dataset.license.as_ref().and_then(|l| l.as_array()).map(Vec::len), Some(2));

        let value = to_json_value(&dataset).unwrap();
        assert_eq!(value["version"], json!(1));
        assert_eq!(value["description"]["@value"], json!("A dataset"));
    }

    #[test]
    fn test_saving_collapses_singletons() {
        let doc = with_record_set(json!({
            "@type": "cr:RecordSet",
            "name": "rs",
            "key": [{"@id": "rs/a"}],
            "field": [{"@type": "cr:Field", "name": "a", "dataType": ["sc:Text"]}]
        }));
        let value = to_json_value(&load_from_value(doc).unwrap()).unwrap();
        assert_eq!(value["recordSet"][0]["key"], json!({"@id": "rs/a"}));
        assert_eq!(value["recordSet"][0]["field"][0]["dataType"], json!("sc:Text"));
        assert_eq!(value["recordSet"][0]["field"][0]["@type"], json!("cr:Field"));
    }
}

mod file_tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let original = load_from_str(
            r#"{
                "@type": "sc:Dataset",
                "name": "iris",
                "distribution": [{
                    "@type": "cr:FileObject",
                    "@id": "iris.csv",
                    "name": "iris.csv",
                    "contentUrl": "iris.csv",
                    "encodingFormat": "text/csv"
                }]
            }"#,
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metadata.json");
        save_to_path(&original, &path).unwrap();

        assert_eq!(load_from_path(&path).unwrap(), original);
    }

    #[test]
    fn test_validate_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json!({"@type": "sc:Dataset", "name": ""})).unwrap();

        let issues = validate_file(file.path(), &ValidationConfig::default()).unwrap();
        assert!(issues.has_errors());
        assert!(issues.has_warnings());
    }

    #[test]
    fn test_validate_file_with_numeric_version() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            json!({
                "@type": "sc:Dataset",
                "name": "d",
                "conformsTo": "http://mlcommons.org/croissant/1.0",
                "version": 2,
                "license": ["MIT"]
            })
        )
        .unwrap();

        let issues = validate_file(file.path(), &ValidationConfig::default()).unwrap();
        assert!(issues.is_empty(), "{}", issues.report());
    }

    #[test]
    fn test_validate_file_surfaces_load_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = validate_file(file.path(), &ValidationConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidDocument(_)));
    }
}
