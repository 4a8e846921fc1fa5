//! Resolving site params into search options.

use siftbox::options::{SearchOptions, DEFAULT_KEYS, DEFAULT_LIMIT};
use siftbox::RecordField;

fn weight_of(options: &SearchOptions, field: RecordField) -> Option<f64> {
    options
        .keys
        .iter()
        .find(|k| k.field == field)
        .map(|k| k.weight)
}

#[test]
fn test_defaults() {
    let options = SearchOptions::default();
    assert_eq!(options.limit, DEFAULT_LIMIT);
    assert_eq!(options.distance, 50);
    assert!((options.threshold - 0.1).abs() < 1e-12);
    assert!(options.ignore_location);
    assert!(!options.is_case_sensitive);
    assert!(options.should_sort);
    assert_eq!(options.min_match_char_length, 1);
    assert_eq!(options.keys.len(), DEFAULT_KEYS.len());

    let total: f64 = options.keys.iter().map(|k| k.weight).sum();
    assert!((total - 1.0).abs() < 1e-9);
    let title = weight_of(&options, RecordField::Title).unwrap_or_default();
    let content = weight_of(&options, RecordField::Content).unwrap_or_default();
    assert!((title / content - 2.0).abs() < 1e-9);
}

#[test]
fn test_overrides_are_applied_per_field() {
    let json = r#"{"fuseOpts": {
        "keys": ["title", {"name": "content", "weight": 3}],
        "distance": 100,
        "iscasesensitive": true,
        "limit": 3
    }}"#;
    let options = SearchOptions::from_site_params_json(json).expect("valid JSON");
    assert_eq!(options.distance, 100);
    assert!(options.is_case_sensitive);
    assert_eq!(options.limit, 3);
    assert!((weight_of(&options, RecordField::Title).unwrap_or_default() - 0.25).abs() < 1e-9);
    assert!((weight_of(&options, RecordField::Content).unwrap_or_default() - 0.75).abs() < 1e-9);
    assert_eq!(weight_of(&options, RecordField::File), None);
    // Untouched fields keep their defaults.
    assert!((options.threshold - 0.1).abs() < 1e-12);
    assert!(options.should_sort);
}

#[test]
fn test_wrongly_typed_fields_fall_back() {
    let json = r#"{"fuseOpts": {"threshold": "loose", "limit": -4, "shouldsort": "yes"}}"#;
    let options = SearchOptions::from_site_params_json(json).expect("valid JSON");
    assert_eq!(options, SearchOptions::default());
}

#[test]
fn test_zero_limit_means_default() {
    let options =
        SearchOptions::from_site_params_json(r#"{"fuseOpts": {"limit": 0}}"#).expect("valid JSON");
    assert_eq!(options.limit, DEFAULT_LIMIT);
}

#[test]
fn test_unknown_keys_are_dropped() {
    let json = r#"{"fuseOpts": {"keys": ["author", "title"]}}"#;
    let options = SearchOptions::from_site_params_json(json).expect("valid JSON");
    assert_eq!(options.keys.len(), 1);
    assert_eq!(options.keys[0].field, RecordField::Title);
    assert!((options.keys[0].weight - 1.0).abs() < 1e-12);

    let none_valid = r#"{"fuseOpts": {"keys": ["author"]}}"#;
    let options = SearchOptions::from_site_params_json(none_valid).expect("valid JSON");
    assert_eq!(options.keys, SearchOptions::default().keys);
}

#[test]
fn test_missing_or_null_params() {
    for json in ["null", "{}", r#"{"fuseOpts": null}"#, r#"{"other": 1}"#] {
        let options = SearchOptions::from_site_params_json(json).expect("valid JSON");
        assert_eq!(options, SearchOptions::default(), "{}", json);
    }
}

#[test]
fn test_not_json_is_an_error() {
    assert!(SearchOptions::from_site_params_json("fuseOpts: {}").is_err());
}
