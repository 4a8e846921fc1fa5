//! Loading `index.json` from a response or from disk.

use super::common::{fixture_index_path, fixture_records};
use siftbox::index::{load_from_response, load_index_file, parse_index_payload};
use siftbox::{LoadError, SearchOptions, SearchWidget};
use std::io::Write;

#[test]
fn test_fixture_loads_with_null_fields() {
    let records = fixture_records();
    assert_eq!(records.len(), 4);
    let about = &records[3];
    assert_eq!(about.title, "About");
    assert_eq!(about.summary, "");
}

#[test]
fn test_missing_fields_default_to_empty() {
    let records = parse_index_payload(r#"[{"title": "Only a title"}]"#).expect("valid payload");
    assert_eq!(records[0].title, "Only a title");
    assert!(records[0].content.is_empty());
    assert!(records[0].permalink.is_empty());
}

#[test]
fn test_http_failure_status() {
    let err = load_from_response(404, "not found").unwrap_err();
    assert!(matches!(err, LoadError::HttpStatus(404)));
    assert_eq!(err.to_string(), "HTTP error! status: 404");
}

#[test]
fn test_success_status_parses_body() {
    let records = load_from_response(200, r#"[{"title": "A", "permalink": "/a"}]"#)
        .expect("valid payload");
    assert_eq!(records.len(), 1);
}

#[test]
fn test_malformed_and_null_payloads() {
    assert!(matches!(
        parse_index_payload("{\"title\": \"not an array\"}"),
        Err(LoadError::Malformed(_))
    ));
    assert!(matches!(parse_index_payload("<html>"), Err(LoadError::Malformed(_))));
    assert!(matches!(parse_index_payload("null"), Err(LoadError::EmptyPayload)));
}

#[test]
fn test_empty_array_is_a_valid_index() {
    let mut widget = SearchWidget::new(SearchOptions::default());
    assert!(widget.finish_load(parse_index_payload("[]")));
    assert!(widget.index().is_some_and(|i| i.is_empty()));
    assert_eq!(widget.on_input("anything").entry_count(), 0);
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[{{"title": "Temp", "content": "written to disk", "permalink": "/t"}}]"#
    )
    .expect("write index");

    let records = load_index_file(file.path()).expect("load temp index");
    assert_eq!(records[0].title, "Temp");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_index_file(dir.path().join("index.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
    assert!(fixture_index_path().exists());
}

#[test]
fn test_failed_load_keeps_widget_interactive() {
    let mut widget = SearchWidget::new(SearchOptions::default());
    assert!(!widget.finish_load(load_from_response(500, "")));
    assert!(widget.on_input("rust").entry_count() == 0);
    assert!(!widget.results_available());
}
