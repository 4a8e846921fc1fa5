//! Shared test utilities and fixtures.

#![allow(dead_code)]

use siftbox::index::load_index_file;
use siftbox::{IndexRecord, SearchIndex, SearchOptions, SearchWidget};
use std::path::PathBuf;

// Re-export canonical test utilities from siftbox::testing
pub use siftbox::testing::{make_full_record, make_record, RecordingRenderer};

// ============================================================================
// FIXTURE PATHS
// ============================================================================

/// Small blog index used across integration tests.
pub fn fixture_index_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/index.json")
}

/// Site params file overriding keys, threshold, limit and score output.
pub fn fixture_params_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/params.json")
}

// ============================================================================
// BUILDERS
// ============================================================================

pub fn fixture_records() -> Vec<IndexRecord> {
    load_index_file(fixture_index_path()).expect("fixture index should load")
}

pub fn fixture_index() -> SearchIndex {
    SearchIndex::build(fixture_records(), SearchOptions::default())
}

/// Widget with the fixture index installed and default options.
pub fn loaded_widget() -> SearchWidget {
    let mut widget = SearchWidget::new(SearchOptions::default());
    assert!(widget.finish_load(Ok(fixture_records())));
    widget
}

/// Widget over the single record used throughout the examples in the docs.
pub fn alpha_widget() -> SearchWidget {
    let mut widget = SearchWidget::new(SearchOptions::default());
    assert!(widget.finish_load(Ok(vec![make_record(
        "Alpha Page",
        "the quick brown fox",
        "/a"
    )])));
    widget
}

/// Widget with `count` records that all match the query "common".
pub fn widget_with_results(count: usize) -> SearchWidget {
    let records = (0..count)
        .map(|i| make_record(&format!("Page {}", i), "common words here", &format!("/{}", i)))
        .collect();
    let mut widget = SearchWidget::new(SearchOptions::default());
    widget.finish_load(Ok(records));
    widget.on_input("common");
    assert_eq!(widget.view().entry_count(), count.min(8));
    widget
}
