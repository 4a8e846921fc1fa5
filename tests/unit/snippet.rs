//! Snippet extraction and term highlighting.

use siftbox::highlight::{highlight, mark_count, Segment};
use siftbox::snippet::{extract_snippet, CONTEXT_RANGE, ELLIPSIS};

#[test]
fn test_hit_at_start_has_trailing_ellipsis_only() {
    let text = format!("fox {}", "x".repeat(60));
    let snippet = extract_snippet(&text, "fox");
    assert!(snippet.starts_with("fox "));
    assert!(snippet.ends_with(ELLIPSIS));
    assert_eq!(snippet.chars().count(), 3 + CONTEXT_RANGE + ELLIPSIS.len());
}

#[test]
fn test_hit_at_end_has_leading_ellipsis_only() {
    let text = format!("{} fox", "x".repeat(60));
    let snippet = extract_snippet(&text, "fox");
    assert!(snippet.starts_with(ELLIPSIS));
    assert!(snippet.ends_with(" fox"));
}

#[test]
fn test_first_occurrence_wins() {
    let text = format!("fox{}FOX", "-".repeat(50));
    let snippet = extract_snippet(&text, "fox");
    assert!(snippet.starts_with("fox"));
    assert!(!snippet.contains("FOX"));
}

#[test]
fn test_fallback_for_fuzzy_hits() {
    let text = "Ownership is the feature that makes Rust memory safe";
    assert_eq!(
        extract_snippet(text, "garbage"),
        "Ownership is the feature that ..."
    );
}

#[test]
fn test_term_with_spaces_is_one_needle() {
    let snippet = extract_snippet("a quick brown fox", "brown fox");
    assert_eq!(snippet, "a quick brown fox");
    assert_eq!(extract_snippet("brown and fox", "brown fox"), "brown and fox...");
}

#[test]
fn test_highlight_preserves_text_and_case() {
    let segments = highlight("Rust makes RUST safe", "rust");
    let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, "Rust makes RUST safe");
    assert_eq!(mark_count(&segments), 2);
    assert_eq!(segments[0], Segment::marked("Rust"));
}

#[test]
fn test_highlight_inside_ellipsis_snippet() {
    let text = format!("{}needle{}", "a".repeat(30), "b".repeat(30));
    let snippet = extract_snippet(&text, "needle");
    let segments = highlight(&snippet, "needle");
    assert_eq!(mark_count(&segments), 1);
    assert!(segments.iter().any(|s| s.marked && s.text == "needle"));
}
