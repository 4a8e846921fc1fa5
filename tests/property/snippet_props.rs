//! Snippet and highlight invariants.

use proptest::prelude::*;
use siftbox::highlight::highlight;
use siftbox::snippet::{extract_snippet, CONTEXT_RANGE, ELLIPSIS, FALLBACK_LENGTH};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Text drawn from the first half of the alphabet (plus spaces and capitals).
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-mA-M ]{0,120}").unwrap()
}

/// Terms drawn from the second half, so they never occur in generated text.
fn absent_term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[n-z]{1,8}").unwrap()
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-m]{1,8}").unwrap()
}

proptest! {
    /// A term inserted into the text is always inside the snippet, and the
    /// snippet never exceeds the term plus context on both sides.
    #[test]
    fn prop_snippet_contains_occurrence(
        prefix in text_strategy(),
        term in term_strategy(),
        suffix in text_strategy(),
    ) {
        let text = format!("{}{}{}", prefix, term, suffix);
        let snippet = extract_snippet(&text, &term);
        prop_assert!(snippet.to_lowercase().contains(&term.to_lowercase()));

        let max = term.chars().count() + 2 * CONTEXT_RANGE + 2 * ELLIPSIS.len();
        prop_assert!(snippet.chars().count() <= max);
    }

    #[test]
    fn prop_empty_inputs_give_empty_snippet(text in text_strategy(), term in term_strategy()) {
        prop_assert_eq!(extract_snippet(&text, ""), "");
        prop_assert_eq!(extract_snippet("", &term), "");
    }

    #[test]
    fn prop_absent_term_gives_prefix(text in text_strategy(), term in absent_term_strategy()) {
        prop_assume!(!text.is_empty());
        let expected: String = text.chars().take(FALLBACK_LENGTH).collect::<String>() + ELLIPSIS;
        prop_assert_eq!(extract_snippet(&text, &term), expected);
    }

    /// Highlighting only splits text; joining the segments gives it back.
    #[test]
    fn prop_highlight_is_lossless(text in text_strategy(), term in "[a-m ]{0,12}") {
        let segments = highlight(&text, &term);
        let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(joined, text);
        prop_assert!(segments.iter().all(|s| !s.text.is_empty()));
    }
}
