//! Ranking, limit and navigation invariants.

use super::common::make_record;
use proptest::prelude::*;
use siftbox::options::SearchOptions;
use siftbox::{Focus, Key, SearchIndex, SearchWidget};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Generate random word-like strings.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}").unwrap()
}

/// Generate random document text (multiple words).
fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..12).prop_map(|words| words.join(" "))
}

/// Generate a corpus of (title, content) pairs.
fn corpus_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((document_strategy(), document_strategy()), 1..20)
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::ArrowDown),
        Just(Key::ArrowUp),
        Just(Key::ArrowRight),
        Just(Key::Enter),
        Just(Key::Other),
    ]
}

fn build(corpus: &[(String, String)], limit: usize) -> SearchIndex {
    let records = corpus
        .iter()
        .enumerate()
        .map(|(i, (title, content))| make_record(title, content, &format!("/{}", i)))
        .collect();
    let options = SearchOptions {
        limit,
        ..SearchOptions::default()
    };
    SearchIndex::build(records, options)
}

proptest! {
    #[test]
    fn prop_results_sorted_and_limited(
        corpus in corpus_strategy(),
        query in word_strategy(),
        limit in 1usize..10,
    ) {
        let index = build(&corpus, limit);
        let hits = index.search(&query);
        prop_assert!(hits.len() <= limit);
        for pair in hits.windows(2) {
            prop_assert!(
                pair[0].score < pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].position < pair[1].position)
            );
        }
        for hit in &hits {
            prop_assert!((0.0..=1.0).contains(&hit.score));
        }
    }

    /// Any word taken from a title finds that record when the limit allows it.
    #[test]
    fn prop_title_word_is_found(corpus in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let target = pick.index(corpus.len());
        let word = corpus[target].0.split(' ').next().unwrap_or_default().to_string();
        let index = build(&corpus, corpus.len());
        let hits = index.search(&word);
        prop_assert!(hits.iter().any(|h| h.position == target));
    }

    /// Whatever keys are pressed, focus stays on the input or a rendered entry
    /// and the marker, when set, is on the focused element.
    #[test]
    fn prop_focus_stays_in_range(
        corpus in corpus_strategy(),
        query in word_strategy(),
        keys in prop::collection::vec(key_strategy(), 0..30),
    ) {
        let records = corpus
            .iter()
            .enumerate()
            .map(|(i, (title, content))| make_record(title, content, &format!("/{}", i)))
            .collect();
        let mut widget = SearchWidget::new(SearchOptions::default());
        widget.finish_load(Ok(records));
        widget.on_input(&query);
        let count = widget.view().entry_count();

        for key in keys {
            widget.on_key(key, true);
            let navigator = widget.navigator();
            if let Focus::Result(i) = navigator.focus() {
                prop_assert!(i < count);
            }
            if let Some(marker) = navigator.marker() {
                prop_assert_eq!(marker, navigator.focus());
            }
        }
    }
}
