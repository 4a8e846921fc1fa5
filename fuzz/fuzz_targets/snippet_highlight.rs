// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippets and highlighting on arbitrary Unicode.
//!
//! Emoji, combining marks and characters whose lowercase form is longer than
//! the original must not break char offsets or lose text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siftbox::highlight::highlight;
use siftbox::snippet::extract_snippet;

#[derive(Debug, Arbitrary)]
struct SnippetInput {
    text: String,
    term: String,
}

fuzz_target!(|input: SnippetInput| {
    let snippet = extract_snippet(&input.text, &input.term);
    if input.text.is_empty() || input.term.is_empty() {
        assert!(snippet.is_empty());
        return;
    }

    let segments = highlight(&snippet, &input.term);
    let joined: String = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, snippet);
});
