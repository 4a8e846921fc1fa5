// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Content snippets: a short window of text around the first hit.
//!
//! Offsets and lengths count characters. Matching folds case one character at
//! a time, so an offset found in the folded text is the same offset in the
//! original and the excerpt keeps the page's own capitalisation.
//!
//! When the term does not occur verbatim (a fuzzy hit, or a match in another
//! field), the snippet is simply the start of the text. That branch never gets
//! a leading ellipsis, even though it can be cut mid-sentence at the end.

use crate::util::normalize::fold_chars;

/// Characters of context kept on each side of the hit.
pub const CONTEXT_RANGE: usize = 20;

/// Length of the fallback excerpt when the term is not found.
pub const FALLBACK_LENGTH: usize = CONTEXT_RANGE * 3 / 2;

pub const ELLIPSIS: &str = "...";

/// Excerpt of `text` centered on the first case-insensitive occurrence of
/// `term`. Empty if either input is empty.
pub fn extract_snippet(text: &str, term: &str) -> String {
    if text.is_empty() || term.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let needle = fold_chars(term);

    let Some(hit) = find_folded(&fold_chars(text), &needle) else {
        let mut snippet: String = chars.iter().take(FALLBACK_LENGTH).collect();
        snippet.push_str(ELLIPSIS);
        return snippet;
    };

    let start = hit.saturating_sub(CONTEXT_RANGE);
    let end = (hit + needle.len() + CONTEXT_RANGE).min(chars.len());

    let mut snippet = String::new();
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.extend(&chars[start..end]);
    if end < chars.len() {
        snippet.push_str(ELLIPSIS);
    }
    snippet
}

fn find_folded(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
