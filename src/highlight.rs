// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term highlighting inside rendered snippets.
//!
//! The search term is split on whitespace and every word is highlighted on its
//! own, anywhere it occurs (not only on word boundaries), ignoring case. When
//! two words could start at the same place the longer one wins, and marks
//! never overlap. The output is a list of segments; concatenating their text
//! gives back the input unchanged.

use crate::util::normalize::{fold_chars, fold_chars_to_base};
use serde::Serialize;

/// A run of snippet text, highlighted or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub marked: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marked: false,
        }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marked: true,
        }
    }
}

/// Split `text` into plain and marked segments for every word of `term`.
pub fn highlight(text: &str, term: &str) -> Vec<Segment> {
    mark_words(text, term, fold_chars)
}

/// Like [`highlight`], but "cafe" also marks "Café".
pub fn highlight_ignoring_diacritics(text: &str, term: &str) -> Vec<Segment> {
    mark_words(text, term, fold_chars_to_base)
}

fn mark_words(text: &str, term: &str, fold: fn(&str) -> Vec<char>) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut words: Vec<Vec<char>> = term
        .split_whitespace()
        .map(fold)
        .filter(|word| !word.is_empty())
        .collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.dedup();
    if words.is_empty() {
        return vec![Segment::plain(text)];
    }

    let original: Vec<char> = text.chars().collect();
    let folded = fold(text);

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i < folded.len() {
        let hit = words
            .iter()
            .find(|word| folded[i..].starts_with(word))
            .map(|word| word.len());
        match hit {
            Some(len) => {
                if plain_start < i {
                    segments.push(Segment::plain(collect(&original[plain_start..i])));
                }
                segments.push(Segment::marked(collect(&original[i..i + len])));
                i += len;
                plain_start = i;
            }
            None => i += 1,
        }
    }
    if plain_start < original.len() {
        segments.push(Segment::plain(collect(&original[plain_start..])));
    }
    segments
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Number of highlighted runs.
pub fn mark_count(segments: &[Segment]) -> usize {
    segments.iter().filter(|s| s.marked).count()
}
