// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding and diacritic stripping.
//!
//! Two flavors of lowercasing live here. [`fold_char`] keeps a strict 1:1
//! mapping between input and output characters, so an offset found in folded
//! text is valid in the original. [`prepare_for_match`] uses full Unicode
//! lowercasing and may change lengths; it only feeds the fuzzy matcher, where
//! offsets are reported against the prepared text anyway.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Lowercase one character without changing the character count.
///
/// Characters whose lowercase form expands (e.g. `İ`) keep only the first
/// character of the expansion.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Length-preserving lowercase of a whole string, as characters.
pub fn fold_chars(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}

/// Length-preserving fold that also drops accents: "Café" → "cafe".
///
/// A character whose canonical decomposition is one base character plus
/// combining marks folds to that base. Anything else folds as [`fold_char`].
/// A combining mark written as its own character is kept, so offsets still
/// line up with the original.
pub fn fold_chars_to_base(value: &str) -> Vec<char> {
    value.chars().map(|c| base_char(fold_char(c))).collect()
}

#[cfg(feature = "unicode-normalization")]
fn base_char(c: char) -> char {
    let mut parts = std::iter::once(c).nfd();
    match parts.next() {
        Some(base) if parts.all(is_combining_mark) => base,
        _ => c,
    }
}

#[cfg(not(feature = "unicode-normalization"))]
fn base_char(c: char) -> char {
    c
}

/// Text as the fuzzy matcher sees it.
pub fn prepare_for_match(value: &str, case_sensitive: bool, ignore_diacritics: bool) -> Vec<char> {
    let value = if ignore_diacritics {
        strip_diacritics(value)
    } else {
        value.to_string()
    };
    if case_sensitive {
        value.chars().collect()
    } else {
        value.to_lowercase().chars().collect()
    }
}

/// Remove combining marks: "café" → "cafe", "harīṣh" → "harish".
///
/// NFD decomposes each accented character into base + marks, then the marks
/// are filtered out.
#[cfg(feature = "unicode-normalization")]
pub fn strip_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Without `unicode-normalization` (lean WASM builds) text passes through.
#[cfg(not(feature = "unicode-normalization"))]
pub fn strip_diacritics(value: &str) -> String {
    value.to_string()
}

#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
