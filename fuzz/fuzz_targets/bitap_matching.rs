// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bitap matching.
//!
//! Any pattern against any text, with any knob settings: reported ranges stay
//! inside the text, and an exact occurrence is always found when location is
//! ignored.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use siftbox::fuzzy::{BitapOptions, BitapPattern, MAX_BITS};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    location: u8,
    distance: u8,
    threshold: u8,
    ignore_location: bool,
    find_all_matches: bool,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: Vec<char> = input.pattern.chars().take(80).collect();
    let text: Vec<char> = input.text.chars().take(400).collect();

    let options = BitapOptions {
        location: usize::from(input.location),
        distance: usize::from(input.distance),
        threshold: f64::from(input.threshold) / 255.0,
        find_all_matches: input.find_all_matches,
        min_match_char_length: 1,
        include_matches: true,
        ignore_location: input.ignore_location,
    };

    let compiled = BitapPattern::new(pattern.clone());
    let result = compiled.search_in(&text, &options);

    for &(start, end) in &result.indices {
        assert!(start <= end && end < text.len().max(1));
    }

    if options.ignore_location
        && !pattern.is_empty()
        && pattern.len() <= MAX_BITS
        && text.windows(pattern.len()).any(|w| w == pattern.as_slice())
    {
        assert!(result.is_match, "exact occurrence missed");
    }
});
