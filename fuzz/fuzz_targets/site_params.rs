// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site params resolution never panics and always yields usable options.

#![no_main]

use libfuzzer_sys::fuzz_target;
use siftbox::SearchOptions;

fuzz_target!(|data: &[u8]| {
    let json = String::from_utf8_lossy(data);
    let Ok(options) = SearchOptions::from_site_params_json(&json) else {
        return;
    };

    // INVARIANT 1: there is always at least one key, and weights sum to 1
    assert!(!options.keys.is_empty());
    let total: f64 = options.keys.iter().map(|k| k.weight).sum();
    assert!((total - 1.0).abs() < 1e-6, "weights sum to {}", total);

    // INVARIANT 2: the limit is never zero
    assert!(options.limit > 0);

    // INVARIANT 3: the threshold is a real number
    assert!(options.threshold.is_finite());
});
