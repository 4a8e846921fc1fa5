// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index payload parsing under adversarial input.
//!
//! Whatever the server sends back as `index.json`, the worst case is a logged
//! error and a widget without an index. Nothing here may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use siftbox::index::parse_index_payload;
use siftbox::{SearchOptions, SearchWidget};

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);
    let loaded = parse_index_payload(&body);
    let parsed = loaded.is_ok();

    let mut widget = SearchWidget::new(SearchOptions::default());
    assert_eq!(widget.finish_load(loaded), parsed);

    // A loaded index must answer a query without panicking.
    let view = widget.on_input("a");
    assert!(view.entry_count() <= SearchOptions::default().limit);
});
