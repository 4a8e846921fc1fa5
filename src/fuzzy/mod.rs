// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via bitap.
//!
//! One compiled pattern per query, matched against every searchable field of
//! every record. The score is what the ranker consumes; the matched ranges are
//! only kept when the site asks for them.

mod bitap;

pub use bitap::*;
