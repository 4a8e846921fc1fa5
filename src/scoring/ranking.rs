// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: ascending score, then payload order.
//!
//! Scores are floats and ties are common (two records whose only match is a
//! substring of equally long, equally weighted fields score the same), so the
//! record position is the tiebreaker. This keeps the order deterministic even
//! when matching ran in parallel.

use crate::types::SearchHit;
use std::cmp::Ordering;

/// Compare two hits for ranking. Lower score first; equal scores keep
/// payload order.
pub fn compare_hits(a: &SearchHit<'_>, b: &SearchHit<'_>) -> Ordering {
    match a.score.partial_cmp(&b.score) {
        Some(Ordering::Equal) | None => a.position.cmp(&b.position),
        Some(ord) => ord,
    }
}

/// Sort hits (if requested) and keep at most `limit`.
pub fn rank_hits(hits: &mut Vec<SearchHit<'_>>, should_sort: bool, limit: usize) {
    if should_sort {
        hits.sort_by(compare_hits);
    } else {
        hits.sort_by_key(|hit| hit.position);
    }
    hits.truncate(limit);
}
