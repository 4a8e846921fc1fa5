// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! # Field norm
//!
//! `norm = 1 / tokens^(0.5 * weight)`, rounded to three decimals, where
//! `tokens` counts space-separated words in the raw field value. A one-word
//! title gets norm 1.0; a 400-word body gets 0.05.
//!
//! # Record score
//!
//! ```text
//! score = Π over matched fields of  s_f ^ (w_f * norm_f)
//! ```
//!
//! where `s_f` is the field's bitap score (replaced by `f64::EPSILON` when it
//! is exactly 0, otherwise a perfect field would zero the whole product) and
//! `w_f` is the normalized key weight. Every factor is in `[0, 1]`, so more
//! matched fields and heavier keys only ever push the score down.

/// Weight applied to the field-length norm exponent.
pub const FIELD_NORM_WEIGHT: f64 = 1.0;

/// One matched field's contribution to a record score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldScore {
    pub score: f64,
    pub weight: f64,
    pub norm: f64,
}

/// Length norm for a raw field value.
pub fn field_norm(value: &str) -> f64 {
    field_norm_for_tokens(count_tokens(value))
}

/// Norm from a precomputed token count.
pub fn field_norm_for_tokens(tokens: usize) -> f64 {
    let tokens = tokens.max(1) as f64;
    let norm = 1.0 / tokens.powf(0.5 * FIELD_NORM_WEIGHT);
    (norm * 1000.0).round() / 1000.0
}

/// Space-separated words. Only the ASCII space splits, as in the site index.
pub fn count_tokens(value: &str) -> usize {
    value.split(' ').filter(|t| !t.is_empty()).count()
}

/// Combine matched fields into one relevance score.
pub fn record_score(fields: &[FieldScore]) -> f64 {
    fields.iter().fold(1.0, |total, f| {
        let base = if f.score == 0.0 && f.weight > 0.0 {
            f64::EPSILON
        } else {
            f.score
        };
        let exponent = if f.weight > 0.0 { f.weight } else { 1.0 } * f.norm;
        total * base.powf(exponent)
    })
}
