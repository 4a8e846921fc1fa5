// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bitap approximate matching (shift-or with errors).
//!
//! Each pattern character gets a bitmask of the positions it occupies. The
//! text is scanned right to left; bit `len-1` of the state word lights up when
//! the pattern starts at the current position with at most `k` errors. Rows for
//! `k = 0, 1, 2, ...` are computed until the best possible score for one more
//! error exceeds the best score found so far.
//!
//! Scores live in `[0, 1]`: `errors / pattern_len`, plus a proximity penalty
//! `|expected - actual| / distance` unless location is ignored. Lower wins.
//!
//! Patterns longer than [`MAX_BITS`] are split into chunks searched
//! independently, and the chunk scores are averaged.
//!
//! # References
//!
//! - Wu & Manber (1992): "Fast text searching allowing errors", CACM 35(10).

use std::collections::HashMap;

/// Width of one state word.
pub const MAX_BITS: usize = 32;

/// Floor for any non-exact match score, so a substring hit never ties with
/// an exact field match.
pub const MIN_MATCH_SCORE: f64 = 0.001;

/// Per-search knobs, borrowed from [`crate::SearchOptions`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitapOptions {
    pub location: usize,
    pub distance: usize,
    pub threshold: f64,
    pub find_all_matches: bool,
    pub min_match_char_length: usize,
    pub include_matches: bool,
    pub ignore_location: bool,
}

/// Outcome of matching one pattern against one text.
#[derive(Debug, Clone, PartialEq)]
pub struct BitapMatch {
    pub is_match: bool,
    pub score: f64,
    /// Inclusive character ranges; empty unless `include_matches` is set.
    pub indices: Vec<(usize, usize)>,
}

impl BitapMatch {
    fn miss() -> Self {
        Self {
            is_match: false,
            score: 1.0,
            indices: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Chunk {
    pattern: Vec<char>,
    alphabet: HashMap<char, u32>,
    start_index: usize,
}

impl Chunk {
    fn new(pattern: &[char], start_index: usize) -> Self {
        let len = pattern.len();
        let mut alphabet: HashMap<char, u32> = HashMap::with_capacity(len);
        for (i, &c) in pattern.iter().enumerate() {
            *alphabet.entry(c).or_insert(0) |= 1 << (len - i - 1);
        }
        Self {
            pattern: pattern.to_vec(),
            alphabet,
            start_index,
        }
    }
}

/// A compiled pattern, reusable across every field of every record.
#[derive(Debug, Clone)]
pub struct BitapPattern {
    pattern: Vec<char>,
    chunks: Vec<Chunk>,
}

impl BitapPattern {
    /// Compile an already case-folded pattern.
    pub fn new(pattern: Vec<char>) -> Self {
        let len = pattern.len();
        let mut chunks = Vec::new();
        if len > MAX_BITS {
            let remainder = len % MAX_BITS;
            let end = len - remainder;
            let mut i = 0;
            while i < end {
                chunks.push(Chunk::new(&pattern[i..i + MAX_BITS], i));
                i += MAX_BITS;
            }
            if remainder > 0 {
                let start = len - MAX_BITS;
                chunks.push(Chunk::new(&pattern[start..], start));
            }
        } else if len > 0 {
            chunks.push(Chunk::new(&pattern, 0));
        }
        Self { pattern, chunks }
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Match against prepared (already folded) text.
    pub fn search_in(&self, text: &[char], options: &BitapOptions) -> BitapMatch {
        if self.chunks.is_empty() {
            return BitapMatch::miss();
        }

        if self.pattern == text {
            let indices = if options.include_matches {
                vec![(0, text.len().saturating_sub(1))]
            } else {
                Vec::new()
            };
            return BitapMatch {
                is_match: true,
                score: 0.0,
                indices,
            };
        }

        let mut has_matches = false;
        let mut total_score = 0.0;
        let mut all_indices = Vec::new();
        for chunk in &self.chunks {
            let result = search_chunk(text, chunk, options);
            if result.is_match {
                has_matches = true;
                all_indices.extend(result.indices);
            }
            total_score += result.score;
        }

        BitapMatch {
            is_match: has_matches,
            score: if has_matches {
                total_score / self.chunks.len() as f64
            } else {
                1.0
            },
            indices: if options.include_matches {
                all_indices
            } else {
                Vec::new()
            },
        }
    }
}

fn compute_score(
    pattern_len: usize,
    errors: usize,
    current_location: usize,
    expected_location: usize,
    options: &BitapOptions,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    if options.ignore_location {
        return accuracy;
    }
    let proximity = expected_location.abs_diff(current_location);
    if options.distance == 0 {
        return if proximity > 0 { 1.0 } else { accuracy };
    }
    accuracy + proximity as f64 / options.distance as f64
}

fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    if pattern.is_empty() || from > text.len() || text.len() - from < pattern.len() {
        return None;
    }
    text[from..]
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|p| p + from)
}

fn search_chunk(text: &[char], chunk: &Chunk, options: &BitapOptions) -> BitapMatch {
    let pattern_len = chunk.pattern.len();
    let text_len = text.len();
    let expected = options.location.saturating_add(chunk.start_index).min(text_len);

    let compute_matches = options.min_match_char_length > 1 || options.include_matches;
    let mut match_mask = vec![false; if compute_matches { text_len } else { 0 }];

    // Exact occurrences first: they tighten the threshold for the bit rows.
    let mut threshold = options.threshold;
    let mut next_start = expected;
    while let Some(index) = find_from(text, &chunk.pattern, next_start) {
        let score = compute_score(pattern_len, 0, index, expected, options);
        threshold = threshold.min(score);
        next_start = index + pattern_len;
        if compute_matches {
            match_mask[index..index + pattern_len].fill(true);
        }
    }

    let mut best_location: Option<usize> = None;
    let mut last_row: Vec<u32> = Vec::new();
    let mut final_score = 1.0;
    let mut bin_max = pattern_len + text_len;
    let hit_bit = 1u32 << (pattern_len - 1);

    for errors in 0..pattern_len {
        // Widest window around `expected` that could still beat the threshold.
        let mut bin_min = 0;
        let mut bin_mid = bin_max;
        while bin_min < bin_mid {
            let score = compute_score(pattern_len, errors, expected + bin_mid, expected, options);
            if score <= threshold {
                bin_min = bin_mid;
            } else {
                bin_max = bin_mid;
            }
            bin_mid = (bin_max - bin_min) / 2 + bin_min;
        }
        bin_max = bin_mid;

        let mut start = (expected + 1).saturating_sub(bin_mid).max(1);
        let finish = if options.find_all_matches {
            text_len
        } else {
            (expected + bin_mid).min(text_len) + pattern_len
        };

        let mut row = vec![0u32; finish + 2];
        row[finish + 1] = (1u32 << errors) - 1;

        let mut j = finish;
        while j >= start {
            let current = j - 1;
            let char_match = text
                .get(current)
                .and_then(|c| chunk.alphabet.get(c))
                .copied()
                .unwrap_or(0);
            if compute_matches && current < text_len {
                match_mask[current] = char_match != 0;
            }

            row[j] = ((row[j + 1] << 1) | 1) & char_match;
            if errors > 0 {
                let prev_next = last_row.get(j + 1).copied().unwrap_or(0);
                let prev_here = last_row.get(j).copied().unwrap_or(0);
                row[j] |= ((prev_next | prev_here) << 1) | 1 | prev_next;
            }

            if row[j] & hit_bit != 0 {
                final_score = compute_score(pattern_len, errors, current, expected, options);
                if final_score <= threshold {
                    threshold = final_score;
                    best_location = Some(current);
                    if current <= expected {
                        break;
                    }
                    start = (2 * expected).saturating_sub(current).max(1);
                }
            }
            j -= 1;
        }

        let next_best = compute_score(pattern_len, errors + 1, expected, expected, options);
        if next_best > threshold {
            break;
        }
        last_row = row;
    }

    let mut result = BitapMatch {
        is_match: best_location.is_some(),
        score: f64::max(MIN_MATCH_SCORE, final_score),
        indices: Vec::new(),
    };

    if compute_matches {
        let indices = mask_to_indices(&match_mask, options.min_match_char_length);
        if indices.is_empty() {
            result.is_match = false;
        } else if options.include_matches {
            result.indices = indices;
        }
    }

    result
}

/// Collapse a per-character hit mask into inclusive runs of at least
/// `min_len` characters.
pub fn mask_to_indices(mask: &[bool], min_len: usize) -> Vec<(usize, usize)> {
    let mut indices = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, &hit) in mask.iter().enumerate() {
        match (hit, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                if i - start >= min_len {
                    indices.push((start, i - 1));
                }
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        if mask.len() - start >= min_len {
            indices.push((start, mask.len() - 1));
        }
    }
    indices
}
