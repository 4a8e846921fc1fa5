// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory search index.
//!
//! Built once from the fetched records. Searchable field values are folded
//! (case, optionally diacritics) and their length norms computed up front, so
//! a keystroke only pays for compiling the pattern and running bitap over the
//! prepared text.

mod loader;

pub use loader::*;

use crate::fuzzy::{BitapOptions, BitapPattern};
use crate::options::SearchOptions;
use crate::scoring::ranking::rank_hits;
use crate::scoring::{field_norm, record_score, FieldScore};
use crate::types::{FieldMatch, IndexRecord, RecordField, SearchHit};
use crate::util::normalize::prepare_for_match;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
struct PreparedField {
    field: RecordField,
    weight: f64,
    norm: f64,
    text: Vec<char>,
}

/// Searchable fields of one record. Blank fields are left out entirely.
#[derive(Debug, Clone)]
struct PreparedRecord {
    fields: Vec<PreparedField>,
}

/// Records plus the prepared text used to match against them.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    records: Vec<IndexRecord>,
    prepared: Vec<PreparedRecord>,
    options: SearchOptions,
}

impl SearchIndex {
    /// Build the index. Record order is preserved and used as the ranking
    /// tiebreaker.
    pub fn build(records: Vec<IndexRecord>, options: SearchOptions) -> Self {
        let prepared = records
            .iter()
            .map(|record| prepare_record(record, &options))
            .collect();
        Self {
            records,
            prepared,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Top `options.limit` hits for `query`.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.search_with_limit(query, self.options.limit)
    }

    /// Top `limit` hits for `query`, best first.
    ///
    /// The query is used as one pattern, spaces included. An empty query
    /// matches nothing.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let pattern = BitapPattern::new(prepare_for_match(
            query,
            self.options.is_case_sensitive,
            self.options.ignore_diacritics,
        ));
        if pattern.is_empty() {
            return Vec::new();
        }
        let bitap = self.bitap_options();

        #[cfg(feature = "parallel")]
        let mut hits: Vec<SearchHit<'_>> = self
            .prepared
            .par_iter()
            .enumerate()
            .filter_map(|(position, prepared)| self.match_record(position, prepared, &pattern, &bitap))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let mut hits: Vec<SearchHit<'_>> = self
            .prepared
            .iter()
            .enumerate()
            .filter_map(|(position, prepared)| self.match_record(position, prepared, &pattern, &bitap))
            .collect();

        rank_hits(&mut hits, self.options.should_sort, limit);
        hits
    }

    fn bitap_options(&self) -> BitapOptions {
        BitapOptions {
            location: self.options.location,
            distance: self.options.distance,
            threshold: self.options.threshold,
            find_all_matches: self.options.find_all_matches,
            min_match_char_length: self.options.min_match_char_length,
            include_matches: self.options.include_matches,
            ignore_location: self.options.ignore_location,
        }
    }

    fn match_record<'a>(
        &'a self,
        position: usize,
        prepared: &PreparedRecord,
        pattern: &BitapPattern,
        bitap: &BitapOptions,
    ) -> Option<SearchHit<'a>> {
        let mut scores = Vec::new();
        let mut matches = Vec::new();
        for field in &prepared.fields {
            let result = pattern.search_in(&field.text, bitap);
            if !result.is_match {
                continue;
            }
            scores.push(FieldScore {
                score: result.score,
                weight: field.weight,
                norm: field.norm,
            });
            if self.options.include_matches {
                matches.push(FieldMatch {
                    field: field.field,
                    score: result.score,
                    indices: result.indices,
                });
            }
        }
        if scores.is_empty() {
            return None;
        }
        Some(SearchHit {
            position,
            record: &self.records[position],
            score: record_score(&scores),
            matches,
        })
    }
}

fn prepare_record(record: &IndexRecord, options: &SearchOptions) -> PreparedRecord {
    let fields = options
        .keys
        .iter()
        .filter_map(|key| {
            let value = record.field(key.field);
            if value.trim().is_empty() {
                return None;
            }
            Some(PreparedField {
                field: key.field,
                weight: key.weight,
                norm: field_norm(value),
                text: prepare_for_match(value, options.is_case_sensitive, options.ignore_diacritics),
            })
        })
        .collect();
    PreparedRecord { fields }
}
