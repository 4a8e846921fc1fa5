// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options: built-in defaults, optionally overridden by the site.
//!
//! A site passes overrides as `params.fuseOpts` with all-lowercase keys
//! (`ignorelocation`, `minmatchcharlength`, ...). Each field is resolved on its
//! own: a missing field, or one with the wrong JSON type, keeps its default.
//! Options are resolved once at startup and never change afterwards.

use crate::error::OptionsError;
use crate::types::RecordField;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Results shown per query unless the site says otherwise.
pub const DEFAULT_LIMIT: usize = 8;
pub const DEFAULT_DISTANCE: usize = 50;
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default field weights: file 0.8, title 0.8, summary 0.7, content 0.4.
pub const DEFAULT_KEYS: [(RecordField, f64); 4] = [
    (RecordField::File, 0.8),
    (RecordField::Title, 0.8),
    (RecordField::Summary, 0.7),
    (RecordField::Content, 0.4),
];

/// A field to search and its share of the total weight.
///
/// Weights are normalized at resolution time so they sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedKey {
    pub field: RecordField,
    pub weight: f64,
}

/// Fully resolved search options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOptions {
    pub keys: Vec<WeightedKey>,
    /// How far from `location` a match may sit before it stops counting.
    pub distance: usize,
    /// 0.0 requires a perfect match, 1.0 matches anything.
    pub threshold: f64,
    /// Expected match position, only meaningful without `ignore_location`.
    pub location: usize,
    pub ignore_location: bool,
    pub is_case_sensitive: bool,
    pub ignore_diacritics: bool,
    pub include_score: bool,
    pub include_matches: bool,
    pub min_match_char_length: usize,
    pub should_sort: bool,
    pub find_all_matches: bool,
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            keys: normalize_weights(
                DEFAULT_KEYS
                    .iter()
                    .map(|&(field, weight)| WeightedKey { field, weight })
                    .collect(),
            ),
            distance: DEFAULT_DISTANCE,
            threshold: DEFAULT_THRESHOLD,
            location: 0,
            ignore_location: true,
            is_case_sensitive: false,
            ignore_diacritics: false,
            include_score: false,
            include_matches: false,
            min_match_char_length: 1,
            should_sort: true,
            find_all_matches: false,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Site-level parameters as emitted by the page template.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteParams {
    #[serde(rename = "fuseOpts", default, deserialize_with = "lenient")]
    pub fuse_opts: Option<OptionOverrides>,
}

/// Raw overrides. Every field is optional and type-tolerant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionOverrides {
    #[serde(default, deserialize_with = "lenient")]
    pub keys: Option<Vec<KeySpec>>,
    #[serde(default, deserialize_with = "lenient")]
    pub distance: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    pub threshold: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    pub ignorelocation: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub iscasesensitive: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub ignorediacritics: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub includescore: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub includematches: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub minmatchcharlength: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    pub shouldsort: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub findallmatches: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<usize>,
}

/// A key as a site may write it: `"title"` or `{"name": "title", "weight": 0.8}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    Name(String),
    Weighted {
        name: String,
        #[serde(default)]
        weight: Option<f64>,
    },
}

/// Read a field, or `None` if it has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl SearchOptions {
    /// Resolve options from optional site overrides.
    pub fn resolve(overrides: Option<&OptionOverrides>) -> Self {
        let defaults = Self::default();
        let Some(o) = overrides else {
            return defaults;
        };

        let keys = o
            .keys
            .as_deref()
            .map(resolve_keys)
            .filter(|keys| !keys.is_empty())
            .map(normalize_weights)
            .unwrap_or(defaults.keys);

        Self {
            keys,
            distance: o.distance.unwrap_or(defaults.distance),
            threshold: o
                .threshold
                .filter(|t| t.is_finite())
                .unwrap_or(defaults.threshold),
            location: o.location.unwrap_or(defaults.location),
            ignore_location: o.ignorelocation.unwrap_or(defaults.ignore_location),
            is_case_sensitive: o.iscasesensitive.unwrap_or(defaults.is_case_sensitive),
            ignore_diacritics: o.ignorediacritics.unwrap_or(defaults.ignore_diacritics),
            include_score: o.includescore.unwrap_or(defaults.include_score),
            include_matches: o.includematches.unwrap_or(defaults.include_matches),
            min_match_char_length: o
                .minmatchcharlength
                .unwrap_or(defaults.min_match_char_length),
            should_sort: o.shouldsort.unwrap_or(defaults.should_sort),
            find_all_matches: o.findallmatches.unwrap_or(defaults.find_all_matches),
            // A configured limit of 0 means "use the default", not "show nothing".
            limit: o.limit.filter(|&l| l > 0).unwrap_or(defaults.limit),
        }
    }

    /// Resolve from parsed site params.
    pub fn from_site_params(params: &SiteParams) -> Self {
        Self::resolve(params.fuse_opts.as_ref())
    }

    /// Resolve from the site params JSON text.
    ///
    /// Only fails when the text is not JSON at all; callers that must not fail
    /// should fall back to [`SearchOptions::default`].
    pub fn from_site_params_json(json: &str) -> Result<Self, OptionsError> {
        let params: Option<SiteParams> = serde_json::from_str(json)?;
        Ok(params
            .map(|p| Self::from_site_params(&p))
            .unwrap_or_default())
    }
}

fn resolve_keys(specs: &[KeySpec]) -> Vec<WeightedKey> {
    specs
        .iter()
        .filter_map(|spec| {
            let (name, weight) = match spec {
                KeySpec::Name(name) => (name.as_str(), 1.0),
                KeySpec::Weighted { name, weight } => (name.as_str(), weight.unwrap_or(1.0)),
            };
            let field = match name.parse::<RecordField>() {
                Ok(field) => field,
                Err(e) => {
                    tracing::warn!(key = name, "ignoring search key: {}", e);
                    return None;
                }
            };
            if !(weight.is_finite() && weight > 0.0) {
                tracing::warn!(key = name, weight, "ignoring search key with non-positive weight");
                return None;
            }
            Some(WeightedKey { field, weight })
        })
        .collect()
}

fn normalize_weights(mut keys: Vec<WeightedKey>) -> Vec<WeightedKey> {
    let mut total: f64 = keys.iter().map(|k| k.weight).sum();
    if total.is_infinite() {
        // Huge weights: bring them into range before dividing.
        let max = keys.iter().map(|k| k.weight).fold(0.0, f64::max);
        for key in &mut keys {
            key.weight /= max;
        }
        total = keys.iter().map(|k| k.weight).sum();
    }
    if total > 0.0 {
        for key in &mut keys {
            key.weight /= total;
        }
    }
    keys
}
