// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a site publishes and the hits a query hands back.
//!
//! `index.json` is a flat array of page records. Every field is plain text; the
//! site generator is free to leave any of them out, so a missing or `null`
//! field reads as the empty string rather than failing the whole payload.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One indexed page, exactly as the site generator wrote it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    #[serde(default, deserialize_with = "nullable_string")]
    pub file: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub permalink: String,
}

impl IndexRecord {
    /// Text of one searchable field.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::File => &self.file,
            RecordField::Title => &self.title,
            RecordField::Summary => &self.summary,
            RecordField::Content => &self.content,
            RecordField::Permalink => &self.permalink,
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Field names a search key may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordField {
    File,
    Title,
    Summary,
    Content,
    Permalink,
}

impl RecordField {
    pub const ALL: [RecordField; 5] = [
        RecordField::File,
        RecordField::Title,
        RecordField::Summary,
        RecordField::Content,
        RecordField::Permalink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordField::File => "file",
            RecordField::Title => "title",
            RecordField::Summary => "summary",
            RecordField::Content => "content",
            RecordField::Permalink => "permalink",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown record field: {}", s))
    }
}

/// Matched character ranges inside one field (inclusive, in folded text).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub field: RecordField,
    /// Per-field bitap score: 0 is exact, 1 is no match.
    pub score: f64,
    pub indices: Vec<(usize, usize)>,
}

/// A ranked result for one query. Lives only as long as the query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    /// Position of the record in the loaded payload.
    pub position: usize,
    pub record: &'a IndexRecord,
    /// Combined relevance score. Lower is better, 0 is a perfect match.
    pub score: f64,
    /// Populated only when `include_matches` is set.
    pub matches: Vec<FieldMatch>,
}
