// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning the fetched `index.json` into records.
//!
//! The page performs the single `GET /index.json` and hands over the status and
//! body. One attempt only: no retry, no timeout. Whatever goes wrong comes back
//! as a [`LoadError`] for the widget to log.

use crate::error::LoadError;
use crate::types::IndexRecord;
use std::fs;
use std::path::Path;

/// Where the page fetches the index from.
pub const INDEX_PATH: &str = "/index.json";

/// Parse a JSON array of records.
pub fn parse_index_payload(json: &str) -> Result<Vec<IndexRecord>, LoadError> {
    let records: Option<Vec<IndexRecord>> = serde_json::from_str(json)?;
    records.ok_or(LoadError::EmptyPayload)
}

/// Check the HTTP status, then parse the body.
pub fn load_from_response(status: u16, body: &str) -> Result<Vec<IndexRecord>, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::HttpStatus(status));
    }
    parse_index_payload(body)
}

/// Read an index from disk (CLI and tests).
pub fn load_index_file(path: impl AsRef<Path>) -> Result<Vec<IndexRecord>, LoadError> {
    let raw = fs::read_to_string(path)?;
    parse_index_payload(&raw)
}
