// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types. None of these are fatal to the widget: a load failure leaves
//! the index unset, and bad configuration falls back to defaults.

use thiserror::Error;

/// Why the search index could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The index request answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The body was not a JSON array of records.
    #[error("malformed index payload: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The body was JSON `null`.
    #[error("index payload is empty")]
    EmptyPayload,
    #[error("failed to read index file: {0}")]
    Io(#[from] std::io::Error),
}

/// Site parameters that could not be read at all.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("malformed site params: {0}")]
    Malformed(#[from] serde_json::Error),
}
