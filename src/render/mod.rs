// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the result list shows, independent of how it is drawn.
//!
//! A query produces a [`ResultView`]; a [`Renderer`] turns it into output. The
//! page uses [`HtmlRenderer`] and assigns the markup to the list element, the
//! CLI draws to the terminal, and tests record views with a fake.

mod html;

pub use html::*;

use crate::highlight::Segment;
use serde::Serialize;

/// Placeholder shown when a query matches nothing.
pub const NO_RESULTS: &str = "No results";

/// One list entry: a link to the page and a highlighted excerpt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEntry {
    pub title: String,
    pub permalink: String,
    pub snippet: Vec<Segment>,
    /// Relevance score, exposed only when `include_score` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Contents of the result list after the most recent query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "camelCase")]
pub enum ResultView {
    /// Nothing shown: empty input, no index, or after a reset.
    #[default]
    Cleared,
    NoResults,
    Entries(Vec<ResultEntry>),
}

impl ResultView {
    /// Number of navigable entries.
    pub fn entry_count(&self) -> usize {
        match self {
            ResultView::Entries(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Whether keyboard navigation has anything to move through.
    pub fn results_available(&self) -> bool {
        self.entry_count() > 0
    }

    pub fn entry(&self, index: usize) -> Option<&ResultEntry> {
        match self {
            ResultView::Entries(entries) => entries.get(index),
            _ => None,
        }
    }
}

/// Maps a result view to display output.
pub trait Renderer {
    type Output;

    fn render(&mut self, view: &ResultView) -> Self::Output;
}
