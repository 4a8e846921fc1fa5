// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The widget: one owner for all search state.
//!
//! The page wires three events to a single [`SearchWidget`]:
//!
//! | Event                    | Handler                              |
//! |--------------------------|--------------------------------------|
//! | index fetch settles      | [`SearchWidget::finish_load`]        |
//! | `input` on the search box| [`SearchWidget::on_input`]           |
//! | `search` (clear button)  | [`SearchWidget::on_search_event`]    |
//! | `keydown` on the document| [`SearchWidget::on_key`]             |
//!
//! Handlers take `&mut self` and run to completion, so a newer query always
//! replaces the view and navigator of the previous one before anything else
//! can observe them. The host applies what the handlers return (markup, focus
//! moves, navigation); the DOM is never read back as a source of truth.

use crate::error::LoadError;
use crate::highlight::{highlight, highlight_ignoring_diacritics};
use crate::index::SearchIndex;
use crate::navigator::{Focus, Key, NavAction, Navigator};
use crate::options::SearchOptions;
use crate::render::{Renderer, ResultEntry, ResultView};
use crate::snippet::extract_snippet;
use crate::types::{IndexRecord, SearchHit};

/// Side effect the host must perform after a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Focus this element and put the focus marker on its parent only.
    Focus(Focus),
    /// Follow a result link.
    Navigate { index: usize, permalink: String },
    /// Empty the input box and the list, focus the input box.
    Reset,
}

/// Response to a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// Call `preventDefault()` on the event.
    pub prevent_default: bool,
    pub effect: Effect,
}

/// Search widget state.
#[derive(Debug, Clone, Default)]
pub struct SearchWidget {
    options: SearchOptions,
    index: Option<SearchIndex>,
    view: ResultView,
    navigator: Navigator,
}

impl SearchWidget {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            options,
            index: None,
            view: ResultView::Cleared,
            navigator: Navigator::new(),
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// `None` until a load succeeds, and forever after a failed one.
    pub fn index(&self) -> Option<&SearchIndex> {
        self.index.as_ref()
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn results_available(&self) -> bool {
        self.navigator.results_available()
    }

    /// Install the index from a settled fetch.
    ///
    /// Failures are logged and leave the index unset; queries then clear the
    /// list and show nothing. Returns whether an index is now available.
    pub fn finish_load(&mut self, loaded: Result<Vec<IndexRecord>, LoadError>) -> bool {
        match loaded {
            Ok(records) => {
                tracing::debug!(records = records.len(), "search index loaded");
                self.index = Some(SearchIndex::build(records, self.options.clone()));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load search index");
                false
            }
        }
    }

    /// Re-run the query for the current input value.
    ///
    /// The list is cleared first, so an empty term or a missing index leaves
    /// it empty. Otherwise it shows either the ranked entries or the
    /// "No results" placeholder. Keyboard focus restarts at the input box.
    pub fn on_input(&mut self, value: &str) -> &ResultView {
        self.view = ResultView::Cleared;
        self.navigator.reset(0);

        let term = value.trim();
        if term.is_empty() {
            return &self.view;
        }
        let Some(index) = &self.index else {
            return &self.view;
        };

        let hits = index.search(term);
        tracing::debug!(term, hits = hits.len(), "query completed");

        self.view = if hits.is_empty() {
            ResultView::NoResults
        } else {
            ResultView::Entries(
                hits.iter()
                    .map(|hit| build_entry(hit, term, &self.options))
                    .collect(),
            )
        };
        self.navigator.reset(self.view.entry_count());
        &self.view
    }

    /// The browser's `search` event, fired by the clear button.
    pub fn on_search_event(&mut self, value: &str) {
        if value.is_empty() {
            self.reset();
        }
    }

    /// Focus returned to the input box by mouse or tab.
    pub fn on_input_focused(&mut self) {
        self.navigator.focus_input();
    }

    /// Handle a keydown. `within_widget` says whether the active element is
    /// inside the search box container.
    pub fn on_key(&mut self, key: Key, within_widget: bool) -> KeyResponse {
        let transition = self.navigator.handle(key, within_widget);
        let effect = match transition.action {
            NavAction::None => Effect::None,
            NavAction::MoveFocus(target) => Effect::Focus(target),
            NavAction::Activate(index) => match self.view.entry(index) {
                Some(entry) => Effect::Navigate {
                    index,
                    permalink: entry.permalink.clone(),
                },
                None => Effect::None,
            },
            NavAction::Reset => {
                self.reset();
                Effect::Reset
            }
        };
        KeyResponse {
            prevent_default: transition.prevent_default,
            effect,
        }
    }

    /// Clear results and return focus to the input box.
    pub fn reset(&mut self) {
        self.view = ResultView::Cleared;
        self.navigator.reset(0);
    }

    /// Draw the current view.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> R::Output {
        renderer.render(&self.view)
    }
}

/// One list entry: title link plus a snippet of `content` with every word of
/// the term highlighted. With `ignore_diacritics` the highlight also ignores
/// accents, so a record matched as "cafe" shows "café" marked.
pub fn build_entry(hit: &SearchHit<'_>, term: &str, options: &SearchOptions) -> ResultEntry {
    let snippet = extract_snippet(&hit.record.content, term);
    let snippet = if options.ignore_diacritics {
        highlight_ignoring_diacritics(&snippet, term)
    } else {
        highlight(&snippet, term)
    };
    ResultEntry {
        title: hit.record.title.clone(),
        permalink: hit.record.permalink.clone(),
        snippet,
        score: options.include_score.then_some(hit.score),
    }
}
