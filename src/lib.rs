// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type fuzzy search for static sites.
//!
//! A site publishes `index.json`, an array of page records. The widget loads it
//! once, runs a bitap fuzzy match over the weighted fields of every record on
//! each keystroke, and renders the best hits as links with a highlighted
//! excerpt. Arrow keys, Enter and Escape move through the results.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ options.rs │────▶│  index/     │────▶│  scoring/    │
//! │ (fuseOpts) │     │ (load,      │     │ (norm, rank) │
//! └────────────┘     │  search)    │     └──────────────┘
//!                    └─────────────┘
//!                          │ uses fuzzy/ (bitap)
//!                          ▼
//! ┌────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ snippet.rs │────▶│ widget.rs   │────▶│  render/     │
//! │highlight.rs│     │ (one owner) │     │ (HTML, term) │
//! └────────────┘     └─────────────┘     └──────────────┘
//!                          │
//!                          ▼
//!                    navigator.rs (focus state machine)
//! ```
//!
//! # Usage
//!
//! ```
//! use siftbox::{SearchOptions, SearchWidget};
//! use siftbox::index::parse_index_payload;
//!
//! let json = r#"[{"title": "Alpha Page", "content": "the quick brown fox", "permalink": "/a"}]"#;
//! let mut widget = SearchWidget::new(SearchOptions::default());
//! widget.finish_load(parse_index_payload(json));
//!
//! let view = widget.on_input("fox");
//! assert_eq!(view.entry_count(), 1);
//! ```

pub mod error;
pub mod fuzzy;
pub mod highlight;
pub mod index;
pub mod navigator;
pub mod options;
pub mod render;
pub mod scoring;
pub mod snippet;
pub mod types;
pub mod util;
pub mod widget;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::{LoadError, OptionsError};
pub use highlight::{highlight, Segment};
pub use index::{load_from_response, load_index_file, parse_index_payload, SearchIndex};
pub use navigator::{Focus, Key, NavAction, Navigator};
pub use options::{SearchOptions, SiteParams};
pub use render::{HtmlRenderer, Renderer, ResultEntry, ResultView};
pub use snippet::extract_snippet;
pub use types::{FieldMatch, IndexRecord, RecordField, SearchHit};
pub use widget::{Effect, KeyResponse, SearchWidget};

#[cfg(feature = "wasm")]
pub use wasm::SiftWidget;
