//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::render::{Renderer, ResultView};
use crate::types::IndexRecord;

/// Create a record with the fields the widget actually displays.
pub fn make_record(title: &str, content: &str, permalink: &str) -> IndexRecord {
    IndexRecord {
        file: String::new(),
        title: title.to_string(),
        summary: String::new(),
        content: content.to_string(),
        permalink: permalink.to_string(),
    }
}

/// Create a record with every field set.
pub fn make_full_record(
    file: &str,
    title: &str,
    summary: &str,
    content: &str,
    permalink: &str,
) -> IndexRecord {
    IndexRecord {
        file: file.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        permalink: permalink.to_string(),
    }
}

/// Renderer that records every view it is handed, as plain text lines.
///
/// Stands in for the DOM: one line per list entry, `title | snippet` with
/// highlighted runs wrapped in `[...]`.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Vec<String>>,
}

impl RecordingRenderer {
    pub fn last(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl Renderer for RecordingRenderer {
    type Output = Vec<String>;

    fn render(&mut self, view: &ResultView) -> Vec<String> {
        let lines: Vec<String> = match view {
            ResultView::Cleared => Vec::new(),
            ResultView::NoResults => vec![crate::render::NO_RESULTS.to_string()],
            ResultView::Entries(entries) => entries
                .iter()
                .map(|entry| {
                    let snippet: String = entry
                        .snippet
                        .iter()
                        .map(|segment| {
                            if segment.marked {
                                format!("[{}]", segment.text)
                            } else {
                                segment.text.clone()
                            }
                        })
                        .collect();
                    format!("{} | {}", entry.title, snippet)
                })
                .collect(),
        };
        self.frames.push(lines.clone());
        lines
    }
}
