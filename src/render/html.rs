// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup for the page's result list.
//!
//! ```html
//! <li class="side-entry">
//!   <a class="pagelink" href="/permalink">Title</a>
//!   <p class="search-result-content">...text <strong>term</strong> text...</p>
//! </li>
//! ```
//!
//! Record text is untrusted as far as the page is concerned, so every piece of
//! it is escaped; the only tags in the output are the ones written here.

use super::{Renderer, ResultEntry, ResultView, NO_RESULTS};
use crate::navigator::Focus;

pub const ENTRY_CLASS: &str = "side-entry";
pub const LINK_CLASS: &str = "pagelink";
pub const CONTENT_CLASS: &str = "search-result-content";
/// Element wrapped around highlighted runs.
pub const MARK_ELEMENT: &str = "strong";
/// Class on the parent of whichever element holds keyboard focus.
pub const FOCUS_CLASS: &str = "focus";

/// Renders a view as the `innerHTML` of the result list.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    type Output = String;

    fn render(&mut self, view: &ResultView) -> String {
        render_html(view)
    }
}

/// Markup for a view. [`ResultView::Cleared`] is the empty string.
pub fn render_html(view: &ResultView) -> String {
    render_html_with_focus(view, None)
}

/// Markup with the focus marker on the entry holding `marker`, if it is one.
pub fn render_html_with_focus(view: &ResultView, marker: Option<Focus>) -> String {
    match view {
        ResultView::Cleared => String::new(),
        ResultView::NoResults => NO_RESULTS.to_string(),
        ResultView::Entries(entries) => {
            let mut html = String::new();
            for (i, entry) in entries.iter().enumerate() {
                write_entry(&mut html, entry, marker == Some(Focus::Result(i)));
            }
            html
        }
    }
}

fn write_entry(html: &mut String, entry: &ResultEntry, focused: bool) {
    let class = if focused {
        format!("{} {}", ENTRY_CLASS, FOCUS_CLASS)
    } else {
        ENTRY_CLASS.to_string()
    };
    html.push_str(&format!(
        r#"<li class="{}"><a class="{}" href="{}">{}</a><p class="{}">"#,
        class,
        LINK_CLASS,
        escape_html(&entry.permalink),
        escape_html(&entry.title),
        CONTENT_CLASS,
    ));
    for segment in &entry.snippet {
        if segment.marked {
            html.push_str(&format!(
                "<{0}>{1}</{0}>",
                MARK_ELEMENT,
                escape_html(&segment.text)
            ));
        } else {
            html.push_str(&escape_html(&segment.text));
        }
    }
    html.push_str("</p></li>");
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
