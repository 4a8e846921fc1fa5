// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widget.
//!
//! The page keeps ownership of the DOM; this module keeps ownership of the
//! state. A thin script fetches the index, forwards events, and applies what
//! comes back:
//!
//! ```js
//! const widget = new SiftWidget(params);          // site params, or undefined
//! fetch("/index.json")
//!     .then((r) => r.ok ? r.text().then((t) => widget.load_index(t))
//!                       : widget.load_failed(r.status, r.statusText))
//!     .catch((e) => widget.load_failed(undefined, String(e)));
//!
//! input.addEventListener("input", () => { list.innerHTML = widget.on_input(input.value); });
//! input.addEventListener("search", () => { if (widget.on_search_event(input.value)) reset(); });
//! document.addEventListener("keydown", (e) => {
//!     const r = widget.on_key(e.key, searchbox.contains(document.activeElement));
//!     if (r.preventDefault) e.preventDefault();
//!     // r.action: "none" | "focus" | "navigate" | "reset"
//! });
//! ```

use crate::error::LoadError;
use crate::index::parse_index_payload;
use crate::navigator::{Focus, Key};
use crate::options::{SearchOptions, SiteParams};
use crate::render::{render_html_with_focus, HtmlRenderer};
use crate::widget::{Effect, KeyResponse, SearchWidget};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn js_error(e: serde_wasm_bindgen::Error) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(message: &str);
}

/// Key response for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsKeyResponse {
    prevent_default: bool,
    action: &'static str,
    /// "input" or "result" for focus moves.
    target: Option<&'static str>,
    index: Option<usize>,
    href: Option<String>,
}

impl From<KeyResponse> for JsKeyResponse {
    fn from(response: KeyResponse) -> Self {
        let mut out = JsKeyResponse {
            prevent_default: response.prevent_default,
            action: "none",
            target: None,
            index: None,
            href: None,
        };
        match response.effect {
            Effect::None => {}
            Effect::Focus(Focus::Input) => {
                out.action = "focus";
                out.target = Some("input");
            }
            Effect::Focus(Focus::Result(index)) => {
                out.action = "focus";
                out.target = Some("result");
                out.index = Some(index);
            }
            Effect::Navigate { index, permalink } => {
                out.action = "navigate";
                out.index = Some(index);
                out.href = Some(permalink);
            }
            Effect::Reset => out.action = "reset",
        }
        out
    }
}

/// WASM-accessible search widget.
#[wasm_bindgen]
pub struct SiftWidget {
    inner: SearchWidget,
}

#[wasm_bindgen]
impl SiftWidget {
    /// Create a widget from the site params object (`{ fuseOpts: {...} }`).
    ///
    /// `undefined`, `null` or unreadable params fall back to the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> SiftWidget {
        let options = if params.is_undefined() || params.is_null() {
            SearchOptions::default()
        } else {
            match from_value::<SiteParams>(params) {
                Ok(params) => SearchOptions::from_site_params(&params),
                Err(e) => {
                    log(&format!("Invalid search params, using defaults: {}", e));
                    SearchOptions::default()
                }
            }
        };
        SiftWidget {
            inner: SearchWidget::new(options),
        }
    }

    /// Hand over the fetched `index.json` body. Returns whether the index is
    /// now usable.
    #[wasm_bindgen]
    pub fn load_index(&mut self, json: &str) -> bool {
        let loaded = parse_index_payload(json);
        if let Err(e) = &loaded {
            log(&e.to_string());
        }
        self.inner.finish_load(loaded)
    }

    /// Report a fetch that failed: with an HTTP status, or without a response.
    #[wasm_bindgen]
    pub fn load_failed(&mut self, status: Option<u16>, message: String) {
        let error = match status {
            Some(status) => LoadError::HttpStatus(status),
            None if message.is_empty() => {
                LoadError::Network("Failed to load search index".to_string())
            }
            None => LoadError::Network(message),
        };
        log(&error.to_string());
        self.inner.finish_load(Err(error));
    }

    /// Run the query for the input value; returns the list's new `innerHTML`.
    #[wasm_bindgen]
    pub fn on_input(&mut self, value: &str) -> String {
        self.inner.on_input(value);
        self.inner.render_with(&mut HtmlRenderer)
    }

    /// The `search` event. Returns true when the page should reset the box.
    #[wasm_bindgen]
    pub fn on_search_event(&mut self, value: &str) -> bool {
        self.inner.on_search_event(value);
        value.is_empty()
    }

    /// A keydown anywhere on the document.
    #[wasm_bindgen]
    pub fn on_key(&mut self, key: &str, within_widget: bool) -> Result<JsValue, JsValue> {
        let response = self.inner.on_key(Key::from_dom(key), within_widget);
        to_value(&JsKeyResponse::from(response)).map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn on_input_focused(&mut self) {
        self.inner.on_input_focused();
    }

    #[wasm_bindgen]
    pub fn results_available(&self) -> bool {
        self.inner.results_available()
    }

    /// Whether an index has been loaded.
    #[wasm_bindgen]
    pub fn has_index(&self) -> bool {
        self.inner.index().is_some()
    }

    /// List markup with the focus marker applied.
    #[wasm_bindgen]
    pub fn html(&self) -> String {
        render_html_with_focus(self.inner.view(), self.inner.navigator().marker())
    }

    /// Current result view as a plain object (for custom rendering).
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(self.inner.view()).map_err(js_error)
    }
}
