// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard navigation between the search box and the result links.
//!
//! Focus is a tagged value, not whatever the DOM says is active:
//!
//! ```text
//!            ArrowDown            ArrowDown              ArrowDown
//!   Input ─────────────▶ Result(0) ─────────▶ ... ─▶ Result(n-1) ──┐ (clamped)
//!     ▲                     │                                  ◀──┘
//!     └──── ArrowUp ────────┘
//!
//!   ArrowRight / Enter: activate Result(i), or Result(0) from Input
//!   Escape (anywhere):  reset to Input, clear input and results
//! ```
//!
//! [`Navigator::transition`] is a pure lookup over `(focus, key)`. Nothing
//! but Escape is handled while no results are available or while the key
//! event comes from outside the search box. Every handled arrow/Enter key
//! asks the host to suppress the browser default (scrolling, caret moves).
//!
//! The focus marker is separate from focus itself: it is set on the target of
//! every move and cleared as soon as a key arrives with focus in the input box.
//! At most one element ever carries it.

use serde::Serialize;

/// Keys the navigator distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    ArrowDown,
    ArrowUp,
    ArrowRight,
    Enter,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "ArrowRight" => Key::ArrowRight,
            "Enter" => Key::Enter,
            _ => Key::Other,
        }
    }
}

/// Where keyboard focus is inside the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "target", content = "index", rename_all = "camelCase")]
pub enum Focus {
    #[default]
    Input,
    Result(usize),
}

/// What the host should do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    /// Move keyboard focus and the focus marker.
    MoveFocus(Focus),
    /// Follow the link of the result at this index.
    Activate(usize),
    /// Clear the input box and the results, focus the input box.
    Reset,
}

/// Result of one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub action: NavAction,
    pub prevent_default: bool,
}

impl Transition {
    const IGNORED: Transition = Transition {
        action: NavAction::None,
        prevent_default: false,
    };

    fn handled(action: NavAction) -> Self {
        Self {
            action,
            prevent_default: true,
        }
    }
}

/// Focus state for the current result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    focus: Focus,
    marker: Option<Focus>,
    result_count: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The one element carrying the focus marker, if any.
    pub fn marker(&self) -> Option<Focus> {
        self.marker
    }

    pub fn result_count(&self) -> usize {
        self.result_count
    }

    pub fn results_available(&self) -> bool {
        self.result_count > 0
    }

    /// Start over with a freshly rendered result set.
    pub fn reset(&mut self, result_count: usize) {
        self.focus = Focus::Input;
        self.marker = None;
        self.result_count = result_count;
    }

    /// The user put focus back in the input box by other means (mouse, tab).
    pub fn focus_input(&mut self) {
        self.focus = Focus::Input;
        self.marker = None;
    }

    /// Decide what `key` does, without changing state.
    pub fn transition(&self, key: Key, within_widget: bool) -> Transition {
        if key == Key::Escape {
            return Transition {
                action: NavAction::Reset,
                prevent_default: false,
            };
        }
        if !self.results_available() || !within_widget {
            return Transition::IGNORED;
        }

        let last = self.result_count - 1;
        match (key, self.focus) {
            (Key::ArrowDown, Focus::Input) => {
                Transition::handled(NavAction::MoveFocus(Focus::Result(0)))
            }
            (Key::ArrowDown, Focus::Result(i)) if i < last => {
                Transition::handled(NavAction::MoveFocus(Focus::Result(i + 1)))
            }
            (Key::ArrowDown, Focus::Result(_)) => Transition::handled(NavAction::None),

            (Key::ArrowUp, Focus::Result(0)) => {
                Transition::handled(NavAction::MoveFocus(Focus::Input))
            }
            (Key::ArrowUp, Focus::Result(i)) => {
                Transition::handled(NavAction::MoveFocus(Focus::Result(i - 1)))
            }
            (Key::ArrowUp, Focus::Input) => Transition::handled(NavAction::None),

            (Key::ArrowRight | Key::Enter, Focus::Input) => {
                Transition::handled(NavAction::Activate(0))
            }
            (Key::ArrowRight | Key::Enter, Focus::Result(i)) => {
                Transition::handled(NavAction::Activate(i.min(last)))
            }

            (Key::Escape | Key::Other, _) => Transition::IGNORED,
        }
    }

    /// Handle a key: compute the transition and apply it.
    ///
    /// A [`NavAction::Reset`] is returned but not applied here; the owner of
    /// the result list clears it and then calls [`Navigator::reset`].
    pub fn handle(&mut self, key: Key, within_widget: bool) -> Transition {
        if self.focus == Focus::Input {
            self.marker = None;
        }
        let transition = self.transition(key, within_widget);
        if let NavAction::MoveFocus(target) = transition.action {
            self.focus = target;
            self.marker = Some(target);
        }
        transition
    }
}
