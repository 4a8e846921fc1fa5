//! Keyboard handling on a widget with rendered results.

use super::common::{alpha_widget, widget_with_results};
use siftbox::render::{render_html_with_focus, FOCUS_CLASS};
use siftbox::{Effect, Focus, Key, ResultView};

#[test]
fn test_arrow_down_focuses_first_result() {
    let mut widget = widget_with_results(3);
    let response = widget.on_key(Key::ArrowDown, true);
    assert!(response.prevent_default);
    assert_eq!(response.effect, Effect::Focus(Focus::Result(0)));
    assert_eq!(widget.navigator().marker(), Some(Focus::Result(0)));

    let html = render_html_with_focus(widget.view(), widget.navigator().marker());
    assert_eq!(html.matches(FOCUS_CLASS).count(), 1);
    assert!(html.starts_with(&format!(r#"<li class="side-entry {}">"#, FOCUS_CLASS)));
}

#[test]
fn test_arrow_down_at_last_result_is_clamped() {
    let mut widget = widget_with_results(2);
    widget.on_key(Key::ArrowDown, true);
    widget.on_key(Key::ArrowDown, true);
    let before = widget.navigator().clone();

    let response = widget.on_key(Key::ArrowDown, true);
    assert!(response.prevent_default);
    assert_eq!(response.effect, Effect::None);
    assert_eq!(widget.navigator(), &before);
}

#[test]
fn test_escape_resets_from_every_state() {
    let presses: [&[Key]; 4] = [
        &[],
        &[Key::ArrowDown],
        &[Key::ArrowDown, Key::ArrowDown],
        &[Key::ArrowDown, Key::ArrowUp],
    ];
    for keys in presses {
        let mut widget = widget_with_results(3);
        for &key in keys {
            widget.on_key(key, true);
        }
        let response = widget.on_key(Key::Escape, true);
        assert_eq!(response.effect, Effect::Reset);
        assert!(!response.prevent_default);
        assert_eq!(widget.view(), &ResultView::Cleared);
        assert_eq!(widget.navigator().focus(), Focus::Input);
        assert!(!widget.results_available());
    }
}

#[test]
fn test_escape_outside_widget_and_without_results() {
    let mut widget = widget_with_results(2);
    assert_eq!(widget.on_key(Key::Escape, false).effect, Effect::Reset);

    let mut empty = alpha_widget();
    assert_eq!(empty.on_key(Key::Escape, true).effect, Effect::Reset);
}

#[test]
fn test_no_results_makes_arrow_down_inert() {
    let mut widget = alpha_widget();
    widget.on_input("zebra");
    let response = widget.on_key(Key::ArrowDown, true);
    assert_eq!(response.effect, Effect::None);
    assert!(!response.prevent_default);
    assert_eq!(widget.navigator().focus(), Focus::Input);
}

#[test]
fn test_enter_from_input_opens_first_result() {
    let mut widget = widget_with_results(3);
    let response = widget.on_key(Key::Enter, true);
    assert_eq!(
        response.effect,
        Effect::Navigate {
            index: 0,
            permalink: "/0".to_string()
        }
    );
}

#[test]
fn test_arrow_right_opens_focused_result() {
    let mut widget = widget_with_results(3);
    widget.on_key(Key::ArrowDown, true);
    widget.on_key(Key::ArrowDown, true);
    let response = widget.on_key(Key::ArrowRight, true);
    assert_eq!(
        response.effect,
        Effect::Navigate {
            index: 1,
            permalink: "/1".to_string()
        }
    );
}

#[test]
fn test_keys_outside_widget_pass_through() {
    let mut widget = widget_with_results(3);
    let response = widget.on_key(Key::ArrowDown, false);
    assert_eq!(response.effect, Effect::None);
    assert!(!response.prevent_default);
}

#[test]
fn test_new_query_restarts_focus_at_input() {
    let mut widget = widget_with_results(3);
    widget.on_key(Key::ArrowDown, true);
    widget.on_key(Key::ArrowDown, true);
    widget.on_input("common");
    assert_eq!(widget.navigator().focus(), Focus::Input);
    assert_eq!(widget.navigator().marker(), None);
}

#[test]
fn test_clear_button_resets() {
    let mut widget = widget_with_results(3);
    widget.on_search_event("common");
    assert!(widget.results_available());
    widget.on_search_event("");
    assert_eq!(widget.view(), &ResultView::Cleared);
}
