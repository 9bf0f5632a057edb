// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Shared test harness for foodsave-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection and small DOM
// event helpers so that individual test files stay focused on assertions.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, InputEvent, InputEventInit,
    KeyboardEvent, KeyboardEventInit,
};
use yew::platform::time::sleep;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Yield to the Yew scheduler so pending renders are flushed.
pub async fn settle() {
    sleep(Duration::ZERO).await;
}

pub fn query(mount: &Element, selector: &str) -> Option<Element> {
    mount.query_selector(selector).unwrap()
}

pub fn query_all_count(mount: &Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

pub fn text_of(mount: &Element, selector: &str) -> String {
    query(mount, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .text_content()
        .unwrap_or_default()
}

/// Click the first element matching `selector`.
pub fn click(mount: &Element, selector: &str) {
    query(mount, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Dispatch a bubbling, cancelable `keydown` on `target`.
///
/// Returns `true` when a handler called `prevent_default()`.
pub fn key_down(target: &Element, key: &str) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    let not_cancelled = target.dispatch_event(&event).unwrap();
    !not_cancelled
}

/// Set the value of an `<input>` or `<textarea>` and fire `input` the way
/// typing would.
pub fn type_into(mount: &Element, selector: &str, value: &str) {
    let element = query(mount, selector).unwrap_or_else(|| panic!("no element matches {selector}"));
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        panic!("{selector} is not a text control");
    }
    let init = InputEventInit::new();
    init.set_bubbles(true);
    let event = InputEvent::new_with_event_init_dict("input", &init).unwrap();
    element.dispatch_event(&event).unwrap();
}

pub fn value_of(mount: &Element, selector: &str) -> String {
    let element = query(mount, selector).unwrap_or_else(|| panic!("no element matches {selector}"));
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        panic!("{selector} is not a text control");
    }
}

pub fn is_disabled(mount: &Element, selector: &str) -> bool {
    query(mount, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .has_attribute("disabled")
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with every key set. Analytics stays off.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("googlePlayUrl", &"https://play.example.test/foodsave".into());
    set("learnMoreUrl", &"https://example.test/learn-more".into());
    set("logLevel", &"debug".into());

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
