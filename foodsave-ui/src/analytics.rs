// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional Matomo tracking.
//!
//! All functions are no-ops unless `window._paq` exists, which only happens
//! when [`init`] found a Matomo endpoint in the runtime config.

use enum_display::EnumDisplay;
use gloo_utils::window;
use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;

use crate::constants::matomo_target;

const EVENT_CATEGORY: &str = "CTA";

/// Call-to-action activations worth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumDisplay)]
pub enum CtaEvent {
    InstallApp,
    LearnMore,
    InvestNow,
    LeadSubmitted,
    ScrollToSolution,
}

/// Inject the tracker snippet and record the initial page view.
pub fn init() {
    let Some((base, site)) = matomo_target() else {
        log::debug!("Matomo not configured; analytics disabled");
        return;
    };
    inject_snippet(&base, site);
    track_page_view();
}

pub fn track_page_view() {
    push_command(&["trackPageView"]);
}

pub fn track_cta(event: CtaEvent) {
    let action = event.to_string();
    push_command(&["trackEvent", EVENT_CATEGORY, action.as_str()]);
}

fn has_paq() -> bool {
    Reflect::has(&window(), &JsValue::from_str("_paq")).unwrap_or(false)
}

fn push_command(parts: &[&str]) {
    if !has_paq() {
        return;
    }
    let command = Array::new();
    for part in parts {
        command.push(&JsValue::from_str(part));
    }
    push_to_paq(&command.into());
}

fn push_to_paq(args: &JsValue) {
    let Ok(paq) = Reflect::get(&window(), &JsValue::from_str("_paq")) else {
        return;
    };
    if let Ok(push) = Reflect::get(&paq, &JsValue::from_str("push")) {
        let func: js_sys::Function = push.into();
        if let Err(e) = func.call1(&paq, args) {
            log::debug!("Matomo push failed: {e:?}");
        }
    }
}

fn inject_snippet(base: &str, site: u32) {
    if has_paq() {
        return;
    }
    let win = window();
    if Reflect::set(&win, &JsValue::from_str("_paq"), &Array::new()).is_err() {
        log::warn!("Could not create window._paq");
        return;
    }
    let tracker_url = format!("{base}matomo.php");
    let site_id = site.to_string();
    push_command(&["setTrackerUrl", tracker_url.as_str()]);
    push_command(&["setSiteId", site_id.as_str()]);
    push_command(&["enableLinkTracking"]);

    let Some(doc) = win.document() else {
        return;
    };
    let Ok(script) = doc.create_element("script") else {
        return;
    };
    script.set_attribute("async", "true").ok();
    script.set_attribute("src", &format!("{base}matomo.js")).ok();
    if let Some(head) = doc.head() {
        head.append_child(&script).ok();
    }
}
