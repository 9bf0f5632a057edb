// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-to-action helpers: external links and in-page scrolling.

use gloo_utils::{document, window};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::analytics::{track_cta, CtaEvent};
use crate::constants::{google_play_url, learn_more_url, SOLUTION_SECTION_ID};

/// Open `url` in a new tab. Failures (e.g. a popup blocker) are logged.
pub fn open_external(url: &str) {
    match window().open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => log::debug!("Opened {url}"),
        Ok(None) => log::warn!("Browser refused to open {url}"),
        Err(e) => log::error!("Failed to open {url}: {e:?}"),
    }
}

pub fn open_google_play() {
    open_external(&google_play_url());
}

/// Smoothly scroll the element with `id` into view, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        log::debug!("No section with id {id}; nothing to scroll to");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Callbacks for the page's calls to action.
///
/// The link targets are resolved from the runtime config once, when the
/// hook first runs, and reused for every click.
#[derive(Clone, PartialEq)]
pub struct Ctas {
    pub google_play_url: AttrValue,
    pub learn_more_url: AttrValue,
    pub open_google_play: Callback<()>,
    pub open_learn_more: Callback<()>,
    pub scroll_to_solution: Callback<()>,
}

#[hook]
pub fn use_ctas() -> Ctas {
    let ctas = use_memo((), |_| {
        let google_play = AttrValue::from(google_play_url());
        let learn_more = AttrValue::from(learn_more_url());
        Ctas {
            open_google_play: {
                let url = google_play.clone();
                Callback::from(move |_| {
                    track_cta(CtaEvent::InstallApp);
                    open_external(&url);
                })
            },
            open_learn_more: {
                let url = learn_more.clone();
                Callback::from(move |_| {
                    track_cta(CtaEvent::LearnMore);
                    open_external(&url);
                })
            },
            scroll_to_solution: Callback::from(|_| {
                track_cta(CtaEvent::ScrollToSolution);
                scroll_to_section(SOLUTION_SECTION_ID);
            }),
            google_play_url: google_play,
            learn_more_url: learn_more,
        }
    });
    (*ctas).clone()
}
