// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Integration tests for the full landing page.
//
// The page is rendered the same way `main` renders it: `Landing` inside the
// `ToastProvider`. Runs once with `window.__APP_CONFIG` present and once
// without it, since every config key is optional.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    cleanup, click, create_mount_point, inject_app_config, query, query_all_count,
    remove_app_config, settle, text_of,
};
use wasm_bindgen_test::*;
use yew::prelude::*;

use foodsave_ui::components::toaster::ToastProvider;
use foodsave_ui::constants::{
    google_play_url, learn_more_url, log_level, DEFAULT_GOOGLE_PLAY_URL, DEFAULT_LEARN_MORE_URL,
    HOW_IT_WORKS_SECTION_ID, SOLUTION_SECTION_ID,
};
use foodsave_ui::pages::landing::Landing;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Page)]
fn page() -> Html {
    html! {
        <ToastProvider>
            <Landing />
        </ToastProvider>
    }
}

async fn mount_page() -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Page>::with_root(mount.clone()).render();
    settle().await;
    mount
}

fn assert_sections_rendered(mount: &web_sys::Element) {
    assert_eq!(query_all_count(mount, "main.landing > section"), 8);
    assert!(query(mount, &format!("#{HOW_IT_WORKS_SECTION_ID} .step-carousel")).is_some());
    assert!(query(mount, &format!("#{SOLUTION_SECTION_ID}")).is_some());
    assert!(text_of(mount, "h1").contains("О ПИЩЕВЫХ"));
    assert_eq!(query_all_count(mount, ".hero-figure"), 3);
    assert!(text_of(mount, ".solution").contains("Наше решение"));
    assert!(query(mount, ".invest-now-trigger").is_some());
    assert!(query(mount, "[role=dialog]").is_none());
}

#[wasm_bindgen_test]
async fn renders_every_section_without_config() {
    remove_app_config();
    let mount = mount_page().await;

    assert_sections_rendered(&mount);
    assert_eq!(google_play_url(), DEFAULT_GOOGLE_PLAY_URL);
    assert_eq!(learn_more_url(), DEFAULT_LEARN_MORE_URL);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn renders_every_section_with_config() {
    inject_app_config();
    let mount = mount_page().await;

    assert_sections_rendered(&mount);
    assert_eq!(google_play_url(), "https://play.example.test/foodsave");
    assert_eq!(learn_more_url(), "https://example.test/learn-more");
    assert_eq!(log_level(), log::LevelFilter::Debug);

    cleanup(&mount);
    remove_app_config();
}

#[wasm_bindgen_test]
async fn carousel_on_the_page_starts_at_the_first_step() {
    remove_app_config();
    let mount = mount_page().await;

    assert_eq!(text_of(&mount, ".step-title").trim(), "ШАГ ПЕРВЫЙ");
    click(&mount, ".step-next");
    settle().await;
    assert_ne!(text_of(&mount, ".step-title").trim(), "ШАГ ПЕРВЫЙ");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn scroll_to_solution_keeps_the_page_intact() {
    remove_app_config();
    let mount = mount_page().await;

    click(&mount, ".scroll-to-solution");
    settle().await;
    assert_sections_rendered(&mount);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn lead_submission_from_the_page_shows_a_toast() {
    remove_app_config();
    let mount = mount_page().await;

    click(&mount, ".invest-now-trigger");
    settle().await;
    support::type_into(&mount, "#lead-name", "Ivan");
    support::type_into(&mount, "#lead-email", "ivan@example.com");
    settle().await;
    click(&mount, ".lead-submit");
    settle().await;

    assert_eq!(query_all_count(&mount, ".toast"), 1);
    assert!(query(&mount, "[role=dialog]").is_none());

    cleanup(&mount);
}
