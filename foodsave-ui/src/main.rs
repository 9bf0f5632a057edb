// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_ui::components::toaster::ToastProvider;
use foodsave_ui::constants::{app_config, log_level};
use foodsave_ui::pages::landing::Landing;
use yew::prelude::*;

#[function_component(App)]
fn app_component() -> Html {
    html! {
        <ToastProvider>
            <Landing />
        </ToastProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    // `logLevel: "off"` maps to no level at all: leave the logger unset.
    if let Some(level) = log_level().to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::error_1(&format!("Logger already initialised: {e}").into());
        }
    }
    if let Err(e) = app_config() {
        log::warn!("{e}; using built-in defaults");
    }

    foodsave_ui::analytics::init();
    yew::Renderer::<App>::new().render();
}
