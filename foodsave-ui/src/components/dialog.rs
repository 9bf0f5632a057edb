// SPDX-License-Identifier: MIT OR Apache-2.0

//! Modal dialog primitive.
//!
//! Visibility is controlled by the parent through `open`. The dialog asks
//! to be closed by emitting `false` on `on_open_change` when the backdrop,
//! the close button or `Escape` is used. It never closes itself.

use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
    /// Prefix for the title/description element ids.
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let panel_ref = use_node_ref();

    // Escape is only seen from inside the backdrop, so focus the panel on open.
    {
        let panel_ref = panel_ref.clone();
        use_effect_with(props.open, move |open| {
            if *open {
                if let Some(panel) = panel_ref.cast::<HtmlElement>() {
                    if let Err(e) = panel.focus() {
                        log::debug!("Could not focus dialog: {e:?}");
                    }
                }
            }
            || ()
        });
    }

    let on_backdrop_click = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_open_change.emit(false);
        })
    };

    let on_panel_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_keydown = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                on_open_change.emit(false);
            }
        })
    };

    if !props.open {
        return html! {};
    }

    let title_id = format!("{}-title", props.id);
    let description_id = format!("{}-description", props.id);

    html! {
        <div class="dialog-backdrop fixed inset-0 z-50 bg-black/80 flex items-center justify-center" onclick={on_backdrop_click} onkeydown={on_keydown}>
            <div
                class="dialog-panel relative w-full max-w-md rounded-lg border bg-white p-6 shadow-lg outline-none"
                ref={panel_ref}
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                aria-labelledby={title_id.clone()}
                aria-describedby={props.description.as_ref().map(|_| description_id.clone())}
                onclick={on_panel_click}
            >
                <button
                    type="button"
                    class="dialog-close absolute right-4 top-4 opacity-70 hover:opacity-100"
                    aria-label="Закрыть"
                    onclick={props.on_open_change.reform(|_: MouseEvent| false)}
                >
                    {"×"}
                </button>
                <div class="dialog-header flex flex-col space-y-1.5 text-center">
                    <h2 id={title_id} class="text-2xl font-bold text-center">{ props.title.clone() }</h2>
                    if let Some(description) = &props.description {
                        <p id={description_id} class="text-sm text-gray-500 text-center">{ description.clone() }</p>
                    }
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}
