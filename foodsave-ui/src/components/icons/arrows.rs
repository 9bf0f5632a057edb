// SPDX-License-Identifier: MIT OR Apache-2.0

use yew::prelude::*;

#[derive(Properties, Debug, PartialEq)]
pub struct ArrowIconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ArrowLeftIcon)]
pub fn arrow_left_icon(props: &ArrowIconProps) -> Html {
    html! {
        <svg class={props.class.clone()} fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
        </svg>
    }
}

#[function_component(ArrowRightIcon)]
pub fn arrow_right_icon(props: &ArrowIconProps) -> Html {
    html! {
        <svg class={props.class.clone()} fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
        </svg>
    }
}
