// SPDX-License-Identifier: MIT OR Apache-2.0

//! Toast notifications.
//!
//! `ToastProvider` owns the queue, exposes a [`Notifier`] through context
//! and renders the visible toasts in a fixed viewport. Each toast dismisses
//! itself after [`TOAST_DURATION_MS`].

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::constants::TOAST_DURATION_MS;
use crate::context::{Notifier, Toast, ToastAction, ToastQueue};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let notifier = {
        let dispatcher = queue.dispatcher();
        use_memo((), move |_| Notifier::from_dispatcher(dispatcher))
    };

    let on_dismiss = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            { props.children.clone() }
            <div class="toast-viewport fixed bottom-4 right-4 z-[100] flex flex-col gap-2 w-full max-w-sm">
                { for queue.toasts().iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let id = props.toast.id;
    let dismiss = props.on_dismiss.reform(move |_: MouseEvent| id);

    html! {
        <div class="toast rounded-lg border bg-white text-gray-900 shadow-lg p-4 pr-8 relative" role="status" aria-live="polite">
            <div class="toast-title text-sm font-semibold">{ props.toast.title.clone() }</div>
            <div class="toast-description text-sm opacity-90">{ props.toast.description.clone() }</div>
            <button
                type="button"
                class="toast-close absolute right-2 top-2 text-gray-500 hover:text-gray-900"
                aria-label="Закрыть"
                onclick={dismiss}
            >
                {"×"}
            </button>
        </div>
    }
}
