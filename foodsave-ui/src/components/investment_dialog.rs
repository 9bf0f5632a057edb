// SPDX-License-Identifier: MIT OR Apache-2.0

//! Investment-interest lead form.
//!
//! A trigger button opens a [`Dialog`] holding a controlled form. Submitting
//! only shows a confirmation toast: the values are wiped and never leave the
//! browser. Cancel also wipes them; dismissing the dialog (backdrop, ×,
//! Escape) keeps them for when it is reopened.

use std::rc::Rc;

use foodsave_types::{InputKind, LeadField, LeadForm};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analytics::{track_cta, CtaEvent};
use crate::components::dialog::Dialog;
use crate::context::Notifier;
use crate::styles::BRAND_GRADIENT;

pub const SUBMITTED_TITLE: &str = "Заявка отправлена!";
pub const SUBMITTED_DESCRIPTION: &str =
    "Мы свяжемся с вами в ближайшее время для обсуждения инвестиционных возможностей.";

const INPUT_CLASS: &str = "flex h-10 w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm \
     placeholder:text-gray-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-teal-600";
const TEXTAREA_CLASS: &str = "flex min-h-[80px] w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm \
     placeholder:text-gray-400 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-teal-600";

fn label(field: LeadField) -> &'static str {
    match field {
        LeadField::Name => "Имя и фамилия *",
        LeadField::Email => "Email *",
        LeadField::Company => "Компания",
        LeadField::Phone => "Телефон",
        LeadField::InvestmentAmount => "Планируемая сумма инвестиций",
        LeadField::Message => "Дополнительная информация",
    }
}

fn placeholder(field: LeadField) -> &'static str {
    match field {
        LeadField::Name => "Введите ваше имя",
        LeadField::Email => "your@email.com",
        LeadField::Company => "Название компании",
        LeadField::Phone => "+998 XX XXX XX XX",
        LeadField::InvestmentAmount => "$100,000",
        LeadField::Message => "Расскажите о ваших инвестиционных интересах...",
    }
}

pub fn field_id(field: LeadField) -> String {
    format!("lead-{}", field.html_name())
}

#[derive(Debug, Default, PartialEq)]
struct LeadFormState(LeadForm);

enum LeadFormAction {
    Edit(LeadField, String),
    Reset,
}

impl Reducible for LeadFormState {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LeadFormAction::Edit(field, value) => {
                if self.0.get(field) == value {
                    return self;
                }
                let mut form = self.0.clone();
                form.set(field, value);
                Rc::new(Self(form))
            }
            LeadFormAction::Reset => {
                if self.0.is_empty() {
                    self
                } else {
                    Rc::new(Self::default())
                }
            }
        }
    }
}

/// Current value of the `<input>` or `<textarea>` that fired `e`.
fn event_value(e: &InputEvent) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    e.target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

#[derive(Properties, PartialEq)]
pub struct InvestmentDialogProps {
    #[prop_or_default]
    pub default_open: bool,
}

#[function_component(InvestmentDialog)]
pub fn investment_dialog(props: &InvestmentDialogProps) -> Html {
    let notifier = use_context::<Notifier>();
    let open = use_state(|| props.default_open);
    let form = use_reducer(LeadFormState::default);

    let on_trigger = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            track_cta(CtaEvent::InvestNow);
            open.set(true);
        })
    };

    let on_open_change = {
        let open = open.clone();
        Callback::from(move |value: bool| open.set(value))
    };

    let on_cancel = {
        let open = open.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.dispatch(LeadFormAction::Reset);
            open.set(false);
        })
    };

    let on_submit = {
        let open = open.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let missing = form.0.missing_required();
            if !missing.is_empty() {
                log::warn!("Lead form submitted without required fields: {missing:?}");
                return;
            }
            match &notifier {
                Some(notifier) => notifier.notify(SUBMITTED_TITLE, SUBMITTED_DESCRIPTION),
                None => log::warn!("No notifier in context; lead confirmation not shown"),
            }
            log::info!("Investment lead captured");
            track_cta(CtaEvent::LeadSubmitted);
            form.dispatch(LeadFormAction::Reset);
            open.set(false);
        })
    };

    let view_field = |field: LeadField| -> Html {
        let id = field_id(field);
        let dispatcher = form.dispatcher();
        let oninput = Callback::from(move |e: InputEvent| {
            if let Some(value) = event_value(&e) {
                dispatcher.dispatch(LeadFormAction::Edit(field, value));
            }
        });
        let value = form.0.get(field).to_string();
        let control = match field.input_kind() {
            InputKind::Multiline => html! {
                <textarea
                    id={id.clone()}
                    name={field.html_name()}
                    class={TEXTAREA_CLASS}
                    placeholder={placeholder(field)}
                    rows="3"
                    required={field.is_required()}
                    {value}
                    {oninput}
                />
            },
            kind => html! {
                <input
                    id={id.clone()}
                    name={field.html_name()}
                    type={kind.html_type().unwrap_or("text")}
                    class={INPUT_CLASS}
                    placeholder={placeholder(field)}
                    required={field.is_required()}
                    {value}
                    {oninput}
                />
            },
        };
        html! {
            <div class="space-y-2" key={field.html_name()}>
                <label for={id} class="text-sm font-medium">{ label(field) }</label>
                { control }
            </div>
        }
    };

    html! {
        <>
            <button
                type="button"
                class="invest-now-trigger pulse-glow text-white px-8 py-4 rounded-xl font-bold text-lg hover:scale-105 transition-all duration-300 shadow-lg"
                style={BRAND_GRADIENT}
                onclick={on_trigger}
            >
                {"Инвестировать сейчас"}
            </button>
            <Dialog
                open={*open}
                {on_open_change}
                id="investment-dialog"
                title="Инвестиционная заявка"
                description={Some(AttrValue::from("Заполните форму, и мы свяжемся с вами для обсуждения инвестиционных возможностей"))}
            >
                <form class="lead-form space-y-4 mt-4" onsubmit={on_submit}>
                    { for LeadField::ALL.into_iter().map(view_field) }
                    <div class="flex gap-3 pt-4">
                        <button type="submit" class="lead-submit flex-1 rounded-md px-4 py-2 text-white font-semibold" style={BRAND_GRADIENT}>
                            {"Отправить заявку"}
                        </button>
                        <button type="button" class="lead-cancel rounded-md border border-gray-300 px-4 py-2" onclick={on_cancel}>
                            {"Отмена"}
                        </button>
                    </div>
                </form>
            </Dialog>
        </>
    }
}
