// SPDX-License-Identifier: MIT OR Apache-2.0

//! "How it works" step carousel.
//!
//! Shows the active step in a detail panel and a preview panel, with
//! previous/next buttons and one indicator per step. The arrow keys drive
//! navigation while focus is anywhere inside the carousel.
//!
//! Navigation rules live in [`foodsave_types::StepCarousel`]; this component
//! only maps DOM events onto [`CarouselAction`]s and renders the result.

use std::rc::Rc;

use foodsave_types::{CarouselAction, Indicator, Step, StepCarousel as CarouselState};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::components::icons::{ArrowLeftIcon, ArrowRightIcon};
use crate::styles::STEP_TITLE;

pub enum Msg {
    Navigate {
        action: CarouselAction,
        /// The event came from an indicator, so focus should follow the
        /// selection.
        focus_indicator: bool,
    },
}

#[derive(Properties, PartialEq)]
pub struct StepCarouselProps {
    pub steps: Rc<[Step]>,
    /// Small heading above the step title.
    #[prop_or_default]
    pub eyebrow: AttrValue,
    #[prop_or_default]
    pub on_install: Callback<()>,
    #[prop_or_default]
    pub on_learn_more: Callback<()>,
}

pub struct StepCarousel {
    state: Option<CarouselState>,
    indicator_refs: Vec<NodeRef>,
    focus_selected: bool,
}

impl StepCarousel {
    fn build(steps: &Rc<[Step]>) -> (Option<CarouselState>, Vec<NodeRef>) {
        match CarouselState::new(Rc::clone(steps)) {
            Ok(state) => {
                let refs = (0..state.len()).map(|_| NodeRef::default()).collect();
                (Some(state), refs)
            }
            Err(e) => {
                log::error!("Cannot build step carousel: {e}");
                (None, Vec::new())
            }
        }
    }

    fn view_indicator(&self, ctx: &Context<Self>, indicator: Indicator) -> Html {
        let index = indicator.index;
        let selected = indicator.selected;
        let onclick = ctx.link().callback(move |_: MouseEvent| Msg::Navigate {
            action: CarouselAction::GoTo(index),
            focus_indicator: false,
        });
        let node_ref = self.indicator_refs.get(index).cloned().unwrap_or_default();

        html! {
            <button
                key={index}
                ref={node_ref}
                type="button"
                role="tab"
                class={classes!(
                    "step-indicator",
                    "w-3", "h-3", "rounded-full", "transition-all", "duration-200",
                    if selected { "selected bg-white scale-125" } else { "bg-white/50" }
                )}
                aria-label={format!("Перейти к шагу {}", indicator.number())}
                aria-selected={selected.to_string()}
                aria-current={selected.then_some("step")}
                tabindex={if selected { "0" } else { "-1" }}
                {onclick}
            />
        }
    }
}

impl Component for StepCarousel {
    type Message = Msg;
    type Properties = StepCarouselProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (state, indicator_refs) = Self::build(&ctx.props().steps);
        Self {
            state,
            indicator_refs,
            focus_selected: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        match msg {
            Msg::Navigate {
                action,
                focus_indicator,
            } => match state.apply(action) {
                Ok(changed) => {
                    if changed {
                        log::debug!("Carousel moved to step {}", state.current_index() + 1);
                        self.focus_selected = focus_indicator;
                    }
                    changed
                }
                Err(e) => {
                    log::warn!("Ignoring carousel navigation: {e}");
                    false
                }
            },
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().steps != old_props.steps {
            let (state, indicator_refs) = Self::build(&ctx.props().steps);
            self.state = state;
            self.indicator_refs = indicator_refs;
            self.focus_selected = false;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(state) = &self.state else {
            return html! {};
        };
        let props = ctx.props();
        let step = state.current();
        let previous_disabled = state.previous_disabled();
        let next_disabled = state.next_disabled();

        let on_previous = ctx.link().batch_callback(move |_: MouseEvent| {
            (!previous_disabled).then_some(Msg::Navigate {
                action: CarouselAction::Previous,
                focus_indicator: false,
            })
        });
        let on_next = ctx.link().batch_callback(move |_: MouseEvent| {
            (!next_disabled).then_some(Msg::Navigate {
                action: CarouselAction::Next,
                focus_indicator: false,
            })
        });
        let onkeydown = ctx.link().batch_callback(|e: KeyboardEvent| {
            let action = match e.key().as_str() {
                "ArrowRight" => CarouselAction::Next,
                "ArrowLeft" => CarouselAction::Previous,
                _ => return None,
            };
            e.prevent_default();
            let focus_indicator = e
                .target_dyn_into::<Element>()
                .and_then(|el| el.get_attribute("role"))
                .is_some_and(|role| role == "tab");
            Some(Msg::Navigate {
                action,
                focus_indicator,
            })
        });

        html! {
            <div class="step-carousel max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center" {onkeydown}>
                <div class="step-detail">
                    <h3 class="text-lg font-semibold text-white/80 mb-4">{ props.eyebrow.clone() }</h3>
                    <div class="step-status" aria-live="polite" role="status">
                        <h2 class="step-title text-4xl lg:text-5xl font-bold mb-6" style={STEP_TITLE}>
                            { &step.title }
                        </h2>
                        <p class="step-content text-lg text-white/90 mb-8">{ &step.content }</p>
                    </div>

                    <div class="flex items-center space-x-4">
                        <button
                            type="button"
                            class={classes!(
                                "step-previous", "text-white", "hover:bg-white/10", "p-2", "rounded-md",
                                previous_disabled.then_some("opacity-50 cursor-not-allowed")
                            )}
                            onclick={on_previous}
                            disabled={previous_disabled}
                            aria-label="Предыдущий шаг"
                        >
                            <ArrowLeftIcon class="h-6 w-6" />
                        </button>

                        <div class="step-indicators flex space-x-2" role="tablist" aria-label="Шаги">
                            { for state.indicators().map(|indicator| self.view_indicator(ctx, indicator)) }
                        </div>

                        <button
                            type="button"
                            class={classes!(
                                "step-next", "text-white", "hover:bg-white/10", "p-2", "rounded-md",
                                next_disabled.then_some("opacity-50 cursor-not-allowed")
                            )}
                            onclick={on_next}
                            disabled={next_disabled}
                            aria-label="Следующий шаг"
                        >
                            <ArrowRightIcon class="h-6 w-6" />
                        </button>
                    </div>
                </div>

                <div class="step-preview bg-white/10 backdrop-blur-sm rounded-2xl p-8 h-96 flex flex-col items-center justify-center text-center">
                    <div class="w-24 h-24 bg-white/20 rounded-full flex items-center justify-center mb-6">
                        <span class="step-icon text-4xl">{ &step.icon }</span>
                    </div>
                    <h3 class="step-preview-title text-2xl font-bold mb-4">{ &step.title }</h3>
                    <p class="step-preview-content text-white/90">{ &step.content }</p>

                    <div class="mt-8 flex space-x-4">
                        <button
                            type="button"
                            class="step-install px-6 py-3 bg-white text-primary font-semibold rounded-lg hover:bg-white/90 transition-colors"
                            onclick={props.on_install.reform(|_: MouseEvent| ())}
                        >
                            {"Скачать приложение"}
                        </button>
                        <button
                            type="button"
                            class="step-learn-more px-6 py-3 border border-white text-white font-semibold rounded-lg bg-transparent hover:bg-white/10 transition-colors"
                            onclick={props.on_learn_more.reform(|_: MouseEvent| ())}
                        >
                            {"Узнать больше"}
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !std::mem::take(&mut self.focus_selected) {
            return;
        }
        let Some(state) = &self.state else {
            return;
        };
        let target = self
            .indicator_refs
            .get(state.current_index())
            .and_then(|node| node.cast::<HtmlElement>());
        if let Some(indicator) = target {
            if let Err(e) = indicator.focus() {
                log::debug!("Could not focus step indicator: {e:?}");
            }
        }
    }
}
