// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_types::content::ENVIRONMENT_IMPACT;
use yew::prelude::*;

use crate::styles::{heading_text, tinted_card};

#[function_component(EnvironmentalImpact)]
pub fn environmental_impact() -> Html {
    html! {
        <section class="environment py-20 bg-white">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl font-bold text-gray-900 mb-6">{"Экологическое воздействие"}</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        {"Пищевые отходы не только экономическая проблема, но и один из крупнейших \
                          источников выбросов парниковых газов."}
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for ENVIRONMENT_IMPACT.iter().map(|impact| {
                        let (card, value, caption) = tinted_card(impact.tone);
                        html! {
                            <div class={classes!("impact-card", "bg-gradient-to-br", "p-8", "rounded-2xl", "text-center", "border", card)} key={impact.title}>
                                <div class={classes!("text-4xl", "font-bold", "mb-4", value)}>{ impact.value }</div>
                                <h3 class={classes!("font-bold", "mb-2", heading_text(impact.tone))}>{ impact.title }</h3>
                                <p class={caption}>{ impact.caption }</p>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
