// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_types::content::SOLUTION_AUDIENCES;
use yew::prelude::*;

use crate::constants::SOLUTION_SECTION_ID;
use crate::styles::{badge_background, BRAND_GRADIENT_LIGHT, STAT_CARD};

/// Scroll target of the call-to-action "learn more" button.
#[function_component(Solution)]
pub fn solution() -> Html {
    html! {
        <section id={SOLUTION_SECTION_ID} class="solution py-20 text-white" style={BRAND_GRADIENT_LIGHT}>
            <div class="max-w-6xl mx-auto px-6 text-center">
                <h2 class="text-4xl font-bold mb-6">{"Наше решение"}</h2>
                <p class="text-xl mb-12 max-w-3xl mx-auto opacity-90">
                    {"FoodSave соединяет рестораны, кафе и магазины с потребителями, \
                      помогая спасти качественную еду от выбрасывания."}
                </p>

                <div class="grid md:grid-cols-3 gap-8">
                    { for SOLUTION_AUDIENCES.iter().map(|audience| html! {
                        <div class="solution-card rounded-2xl p-8" style={STAT_CARD} key={audience.title}>
                            <div class={classes!(
                                "w-16", "h-16", "rounded-full", "mx-auto", "mb-6", "flex", "items-center",
                                "justify-center", "text-2xl", badge_background(audience.tone)
                            )}>
                                { audience.icon.unwrap_or_default() }
                            </div>
                            <h3 class="text-xl font-bold mb-4">{ audience.title }</h3>
                            <p class="opacity-90">{ audience.caption }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
