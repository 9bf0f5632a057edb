// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_types::content::MARKET_HIGHLIGHTS;
use yew::prelude::*;

use crate::styles::{BRAND_GRADIENT, IMPACT_NUMBER, STAT_CARD};

/// The Uzbekistan market opportunity.
#[function_component(Market)]
pub fn market() -> Html {
    html! {
        <section class="market py-20 text-white" style={BRAND_GRADIENT}>
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        {"Узбекистан: "}<span class="text-yellow-300">{"Неосвоенный рынок"}</span>
                    </h2>
                    <p class="text-xl max-w-3xl mx-auto">
                        {"Мы первые, кто интегрирует технологию борьбы с пищевыми отходами в Узбекистане. \
                          Огромная возможность для инвесторов."}
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="slide-in-left">
                        <img
                            src="/assets/uzbekistan-stats.jpg"
                            alt="Uzbekistan food waste statistics"
                            class="rounded-2xl shadow-2xl w-full"
                        />
                    </div>

                    <div class="slide-in-right space-y-8">
                        { for MARKET_HIGHLIGHTS.iter().map(|highlight| html! {
                            <div class="market-highlight rounded-2xl p-8" style={STAT_CARD} key={highlight.title}>
                                <div class="text-5xl font-bold mb-4" style={IMPACT_NUMBER}>{ highlight.value }</div>
                                <h3 class="text-2xl font-bold mb-2">{ highlight.title }</h3>
                                <p class="text-lg opacity-90">{ highlight.caption }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
