// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_types::content::{INVESTMENT_ADVANTAGES, INVESTMENT_FIGURES};
use yew::prelude::*;

use crate::styles::{BRAND_GRADIENT_LIGHT, IMPACT_NUMBER, STAT_CARD};

/// Business impact and the numbered investment advantages.
#[function_component(InvestmentOpportunity)]
pub fn investment_opportunity() -> Html {
    html! {
        <section class="investment py-20 bg-gradient-to-br from-gray-900 to-gray-800 text-white">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="slide-in-left">
                        <h2 class="text-4xl font-bold mb-6">{"Инвестиционная возможность"}</h2>
                        <p class="text-xl mb-8 opacity-90">
                            {"FoodSave решает глобальную проблему пищевых отходов с помощью инновационной \
                              технологии, создавая экономическую ценность для всех участников."}
                        </p>

                        <div class="space-y-6">
                            { for INVESTMENT_ADVANTAGES.iter().enumerate().map(|(i, advantage)| html! {
                                <div class="investment-advantage flex items-center space-x-4" key={advantage.title}>
                                    <div class="w-12 h-12 rounded-full flex items-center justify-center font-bold text-lg" style={BRAND_GRADIENT_LIGHT}>
                                        { (i + 1).to_string() }
                                    </div>
                                    <div>
                                        <h3 class="font-bold text-lg">{ advantage.title }</h3>
                                        <p class="opacity-80">{ advantage.caption }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="slide-in-right">
                        <img
                            src="/assets/business-impact.jpg"
                            alt="Business impact and investment opportunity"
                            class="rounded-2xl shadow-2xl w-full floating-animation"
                        />

                        <div class="mt-8 grid grid-cols-2 gap-6">
                            { for INVESTMENT_FIGURES.iter().map(|figure| html! {
                                <div class="rounded-xl p-6 text-center" style={STAT_CARD} key={figure.value}>
                                    <div class="text-3xl font-bold mb-2" style={IMPACT_NUMBER}>{ figure.value }</div>
                                    <p class="text-sm opacity-90">{ figure.caption }</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
