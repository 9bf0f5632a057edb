// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_types::content::HERO_FIGURES;
use yew::prelude::*;

use crate::styles::{BRAND_GRADIENT, IMPACT_NUMBER, STAT_CARD};

/// Full-height opening section with the three headline figures.
#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero relative min-h-screen flex items-center justify-center text-white overflow-hidden" style={BRAND_GRADIENT}>
            <div class="absolute inset-0 bg-black/20"></div>
            <div
                class="absolute inset-0 bg-cover bg-center opacity-20"
                style="background-image: url('/assets/food-waste-hero.jpg');"
            ></div>

            <div class="relative z-10 max-w-6xl mx-auto px-6 text-center">
                <div class="slide-in-left">
                    <p class="text-lg font-medium mb-4 text-yellow-300">{"ФАКТЫ О ПИЩЕВЫХ ОТХОДАХ"}</p>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        {"О ПИЩЕВЫХ"}<br />
                        <span class="impact-number">{"ОТХОДАХ"}</span>
                    </h1>
                    <p class="text-xl md:text-2xl max-w-4xl mx-auto leading-relaxed mb-12">
                        {"Пищевые отходы — это глобальный вызов. Понимание масштабов и воздействия помогает нам \
                          сделать реальную разницу к лучшему. Давайте погрузимся в факты и статистику."}
                    </p>
                </div>

                <div class="slide-in-right grid md:grid-cols-3 gap-8 mt-16">
                    { for HERO_FIGURES.iter().map(|figure| html! {
                        <div class="hero-figure rounded-2xl p-8 pulse-glow" style={STAT_CARD} key={figure.value}>
                            <div class="text-4xl font-bold mb-2" style={IMPACT_NUMBER}>{ figure.value }</div>
                            <p class="text-lg">{ figure.caption }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
