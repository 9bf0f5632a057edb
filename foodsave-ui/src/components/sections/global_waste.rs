// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_types::content::WASTE_CATEGORIES;
use yew::prelude::*;

use crate::styles::{border_accent, heading_text};

#[function_component(GlobalWaste)]
pub fn global_waste() -> Html {
    html! {
        <section class="global-waste py-20 bg-gray-50">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div class="slide-in-left">
                        <h2 class="text-4xl font-bold text-gray-900 mb-6">{"Сколько еды тратится в мире?"}</h2>
                        <p class="text-lg text-gray-700 mb-8 leading-relaxed">
                            {"По данным WWF (2021), "}
                            <strong class="text-teal-700">{"40% продуктов"}</strong>
                            {", которые мы производим глобально, идет в отходы. Это означает, что "}
                            <strong class="text-teal-700">{"2,5 миллиарда тонн"}</strong>
                            {" еды тратится каждый год."}
                        </p>

                        <div class="space-y-6">
                            { for WASTE_CATEGORIES.iter().map(|category| html! {
                                <div
                                    class={classes!("waste-category", "bg-white", "p-6", "rounded-xl", "shadow-lg", "border-l-4", border_accent(category.tone))}
                                    key={category.title}
                                >
                                    <h3 class={classes!("font-bold", "mb-2", heading_text(category.tone))}>{ category.title }</h3>
                                    <p class="text-gray-600">{ category.caption }</p>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="slide-in-right floating-animation">
                        <img
                            src="/assets/food-waste-hero.jpg"
                            alt="Food waste statistics visualization"
                            class="rounded-2xl shadow-2xl w-full"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
