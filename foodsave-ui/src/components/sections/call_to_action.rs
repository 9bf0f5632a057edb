// SPDX-License-Identifier: MIT OR Apache-2.0

use foodsave_types::content::CALL_TO_ACTION_FIGURES;
use yew::prelude::*;

use crate::components::investment_dialog::InvestmentDialog;
use crate::hooks::use_ctas;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let ctas = use_ctas();
    let on_learn_more = ctas.scroll_to_solution.reform(|_: MouseEvent| ());

    html! {
        <section class="call-to-action py-20 bg-white">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <h2 class="text-4xl font-bold text-gray-900 mb-6">
                    {"Присоединяйтесь к революции против пищевых отходов"}
                </h2>
                <p class="text-xl text-gray-600 mb-12">
                    {"Инвестируйте в будущее устойчивого питания и получите доступ к неосвоенному рынку Узбекистана."}
                </p>

                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <InvestmentDialog />
                    <button
                        type="button"
                        class="scroll-to-solution border-2 border-teal-600 text-teal-600 px-8 py-4 rounded-xl font-bold text-lg hover:bg-teal-600 hover:text-white transition-all duration-300"
                        onclick={on_learn_more}
                    >
                        {"Узнать больше"}
                    </button>
                </div>

                <div class="mt-12 grid md:grid-cols-3 gap-8 text-center">
                    { for CALL_TO_ACTION_FIGURES.iter().map(|figure| html! {
                        <div key={figure.caption}>
                            <div class="text-3xl font-bold text-teal-600 mb-2">{ figure.value }</div>
                            <p class="text-gray-600">{ figure.caption }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
