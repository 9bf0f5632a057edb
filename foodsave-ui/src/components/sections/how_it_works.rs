// SPDX-License-Identifier: MIT OR Apache-2.0

use std::rc::Rc;

use foodsave_types::content::how_it_works_steps;
use foodsave_types::Step;
use yew::prelude::*;

use crate::components::step_carousel::StepCarousel;
use crate::constants::HOW_IT_WORKS_SECTION_ID;
use crate::hooks::use_ctas;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let ctas = use_ctas();
    let steps = use_memo((), |_| Rc::<[Step]>::from(how_it_works_steps()));

    html! {
        <section id={HOW_IT_WORKS_SECTION_ID} class="how-it-works w-full bg-primary text-white py-16 px-4">
            <StepCarousel
                steps={(*steps).clone()}
                eyebrow="КАК ИСПОЛЬЗОВАТЬ ПРИЛОЖЕНИЕ"
                on_install={ctas.open_google_play}
                on_learn_more={ctas.open_learn_more}
            />
        </section>
    }
}
