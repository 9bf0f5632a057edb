// SPDX-License-Identifier: MIT OR Apache-2.0

//! The single page of the site.

use yew::prelude::*;

use crate::components::sections::{
    CallToAction, EnvironmentalImpact, GlobalWaste, Hero, HowItWorks, InvestmentOpportunity,
    Market, Solution,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing min-h-screen bg-background">
            <Hero />
            <GlobalWaste />
            <Market />
            <EnvironmentalImpact />
            <InvestmentOpportunity />
            <HowItWorks />
            <Solution />
            <CallToAction />
        </main>
    }
}
