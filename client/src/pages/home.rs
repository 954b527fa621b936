//! Landing page.

use leptos::prelude::*;

use crate::components::{
    contact::Contact, footer::Footer, header::Header, hero::Hero, live_pulse::LivePulse,
    strategy_showcase::StrategyShowcase, the_machine::TheMachine, tools_section::ToolsSection,
    track_record::TrackRecord,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <Header/>
            <main>
                <Hero/>
                <StrategyShowcase/>
                <ToolsSection/>
                <TheMachine/>
                <TrackRecord/>
                <Contact/>
            </main>
            <Footer/>
            <LivePulse/>
        </div>
    }
}
