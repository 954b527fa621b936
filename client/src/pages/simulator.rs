//! Growth simulator ("GROWTH REACTOR"): revenue and ad-spend sliders, protocol
//! selection, and an annual projection counter.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use leptos::prelude::*;

use crate::components::simulator_controls::{JackpotCounter, PlasmaSlider};
use crate::content::protocols::{PROTOCOLS, protocol_info};
use crate::state::simulator::SimulatorState;
use crate::util::format::signed_percent;
use crate::util::simulator::{AD_SPEND_RANGE, REVENUE_RANGE};

pub const DEPLOYED_BANNER: &str = "PROTOCOL INITIATED. WELCOME TO APOLO OS.";

/// Closes the CTA processing window once the delay elapses.
///
/// Returns the deployed protocol, or `None` when the page was left while
/// processing and the signal is already disposed.
#[cfg(any(test, feature = "hydrate"))]
fn complete_deploy(sim: RwSignal<SimulatorState>) -> Option<&'static str> {
    sim.try_update(SimulatorState::finish_deploy)?;
    sim.try_with_untracked(|s| s.protocol.as_str())
}

#[component]
pub fn SimulatorPage() -> impl IntoView {
    let sim = RwSignal::new(SimulatorState::default());

    let info = move || sim.with(|s| protocol_info(s.protocol));
    let projection = Memo::new(move |_| sim.with(SimulatorState::projection));
    let annual = Signal::derive(move || projection.get().annual);

    let on_deploy = move |_: leptos::ev::MouseEvent| {
        let mut started = false;
        sim.update(|s| started = s.begin_deploy());
        #[cfg(feature = "hydrate")]
        if started {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::util::simulator::CTA_PROCESSING_MS).await;
                if let Some(protocol) = complete_deploy(sim) {
                    leptos::logging::log!("simulator protocol {protocol} initiated");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = started;
    };

    view! {
        <div
            class=move || format!("simulator accent-{}", info().accent)
            style=move || format!("--accent: {};", info().base_color)
        >
            <aside class="simulator__controls">
                <a class="back-link" href="/">"✕ Abortar Simulación"</a>
                <h2 class="simulator__title">"GROWTH" <br/> <span class="accent-text">"REACTOR_v4"</span></h2>
                <PlasmaSlider
                    label="Ingreso Mensual Actual"
                    range=REVENUE_RANGE
                    value=Signal::derive(move || sim.with(|s| s.revenue))
                    on_change=Callback::new(move |v: f64| sim.update(|s| s.set_revenue(v)))
                />
                <PlasmaSlider
                    label="Inversión Ads (Mes)"
                    range=AD_SPEND_RANGE
                    value=Signal::derive(move || sim.with(|s| s.ad_spend))
                    on_change=Callback::new(move |v: f64| sim.update(|s| s.set_ad_spend(v)))
                />
                <span class="eyebrow">"Protocolo de Reacción"</span>
                <div class="protocol-list">
                    {PROTOCOLS
                        .iter()
                        .map(|p| {
                            let id = p.id;
                            view! {
                                <button
                                    class=move || {
                                        if sim.with(|s| s.protocol == id) {
                                            format!("protocol protocol--active accent-{}", p.accent)
                                        } else {
                                            "protocol".to_owned()
                                        }
                                    }
                                    on:click=move |_| sim.update(|s| s.select(id))
                                >
                                    <span class="protocol__name">{p.name}</span>
                                    <Show when=move || sim.with(|s| s.protocol == id)>
                                        <span class="protocol__tagline">{p.tagline}</span>
                                    </Show>
                                    <span class="protocol__description">{p.description}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </aside>
            <main class="simulator__stage">
                <div class="result-card">
                    <h3 class="eyebrow">"Proyección Anual Ecosistema"</h3>
                    <div class="result-card__value accent-text">"$" <JackpotCounter value=annual/></div>
                    <div class="pill pill--green">
                        {move || format!("▲ {} Crecimiento Explosivo", signed_percent(projection.get().growth_percentage))}
                    </div>
                    <div class="compare-bars">
                        <div class="compare-bars__current">"ACTUAL"</div>
                        <div class="compare-bars__projected accent-gradient"></div>
                    </div>
                    <button
                        class="cta accent-gradient"
                        disabled=move || sim.with(|s| s.processing)
                        on:click=on_deploy
                    >
                        {move || if sim.with(|s| s.processing) { "INICIALIZANDO..." } else { info().cta }}
                    </button>
                    <Show when=move || sim.with(|s| s.deployed)>
                        <p class="deployed-banner" role="status">{DEPLOYED_BANNER}</p>
                    </Show>
                    <p class="footnote">
                        "*Estimación basada en data histórica de clientes Apolo con configuraciones similares."
                    </p>
                </div>
            </main>
        </div>
    }
}
