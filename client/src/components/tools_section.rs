//! Growth tools: ROI calculator and industry roadmap generator.

use leptos::prelude::*;

use crate::content::roadmap::{ROADMAP_PLACEHOLDER, ROADMAPS, roadmap_for};
use crate::util::format::{money, signed_percent};
use crate::util::roi::{RoiInputs, RoiProjection, parse_input, project};

#[component]
pub fn ToolsSection() -> impl IntoView {
    view! {
        <section id="tools" class="tools">
            <div class="container">
                <div class="section-heading section-heading--left">
                    <h2><span class="accent-slashes">"///"</span> " Herramientas de Crecimiento"</h2>
                    <p class="muted">
                        "Utiliza nuestras herramientas propietarias para auditar tu situación actual y visualizar "
                        "el impacto de una arquitectura de Growth Hacking avanzada."
                    </p>
                </div>
                <div class="tools__grid">
                    <RoiCalculator/>
                    <RoadmapGenerator/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn NumberField(label: &'static str, placeholder: &'static str, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type="number"
                min="0"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn RoiCalculator() -> impl IntoView {
    let cac = RwSignal::new(String::new());
    let ltv = RwSignal::new(String::new());
    let leads = RwSignal::new(String::new());
    let result = RwSignal::new(None::<RoiProjection>);

    // Incomplete input keeps the previous result on screen.
    let on_calculate = move |_| {
        let inputs = RoiInputs {
            cac: parse_input(&cac.get()),
            ltv: parse_input(&ltv.get()),
            leads: parse_input(&leads.get()),
        };
        if let Some(projection) = project(inputs) {
            result.set(Some(projection));
        }
    };

    view! {
        <div id="calculator" class="card card--tool">
            <h3 class="card__title">"Calculadora de ROI Exponencial"</h3>
            <div class="field-row">
                <NumberField label="CAC Actual ($)" placeholder="ej. 50" value=cac/>
                <NumberField label="LTV Promedio ($)" placeholder="ej. 500" value=ltv/>
            </div>
            <NumberField label="Leads Mensuales" placeholder="ej. 100" value=leads/>
            <button class="button button--light button--block" on:click=on_calculate>
                "⚡ Ejecutar Simulación"
            </button>
            {move || {
                result
                    .get()
                    .map(|r| {
                        view! {
                            <div class="roi-result">
                                <div class="roi-result__grid">
                                    <div class="stat-box">
                                        <p class="eyebrow">"Profit Actual"</p>
                                        <p class="stat-box__value">{money(r.current_profit)}</p>
                                    </div>
                                    <div class="stat-box stat-box--accent">
                                        <p class="eyebrow">"Profit Potencial"</p>
                                        <p class="stat-box__value">{money(r.projected_profit)}</p>
                                    </div>
                                </div>
                                <p class="roi-result__potential">
                                    "Ingreso adicional: " {money(r.potential_revenue)}
                                </p>
                                <span class="pill pill--green">
                                    {format!("{} CRECIMIENTO ESTIMADO", signed_percent(r.growth_percentage))}
                                </span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn RoadmapGenerator() -> impl IntoView {
    let selected = RwSignal::new(None::<&'static str>);

    view! {
        <div id="roadmap" class="card card--tool">
            <h3 class="card__title">"Generador de Roadmap IA"</h3>
            <p class="muted">
                "Selecciona tu industria para generar una estrategia trimestral basada en los casos de éxito de Christopher Ordóñez."
            </p>
            <div class="chip-row">
                {ROADMAPS
                    .iter()
                    .map(|r| {
                        let industry = r.industry;
                        view! {
                            <button
                                class=move || {
                                    if selected.get() == Some(industry) { "chip chip--active" } else { "chip" }
                                }
                                on:click=move |_| selected.set(Some(industry))
                            >
                                {industry}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match selected.get().and_then(roadmap_for) {
                Some(roadmap) => {
                    view! {
                        <div class="roadmap">
                            {roadmap
                                .quarters()
                                .into_iter()
                                .map(|(quarter, phase)| {
                                    view! {
                                        <div class=format!("roadmap__item roadmap__item--{}", quarter.to_ascii_lowercase())>
                                            <div class="roadmap__meta">
                                                <span class="roadmap__quarter">{quarter}</span>
                                                <span class="tag">{phase.tech}</span>
                                            </div>
                                            <h4>{phase.title}</h4>
                                            <p class="muted">{phase.focus}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                            <p class="roadmap__footer">"JSON_RESPONSE: GENERATED SUCCESSFULLY VIA APOLO_ENGINE"</p>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <div class="roadmap-placeholder">{ROADMAP_PLACEHOLDER}</div> }.into_any(),
            }}
        </div>
    }
}
