//! Industry strategy showcase: sidebar selection + holographic detail panel.

use leptos::prelude::*;

use crate::content::strategies::{DEFAULT_STRATEGY_ID, STRATEGIES, strategy_by_id};

#[component]
pub fn StrategyShowcase() -> impl IntoView {
    let selected = RwSignal::new(DEFAULT_STRATEGY_ID);
    let profile = move || strategy_by_id(selected.get());

    view! {
        <section id="case-studies" class="showcase">
            <div class="container">
                <div class="section-heading">
                    <span class="eyebrow">"Apolo Intelligence Center"</span>
                    <h2>"Simulador de " <span class="text-gradient">"Estrategia"</span></h2>
                </div>
                <div class="showcase__grid">
                    <div class="showcase__sidebar">
                        {STRATEGIES
                            .iter()
                            .map(|s| {
                                let id = s.id;
                                view! {
                                    <button
                                        class=move || {
                                            if selected.get() == id {
                                                format!("showcase__tab showcase__tab--active accent-{}", s.accent)
                                            } else {
                                                "showcase__tab".to_owned()
                                            }
                                        }
                                        on:click=move |_| selected.set(id)
                                    >
                                        <span class="showcase__tab-label">{s.label}</span>
                                        <span class="showcase__tab-sub">{s.sub}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="showcase__panel">
                        <div class="showcase__status">
                            <span>"ENCRYPTION: AES-256"</span>
                            <span class="badge">"STATUS: VERIFIED"</span>
                        </div>
                        {move || {
                            let p = profile();
                            view! {
                                <div class=format!("showcase__detail accent-{}", p.accent)>
                                    <div class="showcase__header">
                                        <div>
                                            <h3>{p.strategy}</h3>
                                            <p class="muted">{p.mechanic}</p>
                                        </div>
                                        <div class="showcase__stat">
                                            <div class="eyebrow">"Impacto Auditado"</div>
                                            <div class="showcase__stat-value accent-text">{p.stat}</div>
                                            <div class="muted">{p.stat_label}</div>
                                        </div>
                                    </div>
                                    <div class="showcase__visual">
                                        <div class="showcase__overlay">
                                            <div>"DATA_POINTS: 1,402"</div>
                                            <div>"OPTIMIZATION: ACTIVE"</div>
                                        </div>
                                        <div class="showcase__bars">
                                            {p.visual
                                                .bar_heights()
                                                .into_iter()
                                                .map(|h| view! { <div class="showcase__bar accent-bg" style=format!("height: {h}%")></div> })
                                                .collect_view()}
                                        </div>
                                    </div>
                                    <div class="showcase__footer">
                                        <div class="tag-row">
                                            <span class="eyebrow">"Tech Stack:"</span>
                                            {p.stack.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
                                        </div>
                                        <a class="button button--ghost" href="#audit">"Descargar Protocolo"</a>
                                    </div>
                                </div>
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
