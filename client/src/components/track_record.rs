//! Track record: audited case-study cards.

use leptos::prelude::*;

use crate::content::cases::CASE_STUDIES;

#[component]
pub fn TrackRecord() -> impl IntoView {
    view! {
        <section class="track-record">
            <div class="container">
                <div class="section-heading">
                    <h2>"Track Record Probado"</h2>
                    <p class="muted">
                        "No vendemos humo. Vendemos resultados auditables en sectores de alta complejidad regulatoria y técnica."
                    </p>
                </div>
                <div class="case-grid">
                    {CASE_STUDIES
                        .iter()
                        .enumerate()
                        .map(|(i, study)| {
                            view! {
                                <article class="case-card" data-client=study.client_type>
                                    <div class="case-card__top">
                                        <span class="pill">{study.industry}</span>
                                        <span class="case-card__icon">{if i == 0 { "🏆" } else { "📈" }}</span>
                                    </div>
                                    <span class="case-card__value">{study.value}</span>
                                    <span class="eyebrow">{study.metric}</span>
                                    <p>{study.description}</p>
                                    <div class="tag-row">
                                        {study.tags.iter().map(|t| view! { <span class="tag">{*t}</span> }).collect_view()}
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
