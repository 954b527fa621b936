//! Legal transparency hub: manifesto, terms and privacy rendered from
//! Markdown, with a sidebar that tracks the active section.

use leptos::prelude::*;

use crate::content::legal::{DEFAULT_LEGAL_SECTION, LEGAL_SECTIONS, legal_section};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn LegalPage() -> impl IntoView {
    let active = RwSignal::new(DEFAULT_LEGAL_SECTION);

    // Deep links such as `/legal#privacy` preselect their section.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        let id = hash.trim_start_matches('#');
        if !id.is_empty() {
            active.set(legal_section(id).id);
        }
    });

    let go_to = move |id: &'static str| {
        active.set(legal_section(id).id);
        #[cfg(feature = "hydrate")]
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            opts.set_block(web_sys::ScrollLogicalPosition::Start);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    };

    view! {
        <div class="legal">
            <div class="container">
                <div class="legal__topbar">
                    <a class="back-link" href="/">"← Return to Base"</a>
                    <span class="badge">"LEGAL TRANSPARENCY HUB v1.0"</span>
                </div>
                <div class="legal__grid">
                    <nav class="legal__sidebar">
                        <p class="eyebrow">"Navigation"</p>
                        {LEGAL_SECTIONS
                            .iter()
                            .map(|section| {
                                let id = section.id;
                                view! {
                                    <button
                                        class=move || {
                                            if active.get() == id { "legal__tab legal__tab--active" } else { "legal__tab" }
                                        }
                                        on:click=move |_| go_to(id)
                                    >
                                        {section.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="legal__content">
                        {LEGAL_SECTIONS
                            .iter()
                            .map(|section| {
                                view! {
                                    <section
                                        id=section.id
                                        class="legal__section prose"
                                        inner_html=render_markdown_html(section.body_markdown)
                                    ></section>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
