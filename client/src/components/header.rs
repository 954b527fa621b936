//! Fixed site header with anchor navigation and a mobile menu.

use leptos::prelude::*;

use crate::state::ui::UiState;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#tools", "Herramientas"),
    ("#roadmap", "Metodología"),
    ("#case-studies", "Casos de Éxito"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            ui.maybe_update(|u| u.on_scroll(y));
        });
        on_cleanup(move || handle.remove());
    }

    let close_menu = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_mobile_menu);

    view! {
        <header class=move || ui.with(UiState::header_class)>
            <div class="container site-header__bar">
                <a href="/" class="brand">
                    "Apol"<span class="brand__mark">"∞"</span>"rdonez"
                </a>
                <nav class="site-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a class="site-nav__link" href=*href>{*label}</a> })
                        .collect_view()}
                    <a class="site-nav__cta" href="#audit">"Agendar Diagnóstico"</a>
                </nav>
                <button
                    class="site-header__toggle"
                    aria-label="Menú"
                    on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                >
                    {move || if ui.with(|u| u.mobile_menu_open) { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.with(|u| u.mobile_menu_open)>
                <nav class="mobile-nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! { <a class="mobile-nav__link" href=*href on:click=close_menu>{*label}</a> }
                        })
                        .collect_view()}
                    <a class="mobile-nav__link mobile-nav__link--cta" href="#audit" on:click=close_menu>
                        "Agendar Diagnóstico"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
