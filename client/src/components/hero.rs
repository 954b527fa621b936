//! Landing hero with a cursor-follow spotlight.
//!
//! The spotlight is two CSS custom properties (`--spot-x`, `--spot-y`, in
//! percent of the section box) updated on mouse move; the gradient itself is
//! pure CSS.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use leptos::prelude::*;

pub const COMMUNITY_URL: &str =
    "https://9000-firebase-studio-1770326908424.cluster-r7kbxfo3fnev2vskbkhhphetq6.cloudworkstations.dev";

/// Pointer position as percentages of the element box, clamped to 0..=100.
/// An empty box centres the spotlight.
#[cfg(any(test, feature = "hydrate"))]
fn spotlight_position(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> (f64, f64) {
    let axis = |pos: f64, start: f64, len: f64| {
        if len <= 0.0 {
            50.0
        } else {
            ((pos - start) / len * 100.0).clamp(0.0, 100.0)
        }
    };
    (axis(client_x, left, width), axis(client_y, top, height))
}

fn spotlight_style(x: f64, y: f64) -> String {
    format!("--spot-x: {x:.1}%; --spot-y: {y:.1}%;")
}

#[component]
pub fn Hero() -> impl IntoView {
    let spot = RwSignal::new((50.0_f64, 30.0_f64));

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            spot.set(spotlight_position(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            ));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <section
            class="hero"
            style=move || {
                let (x, y) = spot.get();
                spotlight_style(x, y)
            }
            on:mousemove=on_mouse_move
        >
            <div class="hero__grid"></div>
            <div class="hero__spotlight"></div>
            <div class="container hero__content">
                <h1 class="hero__title">
                    "Transformamos tu Marketing en "
                    <span class="text-gradient">"Ciencia de Datos & IA"</span>
                </h1>
                <p class="hero__lead">
                    "Deja de \"comprar clics\". Empieza a comprar Ingresos Exponenciales. "
                    "Diseñamos arquitecturas de Agentes Autónomos y Embudos de Alta Conversión "
                    "para escalar agresivamente sin sacrificar rentabilidad."
                </p>
                <div class="hero__actions">
                    <a class="button button--primary" href=COMMUNITY_URL target="_blank" rel="noopener noreferrer">
                        "Ver Comunidad →"
                    </a>
                    <a class="button button--ghost" href="#calculator">
                        "Calcular Potencial de Escalamiento"
                    </a>
                </div>
                <div class="hero__scroll-hint">"Scroll to Initialize"</div>
            </div>
        </section>
    }
}
