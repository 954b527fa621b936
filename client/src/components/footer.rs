//! Site footer: brand, social links, legal links, copyright year.

use leptos::prelude::*;

use crate::util::format::current_year;

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/apoloordonez";
pub const GITHUB_URL: &str = "https://github.com/Apoloordonez11";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__top">
                    <div>
                        <h2 class="brand brand--large">"Apol"<span class="brand__mark">"∞"</span>"rdonez"</h2>
                        <p class="muted">"Estrategia Digital Full Stack & Arquitectura de Soluciones IA."</p>
                    </div>
                    <div class="site-footer__social">
                        <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                        <a href=GITHUB_URL target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    </div>
                </div>
                <div class="site-footer__bottom">
                    <p>{format!("© {} Christopher Ordoñez. Todos los derechos reservados.", current_year())}</p>
                    <div class="site-footer__links">
                        <a href="/legal#privacy">"Privacidad & Datos"</a>
                        <a href="/legal#terms">"Términos de Servicio"</a>
                        <a href="/simulator">"Growth Simulator"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
