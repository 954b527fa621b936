//! Audit request form ("Agendar Diagnóstico").
//!
//! Drives [`LeadFormState`]: a valid submit enters `Loading`, waits the fixed
//! beat, posts once, and lands in `Success` or `Error` with the mapped
//! message.

use leptos::prelude::*;

use crate::state::lead_form::{LeadFormState, SubmitStatus};

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(LeadFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = None;
        form.update(|f| accepted = f.begin_submit());
        let Some(submission) = accepted else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::state::lead_form::deliver(
                submission,
                gloo_timers::future::TimeoutFuture::new,
                |s| async move { crate::net::api::submit_lead(&s).await },
            )
            .await;
            if let Err(e) = &outcome {
                leptos::logging::warn!("lead submission failed: {e}");
            }
            form.update(|f| f.finish(outcome));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    let loading = move || form.with(LeadFormState::is_loading);
    let succeeded = move || form.with(|f| f.status == SubmitStatus::Success);

    view! {
        <section id="audit" class="contact">
            <div class="container contact__grid">
                <div class="contact__copy">
                    <h2>
                        "¿Listo para escalar la "
                        <span class="text-gradient">"Montaña de Ingresos?"</span>
                    </h2>
                    <p class="muted">
                        "Solo trabajamos con negocios que ya facturan y buscan multiplicar su ROI. "
                        "Agenda una sesión de diagnóstico estratégico para evaluar tu \"Product-Market Fit\" y arquitectura actual."
                    </p>
                    <div class="contact__status">
                        <span class="dot dot--ping"></span>"LIVE_SERVER_STATUS: ONLINE"
                        <span class="dot dot--blue"></span>"DB_CONNECTION: SECURE"
                    </div>
                </div>
                <div class="contact__card">
                    <Show
                        when=succeeded
                        fallback=move || {
                            view! {
                                <form class="lead-form" on:submit=on_submit>
                                    <div class="lead-form__header">
                                        <span class="eyebrow">"Secure Input // Protocol v2.1"</span>
                                        <Show when=loading>
                                            <span class="spinner"></span>
                                        </Show>
                                    </div>
                                    <label class="lead-field lead-field--email">
                                        <span class="lead-field__icon">"✉"</span>
                                        <input
                                            name="email"
                                            type="email"
                                            placeholder="Correo Corporativo"
                                            required
                                            disabled=loading
                                            prop:value=move || form.with(|f| f.email.clone())
                                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                        />
                                        <Show when=move || form.with(LeadFormState::email_check)>
                                            <span class="lead-field__check">"✓"</span>
                                        </Show>
                                    </label>
                                    <label class="lead-field lead-field--website">
                                        <span class="lead-field__icon">"🌐"</span>
                                        <input
                                            name="website"
                                            type="text"
                                            placeholder="Sitio Web de la Empresa"
                                            required
                                            disabled=loading
                                            prop:value=move || form.with(|f| f.website.clone())
                                            on:input=move |ev| form.update(|f| f.website = event_target_value(&ev))
                                        />
                                        <Show when=move || form.with(LeadFormState::website_check)>
                                            <span class="lead-field__check">"✓"</span>
                                        </Show>
                                    </label>
                                    {move || {
                                        form.with(|f| f.error_message().map(str::to_owned))
                                            .map(|msg| view! { <div class="lead-form__error" role="alert">"⚠ " {msg}</div> })
                                    }}
                                    <button
                                        type="submit"
                                        disabled=loading
                                        class=move || {
                                            if form.with(LeadFormState::button_highlighted) {
                                                "lead-form__submit lead-form__submit--ready"
                                            } else {
                                                "lead-form__submit"
                                            }
                                        }
                                    >
                                        {move || if loading() { "Procesando Datos..." } else { "Aplicar Ahora →" }}
                                    </button>
                                    <p class="lead-form__note">
                                        "Al aplicar, aceptas recibir nuestro análisis inicial gratuito y ser contactado por nuestro equipo."
                                    </p>
                                </form>
                            }
                        }
                    >
                        <div class="lead-success">
                            <div class="lead-success__icon">"✓"</div>
                            <h3>"¡Solicitud Recibida!"</h3>
                            <p class="muted">
                                "Nuestro sistema de IA está analizando tu perfil. Te contactaremos en breve."
                            </p>
                            <button class="button button--ghost" on:click=move |_| form.update(LeadFormState::reset)>
                                "Enviar otra solicitud"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </section>
    }
}
