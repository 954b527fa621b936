//! Floating live-activity widget: a ghost bubble that flashes on each cycle,
//! expandable into a card showing the current event.

use leptos::prelude::*;

use crate::content::pulse_events::pulse_event;
use crate::state::pulse::PulseState;

#[component]
pub fn LivePulse() -> impl IntoView {
    let pulse = RwSignal::new(PulseState::default());

    #[cfg(feature = "hydrate")]
    let ticker = {
        use crate::content::pulse_events::PULSE_EVENTS;
        use crate::state::pulse::PulseTicker;
        use crate::util::timer::BrowserTimers;

        let ticker = PulseTicker::new(
            std::rc::Rc::new(BrowserTimers::default()),
            Box::new(js_sys::Math::random),
            PULSE_EVENTS.len(),
            Box::new(move |state: PulseState| pulse.set(state)),
        );
        ticker.start();
        let ticker = StoredValue::new_local(ticker);
        on_cleanup(move || ticker.dispose());
        ticker
    };

    let set_expanded = move |expanded: bool| {
        #[cfg(feature = "hydrate")]
        ticker.with_value(|t| t.set_expanded(expanded));
        #[cfg(not(feature = "hydrate"))]
        pulse.update(|s| {
            s.expanded = expanded;
            s.flash = false;
        });
    };

    view! {
        <div class="live-pulse">
            {move || {
                let state = pulse.get();
                if state.expanded {
                    let event = pulse_event(state.index);
                    view! {
                        <div class=format!("pulse-card accent-{}", event.accent)>
                            <button class="pulse-card__close" aria-label="Cerrar" on:click=move |_| set_expanded(false)>
                                "✕"
                            </button>
                            <div class="pulse-card__badge">
                                <span class="dot dot--ping dot--green"></span>
                                "Live Activity"
                            </div>
                            <h4>"Nuevo Partner Verificado"</h4>
                            <p class="muted">
                                <strong>{event.industry}</strong>
                                {format!(" en {} {}.", event.location, event.action)}
                            </p>
                            <div class="pulse-card__metric accent-text">"↗ " {event.metric}</div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            class=if state.flash { "pulse-bubble pulse-bubble--flash" } else { "pulse-bubble" }
                            aria-label="Actividad en vivo"
                            on:click=move |_| set_expanded(true)
                        >
                            <span class="dot dot--ping pulse-bubble__dot"></span>
                            "⚡"
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
