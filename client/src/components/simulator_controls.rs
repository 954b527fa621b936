//! Growth simulator widgets: the plasma range slider and the jackpot counter.

#[cfg(test)]
#[path = "simulator_controls_test.rs"]
mod simulator_controls_test;

use leptos::prelude::*;

use crate::util::format::{group_thousands, money};
use crate::util::simulator::SliderRange;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::simulator::jackpot_step;

/// Delay between jackpot counter frames.
#[cfg(feature = "hydrate")]
const JACKPOT_FRAME_MS: u32 = 16;

#[component]
pub fn PlasmaSlider(
    label: &'static str,
    range: SliderRange,
    #[prop(into)] value: Signal<f64>,
    on_change: Callback<f64>,
) -> impl IntoView {
    let percent = move || range.percent(value.get());

    view! {
        <div class="plasma-slider">
            <div class="plasma-slider__head">
                <span class="eyebrow">{label}</span>
                <span class="plasma-slider__value">{move || money(value.get())}</span>
            </div>
            <div class="plasma-slider__track">
                <div class="plasma-slider__fill accent-gradient" style=move || format!("width: {:.2}%", percent())></div>
                <div class="plasma-slider__thumb" style=move || format!("left: {:.2}%", percent())></div>
                <input
                    class="plasma-slider__input"
                    type="range"
                    aria-label=label
                    min=range.min.to_string()
                    max=range.max.to_string()
                    prop:value=move || value.get().to_string()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        on_change.run(raw.parse::<f64>().unwrap_or(f64::NAN));
                    }
                />
            </div>
        </div>
    }
}

/// Moves the counter one easing step toward `target`.
///
/// Returns whether another frame is needed. Stops when a newer target has
/// taken over or the counter has been unmounted.
#[cfg(any(test, feature = "hydrate"))]
fn jackpot_frame(displayed: RwSignal<f64>, run: StoredValue<u64>, generation: u64, target: f64) -> bool {
    if run.try_get_value() != Some(generation) {
        return false;
    }
    let Some(current) = displayed.try_get_untracked() else {
        return false;
    };
    let next = jackpot_step(current, target);
    displayed.set(next);
    next != target
}

/// Whole-number counter that eases toward `value` whenever it changes.
///
/// Starts at the target so the server render and the hydrated view agree.
#[component]
pub fn JackpotCounter(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    let displayed = RwSignal::new(value.get_untracked());

    #[cfg(feature = "hydrate")]
    {
        let run = StoredValue::new(0_u64);
        Effect::new(move || {
            let target = value.get();
            let generation = run.get_value() + 1;
            run.set_value(generation);
            leptos::task::spawn_local(async move {
                while jackpot_frame(displayed, run, generation, target) {
                    gloo_timers::future::TimeoutFuture::new(JACKPOT_FRAME_MS).await;
                }
            });
        });
    }

    view! { <span class="jackpot">{move || group_thousands(displayed.get().floor())}</span> }
}
