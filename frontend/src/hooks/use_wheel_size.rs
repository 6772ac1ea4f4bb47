use gloo_events::EventListener;
use shared::wheel_layout::wheel_size_for_viewport;
use web_sys::window;
use yew::prelude::*;

const FALLBACK_WHEEL_SIZE: f64 = 400.0;

fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

fn current_wheel_size() -> f64 {
    viewport_width()
        .map(wheel_size_for_viewport)
        .unwrap_or(FALLBACK_WHEEL_SIZE)
}

/// Wheel diameter for the current window, updated on resize.
#[hook]
pub fn use_wheel_size() -> f64 {
    let size = use_state(current_wheel_size);

    {
        let size = size.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|w| {
                EventListener::new(&w, "resize", move |_| {
                    size.set(current_wheel_size());
                })
            });

            move || drop(listener)
        });
    }

    *size
}
