mod wheel_svg;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::easing::SpinAnimation;
use shared::wheel_layout::WheelDimensions;
use shared::{run_spin, RouletteSession, SpinResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::config::load_roulette_config;
use crate::hooks::use_wheel_size;
use crate::styles;
use crate::timer::BrowserTimer;

use wheel_svg::WheelSvg;
use wheel_utils::{CategoryChips, ResultDisplay, SpinButton};

// Add custom CSS for animations
const CUSTOM_CSS: &str = r#"
@keyframes popup-in {
    0% {
        opacity: 0;
        transform: translateY(12px) scale(0.96);
    }
    100% {
        opacity: 1;
        transform: translateY(0) scale(1);
    }
}

.animate-popup-in {
    animation: popup-in 0.35s ease-out both;
}
"#;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(frame: &FrameCallback) {
    if let (Some(window), Some(callback)) = (window(), frame.borrow().as_ref()) {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drives the displayed rotation along the easing curve, one frame at a time.
/// Stops without painting once the session has swapped or rewound the wheel.
fn animate_wheel(
    animation: SpinAnimation,
    rotation: UseStateHandle<f64>,
    session: Rc<RefCell<RouletteSession>>,
) {
    let start_time = js_sys::Date::now();
    let generation = session.borrow().wheel_generation();
    let frame: FrameCallback = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = js_sys::Date::now() - start_time;
        let stale = session.borrow().wheel_generation() != generation;
        if !stale {
            rotation.set(animation.rotation_at(elapsed));
        }

        if stale || animation.is_finished(elapsed) {
            // Drop the closure only after this frame has returned.
            let holder = next_frame.clone();
            Timeout::new(0, move || {
                holder.borrow_mut().take();
            })
            .forget();
        } else {
            request_frame(&next_frame);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&frame);
}

#[derive(Properties, PartialEq)]
pub struct MenuRouletteProps {
    #[prop_or_default]
    pub on_find_places: Option<Callback<String>>,
}

#[function_component(MenuRoulette)]
pub fn menu_roulette(props: &MenuRouletteProps) -> Html {
    // Apply custom CSS
    {
        use_effect_with((), move |_| {
            let style_element = window()
                .and_then(|w| w.document())
                .and_then(|document| {
                    let head = document.head()?;
                    let style = document.create_element("style").ok()?;
                    style.set_text_content(Some(CUSTOM_CSS));
                    head.append_child(&style).ok()?;
                    Some(style)
                });

            move || {
                if let Some(style) = style_element {
                    if let Some(parent) = style.parent_node() {
                        let _ = parent.remove_child(&style);
                    }
                }
            }
        });
    }

    let session = use_mut_ref(|| {
        RouletteSession::with_config(load_roulette_config()).unwrap_or_else(|e| {
            log::error!("Falling back to default roulette: {}", e);
            RouletteSession::default()
        })
    });
    let rng = use_mut_ref(SmallRng::from_entropy);
    let rotation = use_state(|| 0.0);
    let force_update = use_force_update();
    let wheel_size = use_wheel_size();

    let on_select = {
        let session = session.clone();
        let rotation = rotation.clone();
        let force_update = force_update.clone();

        Callback::from(move |index: usize| {
            let changed = session.borrow_mut().select_category(index);
            match changed {
                Ok(()) => {
                    rotation.set(0.0);
                    force_update.force_update();
                }
                Err(e) if e.is_benign() => {}
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_spin = {
        let session = session.clone();
        let rng = rng.clone();
        let rotation = rotation.clone();
        let force_update = force_update.clone();

        Callback::from(move |_: MouseEvent| {
            let start_rotation = session.borrow().state().current_rotation_degrees;
            let on_done = {
                let force_update = force_update.clone();
                move |result: SpinResult| {
                    log::info!("Roulette picked {}", result.selected_item);
                    force_update.force_update();
                }
            };

            let spun = run_spin(&session, &mut *rng.borrow_mut(), &BrowserTimer, on_done);
            match spun {
                Ok(pending) => {
                    let animation = SpinAnimation::new(
                        start_rotation,
                        pending.outcome.next_state.current_rotation_degrees,
                        pending.completion_delay_ms,
                    );
                    animate_wheel(animation, rotation.clone(), session.clone());
                    force_update.force_update();
                }
                Err(e) if e.is_benign() => {}
                Err(e) => log::error!("Spin failed: {}", e),
            }
        })
    };

    let (categories, active, category, state) = {
        let session = session.borrow();
        (
            session.categories().to_vec(),
            session.active_index(),
            session.active_category().clone(),
            session.state().clone(),
        )
    };

    html! {
        <div class={styles::PAGE}>
            <div class={styles::PAGE_INNER}>
                <p class={styles::TEXT_EYEBROW}>{ "Menu Roulette" }</p>
                <h2 class={styles::TEXT_TITLE}>{ "오늘 뭐 먹지?" }</h2>
                <p class={styles::TEXT_SUBTITLE}>{ "분야를 선택하고 룰렛을 돌려보세요!" }</p>

                <CategoryChips {categories} {active} {on_select} />

                <WheelSvg
                    items={category.items.clone()}
                    emoji={category.emoji.clone()}
                    rotation={*rotation}
                    dimensions={WheelDimensions::for_size(wheel_size)}
                />

                <SpinButton is_spinning={state.is_spinning} onclick={on_spin} />

                <ResultDisplay
                    result={state.last_result.clone()}
                    on_find_places={props.on_find_places.clone()}
                />
            </div>
        </div>
    }
}
