pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;
pub mod timer;

use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

use crate::pages::menu_roulette::MenuRoulette;

/// Hash the surrounding shell listens on for the place list tab.
const PLACE_LIST_HASH: &str = "#list";

fn show_place_list() {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(PLACE_LIST_HASH)) {
            log::warn!("Failed to switch to the place list: {:?}", e);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let place_search = use_state(|| None::<String>);

    let on_find_places = {
        let place_search = place_search.clone();
        Callback::from(move |menu: String| {
            log::info!("Looking up places for {}", menu);
            show_place_list();
            place_search.set(Some(menu));
        })
    };

    html! {
        <div class="min-h-screen w-full flex flex-col">
            if let Some(menu) = &*place_search {
                <p class={styles::BANNER}>{ format!("'{}' 맛집 목록으로 이동합니다", menu) }</p>
            }
            <MenuRoulette {on_find_places} />
        </div>
    }
}
