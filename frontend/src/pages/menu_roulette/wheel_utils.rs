use shared::{MenuCategory, SpinResult};
use yew::prelude::*;

use crate::styles;

// Category chips component
#[derive(Properties, PartialEq)]
pub struct CategoryChipsProps {
    pub categories: Vec<MenuCategory>,
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component(CategoryChips)]
pub fn category_chips(props: &CategoryChipsProps) -> Html {
    html! {
        <div class={styles::CHIP_ROW}>
            { for props.categories.iter().enumerate().map(|(index, category)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                let state_class = if index == props.active { styles::CHIP_ACTIVE } else { styles::CHIP_IDLE };

                html! {
                    <button key={category.name.clone()} {onclick} class={classes!(styles::CHIP_BASE, state_class)}>
                        <span class="text-sm">{ category.emoji.clone() }</span>
                        { category.name.clone() }
                    </button>
                }
            }) }
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.is_spinning {
        styles::BUTTON_SPIN_DISABLED
    } else {
        styles::BUTTON_SPIN_ACTIVE
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={classes!(styles::BUTTON_SPIN, button_class)}
        >
            if props.is_spinning {
                <svg class="w-5 h-5 animate-spin" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" />
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z" />
                </svg>
                { "돌리는 중..." }
            } else {
                { "돌리기!" }
                <svg class="w-4 h-4 group-hover:rotate-90 transition-transform duration-300" fill="none" stroke="currentColor" viewBox="0 0 24 24" stroke-width="2.5">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15" />
                </svg>
            }
        </button>
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub result: Option<SpinResult>,
    #[prop_or_default]
    pub on_find_places: Option<Callback<String>>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(result) = &props.result else {
        return html! {};
    };

    let find_button = props.on_find_places.as_ref().map(|on_find_places| {
        let on_find_places = on_find_places.clone();
        let menu = result.selected_item.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_find_places.emit(menu.clone()));
        html! {
            <button {onclick} class={styles::BUTTON_FIND}>
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24" stroke-width="2">
                    <path stroke-linecap="round" stroke-linejoin="round" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z" />
                </svg>
                { "이 메뉴 맛집 보러가기" }
            </button>
        }
    });

    html! {
        <div class="mt-6 md:mt-8 w-full max-w-[360px] animate-popup-in">
            <div class={styles::CARD_RESULT}>
                <p class="text-gray-400 text-xs sm:text-sm mb-2">{ "오늘의 추천 메뉴는" }</p>
                <p class="text-3xl sm:text-4xl font-black text-gray-900 mb-1 tracking-tight">
                    { result.selected_item.clone() }
                </p>
                <p class="text-gray-300 text-xs sm:text-sm mt-1 mb-4">{ "맛있게 드세요!" }</p>
                { for find_button }
            </div>
        </div>
    }
}
