//! 生成モード切り替え

use leptos::prelude::*;
use season_art_common::GenerationMode;

#[component]
pub fn ModeSelector(
    mode: ReadSignal<GenerationMode>,
    set_mode: WriteSignal<GenerationMode>,
) -> impl IntoView {
    view! {
        <div class="mode-selector">
            <button
                class="btn btn-toggle"
                class:active=move || mode.get() == GenerationMode::All
                on:click=move |_| set_mode.set(GenerationMode::All)
            >
                "Generate All"
            </button>
            <button
                class="btn btn-toggle"
                class:active=move || mode.get() == GenerationMode::Custom
                on:click=move |_| set_mode.set(GenerationMode::Custom)
            >
                "Custom Generation"
            </button>
        </div>
    }
}
