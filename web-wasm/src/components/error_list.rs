//! エラー一覧コンポーネント

use leptos::prelude::*;
use season_art_common::ErrorLog;

#[component]
pub fn ErrorList(errors: RwSignal<ErrorLog>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|log| !log.is_empty())>
            <div class="error-list">
                {move || {
                    errors.with(|log| {
                        log.entries()
                            .iter()
                            .map(|message| view! {
                                <div class="alert alert-error">
                                    <span class="alert-icon">"⚠"</span>
                                    <div>{message.clone()}</div>
                                </div>
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </Show>
    }
}
