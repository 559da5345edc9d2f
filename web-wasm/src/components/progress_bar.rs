//! プログレスバーコンポーネント

use leptos::prelude::*;
use season_art_common::RunProgress;

#[component]
pub fn ProgressBar<FS>(
    progress: ReadSignal<RunProgress>,
    current_operation: ReadSignal<String>,
    on_stop: FS,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get().percent())
                />
            </div>
            <p class="progress-text">
                {move || {
                    let p = progress.get();
                    format!("{:.0}% ({}/{})", p.percent(), p.processed(), p.total)
                }}
            </p>
            <p class="progress-text">{move || current_operation.get()}</p>
            <button
                class="btn btn-tertiary btn-small"
                on:click=move |_| on_stop(())
            >
                "Stop Generation"
            </button>
        </div>
    }
}
