//! 設定パネルコンポーネント（APIトークンとExcelファイル）

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

#[component]
pub fn SettingsPanel<FL>(
    api_token: ReadSignal<String>,
    set_api_token: WriteSignal<String>,
    names: ReadSignal<Vec<String>>,
    on_file_loaded: FL,
) -> impl IntoView
where
    FL: Fn(Result<Vec<u8>, String>) + 'static + Clone + Send + Sync,
{
    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let on_file_loaded = on_file_loaded.clone();
        spawn_local(async move {
            let file = gloo::file::File::from(file);
            let bytes = gloo::file::futures::read_as_bytes(&file)
                .await
                .map_err(|e| e.to_string());
            on_file_loaded(bytes);
        });
    };

    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="api-token">"Hugging Face API Token"</label>
                <input
                    type="password"
                    id="api-token"
                    placeholder="Enter your API token"
                    prop:value=move || api_token.get()
                    on:input=move |ev| {
                        set_api_token.set(event_target_value(&ev));
                    }
                />
                <a
                    href="https://huggingface.co/settings/tokens"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "トークンを取得 →"
                </a>
            </div>

            <div class="form-group">
                <label for="excel-file">"Excel File"</label>
                <input
                    type="file"
                    id="excel-file"
                    accept=".xlsx,.xls,.ods"
                    on:change=on_file_change
                />
                <Show when=move || !names.get().is_empty()>
                    <span class="text-muted">
                        {move || format!("{} names loaded", names.get().len())}
                    </span>
                </Show>
            </div>
        </div>
    }
}
