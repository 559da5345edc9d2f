//! メインアプリケーションコンポーネント

use crate::api::hf_inference::{revoke_url, BrowserClient, GlooSleeper};
use crate::components::{
    custom_selection::CustomSelection,
    error_list::ErrorList,
    header::Header,
    image_gallery::ImageGallery,
    lightbox::Lightbox,
    mode_selector::ModeSelector,
    progress_bar::ProgressBar,
    settings_panel::SettingsPanel,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use season_art_common::{
    prepare_run, read_names_from_bytes, BatchObserver, BatchRunner, Error, ErrorLog,
    GenerationError, GenerationMode, GenerationResult, Generator, Month, RunProgress, RunStatus,
    SelectionState, StopFlag, WorkItem,
};

/// ライトボックスに表示する画像
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxImage {
    pub url: String,
    pub name: String,
    pub month: Month,
}

impl LightboxImage {
    pub fn caption(&self) -> String {
        format!("{} - {}", self.name, self.month)
    }
}

/// バッチ実行の通知をシグナルへ反映する
struct SignalObserver {
    images: RwSignal<GenerationResult<String>>,
    pending: RwSignal<Option<WorkItem>>,
    errors: RwSignal<ErrorLog>,
    set_progress: WriteSignal<RunProgress>,
    set_current_operation: WriteSignal<String>,
}

impl BatchObserver<String> for SignalObserver {
    fn on_status(&mut self, message: &str) {
        self.set_current_operation.set(message.to_string());
    }

    fn on_item_started(&mut self, item: &WorkItem) {
        self.pending.set(Some(item.clone()));
    }

    fn on_item_succeeded(
        &mut self,
        item: &WorkItem,
        url: &String,
    ) -> season_art_common::Result<()> {
        self.images.update(|images| {
            if let Some(old) = images.insert(&item.name, item.month, url.clone()) {
                revoke_url(&old);
            }
        });
        self.pending.set(None);
        Ok(())
    }

    fn on_item_failed(&mut self, item: &WorkItem, error: &GenerationError) {
        warn!("{} failed after {} attempts", item, error.attempts);
        self.pending.set(None);
    }

    fn on_error(&mut self, message: &str) {
        self.errors.update(|log| log.push(message));
    }

    fn on_progress(&mut self, progress: RunProgress) {
        self.set_progress.set(progress);
    }
}

/// 読み込んだ名前リストを選択状態へ反映
///
/// 読み込みに失敗した場合は以前のリストと選択をそのまま残す。
fn apply_loaded_names(
    selection: &mut SelectionState,
    parsed: season_art_common::Result<Vec<String>>,
) -> season_art_common::Result<Vec<String>> {
    let list = parsed?;
    selection.set_loaded_names(list.clone());
    Ok(list)
}

/// 全件モードの開始時に前回の画像を破棄
fn clear_images(images: RwSignal<GenerationResult<String>>) {
    images.update(|images| {
        for (_, _, url) in images.drain() {
            revoke_url(&url);
        }
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (api_token, set_api_token) = signal(String::new());
    let (names, set_names) = signal(Vec::<String>::new());
    let (mode, set_mode) = signal(GenerationMode::All);
    let selection = RwSignal::new(SelectionState::default());
    let images = RwSignal::new(GenerationResult::<String>::new());
    let pending = RwSignal::new(None::<WorkItem>);
    let errors = RwSignal::new(ErrorLog::default());
    let (progress, set_progress) = signal(RunProgress::default());
    let (current_operation, set_current_operation) = signal(String::new());
    let (is_generating, set_is_generating) = signal(false);
    let lightbox = RwSignal::new(None::<LightboxImage>);
    let stop = StoredValue::new(StopFlag::new());

    // Excel読み込みハンドラ
    let on_file_loaded = move |loaded: Result<Vec<u8>, String>| {
        let parsed = loaded
            .map_err(Error::Spreadsheet)
            .and_then(|bytes| read_names_from_bytes(&bytes));
        match selection.try_update(|s| apply_loaded_names(s, parsed)) {
            Some(Ok(list)) => {
                info!("loaded {} names", list.len());
                errors.update(ErrorLog::clear);
                set_names.set(list);
            }
            Some(Err(e)) => {
                warn!("keeping previous names: {}", e);
                errors.update(|log| {
                    log.clear();
                    log.push(e.to_string());
                });
            }
            None => {}
        }
    };

    // 生成開始ハンドラ
    let on_generate = move |run_mode: GenerationMode| {
        if is_generating.get_untracked() {
            return;
        }
        let token = api_token.get_untracked();
        let prepared = names.with_untracked(|names| {
            selection.with_untracked(|selection| prepare_run(&token, run_mode, names, selection))
        });
        let plan = match prepared {
            Ok(plan) => plan,
            Err(e) => {
                errors.update(|log| {
                    log.clear();
                    log.push(e.to_string());
                });
                return;
            }
        };

        errors.update(ErrorLog::clear);
        // カスタムは前回の結果に追加する
        if run_mode == GenerationMode::All {
            clear_images(images);
        }
        set_current_operation.set(String::new());
        set_progress.set(RunProgress::new(plan.len()));
        set_is_generating.set(true);

        let stop = stop.get_value();
        spawn_local(async move {
            let client = BrowserClient::new(token.trim());
            let sleeper = GlooSleeper;
            let runner = BatchRunner::new(Generator::new(&client, &sleeper), stop);
            let mut observer = SignalObserver {
                images,
                pending,
                errors,
                set_progress,
                set_current_operation,
            };

            let outcome = runner.run(&plan, &mut observer).await;
            pending.set(None);
            info!(
                "run {:?}: {} generated, {} failed",
                outcome.status, outcome.progress.completed, outcome.progress.failed
            );
            if outcome.status == RunStatus::Completed {
                set_current_operation.set(String::new());
            }
            set_is_generating.set(false);
        });
    };

    // 停止ハンドラ
    let on_stop = move |_: ()| {
        stop.with_value(StopFlag::request_stop);
    };

    let on_open_image = move |image: LightboxImage| lightbox.set(Some(image));
    let on_close_image = move |_: ()| lightbox.set(None);

    view! {
        <div class="container">
            <div class="panel">
                <Header />

                <SettingsPanel
                    api_token=api_token
                    set_api_token=set_api_token
                    names=names
                    on_file_loaded=on_file_loaded
                />

                <ErrorList errors=errors />

                <ModeSelector mode=mode set_mode=set_mode />

                <Show
                    when=move || mode.get() == GenerationMode::Custom
                    fallback=move || view! {
                        <button
                            class="btn btn-primary btn-wide"
                            disabled=move || {
                                is_generating.get()
                                    || api_token.get().is_empty()
                                    || names.get().is_empty()
                            }
                            on:click=move |_| on_generate(GenerationMode::All)
                        >
                            "Generate All Images"
                        </button>
                    }
                >
                    <CustomSelection
                        names=names
                        selection=selection
                        api_token=api_token
                        is_generating=is_generating
                        on_generate=move |_: ()| on_generate(GenerationMode::Custom)
                    />
                </Show>

                <Show when=move || is_generating.get()>
                    <ProgressBar
                        progress=progress
                        current_operation=current_operation
                        on_stop=on_stop
                    />
                </Show>

                <Show when=move || !is_generating.get() && !current_operation.get().is_empty()>
                    <p class="status-text">{move || current_operation.get()}</p>
                </Show>
            </div>

            <ImageGallery images=images pending=pending on_open_image=on_open_image />

            <Lightbox image=lightbox on_close=on_close_image />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightbox_caption() {
        let image = LightboxImage {
            url: "blob:x".to_string(),
            name: "Alice".to_string(),
            month: Month::March,
        };
        assert_eq!(image.caption(), "Alice - March");
    }

    #[test]
    fn test_failed_upload_keeps_previous_names() {
        let mut selection = SelectionState::default();
        let loaded = apply_loaded_names(&mut selection, Ok(vec!["Alice".into(), "Bob".into()]));
        assert_eq!(loaded.unwrap().len(), 2);
        selection.toggle_name("Alice");
        selection.toggle_month("Alice", Month::May);

        let failed = apply_loaded_names(
            &mut selection,
            Err(Error::Spreadsheet("not a spreadsheet".into())),
        );
        assert!(failed.is_err());
        assert_eq!(selection.loaded_names(), &["Alice".to_string(), "Bob".to_string()]);
        assert_eq!(selection.months_for("Alice"), &[Month::May]);
    }
}
