//! バッチ生成
//!
//! 作業計画を1件ずつ順番に処理する（並行実行はしない）。
//! - 項目ごとの失敗はエラーログに記録して続行
//! - 停止フラグは名前ループ・月ループの先頭でのみ確認
//! - 受け取り側（保存・表示）の失敗は全体エラーとして打ち切り

use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::client::{ImageClient, Sleeper};
use crate::error::{Error, GenerationError, Result};
use crate::month::Month;
use crate::plan::{GenerationMode, WorkItem, WorkPlan};
use crate::results::{ErrorLog, GenerationResult, RunProgress};
use crate::retry::Generator;
use crate::selection::SelectionState;

/// APIトークンの最小長
pub const MIN_TOKEN_LEN: usize = 8;

/// 協調的な停止フラグ（UIやシグナルハンドラと共有）
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stop_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    /// 立っていれば下ろして true を返す
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// 実行の終わり方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    /// ユーザーによる停止（エラー扱いしない）
    Stopped,
    /// 想定外のエラーで打ち切り
    Aborted,
}

/// バッチ実行結果
#[derive(Debug, Clone)]
pub struct BatchOutcome<H> {
    pub results: GenerationResult<H>,
    pub errors: ErrorLog,
    pub progress: RunProgress,
    pub status: RunStatus,
}

/// 実行中の通知先
///
/// すべて既定で何もしない。`on_item_succeeded` がエラーを返すと実行を打ち切る。
pub trait BatchObserver<H> {
    /// 現在の操作（"Generating ..." / "Retry ..." など）
    fn on_status(&mut self, _message: &str) {}

    fn on_item_started(&mut self, _item: &WorkItem) {}

    fn on_item_succeeded(&mut self, _item: &WorkItem, _handle: &H) -> Result<()> {
        Ok(())
    }

    fn on_item_failed(&mut self, _item: &WorkItem, _error: &GenerationError) {}

    /// エラーログへの追記
    fn on_error(&mut self, _message: &str) {}

    fn on_progress(&mut self, _progress: RunProgress) {}
}

/// 通知不要な場合のオブザーバー
pub struct NoopObserver;

impl<H> BatchObserver<H> for NoopObserver {}

/// トークンの最低限の形式チェック（実際の有効性はAPI側で判定）
pub fn validate_token(token: &str) -> Result<()> {
    let token = token.trim();
    if token.is_empty() {
        return Err(Error::MissingToken);
    }
    if token.len() < MIN_TOKEN_LEN {
        return Err(Error::InvalidToken);
    }
    Ok(())
}

/// 実行前チェックと作業計画の作成
pub fn prepare_run(
    token: &str,
    mode: GenerationMode,
    names: &[String],
    selection: &SelectionState,
) -> Result<WorkPlan> {
    validate_token(token)?;
    let plan = WorkPlan::for_mode(mode, names, selection);
    if plan.is_empty() {
        return Err(match mode {
            GenerationMode::All => Error::NoNamesLoaded,
            GenerationMode::Custom => Error::EmptySelection,
        });
    }
    Ok(plan)
}

/// 逐次バッチ実行
pub struct BatchRunner<'a, C, S> {
    generator: Generator<'a, C, S>,
    stop: StopFlag,
}

impl<'a, C, S> BatchRunner<'a, C, S>
where
    C: ImageClient,
    S: Sleeper,
{
    pub fn new(generator: Generator<'a, C, S>, stop: StopFlag) -> Self {
        Self { generator, stop }
    }

    pub async fn run<O>(&self, plan: &WorkPlan, observer: &mut O) -> BatchOutcome<C::Handle>
    where
        O: BatchObserver<C::Handle>,
    {
        let mut outcome = BatchOutcome {
            results: GenerationResult::new(),
            errors: ErrorLog::default(),
            progress: RunProgress::new(plan.len()),
            status: RunStatus::Completed,
        };
        self.stop.clear();
        info!("starting run of {} items", plan.len());
        observer.on_progress(outcome.progress);

        for (name, months) in plan.groups() {
            if self.stop.take() {
                outcome.status = RunStatus::Stopped;
                break;
            }

            let mut failed: Vec<Month> = Vec::new();
            for &month in months {
                if self.stop.take() {
                    outcome.status = RunStatus::Stopped;
                    break;
                }

                let item = WorkItem::new(name.clone(), month);
                observer.on_status(&format!("Generating {} image for {}...", month, name));
                observer.on_item_started(&item);

                let generated = self
                    .generator
                    .generate_with_retry(&item, |message| observer.on_status(message))
                    .await;

                match generated {
                    Ok(handle) => {
                        if let Err(e) = observer.on_item_succeeded(&item, &handle) {
                            let message = format!("General error: {}", e);
                            observer.on_error(&message);
                            outcome.errors.push(message);
                            outcome.status = RunStatus::Aborted;
                            break;
                        }
                        outcome.results.insert(name, month, handle);
                        outcome.progress.completed += 1;
                    }
                    Err(e) => {
                        let message =
                            format!("Failed to generate {} image for {}: {}", month, name, e);
                        observer.on_item_failed(&item, &e);
                        observer.on_error(&message);
                        outcome.errors.push(message);
                        outcome.progress.failed += 1;
                        failed.push(month);
                    }
                }
                observer.on_progress(outcome.progress);

                if !outcome.progress.is_finished() {
                    let delay = self.generator.policy().base_delay;
                    self.generator.sleeper().sleep(delay).await;
                }
            }

            if !failed.is_empty() {
                let months: Vec<&str> = failed.iter().map(Month::name).collect();
                let message = format!("Skipped months for {}: {}", name, months.join(", "));
                observer.on_error(&message);
                outcome.errors.push(message);
            }

            if outcome.status != RunStatus::Completed {
                break;
            }
        }

        match outcome.status {
            RunStatus::Stopped => {
                info!("run stopped by user after {} items", outcome.progress.processed());
                observer.on_status("Generation stopped by user");
            }
            RunStatus::Aborted => info!("run aborted"),
            RunStatus::Completed => info!(
                "run finished: {} generated, {} failed",
                outcome.progress.completed, outcome.progress.failed
            ),
        }
        self.stop.clear();
        outcome
    }
}
