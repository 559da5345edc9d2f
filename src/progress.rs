//! 端末への進捗表示
//!
//! バッチ実行の通知を受けて、プログレスバーの更新と画像の保存を行う。

use crate::hf_client::GeneratedImage;
use crate::output::save_image;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use season_art_common::{BatchObserver, Error, GenerationError, RunProgress, WorkItem};
use std::path::{Path, PathBuf};

pub struct TerminalObserver {
    bar: ProgressBar,
    output_dir: PathBuf,
    saved: Vec<PathBuf>,
    failed: Vec<WorkItem>,
}

impl TerminalObserver {
    pub fn new(total: usize, output_dir: &Path) -> Self {
        Self::with_bar(ProgressBar::new(total as u64), output_dir)
    }

    /// 表示なし（テスト・非TTY用）
    pub fn hidden(output_dir: &Path) -> Self {
        Self::with_bar(ProgressBar::hidden(), output_dir)
    }

    fn with_bar(bar: ProgressBar, output_dir: &Path) -> Self {
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        Self {
            bar,
            output_dir: output_dir.to_path_buf(),
            saved: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// リトライしても生成できなかった項目
    pub fn failed(&self) -> &[WorkItem] {
        &self.failed
    }

    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}

impl BatchObserver<GeneratedImage> for TerminalObserver {
    fn on_status(&mut self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    fn on_item_started(&mut self, item: &WorkItem) {
        self.bar.set_message(format!("{} を生成中", item));
    }

    fn on_item_succeeded(
        &mut self,
        item: &WorkItem,
        image: &GeneratedImage,
    ) -> season_art_common::Result<()> {
        let path = save_image(&self.output_dir, &item.name, item.month, &image.bytes)
            .map_err(|e| Error::Sink(e.to_string()))?;
        info!("saved {}", path.display());
        self.bar.println(format!("✔ {}", path.display()));
        self.saved.push(path);
        Ok(())
    }

    fn on_item_failed(&mut self, item: &WorkItem, error: &GenerationError) {
        warn!("{} failed after {} attempts", item, error.attempts);
        self.failed.push(item.clone());
    }

    fn on_error(&mut self, message: &str) {
        self.bar.println(format!("⚠ {}", message));
    }

    fn on_progress(&mut self, progress: RunProgress) {
        self.bar.set_position(progress.processed() as u64);
    }
}
