//! Season Art Common Library
//!
//! CLIとWeb(WASM)で共有される型と生成ロジック

pub mod batch;
pub mod client;
pub mod error;
pub mod month;
pub mod names;
pub mod plan;
pub mod prompts;
pub mod results;
pub mod retry;
pub mod selection;
pub mod themes;

pub use batch::{
    prepare_run, validate_token, BatchObserver, BatchOutcome, BatchRunner, NoopObserver,
    RunStatus, StopFlag,
};
pub use client::{
    is_json_content_type, ApiError, ImageClient, ImageRequest, Sleeper, DEFAULT_API_URL,
    DEFAULT_MODEL,
};
pub use error::{Error, GenerationError, Result};
pub use month::Month;
pub use names::extract_names;
#[cfg(feature = "xlsx")]
pub use names::{read_names_from_bytes, read_names_from_path};
pub use plan::{GenerationMode, WorkItem, WorkPlan};
pub use prompts::{build_prompt, prompt_for};
pub use results::{ErrorLog, GenerationResult, RunProgress};
pub use retry::{Generator, RetryPolicy, BASE_DELAY, MAX_RETRIES, RATE_LIMIT_DELAY};
pub use selection::SelectionState;
pub use themes::season_theme;

/// ダウンロード時のファイル名
pub fn image_file_name(name: &str, month: Month) -> String {
    format!("{}_{}.png", name, month)
}
