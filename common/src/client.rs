//! 画像生成APIクライアントの抽象
//!
//! 実際の呼び出しはCLI（reqwest）とWeb（fetch）でそれぞれ実装する。
//! ここではリクエスト形式・エラー分類・待機の抽象だけを持つ。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::plan::WorkItem;
use crate::prompts::prompt_for;

/// 既定モデル
pub const DEFAULT_MODEL: &str = "black-forest-labs/FLUX.1-schnell";

/// 生成画像サイズ（px）
pub const IMAGE_SIZE: u32 = 1024;

/// Hugging Face 推論APIのベースURL
pub const DEFAULT_API_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// text-to-image リクエスト
///
/// シリアライズ結果がそのままAPIのJSONボディになる（モデルはURL側）。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRequest {
    #[serde(skip)]
    pub model: String,
    pub inputs: String,
    pub parameters: ImageParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageParameters {
    pub seed: u64,
    pub height: u32,
    pub width: u32,
}

impl ImageRequest {
    /// 作業項目からリクエストを組み立てる（シードは月の暦位置から決定）
    pub fn for_item(model: &str, item: &WorkItem) -> Self {
        Self {
            model: model.to_string(),
            inputs: prompt_for(&item.name, item.month),
            parameters: ImageParameters {
                seed: item.month.seed(),
                height: IMAGE_SIZE,
                width: IMAGE_SIZE,
            },
        }
    }
}

/// API呼び出しエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// HTTPステータス（通信エラー等では None）
    pub status: Option<u16>,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Text(String),
    List(Vec<String>),
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// エラーレスポンスから組み立てる
    ///
    /// `{"error": "..."}` 形式ならその文言、それ以外は本文（空ならステータス）を使う。
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { error: ErrorField::Text(text) }) => text,
            Ok(ErrorBody { error: ErrorField::List(list) }) => list.join("; "),
            Err(_) if body.trim().is_empty() => format!("HTTP error {}", status),
            Err(_) => body.trim().chars().take(300).collect(),
        };
        Self::with_status(status, message)
    }

    /// レート制限か（429 または "rate limit" を含む）
    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(429) || self.message.to_lowercase().contains("rate limit")
    }
}

/// 応答がJSONか（成功ステータスでもJSONならエラー本文として扱う）
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with("application/json")
}

/// 画像生成の呼び出し口
///
/// `Handle` はブラウザならBlob URL、CLIなら画像バイト列など表示・保存に使う参照。
#[async_trait(?Send)]
pub trait ImageClient {
    type Handle;

    async fn text_to_image(&self, request: &ImageRequest) -> Result<Self::Handle, ApiError>;
}

/// 待機の抽象（tokio / ブラウザタイマー / テスト用の記録）
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}
