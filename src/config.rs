//! 実行設定
//!
//! 設定ファイルは持たない。環境変数と既定値から組み立て、CLI引数で上書きする。

use crate::error::{Result, SeasonArtError};
use season_art_common::{RetryPolicy, DEFAULT_API_URL, DEFAULT_MODEL};
use serde::Serialize;
use std::time::Duration;

pub const ENV_TOKEN: &str = "HF_TOKEN";
pub const ENV_TOKEN_FALLBACK: &str = "HUGGINGFACE_API_TOKEN";
pub const ENV_MODEL: &str = "SEASON_ART_MODEL";
pub const ENV_API_URL: &str = "SEASON_ART_API_URL";
pub const ENV_BASE_DELAY: &str = "SEASON_ART_BASE_DELAY_SECS";
pub const ENV_TIMEOUT: &str = "SEASON_ART_TIMEOUT_SECS";

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    #[serde(skip)]
    pub api_token: Option<String>,
    pub model: String,
    pub api_url: String,
    pub base_delay_secs: u64,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            model: DEFAULT_MODEL.into(),
            api_url: DEFAULT_API_URL.into(),
            base_delay_secs: 12,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む（テスト用に分離）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.api_token = get(ENV_TOKEN).or_else(|| get(ENV_TOKEN_FALLBACK));
        if let Some(model) = get(ENV_MODEL) {
            config.model = model;
        }
        if let Some(url) = get(ENV_API_URL) {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Some(value) = get(ENV_BASE_DELAY) {
            config.base_delay_secs = parse_secs(ENV_BASE_DELAY, &value)?;
        }
        if let Some(value) = get(ENV_TIMEOUT) {
            config.timeout_seconds = parse_secs(ENV_TIMEOUT, &value)?;
        }
        Ok(config)
    }

    /// トークン取得（引数を優先）
    pub fn api_token(&self, override_token: Option<&str>) -> Result<String> {
        override_token
            .map(str::to_string)
            .or_else(|| self.api_token.clone())
            .ok_or(SeasonArtError::MissingApiToken)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::with_base_delay(Duration::from_secs(self.base_delay_secs))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// 表示用にトークンを伏せる
    pub fn masked_token(&self) -> String {
        match &self.api_token {
            None => "未設定".to_string(),
            Some(token) if token.len() <= 6 => "***".to_string(),
            Some(token) => {
                let end = token.char_indices().nth(3).map_or(0, |(i, _)| i);
                format!("{}***", &token[..end])
            }
        }
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| SeasonArtError::Config(format!("{} は秒数（整数）で指定してください: {}", key, value)))
}
