//! Hugging Face 推論API連携（CLI版）
//!
//! `POST {api_url}/{model}` にJSONを送り、画像バイト列を受け取る。

use crate::config::Config;
use crate::error::Result;
use async_trait::async_trait;
use log::debug;
use season_art_common::{is_json_content_type, ApiError, ImageClient, ImageRequest, Sleeper};
use std::time::Duration;

/// 生成された画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

pub struct HfInferenceClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl HfInferenceClient {
    pub fn new(config: &Config, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.api_url, model)
    }
}

#[async_trait(?Send)]
impl ImageClient for HfInferenceClient {
    type Handle = GeneratedImage;

    async fn text_to_image(
        &self,
        request: &ImageRequest,
    ) -> std::result::Result<GeneratedImage, ApiError> {
        let url = self.endpoint(&request.model);
        debug!("POST {} (seed {})", url, request.parameters.seed);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "image/png")
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::new(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // 200でもJSONエラーが返ることがある
        if content_type.as_deref().is_some_and(is_json_content_type) {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.to_string()))?;

        Ok(GeneratedImage {
            bytes: bytes.to_vec(),
            content_type,
        })
    }
}

/// tokioタイマーによる待機
pub struct TokioSleeper;

#[async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
