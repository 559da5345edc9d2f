//! Hugging Face 推論API連携（ブラウザ版）
//!
//! fetchでリクエストし、受け取った画像をBlob URLにして返す。

use async_trait::async_trait;
use season_art_common::{
    is_json_content_type, ApiError, ImageClient, ImageRequest, Sleeper, DEFAULT_API_URL,
};
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Request, RequestInit, RequestMode, Response, Url};

pub fn endpoint(api_url: &str, model: &str) -> String {
    format!("{}/{}", api_url.trim_end_matches('/'), model)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

/// 本文をテキストとして読む（失敗時は空）
async fn read_text(resp: &Response) -> String {
    match resp.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    }
}

/// JSの例外をAPIエラーに変換
fn js_error(value: JsValue) -> ApiError {
    ApiError::new(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub struct BrowserClient {
    token: String,
    api_url: String,
}

impl BrowserClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    async fn post(&self, request: &ImageRequest) -> Result<Response, ApiError> {
        let body = serde_json::to_string(request).map_err(|e| ApiError::new(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let url = endpoint(&self.api_url, &request.model);
        let req = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        req.headers().set("Content-Type", "application/json").map_err(js_error)?;
        req.headers().set("Authorization", &bearer(&self.token)).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| ApiError::new("window is not available"))?;
        let value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?;
        value.dyn_into::<Response>().map_err(js_error)
    }
}

#[async_trait(?Send)]
impl ImageClient for BrowserClient {
    /// Blob URL
    type Handle = String;

    async fn text_to_image(&self, request: &ImageRequest) -> Result<String, ApiError> {
        let resp = self.post(request).await?;

        if !resp.ok() {
            let text = read_text(&resp).await;
            return Err(ApiError::from_response(resp.status(), &text));
        }

        // 200でもJSONエラーが返ることがある
        let content_type = resp.headers().get("content-type").ok().flatten();
        if content_type.as_deref().is_some_and(is_json_content_type) {
            let text = read_text(&resp).await;
            return Err(ApiError::from_response(resp.status(), &text));
        }

        let blob: Blob = JsFuture::from(resp.blob().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        Url::create_object_url_with_blob(&blob).map_err(js_error)
    }
}

/// ブラウザのタイマーで待機
pub struct GlooSleeper;

#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo::timers::future::sleep(duration).await;
    }
}

/// 不要になったBlob URLを解放
pub fn revoke_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}
