//! リトライ付き画像生成
//!
//! 1件の生成呼び出しを最大 `max_retries` 回まで再試行する。
//! - レート制限: 固定の長い待機（60秒）
//! - その他: base_delay * 2^retry の指数バックオフ
//!
//! 並行呼び出しはしない。待機中の中断もしない（中断判定はバッチ側の項目境界のみ）。

use log::{debug, warn};
use std::time::Duration;

use crate::client::{ApiError, ImageClient, ImageRequest, Sleeper, DEFAULT_MODEL};
use crate::error::GenerationError;
use crate::plan::WorkItem;

/// 最大リトライ回数（初回を除く）
pub const MAX_RETRIES: u32 = 3;

/// 基本待機時間（項目間の待機と指数バックオフの基準）
pub const BASE_DELAY: Duration = Duration::from_secs(12);

/// レート制限時の待機時間
pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub rate_limit_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            base_delay: BASE_DELAY,
            rate_limit_delay: RATE_LIMIT_DELAY,
        }
    }
}

/// 失敗後の待機方法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// レート制限による固定クールダウン
    RateLimited(Duration),
    /// 指数バックオフ
    Exponential(Duration),
}

impl Backoff {
    pub fn delay(&self) -> Duration {
        match self {
            Backoff::RateLimited(d) | Backoff::Exponential(d) => *d,
        }
    }
}

impl RetryPolicy {
    pub fn with_base_delay(base_delay: Duration) -> Self {
        Self {
            base_delay,
            ..Self::default()
        }
    }

    /// `retry` 回目（0始まり）の失敗に対する待機を決める
    pub fn backoff_for(&self, error: &ApiError, retry: u32) -> Backoff {
        if error.is_rate_limited() {
            Backoff::RateLimited(self.rate_limit_delay)
        } else {
            Backoff::Exponential(self.base_delay.saturating_mul(2u32.saturating_pow(retry)))
        }
    }
}

/// リトライ付き生成器
pub struct Generator<'a, C, S> {
    client: &'a C,
    sleeper: &'a S,
    model: String,
    policy: RetryPolicy,
}

impl<'a, C, S> Generator<'a, C, S>
where
    C: ImageClient,
    S: Sleeper,
{
    pub fn new(client: &'a C, sleeper: &'a S) -> Self {
        Self {
            client,
            sleeper,
            model: DEFAULT_MODEL.to_string(),
            policy: RetryPolicy::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn sleeper(&self) -> &S {
        self.sleeper
    }

    /// 1件を生成（失敗時はリトライ）
    ///
    /// 各リトライの前に `on_status` へ "Retry k/N for NAME - MONTH (waiting Ds)..." を通知する。
    /// リトライを使い切ったら最後のエラーと試行回数を返す。
    pub async fn generate_with_retry<F>(
        &self,
        item: &WorkItem,
        mut on_status: F,
    ) -> Result<C::Handle, GenerationError>
    where
        F: FnMut(&str),
    {
        let request = ImageRequest::for_item(&self.model, item);
        let mut retry = 0u32;

        loop {
            debug!("attempt {} for {}", retry + 1, item);
            let error = match self.client.text_to_image(&request).await {
                Ok(handle) => return Ok(handle),
                Err(error) => error,
            };

            if retry >= self.policy.max_retries {
                warn!("{} failed after {} attempts: {}", item, retry + 1, error);
                return Err(GenerationError {
                    item: item.clone(),
                    attempts: retry + 1,
                    source: error,
                });
            }

            let backoff = self.policy.backoff_for(&error, retry);
            warn!("{} failed: {} ({:?})", item, error, backoff);
            on_status(&format!(
                "Retry {}/{} for {} - {} (waiting {}s)...",
                retry + 1,
                self.policy.max_retries,
                item.name,
                item.month,
                backoff.delay().as_secs()
            ));
            self.sleeper.sleep(backoff.delay()).await;
            retry += 1;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::month::Month;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// 応答を順番に返すテスト用クライアント（尽きたら成功）
    #[derive(Default)]
    pub struct ScriptedClient {
        pub responses: RefCell<VecDeque<Result<String, ApiError>>>,
        pub calls: Cell<u32>,
        pub requests: RefCell<Vec<ImageRequest>>,
    }

    impl ScriptedClient {
        pub fn new(responses: Vec<Result<String, ApiError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                ..Default::default()
            }
        }

        pub fn always_failing(error: ApiError) -> Self {
            Self::new(vec![Err(error); 16])
        }
    }

    #[async_trait(?Send)]
    impl ImageClient for ScriptedClient {
        type Handle = String;

        async fn text_to_image(&self, request: &ImageRequest) -> Result<String, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(request.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(format!("blob:{}", request.parameters.seed)))
        }
    }

    /// 待機時間を記録するだけのスリーパー
    #[derive(Default)]
    pub struct RecordingSleeper {
        pub slept: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    fn item() -> WorkItem {
        WorkItem::new("Alice", Month::March)
    }

    #[test]
    fn test_success_first_attempt() {
        let client = ScriptedClient::new(vec![Ok("blob:1".to_string())]);
        let sleeper = RecordingSleeper::default();
        let generator = Generator::new(&client, &sleeper);

        let handle = block_on(generator.generate_with_retry(&item(), |_| {})).unwrap();
        assert_eq!(handle, "blob:1");
        assert_eq!(client.calls.get(), 1);
        assert!(sleeper.slept.borrow().is_empty());
    }

    #[test]
    fn test_exhausted_retries_call_count() {
        let client = ScriptedClient::always_failing(ApiError::with_status(500, "boom"));
        let sleeper = RecordingSleeper::default();
        let generator = Generator::new(&client, &sleeper);

        let err = block_on(generator.generate_with_retry(&item(), |_| {})).unwrap_err();
        assert_eq!(client.calls.get(), MAX_RETRIES + 1);
        assert_eq!(err.attempts, MAX_RETRIES + 1);
        assert_eq!(err.source.message, "boom");
        assert_eq!(err.item, item());
    }

    #[test]
    fn test_exponential_backoff_delays() {
        let client = ScriptedClient::always_failing(ApiError::with_status(503, "loading"));
        let sleeper = RecordingSleeper::default();
        let generator = Generator::new(&client, &sleeper);

        let _ = block_on(generator.generate_with_retry(&item(), |_| {}));
        assert_eq!(
            *sleeper.slept.borrow(),
            vec![
                Duration::from_secs(12),
                Duration::from_secs(24),
                Duration::from_secs(48),
            ]
        );
    }

    #[test]
    fn test_rate_limit_uses_cooldown() {
        let client = ScriptedClient::new(vec![
            Err(ApiError::with_status(429, "Too Many Requests")),
            Err(ApiError::new("rate limit exceeded")),
            Ok("blob:ok".to_string()),
        ]);
        let sleeper = RecordingSleeper::default();
        let generator = Generator::new(&client, &sleeper);

        let handle = block_on(generator.generate_with_retry(&item(), |_| {})).unwrap();
        assert_eq!(handle, "blob:ok");
        assert_eq!(*sleeper.slept.borrow(), vec![RATE_LIMIT_DELAY, RATE_LIMIT_DELAY]);
    }

    #[test]
    fn test_retry_status_messages() {
        let client = ScriptedClient::new(vec![
            Err(ApiError::new("timeout")),
            Err(ApiError::with_status(429, "slow down")),
        ]);
        let sleeper = RecordingSleeper::default();
        let generator = Generator::new(&client, &sleeper);

        let mut messages = Vec::new();
        block_on(generator.generate_with_retry(&item(), |m| messages.push(m.to_string()))).unwrap();
        assert_eq!(
            messages,
            vec![
                "Retry 1/3 for Alice - March (waiting 12s)...",
                "Retry 2/3 for Alice - March (waiting 60s)...",
            ]
        );
    }

    #[test]
    fn test_backoff_for() {
        let policy = RetryPolicy::with_base_delay(Duration::from_secs(5));
        let generic = ApiError::with_status(500, "oops");
        assert_eq!(policy.backoff_for(&generic, 0), Backoff::Exponential(Duration::from_secs(5)));
        assert_eq!(policy.backoff_for(&generic, 2), Backoff::Exponential(Duration::from_secs(20)));

        let limited = ApiError::with_status(429, "oops");
        assert_eq!(policy.backoff_for(&limited, 2), Backoff::RateLimited(RATE_LIMIT_DELAY));
    }

    #[test]
    fn test_request_uses_month_seed_and_model() {
        let client = ScriptedClient::default();
        let sleeper = RecordingSleeper::default();
        let generator = Generator::new(&client, &sleeper).with_model("test/model");

        let item = WorkItem::new("Bob", Month::August);
        block_on(generator.generate_with_retry(&item, |_| {})).unwrap();
        let requests = client.requests.borrow();
        assert_eq!(requests[0].model, "test/model");
        assert_eq!(requests[0].parameters.seed, 8000);
    }
}
