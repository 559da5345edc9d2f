//! エラー型定義

use thiserror::Error;

use crate::client::ApiError;
use crate::plan::WorkItem;

/// 共通エラー型
///
/// 入力エラー（トークン・名前リスト・選択）は実行開始前に一度だけ報告される。
#[derive(Error, Debug)]
pub enum Error {
    #[error("API token is required")]
    MissingToken,

    #[error("Invalid API token format")]
    InvalidToken,

    #[error("Please provide an Excel file with valid names")]
    NoNamesLoaded,

    #[error("Please select at least one name and month")]
    EmptySelection,

    #[error("Excel file error: {0}")]
    Spreadsheet(String),

    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// 生成済み画像の受け取り側（保存・表示）で発生したエラー
    #[error("{0}")]
    Sink(String),
}

/// リトライ上限に達した生成失敗
#[derive(Error, Debug, Clone)]
#[error("{source} (after {attempts} attempts)")]
pub struct GenerationError {
    pub item: WorkItem,
    pub attempts: u32,
    pub source: ApiError,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    #[test]
    fn test_error_display_input_errors() {
        assert_eq!(Error::MissingToken.to_string(), "API token is required");
        assert_eq!(Error::InvalidToken.to_string(), "Invalid API token format");
        assert_eq!(
            Error::EmptySelection.to_string(),
            "Please select at least one name and month"
        );
    }

    #[test]
    fn test_error_display_spreadsheet() {
        let error = Error::Spreadsheet("No valid names found in the Excel file".to_string());
        assert_eq!(
            error.to_string(),
            "Excel file error: No valid names found in the Excel file"
        );
    }

    #[test]
    fn test_generation_error_display() {
        let error = GenerationError {
            item: WorkItem::new("Alice", Month::March),
            attempts: 4,
            source: ApiError::with_status(503, "Model is loading"),
        };
        let display = error.to_string();
        assert!(display.contains("Model is loading"));
        assert!(display.contains("after 4 attempts"));
    }

    #[test]
    fn test_error_from_generation() {
        let error: Error = GenerationError {
            item: WorkItem::new("Bob", Month::July),
            attempts: 1,
            source: ApiError::new("boom"),
        }
        .into();
        assert!(matches!(error, Error::Generation(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Sink("書き込み失敗".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Sink"));
        assert!(debug.contains("書き込み失敗"));
    }
}
