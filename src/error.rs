use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeasonArtError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIトークンが設定されていません。`--token` または環境変数 HF_TOKEN で指定してください")]
    MissingApiToken,

    #[error("HTTPエラー: {0}")]
    Http(String),

    #[error("画像変換エラー: {0}")]
    ImageEncode(String),

    #[error("入力エラー: {0}")]
    Interactive(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("生成を中断しました: {0}")]
    Aborted(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] season_art_common::Error),
}

impl From<reqwest::Error> for SeasonArtError {
    fn from(e: reqwest::Error) -> Self {
        SeasonArtError::Http(e.to_string())
    }
}

impl From<image::ImageError> for SeasonArtError {
    fn from(e: image::ImageError) -> Self {
        SeasonArtError::ImageEncode(e.to_string())
    }
}

impl From<dialoguer::Error> for SeasonArtError {
    fn from(e: dialoguer::Error) -> Self {
        SeasonArtError::Interactive(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeasonArtError>;
