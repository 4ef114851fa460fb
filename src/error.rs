use thiserror::Error;

#[derive(Error, Debug)]
pub enum CandidateSearchError {
    #[error(transparent)]
    Common(#[from] candidate_search_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("URLが不正です: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, CandidateSearchError>;
