//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// どの操作で発生しても画面全体を壊さない。扱い（アラート/ログ）は
/// 呼び出し側の [`crate::FailurePolicy`] で決まる。
#[derive(Error, Debug)]
pub enum Error {
    /// 送信前に入力が弾かれた
    #[error("{0}")]
    Validation(String),

    /// 通信そのものに失敗した
    #[error("通信エラー: {0}")]
    Transport(String),

    /// 2xx以外のHTTPステータス
    #[error("HTTPエラー: {0}")]
    Status(u16),

    /// レスポンスの形式が想定外
    #[error("レスポンス形式エラー: {0}")]
    Protocol(String),

    /// サーバーが期待と異なるstatusを返した
    #[error("サーバーが操作を拒否しました: status={status}{}", message_suffix(.message))]
    Rejected {
        status: String,
        message: Option<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
