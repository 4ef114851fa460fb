//! 候補者検索クライアント
//!
//! ブラウザ版と同じ検索・ページ送り・お気に入り同期を端末から実行する。

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod pager;
pub mod terminal;
