//! バックエンドAPIの定義
//!
//! エンドポイント・リクエスト本文の組み立て・レスポンス解析と、
//! 各フロントエンドが実装する [`Backend`] トレイト。

use crate::error::{Error, Result};
use crate::types::{CandidateId, SearchRequest, SearchResponse, StatusReply};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// `/add_favorite` 成功時のstatus
pub const STATUS_ADDED: &str = "added";
/// `/remove_favorite` 成功時のstatus
pub const STATUS_REMOVED: &str = "removed";
/// `/delete_history` 成功時のstatus
pub const STATUS_SUCCESS: &str = "success";

/// バックエンドのエンドポイント（すべて同一オリジンのPOST）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    AddFavorite,
    RemoveFavorite,
    DeleteHistory,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "/search",
            Endpoint::AddFavorite => "/add_favorite",
            Endpoint::RemoveFavorite => "/remove_favorite",
            Endpoint::DeleteHistory => "/delete_history",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Endpoint::Search => JSON_CONTENT_TYPE,
            _ => FORM_CONTENT_TYPE,
        }
    }
}

/// リクエスト本文（エンドポイントと本文の組）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBody {
    pub endpoint: Endpoint,
    pub body: String,
}

impl RequestBody {
    pub fn search(query: &str) -> Result<Self> {
        Ok(Self {
            endpoint: Endpoint::Search,
            body: serde_json::to_string(&SearchRequest { query })?,
        })
    }

    pub fn add_favorite(id: &CandidateId) -> Self {
        Self {
            endpoint: Endpoint::AddFavorite,
            body: encode_form("candidate_id", id.as_str()),
        }
    }

    pub fn remove_favorite(id: &CandidateId) -> Self {
        Self {
            endpoint: Endpoint::RemoveFavorite,
            body: encode_form("candidate_id", id.as_str()),
        }
    }

    pub fn delete_history(index: usize) -> Self {
        Self {
            endpoint: Endpoint::DeleteHistory,
            body: encode_form("index", &index.to_string()),
        }
    }

    pub fn content_type(&self) -> &'static str {
        self.endpoint.content_type()
    }
}

/// `key=value` のフォーム本文
pub fn encode_form(key: &str, value: &str) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish()
}

/// `/search` のレスポンス本文を解析
pub fn parse_search_response(body: &str) -> Result<SearchResponse> {
    serde_json::from_str(body).map_err(|e| Error::Protocol(format!("検索結果: {}", e)))
}

/// status応答の本文を解析
pub fn parse_status_reply(body: &str) -> Result<StatusReply> {
    serde_json::from_str(body).map_err(|e| Error::Protocol(format!("status応答: {}", e)))
}

/// HTTPステータスと本文の組（トランスポート層から受け取る生の応答）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `/search` は2xx以外を `Error::Status` とする
    pub fn into_search_response(self) -> Result<SearchResponse> {
        if !self.is_success() {
            return Err(Error::Status(self.status));
        }
        parse_search_response(&self.body)
    }

    /// 状態応答のエンドポイントは4xxでも本文に `status` を載せて返す。
    /// 本文が読めればその応答を、読めなければ `Error::Status` を返す。
    pub fn into_status_reply(self) -> Result<StatusReply> {
        match parse_status_reply(&self.body) {
            Ok(reply) => {
                if !self.is_success() {
                    tracing::debug!(
                        http_status = self.status,
                        status = %reply.status,
                        message = reply.message.as_deref().unwrap_or(""),
                        "status reply with error code"
                    );
                }
                Ok(reply)
            }
            Err(_) if !self.is_success() => Err(Error::Status(self.status)),
            Err(err) => Err(err),
        }
    }
}

/// バックエンドとの通信
///
/// ブラウザ版は `fetch`、CLI版は reqwest で実装する。
/// どちらもシングルスレッドで駆動するため、Futureに `Send` は要求しない。
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn search(&self, query: &str) -> Result<SearchResponse>;

    async fn add_favorite(&self, id: &CandidateId) -> Result<StatusReply>;

    async fn remove_favorite(&self, id: &CandidateId) -> Result<StatusReply>;

    async fn delete_history(&self, index: usize) -> Result<StatusReply>;
}

impl<B: Backend + ?Sized> Backend for &B {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        (**self).search(query).await
    }

    async fn add_favorite(&self, id: &CandidateId) -> Result<StatusReply> {
        (**self).add_favorite(id).await
    }

    async fn remove_favorite(&self, id: &CandidateId) -> Result<StatusReply> {
        (**self).remove_favorite(id).await
    }

    async fn delete_history(&self, index: usize) -> Result<StatusReply> {
        (**self).delete_history(index).await
    }
}
