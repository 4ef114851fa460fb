//! 通信データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Candidate: 検索結果の候補者
//! - SearchRequest / SearchResponse: `/search` の入出力
//! - StatusReply: お気に入り・履歴操作の応答
//! - HistoryEntry / FavoriteEntry: サーバー描画済みページの初期データ

use crate::error::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// 氏名が空のときの表示名
pub const UNKNOWN_CANDIDATE: &str = "名前未登録の候補者";

/// 候補者ID
///
/// サーバーからは文字列・数値のどちらでも届くため、文字列に正規化して保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// プロフィールページのパス（`/profile/{id}`）
    pub fn profile_path(&self) -> String {
        format!("/profile/{}", self.0)
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CandidateId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for CandidateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// 一致率（0〜100の整数に丸める）
fn deserialize_score<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u8, D::Error> {
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Err(de::Error::custom("score is not a finite number"));
    }
    Ok(raw.round().clamp(0.0, 100.0) as u8)
}

/// 検索結果の候補者
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,

    /// 氏名（ワイヤ上のキーは `FИО`）
    #[serde(rename = "FИО", alias = "fullName", default)]
    pub full_name: String,

    #[serde(deserialize_with = "deserialize_score")]
    pub score: u8,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, full_name: impl Into<String>, score: u8) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            score: score.min(100),
        }
    }

    /// 表示用の氏名
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            UNKNOWN_CANDIDATE
        } else {
            name
        }
    }

    /// スコアバッジの表記（例: `87%`）
    pub fn score_label(&self) -> String {
        format!("{}%", self.score)
    }
}

/// `/search` リクエスト
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// `/search` レスポンス
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub candidates: Vec<Candidate>,
}

/// お気に入り・履歴操作の応答（`{status, message?}`）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusReply {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: None,
        }
    }

    /// 期待したstatusでなければ `Error::Rejected`
    pub fn expect_status(self, expected: &str) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(Error::Rejected {
                status: self.status,
                message: self.message,
            })
        }
    }
}

/// 検索履歴の1件
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// お気に入り一覧の1件（スコアなし）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: CandidateId,
    #[serde(rename = "FИО", alias = "fullName", default)]
    pub full_name: String,
}

impl FavoriteEntry {
    pub fn display_name(&self) -> &str {
        let name = self.full_name.trim();
        if name.is_empty() {
            UNKNOWN_CANDIDATE
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_from_server_json() {
        let json = r#"{"FИО": "Иванов Иван", "id": "42", "score": 87.46}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id, CandidateId::from("42"));
        assert_eq!(candidate.full_name, "Иванов Иван");
        assert_eq!(candidate.score, 87);
        assert_eq!(candidate.score_label(), "87%");
    }

    #[test]
    fn test_candidate_numeric_id_and_integer_score() {
        let json = r#"{"FИО": "Петров", "id": 7, "score": 64}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.id.as_str(), "7");
        assert_eq!(candidate.score, 64);
    }

    #[test]
    fn test_score_clamped() {
        let json = r#"{"id": "1", "score": 100.7}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.score, 100);

        let json = r#"{"id": "1", "score": -3}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.score, 0);
    }

    #[test]
    fn test_missing_name_uses_placeholder() {
        let json = r#"{"id": "5", "score": 70}"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.display_name(), UNKNOWN_CANDIDATE);
    }

    #[test]
    fn test_missing_score_is_error() {
        let json = r#"{"id": "5", "FИО": "x"}"#;
        assert!(serde_json::from_str::<Candidate>(json).is_err());
    }

    #[test]
    fn test_profile_path() {
        assert_eq!(CandidateId::from("42").profile_path(), "/profile/42");
    }

    #[test]
    fn test_search_request_body() {
        let body = serde_json::to_string(&SearchRequest { query: "backend engineer" }).unwrap();
        assert_eq!(body, r#"{"query":"backend engineer"}"#);
    }

    #[test]
    fn test_status_reply_expect() {
        assert!(StatusReply::new("added").expect_status("added").is_ok());

        let reply: StatusReply =
            serde_json::from_str(r#"{"status": "error", "message": "Invalid index"}"#).unwrap();
        let err = reply.expect_status("success").unwrap_err();
        match err {
            Error::Rejected { status, message } => {
                assert_eq!(status, "error");
                assert_eq!(message.as_deref(), Some("Invalid index"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_history_entry_without_candidates() {
        let entry: HistoryEntry = serde_json::from_str(r#"{"query": "qa"}"#).unwrap();
        assert_eq!(entry.query, "qa");
        assert!(entry.candidates.is_empty());
    }
}
