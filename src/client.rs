//! バックエンドHTTPクライアント
//!
//! ブラウザ版と同じエンドポイント・本文を reqwest で送る。

use crate::error::Result;
use candidate_search_common::{
    Backend, CandidateId, Endpoint, Error, RawReply, RequestBody, SearchResponse, StatusReply,
};
use reqwest::header::CONTENT_TYPE;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// エンドポイントの絶対URL（同一オリジンのパスとして解決）
    pub fn endpoint_url(&self, endpoint: Endpoint) -> candidate_search_common::Result<Url> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// プロフィールページのURL
    pub fn profile_url(&self, id: &CandidateId) -> String {
        self.base_url
            .join(&id.profile_path())
            .map(|url| url.to_string())
            .unwrap_or_else(|_| id.profile_path())
    }

    /// POSTしてステータスと本文を返す（ステータスの解釈は呼び出し側）
    async fn send(&self, request: RequestBody) -> candidate_search_common::Result<RawReply> {
        let url = self.endpoint_url(request.endpoint)?;
        tracing::debug!(%url, "POST");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, request.content_type())
            .body(request.body)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(RawReply::new(status, body))
    }
}

impl Backend for HttpBackend {
    async fn search(&self, query: &str) -> candidate_search_common::Result<SearchResponse> {
        self.send(RequestBody::search(query)?).await?.into_search_response()
    }

    async fn add_favorite(&self, id: &CandidateId) -> candidate_search_common::Result<StatusReply> {
        self.send(RequestBody::add_favorite(id)).await?.into_status_reply()
    }

    async fn remove_favorite(&self, id: &CandidateId) -> candidate_search_common::Result<StatusReply> {
        self.send(RequestBody::remove_favorite(id)).await?.into_status_reply()
    }

    async fn delete_history(&self, index: usize) -> candidate_search_common::Result<StatusReply> {
        self.send(RequestBody::delete_history(index)).await?.into_status_reply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_is_origin_relative() {
        let backend = HttpBackend::new("http://localhost:5000/app/").unwrap();
        let url = backend.endpoint_url(Endpoint::AddFavorite).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/add_favorite");
    }

    #[test]
    fn test_profile_url() {
        let backend = HttpBackend::new("http://localhost:5000").unwrap();
        assert_eq!(
            backend.profile_url(&CandidateId::from("42")),
            "http://localhost:5000/profile/42"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpBackend::new("not a url").is_err());
    }
}
