//! fetch API によるバックエンド呼び出し
//!
//! ページと同じオリジンの `/search` などへPOSTする。

use candidate_search_common::{
    Backend, CandidateId, Error, RawReply, RequestBody, Result, SearchResponse, StatusReply,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 同一オリジンのバックエンド
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchBackend;

impl FetchBackend {
    /// POSTしてステータスと本文を返す（ステータスの解釈は呼び出し側）
    async fn send(&self, request: RequestBody) -> Result<RawReply> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::SameOrigin);
        opts.set_body(&JsValue::from_str(&request.body));

        let url = request.endpoint.path();
        let fetch_request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        fetch_request
            .headers()
            .set("Content-Type", request.content_type())
            .map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| Error::Transport("windowを取得できません".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        let status = resp.status();
        if !resp.ok() {
            tracing::debug!(url, status, "non-success response");
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let body = text
            .as_string()
            .ok_or_else(|| Error::Protocol("応答本文が文字列ではありません".into()))?;
        Ok(RawReply::new(status, body))
    }
}

impl Backend for FetchBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.send(RequestBody::search(query)?).await?.into_search_response()
    }

    async fn add_favorite(&self, id: &CandidateId) -> Result<StatusReply> {
        self.send(RequestBody::add_favorite(id)).await?.into_status_reply()
    }

    async fn remove_favorite(&self, id: &CandidateId) -> Result<StatusReply> {
        self.send(RequestBody::remove_favorite(id)).await?.into_status_reply()
    }

    async fn delete_history(&self, index: usize) -> Result<StatusReply> {
        self.send(RequestBody::delete_history(index)).await?.into_status_reply()
    }
}

/// JS例外を通信エラーに変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(message)
}
