//! テスト用のフェイク実装

use crate::api::Backend;
use crate::error::Result;
use crate::policy::Notifier;
use crate::session::LoadingIndicator;
use crate::types::{Candidate, CandidateId, SearchResponse, StatusReply};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

/// id "1".."n"、スコア降順の候補者
pub fn candidates(n: usize) -> Vec<Candidate> {
    (1..=n)
        .map(|i| Candidate::new(i.to_string(), format!("候補者{}", i), (100 - i.min(100)) as u8))
        .collect()
}

/// 応答を順に返すバックエンド
#[derive(Default)]
pub struct FakeBackend {
    searches: RefCell<VecDeque<Result<Vec<Candidate>>>>,
    replies: RefCell<VecDeque<Result<StatusReply>>>,
    calls: RefCell<Vec<String>>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl FakeBackend {
    pub fn push_search(&self, result: Result<Vec<Candidate>>) {
        self.searches.borrow_mut().push_back(result);
    }

    pub fn push_reply(&self, result: Result<StatusReply>) {
        self.replies.borrow_mut().push_back(result);
    }

    pub fn push_status(&self, status: &str) {
        self.push_reply(Ok(StatusReply::new(status)));
    }

    /// 次のstatus系リクエストを、返した送信側が発火するまで保留する
    pub fn hold_next_reply(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    async fn reply(&self, call: String) -> Result<StatusReply> {
        self.calls.borrow_mut().push(call);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(StatusReply::new("unscripted")))
    }
}

impl Backend for FakeBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse> {
        self.calls.borrow_mut().push(format!("search:{}", query));
        let next = self.searches.borrow_mut().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
            .map(|candidates| SearchResponse { candidates })
    }

    async fn add_favorite(&self, id: &CandidateId) -> Result<StatusReply> {
        self.reply(format!("add:{}", id)).await
    }

    async fn remove_favorite(&self, id: &CandidateId) -> Result<StatusReply> {
        self.reply(format!("remove:{}", id)).await
    }

    async fn delete_history(&self, index: usize) -> Result<StatusReply> {
        self.reply(format!("delete_history:{}", index)).await
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingIndicator {
    events: RefCell<Vec<String>>,
}

impl RecordingIndicator {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn is_visible(&self) -> bool {
        self.events.borrow().last().map(String::as_str) == Some("show")
    }
}

impl LoadingIndicator for RecordingIndicator {
    fn show(&self) {
        self.events.borrow_mut().push("show".to_string());
    }

    fn hide(&self) {
        self.events.borrow_mut().push("hide".to_string());
    }
}
