//! お気に入り・履歴の同期操作
//!
//! どの操作も同じ手順:
//! 1. ボタンを処理中にしてリクエストを送る
//! 2. サーバーが期待したstatusを返したら画面に反映する
//! 3. 失敗したら表示はそのまま、ポリシーに従って報告する
//!
//! サーバーの確定前に表示を先に変えることはしない。

use crate::api::{Backend, STATUS_SUCCESS};
use crate::error::Result;
use crate::favorites::{ControlKind, FavoriteAction, FavoriteBoard, FavoriteState, RowChange};
use crate::history::{HistoryKey, HistoryList};
use crate::policy::{report_failure, Notifier, Operation, OperationPolicies};
use crate::state::StateCell;
use crate::types::CandidateId;

/// 1画面分のボタン状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleState {
    pub favorites: FavoriteBoard,
    pub history: HistoryList,
}

impl ToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: HistoryList) -> Self {
        Self {
            favorites: FavoriteBoard::new(),
            history,
        }
    }
}

/// お気に入り追加・解除・切替と履歴削除
#[derive(Debug, Clone)]
pub struct ToggleController<B, S, N> {
    backend: B,
    state: S,
    notifier: N,
    policies: OperationPolicies,
}

impl<B, S, N> ToggleController<B, S, N>
where
    B: Backend,
    S: StateCell<ToggleState>,
    N: Notifier,
{
    pub fn new(backend: B, state: S, notifier: N) -> Self {
        Self {
            backend,
            state,
            notifier,
            policies: OperationPolicies::default(),
        }
    }

    pub fn with_policies(mut self, policies: OperationPolicies) -> Self {
        self.policies = policies;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// 画面に描画したボタンを登録する
    pub fn register(&self, id: CandidateId, kind: ControlKind, initial: FavoriteState) {
        self.state
            .mutate(|state| state.favorites.register(id, kind, initial));
    }

    pub async fn add_favorite(&self, id: &CandidateId) -> Result<RowChange> {
        self.run_favorite(id, FavoriteAction::Add).await
    }

    pub async fn remove_favorite(&self, id: &CandidateId) -> Result<RowChange> {
        self.run_favorite(id, FavoriteAction::Remove).await
    }

    /// 現在の状態に応じて追加か解除のどちらか一方を送る
    pub async fn toggle_favorite(&self, id: &CandidateId) -> Result<RowChange> {
        let current = self
            .state
            .read(|state| state.favorites.state(id))
            .flatten();

        match current {
            Some(state) => self.run_favorite(id, FavoriteAction::for_state(state)).await,
            None => {
                tracing::debug!(candidate_id = %id, "toggle on unregistered control");
                Ok(RowChange::Skipped)
            }
        }
    }

    async fn run_favorite(&self, id: &CandidateId, action: FavoriteAction) -> Result<RowChange> {
        let operation = action.operation();
        let started = self
            .state
            .mutate(|state| state.favorites.begin(id))
            .unwrap_or(false);
        if !started {
            tracing::debug!(candidate_id = %id, operation = operation.name(), "control busy or unknown, skipped");
            return Ok(RowChange::Skipped);
        }

        tracing::debug!(candidate_id = %id, operation = operation.name(), "request sent");
        let reply = match action {
            FavoriteAction::Add => self.backend.add_favorite(id).await,
            FavoriteAction::Remove => self.backend.remove_favorite(id).await,
        };

        match reply.and_then(|reply| reply.expect_status(action.expected_status())) {
            Ok(()) => {
                let change = self
                    .state
                    .mutate(|state| state.favorites.confirm(id, action))
                    .unwrap_or(RowChange::Unchanged);
                tracing::info!(candidate_id = %id, operation = operation.name(), ?change, "favorite confirmed");
                Ok(change)
            }
            Err(err) => {
                self.state.mutate(|state| state.favorites.release(id));
                report_failure(self.policies.for_operation(operation), &self.notifier, operation, &err);
                Err(err)
            }
        }
    }

    /// 履歴を1件削除する
    pub async fn delete_history_entry(&self, key: HistoryKey) -> Result<RowChange> {
        let operation = Operation::DeleteHistory;
        let index = self
            .state
            .mutate(|state| state.history.begin_delete(key))
            .flatten();
        let Some(index) = index else {
            tracing::debug!(key = key.value(), "history busy or entry gone, skipped");
            return Ok(RowChange::Skipped);
        };

        tracing::debug!(index, "deleting history entry");
        let reply = self.backend.delete_history(index).await;

        match reply.and_then(|reply| reply.expect_status(STATUS_SUCCESS)) {
            Ok(()) => {
                self.state.mutate(|state| state.history.confirm_delete(key));
                tracing::info!(index, "history entry deleted");
                Ok(RowChange::Removed)
            }
            Err(err) => {
                self.state.mutate(|state| state.history.release(key));
                report_failure(self.policies.for_operation(operation), &self.notifier, operation, &err);
                Err(err)
            }
        }
    }

    /// 表示中の位置で履歴を削除する
    pub async fn delete_history_at(&self, index: usize) -> Result<RowChange> {
        match self.state.read(|state| state.history.key_at(index)).flatten() {
            Some(key) => self.delete_history_entry(key).await,
            None => {
                tracing::debug!(index, "no history entry at index");
                Ok(RowChange::Skipped)
            }
        }
    }
}
