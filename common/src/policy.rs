//! 失敗時の通知ポリシー
//!
//! 検索と履歴削除の失敗はアラート、お気に入り操作の失敗はログのみ。
//! この差は操作ごとの設定として明示し、コードに埋め込まない。

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// ユーザーへのブロッキング通知（ブラウザでは `window.alert`）
pub trait Notifier {
    fn alert(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

/// 失敗の見せ方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// ユーザーにアラートを出す
    Alert,
    /// ログに残すだけ
    Log,
}

/// サーバーと同期する操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    AddFavorite,
    RemoveFavorite,
    DeleteHistory,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::AddFavorite => "add_favorite",
            Operation::RemoveFavorite => "remove_favorite",
            Operation::DeleteHistory => "delete_history",
        }
    }

    /// アラートに出す文言
    pub fn failure_message(self, error: &Error) -> &'static str {
        match (self, error) {
            (Operation::Search, _) => "検索の実行中にエラーが発生しました。",
            (Operation::AddFavorite, _) => "お気に入りへの追加に失敗しました。",
            (Operation::RemoveFavorite, _) => "お気に入りからの削除に失敗しました。",
            (Operation::DeleteHistory, Error::Rejected { .. }) => "履歴を削除できませんでした。",
            (Operation::DeleteHistory, _) => "履歴の削除中にエラーが発生しました。",
        }
    }
}

/// 操作ごとの通知ポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationPolicies {
    pub search: FailurePolicy,
    pub add_favorite: FailurePolicy,
    pub remove_favorite: FailurePolicy,
    pub delete_history: FailurePolicy,
}

impl Default for OperationPolicies {
    fn default() -> Self {
        Self {
            search: FailurePolicy::Alert,
            add_favorite: FailurePolicy::Log,
            remove_favorite: FailurePolicy::Log,
            delete_history: FailurePolicy::Alert,
        }
    }
}

impl OperationPolicies {
    pub fn for_operation(&self, operation: Operation) -> FailurePolicy {
        match operation {
            Operation::Search => self.search,
            Operation::AddFavorite => self.add_favorite,
            Operation::RemoveFavorite => self.remove_favorite,
            Operation::DeleteHistory => self.delete_history,
        }
    }
}

/// 失敗をポリシーに従って報告
pub fn report_failure<N: Notifier + ?Sized>(
    policy: FailurePolicy,
    notifier: &N,
    operation: Operation,
    error: &Error,
) {
    match policy {
        FailurePolicy::Alert => {
            tracing::warn!(operation = operation.name(), error = %error, "operation failed");
            notifier.alert(operation.failure_message(error));
        }
        FailurePolicy::Log => {
            tracing::error!(operation = operation.name(), error = %error, "operation failed");
        }
    }
}
