//! お気に入りボタンの行状態
//!
//! 表示（クラス・アイコン・ラベル）は行ごとの [`FavoriteState`] から導出する。
//! 表示を読み取って状態を推測することはしない。

use crate::api::{STATUS_ADDED, STATUS_REMOVED};
use crate::policy::Operation;
use crate::types::CandidateId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// お気に入り状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteState {
    #[default]
    Neutral,
    Favorited,
}

impl FavoriteState {
    pub fn from_flag(favorited: bool) -> Self {
        if favorited {
            FavoriteState::Favorited
        } else {
            FavoriteState::Neutral
        }
    }

    pub fn is_favorited(self) -> bool {
        self == FavoriteState::Favorited
    }

    pub fn button_class(self) -> &'static str {
        match self {
            FavoriteState::Neutral => "btn btn-outline-success btn-sm",
            FavoriteState::Favorited => "btn btn-success btn-sm",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            FavoriteState::Neutral => "bi bi-star-plus me-1",
            FavoriteState::Favorited => "bi bi-star-fill me-1",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FavoriteState::Neutral => "お気に入りに追加",
            FavoriteState::Favorited => "お気に入り登録済み",
        }
    }
}

/// ボタンが置かれている場所
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// 検索結果の行
    SearchRow,
    /// お気に入り一覧の行（解除されたら行ごと消える）
    FavoritesRow,
    /// プロフィールページのボタン
    ProfileButton,
}

/// お気に入り操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

impl FavoriteAction {
    /// 状態から次の操作を決める
    pub fn for_state(state: FavoriteState) -> Self {
        match state {
            FavoriteState::Neutral => FavoriteAction::Add,
            FavoriteState::Favorited => FavoriteAction::Remove,
        }
    }

    pub fn expected_status(self) -> &'static str {
        match self {
            FavoriteAction::Add => STATUS_ADDED,
            FavoriteAction::Remove => STATUS_REMOVED,
        }
    }

    pub fn operation(self) -> Operation {
        match self {
            FavoriteAction::Add => Operation::AddFavorite,
            FavoriteAction::Remove => Operation::RemoveFavorite,
        }
    }
}

/// 操作の結果として画面に起きた変化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    Favorited,
    Unfavorited,
    /// 行が画面から消えた
    Removed,
    /// 確定したが表示は変わらない
    Unchanged,
    /// 未登録・処理中・画面破棄のため送信しなかった
    Skipped,
}

/// 1つのボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowControl {
    pub kind: ControlKind,
    pub state: FavoriteState,
    /// リクエスト処理中（ボタンは無効化される）
    pub in_flight: bool,
}

/// 候補者IDごとのボタン状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteBoard {
    rows: HashMap<CandidateId, RowControl>,
}

impl FavoriteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// ボタンを登録する。既に登録済みなら状態はそのまま
    pub fn register(&mut self, id: CandidateId, kind: ControlKind, state: FavoriteState) {
        self.rows.entry(id).or_insert(RowControl {
            kind,
            state,
            in_flight: false,
        });
    }

    pub fn state(&self, id: &CandidateId) -> Option<FavoriteState> {
        self.rows.get(id).map(|row| row.state)
    }

    pub fn contains(&self, id: &CandidateId) -> bool {
        self.rows.contains_key(id)
    }

    pub fn is_in_flight(&self, id: &CandidateId) -> bool {
        self.rows.get(id).is_some_and(|row| row.in_flight)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 送信開始。未登録または処理中なら `false`
    pub fn begin(&mut self, id: &CandidateId) -> bool {
        match self.rows.get_mut(id) {
            Some(row) if !row.in_flight => {
                row.in_flight = true;
                true
            }
            _ => false,
        }
    }

    /// サーバーの確定を反映する
    pub fn confirm(&mut self, id: &CandidateId, action: FavoriteAction) -> RowChange {
        let Some(row) = self.rows.get_mut(id) else {
            return RowChange::Unchanged;
        };
        row.in_flight = false;

        match (action, row.kind) {
            (FavoriteAction::Remove, ControlKind::FavoritesRow) => {
                self.rows.remove(id);
                RowChange::Removed
            }
            (FavoriteAction::Remove, _) if row.state == FavoriteState::Neutral => RowChange::Unchanged,
            (FavoriteAction::Remove, _) => {
                row.state = FavoriteState::Neutral;
                RowChange::Unfavorited
            }
            (FavoriteAction::Add, _) if row.state == FavoriteState::Favorited => RowChange::Unchanged,
            (FavoriteAction::Add, _) => {
                row.state = FavoriteState::Favorited;
                RowChange::Favorited
            }
        }
    }

    /// 失敗時。状態は変えずに処理中だけ解除する
    pub fn release(&mut self, id: &CandidateId) {
        if let Some(row) = self.rows.get_mut(id) {
            row.in_flight = false;
        }
    }
}
