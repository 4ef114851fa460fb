//! 検索履歴リスト
//!
//! サーバーは位置（index）で履歴を削除する。画面側では各項目に固定キーを
//! 振り、送信時点の位置から index を求める。削除で位置がずれるため、
//! 削除リクエストは同時に1件までしか出さない。

use crate::types::HistoryEntry;

/// 履歴項目の固定キー（画面内でのみ有効）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HistoryKey(u64);

impl HistoryKey {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub key: HistoryKey,
    pub entry: HistoryEntry,
}

/// 表示中の履歴
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList {
    items: Vec<HistoryItem>,
    next_key: u64,
    pending: Option<HistoryKey>,
}

impl HistoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.push(entry);
        }
        list
    }

    pub fn push(&mut self, entry: HistoryEntry) -> HistoryKey {
        let key = HistoryKey(self.next_key);
        self.next_key += 1;
        self.items.push(HistoryItem { key, entry });
        key
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn key_at(&self, index: usize) -> Option<HistoryKey> {
        self.items.get(index).map(|item| item.key)
    }

    /// 現在の位置（= サーバーに送る index）
    pub fn position(&self, key: HistoryKey) -> Option<usize> {
        self.items.iter().position(|item| item.key == key)
    }

    pub fn is_pending(&self, key: HistoryKey) -> bool {
        self.pending == Some(key)
    }

    /// 削除リクエストが処理中か
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// 削除開始。送るべき index を返す。項目がない・他の削除が処理中なら `None`
    pub fn begin_delete(&mut self, key: HistoryKey) -> Option<usize> {
        if self.pending.is_some() {
            return None;
        }
        let index = self.position(key)?;
        self.pending = Some(key);
        Some(index)
    }

    /// サーバーの確定を反映する
    pub fn confirm_delete(&mut self, key: HistoryKey) -> bool {
        if self.pending == Some(key) {
            self.pending = None;
        }
        match self.position(key) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// 失敗時。項目は残したまま処理中を解除する
    pub fn release(&mut self, key: HistoryKey) {
        if self.pending == Some(key) {
            self.pending = None;
        }
    }
}
