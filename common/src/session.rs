//! 検索セッション
//!
//! 直近の検索結果を丸ごと保持し、クライアント側でページ分割する。
//! ページ移動でサーバーへは問い合わせない。

use crate::api::Backend;
use crate::error::{Error, Result};
use crate::policy::{report_failure, FailurePolicy, Notifier, Operation};
use crate::state::StateCell;
use crate::types::Candidate;

/// 1ページあたりの候補者数
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// 空の検索条件に対するメッセージ
pub const EMPTY_QUERY_MESSAGE: &str = "理想の候補者の条件を入力してください。";

/// 検索結果とページ位置
///
/// 不変条件: `1 <= current_page <= max(total_pages, 1)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    candidates: Vec<Candidate>,
    current_page: usize,
    page_size: usize,
    searched: bool,
}

/// ページ送りボタンの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    /// ページ送り自体を表示するか（結果0件なら非表示）
    pub visible: bool,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// 現在ページの描画内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageView<'a> {
    /// まだ検索していない
    NotSearched,
    /// 該当者なし
    Empty,
    Page {
        page: usize,
        total_pages: usize,
        /// 先頭行の通し番号（0始まり）
        first_index: usize,
        rows: &'a [Candidate],
    },
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            candidates: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
            searched: false,
        }
    }

    /// 新しい検索結果で置き換え、1ページ目に戻す
    pub fn replace_candidates(&mut self, candidates: Vec<Candidate>) {
        self.candidates = candidates;
        self.current_page = 1;
        self.searched = true;
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(件数 / page_size)`（0件なら0）
    pub fn total_pages(&self) -> usize {
        self.candidates.len().div_ceil(self.page_size)
    }

    /// 現在ページに表示する候補者
    pub fn visible(&self) -> &[Candidate] {
        let start = (self.current_page - 1) * self.page_size;
        if start >= self.candidates.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.candidates.len());
        &self.candidates[start..end]
    }

    /// 前のページへ。1ページ目なら何もしない
    pub fn go_to_previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// 次のページへ。最終ページなら何もしない
    pub fn go_to_next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages() {
            return false;
        }
        self.current_page += 1;
        true
    }

    pub fn controls(&self) -> PaginationControls {
        if self.candidates.is_empty() {
            return PaginationControls {
                visible: false,
                previous_disabled: true,
                next_disabled: true,
            };
        }

        PaginationControls {
            visible: true,
            previous_disabled: self.current_page <= 1,
            next_disabled: self.current_page >= self.total_pages(),
        }
    }

    pub fn render(&self) -> PageView<'_> {
        if !self.searched {
            return PageView::NotSearched;
        }
        if self.candidates.is_empty() {
            return PageView::Empty;
        }
        PageView::Page {
            page: self.current_page,
            total_pages: self.total_pages(),
            first_index: (self.current_page - 1) * self.page_size,
            rows: self.visible(),
        }
    }
}

/// 検索条件の検証（前後の空白を除いて空ならエラー）
pub fn validate_query(raw: &str) -> Result<&str> {
    let query = raw.trim();
    if query.is_empty() {
        Err(Error::Validation(EMPTY_QUERY_MESSAGE.to_string()))
    } else {
        Ok(query)
    }
}

/// 検索中のローディング表示
pub trait LoadingIndicator {
    fn show(&self);

    fn hide(&self);
}

impl<L: LoadingIndicator + ?Sized> LoadingIndicator for &L {
    fn show(&self) {
        (**self).show()
    }

    fn hide(&self) {
        (**self).hide()
    }
}

/// スコープを抜けるとローディング表示を消す
pub struct LoadingGuard<'a, L: LoadingIndicator + ?Sized> {
    indicator: &'a L,
}

impl<'a, L: LoadingIndicator + ?Sized> LoadingGuard<'a, L> {
    pub fn enter(indicator: &'a L) -> Self {
        indicator.show();
        Self { indicator }
    }
}

impl<L: LoadingIndicator + ?Sized> Drop for LoadingGuard<'_, L> {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}

/// 検索の実行とページ移動
#[derive(Debug, Clone)]
pub struct SearchController<B, S, L, N> {
    backend: B,
    session: S,
    loading: L,
    notifier: N,
    policy: FailurePolicy,
}

impl<B, S, L, N> SearchController<B, S, L, N>
where
    B: Backend,
    S: StateCell<SearchSession>,
    L: LoadingIndicator,
    N: Notifier,
{
    pub fn new(backend: B, session: S, loading: L, notifier: N) -> Self {
        Self {
            backend,
            session,
            loading,
            notifier,
            policy: FailurePolicy::Alert,
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// 検索を実行し、成功したら結果を差し替えて1ページ目を表示する
    ///
    /// 失敗時はセッションを変更しない。戻り値は取得件数。
    pub async fn submit_query(&self, raw: &str) -> Result<usize> {
        let query = match validate_query(raw) {
            Ok(query) => query,
            Err(err) => {
                self.notifier.alert(&err.to_string());
                return Err(err);
            }
        };

        tracing::debug!(query, "submitting search");

        let outcome = {
            let _loading = LoadingGuard::enter(&self.loading);
            self.backend.search(query).await
        };

        match outcome {
            Ok(response) => {
                let count = response.candidates.len();
                if self
                    .session
                    .mutate(|session| session.replace_candidates(response.candidates))
                    .is_none()
                {
                    tracing::debug!("search session dropped before the response arrived");
                }
                tracing::info!(query, count, "search completed");
                Ok(count)
            }
            Err(err) => {
                report_failure(self.policy, &self.notifier, Operation::Search, &err);
                Err(err)
            }
        }
    }

    pub fn go_to_previous_page(&self) -> bool {
        self.session
            .mutate(SearchSession::go_to_previous_page)
            .unwrap_or(false)
    }

    pub fn go_to_next_page(&self) -> bool {
        self.session
            .mutate(SearchSession::go_to_next_page)
            .unwrap_or(false)
    }
}
