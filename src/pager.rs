//! 対話式の検索結果ページャ
//!
//! 検索結果をページ単位で表示し、ページ送りとお気に入り切替を受け付ける。

use crate::client::HttpBackend;
use crate::error::{CandidateSearchError, Result};
use crate::terminal::{render_page, Spinner, TerminalNotifier};
use candidate_search_common::{
    CandidateId, ControlKind, FavoriteState, RowChange, SearchController, SearchSession,
    StateCell, ToggleController, ToggleState,
};
use dialoguer::Input;
use std::cell::RefCell;

pub type TerminalSearch<'a> =
    SearchController<&'a HttpBackend, RefCell<SearchSession>, Spinner, TerminalNotifier>;
pub type TerminalToggles<'a> =
    ToggleController<&'a HttpBackend, RefCell<ToggleState>, TerminalNotifier>;

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerAction {
    Next,
    Previous,
    /// 表示番号（1始まりの通し番号）の候補者のお気に入りを切り替え
    Toggle(usize),
    /// 新しい条件で再検索
    Search(String),
    Quit,
    Unknown(String),
}

pub const PAGER_HELP: &str = "操作: [n]次へ [p]前へ [f 番号]お気に入り切替 [s 条件]再検索 [q]終了";

pub fn parse_action(input: &str) -> PagerAction {
    let trimmed = input.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "" | "n" => PagerAction::Next,
        "p" => PagerAction::Previous,
        "q" | "Q" => PagerAction::Quit,
        "f" => match rest.parse::<usize>() {
            Ok(number) if number > 0 => PagerAction::Toggle(number),
            _ => PagerAction::Unknown(trimmed.to_string()),
        },
        "s" if !rest.is_empty() => PagerAction::Search(rest.to_string()),
        _ => PagerAction::Unknown(trimmed.to_string()),
    }
}

/// 現在ページに表示中の候補者を表示番号で探す
pub fn visible_candidate(session: &SearchSession, number: usize) -> Option<CandidateId> {
    let start = (session.current_page() - 1) * session.page_size();
    number
        .checked_sub(start + 1)
        .and_then(|offset| session.visible().get(offset))
        .map(|candidate| candidate.id.clone())
}

/// 表示中の行をお気に入りボタンとして登録
pub fn register_visible_rows(search: &TerminalSearch<'_>, toggles: &TerminalToggles<'_>) {
    let ids: Vec<CandidateId> = search
        .session()
        .read(|session| session.visible().iter().map(|c| c.id.clone()).collect())
        .unwrap_or_default();
    for id in ids {
        toggles.register(id, ControlKind::SearchRow, FavoriteState::Neutral);
    }
}

/// 検索して件数を返す
///
/// 失敗はコントローラーが通知済みなので、呼び出し側には `None` だけ返す。
pub async fn run_search(search: &TerminalSearch<'_>, query: &str) -> Option<usize> {
    match search.submit_query(query).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::debug!(%err, "search not applied");
            None
        }
    }
}

pub fn print_page(search: &TerminalSearch<'_>, toggles: &TerminalToggles<'_>, backend: &HttpBackend) {
    register_visible_rows(search, toggles);
    let text = search
        .session()
        .read(|session| {
            toggles
                .state()
                .read(|state| render_page(session, &state.favorites, |id| backend.profile_url(id)))
                .unwrap_or_default()
        })
        .unwrap_or_default();
    println!("{}\n", text);
}

/// 対話ループ
pub async fn run_interactive(
    search: &TerminalSearch<'_>,
    toggles: &TerminalToggles<'_>,
    backend: &HttpBackend,
) -> Result<()> {
    println!("{}\n", PAGER_HELP);
    print_page(search, toggles, backend);

    loop {
        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CandidateSearchError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            PagerAction::Next => {
                if !search.go_to_next_page() {
                    println!("  → 最後のページです\n");
                    continue;
                }
            }
            PagerAction::Previous => {
                if !search.go_to_previous_page() {
                    println!("  → 最初のページです\n");
                    continue;
                }
            }
            PagerAction::Toggle(number) => {
                let id = search
                    .session()
                    .read(|session| visible_candidate(session, number))
                    .flatten();
                let Some(id) = id else {
                    println!("  → {}番はこのページにありません\n", number);
                    continue;
                };
                match toggles.toggle_favorite(&id).await {
                    Ok(RowChange::Favorited) => println!("  → お気に入りに追加しました"),
                    Ok(RowChange::Unfavorited) => println!("  → お気に入りから外しました"),
                    Ok(_) => {}
                    // 失敗はポリシーに従って報告済み
                    Err(_) => println!("  → 変更できませんでした"),
                }
            }
            PagerAction::Search(query) => {
                // 失敗時は前の結果のまま
                run_search(search, &query).await;
            }
            PagerAction::Quit => break,
            PagerAction::Unknown(input) => {
                println!("  → 不明な操作: {}\n{}\n", input, PAGER_HELP);
                continue;
            }
        }

        print_page(search, toggles, backend);
    }

    Ok(())
}
