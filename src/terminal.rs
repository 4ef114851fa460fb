//! 端末向けの通知・ローディング表示・ページ描画

use candidate_search_common::{
    CandidateId, FavoriteBoard, FavoriteState, LoadingIndicator, Notifier, PageView, SearchSession,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// アラートを標準エラーに出す
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        eprintln!("⚠ {}", message);
    }
}

/// 検索中のスピナー
#[derive(Default)]
pub struct Spinner {
    bar: RefCell<Option<ProgressBar>>,
}

impl LoadingIndicator for Spinner {
    fn show(&self) {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message("検索中...");
        bar.enable_steady_tick(Duration::from_millis(100));
        *self.bar.borrow_mut() = Some(bar);
    }

    fn hide(&self) {
        if let Some(bar) = self.bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

fn favorite_marker(state: Option<FavoriteState>) -> &'static str {
    if state.is_some_and(FavoriteState::is_favorited) {
        "★"
    } else {
        "☆"
    }
}

/// 現在ページを文字列に描画
///
/// `profile_url` は候補者IDからプロフィールURLを作る。
pub fn render_page(
    session: &SearchSession,
    board: &FavoriteBoard,
    profile_url: impl Fn(&CandidateId) -> String,
) -> String {
    match session.render() {
        PageView::NotSearched => String::new(),
        PageView::Empty => "該当する候補者がいません。".to_string(),
        PageView::Page { page, total_pages, first_index, rows } => {
            let mut lines = vec![format!(
                "[{}/{}] {}名",
                page,
                total_pages,
                session.candidates().len()
            )];

            for (offset, candidate) in rows.iter().enumerate() {
                let busy = if board.is_in_flight(&candidate.id) { " …" } else { "" };
                lines.push(format!(
                    "  {:>2}. {} {} {:>4}  {}{}",
                    first_index + offset + 1,
                    favorite_marker(board.state(&candidate.id)),
                    candidate.display_name(),
                    candidate.score_label(),
                    profile_url(&candidate.id),
                    busy,
                ));
            }

            let controls = session.controls();
            lines.push(format!(
                "  [p]前へ{}  [n]次へ{}",
                if controls.previous_disabled { "(無効)" } else { "" },
                if controls.next_disabled { "(無効)" } else { "" },
            ));
            lines.join("\n")
        }
    }
}
