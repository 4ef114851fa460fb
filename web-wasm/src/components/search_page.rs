//! 検索ページ
//!
//! 検索フォーム・オーバーレイ・結果リスト・ページ送りをまとめる。

use crate::api::FetchBackend;
use crate::components::{
    candidate_list::CandidateList, loading_overlay::LoadingOverlay, pagination::Pagination,
};
use crate::state::{
    toggle_controller, BrowserNotifier, BrowserSearch, BrowserToggles, OverlayIndicator,
    SignalCell,
};
use candidate_search_common::{
    CandidateId, ControlKind, Error, FavoriteState, SearchController, SearchSession, StateCell,
    ToggleState,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 新しい結果のボタンを登録する（登録済みの状態は保持）
fn register_results(search: &BrowserSearch, toggles: &BrowserToggles) {
    let ids: Vec<CandidateId> = search
        .session()
        .read(|s| s.candidates().iter().map(|c| c.id.clone()).collect())
        .unwrap_or_default();
    for id in ids {
        toggles.register(id, ControlKind::SearchRow, FavoriteState::Neutral);
    }
}

/// 入力エラーはアラートで伝え済みなのでログに残さない
fn is_input_error(err: &Error) -> bool {
    matches!(err, Error::Validation(_))
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let loading = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let session = SignalCell::new(SearchSession::new());

    let search: BrowserSearch = SearchController::new(
        FetchBackend,
        session,
        OverlayIndicator::new(loading),
        BrowserNotifier,
    );
    let toggles = toggle_controller(ToggleState::new());

    let on_submit = {
        let search = search.clone();
        let toggles = toggles.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let raw = query.get_untracked();
            let search = search.clone();
            let toggles = toggles.clone();
            spawn_local(async move {
                match search.submit_query(&raw).await {
                    Ok(_) => register_results(&search, &toggles),
                    Err(err) if is_input_error(&err) => {}
                    Err(err) => tracing::debug!(%err, "search not applied"),
                }
            });
        }
    };

    view! {
        <section class="search-page">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    class="form-control"
                    placeholder="理想の候補者の条件を入力"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    "検索"
                </button>
            </form>

            <LoadingOverlay visible=loading />

            <CandidateList session=session toggles=toggles />

            <Pagination search=search />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candidate_search_common::session::validate_query;

    #[test]
    fn test_empty_query_is_input_error() {
        let err = validate_query("   ").unwrap_err();
        assert!(is_input_error(&err));
    }

    #[test]
    fn test_server_failures_are_logged() {
        assert!(!is_input_error(&Error::Status(500)));
        assert!(!is_input_error(&Error::Transport("offline".to_string())));
        assert!(!is_input_error(&Error::Protocol("bad body".to_string())));
    }
}
