//! お気に入りボタン
//!
//! 見た目は登録済みボタンの状態から導出する。サーバーが確認するまで
//! 見た目は変わらず、送信中は押せない。

use crate::state::BrowserToggles;
use candidate_search_common::{CandidateId, FavoriteState};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn FavoriteButton(id: CandidateId, toggles: BrowserToggles) -> impl IntoView {
    let board = toggles.state().signal();
    let state = Memo::new({
        let id = id.clone();
        move |_| board.with(|s| s.favorites.state(&id).unwrap_or_default())
    });
    let busy = Memo::new({
        let id = id.clone();
        move |_| board.with(|s| s.favorites.is_in_flight(&id))
    });

    let on_click = move |_| {
        let toggles = toggles.clone();
        let id = id.clone();
        spawn_local(async move {
            if let Err(err) = toggles.toggle_favorite(&id).await {
                tracing::debug!(candidate_id = %id, %err, "favorite toggle failed");
            }
        });
    };

    view! {
        <button
            class=move || state.get().button_class()
            disabled=move || busy.get()
            on:click=on_click
        >
            <i class=move || state.get().icon_class()></i>
            " "
            {move || state.get().label()}
        </button>
    }
}

/// お気に入り一覧の削除ボタン（成功すると行ごと消える）
#[component]
pub fn RemoveFavoriteButton(id: CandidateId, toggles: BrowserToggles) -> impl IntoView {
    let board = toggles.state().signal();
    let busy = Memo::new({
        let id = id.clone();
        move |_| board.with(|s| s.favorites.is_in_flight(&id))
    });

    let on_click = move |_| {
        let toggles = toggles.clone();
        let id = id.clone();
        spawn_local(async move {
            if let Err(err) = toggles.remove_favorite(&id).await {
                tracing::debug!(candidate_id = %id, %err, "favorite removal failed");
            }
        });
    };

    view! {
        <button
            class="btn btn-outline-danger btn-sm"
            disabled=move || busy.get()
            on:click=on_click
        >
            <i class=FavoriteState::Favorited.icon_class()></i>
            " お気に入りから削除"
        </button>
    }
}
