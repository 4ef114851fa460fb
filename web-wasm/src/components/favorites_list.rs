//! お気に入り一覧ページ

use crate::components::candidate_list::ProfileLink;
use crate::components::favorite_button::RemoveFavoriteButton;
use crate::seed::{read_json, FAVORITES_SEED_ID};
use crate::state::{toggle_controller, BrowserToggles};
use candidate_search_common::{ControlKind, FavoriteEntry, FavoriteState, ToggleState};
use leptos::prelude::*;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let entries: Vec<FavoriteEntry> = read_json(FAVORITES_SEED_ID);
    let toggles = toggle_controller(ToggleState::new());
    for entry in &entries {
        toggles.register(entry.id.clone(), ControlKind::FavoritesRow, FavoriteState::Favorited);
    }
    tracing::debug!(count = entries.len(), "favorites loaded");

    let board = toggles.state().signal();
    let remaining = move || {
        board.with(|s| {
            entries
                .iter()
                .filter(|entry| s.favorites.contains(&entry.id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let is_empty = move || board.with(|s| s.favorites.is_empty());

    view! {
        <section class="favorites-page">
            <h2>"お気に入り"</h2>
            <Show when=move || !is_empty() fallback=|| view! { <p class="text-muted">"お気に入りはまだありません。"</p> }>
                <ul class="favorites-list">
                    <For
                        each=remaining.clone()
                        key=|entry| entry.id.clone()
                        children={
                            let toggles = toggles.clone();
                            move |entry| {
                                let toggles = toggles.clone();
                                view! { <FavoriteRow entry=entry toggles=toggles /> }
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn FavoriteRow(entry: FavoriteEntry, toggles: BrowserToggles) -> impl IntoView {
    let name = entry.display_name().to_string();

    view! {
        <li class="favorite-row">
            <ProfileLink id=entry.id.clone() name=name />
            <RemoveFavoriteButton id=entry.id toggles=toggles />
        </li>
    }
}
