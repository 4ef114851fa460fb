//! メインアプリケーションコンポーネント

use crate::components::{
    favorites_list::FavoritesPage, header::Header, history_list::HistoryPage,
    profile_favorite::ProfileFavorite, search_page::SearchPage,
};
use candidate_search_common::CandidateId;
use leptos::prelude::*;

/// 表示するページ（`location.pathname` から決める）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    Favorites,
    History,
    Profile(CandidateId),
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/search" => Route::Search,
            "/favorites" => Route::Favorites,
            "/history" => Route::History,
            _ => match path.strip_prefix("/profile/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Profile(CandidateId::from(id)),
                _ => Route::NotFound,
            },
        }
    }

    fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or(Route::Search)
    }
}

#[component]
pub fn App() -> impl IntoView {
    let route = Route::current();
    tracing::debug!(?route, "page selected");

    let page = match route {
        Route::Search => view! { <SearchPage /> }.into_any(),
        Route::Favorites => view! { <FavoritesPage /> }.into_any(),
        Route::History => view! { <HistoryPage /> }.into_any(),
        Route::Profile(id) => view! { <ProfileFavorite id=id /> }.into_any(),
        Route::NotFound => view! { <p class="text-muted">"ページが見つかりません。"</p> }.into_any(),
    };

    view! {
        <div class="container">
            <Header />
            {page}
        </div>
    }
}
