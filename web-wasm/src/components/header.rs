//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"候補者検索"</h1>
            <nav class="nav">
                <a class="nav-link" href="/search">"検索"</a>
                <a class="nav-link" href="/favorites">"お気に入り"</a>
                <a class="nav-link" href="/history">"検索履歴"</a>
            </nav>
        </header>
    }
}
