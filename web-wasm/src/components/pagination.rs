//! ページ送りコンポーネント

use crate::state::BrowserSearch;
use candidate_search_common::SearchSession;
use leptos::prelude::*;

#[component]
pub fn Pagination(search: BrowserSearch) -> impl IntoView {
    let session = search.session().signal();
    let controls = move || session.with(SearchSession::controls);
    let page_label = move || session.with(|s| format!("{} / {}", s.current_page(), s.total_pages()));

    let on_previous = {
        let search = search.clone();
        move |_| {
            search.go_to_previous_page();
        }
    };
    let on_next = move |_| {
        search.go_to_next_page();
    };

    view! {
        <nav class="pagination" class:hidden=move || !controls().visible>
            <button
                class="btn btn-secondary"
                disabled=move || controls().previous_disabled
                on:click=on_previous
            >
                "前へ"
            </button>
            <span class="page-indicator">{page_label}</span>
            <button
                class="btn btn-secondary"
                disabled=move || controls().next_disabled
                on:click=on_next
            >
                "次へ"
            </button>
        </nav>
    }
}
