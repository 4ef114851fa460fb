//! 検索履歴ページ

use crate::seed::{read_json, HISTORY_SEED_ID};
use crate::state::{toggle_controller, BrowserToggles};
use candidate_search_common::{HistoryEntry, HistoryItem, HistoryList, ToggleState};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let entries: Vec<HistoryEntry> = read_json(HISTORY_SEED_ID);
    tracing::debug!(count = entries.len(), "history loaded");
    let toggles = toggle_controller(ToggleState::with_history(HistoryList::from_entries(entries)));

    let state = toggles.state().signal();
    let items = move || state.with(|s| s.history.items().to_vec());
    let is_empty = move || state.with(|s| s.history.is_empty());

    view! {
        <section class="history-page">
            <h2>"検索履歴"</h2>
            <Show when=move || !is_empty() fallback=|| view! { <p class="text-muted">"検索履歴はありません。"</p> }>
                <div class="accordion">
                    <For
                        each=items
                        key=|item| item.key
                        children={
                            let toggles = toggles.clone();
                            move |item| {
                                let toggles = toggles.clone();
                                view! { <HistoryRow item=item toggles=toggles /> }
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn HistoryRow(item: HistoryItem, toggles: BrowserToggles) -> impl IntoView {
    let key = item.key;
    let state = toggles.state().signal();
    let pending = move || state.with(|s| s.history.is_pending(key));
    let busy = move || state.with(|s| s.history.is_busy());

    let on_delete = move |_| {
        let toggles = toggles.clone();
        spawn_local(async move {
            if let Err(err) = toggles.delete_history_entry(key).await {
                tracing::debug!(key = key.value(), %err, "history deletion failed");
            }
        });
    };

    let names = item
        .entry
        .candidates
        .iter()
        .map(|c| format!("{} ({})", c.display_name(), c.score_label()))
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="accordion-item">
            <div class="accordion-header">
                <span class="history-query">{item.entry.query.clone()}</span>
                <span class="history-count">{format!("{}名", item.entry.candidates.len())}</span>
                <button
                    class="btn btn-outline-danger btn-sm"
                    disabled=busy
                    on:click=on_delete
                >
                    {move || if pending() { "削除中..." } else { "削除" }}
                </button>
            </div>
            <div class="accordion-body">{names}</div>
        </div>
    }
}
