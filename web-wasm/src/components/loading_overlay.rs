//! 検索中オーバーレイ

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="loading-overlay">
                <div class="spinner-border" role="status"></div>
                <p class="loading-text">"検索中..."</p>
            </div>
        </Show>
    }
}
