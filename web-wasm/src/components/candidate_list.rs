//! 検索結果リスト

use crate::components::favorite_button::FavoriteButton;
use crate::state::{BrowserToggles, SignalCell};
use candidate_search_common::{Candidate, CandidateId, PageView, SearchSession};
use leptos::prelude::*;

/// 結果表示の見出し
fn summary(view: &PageView<'_>, total: usize) -> Option<String> {
    match view {
        PageView::NotSearched => None,
        PageView::Empty => Some("該当する候補者がいません。".to_string()),
        PageView::Page { page, total_pages, .. } => {
            Some(format!("{}名の候補者（{}/{}ページ）", total, page, total_pages))
        }
    }
}

/// 表示中ページの行（通し番号付き）
fn page_rows(session: &SearchSession) -> Vec<(usize, Candidate)> {
    match session.render() {
        PageView::Page { first_index, rows, .. } => rows
            .iter()
            .cloned()
            .enumerate()
            .map(|(offset, candidate)| (first_index + offset, candidate))
            .collect(),
        _ => Vec::new(),
    }
}

#[component]
pub fn CandidateList(session: SignalCell<SearchSession>, toggles: BrowserToggles) -> impl IntoView {
    let session = session.signal();
    let heading = move || session.with(|s| summary(&s.render(), s.candidates().len()));

    view! {
        <div class="candidate-results">
            {move || heading().map(|text| view! { <p class="results-summary">{text}</p> })}
            <ul class="candidate-list">
                <For
                    each=move || session.with(page_rows)
                    key=|(index, candidate)| (*index, candidate.id.clone())
                    children=move |(index, candidate)| {
                        let toggles = toggles.clone();
                        view! { <CandidateRow index=index candidate=candidate toggles=toggles /> }
                    }
                />
            </ul>
        </div>
    }
}

#[component]
fn CandidateRow(index: usize, candidate: Candidate, toggles: BrowserToggles) -> impl IntoView {
    let name = candidate.display_name().to_string();
    let score = candidate.score_label();

    view! {
        <li class="candidate-row">
            <span class="candidate-index">{index + 1}"."</span>
            <ProfileLink id=candidate.id.clone() name=name />
            <span class="candidate-score">{score}</span>
            <FavoriteButton id=candidate.id toggles=toggles />
        </li>
    }
}

/// プロフィールへのリンク（検索結果を残すため別タブで開く）
#[component]
pub fn ProfileLink(id: CandidateId, name: String) -> impl IntoView {
    view! {
        <a class="candidate-name" href=id.profile_path() target="_blank">{name}</a>
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn wasm_profile_link_opens_new_tab() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host: web_sys::HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&host).unwrap();

        let handle = leptos::mount::mount_to(host.clone(), || {
            view! { <ProfileLink id=CandidateId::from("42") name="Ivanov".to_string() /> }
        });

        let anchor = host.query_selector("a").unwrap().unwrap();
        assert_eq!(anchor.get_attribute("href").as_deref(), Some("/profile/42"));
        assert_eq!(anchor.get_attribute("target").as_deref(), Some("_blank"));

        drop(handle);
        host.remove();
    }
}
