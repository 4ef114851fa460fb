//! サーバー描画済みページに埋め込まれた初期データ

use candidate_search_common::Result;
use serde::de::DeserializeOwned;
use web_sys::Element;

pub const FAVORITES_SEED_ID: &str = "favorites-data";
pub const HISTORY_SEED_ID: &str = "history-data";
pub const PROFILE_SEED_ID: &str = "profile-data";
pub const FAVORITED_ATTRIBUTE: &str = "data-favorited";

pub fn parse_seed<T: DeserializeOwned>(text: &str) -> Result<T> {
    Ok(serde_json::from_str(text.trim())?)
}

pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1")
    )
}

fn element(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// 要素のテキストをJSONとして読む（無い・壊れている場合は既定値）
pub fn read_json<T: DeserializeOwned + Default>(element_id: &str) -> T {
    let Some(text) = element(element_id).and_then(|el| el.text_content()) else {
        tracing::warn!(element_id, "seed element missing");
        return T::default();
    };

    match parse_seed(&text) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(element_id, %err, "seed data unreadable");
            T::default()
        }
    }
}

pub fn read_flag(element_id: &str, attribute: &str) -> bool {
    let value = element(element_id).and_then(|el| el.get_attribute(attribute));
    if value.is_none() {
        tracing::warn!(element_id, attribute, "seed attribute missing");
    }
    parse_flag(value.as_deref())
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_reads_flag_from_document() {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element("div").unwrap();
        el.set_id(PROFILE_SEED_ID);
        el.set_attribute(FAVORITED_ATTRIBUTE, "true").unwrap();
        document.body().unwrap().append_child(&el).unwrap();

        assert!(read_flag(PROFILE_SEED_ID, FAVORITED_ATTRIBUTE));
        el.remove();
    }

    #[wasm_bindgen_test]
    fn wasm_missing_seed_is_empty() {
        let entries: Vec<candidate_search_common::FavoriteEntry> = read_json("no-such-seed");
        assert!(entries.is_empty());
    }
}
