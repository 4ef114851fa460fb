//! UIコンポーネント

pub mod candidate_list;
pub mod favorite_button;
pub mod favorites_list;
pub mod header;
pub mod history_list;
pub mod loading_overlay;
pub mod pagination;
pub mod profile_favorite;
pub mod search_page;
