//! プロフィールページのお気に入りボタン

use crate::components::favorite_button::FavoriteButton;
use crate::seed::{read_flag, FAVORITED_ATTRIBUTE, PROFILE_SEED_ID};
use crate::state::toggle_controller;
use candidate_search_common::{CandidateId, ControlKind, FavoriteState, ToggleState};
use leptos::prelude::*;

#[component]
pub fn ProfileFavorite(id: CandidateId) -> impl IntoView {
    let initial = FavoriteState::from_flag(read_flag(PROFILE_SEED_ID, FAVORITED_ATTRIBUTE));
    let toggles = toggle_controller(ToggleState::new());
    toggles.register(id.clone(), ControlKind::ProfileButton, initial);

    view! {
        <section class="profile-favorite">
            <FavoriteButton id=id toggles=toggles />
        </section>
    }
}
