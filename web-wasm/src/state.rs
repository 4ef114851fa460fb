//! 画面状態とブラウザ側の通知・ローディング表示

use crate::api::FetchBackend;
use candidate_search_common::{
    LoadingIndicator, Notifier, SearchController, SearchSession, StateCell, ToggleController,
    ToggleState,
};
use leptos::prelude::*;

/// シグナルを状態ハンドルとして扱うラッパー
///
/// コンポーネント破棄後にレスポンスが届いた場合は `None` になる。
pub struct SignalCell<T>(RwSignal<T>);

impl<T: Send + Sync + 'static> SignalCell<T> {
    pub fn new(value: T) -> Self {
        Self(RwSignal::new(value))
    }
}

impl<T> SignalCell<T> {
    pub fn signal(&self) -> RwSignal<T> {
        self.0
    }
}

impl<T> Clone for SignalCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SignalCell<T> {}

impl<T: Send + Sync + 'static> StateCell<T> for SignalCell<T> {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// `window.alert` による通知
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

/// 検索中オーバーレイ
#[derive(Clone, Copy)]
pub struct OverlayIndicator(RwSignal<bool>);

impl OverlayIndicator {
    pub fn new(visible: RwSignal<bool>) -> Self {
        Self(visible)
    }
}

impl LoadingIndicator for OverlayIndicator {
    fn show(&self) {
        self.0.try_set(true);
    }

    fn hide(&self) {
        self.0.try_set(false);
    }
}

pub type BrowserSearch =
    SearchController<FetchBackend, SignalCell<SearchSession>, OverlayIndicator, BrowserNotifier>;

pub type BrowserToggles = ToggleController<FetchBackend, SignalCell<ToggleState>, BrowserNotifier>;

pub fn toggle_controller(state: ToggleState) -> BrowserToggles {
    ToggleController::new(FetchBackend, SignalCell::new(state), BrowserNotifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::Owner;

    #[test]
    fn test_signal_cell_read_and_mutate() {
        let owner = Owner::new();
        owner.with(|| {
            let cell = SignalCell::new(SearchSession::with_page_size(2));
            assert_eq!(cell.read(|s| s.page_size()), Some(2));
            assert_eq!(cell.mutate(|s| s.go_to_next_page()), Some(false));
        });
    }

    #[test]
    fn test_signal_cell_after_dispose() {
        let owner = Owner::new();
        let cell = owner.with(|| SignalCell::new(ToggleState::new()));
        cell.signal().dispose();
        assert_eq!(cell.read(|s| s.favorites.len()), None);
        assert_eq!(cell.mutate(|s| s.favorites.len()), None);
    }

    #[test]
    fn test_overlay_indicator() {
        let owner = Owner::new();
        owner.with(|| {
            let visible = RwSignal::new(false);
            let overlay = OverlayIndicator::new(visible);
            overlay.show();
            assert!(visible.get_untracked());
            overlay.hide();
            assert!(!visible.get_untracked());
        });
    }
}
