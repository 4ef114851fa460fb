//! Candidate Search Common Library
//!
//! CLIとWeb(WASM)で共有される状態管理・ページ分割・サーバー同期

pub mod api;
pub mod error;
pub mod favorites;
pub mod history;
pub mod policy;
pub mod session;
pub mod state;
pub mod toggle;
pub mod types;

#[cfg(test)]
mod testing;

pub use api::{Backend, Endpoint, RawReply, RequestBody, parse_search_response, parse_status_reply};
pub use error::{Error, Result};
pub use favorites::{ControlKind, FavoriteAction, FavoriteBoard, FavoriteState, RowChange};
pub use history::{HistoryItem, HistoryKey, HistoryList};
pub use policy::{FailurePolicy, Notifier, Operation, OperationPolicies};
pub use session::{
    LoadingGuard, LoadingIndicator, PageView, PaginationControls, SearchController, SearchSession,
    DEFAULT_PAGE_SIZE,
};
pub use state::StateCell;
pub use toggle::{ToggleController, ToggleState};
pub use types::{Candidate, CandidateId, FavoriteEntry, HistoryEntry, SearchResponse, StatusReply};
