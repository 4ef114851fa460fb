//! バックエンドAPI連携

pub mod fetch;

pub use fetch::FetchBackend;
