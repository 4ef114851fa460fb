//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use candidate_search::client::HttpBackend;
use candidate_search::error::CandidateSearchError;

/// 不正な接続先URL
#[test]
fn test_invalid_base_url() {
    let result = HttpBackend::new("://missing-scheme");
    assert!(matches!(result, Err(CandidateSearchError::InvalidUrl(_))));
}

/// CandidateSearchErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CandidateSearchError::Config("テスト設定エラー".to_string()),
        CandidateSearchError::Prompt("入力中断".to_string()),
        CandidateSearchError::Common(candidate_search_common::Error::Status(500)),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CandidateSearchError = io_err.into();

    assert!(matches!(err, CandidateSearchError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: CandidateSearchError = json_err.into();

    assert!(matches!(err, CandidateSearchError::JsonParse(_)));
}

/// common::Errorからの変換
#[test]
fn test_common_error_conversion() {
    let common_err = candidate_search_common::Error::Validation("条件が空です".to_string());
    let err: CandidateSearchError = common_err.into();

    assert!(matches!(err, CandidateSearchError::Common(_)));
}

/// 透過的エラーなのでメッセージがそのまま表示される
#[test]
fn test_error_chain_transparent() {
    let common_err = candidate_search_common::Error::Status(503);
    let err: CandidateSearchError = common_err.into();

    assert_eq!(format!("{}", err), "HTTPエラー: 503");
}
