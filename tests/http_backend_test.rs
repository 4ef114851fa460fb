//! HTTPバックエンドのテスト
//!
//! ローカルのTcpListenerで1回だけ応答するサーバーを立て、
//! ステータス・本文の解釈と送信内容を検証

use candidate_search::client::HttpBackend;
use candidate_search_common::{
    Backend, CandidateId, Error, HistoryEntry, HistoryList, Notifier, ToggleController, ToggleState,
};
use std::cell::RefCell;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// サーバーが受け取ったリクエスト
#[derive(Debug)]
struct ReceivedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl ReceivedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|pos| pos + 4)
}

/// 1リクエストだけ受けて `status` と `body` を返すサーバー
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<ReceivedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept failed");

        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.expect("read failed");
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = find_header_end(&buf) {
                break end;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers: Vec<(String, String)> = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();
        let content_length = headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).await.expect("read failed");
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body =
            String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string();

        let response = format!(
            "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.expect("write failed");
        stream.shutdown().await.ok();

        ReceivedRequest {
            request_line,
            headers,
            body: request_body,
        }
    });

    (format!("http://{}", addr), handle)
}

#[derive(Default)]
struct RecordingNotifier {
    alerts: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// /search が500ならHTTPエラー
#[tokio::test]
async fn test_search_server_error() {
    let (base_url, server) = serve_once(500, r#"{"error": "boom"}"#).await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let result = backend.search("backend engineer").await;
    assert!(matches!(result, Err(Error::Status(500))));

    let request = server.await.unwrap();
    assert_eq!(request.request_line, "POST /search HTTP/1.1");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.body, r#"{"query":"backend engineer"}"#);
}

/// JSONでない本文は形式エラー
#[tokio::test]
async fn test_search_malformed_body() {
    let (base_url, server) = serve_once(200, "<html>maintenance</html>").await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let result = backend.search("qa").await;
    assert!(matches!(result, Err(Error::Protocol(_))));
    server.await.unwrap();
}

/// 正常な検索結果
#[tokio::test]
async fn test_search_success() {
    let (base_url, server) =
        serve_once(200, r#"{"candidates": [{"id": 7, "FИО": "Petrov", "score": 88.4}]}"#).await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let response = backend.search("rust").await.unwrap();
    assert_eq!(response.candidates.len(), 1);
    assert_eq!(response.candidates[0].id, CandidateId::from("7"));
    assert_eq!(response.candidates[0].score, 88);
    server.await.unwrap();
}

/// お気に入り追加はフォーム形式で送る
#[tokio::test]
async fn test_add_favorite_request_on_wire() {
    let (base_url, server) = serve_once(200, r#"{"status": "added"}"#).await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let reply = backend.add_favorite(&CandidateId::from("a b&c")).await.unwrap();
    assert_eq!(reply.status, "added");

    let request = server.await.unwrap();
    assert_eq!(request.request_line, "POST /add_favorite HTTP/1.1");
    assert_eq!(
        request.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(request.body, "candidate_id=a+b%26c");
}

/// 400でもstatus本文があればサーバーの拒否として扱う
#[tokio::test]
async fn test_delete_history_rejected_with_body() {
    let (base_url, server) =
        serve_once(400, r#"{"status": "error", "message": "Invalid index"}"#).await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let reply = backend.delete_history(0).await.unwrap();
    assert_eq!(reply.status, "error");
    assert_eq!(reply.message.as_deref(), Some("Invalid index"));

    let request = server.await.unwrap();
    assert_eq!(request.request_line, "POST /delete_history HTTP/1.1");
    assert_eq!(request.body, "index=0");
}

/// 履歴削除の拒否はコントローラーで「削除できませんでした」になる
#[tokio::test]
async fn test_delete_history_rejection_alert() {
    let (base_url, server) =
        serve_once(400, r#"{"status": "error", "message": "Invalid index"}"#).await;
    let backend = HttpBackend::new(&base_url).unwrap();
    let notifier = RecordingNotifier::default();
    let history = HistoryList::from_entries(vec![HistoryEntry {
        query: "rust".to_string(),
        candidates: Vec::new(),
    }]);
    let state = RefCell::new(ToggleState::with_history(history));
    let controller = ToggleController::new(&backend, &state, &notifier);

    let err = controller.delete_history_at(0).await.unwrap_err();
    match err {
        Error::Rejected { status, message } => {
            assert_eq!(status, "error");
            assert_eq!(message.as_deref(), Some("Invalid index"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(*notifier.alerts.borrow(), vec!["履歴を削除できませんでした。".to_string()]);
    assert_eq!(state.borrow().history.len(), 1);
    assert!(!state.borrow().history.is_busy());
    server.await.unwrap();
}

/// 本文が読めないエラー応答はHTTPエラー
#[tokio::test]
async fn test_remove_favorite_error_without_status_body() {
    let (base_url, server) = serve_once(502, "Bad Gateway").await;
    let backend = HttpBackend::new(&base_url).unwrap();

    let result = backend.remove_favorite(&CandidateId::from("3")).await;
    assert!(matches!(result, Err(Error::Status(502))));
    server.await.unwrap();
}

/// 検索失敗は件数なしで返る（通知はコントローラー側）
#[tokio::test]
async fn test_run_search_failure_returns_none() {
    use candidate_search::pager::run_search;
    use candidate_search::terminal::{Spinner, TerminalNotifier};
    use candidate_search_common::{SearchController, SearchSession};

    let (base_url, server) = serve_once(500, "{}").await;
    let backend = HttpBackend::new(&base_url).unwrap();
    let search = SearchController::new(
        &backend,
        RefCell::new(SearchSession::new()),
        Spinner::default(),
        TerminalNotifier,
    );

    assert_eq!(run_search(&search, "rust").await, None);
    assert!(search.session().borrow().candidates().is_empty());
    server.await.unwrap();

    // 空の条件は送信せずに終わる
    assert_eq!(run_search(&search, "   ").await, None);
}

/// 検索成功は件数を返す
#[tokio::test]
async fn test_run_search_success_returns_count() {
    use candidate_search::pager::run_search;
    use candidate_search::terminal::{Spinner, TerminalNotifier};
    use candidate_search_common::{SearchController, SearchSession};

    let (base_url, server) =
        serve_once(200, r#"{"candidates": [{"id": 1, "score": 50}, {"id": 2, "score": 40}]}"#).await;
    let backend = HttpBackend::new(&base_url).unwrap();
    let search = SearchController::new(
        &backend,
        RefCell::new(SearchSession::new()),
        Spinner::default(),
        TerminalNotifier,
    );

    assert_eq!(run_search(&search, "rust").await, Some(2));
    server.await.unwrap();
}
