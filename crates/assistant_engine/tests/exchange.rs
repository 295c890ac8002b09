use std::sync::Mutex;

use assistant_engine::{
    check_backend_health, run_chat, run_crawl, Backend, BackendError, BackendSettings, ChatRequest,
    CrawlMode, CrawlRequest, FailureKind, ReqwestBackend, StaticTabLocator, FALLBACK_REPLY,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records every request and answers with a canned body.
struct RecordingBackend {
    reply: Value,
    crawls: Mutex<Vec<CrawlRequest>>,
    chats: Mutex<Vec<ChatRequest>>,
}

impl RecordingBackend {
    fn replying(reply: Value) -> Self {
        Self {
            reply,
            crawls: Mutex::new(Vec::new()),
            chats: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.crawls.lock().unwrap().len() + self.chats.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Backend for RecordingBackend {
    async fn start_crawl(&self, request: &CrawlRequest) -> Result<Value, BackendError> {
        self.crawls.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<Value, BackendError> {
        self.chats.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }

    async fn health(&self) -> Result<Value, BackendError> {
        Ok(json!({"status": "ok"}))
    }
}

#[tokio::test]
async fn crawl_is_scoped_to_the_active_tab() {
    let backend = RecordingBackend::replying(json!({"status": "queued"}));
    let tabs = StaticTabLocator::new("https://active.tab");

    run_crawl(
        &backend,
        &tabs,
        CrawlMode::WithExtraUrl,
        Some("https://example.com".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(
        backend.crawls.lock().unwrap().as_slice(),
        &[CrawlRequest {
            extra_url: Some("https://example.com".to_string()),
            url: "https://active.tab".to_string(),
        }]
    );
}

#[tokio::test]
async fn missing_tab_fails_without_contacting_backend() {
    let backend = RecordingBackend::replying(json!({}));
    let tabs = StaticTabLocator::unavailable();

    let err = run_crawl(&backend, &tabs, CrawlMode::Skip, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::TabUnavailable);

    let err = run_chat(&backend, &tabs, "hello".to_string(), None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::TabUnavailable);
    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn chat_reply_is_coerced() {
    let tabs = StaticTabLocator::new("https://x");
    for (body, expected) in [
        (json!({"response": "first"}), "first"),
        (json!({"answer": "second"}), "second"),
        (json!({}), FALLBACK_REPLY),
    ] {
        let backend = RecordingBackend::replying(body);
        let reply = run_chat(&backend, &tabs, "hello".to_string(), None)
            .await
            .unwrap();
        assert_eq!(reply, expected);
    }
}

#[tokio::test]
async fn chat_without_handoff_sends_minimal_body_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({"query": "hello", "url": "https://x"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let backend = ReqwestBackend::new(BackendSettings {
        base_url: server.uri(),
    })
    .unwrap();
    let tabs = StaticTabLocator::new("https://x");

    let reply = run_chat(&backend, &tabs, "hello".to_string(), None)
        .await
        .unwrap();
    assert_eq!(reply, "Sorry, I couldn’t understand that.");
}

#[tokio::test]
async fn health_check_reports_reachability() {
    let backend = RecordingBackend::replying(json!({}));
    assert!(check_backend_health(&backend).await);

    let offline = ReqwestBackend::new(BackendSettings {
        base_url: "http://127.0.0.1:1".to_string(),
    })
    .unwrap();
    assert!(!check_backend_health(&offline).await);
}
