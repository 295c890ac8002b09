use engine_logging::{engine_debug, engine_warn};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::contract::{ChatRequest, CrawlRequest};
use crate::{BackendError, FailureKind};

/// Address used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

/// The crawl/chat service. Only network failures and non-JSON bodies are
/// errors; the decoded body is returned whatever the HTTP status.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn start_crawl(&self, request: &CrawlRequest) -> Result<Value, BackendError>;

    async fn send_chat(&self, request: &ChatRequest) -> Result<Value, BackendError>;

    async fn health(&self) -> Result<Value, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let mut base_url = Url::parse(&settings.base_url)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as a base address", settings.base_url),
            ));
        }
        // Endpoints are joined relative to the base path.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn post_json<T>(&self, path: &str, body: &T) -> Result<Value, BackendError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(path)?;
        if log::log_enabled!(log::Level::Debug) {
            let rendered = serde_json::to_string(body).unwrap_or_default();
            engine_debug!("POST {} {}", url, rendered);
        }

        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        read_json(url, response).await
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn start_crawl(&self, request: &CrawlRequest) -> Result<Value, BackendError> {
        self.post_json("crawl", request).await
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<Value, BackendError> {
        self.post_json("chat", request).await
    }

    async fn health(&self) -> Result<Value, BackendError> {
        let url = self.endpoint("health")?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        if !response.status().is_success() {
            return Err(BackendError::new(
                FailureKind::Network,
                format!("health check returned {}", response.status()),
            ));
        }
        read_json(url, response).await
    }
}

async fn read_json(url: Url, response: reqwest::Response) -> Result<Value, BackendError> {
    let status = response.status();
    if !status.is_success() {
        engine_warn!("{} answered with status {}", url, status);
    }
    let text = response.text().await.map_err(map_reqwest_error)?;
    serde_json::from_str(&text).map_err(|err| BackendError::new(FailureKind::Parse, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_decode() {
        return BackendError::new(FailureKind::Parse, err.to_string());
    }
    if err.is_builder() {
        return BackendError::new(FailureKind::InvalidUrl, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
