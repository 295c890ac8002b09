//! One crawl or chat round trip: resolve the active tab, then call the backend.

use engine_logging::{engine_info, engine_warn};

use crate::contract::{coerce_reply, ChatRequest, CrawlRequest};
use crate::{Backend, BackendError, CrawlMode, TabLocator};

/// Starts a crawl of the active tab. Any decoded response counts as success.
pub async fn run_crawl(
    backend: &dyn Backend,
    tabs: &dyn TabLocator,
    mode: CrawlMode,
    extra_url: Option<String>,
) -> Result<(), BackendError> {
    let url = tabs.current_url().await.map_err(|err| {
        engine_warn!("Crawl aborted before sending: {}", err);
        BackendError::from(err)
    })?;
    let request = CrawlRequest::new(mode, extra_url, url);

    let body = backend.start_crawl(&request).await?;
    engine_info!("Crawl started for {} ({:?}): {}", request.url, mode, body);
    Ok(())
}

/// Sends one chat query scoped to the active tab and returns the reply text.
pub async fn run_chat(
    backend: &dyn Backend,
    tabs: &dyn TabLocator,
    query: String,
    extra_url: Option<String>,
) -> Result<String, BackendError> {
    let url = tabs.current_url().await.map_err(|err| {
        engine_warn!("Chat aborted before sending: {}", err);
        BackendError::from(err)
    })?;
    let request = ChatRequest {
        query,
        url,
        extra_url,
    };

    let body = backend.send_chat(&request).await?;
    Ok(coerce_reply(&body))
}

pub async fn check_backend_health(backend: &dyn Backend) -> bool {
    match backend.health().await {
        Ok(_) => true,
        Err(err) => {
            engine_warn!("Backend health check failed: {}", err);
            false
        }
    }
}
