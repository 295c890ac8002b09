use std::fmt;

use crate::tab::TabError;

/// Which entry-screen action a crawl belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlMode {
    /// Crawl with the user-entered URL.
    WithExtraUrl,
    /// Crawl the active tab only.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CrawlCompleted {
        mode: CrawlMode,
        result: Result<(), BackendError>,
    },
    /// `Ok` carries the reply text after coercion.
    ChatCompleted { result: Result<String, BackendError> },
    HealthCompleted { online: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for BackendError {}

impl From<TabError> for BackendError {
    fn from(err: TabError) -> Self {
        BackendError::new(FailureKind::TabUnavailable, err.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The active tab URL could not be resolved; no request was sent.
    TabUnavailable,
    InvalidUrl,
    Network,
    /// The response body was not valid JSON.
    Parse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::TabUnavailable => write!(f, "active tab unavailable"),
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Parse => write!(f, "response was not json"),
        }
    }
}
