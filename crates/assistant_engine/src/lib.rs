//! Assistant engine: backend and active-tab IO behind the core's effects.
mod backend;
mod contract;
mod engine;
mod exchange;
mod persist;
mod tab;
mod types;

pub use backend::{Backend, BackendSettings, ReqwestBackend, DEFAULT_BACKEND_URL};
pub use contract::{coerce_reply, ChatRequest, CrawlRequest, FALLBACK_REPLY};
pub use engine::EngineHandle;
pub use exchange::{check_backend_health, run_chat, run_crawl};
pub use persist::{ensure_state_dir, read_optional, AtomicFileWriter, PersistError};
pub use tab::{CommandTabLocator, StaticTabLocator, TabError, TabLocator};
pub use types::{BackendError, CrawlMode, EngineEvent, FailureKind};
