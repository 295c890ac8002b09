use std::cell::Cell;
use std::io;
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::thread;

use engine_logging::{engine_debug, engine_error};

use crate::exchange::{check_backend_health, run_chat, run_crawl};
use crate::{Backend, CrawlMode, EngineEvent, TabLocator};

enum EngineCommand {
    Crawl {
        mode: CrawlMode,
        extra_url: Option<String>,
    },
    Chat {
        query: String,
        extra_url: Option<String>,
    },
    Health,
}

/// Runs backend exchanges on a worker thread and hands results back through
/// [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    disconnect_logged: Cell<bool>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn Backend>, tabs: Arc<dyn TabLocator>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::Builder::new()
            .name("assistant-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let backend = backend.clone();
                    let tabs = tabs.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(backend.as_ref(), tabs.as_ref(), command, event_tx).await;
                    });
                }
                engine_debug!("Engine command channel closed");
            })?;

        Ok(Self::from_channels(cmd_tx, event_rx))
    }

    fn from_channels(
        cmd_tx: mpsc::Sender<EngineCommand>,
        event_rx: mpsc::Receiver<EngineEvent>,
    ) -> Self {
        Self {
            cmd_tx,
            event_rx,
            disconnect_logged: Cell::new(false),
        }
    }

    pub fn crawl(&self, mode: CrawlMode, extra_url: Option<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Crawl { mode, extra_url });
    }

    pub fn chat(&self, query: impl Into<String>, extra_url: Option<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Chat {
            query: query.into(),
            extra_url,
        });
    }

    pub fn check_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Health);
    }

    /// Returns the next finished event, if any. A dead worker is logged once
    /// and then reads as empty.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        match self.event_rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if !self.disconnect_logged.replace(true) {
                    engine_error!("Engine worker stopped; pending requests will not complete");
                }
                None
            }
        }
    }

    /// True once the worker thread has gone away.
    pub fn is_disconnected(&self) -> bool {
        self.disconnect_logged.get()
    }
}

async fn handle_command(
    backend: &dyn Backend,
    tabs: &dyn TabLocator,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Crawl { mode, extra_url } => EngineEvent::CrawlCompleted {
            mode,
            result: run_crawl(backend, tabs, mode, extra_url).await,
        },
        EngineCommand::Chat { query, extra_url } => EngineEvent::ChatCompleted {
            result: run_chat(backend, tabs, query, extra_url).await,
        },
        EngineCommand::Health => EngineEvent::HealthCompleted {
            online: check_backend_health(backend).await,
        },
    };
    let _ = event_tx.send(event);
}
