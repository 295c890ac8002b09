use assistant_core::{CrawlAction, Effect, ErrorKind, Msg, PreferenceStore, ThemeController};
use assistant_engine::{CrawlMode, EngineEvent, EngineHandle, FailureKind};
use engine_logging::{engine_error, engine_info, engine_warn};

use super::ui::palette::{Palette, TerminalStyle};

/// Executes core effects: backend work goes to the engine thread, theme work
/// runs inline because it only touches local state.
pub struct EffectRunner<S> {
    engine: EngineHandle,
    theme: ThemeController<S, TerminalStyle>,
}

impl<S: PreferenceStore> EffectRunner<S> {
    pub fn new(engine: EngineHandle, theme: ThemeController<S, TerminalStyle>) -> Self {
        Self { engine, theme }
    }

    /// Starts every effect and returns the messages produced synchronously.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut immediate = Vec::new();
        for effect in effects {
            match effect {
                Effect::CheckHealth => self.engine.check_health(),
                Effect::StartCrawl { action, extra_url } => {
                    engine_info!("StartCrawl action={:?} extra_url={:?}", action, extra_url);
                    self.engine.crawl(crawl_mode(action), extra_url);
                }
                Effect::SendChat { query, extra_url } => {
                    engine_info!("SendChat query_len={} extra_url={:?}", query.len(), extra_url);
                    self.engine.chat(query, extra_url);
                }
                Effect::LoadTheme => immediate.push(Msg::ThemeLoaded(self.theme.load())),
                Effect::ToggleTheme => match self.theme.toggle() {
                    Ok(theme) => immediate.push(Msg::ThemeApplied(theme)),
                    Err(err) => engine_error!("Theme toggle failed: {}", err),
                },
            }
        }
        immediate
    }

    /// Drains finished engine work as core messages.
    pub fn pump_events(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    pub fn palette(&self) -> Palette {
        self.theme.root().palette()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CrawlCompleted { mode, result } => Msg::CrawlFinished {
            action: crawl_action(mode),
            result: result.map_err(|err| {
                engine_warn!("Crawl ({:?}) failed: {}", mode, err);
                map_failure(err.kind)
            }),
        },
        EngineEvent::ChatCompleted { result } => Msg::ChatFinished(result.map_err(|err| {
            engine_warn!("Chat failed: {}", err);
            map_failure(err.kind)
        })),
        EngineEvent::HealthCompleted { online } => Msg::HealthChecked { online },
    }
}

fn crawl_mode(action: CrawlAction) -> CrawlMode {
    match action {
        CrawlAction::Crawl => CrawlMode::WithExtraUrl,
        CrawlAction::Skip => CrawlMode::Skip,
    }
}

fn crawl_action(mode: CrawlMode) -> CrawlAction {
    match mode {
        CrawlMode::WithExtraUrl => CrawlAction::Crawl,
        CrawlMode::Skip => CrawlAction::Skip,
    }
}

fn map_failure(kind: FailureKind) -> ErrorKind {
    match kind {
        FailureKind::TabUnavailable => ErrorKind::Capability,
        FailureKind::InvalidUrl | FailureKind::Network => ErrorKind::Network,
        FailureKind::Parse => ErrorKind::Parse,
    }
}
