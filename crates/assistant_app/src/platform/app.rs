use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use assistant_core::{update, AppState, Msg, PreferenceStore, ThemeController};
use assistant_engine::{EngineHandle, ReqwestBackend};
use crossterm::event::{self, Event, KeyEventKind};
use engine_logging::engine_info;
use ratatui::backend::Backend as TerminalBackend;
use ratatui::Terminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::persistence::FileThemeStore;
use super::ui::palette::TerminalStyle;
use super::{keys, logging, terminal, ui};

const TICK: Duration = Duration::from_millis(75);

pub fn run_app() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    logging::initialize(&config);
    engine_info!(
        "Backend {} with tab source {:?}",
        config.backend_url,
        config.tab_source
    );

    let backend =
        ReqwestBackend::new(config.backend_settings()).context("invalid backend_url")?;
    let engine = EngineHandle::new(Arc::new(backend), config.tab_locator())
        .context("failed to start engine")?;
    let theme = ThemeController::new(
        FileThemeStore::new(config.state_dir()),
        TerminalStyle::default(),
    );
    let mut runner = EffectRunner::new(engine, theme);

    terminal::install_panic_hook();
    let mut tui = terminal::init().context("failed to set up terminal")?;
    let result = event_loop(&mut tui, &mut runner);
    terminal::restore().context("failed to restore terminal")?;
    engine_info!("Session ended");
    result
}

fn event_loop<B, S>(terminal: &mut Terminal<B>, runner: &mut EffectRunner<S>) -> Result<()>
where
    B: TerminalBackend,
    S: PreferenceStore,
{
    let mut state = AppState::new();
    let mut inbox = VecDeque::from([Msg::Started]);
    let mut last_tick = Instant::now();
    let mut force_redraw = true;

    while !state.should_quit() {
        inbox.extend(runner.pump_events());

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    inbox.push_back(keys::map_key(key));
                }
                Event::Paste(text) => inbox.push_back(keys::map_paste(&text)),
                Event::Resize(..) => force_redraw = true,
                _ => {}
            }
        }
        if last_tick.elapsed() >= TICK {
            inbox.push_back(Msg::Tick);
            last_tick = Instant::now();
        }

        while let Some(msg) = inbox.pop_front() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            inbox.extend(runner.run(effects));
        }

        if state.consume_dirty() || force_redraw {
            let view = state.view();
            let palette = runner.palette();
            terminal.draw(|frame| ui::render::draw(frame, &view, palette))?;
            force_redraw = false;
        }
    }
    Ok(())
}
