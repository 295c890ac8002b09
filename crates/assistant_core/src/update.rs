use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::message::{Message, BACKEND_ERROR_REPLY};
use crate::state::EntryError;
use crate::{
    AppState, BackendStatus, CrawlAction, Effect, ErrorKind, Msg, NavigationState, Screen,
};

/// Shown when "Crawl Website" is pressed with an empty field.
pub const VALIDATION_ERROR: &str = "Please enter a valid URL";
/// Shown when a crawl request fails on the network or returns a non-JSON body.
pub const CRAWL_FAILED_ERROR: &str = "Crawl failed. Check the log for details.";
/// Shown when the active tab URL cannot be resolved before a crawl.
pub const TAB_UNAVAILABLE_ERROR: &str = "Could not read the active tab URL.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![Effect::CheckHealth],
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::InputEdited(edit) => {
            state.edit_input(edit);
            Vec::new()
        }
        Msg::SubmitPressed => match state.screen() {
            Screen::Entry => start_crawl(&mut state, CrawlAction::Crawl),
            Screen::Chat => send_message(&mut state),
        },
        Msg::CrawlClicked => start_crawl(&mut state, CrawlAction::Crawl),
        Msg::SkipClicked => start_crawl(&mut state, CrawlAction::Skip),
        Msg::CrawlFinished { action, result } => finish_crawl(&mut state, action, result),
        Msg::SendClicked => send_message(&mut state),
        Msg::ChatFinished(result) => {
            finish_chat(&mut state, result);
            Vec::new()
        }
        Msg::ThemeToggleClicked => {
            if state.screen() == Screen::Chat {
                vec![Effect::ToggleTheme]
            } else {
                Vec::new()
            }
        }
        Msg::ThemeLoaded(theme) | Msg::ThemeApplied(theme) => {
            state.set_theme(theme);
            Vec::new()
        }
        Msg::HealthChecked { online } => {
            state.set_backend(if online {
                BackendStatus::Online
            } else {
                BackendStatus::Offline
            });
            Vec::new()
        }
        Msg::QuitRequested => {
            state.request_quit();
            Vec::new()
        }
        Msg::Tick => {
            state.advance_animation();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_crawl(state: &mut AppState, action: CrawlAction) -> Vec<Effect> {
    if state.screen() != Screen::Entry || state.entry().is_pending(action) {
        return Vec::new();
    }

    let extra_url = match action {
        CrawlAction::Crawl => {
            let trimmed = state.entry().input.trim();
            if trimmed.is_empty() {
                let entry = state.entry_mut();
                entry.error = Some(EntryError {
                    action,
                    message: VALIDATION_ERROR.to_string(),
                });
                state.mark_dirty();
                engine_debug!("Crawl rejected: {:?}", ErrorKind::Validation);
                return Vec::new();
            }
            Some(trimmed.to_string())
        }
        CrawlAction::Skip => None,
    };

    let entry = state.entry_mut();
    entry.set_pending(action, true);
    entry.error = None;
    if action == CrawlAction::Crawl {
        entry.submitted_extra_url = extra_url.clone();
    }
    state.mark_dirty();

    vec![Effect::StartCrawl { action, extra_url }]
}

fn finish_crawl(
    state: &mut AppState,
    action: CrawlAction,
    result: Result<(), ErrorKind>,
) -> Vec<Effect> {
    let entry = state.entry_mut();
    entry.set_pending(action, false);
    let handoff_url = match action {
        CrawlAction::Crawl => entry.submitted_extra_url.take(),
        CrawlAction::Skip => None,
    };
    state.mark_dirty();

    if state.screen() != Screen::Entry {
        // The other action already navigated away; its late result has nowhere to go.
        engine_info!("Ignoring {:?} result after navigation: {:?}", action, result);
        return Vec::new();
    }

    match result {
        Ok(()) => {
            let handoff = NavigationState {
                extra_url: handoff_url,
            };
            engine_info!("Crawl {:?} succeeded, opening chat with {:?}", action, handoff);
            state.navigate_to_chat(handoff);
            vec![Effect::LoadTheme]
        }
        Err(kind) => {
            engine_warn!("Crawl {:?} failed: {:?}", action, kind);
            let message = match kind {
                ErrorKind::Capability => TAB_UNAVAILABLE_ERROR,
                ErrorKind::Validation => VALIDATION_ERROR,
                ErrorKind::Network | ErrorKind::Parse => CRAWL_FAILED_ERROR,
            };
            state.entry_mut().error = Some(EntryError {
                action,
                message: message.to_string(),
            });
            Vec::new()
        }
    }
}

fn send_message(state: &mut AppState) -> Vec<Effect> {
    let Some(chat) = state.chat_mut() else {
        return Vec::new();
    };
    if chat.pending || chat.input.trim().is_empty() {
        return Vec::new();
    }

    let query = chat.input.clone();
    chat.append(Message::user(query.clone()));
    chat.pending = true;
    let extra_url = chat.handoff.extra_url.clone();
    state.mark_dirty();

    vec![Effect::SendChat { query, extra_url }]
}

fn finish_chat(state: &mut AppState, result: Result<String, ErrorKind>) {
    let Some(chat) = state.chat_mut() else {
        engine_warn!("Chat result arrived without a chat screen");
        return;
    };

    let reply = match result {
        Ok(text) => text,
        Err(kind) => {
            engine_warn!("Chat request failed: {:?}", kind);
            BACKEND_ERROR_REPLY.to_string()
        }
    };
    chat.append(Message::bot(reply));
    chat.input.clear();
    chat.pending = false;
    state.mark_dirty();
}
