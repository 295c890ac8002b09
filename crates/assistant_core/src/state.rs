use crate::message::{Message, Transcript};
use crate::msg::InputEdit;
use crate::navigation::{NavigationState, Screen};
use crate::theme::ThemePreference;
use crate::view_model::{AppViewModel, ChatView, EntryView};

/// The two ways the entry screen can start a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlAction {
    /// Crawl with the URL typed into the entry field.
    Crawl,
    /// Crawl the active tab only and continue without handoff state.
    Skip,
}

/// Failure taxonomy surfaced to the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input was empty. Never reaches the network layer.
    Validation,
    /// The active tab URL could not be resolved.
    Capability,
    /// The request could not be sent or the response could not be read.
    Network,
    /// The response body was not valid JSON.
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Content of the single error slot on the entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryError {
    pub action: CrawlAction,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryState {
    pub(crate) input: String,
    pub(crate) crawl_pending: bool,
    pub(crate) skip_pending: bool,
    pub(crate) error: Option<EntryError>,
    /// Trimmed value sent with the in-flight crawl; becomes the handoff.
    pub(crate) submitted_extra_url: Option<String>,
}

impl EntryState {
    pub(crate) fn is_pending(&self, action: CrawlAction) -> bool {
        match action {
            CrawlAction::Crawl => self.crawl_pending,
            CrawlAction::Skip => self.skip_pending,
        }
    }

    pub(crate) fn set_pending(&mut self, action: CrawlAction, pending: bool) {
        match action {
            CrawlAction::Crawl => self.crawl_pending = pending,
            CrawlAction::Skip => self.skip_pending = pending,
        }
    }

    fn request_state(&self, action: CrawlAction) -> RequestState {
        if self.is_pending(action) {
            return RequestState::Pending;
        }
        match &self.error {
            Some(error) if error.action == action => RequestState::Error(error.message.clone()),
            _ => RequestState::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    pub(crate) transcript: Transcript,
    pub(crate) input: String,
    pub(crate) pending: bool,
    pub(crate) handoff: NavigationState,
}

impl ChatState {
    pub(crate) fn mount(handoff: NavigationState) -> Self {
        Self {
            transcript: Transcript::with_greeting(),
            input: String::new(),
            pending: false,
            handoff,
        }
    }

    pub(crate) fn append(&mut self, message: Message) {
        self.transcript.push(message);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    screen: Screen,
    entry: EntryState,
    chat: Option<ChatState>,
    theme: ThemePreference,
    backend: BackendStatus,
    animation_frame: u8,
    should_quit: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.chat.as_ref().map(|chat| &chat.transcript)
    }

    /// Handoff received by the chat screen, if it has been mounted.
    pub fn handoff(&self) -> Option<&NavigationState> {
        self.chat.as_ref().map(|chat| &chat.handoff)
    }

    pub fn view(&self) -> AppViewModel {
        let entry = &self.entry;
        let entry_view = EntryView {
            input: entry.input.clone(),
            error: entry.error.as_ref().map(|error| error.message.clone()),
            crawl: entry.request_state(CrawlAction::Crawl),
            skip: entry.request_state(CrawlAction::Skip),
            crawl_enabled: !entry.crawl_pending,
            skip_enabled: !entry.skip_pending,
        };

        let chat_view = self.chat.as_ref().map(|chat| ChatView {
            messages: chat.transcript.as_slice().to_vec(),
            typing_frame: chat.pending.then_some(self.animation_frame),
            input: chat.input.clone(),
            request: if chat.pending {
                RequestState::Pending
            } else {
                RequestState::Idle
            },
            send_enabled: !chat.pending,
            extra_url: chat.handoff.extra_url.clone(),
        });

        AppViewModel {
            screen: self.screen,
            entry: entry_view,
            chat: chat_view,
            theme: self.theme,
            backend: self.backend,
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn entry(&self) -> &EntryState {
        &self.entry
    }

    pub(crate) fn entry_mut(&mut self) -> &mut EntryState {
        &mut self.entry
    }

    pub(crate) fn chat_mut(&mut self) -> Option<&mut ChatState> {
        self.chat.as_mut()
    }

    pub(crate) fn navigate_to_chat(&mut self, handoff: NavigationState) {
        self.chat = Some(ChatState::mount(handoff));
        self.screen = Screen::Chat;
        self.animation_frame = 0;
        self.mark_dirty();
    }

    pub(crate) fn set_input(&mut self, text: String) {
        match self.screen {
            Screen::Entry => self.entry.input = text,
            Screen::Chat => {
                if let Some(chat) = self.chat.as_mut() {
                    chat.input = text;
                }
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn edit_input(&mut self, edit: InputEdit) {
        let input = match self.screen {
            Screen::Entry => &mut self.entry.input,
            Screen::Chat => match self.chat.as_mut() {
                Some(chat) => &mut chat.input,
                None => return,
            },
        };
        let changed = match edit {
            InputEdit::Insert(c) => {
                input.push(c);
                true
            }
            InputEdit::Append(text) => {
                input.push_str(&text);
                !text.is_empty()
            }
            InputEdit::Backspace => input.pop().is_some(),
            InputEdit::Clear => {
                let had_text = !input.is_empty();
                input.clear();
                had_text
            }
        };
        if changed {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_theme(&mut self, theme: ThemePreference) {
        self.theme = theme;
        self.mark_dirty();
    }

    pub(crate) fn set_backend(&mut self, status: BackendStatus) {
        self.backend = status;
        self.mark_dirty();
    }

    pub(crate) fn request_quit(&mut self) {
        self.should_quit = true;
        self.mark_dirty();
    }

    pub(crate) fn advance_animation(&mut self) {
        let chat_pending = self.chat.as_ref().is_some_and(|chat| chat.pending);
        if chat_pending {
            self.animation_frame = (self.animation_frame + 1) % 3;
            self.mark_dirty();
        }
    }
}
