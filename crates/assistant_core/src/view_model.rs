use crate::{BackendStatus, Message, RequestState, Screen, ThemePreference};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub entry: EntryView,
    /// Present once the chat screen has been mounted.
    pub chat: Option<ChatView>,
    pub theme: ThemePreference,
    pub backend: BackendStatus,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryView {
    pub input: String,
    /// Single shared error slot for both actions.
    pub error: Option<String>,
    pub crawl: RequestState,
    pub skip: RequestState,
    pub crawl_enabled: bool,
    pub skip_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub messages: Vec<Message>,
    /// Animation frame of the typing indicator; `None` when nothing is pending.
    pub typing_frame: Option<u8>,
    pub input: String,
    pub request: RequestState,
    pub send_enabled: bool,
    pub extra_url: Option<String>,
}
