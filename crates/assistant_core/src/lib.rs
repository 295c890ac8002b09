//! Assistant core: pure state machine for the entry and chat screens, plus
//! view-model helpers and the theme controller.
mod effect;
mod message;
mod msg;
mod navigation;
mod state;
mod theme;
mod update;
mod view_model;

pub use effect::Effect;
pub use message::{Message, Sender, Transcript, BACKEND_ERROR_REPLY, GREETING};
pub use msg::{InputEdit, Msg};
pub use navigation::{NavigationState, Screen};
pub use state::{AppState, BackendStatus, CrawlAction, ErrorKind, RequestState};
pub use theme::{
    PreferenceStore, StyleRoot, ThemeController, ThemeError, ThemePreference, THEME_KEY,
};
pub use update::{update, CRAWL_FAILED_ERROR, TAB_UNAVAILABLE_ERROR, VALIDATION_ERROR};
pub use view_model::{AppViewModel, ChatView, EntryView};
