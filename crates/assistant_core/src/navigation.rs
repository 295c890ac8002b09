#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Entry,
    Chat,
}

/// One-shot handoff from the entry screen to the chat screen.
///
/// `extra_url` is `None` when the user skipped the crawl; the chat screen then
/// omits the field from every request it sends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub extra_url: Option<String>,
}

impl NavigationState {
    pub fn with_extra_url(extra_url: impl Into<String>) -> Self {
        Self {
            extra_url: Some(extra_url.into()),
        }
    }
}
