#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Probe the backend once so the status line can show whether it is up.
    CheckHealth,
    /// Resolve the active tab and POST `/crawl`.
    StartCrawl {
        action: crate::CrawlAction,
        /// `None` for the skip path; the request body then has no `extra_url` key.
        extra_url: Option<String>,
    },
    /// Resolve the active tab and POST `/chat`.
    SendChat {
        query: String,
        extra_url: Option<String>,
    },
    /// Read the persisted theme (chat screen mount).
    LoadTheme,
    /// Flip the persisted theme and the styling root together.
    ToggleTheme,
}
