pub const APP_TITLE: &str = "Context Aware Assistant";
pub const ENTRY_TITLE: &str = "Enter Website to Crawl";
pub const ENTRY_PLACEHOLDER: &str = "https://example.com";
pub const CHAT_PLACEHOLDER: &str = "Type your message...";

pub const CRAWL_LABEL: &str = "Crawl Website";
pub const CRAWL_PENDING_LABEL: &str = "Crawling...";
pub const SKIP_LABEL: &str = "Skip and chat with me";
pub const SKIP_PENDING_LABEL: &str = "Processing...";
pub const SEND_LABEL: &str = "Send";

pub const USER_PREFIX: &str = "You";
pub const BOT_PREFIX: &str = "Assistant";

pub const ENTRY_HINTS: &str = "Enter: crawl   Ctrl+S: skip   Ctrl+U: clear   Esc: quit";
pub const CHAT_HINTS: &str = "Enter: send   Ctrl+T: theme   Ctrl+U: clear   Esc: quit";
