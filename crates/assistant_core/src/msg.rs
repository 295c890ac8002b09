/// Relative change to the current input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    /// Pasted text, appended as is.
    Append(String),
    Backspace,
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application started; the front end is ready to run effects.
    Started,
    /// The input field of the current screen was replaced wholesale.
    InputChanged(String),
    /// A keystroke-sized edit, applied to whatever the current input is.
    InputEdited(InputEdit),
    /// Enter pressed: crawl on the entry screen, send on the chat screen.
    SubmitPressed,
    /// User pressed "Crawl Website" on the entry screen.
    CrawlClicked,
    /// User pressed "Skip and chat with me" on the entry screen.
    SkipClicked,
    /// A crawl request finished, successfully or not.
    CrawlFinished {
        action: crate::CrawlAction,
        result: Result<(), crate::ErrorKind>,
    },
    /// User pressed "Send" on the chat screen.
    SendClicked,
    /// A chat request finished. `Ok` carries the already coerced reply text.
    ChatFinished(Result<String, crate::ErrorKind>),
    /// User asked for the other theme.
    ThemeToggleClicked,
    /// The persisted theme was read at chat mount.
    ThemeLoaded(crate::ThemePreference),
    /// A theme toggle was persisted and applied.
    ThemeApplied(crate::ThemePreference),
    /// Result of the startup health check.
    HealthChecked { online: bool },
    /// User asked to leave the application.
    QuitRequested,
    /// UI/render tick driving the typing indicator.
    Tick,
    /// Fallback for unmapped input.
    NoOp,
}
