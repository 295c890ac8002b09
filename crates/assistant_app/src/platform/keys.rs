use assistant_core::{InputEdit, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press onto a core message.
///
/// Edits are relative so they apply to the input as it is when the message
/// is processed, not as it was when the key arrived.
pub fn map_key(key: KeyEvent) -> Msg {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Msg::QuitRequested,
        KeyCode::Char('c') if ctrl => Msg::QuitRequested,
        KeyCode::Char('s') if ctrl => Msg::SkipClicked,
        KeyCode::Char('t') if ctrl => Msg::ThemeToggleClicked,
        KeyCode::Char('u') if ctrl => Msg::InputEdited(InputEdit::Clear),
        KeyCode::Enter => Msg::SubmitPressed,
        KeyCode::Backspace => Msg::InputEdited(InputEdit::Backspace),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Msg::InputEdited(InputEdit::Insert(c))
        }
        _ => Msg::NoOp,
    }
}

/// Bracketed paste appends to the input, with line breaks flattened.
pub fn map_paste(pasted: &str) -> Msg {
    let flattened = pasted.replace(['\r', '\n'], " ");
    if flattened.is_empty() {
        return Msg::NoOp;
    }
    Msg::InputEdited(InputEdit::Append(flattened))
}

#[cfg(test)]
mod tests {
    use assistant_core::{update, AppState, CrawlAction, Screen};
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn apply(state: AppState, msgs: Vec<Msg>) -> AppState {
        msgs.into_iter().fold(state, |state, msg| update(state, msg).0)
    }

    fn chat_input(state: &AppState) -> String {
        state.view().chat.map(|chat| chat.input).unwrap_or_default()
    }

    fn on_chat_screen() -> AppState {
        apply(
            AppState::new(),
            vec![
                Msg::SkipClicked,
                Msg::CrawlFinished {
                    action: CrawlAction::Skip,
                    result: Ok(()),
                },
            ],
        )
    }

    #[test]
    fn typing_and_backspace_edit_the_current_input() {
        let state = apply(
            AppState::new(),
            vec![
                Msg::InputChanged("https://a".to_string()),
                map_key(press(KeyCode::Char('b'))),
                map_key(press(KeyCode::Backspace)),
                map_key(press(KeyCode::Backspace)),
            ],
        );
        assert_eq!(state.view().entry.input, "https://");

        let state = apply(AppState::new(), vec![map_key(press(KeyCode::Backspace))]);
        assert_eq!(state.view().entry.input, "");
    }

    #[test]
    fn enter_submits_whichever_screen_is_current() {
        assert_eq!(map_key(press(KeyCode::Enter)), Msg::SubmitPressed);

        let (_, effects) = update(
            apply(AppState::new(), vec![Msg::InputChanged("https://a.b".into())]),
            map_key(press(KeyCode::Enter)),
        );
        assert_eq!(effects.len(), 1);

        let state = apply(on_chat_screen(), vec![Msg::InputChanged("hi".into())]);
        let (state, effects) = update(state, map_key(press(KeyCode::Enter)));
        assert_eq!(effects.len(), 1);
        assert_eq!(state.transcript().map(|t| t.len()), Some(2));
    }

    #[test]
    fn key_landing_with_chat_reply_does_not_restore_cleared_input() {
        let state = apply(
            on_chat_screen(),
            vec![Msg::InputChanged("hello".into()), Msg::SendClicked],
        );

        // Reply and keystroke arrive in the same loop pass, reply first.
        let key = map_key(press(KeyCode::Char('x')));
        let state = apply(state, vec![Msg::ChatFinished(Ok("hi".into())), key]);

        assert_eq!(chat_input(&state), "x");
    }

    #[test]
    fn key_landing_with_navigation_does_not_carry_entry_url_into_chat() {
        let state = apply(
            AppState::new(),
            vec![Msg::InputChanged("https://example.com".into()), Msg::CrawlClicked],
        );

        let key = map_key(press(KeyCode::Char('h')));
        let state = apply(
            state,
            vec![
                Msg::CrawlFinished {
                    action: CrawlAction::Crawl,
                    result: Ok(()),
                },
                key,
            ],
        );

        assert_eq!(state.screen(), Screen::Chat);
        assert_eq!(chat_input(&state), "h");
    }

    #[test]
    fn control_chords() {
        assert_eq!(map_key(ctrl('s')), Msg::SkipClicked);
        assert_eq!(map_key(ctrl('t')), Msg::ThemeToggleClicked);
        assert_eq!(map_key(ctrl('c')), Msg::QuitRequested);
        assert_eq!(map_key(ctrl('u')), Msg::InputEdited(InputEdit::Clear));
        assert_eq!(map_key(press(KeyCode::Esc)), Msg::QuitRequested);
        assert_eq!(map_key(ctrl('x')), Msg::NoOp);
    }

    #[test]
    fn paste_flattens_newlines() {
        let state = apply(
            AppState::new(),
            vec![Msg::InputChanged("see ".into()), map_paste("https://x\n")],
        );
        assert_eq!(state.view().entry.input, "see https://x ");
        assert_eq!(map_paste(""), Msg::NoOp);
    }
}
