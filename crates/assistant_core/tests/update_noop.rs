use assistant_core::{update, AppState, Msg, Screen};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_on_entry_screen_changes_nothing() {
    let mut state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(next.screen(), Screen::Entry);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert!(!state.consume_dirty());
}
