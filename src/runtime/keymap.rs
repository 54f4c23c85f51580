use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User intents, one per control on the screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePlayback,
    Next,
    Previous,
    ToggleLike,
    ToggleRepeat,
    /// Drag the slider forward/back by the configured scrub step.
    ScrubForward,
    ScrubBack,
    /// Drag the slider to `n` tenths of the track.
    SeekTenths(u8),
    ToggleHelp,
    Quit,
}

/// Map a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::TogglePlayback),
        KeyCode::Char('l') | KeyCode::Char('n') | KeyCode::Right => Some(Action::Next),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::Previous),
        KeyCode::Char('f') | KeyCode::Char('+') => Some(Action::ToggleLike),
        KeyCode::Char('r') => Some(Action::ToggleRepeat),
        KeyCode::Char('L') => Some(Action::ScrubForward),
        KeyCode::Char('H') => Some(Action::ScrubBack),
        KeyCode::Char(c @ '0'..='9') => Some(Action::SeekTenths(c as u8 - b'0')),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
