//! Keyboard event handling.

use crate::app::{App, AppState};
use crate::prompt::is_chord;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kplite_core::{Input, Pane, SearchKind};

/// Handle a terminal event. Returns true if the app should quit.
pub fn handle_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Resize(..) => {
            app.apply(Input::Resize);
            false
        }
        _ => false,
    }
}

/// Handle a key event. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let input = if app.is_searching() {
        search_input(key)
    } else {
        normal_input(app, key)
    };

    if let Some(input) = input {
        tracing::trace!(?input, "Handling input");
        app.apply(input);
    }
    app.state == AppState::Quit
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn normal_input(app: &App, key: KeyEvent) -> Option<Input> {
    if is_ctrl_c(&key) {
        return Some(Input::Quit);
    }

    let input = match key.code {
        KeyCode::Char('q') => Input::Quit,
        KeyCode::Left | KeyCode::Char('h') => Input::FocusLeft,
        KeyCode::Right | KeyCode::Char('l') => Input::FocusRight,
        KeyCode::Tab => match app.navigator.state().focus {
            Pane::Groups => Input::FocusRight,
            Pane::Entries => Input::FocusLeft,
        },
        KeyCode::Up | KeyCode::Char('k') => Input::Up,
        KeyCode::Down | KeyCode::Char('j') => Input::Down,
        KeyCode::Home | KeyCode::Char('g') => Input::Top,
        KeyCode::End | KeyCode::Char('G') => Input::Bottom,
        KeyCode::Enter => Input::ToggleExpand,
        KeyCode::Char(' ') => Input::TogglePasswordVisibility,
        KeyCode::Char('f') => Input::ToggleExpandAll,
        KeyCode::Char('/') => Input::EnterSearch(SearchKind::GroupName),
        KeyCode::Char('?') => Input::EnterSearch(SearchKind::Content),
        _ => return None,
    };
    Some(input)
}

fn search_input(key: KeyEvent) -> Option<Input> {
    if is_ctrl_c(&key) {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Input::CancelSearch),
        KeyCode::Enter => Some(Input::SubmitSearch),
        KeyCode::Backspace => Some(Input::SearchBackspace),
        KeyCode::Char(_) if is_chord(&key) => None,
        KeyCode::Char(c) => Some(Input::SearchChar(c)),
        _ => None,
    }
}
