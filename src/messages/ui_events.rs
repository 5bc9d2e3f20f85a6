//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Focus and selection
    ToggleFocus,
    SelectNext,
    SelectPrev,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,
    Submit,

    // Comment actions
    DeleteComment,
    ToggleStar,

    // View options
    NextSort,
    PrevSort,
    ToggleTimestamps,

    // Popups
    ToggleHelp,
    CloseHelp,
    DismissNotification,

    // System
    Quit,
}

/// Focused area of the screen
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Focus {
    /// New comment input
    #[default]
    Composer,
    /// Comment list; editing here targets the selected comment's reply
    Comments,
}

impl Focus {
    pub fn toggle(&self) -> Focus {
        match self {
            Focus::Composer => Focus::Comments,
            Focus::Comments => Focus::Composer,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    focus: Focus,
    input_mode: InputMode,
    show_help: bool,
    has_notification: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Blocking notification swallows everything until dismissed
    if has_notification {
        return Some(UiEvent::DismissNotification);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => handle_normal_keys(key, focus),
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Enter => Some(UiEvent::Submit),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            _ => None,
        },
    }
}

fn handle_normal_keys(key: KeyEvent, focus: Focus) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Tab | KeyCode::BackTab => Some(UiEvent::ToggleFocus),
        KeyCode::Char('e') | KeyCode::Enter => Some(UiEvent::StartEditing),
        KeyCode::Char('o') => Some(UiEvent::NextSort),
        KeyCode::Char('O') => Some(UiEvent::PrevSort),
        KeyCode::Char('t') => Some(UiEvent::ToggleTimestamps),
        KeyCode::Up | KeyCode::Char('k') if focus == Focus::Comments => {
            Some(UiEvent::SelectPrev)
        }
        KeyCode::Down | KeyCode::Char('j') if focus == Focus::Comments => {
            Some(UiEvent::SelectNext)
        }
        KeyCode::Char('d') if focus == Focus::Comments => Some(UiEvent::DeleteComment),
        KeyCode::Char('s') if focus == Focus::Comments => Some(UiEvent::ToggleStar),
        _ => None,
    }
}
