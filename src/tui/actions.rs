//! Pure action determination for keyboard handling.
//!
//! `determine_action` maps a key plus a small context snapshot to an
//! [`Action`]; `App::execute` performs it. Keeping the mapping pure lets the
//! key bindings be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    AnalyzeButton,
    ClearButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::AnalyzeButton,
            Self::AnalyzeButton => Self::ClearButton,
            Self::ClearButton => Self::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Input => Self::ClearButton,
            Self::AnalyzeButton => Self::Input,
            Self::ClearButton => Self::AnalyzeButton,
        }
    }
}

/// Text editing operations on the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    NewLine,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Score the current input
    Analyze,
    /// Discard the input and the displayed results
    Clear,
    DismissDialog,
    FocusNext,
    FocusPrev,
    Edit(EditAction),
    /// Move the word-table selection by this many rows
    ScrollWords(isize),
}

/// Rows moved by PageUp/PageDown in the word table.
pub const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionContext {
    pub focus: Focus,
    pub dialog_open: bool,
    pub has_report: bool,
}

/// Determine which action a key triggers. `None` means the key is ignored.
pub fn determine_action(key: KeyEvent, ctx: ActionContext) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // A dialog is modal
    if ctx.dialog_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Some(Action::DismissDialog),
            _ => None,
        };
    }

    match key.code {
        KeyCode::F(5) => return Some(Action::Analyze),
        KeyCode::Char('r') if ctrl => return Some(Action::Analyze),
        KeyCode::Char('l') if ctrl => return Some(Action::Clear),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::Esc => return Some(Action::Quit),
        KeyCode::PageUp if ctx.has_report => return Some(Action::ScrollWords(-PAGE_SIZE)),
        KeyCode::PageDown if ctx.has_report => return Some(Action::ScrollWords(PAGE_SIZE)),
        _ => {}
    }

    match ctx.focus {
        Focus::Input => determine_edit_action(key).map(Action::Edit),
        Focus::AnalyzeButton | Focus::ClearButton => determine_button_action(key, ctx),
    }
}

fn determine_edit_action(key: KeyEvent) -> Option<EditAction> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(EditAction::Insert(c))
        }
        KeyCode::Enter => Some(EditAction::NewLine),
        KeyCode::Backspace => Some(EditAction::Backspace),
        KeyCode::Delete => Some(EditAction::Delete),
        KeyCode::Left => Some(EditAction::Left),
        KeyCode::Right => Some(EditAction::Right),
        KeyCode::Up => Some(EditAction::Up),
        KeyCode::Down => Some(EditAction::Down),
        KeyCode::Home => Some(EditAction::Home),
        KeyCode::End => Some(EditAction::End),
        _ => None,
    }
}

fn determine_button_action(key: KeyEvent, ctx: ActionContext) -> Option<Action> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => match ctx.focus {
            Focus::AnalyzeButton => Some(Action::Analyze),
            Focus::ClearButton => Some(Action::Clear),
            Focus::Input => None,
        },
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Left => Some(Action::FocusPrev),
        KeyCode::Right => Some(Action::FocusNext),
        KeyCode::Up | KeyCode::Char('k') if ctx.has_report => Some(Action::ScrollWords(-1)),
        KeyCode::Down | KeyCode::Char('j') if ctx.has_report => Some(Action::ScrollWords(1)),
        KeyCode::Home | KeyCode::Char('g') if ctx.has_report => {
            Some(Action::ScrollWords(isize::MIN))
        }
        KeyCode::End | KeyCode::Char('G') if ctx.has_report => {
            Some(Action::ScrollWords(isize::MAX))
        }
        _ => None,
    }
}
