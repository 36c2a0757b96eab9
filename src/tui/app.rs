//! Application state for the interactive analyzer.
//!
//! All state the UI shows lives in [`App`]; rendering reads it and key
//! handling mutates it. Each Analyze replaces the report, Clear drops it.

use super::actions::{determine_action, Action, ActionContext, EditAction, Focus};
use super::input::TextInput;
use crate::errors::SentimentError;
use crate::sentiment::{PolarityScorer, SentimentAnalyzer, SentimentReport, VaderScorer};
use crossterm::event::KeyEvent;

/// Modal message box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Error,
}

impl Dialog {
    pub fn from_error(error: &SentimentError) -> Self {
        Self {
            title: error.dialog_title().to_string(),
            message: error.to_string(),
            kind: if error.is_input_error() {
                DialogKind::Warning
            } else {
                DialogKind::Error
            },
        }
    }
}

pub struct App<S: PolarityScorer = VaderScorer> {
    analyzer: SentimentAnalyzer<S>,
    input: TextInput,
    focus: Focus,
    report: Option<SentimentReport>,
    dialog: Option<Dialog>,
    word_selection: usize,
    precision: usize,
}

impl<S: PolarityScorer> App<S> {
    pub fn new(analyzer: SentimentAnalyzer<S>, precision: usize) -> Self {
        Self {
            analyzer,
            input: TextInput::new(),
            focus: Focus::default(),
            report: None,
            dialog: None,
            word_selection: 0,
            precision,
        }
    }

    /// Pre-fill the input box.
    pub fn with_input(mut self, text: &str) -> Self {
        self.set_input(text);
        self
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = TextInput::with_text(text);
    }

    /// Handle a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match determine_action(key, self.action_context()) {
            Some(action) => self.execute(action),
            None => false,
        }
    }

    pub fn action_context(&self) -> ActionContext {
        ActionContext {
            focus: self.focus,
            dialog_open: self.dialog.is_some(),
            has_report: self.report.is_some(),
        }
    }

    /// Perform `action`. Returns `true` for [`Action::Quit`].
    pub fn execute(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::Analyze => self.analyze(),
            Action::Clear => self.clear(),
            Action::DismissDialog => self.dialog = None,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Edit(edit) => self.edit(edit),
            Action::ScrollWords(delta) => self.scroll_words(delta),
        }
        false
    }

    /// Run the analyzer on the current input. On failure the previous report
    /// is kept and a dialog explains what went wrong.
    pub fn analyze(&mut self) {
        match self.analyzer.analyze(&self.input.text()) {
            Ok(report) => {
                self.report = Some(report);
                self.word_selection = 0;
            }
            Err(error) => {
                tracing::debug!(%error, "analysis rejected");
                self.dialog = Some(Dialog::from_error(&error));
            }
        }
    }

    /// Discard the displayed results and the input.
    pub fn clear(&mut self) {
        self.input.clear();
        self.report = None;
        self.word_selection = 0;
        self.focus = Focus::Input;
    }

    fn edit(&mut self, edit: EditAction) {
        match edit {
            EditAction::Insert(c) => self.input.insert_char(c),
            EditAction::NewLine => self.input.insert_newline(),
            EditAction::Backspace => self.input.backspace(),
            EditAction::Delete => self.input.delete(),
            EditAction::Left => self.input.move_left(),
            EditAction::Right => self.input.move_right(),
            EditAction::Up => self.input.move_up(),
            EditAction::Down => self.input.move_down(),
            EditAction::Home => self.input.move_home(),
            EditAction::End => self.input.move_end(),
        }
    }

    fn scroll_words(&mut self, delta: isize) {
        let count = self.report.as_ref().map_or(0, |r| r.words.len());
        if count == 0 {
            self.word_selection = 0;
            return;
        }
        let last = count - 1;
        self.word_selection = self.word_selection.saturating_add_signed(delta).min(last);
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn report(&self) -> Option<&SentimentReport> {
        self.report.as_ref()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn word_selection(&self) -> usize {
        self.word_selection
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}
