//! Application state and key handling.

use crate::{Input, Position, Timeline};
use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use tracing::{debug, instrument};

use super::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    timeline: Timeline,
    #[getter(copy)]
    cursor: Position,
    #[getter(copy)]
    focus: Focus,
    /// Selected row of the move list, in display order.
    #[getter(copy)]
    selected: usize,
}

impl App {
    /// Creates a new application around `timeline`.
    #[instrument(skip(timeline))]
    pub fn new(timeline: Timeline) -> Self {
        let mut app = Self {
            timeline,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
        };
        app.select_current();
        app
    }

    /// Translates a key into a game input, if it maps to one.
    #[instrument(skip(self))]
    pub fn input_for(&self, key: KeyEvent) -> Option<Input> {
        if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
            return Some(Input::ToggleOrder);
        }

        match self.focus {
            Focus::Board => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Input::CellClick(self.cursor.to_index())),
                code => digit_cell(code).map(Input::CellClick),
            },
            Focus::History => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self
                    .timeline
                    .move_list()
                    .get(self.selected)
                    .map(|entry| Input::HistoryItemClick(entry.step())),
                _ => None,
            },
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
                return Control::Continue;
            }
            _ => {}
        }

        if let Some(input) = self.input_for(key) {
            self.timeline.dispatch(input);
            self.select_current();
            return Control::Continue;
        }

        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, key.code),
            Focus::History => self.move_selection(key.code),
        }
        Control::Continue
    }

    fn move_selection(&mut self, code: KeyCode) {
        let last = self.timeline.history().len().saturating_sub(1);
        self.selected = match code {
            KeyCode::Up | KeyCode::Char('k') => self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => (self.selected + 1).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.selected,
        };
    }

    /// Points the list selection at the viewed step's row.
    fn select_current(&mut self) {
        self.selected = self
            .timeline
            .move_list()
            .iter()
            .position(|entry| entry.current())
            .unwrap_or(0);
    }
}
