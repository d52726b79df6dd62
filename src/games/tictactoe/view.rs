//! Read-only view handed to the renderer.

use super::{Board, HistoryOrder, MoveEntry, Position, Status, Win};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a front end needs to draw the game, and nothing it can change.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    board: Board,
    #[getter(copy)]
    win: Option<Win>,
    entries: Vec<MoveEntry>,
    #[getter(copy)]
    status: Status,
    #[getter(copy)]
    order: HistoryOrder,
    #[getter(copy)]
    viewed_step: usize,
}

impl GameView {
    pub(super) fn new(
        board: Board,
        win: Option<Win>,
        entries: Vec<MoveEntry>,
        status: Status,
        order: HistoryOrder,
        viewed_step: usize,
    ) -> Self {
        Self {
            board,
            win,
            entries,
            status,
            order,
            viewed_step,
        }
    }

    /// The squares to highlight: the winning triple, or nothing.
    pub fn highlight(&self) -> Vec<usize> {
        self.win.map(|w| w.indices().to_vec()).unwrap_or_default()
    }

    /// Whether `pos` should be drawn highlighted.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.win.is_some_and(|w| w.contains(pos))
    }

    /// Move-list labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label().as_str()).collect()
    }
}
