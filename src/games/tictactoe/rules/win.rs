//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and which squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Win {
    /// The player holding all three squares.
    #[getter(copy)]
    winner: Player,
    /// The winning triple.
    #[getter(copy)]
    line: [Position; 3],
}

impl Win {
    /// The winning triple as 0-based board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of the winning triple.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates the board for a completed line.
///
/// Lines are checked in [`LINES`] order and the first complete one wins,
/// so a board with two completed lines always reports the same triple.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Win> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(winner) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(Win { winner, line });
        }
    }

    None
}
