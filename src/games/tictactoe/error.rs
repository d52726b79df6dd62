//! Reasons an input was rejected.
//!
//! Rejections are never fatal. The callback-facing operations log them
//! and leave the game untouched.

use super::{Player, Position};

/// Why a cell click was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square is already occupied on the viewed board.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),
}

/// A jump to a step outside the recorded history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_new::new,
)]
#[display("Step {} is outside history of length {}", step, len)]
pub struct JumpError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}
