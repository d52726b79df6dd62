//! Immutable board snapshots recorded in the game history.

use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One entry in the game history: a board plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    /// Square played to reach this board. `None` for the opening snapshot.
    #[getter(copy)]
    played: Option<Position>,
}

impl Snapshot {
    /// The empty board that opens every game.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Returns the snapshot after `player` marks `pos`.
    #[instrument(skip(self))]
    pub fn after(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            played: Some(pos),
        }
    }

    /// The 1-based cell number of the move that produced this snapshot.
    pub fn played_point(&self) -> Option<u8> {
        self.played.map(Position::point)
    }
}
