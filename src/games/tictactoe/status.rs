//! Status line derived from the viewed snapshot.

use super::Player;
use serde::{Deserialize, Serialize};

/// What the status line reports for the viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Nine moves played without a winner.
    #[display("Equal")]
    Draw,
    /// Game continues; this player moves next.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Returns true once the viewed snapshot is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}
