//! Inputs a rendering front end feeds into the game.

use serde::{Deserialize, Serialize};

/// A user interaction, as reported by whatever is drawing the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    /// A board square was clicked (0-based cell index).
    CellClick(usize),
    /// A move-list entry was clicked (history index, not display row).
    HistoryItemClick(usize),
    /// The order toggle was clicked.
    ToggleOrder,
}
