//! Move-list entries and their display order.

use super::Snapshot;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
///
/// Only affects presentation; history itself is always oldest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl HistoryOrder {
    /// Flips between ascending and descending.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the control that flips the order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Oldest first",
            Self::Descending => "Newest first",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    #[getter(copy)]
    step: usize,
    /// Button text.
    label: String,
    /// Whether this is the step currently on display.
    #[getter(copy)]
    current: bool,
}

impl MoveEntry {
    /// Builds the entry for history index `step`.
    pub fn new(step: usize, snapshot: &Snapshot, viewed_step: usize) -> Self {
        Self {
            step,
            label: move_label(step, snapshot),
            current: step == viewed_step,
        }
    }
}

/// Button text for the history entry at `step`.
///
/// The opening snapshot reads "Go to game start"; every later one names
/// the move number and the 1-based (row, column) of the square played.
pub fn move_label(step: usize, snapshot: &Snapshot) -> String {
    match snapshot.played() {
        Some(pos) if step > 0 => {
            format!("Go to move #{}({}, {})", step, pos.row(), pos.column())
        }
        _ => "Go to game start".to_string(),
    }
}
