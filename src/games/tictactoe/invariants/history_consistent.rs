//! History consistency invariant: move counts and the viewed step line up.

use super::super::Timeline;
use super::Invariant;

/// Invariant: snapshot `k` has exactly `k` occupied squares, and the
/// viewed step points inside the history.
///
/// The first half is what lets the draw rule count moves instead of
/// scanning for empty squares.
pub struct HistoryConsistentInvariant;

impl Invariant<Timeline> for HistoryConsistentInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();

        let counts_match = history
            .iter()
            .enumerate()
            .all(|(step, snapshot)| snapshot.board().occupied() == step);

        counts_match && timeline.viewed_step() < history.len()
    }

    fn description() -> &'static str {
        "Snapshot k has k marks and the viewed step is within history"
    }
}
