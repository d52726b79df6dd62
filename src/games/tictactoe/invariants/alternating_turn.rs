//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, Timeline};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The move recorded at history index `k` (k >= 1) belongs to X when `k`
/// is odd and to O when it is even. First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<Timeline> for AlternatingTurnInvariant {
    fn holds(timeline: &Timeline) -> bool {
        timeline
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| {
                snapshot
                    .played()
                    .and_then(|pos| snapshot.board().get(pos).player())
                    == Some(Player::to_move_at(step - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
