//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::super::{Snapshot, Square, Timeline};
use super::Invariant;

/// Invariant: every snapshot extends its predecessor by a single move.
///
/// The first snapshot is the empty board. Each later snapshot equals its
/// predecessor with one previously empty square marked, and records
/// that square as the move played.
pub struct MonotonicHistoryInvariant;

impl Invariant<Timeline> for MonotonicHistoryInvariant {
    fn holds(timeline: &Timeline) -> bool {
        let history = timeline.history();

        let Some(first) = history.first() else {
            return false;
        };
        if *first != Snapshot::initial() {
            return false;
        }

        history.windows(2).all(|pair| {
            let [before, after] = pair else {
                return false;
            };
            let Some(pos) = after.played() else {
                return false;
            };
            match after.board().get(pos) {
                Square::Occupied(player) => {
                    before.board().is_empty(pos) && before.after(pos, player) == *after
                }
                Square::Empty => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot marks exactly one empty square of its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_new_timeline_holds() {
        assert!(MonotonicHistoryInvariant::holds(&Timeline::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let timeline = Timeline::replay(&[4, 0, 8, 2, 6]);
        assert!(MonotonicHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut timeline = Timeline::replay(&[4]);
        let overwrite = timeline.history[1].after(Position::Center, Player::O);
        timeline.history.push(overwrite);
        assert!(!MonotonicHistoryInvariant::holds(&timeline));
    }

    #[test]
    fn test_skipped_move_violates() {
        let mut timeline = Timeline::new();
        let two_moves = Snapshot::initial()
            .after(Position::TopLeft, Player::X)
            .after(Position::Center, Player::O);
        timeline.history.push(two_moves);
        assert!(!MonotonicHistoryInvariant::holds(&timeline));
    }
}
