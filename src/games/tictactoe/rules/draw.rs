//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::Win;
use tracing::instrument;

/// Number of moves that fill the board from an empty start.
pub const MAX_MOVES: usize = 9;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game at `step` is a draw.
///
/// The rule counts moves, not filled squares: a game is drawn once nine
/// moves have been played without a winner. The two agree because every
/// move fills exactly one empty square and squares are never cleared.
#[instrument]
pub fn is_draw(step: usize, win: Option<&Win>) -> bool {
    win.is_none() && step == MAX_MOVES
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position};
    use super::super::win::evaluate;
    use super::*;

    fn fill(marks: [Player; 9]) -> Board {
        Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (pos, player)| board.with_mark(*pos, player))
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        assert!(is_full(&fill([Player::X; 9])));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([X, O, X, O, X, X, O, X, O]);
        let win = evaluate(&board);
        assert!(is_full(&board));
        assert!(is_draw(MAX_MOVES, win.as_ref()));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Player::{O, X};
        // X X X / O O X / O X O
        let board = fill([X, X, X, O, O, X, O, X, O]);
        let win = evaluate(&board);
        assert!(!is_draw(MAX_MOVES, win.as_ref()));
    }

    #[test]
    fn test_not_draw_before_ninth_move() {
        assert!(!is_draw(8, None));
        assert!(!is_draw(0, None));
    }
}
