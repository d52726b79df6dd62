//! Tests for play, jump, and order transitions on the game timeline.

use strictly_timeline::{HistoryOrder, Input, Player, Position, Status, Timeline};

#[test]
fn test_new_timeline_is_empty_board() {
    let timeline = Timeline::new();
    assert_eq!(timeline.history().len(), 1);
    assert_eq!(timeline.viewed_step(), 0);
    assert_eq!(timeline.current().played(), None);
    assert_eq!(timeline.current().board().occupied(), 0);
    assert_eq!(timeline.status().to_string(), "Next player: X");
}

#[test]
fn test_players_alternate_by_parity() {
    let mut timeline = Timeline::new();
    timeline.play(4);
    assert_eq!(timeline.next_player(), Player::O);
    assert_eq!(timeline.current().board().get(Position::Center).player(), Some(Player::X));

    timeline.play(0);
    assert_eq!(timeline.next_player(), Player::X);
    assert_eq!(timeline.current().board().get(Position::TopLeft).player(), Some(Player::O));
}

#[test]
fn test_history_length_after_legal_plays() {
    for n in 0..=5 {
        let cells: Vec<usize> = [4, 0, 8, 2, 6].into_iter().take(n).collect();
        let timeline = Timeline::replay(&cells);
        assert_eq!(timeline.history().len(), n + 1);
        assert_eq!(timeline.viewed_step(), n);
    }
}

#[test]
fn test_played_point_is_one_based() {
    let timeline = Timeline::replay(&[4]);
    assert_eq!(timeline.current().played_point(), Some(5));
}

#[test]
fn test_occupied_cell_is_ignored() {
    let mut timeline = Timeline::replay(&[4]);
    let before = timeline.clone();
    timeline.play(4);
    assert_eq!(timeline, before);
    assert_eq!(timeline.history().len(), 2);
}

#[test]
fn test_out_of_range_cell_is_ignored() {
    let mut timeline = Timeline::replay(&[4]);
    let before = timeline.clone();
    timeline.play(9);
    timeline.play(usize::MAX);
    assert_eq!(timeline, before);
}

#[test]
fn test_play_after_win_is_ignored() {
    let mut timeline = Timeline::replay(&[0, 1, 4, 2, 8]);
    assert_eq!(timeline.status(), Status::Winner(Player::X));

    for cell in 0..9 {
        timeline.play(cell);
    }
    assert_eq!(timeline.history().len(), 6);
    assert_eq!(timeline.viewed_step(), 5);
}

#[test]
fn test_diagonal_win_scenario() {
    let timeline = Timeline::replay(&[0, 1, 4, 2, 8]);
    let view = timeline.view();

    assert_eq!(view.status().to_string(), "Winner: X");
    assert_eq!(view.highlight(), vec![0, 4, 8]);
    assert!(view.is_highlighted(Position::Center));
    assert!(!view.is_highlighted(Position::TopCenter));
}

#[test]
fn test_non_winning_sequence_keeps_playing() {
    // X: 0, 1, 8 and O: 4, 3 complete no line.
    let timeline = Timeline::replay(&[0, 4, 1, 3, 8]);
    assert_eq!(timeline.status().to_string(), "Next player: O");
    assert!(timeline.view().highlight().is_empty());
}

#[test]
fn test_full_board_without_line_is_equal() {
    // X O X / X O O / O X X
    let timeline = Timeline::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(timeline.viewed_step(), 9);
    assert_eq!(timeline.status(), Status::Draw);
    assert_eq!(timeline.status().to_string(), "Equal");
    assert!(timeline.status().is_over());
}

#[test]
fn test_winning_ninth_move_reports_winner() {
    // X completes the left column with the last square.
    let timeline = Timeline::replay(&[0, 1, 3, 4, 5, 8, 7, 2, 6]);
    assert_eq!(timeline.viewed_step(), 9);
    assert_eq!(timeline.status().to_string(), "Winner: X");
}

#[test]
fn test_jump_to_start_resets_view() {
    let mut timeline = Timeline::replay(&[0, 4, 1, 3]);
    timeline.jump_to(0);

    assert_eq!(timeline.viewed_step(), 0);
    assert_eq!(timeline.current().board().occupied(), 0);
    assert_eq!(timeline.status().to_string(), "Next player: X");
    assert_eq!(timeline.history().len(), 5);
}

#[test]
fn test_jump_out_of_range_is_ignored() {
    let mut timeline = Timeline::replay(&[0, 4]);
    let before = timeline.clone();
    timeline.jump_to(3);
    assert_eq!(timeline, before);
    assert!(timeline.try_jump_to(3).is_err());
    assert!(timeline.try_jump_to(2).is_ok());
}

#[test]
fn test_jump_then_play_discards_future() {
    let mut timeline = Timeline::replay(&[0, 4, 1, 3]);
    timeline.jump_to(1);
    assert_eq!(timeline.next_player(), Player::O);

    timeline.play(8);
    assert_eq!(timeline.history().len(), 3);
    assert_eq!(timeline.viewed_step(), 2);

    let board = timeline.current().board();
    assert_eq!(board.get(Position::TopLeft).player(), Some(Player::X));
    assert_eq!(board.get(Position::BottomRight).player(), Some(Player::O));
    assert!(board.is_empty(Position::Center));
}

#[test]
fn test_jump_past_win_allows_play_again() {
    let mut timeline = Timeline::replay(&[0, 1, 4, 2, 8]);
    timeline.jump_to(4);
    assert_eq!(timeline.status(), Status::NextPlayer(Player::X));

    timeline.play(6);
    assert_eq!(timeline.history().len(), 6);
    assert_eq!(timeline.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_move_list_labels_and_current_marker() {
    let mut timeline = Timeline::replay(&[4, 0]);
    timeline.jump_to(1);

    let entries = timeline.move_list();
    let labels: Vec<&str> = entries.iter().map(|e| e.label().as_str()).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1(2, 2)", "Go to move #2(1, 1)"]
    );

    let current: Vec<usize> = entries.iter().filter(|e| e.current()).map(|e| e.step()).collect();
    assert_eq!(current, vec![1]);
}

#[test]
fn test_top_right_move_label_names_row_first() {
    let timeline = Timeline::replay(&[2]);
    assert_eq!(timeline.view().labels(), vec!["Go to game start", "Go to move #1(1, 3)"]);
}

#[test]
fn test_toggle_order_twice_restores_list() {
    let mut timeline = Timeline::replay(&[4, 0, 8]);
    let original = timeline.move_list();
    let history = timeline.history().to_vec();

    timeline.toggle_history_order();
    assert_eq!(timeline.history_order(), HistoryOrder::Descending);
    let reversed = timeline.move_list();
    assert_eq!(reversed.first().map(|e| e.step()), Some(3));
    assert_eq!(reversed.last().map(|e| e.step()), Some(0));

    timeline.toggle_history_order();
    assert_eq!(timeline.move_list(), original);
    assert_eq!(timeline.history(), history.as_slice());
}

#[test]
fn test_dispatch_routes_inputs() {
    let mut timeline = Timeline::new();
    timeline.dispatch(Input::CellClick(4));
    timeline.dispatch(Input::CellClick(0));
    timeline.dispatch(Input::HistoryItemClick(1));
    timeline.dispatch(Input::ToggleOrder);

    assert_eq!(timeline.history().len(), 3);
    assert_eq!(timeline.viewed_step(), 1);
    assert_eq!(timeline.history_order(), HistoryOrder::Descending);
    assert_eq!(timeline.view().labels()[0], "Go to move #2(1, 1)");
}

#[test]
fn test_try_play_leaves_original_untouched() {
    let timeline = Timeline::replay(&[4]);
    let next = timeline.try_play(0).expect("legal move");
    assert_eq!(timeline.history().len(), 2);
    assert_eq!(next.history().len(), 3);
}
