//! Plain-text rendering of a game, for the `replay` command.

use crate::{GameView, HistoryOrder, Input, Position, Timeline};
use tracing::{debug, instrument};

/// Feeds `cells` (and an optional jump) through a fresh timeline.
///
/// Inputs go through [`Timeline::dispatch`] exactly as clicks would, so
/// illegal cells are skipped the same way.
#[instrument]
pub fn replay(cells: &[usize], jump: Option<usize>, order: HistoryOrder) -> Timeline {
    let mut timeline = Timeline::with_order(order);
    let inputs = cells
        .iter()
        .map(|&cell| Input::CellClick(cell))
        .chain(jump.map(Input::HistoryItemClick));

    for input in inputs {
        timeline.dispatch(input);
    }
    debug!(
        len = timeline.history().len(),
        viewed = timeline.viewed_step(),
        "Replay finished"
    );
    timeline
}

/// Renders the board, status, and move list as text.
///
/// Winning squares are wrapped in brackets; the viewed entry is marked
/// with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();

    for row in 0..3 {
        let cells: Vec<String> = Position::ALL[row * 3..row * 3 + 3]
            .iter()
            .map(|&pos| {
                let symbol = view
                    .board()
                    .get(pos)
                    .player()
                    .map_or_else(|| " ".to_string(), |p| p.to_string());
                if view.is_highlighted(pos) {
                    format!("[{symbol}]")
                } else {
                    format!(" {symbol} ")
                }
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status().to_string());
    out.push('\n');

    for entry in view.entries() {
        let marker = if entry.current() { '>' } else { ' ' };
        out.push_str(&format!("{marker} {}\n", entry.label()));
    }

    out
}
