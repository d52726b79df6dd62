//! Game history with time travel.
//!
//! A [`Timeline`] records every board reached so far and which one is on
//! display. Playing from an earlier step discards the later snapshots
//! before recording the new one, so history is a single branch.

use super::error::{JumpError, MoveError};
use super::invariants::assert_invariants;
use super::rules::{self, Win};
use super::{GameView, HistoryOrder, Input, MoveEntry, Player, Position, Snapshot, Status};
use tracing::{debug, info, instrument, warn};

/// Game state: append-only history, the viewed step, and list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) viewed_step: usize,
    pub(crate) history_order: HistoryOrder,
}

impl Timeline {
    /// Creates a timeline holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(HistoryOrder::default())
    }

    /// Creates a new timeline whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: HistoryOrder) -> Self {
        Self {
            history: vec![Snapshot::initial()],
            viewed_step: 0,
            history_order: order,
        }
    }

    /// Plays each cell in turn from a fresh game, ignoring illegal cells.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        let mut timeline = Self::new();
        for &cell in cells {
            timeline.play(cell);
        }
        timeline
    }

    /// Every snapshot recorded, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the snapshot on display.
    pub fn viewed_step(&self) -> usize {
        self.viewed_step
    }

    /// Current move-list order.
    pub fn history_order(&self) -> HistoryOrder {
        self.history_order
    }

    /// The snapshot on display.
    pub fn current(&self) -> &Snapshot {
        // viewed_step is kept within bounds by every transition
        &self.history[self.viewed_step]
    }

    /// Player whose turn it is on the viewed board.
    pub fn next_player(&self) -> Player {
        Player::to_move_at(self.viewed_step)
    }

    /// Evaluates the viewed board.
    pub fn win(&self) -> Option<Win> {
        rules::evaluate(self.current().board())
    }

    /// Computes the state after playing `cell` on the viewed board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the cell is off the board, already taken,
    /// or the viewed board is already won.
    #[instrument(skip(self), fields(viewed_step = self.viewed_step))]
    pub fn try_play(&self, cell: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        let current = self.current();

        if let Some(win) = self.win() {
            return Err(MoveError::GameOver(win.winner()));
        }
        if !current.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        let snapshot = current.after(pos, player);

        let mut history = self.history[..=self.viewed_step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(snapshot);

        if discarded > 0 {
            debug!(discarded, "Branching from earlier step");
        }

        let next = Self {
            viewed_step: history.len() - 1,
            history,
            history_order: self.history_order,
        };
        assert_invariants(&next);
        Ok(next)
    }

    /// Plays `cell` for the player to move. Illegal clicks are ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) {
        match self.try_play(cell) {
            Ok(next) => {
                info!(
                    cell,
                    player = %self.next_player(),
                    step = next.viewed_step,
                    "Move played"
                );
                *self = next;
            }
            Err(e) => warn!(cell, error = %e, "Ignoring move"),
        }
    }

    /// Computes the state with `step` on display.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `step` is past the end of history.
    #[instrument(skip(self))]
    pub fn try_jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::new(step, self.history.len()));
        }
        let next = Self {
            viewed_step: step,
            ..self.clone()
        };
        assert_invariants(&next);
        Ok(next)
    }

    /// Shows the board as it was at `step`. History is left intact.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        match self.try_jump_to(step) {
            Ok(next) => {
                debug!(step, "Jumped to step");
                *self = next;
            }
            Err(e) => warn!(step, error = %e, "Ignoring jump"),
        }
    }

    /// Flips the move list between oldest-first and newest-first.
    #[instrument(skip(self), fields(order = ?self.history_order))]
    pub fn toggle_history_order(&mut self) {
        self.history_order = self.history_order.toggle();
        debug!(order = ?self.history_order, "History order toggled");
    }

    /// Routes a front-end interaction to the matching transition.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, input: Input) {
        match input {
            Input::CellClick(cell) => self.play(cell),
            Input::HistoryItemClick(step) => self.jump_to(step),
            Input::ToggleOrder => self.toggle_history_order(),
        }
    }

    /// Status line for the viewed board.
    pub fn status(&self) -> Status {
        let win = self.win();
        let drawn = rules::is_draw(self.viewed_step, win.as_ref());
        debug_assert_eq!(
            self.viewed_step == rules::MAX_MOVES,
            rules::is_full(self.current().board()),
            "move count and filled squares disagree"
        );

        match win {
            Some(win) => Status::Winner(win.winner()),
            None if drawn => Status::Draw,
            None => Status::NextPlayer(self.next_player()),
        }
    }

    /// Move-list entries in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry::new(step, snapshot, self.viewed_step))
            .collect();

        if self.history_order == HistoryOrder::Descending {
            entries.reverse();
        }
        entries
    }

    /// Everything a renderer needs for the viewed step.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView::new(
            *self.current().board(),
            self.win(),
            self.move_list(),
            self.status(),
            self.history_order,
            self.viewed_step,
        )
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
