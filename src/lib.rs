//! Strictly Timeline - tic-tac-toe with move history and time travel.
//!
//! The game is a [`Timeline`]: an append-only list of board snapshots plus
//! the step currently on display. Front ends feed it [`Input`]s and draw the
//! read-only [`GameView`] it hands back.
//!
//! # Architecture
//!
//! - **Rules**: pure win and draw evaluation of a single board
//! - **Timeline**: play, jump, and list-order transitions with derived status
//! - **TUI**: a ratatui front end driven by keyboard input
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{Input, Status, Timeline};
//!
//! let mut game = Timeline::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.dispatch(Input::CellClick(cell));
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.dispatch(Input::HistoryItemClick(0));
//! assert!(matches!(game.status(), Status::NextPlayer(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, TimelineConfig};

// Crate-level exports - Game types
pub use games::tictactoe::{
    Board, GameView, HistoryOrder, Input, JumpError, MoveEntry, MoveError, Player, Position,
    Snapshot, Square, Status, Timeline, Win, evaluate, move_label,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::{invariants, rules};

// Crate-level exports - Front ends
pub use replay::{render_text, replay};
pub use tui::{App, Control, Focus, run_tui};
