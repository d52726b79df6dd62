//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart
//! from history handling so they can be checked on any snapshot.

pub mod draw;
pub mod win;

pub use draw::{MAX_MOVES, is_draw, is_full};
pub use win::{LINES, Win, evaluate};
