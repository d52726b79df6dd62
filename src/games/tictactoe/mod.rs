//! Tic-tac-toe with a navigable move history.

pub mod invariants;
pub mod rules;

mod error;
mod input;
mod moves;
mod position;
mod snapshot;
mod status;
mod timeline;
mod types;
mod view;

pub use error::{JumpError, MoveError};
pub use input::Input;
pub use moves::{HistoryOrder, MoveEntry, move_label};
pub use position::Position;
pub use rules::{Win, evaluate};
pub use snapshot::Snapshot;
pub use status::Status;
pub use timeline::Timeline;
pub use types::{Board, Player, Square};
pub use view::GameView;
