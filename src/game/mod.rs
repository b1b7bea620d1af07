//! Connect Four rules: board representation, player types, and the game
//! state with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, MAX_DIMENSION, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
