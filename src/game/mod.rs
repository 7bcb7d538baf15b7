//! Core game logic for both tic-tac-toe variants: the 4x4 board, the 4x4x4
//! cube, player types, and immutable game states.

mod board;
mod cube;
mod player;
mod state;

pub use board::{Board, Cell, Line, BOARD_SIZE};
pub use cube::Cube;
pub use player::Player;
pub use state::{CubeState, GameOutcome, GameState, MoveError};
