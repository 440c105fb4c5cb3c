pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod position;
pub mod solver;

pub use board::{Board, Cell, CellState};
pub use config::{GameConfig, BOARD_SIZE, MAX_MINES, MIN_MINES};
pub use error::GameError;
pub use game::{AutoPlayMode, AutoPlayOptions, BoardSnapshot, CellView, Game, GameState};
pub use position::Position;
pub use solver::{AutoPlayer, Difficulty};
