pub mod game;
pub mod tt;

pub use game::{best_move, find_best_move, GameError, Move, Player, Position, Side};
pub use tt::TranspositionTable;
