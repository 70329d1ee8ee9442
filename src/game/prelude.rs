//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use coin_line_engine::game::prelude::*;
//!
//! let result = best_move(&Position::new(&[5])).unwrap();
//! assert_eq!(result.best_move, Some(Move::new(Side::Left, 1)));
//! ```

pub use super::{
    best_move, find_best_move, GameError, Move, Player, Position, PositionBuilder, SearchConfig,
    SearchResult, SearchState, Side,
};
