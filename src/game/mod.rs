//! Coin line game model and search.
//!
//! A line of coins sits on the table. Players alternate taking one or two
//! coins from either end and bank their value. The game ends when the line is
//! empty; the higher score wins.
//!
//! Positions are immutable: `Position::apply` returns a new position and
//! leaves the original untouched, so sibling moves can be explored from the
//! same parent.
//!
//! # Example
//! ```
//! use coin_line_engine::game::{best_move, Move, Position};
//!
//! let position = Position::new(&[1, 2, 3, 4]);
//! let result = best_move(&position).unwrap();
//! assert_eq!(result.value, 4);
//! assert_eq!(result.best_move, Some(Move::right(2)));
//! ```

mod builder;
mod error;
pub mod prelude;
mod random;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::GameError;
pub use random::random_line;
pub use state::{Position, MAX_TOTAL};
pub use types::{Move, Player, Side};

// Public API - search functions and configuration
pub use search::{
    best_move, find_best_move, principal_variation, SearchConfig, SearchResult, SearchState,
    SearchStats, Value, INFINITY,
};
