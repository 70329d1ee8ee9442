//! Core game types.
//!
//! - `Player` - the two sides of the game
//! - `Side` and `Move` - which end of the line to take from, and how many coins

mod moves;
mod player;

pub use moves::{Move, Side};
pub use player::Player;
