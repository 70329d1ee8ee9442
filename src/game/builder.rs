//! Fluent builder for constructing game positions.
//!
//! `Position::new` only produces starting positions. The builder can place a
//! game mid-way through: scores already banked and either player to move.
//!
//! # Example
//! ```
//! use coin_line_engine::game::{Player, PositionBuilder};
//!
//! let position = PositionBuilder::new()
//!     .coins(&[3, 1, 4])
//!     .score_a(5)
//!     .score_b(9)
//!     .to_move(Player::B)
//!     .build()
//!     .expect("total fits");
//! assert_eq!(position.remaining(), &[3, 1, 4]);
//! assert_eq!(position.total(), 22);
//! ```

use std::sync::Arc;

use super::state::checked_total;
use super::{GameError, Player, Position};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    coins: Vec<u32>,
    score_a: u64,
    score_b: u64,
    to_move: Player,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty line, no score, `Player::A` to move.
    #[must_use]
    pub const fn new() -> Self {
        PositionBuilder {
            coins: Vec::new(),
            score_a: 0,
            score_b: 0,
            to_move: Player::A,
        }
    }

    /// Replace the coin line.
    #[must_use]
    pub fn coins(mut self, coins: &[u32]) -> Self {
        self.coins = coins.to_vec();
        self
    }

    /// Append a coin to the right end of the line.
    #[must_use]
    pub fn coin(mut self, value: u32) -> Self {
        self.coins.push(value);
        self
    }

    #[must_use]
    pub const fn score_a(mut self, score: u64) -> Self {
        self.score_a = score;
        self
    }

    #[must_use]
    pub const fn score_b(mut self, score: u64) -> Self {
        self.score_b = score;
        self
    }

    /// Set the player to move.
    #[must_use]
    pub const fn to_move(mut self, player: Player) -> Self {
        self.to_move = player;
        self
    }

    /// Finish the position.
    ///
    /// Fails with `GameError::ScoreOverflow` if both scores plus the coins on
    /// the line add up to more than `MAX_TOTAL`.
    pub fn build(self) -> Result<Position, GameError> {
        checked_total(&self.coins, self.score_a, self.score_b).ok_or(GameError::ScoreOverflow)?;
        Ok(Position::from_parts(
            Arc::from(self.coins),
            self.score_a,
            self.score_b,
            self.to_move,
        ))
    }
}

impl From<&Position> for PositionBuilder {
    fn from(position: &Position) -> Self {
        PositionBuilder {
            coins: position.remaining().to_vec(),
            score_a: position.score_a(),
            score_b: position.score_b(),
            to_move: position.to_move(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_initial_position() {
        let built = PositionBuilder::new().coins(&[1, 2, 3]).build().unwrap();
        assert_eq!(built, Position::new(&[1, 2, 3]));
    }

    #[test]
    fn coin_appends_on_the_right() {
        let built = PositionBuilder::new().coin(7).coin(8).build().unwrap();
        assert_eq!(built.remaining(), &[7, 8]);
    }

    #[test]
    fn round_trips_through_from() {
        let position = PositionBuilder::new()
            .coins(&[2, 9])
            .score_a(4)
            .score_b(1)
            .to_move(Player::B)
            .build().unwrap();
        let rebuilt = PositionBuilder::from(&position).build().unwrap();
        assert_eq!(rebuilt, position);
        assert_eq!(rebuilt.to_move(), Player::B);
    }

    #[test]
    fn rejects_totals_past_the_limit() {
        use crate::game::MAX_TOTAL;

        let err = PositionBuilder::new().score_a(u64::MAX).build().unwrap_err();
        assert_eq!(err, GameError::ScoreOverflow);
        assert!(PositionBuilder::new()
            .score_a(MAX_TOTAL)
            .score_b(1)
            .build()
            .is_err());
        assert!(PositionBuilder::new()
            .coins(&[1])
            .score_a(MAX_TOTAL)
            .build()
            .is_err());

        let edge = PositionBuilder::new()
            .coins(&[1])
            .score_a(MAX_TOTAL - 1)
            .build()
            .unwrap();
        assert_eq!(edge.total(), MAX_TOTAL);
    }
}
