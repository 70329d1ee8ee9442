//! Player type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players. `A` always moves first from an initial position and is the
/// maximizing side of the search.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Returns the other player
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// True for the side that maximizes `score_a - score_b`
    #[inline]
    #[must_use]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::A)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}
