//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// End of the coin line a move takes from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }
}

/// Take `count` coins from the `side` end of the line.
///
/// Construction never fails; whether a move is legal depends on the position,
/// so `Position::apply` is where `count` gets checked. Only 1 and 2 are ever
/// legal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub side: Side,
    pub count: u8,
}

impl Move {
    /// Every move in enumeration order. This order decides which of several
    /// equally good moves the search reports, so it must not change.
    pub const ALL: [Move; 4] = [
        Move::new(Side::Left, 1),
        Move::new(Side::Right, 1),
        Move::new(Side::Left, 2),
        Move::new(Side::Right, 2),
    ];

    /// Largest number of coins a single move may take.
    pub const MAX_COUNT: u8 = 2;

    #[inline]
    #[must_use]
    pub const fn new(side: Side, count: u8) -> Self {
        Move { side, count }
    }

    #[inline]
    #[must_use]
    pub const fn left(count: u8) -> Self {
        Move::new(Side::Left, count)
    }

    #[inline]
    #[must_use]
    pub const fn right(count: u8) -> Self {
        Move::new(Side::Right, count)
    }

    /// True if `count` is 1 or 2, regardless of how many coins are left.
    #[inline]
    #[must_use]
    pub const fn is_well_formed(self) -> bool {
        self.count >= 1 && self.count <= Self::MAX_COUNT
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.side.to_char(), self.count)
    }
}
