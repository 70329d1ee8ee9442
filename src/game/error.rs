//! Error types for game and search operations.

use std::fmt;

use super::{Side, MAX_TOTAL};

/// Error type for game model and search failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Move takes a count other than 1 or 2, or more coins than are left
    InvalidMove {
        side: Side,
        count: u8,
        remaining: usize,
    },
    /// Scores plus the coins still on the line would exceed `MAX_TOTAL`
    ScoreOverflow,
    /// An operation was used outside its contract (e.g. asking for the
    /// outcome of a game that is still in progress)
    ContractViolation { reason: &'static str },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove {
                side,
                count,
                remaining,
            } => {
                write!(
                    f,
                    "Invalid move: cannot take {count} coin(s) from the {side:?} end with {remaining} left"
                )
            }
            GameError::ScoreOverflow => {
                write!(f, "Score overflow: scores plus coins exceed {MAX_TOTAL}")
            }
            GameError::ContractViolation { reason } => {
                write!(f, "Contract violation: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}
