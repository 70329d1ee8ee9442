//! Transposition table for caching search results.
//!
//! Keys are full positions (remaining coins, both scores, side to move), so a
//! probe can never return an entry belonging to a different position. Entries
//! are never evicted; a table grows until it is cleared or dropped.
//!
//! Each entry records whether its value is exact or only a bound. A value that
//! fell outside the alpha-beta window it was searched with is a bound; bounds
//! narrow the window of a later probe and are never returned as exact values.

use std::collections::HashMap;

use crate::game::{Move, Position, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Value is the exact minimax value
    LowerBound, // Value is at least this (failed high - value >= beta)
    UpperBound, // Value is at most this (failed low - value <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub value: Value,
    pub best_move: Option<Move>,
    pub bound_type: BoundType,
}

impl TTEntry {
    pub fn value(&self) -> Value {
        self.value
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }
}

/// Exact-keyed memo table mapping positions to search results.
#[derive(Clone, Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<Position, TTEntry>,
}

impl TranspositionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the entry stored for `position`.
    pub fn probe(&self, position: &Position) -> Option<TTEntry> {
        self.entries.get(position).copied()
    }

    /// Store an entry, replacing whatever was there for the same position.
    pub fn store(
        &mut self,
        position: &Position,
        value: Value,
        bound_type: BoundType,
        best_move: Option<Move>,
    ) {
        self.entries.insert(
            position.clone(),
            TTEntry {
                value,
                best_move,
                bound_type,
            },
        );
    }

    /// Iterate over every stored position and its entry, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &TTEntry)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        #[cfg(feature = "logging")]
        log::trace!("clearing transposition table ({} entries)", self.entries.len());
        self.entries.clear();
    }
}
