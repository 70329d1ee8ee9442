//! Search module implementing minimax with alpha-beta pruning.
//!
//! Features:
//! - Exhaustive minimax over the whole game tree (there is no depth limit;
//!   every line ends when the coins run out)
//! - Alpha-beta pruning with fail-soft bounds
//! - Transposition table with exact/lower/upper bound entries, so reusing a
//!   table across searches never changes a result
//!
//! Player A maximizes `score_a - score_b`, player B minimizes it. When several
//! moves reach the best value, the first one in `Move::ALL` order is reported.

mod minimax;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tt::TranspositionTable;

use super::{GameError, Move, Position};
use minimax::MinimaxContext;

/// Search value: `score_a - score_b` at the end of optimal play.
pub type Value = i64;

/// Larger than any reachable value. `-INFINITY` is safe to negate.
pub const INFINITY: Value = Value::MAX;

/// Result of a search: the optimal value and a move achieving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// `score_a - score_b` at the terminal position reached under optimal play
    pub value: Value,
    /// `None` only when the position is already terminal
    pub best_move: Option<Move>,
}

/// Switches for the two search optimizations. Both are on by default; turning
/// both off gives plain exhaustive minimax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Skip subtrees that cannot change the result
    pub alpha_beta: bool,
    /// Probe and fill the transposition table
    pub transposition: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            alpha_beta: true,
            transposition: true,
        }
    }
}

impl SearchConfig {
    /// Plain minimax: no pruning, no table.
    #[must_use]
    pub const fn exhaustive() -> Self {
        SearchConfig {
            alpha_beta: false,
            transposition: false,
        }
    }

    #[must_use]
    pub const fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    #[must_use]
    pub const fn with_transposition(mut self, enabled: bool) -> Self {
        self.transposition = enabled;
        self
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, terminal ones included
    pub nodes: u64,
    /// Table entries that answered a node or narrowed its window
    pub tt_hits: u64,
    pub tt_stores: u64,
    /// Move loops abandoned because alpha >= beta
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Everything a search needs that outlives a single node: the table, the
/// configuration and the statistics of the last call.
///
/// Keeping a `SearchState` alive between calls keeps the table warm. Dropping
/// it, or calling `clear`, discards the cache.
#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub table: TranspositionTable,
    pub config: SearchConfig,
    pub stats: SearchStats,
}

impl SearchState {
    /// Create a state with an empty table and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        SearchState {
            config,
            ..Self::default()
        }
    }

    /// Drop every cached entry and reset the statistics.
    pub fn clear(&mut self) {
        self.table.clear();
        self.stats.reset();
    }
}

/// Optimal value and move for `position`, using a fresh table that is
/// discarded when the call returns.
pub fn best_move(position: &Position) -> Result<SearchResult, GameError> {
    let mut state = SearchState::new();
    find_best_move(position, &mut state)
}

/// Optimal value and move for `position`, using and extending the table held
/// by `state`.
///
/// Errors only if the game model breaks its own contract; a correct model
/// never makes this fail.
pub fn find_best_move(
    position: &Position,
    state: &mut SearchState,
) -> Result<SearchResult, GameError> {
    state.stats.reset();

    let mut context = MinimaxContext {
        table: &mut state.table,
        stats: &mut state.stats,
        config: state.config,
    };
    let (value, best_move) = context.search_root(position)?;

    #[cfg(feature = "logging")]
    log::debug!(
        "search done: value {} move {} nodes {} tt_hits {} cutoffs {} table {}",
        value,
        best_move.map_or_else(|| "-".to_string(), |mv| mv.to_string()),
        state.stats.nodes,
        state.stats.tt_hits,
        state.stats.cutoffs,
        state.table.len()
    );

    Ok(SearchResult { value, best_move })
}

/// The line of moves both players make under optimal play, from `position`
/// until the coins run out.
pub fn principal_variation(
    position: &Position,
    state: &mut SearchState,
) -> Result<Vec<Move>, GameError> {
    let mut line = Vec::with_capacity(position.coins_left());
    let mut current = position.clone();

    while let Some(mv) = find_best_move(&current, state)?.best_move {
        line.push(mv);
        current = current.apply(mv)?;
    }

    Ok(line)
}
