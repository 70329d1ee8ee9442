//! Recursive minimax with alpha-beta pruning and a transposition table.

use crate::tt::{BoundType, TranspositionTable};

use super::{SearchConfig, SearchStats, Value, INFINITY};
use crate::game::{GameError, Move, Position};

/// Search context for a single top-level call
pub(super) struct MinimaxContext<'a> {
    pub table: &'a mut TranspositionTable,
    pub stats: &'a mut SearchStats,
    pub config: SearchConfig,
}

impl MinimaxContext<'_> {
    /// Search the root with a full window.
    ///
    /// Bound entries are ignored here. A bound can narrow the window so far
    /// that the value still comes out right but the reported move is not an
    /// optimal one.
    pub fn search_root(
        &mut self,
        position: &Position,
    ) -> Result<(Value, Option<Move>), GameError> {
        self.search(position, -INFINITY, INFINITY, true)
    }

    fn search(
        &mut self,
        position: &Position,
        mut alpha: Value,
        mut beta: Value,
        is_root: bool,
    ) -> Result<(Value, Option<Move>), GameError> {
        self.stats.nodes += 1;

        if position.is_terminal() {
            return Ok((position.margin(), None));
        }

        // --- Transposition Table Probe ---
        if self.config.transposition {
            if let Some(entry) = self.table.probe(position) {
                // Only entries that answer the node or narrow its window count as hits
                let use_bounds = self.config.alpha_beta && !is_root;
                match entry.bound_type {
                    BoundType::Exact => {
                        self.stats.tt_hits += 1;
                        return Ok((entry.value, entry.best_move));
                    }
                    BoundType::LowerBound if use_bounds && entry.value > alpha => {
                        self.stats.tt_hits += 1;
                        alpha = entry.value;
                    }
                    BoundType::UpperBound if use_bounds && entry.value < beta => {
                        self.stats.tt_hits += 1;
                        beta = entry.value;
                    }
                    _ => {}
                }
                if alpha >= beta {
                    return Ok((entry.value, entry.best_move));
                }
            }
        }

        // Window actually searched; stored entries are classified against it
        let (window_alpha, window_beta) = (alpha, beta);

        let moves = position.legal_moves();
        if moves.is_empty() {
            return Err(GameError::ContractViolation {
                reason: "non-terminal position without legal moves",
            });
        }

        let maximizing = position.to_move().is_maximizing();
        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for mv in moves {
            let child = position.apply(mv)?;
            let (value, _) = self.search(&child, alpha, beta, false)?;

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                if self.config.alpha_beta {
                    alpha = alpha.max(best_value);
                }
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                if self.config.alpha_beta {
                    beta = beta.min(best_value);
                }
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // --- Transposition Table Store ---
        if self.config.transposition {
            let bound_type = if best_value <= window_alpha {
                BoundType::UpperBound
            } else if best_value >= window_beta {
                BoundType::LowerBound
            } else {
                BoundType::Exact
            };
            self.table.store(position, best_value, bound_type, best_move);
            self.stats.tt_stores += 1;
        }

        Ok((best_value, best_move))
    }
}
