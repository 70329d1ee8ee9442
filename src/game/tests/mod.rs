//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `transitions.rs` - Move generation, move application, terminal queries
//! - `search.rs` - Minimax, pruning and transposition table behaviour
//! - `proptest.rs` - Property-based tests


use crate::game::{Move, Position, Value};

/// Plain recursive minimax written straight from the rules, sharing nothing
/// with the engine beyond `Position`. Used as the oracle in tests.
pub(super) fn reference_minimax(position: &Position) -> (Value, Option<Move>) {
    if position.is_terminal() {
        return (position.margin(), None);
    }
    let maximizing = position.to_move().is_maximizing();
    let mut best: Option<(Value, Move)> = None;
    for mv in position.legal_moves() {
        let child = position.apply(mv).expect("generated moves are legal");
        let (value, _) = reference_minimax(&child);
        let better = match best {
            None => true,
            Some((best_value, _)) if maximizing => value > best_value,
            Some((best_value, _)) => value < best_value,
        };
        if better {
            best = Some((value, mv));
        }
    }
    let (value, mv) = best.expect("non-terminal positions have moves");
    (value, Some(mv))
}

/// Number of positions in the full game tree of a line with `coins` coins.
pub(super) fn tree_size(coins: usize) -> u64 {
    let (mut two_back, mut one_back) = (1u64, 3u64);
    match coins {
        0 => two_back,
        1 => one_back,
        _ => {
            for _ in 2..=coins {
                let next = 1 + 2 * one_back + 2 * two_back;
                two_back = one_back;
                one_back = next;
            }
            one_back
        }
    }
}
