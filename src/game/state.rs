use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::{GameError, Move, Player, Side};

/// Largest allowed sum of both scores plus the coins on the line. Keeps every
/// margin strictly inside the search window `(-i64::MAX, i64::MAX)`.
pub const MAX_TOTAL: u64 = i64::MAX as u64 - 1;

/// `score_a + score_b + sum(coins)`, or `None` past `MAX_TOTAL`.
pub(crate) fn checked_total(coins: &[u32], score_a: u64, score_b: u64) -> Option<u64> {
    coins
        .iter()
        .try_fold(score_a.checked_add(score_b)?, |acc, &c| acc.checked_add(u64::from(c)))
        .filter(|&total| total <= MAX_TOTAL)
}

/// Immutable snapshot of a game: the coins still on the line, both scores and
/// the player to move.
///
/// The original coin line is shared between a position and all of its
/// successors; a position only records which window of it is still on the
/// table. Cloning and transitions are O(1) and never copy coins.
///
/// Equality and hashing look at the observable state only (the remaining
/// coins, both scores and the side to move), so a `Position` is its own exact
/// transposition key.
#[derive(Clone)]
pub struct Position {
    coins: Arc<[u32]>,
    start: usize,
    end: usize,
    score_a: u64,
    score_b: u64,
    turn: Player,
}

impl Position {
    /// Initial position for a line of coins: both scores zero, `Player::A` to
    /// move.
    ///
    /// Coin values are normally positive. Zero is accepted: a worthless coin
    /// is still a legal coin and breaks no invariant. Lines whose sum exceeds
    /// `MAX_TOTAL` are not rejected here; `apply` refuses the move that would
    /// push a score past it.
    #[must_use]
    pub fn new(coins: &[u32]) -> Self {
        Self::from_parts(Arc::from(coins), 0, 0, Player::A)
    }

    pub(crate) fn from_parts(coins: Arc<[u32]>, score_a: u64, score_b: u64, turn: Player) -> Self {
        let end = coins.len();
        Position {
            coins,
            start: 0,
            end,
            score_a,
            score_b,
            turn,
        }
    }

    /// Coins still on the line, left to right.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[u32] {
        &self.coins[self.start..self.end]
    }

    #[inline]
    #[must_use]
    pub fn coins_left(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub const fn score_a(&self) -> u64 {
        self.score_a
    }

    #[inline]
    #[must_use]
    pub const fn score_b(&self) -> u64 {
        self.score_b
    }

    #[inline]
    #[must_use]
    pub const fn score(&self, player: Player) -> u64 {
        match player {
            Player::A => self.score_a,
            Player::B => self.score_b,
        }
    }

    /// Player to act next. Meaningless once the line is empty.
    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Player {
        self.turn
    }

    /// `score_a - score_b`, the quantity the search optimizes.
    ///
    /// Scores never exceed `MAX_TOTAL` together, so the difference is exact;
    /// it saturates with the right sign otherwise.
    #[must_use]
    pub fn margin(&self) -> i64 {
        let diff = i128::from(self.score_a) - i128::from(self.score_b);
        let limit = MAX_TOTAL as i64;
        i64::try_from(diff).map_or(if diff > 0 { limit } else { -limit }, |m| {
            m.clamp(-limit, limit)
        })
    }

    /// Both scores plus every coin still on the line. Constant along any
    /// sequence of legal moves. Saturates at `u64::MAX` for lines too large to
    /// ever be played out.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.remaining()
            .iter()
            .fold(self.score_a.saturating_add(self.score_b), |acc, &c| {
                acc.saturating_add(u64::from(c))
            })
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.start == self.end
    }

    /// Legal moves in enumeration order: (L,1), (R,1), (L,2), (R,2), minus any
    /// that would take more coins than are left. Empty iff the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let left = self.coins_left();
        Move::ALL
            .into_iter()
            .filter(|mv| usize::from(mv.count) <= left)
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.is_well_formed() && usize::from(mv.count) <= self.coins_left()
    }

    /// Returns the position after the player to move takes the coins named by
    /// `mv`. `self` is left untouched.
    ///
    /// Fails with `InvalidMove` for an illegal move and with `ScoreOverflow`
    /// if the scores would add up to more than `MAX_TOTAL`.
    pub fn apply(&self, mv: Move) -> Result<Position, GameError> {
        if !self.is_legal(mv) {
            return Err(GameError::InvalidMove {
                side: mv.side,
                count: mv.count,
                remaining: self.coins_left(),
            });
        }

        let count = usize::from(mv.count);
        let (start, end, taken) = match mv.side {
            Side::Left => (
                self.start + count,
                self.end,
                &self.coins[self.start..self.start + count],
            ),
            Side::Right => (
                self.start,
                self.end - count,
                &self.coins[self.end - count..self.end],
            ),
        };
        let points: u64 = taken.iter().map(|&c| u64::from(c)).sum();

        let (score_a, score_b) = match self.turn {
            Player::A => (self.score_a.checked_add(points), Some(self.score_b)),
            Player::B => (Some(self.score_a), self.score_b.checked_add(points)),
        };
        let (score_a, score_b) = match (score_a, score_b) {
            (Some(a), Some(b)) if a.checked_add(b).is_some_and(|t| t <= MAX_TOTAL) => (a, b),
            _ => return Err(GameError::ScoreOverflow),
        };

        Ok(Position {
            coins: Arc::clone(&self.coins),
            start,
            end,
            score_a,
            score_b,
            turn: self.turn.opponent(),
        })
    }

    /// Final scores `(score_a, score_b)`. Only defined once the game is over.
    pub fn outcome(&self) -> Result<(u64, u64), GameError> {
        if !self.is_terminal() {
            return Err(GameError::ContractViolation {
                reason: "outcome requested for a position with coins left",
            });
        }
        Ok((self.score_a, self.score_b))
    }

    /// Player with the strictly higher final score. `None` while coins remain
    /// or on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        if !self.is_terminal() {
            return None;
        }
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Some(Player::A),
            std::cmp::Ordering::Less => Some(Player::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.score_a == other.score_a
            && self.score_b == other.score_b
            && self.turn == other.turn
            && self.remaining() == other.remaining()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.remaining().hash(state);
        self.score_a.hash(state);
        self.score_b.hash(state);
        self.turn.hash(state);
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("remaining", &self.remaining())
            .field("score_a", &self.score_a)
            .field("score_b", &self.score_b)
            .field("turn", &self.turn)
            .finish()
    }
}
