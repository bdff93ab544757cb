//! The live pool of numbers and the move history
//!
//! Unused original tiles and unused intermediate results are tracked
//! separately: the forced end of a game depends on both, and the
//! interface shows them apart.

use crate::core::{Move, Number, Target};

/// A move that was applied, with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub mv: Move,
    pub result: Number,
}

/// Everything that changes while a game is played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    hand: Vec<Number>,
    tiles: Vec<Number>,
    results: Vec<Number>,
    target: Target,
    history: Vec<Step>,
}

impl GameState {
    #[must_use]
    pub fn new(tiles: Vec<Number>, target: Target) -> Self {
        Self {
            hand: tiles.clone(),
            tiles,
            results: Vec::new(),
            target,
            history: Vec::new(),
        }
    }

    /// The tiles the game started with, in draw order
    #[inline]
    #[must_use]
    pub fn hand(&self) -> &[Number] {
        &self.hand
    }

    /// Original tiles not yet used by a move
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Number] {
        &self.tiles
    }

    /// Intermediate results not yet used by a move
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[Number] {
        &self.results
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Every number that can be used right now, tiles first
    #[must_use]
    pub fn available(&self) -> Vec<Number> {
        self.tiles.iter().chain(&self.results).copied().collect()
    }

    /// Available numbers in ascending order
    #[must_use]
    pub fn available_sorted(&self) -> Vec<Number> {
        let mut numbers = self.available();
        numbers.sort_unstable();
        numbers
    }

    #[must_use]
    pub fn available_count(&self) -> usize {
        self.tiles.len() + self.results.len()
    }

    /// How many usable copies of `value` exist
    #[must_use]
    pub fn multiplicity(&self, value: Number) -> usize {
        self.tiles
            .iter()
            .chain(&self.results)
            .filter(|&&n| n == value)
            .count()
    }

    #[must_use]
    pub fn contains(&self, value: Number) -> bool {
        self.tiles.contains(&value) || self.results.contains(&value)
    }

    /// All tiles used and at most one result left: nothing more to combine
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.tiles.is_empty() && self.results.len() <= 1
    }

    /// Remove both operands and add the result
    ///
    /// The caller has already checked that both operands are available.
    pub(crate) fn apply(&mut self, mv: Move, result: Number) {
        self.remove_one(mv.lhs);
        self.remove_one(mv.rhs);
        self.results.push(result);
        self.history.push(Step { mv, result });
    }

    /// Remove one copy of `value`, preferring an unused tile over a result
    fn remove_one(&mut self, value: Number) {
        for pool in [&mut self.tiles, &mut self.results] {
            if let Some(pos) = pool.iter().position(|&n| n == value) {
                pool.remove(pos);
                return;
            }
        }
    }
}
