//! Moves as submitted by the player and as applied by the engine

use super::{Number, Operator};
use std::fmt;

/// A move whose operator has been recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub lhs: Number,
    pub rhs: Number,
    pub operator: Operator,
}

impl Move {
    #[must_use]
    pub const fn new(lhs: Number, rhs: Number, operator: Operator) -> Self {
        Self { lhs, rhs, operator }
    }

    /// The result of this move, or `None` if the arithmetic is illegal
    #[must_use]
    pub const fn evaluate(&self) -> Option<Number> {
        self.operator.apply(self.lhs, self.rhs)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

/// A move exactly as the player wrote it
///
/// The operator is kept as text so the engine can reject unknown symbols
/// after it has checked the operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub lhs: Number,
    pub rhs: Number,
    pub symbol: String,
}

impl Proposal {
    #[must_use]
    pub fn new(lhs: Number, rhs: Number, symbol: impl Into<String>) -> Self {
        Self {
            lhs,
            rhs,
            symbol: symbol.into(),
        }
    }
}

impl From<Move> for Proposal {
    fn from(mv: Move) -> Self {
        Self::new(mv.lhs, mv.rhs, mv.operator.symbol().to_string())
    }
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.symbol, self.rhs)
    }
}

/// What the player asks for on their turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Combine(Proposal),
    Stop,
}
