//! Rejections the engine reports back to the player
//!
//! None of these end the game. A rejected request leaves the state untouched
//! and the same question is asked again.

use crate::core::{Number, Operator};
use std::fmt;

/// Why a move was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The operand is not among the available numbers
    UnavailableOperand(Number),
    /// Both operands are the same value but fewer than two copies exist
    InsufficientMultiplicity { operand: Number, available: usize },
    UnsupportedOperator(String),
    /// Negative subtraction, inexact division or division by zero
    IllegalArithmetic {
        lhs: Number,
        operator: Operator,
        rhs: Number,
    },
    /// The game is not waiting for a move
    OutOfTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnavailableOperand(operand) => write!(f, "{operand} is not available"),
            Self::InsufficientMultiplicity { operand, available } => write!(
                f,
                "{operand} can only be paired with itself if it is available twice (found {available})"
            ),
            Self::UnsupportedOperator(symbol) => {
                write!(f, "Unknown operator '{symbol}', use +, -, × or ÷")
            }
            Self::IllegalArithmetic { lhs, operator, rhs } => {
                write!(f, "{lhs} {operator} {rhs} is not allowed: {}", operator.rule())
            }
            Self::OutOfTurn => write!(f, "No move can be played now"),
        }
    }
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Whether the player should be shown the available numbers again
    ///
    /// True when an operand is simply not in play, including a value paired
    /// with itself that has no copy left.
    #[must_use]
    pub const fn names_missing_operand(&self) -> bool {
        matches!(
            self,
            Self::UnavailableOperand(_) | Self::InsufficientMultiplicity { available: 0, .. }
        )
    }
}

/// Why a final-number choice was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalChoiceError {
    NotAvailable(Number),
    /// Exactly one number must be chosen; this many were given
    NotSingle(usize),
    /// The game is not waiting for a final choice
    OutOfTurn,
}

impl fmt::Display for FinalChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAvailable(value) => write!(f, "{value} is not available"),
            Self::NotSingle(count) => write!(f, "Choose exactly one number (got {count})"),
            Self::OutOfTurn => write!(f, "No final number is expected now"),
        }
    }
}

impl std::error::Error for FinalChoiceError {}

/// The game ended with no number left to score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoNumbersAvailable;

impl fmt::Display for NoNumbersAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No number available")
    }
}

impl std::error::Error for NoNumbersAvailable {}
