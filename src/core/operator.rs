//! The four arithmetic operators and their legality rules
//!
//! Intermediate results must stay non-negative integers: subtraction may not
//! go below zero and division must be exact.

use super::Number;
use std::fmt;

/// One of the four operations a move may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators in display order
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Parse an operator symbol
    ///
    /// Accepts the ASCII spellings as well as the typographic ones:
    /// `+`, `-`/`−`, `*`/`x`/`X`/`×`, `/`/`÷`.
    ///
    /// # Examples
    /// ```
    /// use countdown_numbers::core::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("x"), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol("÷"), Some(Operator::Div));
    /// assert_eq!(Operator::from_symbol("%"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Sub),
            "*" | "x" | "X" | "×" => Some(Self::Mul),
            "/" | "÷" => Some(Self::Div),
            _ => None,
        }
    }

    /// Canonical display symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '×',
            Self::Div => '÷',
        }
    }

    /// Whether `lhs op rhs` is allowed
    #[must_use]
    pub const fn is_legal(self, lhs: Number, rhs: Number) -> bool {
        match self {
            Self::Add | Self::Mul => true,
            Self::Sub => lhs >= rhs,
            Self::Div => rhs != 0 && lhs % rhs == 0,
        }
    }

    /// Evaluate `lhs op rhs`, or `None` when the operation is illegal
    ///
    /// Additions and products that would overflow are treated as illegal.
    #[must_use]
    pub const fn apply(self, lhs: Number, rhs: Number) -> Option<Number> {
        if !self.is_legal(lhs, rhs) {
            return None;
        }
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => Some(lhs - rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div => Some(lhs / rhs),
        }
    }

    /// Short reminder of the rule an illegal use of this operator broke
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Div => "division must leave no remainder and cannot divide by 0",
            Self::Sub => "subtraction must not go below 0",
            Self::Add | Self::Mul => "result is too large",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
