//! How a game ended and how far it landed from the target

use super::error::NoNumbersAvailable;
use crate::core::{Number, Target};

/// A finish within this distance of the target counts as close
pub const CLOSE_MARGIN: Number = 10;

/// Which path ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// A move produced the target
    Won,
    /// Every tile was used and at most one number remained
    Forced,
    /// The player stopped and picked a final number
    Stopped,
}

/// Final result of a game, computed once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    final_number: Option<Number>,
    target: Target,
    ending: Ending,
}

impl Outcome {
    pub(crate) const fn new(final_number: Option<Number>, target: Target, ending: Ending) -> Self {
        Self {
            final_number,
            target,
            ending,
        }
    }

    /// The number the game finished on
    ///
    /// # Errors
    /// Returns `NoNumbersAvailable` if the game ended with an empty pool.
    pub const fn final_number(&self) -> Result<Number, NoNumbersAvailable> {
        match self.final_number {
            Some(value) => Ok(value),
            None => Err(NoNumbersAvailable),
        }
    }

    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    #[must_use]
    pub const fn ending(&self) -> Ending {
        self.ending
    }

    /// Distance from the target, if there is a final number
    #[must_use]
    pub const fn gap(&self) -> Option<Number> {
        match self.final_number {
            Some(value) => Some(value.abs_diff(self.target.value())),
            None => None,
        }
    }

    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self.gap(), Some(0))
    }

    /// Within `CLOSE_MARGIN` of the target (exact finishes included)
    #[must_use]
    pub const fn is_close(&self) -> bool {
        matches!(self.gap(), Some(gap) if gap <= CLOSE_MARGIN)
    }
}
