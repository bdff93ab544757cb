//! The number the player tries to reach

use super::Number;
use rand::Rng;
use std::fmt;

/// Smallest possible target
pub const TARGET_MIN: Number = 101;

/// Largest possible target
pub const TARGET_MAX: Number = 999;

/// A target in `TARGET_MIN..=TARGET_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target(Number);

impl Target {
    /// Wrap a value, returning `None` outside `101..=999`
    #[must_use]
    pub fn new(value: Number) -> Option<Self> {
        (TARGET_MIN..=TARGET_MAX)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Draw a uniformly random target
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(TARGET_MIN..=TARGET_MAX))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> Number {
        self.0
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
