//! Game setup from command-line options
//!
//! A game is dealt from a seed so it can be replayed. Tiles and target can
//! also be fixed by hand, in which case they are checked against the rules.

use crate::core::{Deck, DrawError, Hand, Number, TARGET_MAX, TARGET_MIN, Target};
use crate::game::Game;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::info;

/// Error type for invalid game setups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    Hand(DrawError),
    TargetOutOfRange(Number),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hand(err) => write!(f, "Invalid tiles: {err}"),
            Self::TargetOutOfRange(value) => {
                write!(
                    f,
                    "Target must be between {TARGET_MIN} and {TARGET_MAX}, got {value}"
                )
            }
        }
    }
}

impl std::error::Error for SetupError {}

impl From<DrawError> for SetupError {
    fn from(err: DrawError) -> Self {
        Self::Hand(err)
    }
}

/// How to set up a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Seed for the deal; a random one is picked when absent
    pub seed: Option<u64>,
    pub tiles: Option<Vec<Number>>,
    pub target: Option<Number>,
}

/// A dealt hand and target, with what it took to produce them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hand: Hand,
    pub target: Target,
    pub seed: u64,
    /// Samples drawn before a hand with a large tile came up (0 for fixed tiles)
    pub attempts: usize,
}

impl Deal {
    #[must_use]
    pub fn into_game(self) -> Game {
        Game::new(self.hand, self.target)
    }
}

impl GameConfig {
    #[must_use]
    pub const fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            tiles: None,
            target: None,
        }
    }

    /// Deal tiles and target
    ///
    /// # Errors
    /// Returns `SetupError` if fixed tiles are not a valid hand or a fixed
    /// target is outside `101..=999`.
    pub fn deal(&self) -> Result<Deal, SetupError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let (hand, attempts) = match &self.tiles {
            Some(tiles) => (Hand::from_tiles(tiles.clone())?, 0),
            None => {
                let draw = Deck::standard().draw(&mut rng);
                (draw.hand, draw.attempts)
            }
        };

        let target = match self.target {
            Some(value) => Target::new(value).ok_or(SetupError::TargetOutOfRange(value))?,
            None => Target::generate(&mut rng),
        };

        info!(seed, tiles = %hand, %target, attempts, "dealt");
        Ok(Deal {
            hand,
            target,
            seed,
            attempts,
        })
    }

    /// Config for the following game of a session
    ///
    /// A seeded session stays reproducible by moving to the next seed.
    #[must_use]
    pub fn next_round(&self) -> Self {
        Self {
            seed: self.seed.map(|seed| seed.wrapping_add(1)),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::is_large;

    #[test]
    fn seeded_deals_are_reproducible() {
        let config = GameConfig::seeded(42);
        let first = config.deal().unwrap();
        let second = config.deal().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, 42);
        assert!(first.attempts >= 1);
        assert!(first.hand.tiles().iter().any(|&t| is_large(t)));
    }

    #[test]
    fn next_round_changes_the_seed() {
        let config = GameConfig::seeded(u64::MAX);
        assert_eq!(config.next_round().seed, Some(0));
        assert_eq!(GameConfig::default().next_round().seed, None);
    }

    #[test]
    fn fixed_tiles_and_target() {
        let config = GameConfig {
            seed: Some(1),
            tiles: Some(vec![25, 8, 7, 3, 3, 1]),
            target: Some(414),
        };
        let deal = config.deal().unwrap();
        assert_eq!(deal.hand.tiles(), &[25, 8, 7, 3, 3, 1]);
        assert_eq!(deal.target.value(), 414);
        assert_eq!(deal.attempts, 0);

        let game = deal.into_game();
        assert_eq!(game.state().available_count(), 6);
    }

    #[test]
    fn invalid_setups_are_rejected() {
        let bad_tiles = GameConfig {
            tiles: Some(vec![1, 2, 3]),
            ..GameConfig::default()
        };
        assert_eq!(
            bad_tiles.deal(),
            Err(SetupError::Hand(DrawError::WrongSize(3)))
        );

        let bad_target = GameConfig {
            target: Some(1000),
            ..GameConfig::seeded(5)
        };
        assert_eq!(bad_target.deal(), Err(SetupError::TargetOutOfRange(1000)));
    }
}
