//! The 24-tile deck and the six-tile hand drawn from it
//!
//! The deck holds every small tile (1 to 10) twice and each large tile
//! (25, 50, 75, 100) once. A hand is six tiles drawn without replacement and
//! always contains at least one large tile.

use super::Number;
use rand::Rng;
use rand::seq::index;
use rustc_hash::FxHashMap;
use std::fmt;
use tracing::trace;

/// Number of tiles in a hand
pub const HAND_SIZE: usize = 6;

/// Number of tiles in the deck
pub const DECK_SIZE: usize = 24;

/// Tiles that count as "large"; every hand holds at least one
pub const LARGE_TILES: [Number; 4] = [25, 50, 75, 100];

/// Check whether a value is one of the large tiles
#[inline]
#[must_use]
pub fn is_large(value: Number) -> bool {
    LARGE_TILES.contains(&value)
}

/// Error type for drawing and validating hands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The capped draw gave up after this many rejected samples
    Exhausted(usize),
    /// A hand must hold exactly `HAND_SIZE` tiles
    WrongSize(usize),
    /// The value appears more often than the deck allows (or not at all)
    NotInDeck(Number),
    NoLargeTile,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted(attempts) => {
                write!(f, "No hand with a large tile after {attempts} attempts")
            }
            Self::WrongSize(len) => {
                write!(f, "A hand must hold exactly {HAND_SIZE} tiles, got {len}")
            }
            Self::NotInDeck(value) => write!(f, "Tile {value} is not available in the deck"),
            Self::NoLargeTile => write!(f, "A hand needs at least one of 25, 50, 75, 100"),
        }
    }
}

impl std::error::Error for DrawError {}

/// The fixed multiset of 24 tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    tiles: [Number; DECK_SIZE],
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// Build the standard deck: 1..=10 twice, then the four large tiles
    ///
    /// # Examples
    /// ```
    /// use countdown_numbers::core::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.tiles().len(), 24);
    /// assert_eq!(deck.tiles()[..4], [1, 1, 2, 2]);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut tiles = [0; DECK_SIZE];
        let small = (1..=10).flat_map(|n| [n, n]);
        for (slot, value) in tiles.iter_mut().zip(small.chain(LARGE_TILES)) {
            *slot = value;
        }
        Self { tiles }
    }

    /// All tiles in deck order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Number; DECK_SIZE] {
        &self.tiles
    }

    /// How many copies of `value` the deck holds
    #[must_use]
    pub fn copies_of(&self, value: Number) -> usize {
        self.tiles.iter().filter(|&&tile| tile == value).count()
    }

    /// Draw a hand, resampling until it holds a large tile
    ///
    /// Every accepted hand is uniform over the six-tile subsets that contain
    /// at least one large tile.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Draw {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if let Some(hand) = self.sample(rng) {
                return Draw { hand, attempts };
            }
            trace!(attempts, "rejected draw without a large tile");
        }
    }

    /// Like [`Deck::draw`] but gives up after `max_attempts` samples
    ///
    /// # Errors
    /// Returns `DrawError::Exhausted` if no sample held a large tile.
    pub fn try_draw<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_attempts: usize,
    ) -> Result<Draw, DrawError> {
        for attempts in 1..=max_attempts {
            if let Some(hand) = self.sample(rng) {
                return Ok(Draw { hand, attempts });
            }
            trace!(attempts, "rejected draw without a large tile");
        }
        Err(DrawError::Exhausted(max_attempts))
    }

    /// One uniform sample of six distinct deck positions
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Hand> {
        let tiles: Vec<Number> = index::sample(rng, DECK_SIZE, HAND_SIZE)
            .iter()
            .map(|position| self.tiles[position])
            .collect();

        tiles.iter().any(|&tile| is_large(tile)).then(|| Hand(tiles))
    }
}

/// A drawn hand together with the number of samples it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub hand: Hand,
    pub attempts: usize,
}

/// Six tiles in draw order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand(Vec<Number>);

impl Hand {
    /// Build a hand from chosen tiles, checking it against the standard deck
    ///
    /// # Errors
    /// Returns `DrawError` if:
    /// - There are not exactly six tiles
    /// - A value is not in the deck, or is used more often than the deck holds
    /// - No large tile is present
    pub fn from_tiles(tiles: Vec<Number>) -> Result<Self, DrawError> {
        if tiles.len() != HAND_SIZE {
            return Err(DrawError::WrongSize(tiles.len()));
        }

        let deck = Deck::standard();
        let mut counts: FxHashMap<Number, usize> = FxHashMap::default();
        for &tile in &tiles {
            let used = counts.entry(tile).or_insert(0);
            *used += 1;
            if *used > deck.copies_of(tile) {
                return Err(DrawError::NotInDeck(tile));
            }
        }

        if !tiles.iter().any(|&tile| is_large(tile)) {
            return Err(DrawError::NoLargeTile);
        }

        Ok(Self(tiles))
    }

    /// Tiles in draw order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Number] {
        &self.0
    }

    /// Number of large tiles in the hand
    #[must_use]
    pub fn large_count(&self) -> usize {
        self.0.iter().filter(|&&tile| is_large(tile)).count()
    }

    #[must_use]
    pub fn into_tiles(self) -> Vec<Number> {
        self.0
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiles: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", tiles.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn is_sub_multiset(hand: &[Number], deck: &Deck) -> bool {
        let mut remaining = deck.tiles().to_vec();
        hand.iter().all(|tile| {
            remaining
                .iter()
                .position(|t| t == tile)
                .map(|pos| remaining.swap_remove(pos))
                .is_some()
        })
    }

    #[test]
    fn standard_deck_composition() {
        let deck = Deck::standard();
        for value in 1..=10 {
            assert_eq!(deck.copies_of(value), 2, "small tile {value}");
        }
        for value in LARGE_TILES {
            assert_eq!(deck.copies_of(value), 1, "large tile {value}");
        }
        assert_eq!(deck.tiles().iter().sum::<Number>(), 110 + 250);
    }

    #[test]
    fn is_large_matches_large_tiles() {
        assert!(is_large(25));
        assert!(is_large(100));
        assert!(!is_large(10));
        assert!(!is_large(24));
    }

    #[test]
    fn draw_is_deterministic_for_seed() {
        let deck = Deck::standard();
        let a = deck.draw(&mut ChaCha8Rng::seed_from_u64(7));
        let b = deck.draw(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn try_draw_zero_attempts_is_exhausted() {
        let deck = Deck::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            deck.try_draw(&mut rng, 0),
            Err(DrawError::Exhausted(0))
        );
    }

    #[test]
    fn try_draw_succeeds_with_generous_cap() {
        let deck = Deck::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let draw = deck.try_draw(&mut rng, 1_000).unwrap();
        assert!(draw.attempts >= 1);
        assert!(draw.hand.large_count() >= 1);
    }

    #[test]
    fn hand_from_tiles_valid() {
        let hand = Hand::from_tiles(vec![25, 8, 7, 3, 3, 1]).unwrap();
        assert_eq!(hand.tiles(), &[25, 8, 7, 3, 3, 1]);
        assert_eq!(hand.large_count(), 1);
        assert_eq!(hand.to_string(), "25 8 7 3 3 1");
    }

    #[test]
    fn hand_from_tiles_rejects_bad_hands() {
        assert_eq!(
            Hand::from_tiles(vec![25, 1, 2]),
            Err(DrawError::WrongSize(3))
        );
        assert_eq!(
            Hand::from_tiles(vec![25, 3, 3, 3, 1, 2]),
            Err(DrawError::NotInDeck(3))
        );
        assert_eq!(
            Hand::from_tiles(vec![25, 25, 3, 4, 1, 2]),
            Err(DrawError::NotInDeck(25))
        );
        assert_eq!(
            Hand::from_tiles(vec![11, 25, 3, 4, 1, 2]),
            Err(DrawError::NotInDeck(11))
        );
        assert_eq!(
            Hand::from_tiles(vec![10, 10, 9, 9, 8, 8]),
            Err(DrawError::NoLargeTile)
        );
    }

    proptest! {
        #[test]
        fn every_draw_is_a_valid_hand(seed in any::<u64>()) {
            let deck = Deck::standard();
            let draw = deck.draw(&mut ChaCha8Rng::seed_from_u64(seed));
            let tiles = draw.hand.tiles();

            prop_assert_eq!(tiles.len(), HAND_SIZE);
            prop_assert!(tiles.iter().any(|&t| is_large(t)));
            prop_assert!(is_sub_multiset(tiles, &deck));
            prop_assert!(Hand::from_tiles(tiles.to_vec()).is_ok());
        }
    }
}
