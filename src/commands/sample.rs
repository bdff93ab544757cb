//! Sample command - deal statistics
//!
//! Draws many independent deals in parallel and summarises them. Each deal
//! gets its own RNG stream, so a run is reproducible from its seed.

use crate::core::{Deck, HAND_SIZE, LARGE_TILES, Number, Target};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Summary of a batch of deals
#[derive(Debug)]
pub struct SampleStatistics {
    pub total_deals: usize,
    /// Index = number of large tiles in the hand
    pub large_tile_distribution: [usize; LARGE_TILES.len() + 1],
    pub tile_frequency: FxHashMap<Number, usize>,
    pub target_min: Number,
    pub target_max: Number,
    pub target_mean: f64,
    pub mean_attempts: f64,
    pub max_attempts: usize,
    pub duration: Duration,
}

struct SampledDeal {
    tiles: Vec<Number>,
    large: usize,
    attempts: usize,
    target: Number,
}

/// Draw `count` deals starting from `seed`
///
/// Deal `i` uses the stream seeded with `seed + i`.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a fixed literal).
pub fn run_sample(count: usize, seed: u64, show_progress: bool) -> SampleStatistics {
    let start = Instant::now();
    let deck = Deck::standard();

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message("Dealing...");

    let deals: Vec<SampledDeal> = (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(i as u64));
            let draw = deck.draw(&mut rng);
            let target = Target::generate(&mut rng);
            pb.inc(1);
            SampledDeal {
                large: draw.hand.large_count(),
                tiles: draw.hand.into_tiles(),
                attempts: draw.attempts,
                target: target.value(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut large_tile_distribution = [0; LARGE_TILES.len() + 1];
    let mut tile_frequency: FxHashMap<Number, usize> = FxHashMap::default();
    let mut target_sum = 0;
    let mut attempts_sum = 0;

    for deal in &deals {
        large_tile_distribution[deal.large] += 1;
        for &tile in &deal.tiles {
            *tile_frequency.entry(tile).or_insert(0) += 1;
        }
        target_sum += deal.target;
        attempts_sum += deal.attempts;
    }

    let total_deals = deals.len();
    let per_deal = |sum: f64| {
        if total_deals == 0 {
            0.0
        } else {
            sum / total_deals as f64
        }
    };

    SampleStatistics {
        total_deals,
        large_tile_distribution,
        tile_frequency,
        target_min: deals.iter().map(|d| d.target).min().unwrap_or(0),
        target_max: deals.iter().map(|d| d.target).max().unwrap_or(0),
        target_mean: per_deal(target_sum as f64),
        mean_attempts: per_deal(attempts_sum as f64),
        max_attempts: deals.iter().map(|d| d.attempts).max().unwrap_or(0),
        duration: start.elapsed(),
    }
}

impl SampleStatistics {
    /// Share of all dealt tiles that had `value`
    #[must_use]
    pub fn tile_share(&self, value: Number) -> f64 {
        let dealt = self.total_deals * HAND_SIZE;
        if dealt == 0 {
            return 0.0;
        }
        self.tile_frequency.get(&value).copied().unwrap_or(0) as f64 / dealt as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TARGET_MAX, TARGET_MIN};

    #[test]
    fn sample_never_deals_without_large_tile() {
        let stats = run_sample(2_000, 11, false);

        assert_eq!(stats.total_deals, 2_000);
        assert_eq!(stats.large_tile_distribution[0], 0);
        assert_eq!(stats.large_tile_distribution.iter().sum::<usize>(), 2_000);
        assert!(stats.max_attempts >= 1);
        assert!(stats.mean_attempts >= 1.0);
    }

    #[test]
    fn sample_targets_in_range() {
        let stats = run_sample(1_000, 3, false);
        assert!(stats.target_min >= TARGET_MIN);
        assert!(stats.target_max <= TARGET_MAX);
        assert!(stats.target_mean > TARGET_MIN as f64);
        assert!(stats.target_mean < TARGET_MAX as f64);
    }

    #[test]
    fn sample_tiles_come_from_the_deck() {
        let stats = run_sample(500, 8, false);
        let deck = Deck::standard();
        assert!(stats.tile_frequency.keys().all(|&v| deck.copies_of(v) > 0));
        assert_eq!(
            stats.tile_frequency.values().sum::<usize>(),
            500 * HAND_SIZE
        );
        let total_share: f64 = (1..=10).chain(LARGE_TILES).map(|v| stats.tile_share(v)).sum();
        assert!((total_share - 1.0).abs() < 1e-9);
    }

    /// Number of `k`-subsets of an `n`-set
    fn choose(n: u64, k: u64) -> u64 {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn draws_are_uniform_over_hands_with_a_large_tile() {
        const DEALS: usize = 200_000;
        let stats = run_sample(DEALS, 1, false);

        let small = 20;
        let large = LARGE_TILES.len() as u64;
        let hand = HAND_SIZE as u64;
        let valid = choose(small + large, hand) - choose(small, hand);

        assert_eq!(stats.large_tile_distribution[0], 0);
        for k in 1..=large {
            let expected = (choose(large, k) * choose(small, hand - k)) as f64 / valid as f64;
            let observed = stats.large_tile_distribution[k as usize] as f64 / DEALS as f64;
            assert!(
                (observed - expected).abs() < 0.005,
                "{k} large tiles: observed {observed:.4}, expected {expected:.4}"
            );
        }
        // 0.0020 expected; a draw that never yields four large tiles would miss it
        assert!(stats.large_tile_distribution[4] > DEALS / 1_000);
    }

    #[test]
    fn sample_is_reproducible() {
        let a = run_sample(200, 99, false);
        let b = run_sample(200, 99, false);
        assert_eq!(a.large_tile_distribution, b.large_tile_distribution);
        assert_eq!(a.tile_frequency, b.tile_frequency);
        assert_eq!(a.target_min, b.target_min);
        assert_eq!(a.max_attempts, b.max_attempts);
    }

    #[test]
    fn empty_sample() {
        let stats = run_sample(0, 0, false);
        assert_eq!(stats.total_deals, 0);
        assert!(stats.target_mean.abs() < f64::EPSILON);
        assert!(stats.tile_share(25).abs() < f64::EPSILON);
    }
}
