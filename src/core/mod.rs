//! Core domain types for the numbers round
//!
//! Tiles, targets, operators and moves. Everything here is pure: randomness is
//! always passed in by the caller, so every type is deterministic under test.

mod deck;
mod moves;
pub mod notation;
mod operator;
mod target;

pub use deck::{DECK_SIZE, Deck, Draw, DrawError, HAND_SIZE, Hand, LARGE_TILES, is_large};
pub use moves::{Command, Move, Proposal};
pub use operator::Operator;
pub use target::{TARGET_MAX, TARGET_MIN, Target};

/// Every number in play: tiles, intermediate results and targets.
pub type Number = u64;
