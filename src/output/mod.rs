//! Terminal output formatting
//!
//! Display utilities for the text game and command results.

pub mod display;
pub mod formatters;

pub use display::{print_deal, print_outcome, print_replay_result, print_sample_result};
