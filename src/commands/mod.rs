//! Command implementations

pub mod replay;
pub mod sample;
pub mod simple;

pub use replay::{ReplayConfig, ReplayEvent, ReplayResult, replay_moves};
pub use sample::{SampleStatistics, run_sample};
pub use simple::{TerminalPlayer, run_simple};
