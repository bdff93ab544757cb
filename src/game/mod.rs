//! The game engine
//!
//! Owns one game's state, validates and applies moves, and resolves how the
//! game ends. Input and output are left to a [`Collaborator`].

pub mod driver;
mod engine;
mod error;
mod outcome;
mod state;

pub use driver::{Collaborator, play};
pub use engine::{Game, Phase, TurnResult};
pub use error::{FinalChoiceError, MoveError, NoNumbersAvailable};
pub use outcome::{CLOSE_MARGIN, Ending, Outcome};
pub use state::{GameState, Step};
