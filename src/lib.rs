//! Le compte est bon
//!
//! The numbers round of *Des chiffres et des lettres*: combine six tiles with
//! `+ - × ÷` to reach a target between 101 and 999.
//!
//! # Quick Start
//!
//! ```rust
//! use countdown_numbers::core::{Hand, Proposal, Target};
//! use countdown_numbers::game::{Game, TurnResult};
//!
//! let hand = Hand::from_tiles(vec![100, 4, 7, 3, 3, 1]).unwrap();
//! let mut game = Game::new(hand, Target::new(400).unwrap());
//!
//! let turn = game.submit(&Proposal::new(100, 4, "x")).unwrap();
//! assert!(matches!(turn, TurnResult::Won(..)));
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Game setup
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
