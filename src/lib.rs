//! Hangman
//!
//! A headless hangman engine: tiered word lists, a per-round game state
//! machine, and player score tracking. There is no graphical front end here;
//! a presentation layer drives the engine through [`session::GameSession`]
//! and reads back the derived display and status.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GuessOutcome, SecretWord};
//!
//! let secret = SecretWord::new("cat").unwrap();
//! let mut game = Game::new(secret);
//!
//! let outcome = game.guess('a').unwrap();
//! assert_eq!(outcome, GuessOutcome::Hit { occurrences: 1 });
//! assert_eq!(game.displayed_word(), "-A-");
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Player and score tracking
pub mod scoring;

// Session state owned by the caller
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
