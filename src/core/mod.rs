//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear state-machine properties.

mod game;
mod word;

pub use game::{ATTEMPT_BUDGET, Game, GameStatus, GuessError, GuessOutcome, MASK_CHAR};
pub use word::{SecretWord, WordError};
