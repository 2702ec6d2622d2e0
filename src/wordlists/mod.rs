//! Tiered word lists
//!
//! Candidate words partitioned by difficulty tier, with embedded pools
//! compiled into the binary and a loader for custom pools.

mod embedded;
pub mod loader;

pub use embedded::{EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT};

use crate::core::SecretWord;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Difficulty tier, each backed by a distinct word pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Error type for unrecognized tier names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyError {
    name: String,
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized difficulty {:?}, expected easy, medium, or hard",
            self.name
        )
    }
}

impl std::error::Error for DifficultyError {}

impl Difficulty {
    /// All tiers, in ascending order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a tier name (case-insensitive)
    ///
    /// An unrecognized name is an explicit error, never a silent fallback
    /// to another tier.
    ///
    /// # Errors
    /// Returns `DifficultyError` for anything other than "easy", "medium",
    /// or "hard".
    ///
    /// # Examples
    /// ```
    /// use hangman::wordlists::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_name("hard").unwrap(), Difficulty::Hard);
    /// assert!(Difficulty::from_name("extreme").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, DifficultyError> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(DifficultyError {
                name: name.to_string(),
            }),
        }
    }

    /// The tier's lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error type for invalid word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    EmptyTier(Difficulty),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTier(tier) => write!(f, "The {tier} tier has no words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Candidate words for every tier
///
/// Every tier is verified non-empty at construction; the list is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    easy: Vec<SecretWord>,
    medium: Vec<SecretWord>,
    hard: Vec<SecretWord>,
}

impl WordList {
    /// Create a word list from per-tier word pools
    ///
    /// # Errors
    /// Returns `WordListError::EmptyTier` if any tier is empty.
    pub fn new(
        easy: Vec<SecretWord>,
        medium: Vec<SecretWord>,
        hard: Vec<SecretWord>,
    ) -> Result<Self, WordListError> {
        let list = Self { easy, medium, hard };
        for tier in Difficulty::ALL {
            if list.tier(tier).is_empty() {
                return Err(WordListError::EmptyTier(tier));
            }
        }
        Ok(list)
    }

    /// The word list compiled into the binary
    ///
    /// # Errors
    /// Returns `WordListError::EmptyTier` if an embedded pool is empty,
    /// which the build script and the tests below rule out.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            loader::words_from_slice(EASY),
            loader::words_from_slice(MEDIUM),
            loader::words_from_slice(HARD),
        )
    }

    /// The word pool backing a tier
    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> &[SecretWord] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Draw one word uniformly at random from a tier's pool
    ///
    /// # Panics
    /// Will not panic - tiers are verified non-empty at construction.
    #[must_use]
    pub fn random_word(&self, difficulty: Difficulty) -> &SecretWord {
        self.tier(difficulty)
            .choose(&mut rand::rng())
            .expect("tiers verified non-empty at construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<SecretWord> {
        loader::words_from_slice(texts)
    }

    #[test]
    fn easy_count_matches_const() {
        assert_eq!(EASY.len(), EASY_COUNT);
    }

    #[test]
    fn medium_count_matches_const() {
        assert_eq!(MEDIUM.len(), MEDIUM_COUNT);
    }

    #[test]
    fn hard_count_matches_const() {
        assert_eq!(HARD.len(), HARD_COUNT);
    }

    #[test]
    fn embedded_pools_are_valid_words() {
        for pool in [EASY, MEDIUM, HARD] {
            assert!(!pool.is_empty());
            for &word in pool {
                assert!(!word.is_empty(), "Empty entry in embedded pool");
                assert!(
                    word.chars().all(|c| c.is_ascii_uppercase()),
                    "Word '{word}' is not uppercase letters"
                );
            }
        }
    }

    #[test]
    fn embedded_pools_contain_the_seed_words() {
        assert!(EASY.contains(&"CAT"));
        assert!(EASY.contains(&"DOG"));
        assert!(EASY.contains(&"BALL"));
        assert!(MEDIUM.contains(&"APPLE"));
        assert!(MEDIUM.contains(&"ORANGE"));
        assert!(MEDIUM.contains(&"BANANA"));
        assert!(HARD.contains(&"ELEPHANT"));
        assert!(HARD.contains(&"CROCODILE"));
        assert!(HARD.contains(&"HIPPOPOTAMUS"));
    }

    #[test]
    fn embedded_list_constructs() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.tier(Difficulty::Easy).len(), EASY_COUNT);
        assert_eq!(list.tier(Difficulty::Medium).len(), MEDIUM_COUNT);
        assert_eq!(list.tier(Difficulty::Hard).len(), HARD_COUNT);
    }

    #[test]
    fn empty_tier_is_rejected() {
        let result = WordList::new(words(&["CAT"]), Vec::new(), words(&["ELEPHANT"]));
        assert_eq!(result, Err(WordListError::EmptyTier(Difficulty::Medium)));
    }

    #[test]
    fn random_word_is_a_member_of_the_tier() {
        let list = WordList::new(
            words(&["CAT", "DOG", "BALL"]),
            words(&["APPLE", "ORANGE", "BANANA"]),
            words(&["ELEPHANT", "CROCODILE", "HIPPOPOTAMUS"]),
        )
        .unwrap();

        for tier in Difficulty::ALL {
            for _ in 0..20 {
                let word = list.random_word(tier);
                assert!(list.tier(tier).contains(word));
            }
        }
    }

    #[test]
    fn from_name_parses_known_tiers() {
        assert_eq!(Difficulty::from_name("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("MEDIUM").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("Hard").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn from_name_rejects_unknown_tiers() {
        assert!(Difficulty::from_name("extreme").is_err());
        assert!(Difficulty::from_name("").is_err());
    }

    #[test]
    fn default_tier_is_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn difficulty_display_matches_name() {
        for tier in Difficulty::ALL {
            assert_eq!(format!("{tier}"), tier.name());
        }
    }
}
