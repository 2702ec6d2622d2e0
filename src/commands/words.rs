//! Tier pool inspection command
//!
//! Prints the word pool backing a tier.

use crate::wordlists::{Difficulty, WordList};

/// Print a tier's word pool
pub fn run_words(list: &WordList, difficulty: Difficulty) {
    let pool = list.tier(difficulty);
    println!("{} tier: {} words", difficulty, pool.len());
    for word in pool {
        println!("  {word}");
    }
}
