//! Session scoreboard
//!
//! Latest recorded score per player name. In-memory only; nothing persists
//! across the process lifetime.

use super::Player;
use rustc_hash::FxHashMap;

/// Mapping from player name to the last recorded score
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    scores: FxHashMap<String, u32>,
}

impl Scoreboard {
    /// Create an empty scoreboard
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the player's current score, overwriting any prior value
    pub fn update(&mut self, player: &Player) {
        self.scores.insert(player.name().to_string(), player.score());
    }

    /// The last recorded score for a player, if any
    #[must_use]
    pub fn score_of(&self, name: &str) -> Option<u32> {
        self.scores.get(name).copied()
    }

    /// Number of players with a recorded score
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// True if no score has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_has_no_scores() {
        let board = Scoreboard::new();
        assert!(board.is_empty());
        assert_eq!(board.score_of("Player1"), None);
    }

    #[test]
    fn update_records_current_score() {
        let mut player = Player::new("Player1").unwrap();
        let mut board = Scoreboard::new();

        player.increment_score();
        board.update(&player);

        assert_eq!(board.score_of("Player1"), Some(1));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn update_overwrites_prior_value() {
        let mut player = Player::new("Player1").unwrap();
        let mut board = Scoreboard::new();

        player.increment_score();
        board.update(&player);
        player.increment_score();
        board.update(&player);

        assert_eq!(board.score_of("Player1"), Some(2));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn players_are_tracked_separately() {
        let mut one = Player::new("One").unwrap();
        let two = Player::new("Two").unwrap();
        let mut board = Scoreboard::new();

        one.increment_score();
        board.update(&one);
        board.update(&two);

        assert_eq!(board.score_of("One"), Some(1));
        assert_eq!(board.score_of("Two"), Some(0));
        assert_eq!(board.len(), 2);
    }
}
