//! Game session
//!
//! A `GameSession` owns the state that outlives a single round: the active
//! game, the current difficulty, the player, and the scoreboard. The caller
//! owns the session and passes it to whatever front end drives the game; no
//! state lives at application scope.

use crate::core::{Game, GameStatus, GuessError, GuessOutcome};
use crate::scoring::{Player, Scoreboard};
use crate::wordlists::{Difficulty, WordList};

/// One playing session: the active round plus player and score state
///
/// Rounds are replaced wholesale on restart or difficulty change, never
/// mutated in place.
#[derive(Debug)]
pub struct GameSession<'a> {
    words: &'a WordList,
    difficulty: Difficulty,
    player: Player,
    scoreboard: Scoreboard,
    game: Game,
}

impl<'a> GameSession<'a> {
    /// Start a session, drawing the first word from the given tier
    #[must_use]
    pub fn new(words: &'a WordList, player: Player, difficulty: Difficulty) -> Self {
        let game = Game::new(words.random_word(difficulty).clone());
        Self {
            words,
            difficulty,
            player,
            scoreboard: Scoreboard::new(),
            game,
        }
    }

    /// Forward a raw guess to the active round
    ///
    /// A guess that completes the word records the win on the player and the
    /// scoreboard before returning. Terminal rounds reject further guesses,
    /// so a win is recorded exactly once.
    ///
    /// # Errors
    ///
    /// Propagates every [`GuessError`] from [`Game::guess_input`].
    pub fn guess_input(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        let outcome = self.game.guess_input(input)?;

        if self.game.status() == GameStatus::Won {
            self.player.increment_score();
            self.scoreboard.update(&self.player);
        }

        Ok(outcome)
    }

    /// Start a fresh round at the current difficulty
    pub fn restart(&mut self) {
        self.game = Game::new(self.words.random_word(self.difficulty).clone());
    }

    /// Switch tiers and start a fresh round
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.restart();
    }

    /// The active round
    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The current tier
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The session's player
    #[inline]
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// The session's scoreboard
    #[inline]
    #[must_use]
    pub const fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
}
