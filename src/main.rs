//! Hangman - CLI
//!
//! Text-mode driver for the hangman engine: tier selection, guessing,
//! restarts, and score tracking. No graphical front end.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_play, run_words},
    core::SecretWord,
    scoring::Player,
    session::GameSession,
    wordlists::{Difficulty, WordList, loader::load_from_file},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Word-guessing game with tiered word lists",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier: easy, medium, or hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Player name recorded on the scoreboard
    #[arg(short, long, global = true, default_value = "Player1")]
    player: String,

    /// Directory with custom easy.txt/medium.txt/hard.txt word files
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive play mode (default)
    Play,

    /// Print the word pool for the selected tier
    Words,
}

/// Load word pools based on the -w flag
///
/// Without a directory the embedded pools are used; with one, each tier is
/// read from its own file in that directory.
fn load_wordlist(words_dir: Option<&Path>) -> Result<WordList> {
    match words_dir {
        None => Ok(WordList::embedded()?),
        Some(dir) => {
            let easy = load_tier(dir, "easy.txt")?;
            let medium = load_tier(dir, "medium.txt")?;
            let hard = load_tier(dir, "hard.txt")?;
            Ok(WordList::new(easy, medium, hard)?)
        }
    }
}

fn load_tier(dir: &Path, file: &str) -> Result<Vec<SecretWord>> {
    let path = dir.join(file);
    load_from_file(&path).with_context(|| format!("reading word list {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let difficulty = Difficulty::from_name(&cli.difficulty)?;
    let words = load_wordlist(cli.words.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let player = Player::new(cli.player)?;
            let mut session = GameSession::new(&words, player, difficulty);
            run_play(&mut session).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Words => {
            run_words(&words, difficulty);
            Ok(())
        }
    }
}
