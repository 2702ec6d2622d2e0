//! Interactive play mode
//!
//! Text-based game loop: prompts for guesses, relays engine outcomes, and
//! handles restart, difficulty changes, and quitting.

use crate::core::{ATTEMPT_BUDGET, GameStatus, GuessError, GuessOutcome};
use crate::output::formatters::{attempts_meter, format_guessed, spaced_word};
use crate::session::GameSession;
use crate::wordlists::Difficulty;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive play loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play(session: &mut GameSession<'_>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Hangman - Play Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time.");
    println!("Commands: 'new' for a new round, 'easy'/'medium'/'hard' to switch");
    println!("difficulty, 'quit' to exit\n");

    loop {
        print_round_state(session);

        let input = get_user_input("Guess a letter")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                print_farewell(session);
                return Ok(());
            }
            "new" => {
                session.restart();
                println!("\n{}\n", "New round started!".cyan());
                continue;
            }
            name @ ("easy" | "medium" | "hard") => {
                if let Ok(difficulty) = Difficulty::from_name(name) {
                    session.set_difficulty(difficulty);
                    println!(
                        "\n{}\n",
                        format!("Difficulty set to {difficulty}, new round started!").cyan()
                    );
                }
                continue;
            }
            _ => {}
        }

        match session.guess_input(&input) {
            Ok(GuessOutcome::Hit { occurrences: 1 }) => {
                println!("{}", "Correct!".green());
            }
            Ok(GuessOutcome::Hit { occurrences }) => {
                println!("{}", format!("Correct! {occurrences} letters revealed").green());
            }
            Ok(GuessOutcome::Miss) => {
                println!("{}", "Incorrect! Try again.".red());
            }
            Ok(GuessOutcome::AlreadyGuessed) => {
                println!("{}", "You've already guessed that letter.".yellow());
            }
            Err(GuessError::Finished(_)) => {
                // Unreachable in this loop: terminal rounds go through the
                // play-again prompt below before the next guess.
                continue;
            }
            Err(err) => {
                println!("{}", format!("Invalid guess: {err}").yellow());
                continue;
            }
        }

        match session.game().status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                print_win(session);
                if !prompt_play_again(session)? {
                    return Ok(());
                }
            }
            GameStatus::Lost => {
                print_loss(session);
                if !prompt_play_again(session)? {
                    return Ok(());
                }
            }
        }
    }
}

fn print_round_state(session: &GameSession<'_>) {
    let game = session.game();

    println!("────────────────────────────────────────────────────────────");
    println!("Word:      {}", spaced_word(&game.displayed_word()).bold());
    println!(
        "Attempts:  {} {}/{}",
        attempts_meter(game.remaining_attempts(), ATTEMPT_BUDGET),
        game.remaining_attempts(),
        ATTEMPT_BUDGET
    );
    println!("Guessed:   {}", format_guessed(game.guessed_letters()));
    println!(
        "Player:    {} (score {}) | Difficulty: {}",
        session.player().name(),
        session.player().score(),
        session.difficulty()
    );
}

fn print_win(session: &GameSession<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "  You won!".bright_green().bold());
    println!(
        "  The word was {}",
        session.game().secret_word().to_string().bright_white().bold()
    );
    println!(
        "  Score: {}",
        session.player().score().to_string().bright_yellow()
    );
    println!("{}\n", "═".repeat(60).bright_cyan());
}

fn print_loss(session: &GameSession<'_>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "  Game over!".bright_red().bold());
    println!(
        "  The word was {}",
        session.game().secret_word().to_string().bright_white().bold()
    );
    println!("{}\n", "═".repeat(60).bright_cyan());
}

fn print_farewell(session: &GameSession<'_>) {
    println!(
        "\nThanks for playing, {}! Final score: {}\n",
        session.player().name(),
        session.player().score()
    );
}

fn prompt_play_again(session: &mut GameSession<'_>) -> Result<bool, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            session.restart();
            println!("\n{}\n", "New round started!".cyan());
            Ok(true)
        }
        _ => {
            print_farewell(session);
            Ok(false)
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
