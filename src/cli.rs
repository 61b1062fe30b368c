use crate::debug_log;
use crate::error::GameError;
use crate::game_state::{GameInterface, SessionState, Status, UserAction};
use crate::guess::GuessOutcome;
use crate::persistence::{DEFAULT_SAVE_DIR, SAVE_EXTENSION};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (defaults to the built-in list)
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<PathBuf>,

    /// Directory where saved games are kept
    #[arg(short = 's', long = "save-dir", default_value = DEFAULT_SAVE_DIR)]
    pub save_dir: PathBuf,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Read one trimmed line. `None` at end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            debug_log!("read_line() - {}", e);
            None
        }
    }
}

pub fn display_welcome() {
    println!("Welcome to Hangman!");
    println!("If you have a saved game, you can load it by typing \"load\".");
    println!("If you want to save your progress, you can do so at any time by typing \"save\".");
}

pub fn display_turn(state: &SessionState) {
    println!("\nWrong guesses left: {}", state.remaining_attempts);
    println!("{}", state.board);
    if !state.guesses.is_empty() {
        println!("You have used: {}", format_guesses(&state.guesses));
    }
}

fn format_guesses(guesses: &[char]) -> String {
    guesses
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn read_action<R: BufRead>(reader: &mut R) -> UserAction {
    println!("Enter a letter guess:");
    read_line(reader).map_or(UserAction::Quit, |line| UserAction::parse(&line))
}

#[must_use]
pub fn outcome_message(guess: &str, outcome: GuessOutcome) -> String {
    let letter = guess.to_lowercase();
    match outcome {
        GuessOutcome::CorrectReveal => {
            format!("Good guess! '{letter}' appears in the secret word.")
        }
        GuessOutcome::IncorrectNew => format!("Sorry, '{letter}' is not in the secret word."),
        GuessOutcome::AlreadyGuessed => format!("You've already guessed '{letter}'."),
        GuessOutcome::InvalidLength => "Please only type 1 letter for each guess.".to_string(),
    }
}

#[must_use]
pub fn game_over_message(status: Status, secret_word: &str) -> String {
    match status {
        Status::Won => format!("You guessed the word! It was {secret_word}."),
        Status::Lost => format!("Game Over! The secret word was {secret_word}."),
        Status::Playing | Status::Ended => format!("The secret word was {secret_word}."),
    }
}

pub fn read_save_name<R: BufRead>(reader: &mut R) -> Option<String> {
    println!("How will you name your file?");
    read_line(reader)
}

pub fn read_load_name<R: BufRead>(reader: &mut R, saved_games: &[String]) -> Option<String> {
    println!("Saved games: {}", saved_games.join(" "));
    println!("Enter one of the names like so: \"name\" (without \".{SAVE_EXTENSION}\")");
    read_line(reader)
}

/// Ask until the answer is `y` or `n`. End of input counts as `n`.
pub fn ask_replay<R: BufRead>(reader: &mut R) -> bool {
    loop {
        println!("Would you like to play again? y/n");
        let Some(answer) = read_line(reader) else {
            return false;
        };
        match answer.to_lowercase().as_str() {
            "y" => return true,
            "n" => return false,
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Give back the reader, positioned after the last line the game consumed.
    pub fn into_reader(self) -> R {
        self.reader
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_welcome(&mut self) {
        display_welcome();
    }

    fn display_turn(&mut self, state: &SessionState) {
        display_turn(state);
    }

    fn read_action(&mut self) -> UserAction {
        read_action(&mut self.reader)
    }

    fn display_outcome(&mut self, guess: &str, outcome: GuessOutcome) {
        println!("{}", outcome_message(guess, outcome));
    }

    fn read_save_name(&mut self) -> Option<String> {
        read_save_name(&mut self.reader)
    }

    fn read_load_name(&mut self, saved_games: &[String]) -> Option<String> {
        read_load_name(&mut self.reader, saved_games)
    }

    fn display_saved(&mut self, name: &str) {
        println!("Game saved successfully as '{name}'!");
    }

    fn display_loaded(&mut self, name: &str) {
        println!("Game '{name}' loaded successfully!");
    }

    fn display_no_saved_games(&mut self) {
        println!("No saved game found. Carry on with this one.");
    }

    fn display_error(&mut self, error: &GameError) {
        println!("Error: {error}");
    }

    fn display_game_over(&mut self, status: Status, secret_word: &str) {
        println!("{}", game_over_message(status, secret_word));
    }

    fn ask_replay(&mut self) -> bool {
        ask_replay(&mut self.reader)
    }

    fn display_exit_message(&mut self) {
        println!("Thanks for playing!");
    }
}
