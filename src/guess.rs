use crate::debug_log;
use crate::game_state::SessionState;

/// Result of evaluating one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was submitted earlier in this session; nothing changed.
    AlreadyGuessed,
    /// The letter is in the word and every occurrence is now shown.
    CorrectReveal,
    /// The letter is not in the word and cost one attempt.
    IncorrectNew,
    /// The input was not a single letter; nothing changed.
    InvalidLength,
}

fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

pub fn submit(input: &str, state: &mut SessionState) -> GuessOutcome {
    let Some(letter) = parse_letter(input) else {
        debug_log!("submit() - rejecting '{}'", input);
        return GuessOutcome::InvalidLength;
    };

    if state.guesses.contains(&letter) {
        return GuessOutcome::AlreadyGuessed;
    }

    state.guesses.push(letter);
    if state.board.contains(letter) {
        state.board.reveal(letter);
        GuessOutcome::CorrectReveal
    } else {
        state.remaining_attempts = state.remaining_attempts.saturating_sub(1);
        GuessOutcome::IncorrectNew
    }
}
