use crate::wordbank::{MAX_WORD_LEN, MIN_WORD_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display symbol for a letter that has not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// The secret word and the player's view of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardState {
    secret_word: Vec<char>,
    revealed: Vec<char>,
}

impl BoardState {
    #[must_use]
    pub fn new(secret_word: &str) -> Self {
        let secret_word: Vec<char> = secret_word.chars().collect();
        let revealed = vec![PLACEHOLDER; secret_word.len()];
        Self {
            secret_word,
            revealed,
        }
    }

    #[must_use]
    pub fn secret_word(&self) -> String {
        self.secret_word.iter().collect()
    }

    #[must_use]
    pub fn revealed(&self) -> &[char] {
        &self.revealed
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.secret_word.contains(&letter)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.revealed.contains(&PLACEHOLDER)
    }

    /// Reveal every position holding `letter`.
    pub fn reveal(&mut self, letter: char) {
        for (slot, &ch) in self.revealed.iter_mut().zip(&self.secret_word) {
            if ch == letter {
                *slot = ch;
            }
        }
    }

    /// Check a board that came from outside the game, e.g. a save file.
    pub fn validate(&self) -> Result<(), String> {
        let len = self.secret_word.len();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&len) {
            return Err(format!("secret word has {len} letters"));
        }
        if let Some(ch) = self.secret_word.iter().find(|ch| !ch.is_ascii_lowercase()) {
            return Err(format!("secret word contains '{ch}', not a lowercase letter"));
        }
        if self.revealed.len() != len {
            return Err(format!(
                "board has {} slots for a {len}-letter word",
                self.revealed.len()
            ));
        }
        let mismatch = self
            .revealed
            .iter()
            .zip(&self.secret_word)
            .position(|(&shown, &secret)| shown != PLACEHOLDER && shown != secret);
        match mismatch {
            Some(i) => Err(format!("board slot {i} does not match the secret word")),
            None => Ok(()),
        }
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ch) in self.revealed.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed(board: &BoardState) -> String {
        board.revealed().iter().collect()
    }

    #[test]
    fn test_new_board_is_blank() {
        let board = BoardState::new("garden");
        assert_eq!(revealed(&board), "______");
        assert!(!board.is_complete());
        assert_eq!(board.secret_word(), "garden");
    }

    #[test]
    fn test_reveal_all_occurrences() {
        let mut board = BoardState::new("banana");
        board.reveal('a');
        assert_eq!(revealed(&board), "_a_a_a");
        board.reveal('n');
        assert_eq!(revealed(&board), "_anana");
    }

    #[test]
    fn test_reveal_missing_letter_changes_nothing() {
        let mut board = BoardState::new("banana");
        board.reveal('z');
        assert_eq!(revealed(&board), "______");
    }

    #[test]
    fn test_complete_once_every_letter_revealed() {
        let mut board = BoardState::new("banana");
        board.reveal('b');
        board.reveal('a');
        assert!(!board.is_complete());
        board.reveal('n');
        assert!(board.is_complete());
    }

    #[test]
    fn test_display_spaces_slots() {
        let mut board = BoardState::new("banana");
        board.reveal('a');
        assert_eq!(board.to_string(), "_ a _ a _ a");
    }

    #[test]
    fn test_validate_accepts_partial_board() {
        let mut board = BoardState::new("banana");
        board.reveal('n');
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let board = BoardState {
            secret_word: "banana".chars().collect(),
            revealed: vec![PLACEHOLDER; 5],
        };
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_letter() {
        let board = BoardState {
            secret_word: "banana".chars().collect(),
            revealed: "x_____".chars().collect(),
        };
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_uppercase_secret() {
        let board = BoardState::new("BANANA");
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_letter_secret() {
        let board = BoardState::new("ba-ana");
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_short_word() {
        let board = BoardState::new("cat");
        assert!(board.validate().is_err());
    }
}
