use crate::error::GameError;
use crate::info_log;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Shortest word that can be drawn as a secret word.
pub const MIN_WORD_LEN: usize = 6;
/// Longest word that can be drawn as a secret word.
pub const MAX_WORD_LEN: usize = 12;

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    let fits = (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len());
    (fits && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let read_error = |source| GameError::WordListRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line.map_err(read_error)?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// The pool of words a secret word is drawn from.
///
/// Never empty: construction fails with [`GameError::EmptyCandidateSet`]
/// when no word has a playable length.
#[derive(Debug, Clone)]
pub struct WordSource {
    candidates: Vec<String>,
}

impl WordSource {
    pub fn new(candidates: Vec<String>) -> Result<Self, GameError> {
        if candidates.is_empty() {
            return Err(GameError::EmptyCandidateSet);
        }
        info_log!("WordSource::new() - {} candidate words", candidates.len());
        Ok(Self { candidates })
    }

    pub fn embedded() -> Result<Self, GameError> {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        Self::new(load_wordbank_from_file(path)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Always false: `new` refuses an empty candidate list. Kept alongside
    /// `len` for callers that expect the pair.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Pick a secret word uniformly at random.
    pub fn choose_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GameError> {
        self.candidates
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptyCandidateSet)
    }
}
