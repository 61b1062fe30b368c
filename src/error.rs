use std::io;
use std::path::PathBuf;

/// Errors raised while setting up or persisting a game.
///
/// Bad guesses are not errors; they come back as
/// [`GuessOutcome`](crate::guess::GuessOutcome) values.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no word in the word list is between 6 and 12 letters long")]
    EmptyCandidateSet,

    #[error("failed to read word list '{path}': {source}")]
    WordListRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write save file '{path}': {source}")]
    IoWriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read save file '{path}': {source}")]
    IoReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no saved game named '{name}'")]
    FileNotFound { name: String },

    #[error("save file '{path}' is malformed: {reason}")]
    DeserializationError { path: PathBuf, reason: String },

    #[error("'{name}' is not a valid save name")]
    InvalidSaveName { name: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}
