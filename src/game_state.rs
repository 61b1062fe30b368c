use crate::board::{BoardState, PLACEHOLDER};
use crate::error::GameError;
use crate::guess::{GuessOutcome, submit};
use crate::persistence::SaveStore;
use crate::wordbank::WordSource;
use crate::{debug_log, info_log};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Wrong guesses allowed per game.
pub const MAX_ATTEMPTS: u8 = 7;

/// Everything needed to resume a game. This is what save files hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionState {
    pub board: BoardState,
    pub guesses: Vec<char>,
    pub remaining_attempts: u8,
}

impl SessionState {
    #[must_use]
    pub fn new(secret_word: &str) -> Self {
        Self {
            board: BoardState::new(secret_word),
            guesses: Vec::new(),
            remaining_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.board.validate()?;
        for (i, &letter) in self.guesses.iter().enumerate() {
            if !letter.is_ascii_lowercase() {
                return Err(format!("guess '{letter}' is not a lowercase letter"));
            }
            if self.guesses[..i].contains(&letter) {
                return Err(format!("guess '{letter}' is listed twice"));
            }
        }

        // A slot is shown exactly when its letter has been guessed.
        let secret = self.board.secret_word();
        for (secret_ch, &shown) in secret.chars().zip(self.board.revealed()) {
            let guessed = self.guesses.contains(&secret_ch);
            if guessed && shown == PLACEHOLDER {
                return Err(format!("'{secret_ch}' was guessed but is not revealed"));
            }
            if !guessed && shown != PLACEHOLDER {
                return Err(format!("'{shown}' is revealed but was never guessed"));
            }
        }

        let wrong_guesses = self
            .guesses
            .iter()
            .filter(|&&letter| !self.board.contains(letter))
            .count();
        let expected = usize::from(MAX_ATTEMPTS).saturating_sub(wrong_guesses);
        if usize::from(self.remaining_attempts) != expected {
            return Err(format!(
                "{} attempts left after {wrong_guesses} wrong guesses, expected {expected}",
                self.remaining_attempts
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
    Ended,
}

/// One game from the first guess to a win, a loss or the player leaving.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: SessionState,
    status: Status,
}

impl GameSession {
    #[must_use]
    pub fn new(secret_word: &str) -> Self {
        Self::from_state(SessionState::new(secret_word))
    }

    #[must_use]
    pub fn from_state(state: SessionState) -> Self {
        let status = Self::status_of(&state);
        Self { state, status }
    }

    fn status_of(state: &SessionState) -> Status {
        if state.board.is_complete() {
            Status::Won
        } else if state.remaining_attempts == 0 {
            Status::Lost
        } else {
            Status::Playing
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Evaluate a guess and move to `Won` or `Lost` when it decides the game.
    pub fn guess(&mut self, input: &str) -> GuessOutcome {
        let outcome = submit(input, &mut self.state);
        self.status = match outcome {
            GuessOutcome::CorrectReveal | GuessOutcome::IncorrectNew => {
                Self::status_of(&self.state)
            }
            GuessOutcome::AlreadyGuessed | GuessOutcome::InvalidLength => self.status,
        };
        debug_log!("guess() - '{}' -> {:?}, {:?}", input, outcome, self.status);
        outcome
    }

    /// Replace the whole state, e.g. with one read from a save file.
    pub fn restore(&mut self, state: SessionState) {
        self.status = Self::status_of(&state);
        self.state = state;
    }

    pub fn end(&mut self) {
        self.status = Status::Ended;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Save,
    Load,
    Quit,
}

impl UserAction {
    /// Interpret one line of player input. `save` and `load` are
    /// case-sensitive; everything else is a guess.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "save" => UserAction::Save,
            "load" => UserAction::Load,
            other => UserAction::Guess(other.to_string()),
        }
    }
}

/// Everything the game loop needs from a frontend.
pub trait GameInterface {
    fn display_welcome(&mut self);
    fn display_turn(&mut self, state: &SessionState);
    fn read_action(&mut self) -> UserAction;
    fn display_outcome(&mut self, guess: &str, outcome: GuessOutcome);
    fn read_save_name(&mut self) -> Option<String>;
    fn read_load_name(&mut self, saved_games: &[String]) -> Option<String>;
    fn display_saved(&mut self, name: &str);
    fn display_loaded(&mut self, name: &str);
    fn display_no_saved_games(&mut self);
    fn display_error(&mut self, error: &GameError);
    fn display_game_over(&mut self, status: Status, secret_word: &str);
    fn ask_replay(&mut self) -> bool;
    fn display_exit_message(&mut self);
}

pub fn game_loop<I, R>(
    words: &WordSource,
    store: &SaveStore,
    interface: &mut I,
    rng: &mut R,
) -> Result<(), GameError>
where
    I: GameInterface,
    R: Rng + ?Sized,
{
    loop {
        let mut session = GameSession::new(&words.choose_word(rng)?);
        info_log!("game_loop() - new game started");
        interface.display_welcome();

        while session.status() == Status::Playing {
            play_turn(&mut session, store, interface);
        }

        if session.status() == Status::Ended {
            break;
        }
        interface.display_game_over(session.status(), &session.state().board.secret_word());
        if !interface.ask_replay() {
            session.end();
            break;
        }
    }

    interface.display_exit_message();
    Ok(())
}

fn play_turn<I: GameInterface>(session: &mut GameSession, store: &SaveStore, interface: &mut I) {
    interface.display_turn(session.state());
    match interface.read_action() {
        UserAction::Quit => {
            info_log!("play_turn() - player quit");
            session.end();
        }
        UserAction::Save => save_session(session, store, interface),
        UserAction::Load => load_session(session, store, interface),
        UserAction::Guess(input) => {
            let outcome = session.guess(&input);
            interface.display_outcome(&input, outcome);
        }
    }
}

fn save_session<I: GameInterface>(session: &GameSession, store: &SaveStore, interface: &mut I) {
    let Some(name) = interface.read_save_name() else {
        return;
    };
    match store.save(&name, session.state()) {
        Ok(path) => {
            info_log!("save_session() - saved to {}", path.display());
            interface.display_saved(&name);
        }
        Err(e) => {
            log::warn!("save failed: {e}");
            interface.display_error(&e);
        }
    }
}

fn load_session<I: GameInterface>(
    session: &mut GameSession,
    store: &SaveStore,
    interface: &mut I,
) {
    let saved_games = match store.list() {
        Ok(names) => names,
        Err(e) => {
            log::warn!("listing saved games failed: {e}");
            interface.display_error(&e);
            return;
        }
    };
    if saved_games.is_empty() {
        interface.display_no_saved_games();
        return;
    }

    let Some(name) = interface.read_load_name(&saved_games) else {
        return;
    };
    match store.load(&name) {
        Ok(state) => {
            info_log!("load_session() - restored '{}'", name);
            session.restore(state);
            interface.display_loaded(&name);
        }
        Err(e) => {
            log::warn!("load failed: {e}");
            interface.display_error(&e);
        }
    }
}
