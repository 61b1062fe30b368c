// Integration tests for the hangman application
// These tests verify that all modules work together correctly

use hangman::cli::CliInterface;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{Cursor, Read, Write};

fn single_word_source(word: &str) -> WordSource {
    WordSource::new(vec![word.to_string()]).unwrap()
}

/// Run the game on scripted input and return whatever it left unread.
fn play(words: &WordSource, store: &SaveStore, input: &str) -> String {
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    let mut rng = StdRng::seed_from_u64(2024);
    game_loop(words, store, &mut interface, &mut rng).unwrap();

    let mut unread = String::new();
    interface.into_reader().read_to_string(&mut unread).unwrap();
    unread
}

#[test]
fn test_complete_game_win() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    // Wins on the third guess, then declines a replay
    let unread = play(&single_word_source("banana"), &store, "b\na\nn\nn\nafter\n");
    assert_eq!(unread, "after\n");
}

#[test]
fn test_game_stops_reading_guesses_once_won() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    // "z" lands on the replay prompt, which asks again; "n" then ends the game
    let unread = play(&single_word_source("banana"), &store, "b\na\nn\nz\nn\nleft\n");
    assert_eq!(unread, "left\n");
}

#[test]
fn test_complete_game_loss_and_replay() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    // Seven misses lose, "y" starts a second game that is saved mid-way
    let input = "c\nd\ne\nf\ng\nh\ni\ny\nb\nsave\nsecond\na\nn\nn\n";
    let unread = play(&single_word_source("banana"), &store, input);
    assert_eq!(unread, "");

    let second = store.load("second").unwrap();
    assert_eq!(second.guesses, vec!['b']);
    assert_eq!(second.remaining_attempts, 7);
}

#[test]
fn test_invalid_and_repeated_guesses_keep_playing() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let input = "ab\n7\n\nx\nx\nX\nsave\nmid\nb\na\nn\nn\n";
    play(&single_word_source("banana"), &store, input);

    let mid = store.load("mid").unwrap();
    assert_eq!(mid.guesses, vec!['x']);
    assert_eq!(mid.remaining_attempts, 6);
    assert_eq!(mid.board.to_string(), "_ _ _ _ _ _");
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let unread = play(&single_word_source("banana"), &store, "a\nsave\nlast\n");
    assert_eq!(unread, "");

    let last = store.load("last").unwrap();
    assert_eq!(last.board.to_string(), "_ a _ a _ a");
    assert_eq!(last.remaining_attempts, 7);
}

#[test]
fn test_save_then_resume_in_new_process() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path().join("saved_games"));
    let words = single_word_source("garden");

    // First run: two guesses, save, then input ends
    play(&words, &store, "g\nz\nsave\nweekend\n");

    let saved = store.load("weekend").unwrap();
    assert_eq!(saved.board.secret_word(), "garden");
    assert_eq!(saved.guesses, vec!['g', 'z']);
    assert_eq!(saved.remaining_attempts, 6);
    assert_eq!(store.list().unwrap(), vec!["weekend"]);

    // Second run starts on a different word, loads the saved one and saves again
    let other = single_word_source("planet");
    let unread = play(
        &other,
        &store,
        "load\nweekend\na\nsave\nmonday\nr\nd\ne\nn\nn\n",
    );
    assert_eq!(unread, "");

    let resumed = store.load("monday").unwrap();
    assert_eq!(resumed.board.secret_word(), "garden");
    assert_eq!(resumed.guesses, vec!['g', 'z', 'a']);
    assert_eq!(resumed.remaining_attempts, 6);
    assert_eq!(resumed.board.to_string(), "g a _ _ _ _");
    assert_eq!(store.list().unwrap(), vec!["monday", "weekend"]);
}

#[test]
fn test_load_round_trip_through_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = SaveStore::new(dir.path());

    let mut session = GameSession::new("umbrella");
    for letter in ["l", "q", "u", "w"] {
        session.guess(letter);
    }
    store.save("rainy", session.state()).unwrap();

    let restored = GameSession::from_state(store.load("rainy").unwrap());
    assert_eq!(restored.state(), session.state());
    assert_eq!(restored.status(), Status::Playing);
    assert_eq!(restored.state().board.to_string(), "u _ _ _ _ l l _");
}

#[test]
fn test_failed_save_keeps_session() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "occupied").unwrap();
    let store = SaveStore::new(&blocker);

    // The save fails, play continues and the game is still won
    let unread = play(&single_word_source("banana"), &store, "save\nslot\nb\na\nn\nn\nrest\n");
    assert_eq!(unread, "rest\n");
    assert!(store.list().is_err());
}

#[test]
fn test_custom_word_file_to_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "cat").unwrap();
        writeln!(file, "Rocket").unwrap();
        writeln!(file, "extraordinarily").unwrap();
    }

    let words = WordSource::from_file(&path).unwrap();
    assert_eq!(words.len(), 1);

    let store = SaveStore::new(dir.path().join("saves"));
    let unread = play(&words, &store, "r\no\nsave\nrocket\nc\nk\ne\nt\nn\n");
    assert_eq!(unread, "");

    let saved = store.load("rocket").unwrap();
    assert_eq!(saved.board.secret_word(), "rocket");
    assert_eq!(saved.board.to_string(), "r o _ _ _ _");
}

#[test]
fn test_word_file_without_candidates_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    std::fs::write(&path, "cat\ndog\nhouse\n").unwrap();

    let result = WordSource::from_file(&path);
    assert!(matches!(result, Err(GameError::EmptyCandidateSet)));
}

#[test]
fn test_is_complete_iff_every_letter_guessed() {
    let word = "committee";
    let letters: Vec<char> = {
        let mut seen = Vec::new();
        for c in word.chars() {
            if !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    };

    let mut state = SessionState::new(word);
    for (i, letter) in letters.iter().enumerate() {
        assert!(!state.board.is_complete(), "complete after only {i} letters");
        assert_eq!(submit(&letter.to_string(), &mut state), GuessOutcome::CorrectReveal);
    }
    assert!(state.board.is_complete());
}

#[test]
fn test_seven_distinct_misses_lose() {
    let mut session = GameSession::new("rhythm");
    let misses = ["a", "e", "i", "o", "u", "s", "l"];
    for (i, letter) in misses.iter().enumerate() {
        assert_eq!(session.guess(letter), GuessOutcome::IncorrectNew);
        assert_eq!(session.state().remaining_attempts as usize, 6 - i);
    }
    assert_eq!(session.status(), Status::Lost);
}
