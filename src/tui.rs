//! TUI (Terminal User Interface) frontend for Hangman
//!
//! Full-screen alternative to the line prompts in `cli`, built on Ratatui.
//!
//! # Architecture
//! - `LineEditor`: keystroke-level editing of the input line
//! - `TuiInterface`: rendering plus the `GameInterface` implementation
//!
//! Every prompt (guess, save name, load name) goes through the same line
//! editor; only the replay question reads single keys.

use crate::cli::{game_over_message, outcome_message};
use crate::error::GameError;
use crate::game_state::{GameInterface, MAX_ATTEMPTS, SessionState, Status, UserAction};
use crate::guess::GuessOutcome;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_INPUT_LEN: usize = 32;
const MAX_MESSAGES: usize = 8;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    Guess,
    SaveName,
    LoadName,
    Replay,
}

impl Prompt {
    fn title(self) -> &'static str {
        match self {
            Prompt::Guess => "Your guess",
            Prompt::SaveName => "Save as",
            Prompt::LoadName => "Load which game?",
            Prompt::Replay => "Play again?",
        }
    }

    fn instructions(self) -> &'static str {
        match self {
            Prompt::Guess => "Type a letter, 'save' or 'load' | ENTER: Submit | ESC: Quit",
            Prompt::SaveName | Prompt::LoadName => "Type a name | ENTER: Confirm | ESC: Cancel",
            Prompt::Replay => "Y: New game | N or ESC: Quit",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum LineEdit {
    Pending,
    Submit(String),
    Cancel,
}

#[derive(Debug, Default)]
struct LineEditor {
    buffer: String,
}

impl LineEditor {
    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_key(&mut self, key: KeyEvent) -> LineEdit {
        match key.code {
            KeyCode::Char(c) if !Self::has_modifier_keys(&key) => {
                if self.buffer.chars().count() < MAX_INPUT_LEN {
                    self.buffer.push(c);
                }
                LineEdit::Pending
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                LineEdit::Pending
            }
            KeyCode::Enter => LineEdit::Submit(std::mem::take(&mut self.buffer)),
            KeyCode::Esc => {
                self.buffer.clear();
                LineEdit::Cancel
            }
            _ => {
                debug_log!("LineEditor::handle_key() - Ignoring key: {:?}", key.code);
                LineEdit::Pending
            }
        }
    }
}

/// The hangman figure after `wrong` misses.
fn gallows_lines(wrong: u8) -> [String; 7] {
    let part = |stage: u8, s: &'static str| if wrong >= stage { s } else { " " };
    let head = if wrong >= MAX_ATTEMPTS { "X" } else { part(1, "O") };
    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {head}   |"),
        format!(" {}{}{}  |", part(3, "/"), part(2, "|"), part(4, "\\")),
        format!(" {} {}  |", part(5, "/"), part(6, "\\")),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    board: &'a str,
    remaining_attempts: u8,
    guesses: &'a str,
    input: &'a str,
    prompt: Prompt,
    messages: &'a [(String, Style)],
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: String,
    remaining_attempts: u8,
    guesses: String,
    editor: LineEditor,
    prompt: Prompt,
    messages: Vec<(String, Style)>,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, GameError> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            board: String::new(),
            remaining_attempts: MAX_ATTEMPTS,
            guesses: String::new(),
            editor: LineEditor::default(),
            prompt: Prompt::Guess,
            messages: Vec::new(),
            status: "Ready".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: &self.board,
            remaining_attempts: self.remaining_attempts,
            guesses: &self.guesses,
            input: &self.editor.buffer,
            prompt: self.prompt,
            messages: &self.messages,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn push_message(&mut self, text: String, style: Style) {
        self.messages.push((text, style));
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(9), // Gallows and board
                Constraint::Min(6),    // Messages
                Constraint::Length(3), // Input line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.status);
        Self::render_game(f, chunks[1], ctx);
        Self::render_messages(f, chunks[2], ctx.messages);
        Self::render_input(f, chunks[3], ctx.prompt, ctx.input);
        Self::render_instructions(f, chunks[4], ctx.prompt);
    }

    fn render_title(f: &mut Frame, area: Rect, status: &str) {
        let title = Paragraph::new(Line::from(vec![
            Span::styled("HANGMAN", HEADER_STYLE),
            Span::raw("  "),
            Span::styled(status, MESSAGE_STYLE),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_game(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(15), Constraint::Min(20)])
            .split(area);

        let wrong = MAX_ATTEMPTS.saturating_sub(ctx.remaining_attempts);
        let figure: Vec<Line> = gallows_lines(wrong).into_iter().map(Line::from).collect();
        f.render_widget(
            Paragraph::new(figure).block(Block::default().borders(Borders::ALL)),
            columns[0],
        );

        let attempts_style = if ctx.remaining_attempts <= 2 {
            ERROR_STYLE
        } else {
            INFO_STYLE
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(ctx.board, SUCCESS_STYLE)),
            Line::from(""),
            Line::from(Span::styled(
                format!("Wrong guesses left: {}", ctx.remaining_attempts),
                attempts_style,
            )),
            Line::from(format!("Used: {}", ctx.guesses)),
        ];
        f.render_widget(
            Paragraph::new(lines).block(Block::default().title("Secret word").borders(Borders::ALL)),
            columns[1],
        );
    }

    fn render_messages(f: &mut Frame, area: Rect, messages: &[(String, Style)]) {
        let lines: Vec<Line> = messages
            .iter()
            .map(|(text, style)| Line::from(Span::styled(text.as_str(), *style)))
            .collect();
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_input(f: &mut Frame, area: Rect, prompt: Prompt, input: &str) {
        let paragraph = Paragraph::new(format!("> {input}_"))
            .style(Style::default().fg(Color::White))
            .block(Block::default().title(prompt.title()).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, prompt: Prompt) {
        let paragraph = Paragraph::new(prompt.instructions())
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Wait for the next key press. `Ok(None)` when nothing usable arrived.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Escape sequences from focus changes show up as control or replacement chars
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("next_key() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn read_input(&mut self, prompt: Prompt) -> Option<String> {
        self.prompt = prompt;
        self.editor.buffer.clear();
        loop {
            if self.draw().is_err() {
                info_log!("read_input() - Draw failed, cancelling");
                return None;
            }
            match self.next_key() {
                Ok(Some(key)) => match self.editor.handle_key(key) {
                    LineEdit::Submit(line) => return Some(line.trim().to_string()),
                    LineEdit::Cancel => return None,
                    LineEdit::Pending => {}
                },
                Ok(None) => {}
                Err(e) => {
                    debug_log!("read_input() - Input error: {}", e);
                    return None;
                }
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_welcome(&mut self) {
        self.messages.clear();
        self.push_message("Welcome to Hangman!".to_string(), HEADER_STYLE);
        self.push_message(
            "Type 'save' or 'load' at any turn to store or restore a game.".to_string(),
            MESSAGE_STYLE,
        );
        self.status = "New game".to_string();
    }

    fn display_turn(&mut self, state: &SessionState) {
        self.board = state.board.to_string();
        self.remaining_attempts = state.remaining_attempts;
        self.guesses = state
            .guesses
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ");
    }

    fn read_action(&mut self) -> UserAction {
        self.status = "Waiting for guess...".to_string();
        match self.read_input(Prompt::Guess) {
            Some(line) => UserAction::parse(&line),
            None => {
                info_log!("TuiInterface::read_action() - ESC pressed, returning Quit");
                UserAction::Quit
            }
        }
    }

    fn display_outcome(&mut self, guess: &str, outcome: GuessOutcome) {
        let style = match outcome {
            GuessOutcome::CorrectReveal => SUCCESS_STYLE,
            GuessOutcome::IncorrectNew => ERROR_STYLE,
            GuessOutcome::AlreadyGuessed | GuessOutcome::InvalidLength => INFO_STYLE,
        };
        self.push_message(outcome_message(guess, outcome), style);
    }

    fn read_save_name(&mut self) -> Option<String> {
        self.status = "Saving".to_string();
        self.read_input(Prompt::SaveName)
    }

    fn read_load_name(&mut self, saved_games: &[String]) -> Option<String> {
        self.status = "Loading".to_string();
        self.push_message(format!("Saved games: {}", saved_games.join(" ")), MESSAGE_STYLE);
        self.read_input(Prompt::LoadName)
    }

    fn display_saved(&mut self, name: &str) {
        self.push_message(format!("Game saved as '{name}'."), SUCCESS_STYLE);
    }

    fn display_loaded(&mut self, name: &str) {
        self.push_message(format!("Game '{name}' loaded."), SUCCESS_STYLE);
    }

    fn display_no_saved_games(&mut self) {
        self.push_message("No saved game found.".to_string(), INFO_STYLE);
    }

    fn display_error(&mut self, error: &GameError) {
        self.push_message(format!("Error: {error}"), ERROR_STYLE);
    }

    fn display_game_over(&mut self, status: Status, secret_word: &str) {
        let style = if status == Status::Won {
            SUCCESS_STYLE
        } else {
            ERROR_STYLE
        };
        self.board = secret_word.chars().map(String::from).collect::<Vec<_>>().join(" ");
        self.push_message(game_over_message(status, secret_word), style);
        self.status = "Game over".to_string();
    }

    fn ask_replay(&mut self) -> bool {
        self.prompt = Prompt::Replay;
        self.editor.buffer.clear();
        loop {
            if self.draw().is_err() {
                return false;
            }
            match self.next_key() {
                Ok(Some(key)) => match key.code {
                    KeyCode::Char('y' | 'Y') => return true,
                    KeyCode::Char('n' | 'N') | KeyCode::Esc => return false,
                    _ => {}
                },
                Ok(None) => {}
                Err(e) => {
                    debug_log!("ask_replay() - Input error: {}", e);
                    return false;
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
