//! Application state and key handling.

use crate::games::guessing::{GameSession, GameStatus, GuessOutcome, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument, warn};

use super::input::GuessInput;

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    input: GuessInput,
    message: String,
    should_quit: bool,
}

impl App {
    /// Creates an application with a freshly started game.
    pub fn new() -> Self {
        Self::with_session(GameSession::start())
    }

    /// Creates an application around an existing game.
    pub fn with_session(session: GameSession) -> Self {
        Self {
            session,
            input: GuessInput::new(),
            message: format!(
                "Guess the secret number between {MIN_GUESS} and {MAX_GUESS}. \
                 You have {MAX_ATTEMPTS} attempts."
            ),
            should_quit: false,
        }
    }

    /// Gets the game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the guess field.
    pub fn input(&self) -> &GuessInput {
        &self.input
    }

    /// Gets the current status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char('r') => self.restart(),
            other => {
                if !self.input.apply(other) {
                    debug!(key = ?other, "Ignored key");
                }
            }
        }
    }

    fn submit(&mut self) {
        let Some(value) = self.input.value() else {
            self.message = format!("Enter a number between {MIN_GUESS} and {MAX_GUESS}.");
            return;
        };

        self.message = match self.session.submit_guess(value) {
            Ok(GuessOutcome::Accepted {
                status: GameStatus::Won,
                new_best,
                ..
            }) => {
                let mut message = format!(
                    "Congratulations! You found the number in {} attempts!",
                    self.session.attempts()
                );
                if new_best {
                    message.push_str(" New best score!");
                }
                message.push_str(" Press 'r' to play again.");
                message
            }
            Ok(GuessOutcome::Accepted {
                status: GameStatus::Lost,
                ..
            }) => format!(
                "Game Over! The number was {}. Press 'r' to play again.",
                self.session.secret()
            ),
            Ok(GuessOutcome::Accepted { hint, .. }) => hint.to_string(),
            Ok(GuessOutcome::Ignored { .. }) => {
                "This game is over. Press 'r' to start a new game.".to_string()
            }
            Err(e) => {
                warn!(error = %e, "Guess rejected");
                e.kind.to_string()
            }
        };
    }

    fn restart(&mut self) {
        if !self.session.status().is_terminal() {
            debug!("Restart ignored while game in progress");
            return;
        }
        debug!("Restarting game");
        self.session.reset();
        self.message = format!(
            "New game! Guess the secret number between {MIN_GUESS} and {MAX_GUESS}."
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
