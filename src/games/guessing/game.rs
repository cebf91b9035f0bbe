//! Game engine for the number guessing game.
//!
//! A [`GameSession`] owns one secret, the guesses made against it and the
//! best score across every game played through the same session. Presentation
//! code drives it through [`GameSession::submit_guess`] and
//! [`GameSession::reset`] and renders whatever comes back.

use super::error::{GuessError, GuessErrorKind};
use super::rules;
use super::types::{GameStatus, GuessRecord, Hint, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Result of submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessOutcome {
    /// The guess was counted.
    Accepted {
        /// Status after the guess.
        status: GameStatus,
        /// Hint to show the player.
        hint: Hint,
        /// Guesses left in this game.
        attempts_remaining: u32,
        /// True when this guess won with a new best score.
        new_best: bool,
    },
    /// The game was already over, so nothing changed.
    Ignored {
        /// The terminal status the game is in.
        status: GameStatus,
    },
}

impl GuessOutcome {
    /// Returns the game status after the submission.
    pub fn status(&self) -> GameStatus {
        match self {
            Self::Accepted { status, .. } | Self::Ignored { status } => *status,
        }
    }

    /// Returns the hint, if the guess was counted.
    pub fn hint(&self) -> Option<Hint> {
        match self {
            Self::Accepted { hint, .. } => Some(*hint),
            Self::Ignored { .. } => None,
        }
    }
}

/// A single player's guessing game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: i32,
    attempts: u32,
    status: GameStatus,
    history: Vec<GuessRecord>,
    best_score: Option<u32>,
}

impl GameSession {
    /// Starts a session with a secret drawn from the thread-local RNG.
    #[instrument]
    pub fn start() -> Self {
        Self::start_with(&mut rand::thread_rng())
    }

    /// Starts a session drawing the secret from `rng`.
    #[instrument(skip(rng))]
    pub fn start_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::fresh(draw_secret(rng))
    }

    /// Starts a session with a known secret.
    ///
    /// # Errors
    ///
    /// Returns [`GuessErrorKind::SecretOutOfRange`] if `secret` is outside
    /// the playable range.
    #[instrument]
    pub fn with_secret(secret: i32) -> Result<Self, GuessError> {
        check_secret(secret)?;
        Ok(Self::fresh(secret))
    }

    fn fresh(secret: i32) -> Self {
        info!("Starting new guessing game");
        debug!(secret, "Secret drawn");
        Self {
            secret,
            attempts: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
            best_score: None,
        }
    }

    /// Begins a new game with a fresh secret, keeping the best score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.reset_with(&mut rand::thread_rng());
    }

    /// Begins a new game drawing the secret from `rng`.
    #[instrument(skip(self, rng))]
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let secret = draw_secret(rng);
        self.restart(secret);
    }

    /// Begins a new game with a known secret, keeping the best score.
    ///
    /// # Errors
    ///
    /// Returns [`GuessErrorKind::SecretOutOfRange`] if `secret` is outside
    /// the playable range. The session is left untouched in that case.
    #[instrument(skip(self))]
    pub fn reset_with_secret(&mut self, secret: i32) -> Result<(), GuessError> {
        check_secret(secret)?;
        self.restart(secret);
        Ok(())
    }

    fn restart(&mut self, secret: i32) {
        info!(
            previous_status = %self.status,
            best_score = ?self.best_score,
            "Resetting game"
        );
        debug!(secret, "Secret drawn");
        self.secret = secret;
        self.attempts = 0;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Submits a guess.
    ///
    /// Guesses made after the game is won or lost are ignored and reported
    /// as [`GuessOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns [`GuessErrorKind::OutOfRange`] if `value` is outside the
    /// playable range. Nothing changes in that case.
    #[instrument(skip(self), fields(attempts = self.attempts, status = %self.status))]
    pub fn submit_guess(&mut self, value: i32) -> Result<GuessOutcome, GuessError> {
        if !(MIN_GUESS..=MAX_GUESS).contains(&value) {
            warn!(value, "Rejected out-of-range guess");
            return Err(GuessError::new(GuessErrorKind::OutOfRange {
                value,
                min: MIN_GUESS,
                max: MAX_GUESS,
            }));
        }

        if self.status.is_terminal() {
            warn!(value, "Guess after game over ignored");
            return Ok(GuessOutcome::Ignored {
                status: self.status,
            });
        }

        self.attempts += 1;

        let mut new_best = false;
        let hint = match rules::compare(self.secret, value) {
            Hint::Winner => {
                self.status = GameStatus::Won;
                if self.best_score.is_none_or(|best| self.attempts < best) {
                    info!(best_score = self.attempts, "New best score");
                    self.best_score = Some(self.attempts);
                    new_best = true;
                }
                Hint::Winner
            }
            _ if self.attempts >= MAX_ATTEMPTS => {
                self.status = GameStatus::Lost;
                Hint::GameOver
            }
            hint => hint,
        };

        self.history.push(GuessRecord::new(
            self.attempts,
            value,
            chrono::Local::now().format("%H:%M:%S").to_string(),
            hint,
        ));

        info!(
            value,
            attempt = self.attempts,
            status = %self.status,
            hint = %hint,
            "Guess recorded"
        );

        Ok(GuessOutcome::Accepted {
            status: self.status,
            hint,
            attempts_remaining: self.attempts_remaining(),
            new_best,
        })
    }

    /// Returns the secret number.
    pub fn secret(&self) -> i32 {
        self.secret
    }

    /// Returns the number of guesses made in the current game.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the attempt budget per game.
    pub fn max_attempts(&self) -> u32 {
        MAX_ATTEMPTS
    }

    /// Returns the guesses left in the current game.
    pub fn attempts_remaining(&self) -> u32 {
        MAX_ATTEMPTS - self.attempts
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the guesses made in the current game, oldest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Returns the hint for the most recent guess.
    pub fn last_hint(&self) -> Option<Hint> {
        self.history.last().map(|record| *record.hint())
    }

    /// Returns the fewest attempts needed to win, across all games.
    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }
}

fn draw_secret<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(MIN_GUESS..=MAX_GUESS)
}

#[track_caller]
fn check_secret(secret: i32) -> Result<(), GuessError> {
    if (MIN_GUESS..=MAX_GUESS).contains(&secret) {
        Ok(())
    } else {
        Err(GuessError::new(GuessErrorKind::SecretOutOfRange {
            secret,
            min: MIN_GUESS,
            max: MAX_GUESS,
        }))
    }
}
