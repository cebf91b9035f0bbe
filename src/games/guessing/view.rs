//! Serializable read model of a game session.

use super::game::GameSession;
use super::types::{GameStatus, GuessRecord, Hint};
use serde::Serialize;

/// Snapshot of a [`GameSession`] for display.
///
/// The secret is only revealed once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Game status.
    pub status: GameStatus,
    /// Guesses made in the current game.
    pub attempts: u32,
    /// Attempt budget per game.
    pub max_attempts: u32,
    /// Guesses left in the current game.
    pub attempts_remaining: u32,
    /// Fewest attempts needed to win so far.
    pub best_score: Option<u32>,
    /// Hint for the most recent guess.
    pub last_hint: Option<Hint>,
    /// The secret, once the game is won or lost.
    pub secret: Option<i32>,
    /// Guesses made in the current game, oldest first.
    pub history: Vec<GuessRecord>,
}

impl From<&GameSession> for GameView {
    fn from(session: &GameSession) -> Self {
        Self {
            status: session.status(),
            attempts: session.attempts(),
            max_attempts: session.max_attempts(),
            attempts_remaining: session.attempts_remaining(),
            best_score: session.best_score(),
            last_hint: session.last_hint(),
            secret: session.status().is_terminal().then(|| session.secret()),
            history: session.history().to_vec(),
        }
    }
}
