//! Core domain types for the number guessing game.

use derive_getters::Getters;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize, Serializer};

/// Smallest number the secret (and any guess) can take.
pub const MIN_GUESS: i32 = 1;

/// Largest number the secret (and any guess) can take.
pub const MAX_GUESS: i32 = 100;

/// Number of guesses allowed per game.
pub const MAX_ATTEMPTS: u32 = 7;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Guesses are still accepted.
    #[display("in progress")]
    InProgress,
    /// The secret was found.
    #[display("won")]
    Won,
    /// The attempt budget ran out.
    #[display("lost")]
    Lost,
}

impl GameStatus {
    /// Returns true once the game no longer accepts guesses.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// How far a missed guess landed from the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proximity {
    /// Within 5 of the secret.
    VeryClose,
    /// Within 10 of the secret.
    Warmer,
    /// More than 10 away.
    Cold,
}

impl Proximity {
    /// Text appended to the direction hint.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::VeryClose => " (Very close!)",
            Self::Warmer => " (Getting warmer!)",
            Self::Cold => "",
        }
    }
}

/// Feedback shown to the player after a guess.
///
/// Renders as the exact hint text, both through `Display` and when
/// serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// Guess was below the secret.
    TooLow(Proximity),
    /// Guess was above the secret.
    TooHigh(Proximity),
    /// Guess matched the secret.
    Winner,
    /// Last attempt missed.
    GameOver,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hint::TooLow(p) => write!(f, "Too low!{}", p.suffix()),
            Hint::TooHigh(p) => write!(f, "Too high!{}", p.suffix()),
            Hint::Winner => write!(f, "Winner!"),
            Hint::GameOver => write!(f, "Game Over"),
        }
    }
}

impl Serialize for Hint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One accepted guess, as shown in the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct GuessRecord {
    /// 1-based attempt number within the game.
    attempt_number: u32,
    /// The guessed value.
    guess: i32,
    /// Local wall-clock time of the guess (`HH:MM:SS`).
    timestamp: String,
    /// Hint produced for this guess.
    hint: Hint,
}
