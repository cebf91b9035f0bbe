//! Guess validation errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong with a guess or a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GuessErrorKind {
    /// A guess fell outside the playable range.
    #[display("guess {value} is out of range (must be {min}-{max})")]
    OutOfRange {
        /// The rejected guess.
        value: i32,
        /// Lower bound, inclusive.
        min: i32,
        /// Upper bound, inclusive.
        max: i32,
    },
    /// A caller-supplied secret fell outside the playable range.
    #[display("secret {secret} is out of range (must be {min}-{max})")]
    SecretOutOfRange {
        /// The rejected secret.
        secret: i32,
        /// Lower bound, inclusive.
        min: i32,
        /// Upper bound, inclusive.
        max: i32,
    },
}

/// Guess error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Guess error: {} at {}:{}", kind, file, line)]
pub struct GuessError {
    /// What went wrong.
    pub kind: GuessErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GuessError {
    /// Creates a new guess error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GuessErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
