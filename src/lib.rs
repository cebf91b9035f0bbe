//! Strictly Guessing library - a number guessing game
//!
//! The player has seven attempts to find a secret number between 1 and 100,
//! with a hint after every miss.
//!
//! # Architecture
//!
//! - **Games**: the [`GameSession`] state machine and its hint rules
//! - **Session**: one game per user session for the HTTP server
//! - **Server**: HTTP/JSON API over the session manager
//! - **TUI**: interactive terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_guessing::{GameSession, GameStatus};
//!
//! # fn example() -> Result<(), strictly_guessing::GuessError> {
//! let mut game = GameSession::with_secret(50)?;
//! let outcome = game.submit_guess(44)?;
//! assert_eq!(outcome.hint().map(|h| h.to_string()).as_deref(), Some("Too low! (Getting warmer!)"));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;
mod server;
mod session;
mod tui;

// Crate-level exports - Game types
pub use games::guessing::{
    GameSession, GameStatus, GameView, GuessError, GuessErrorKind, GuessOutcome, GuessRecord,
    Hint, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, Proximity, compare, proximity,
};

// Crate-level exports - Session management
pub use session::{SessionError, SessionErrorKind, SessionId, SessionManager};

// Crate-level exports - HTTP server
pub use server::{GuessRequest, GuessResponse, router};

// Crate-level exports - Terminal UI
pub use tui::{App, GuessInput, run_tui};
