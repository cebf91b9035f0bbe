mod error;
mod game;
mod rules;
mod types;
mod view;

pub use error::{GuessError, GuessErrorKind};
pub use game::{GameSession, GuessOutcome};
pub use rules::{compare, proximity};
pub use types::{GameStatus, GuessRecord, Hint, MAX_ATTEMPTS, MAX_GUESS, MIN_GUESS, Proximity};
pub use view::GameView;
