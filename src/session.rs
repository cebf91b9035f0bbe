//! Game session management for HTTP play.
//!
//! Each user session owns exactly one [`GameSession`]; the manager keys them
//! by session id and serializes access behind a mutex.

use crate::games::guessing::{GameSession, GameView, GuessError, GuessOutcome};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a user session.
pub type SessionId = String;

/// What went wrong with a session operation.
#[derive(Debug, Clone, Display)]
pub enum SessionErrorKind {
    /// No session with this id.
    #[display("session '{_0}' not found")]
    NotFound(SessionId),
    /// A new game was requested before the current one finished.
    #[display("session '{_0}' still has a game in progress")]
    ResetWhileInProgress(SessionId),
    /// The guess itself was rejected.
    #[display("{}", _0.kind)]
    Guess(GuessError),
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// What went wrong.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GuessError> for SessionError {
    #[track_caller]
    fn from(err: GuessError) -> Self {
        Self::new(SessionErrorKind::Guess(err))
    }
}

/// Manages one game per user session.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, GameSession>> {
        // Transitions never leave a GameSession half-updated; poisoning is ignored.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a game for the session, or returns the existing one untouched.
    #[instrument(skip(self, id), fields(session_id = %id.as_ref()))]
    pub fn start(&self, id: impl AsRef<str>) -> GameView {
        let id = id.as_ref();
        let mut sessions = self.lock();
        let session = sessions.entry(id.to_string()).or_insert_with(|| {
            info!(session_id = id, "Created new session");
            GameSession::start()
        });
        GameView::from(&*session)
    }

    /// Installs a prepared game for the session, replacing any existing one.
    #[instrument(skip(self, id, session), fields(session_id = %id.as_ref()))]
    pub fn insert(&self, id: impl AsRef<str>, session: GameSession) -> GameView {
        let id = id.as_ref();
        let view = GameView::from(&session);
        if self.lock().insert(id.to_string(), session).is_some() {
            warn!(session_id = id, "Replaced existing session");
        } else {
            info!(session_id = id, "Inserted session");
        }
        view
    }

    /// Submits a guess to the session's game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NotFound`] for an unknown session and
    /// [`SessionErrorKind::Guess`] for an out-of-range guess.
    #[instrument(skip(self))]
    pub fn submit_guess(
        &self,
        id: &str,
        value: i32,
    ) -> Result<(GuessOutcome, GameView), SessionError> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(id).ok_or_else(|| {
            warn!(session_id = id, "Guess for unknown session");
            SessionError::new(SessionErrorKind::NotFound(id.to_string()))
        })?;

        let outcome = session.submit_guess(value)?;
        Ok((outcome, GameView::from(&*session)))
    }

    /// Starts a new game in the session once the current one is over.
    ///
    /// The best score carries over.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NotFound`] for an unknown session and
    /// [`SessionErrorKind::ResetWhileInProgress`] if the game is still
    /// accepting guesses.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str) -> Result<GameView, SessionError> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::new(SessionErrorKind::NotFound(id.to_string())))?;

        if !session.status().is_terminal() {
            warn!(session_id = id, "Reset requested mid-game");
            return Err(SessionError::new(SessionErrorKind::ResetWhileInProgress(
                id.to_string(),
            )));
        }

        session.reset();
        info!(session_id = id, "Session reset");
        Ok(GameView::from(&*session))
    }

    /// Gets a snapshot of the session's game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NotFound`] for an unknown session.
    #[instrument(skip(self))]
    pub fn view(&self, id: &str) -> Result<GameView, SessionError> {
        let sessions = self.lock();
        match sessions.get(id) {
            Some(session) => Ok(GameView::from(session)),
            None => {
                debug!(session_id = id, "Session not found");
                Err(SessionError::new(SessionErrorKind::NotFound(id.to_string())))
            }
        }
    }

    /// Ends the session, discarding its game and best score.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NotFound`] for an unknown session.
    #[instrument(skip(self))]
    pub fn end(&self, id: &str) -> Result<(), SessionError> {
        match self.lock().remove(id) {
            Some(_) => {
                info!(session_id = id, "Session ended");
                Ok(())
            }
            None => Err(SessionError::new(SessionErrorKind::NotFound(id.to_string()))),
        }
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.lock().keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}
