//! HTTP/JSON game server.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/sessions` | List active session ids |
//! | POST | `/sessions/{id}/start` | Start the session's game (idempotent) |
//! | GET | `/sessions/{id}` | Current game state |
//! | POST | `/sessions/{id}/guess` | Submit `{"value": n}` |
//! | POST | `/sessions/{id}/reset` | New game once the current one is over |
//! | DELETE | `/sessions/{id}` | End the session |

use crate::games::guessing::{GameView, GuessOutcome};
use crate::session::{SessionError, SessionErrorKind, SessionId, SessionManager};
use axum::{
    Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Request for submitting a guess.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuessRequest {
    /// The guessed number (1-100).
    pub value: i32,
}

/// Response to a guess: what happened plus the updated game.
#[derive(Debug, Clone, Serialize)]
pub struct GuessResponse {
    /// Outcome of this submission.
    pub outcome: GuessOutcome,
    /// Game state after the submission.
    pub game: GameView,
}

/// Builds the router over a shared session manager.
#[instrument(skip(sessions))]
pub fn router(sessions: SessionManager) -> Router {
    info!("Building HTTP router");
    Router::new()
        .route("/health", get(health))
        .route("/sessions", get(list_sessions))
        .route("/sessions/{id}", get(get_session).delete(end_session))
        .route("/sessions/{id}/start", post(start_session))
        .route("/sessions/{id}/guess", post(submit_guess))
        .route("/sessions/{id}/reset", post(reset_session))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(sessions)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[instrument(skip(sessions))]
async fn list_sessions(State(sessions): State<SessionManager>) -> Json<Vec<SessionId>> {
    Json(sessions.list_sessions())
}

#[instrument(skip(sessions))]
async fn start_session(
    State(sessions): State<SessionManager>,
    Path(id): Path<SessionId>,
) -> Json<GameView> {
    Json(sessions.start(&id))
}

#[instrument(skip(sessions))]
async fn get_session(
    State(sessions): State<SessionManager>,
    Path(id): Path<SessionId>,
) -> Result<Json<GameView>, SessionError> {
    sessions.view(&id).map(Json)
}

#[instrument(skip(sessions, req), fields(value = req.value))]
async fn submit_guess(
    State(sessions): State<SessionManager>,
    Path(id): Path<SessionId>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<GuessResponse>, SessionError> {
    let (outcome, game) = sessions.submit_guess(&id, req.value)?;
    Ok(Json(GuessResponse { outcome, game }))
}

#[instrument(skip(sessions))]
async fn reset_session(
    State(sessions): State<SessionManager>,
    Path(id): Path<SessionId>,
) -> Result<Json<GameView>, SessionError> {
    sessions.reset(&id).map(Json)
}

#[instrument(skip(sessions))]
async fn end_session(
    State(sessions): State<SessionManager>,
    Path(id): Path<SessionId>,
) -> Result<StatusCode, SessionError> {
    sessions.end(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match &self.kind {
            SessionErrorKind::NotFound(_) => StatusCode::NOT_FOUND,
            SessionErrorKind::ResetWhileInProgress(_) => StatusCode::CONFLICT,
            SessionErrorKind::Guess(_) => StatusCode::BAD_REQUEST,
        };
        warn!(status = %status, error = %self.kind, "Request failed");
        (
            status,
            Json(serde_json::json!({ "error": self.kind.to_string() })),
        )
            .into_response()
    }
}
