//! Tests for per-session game management.

use strictly_guessing::{GameSession, GameStatus, Hint, SessionErrorKind, SessionManager};

fn manager_with_secret(id: &str, secret: i32) -> SessionManager {
    let sessions = SessionManager::new();
    sessions.insert(id, GameSession::with_secret(secret).expect("Valid secret"));
    sessions
}

#[test]
fn test_start_is_idempotent() {
    let sessions = SessionManager::new();
    let first = sessions.start("alice");
    assert_eq!(first.status, GameStatus::InProgress);
    assert_eq!(first.attempts, 0);

    sessions.submit_guess("alice", 1).expect("Guess failed");
    let again = sessions.start("alice");
    assert_eq!(again.attempts, 1, "start must not overwrite an existing game");
}

#[test]
fn test_sessions_are_isolated() {
    let sessions = manager_with_secret("alice", 50);
    sessions.insert("bob", GameSession::with_secret(50).expect("Valid secret"));

    sessions.submit_guess("alice", 50).expect("Guess failed");

    let alice = sessions.view("alice").expect("View failed");
    let bob = sessions.view("bob").expect("View failed");
    assert_eq!(alice.status, GameStatus::Won);
    assert_eq!(alice.best_score, Some(1));
    assert_eq!(bob.status, GameStatus::InProgress);
    assert_eq!(bob.best_score, None);
    assert_eq!(sessions.list_sessions(), vec!["alice", "bob"]);
}

#[test]
fn test_guess_updates_view() {
    let sessions = manager_with_secret("s1", 50);
    let (outcome, view) = sessions.submit_guess("s1", 44).expect("Guess failed");
    assert_eq!(outcome.status(), GameStatus::InProgress);
    assert_eq!(view.attempts, 1);
    assert_eq!(view.attempts_remaining, 6);
    assert_eq!(view.history.len(), 1);
    assert_eq!(
        view.last_hint.map(|h| h.to_string()).as_deref(),
        Some("Too low! (Getting warmer!)")
    );
    assert_eq!(view.secret, None, "Secret stays hidden mid-game");
}

#[test]
fn test_secret_revealed_when_over() {
    let sessions = manager_with_secret("s1", 50);
    for _ in 0..7 {
        sessions.submit_guess("s1", 100).expect("Guess failed");
    }
    let view = sessions.view("s1").expect("View failed");
    assert_eq!(view.status, GameStatus::Lost);
    assert_eq!(view.last_hint, Some(Hint::GameOver));
    assert_eq!(view.secret, Some(50));
}

#[test]
fn test_unknown_session() {
    let sessions = SessionManager::new();
    let err = sessions.submit_guess("ghost", 10).expect_err("No session");
    assert!(matches!(err.kind, SessionErrorKind::NotFound(ref id) if id == "ghost"));
    assert!(sessions.view("ghost").is_err());
    assert!(sessions.reset("ghost").is_err());
    assert!(sessions.end("ghost").is_err());
}

#[test]
fn test_out_of_range_guess_is_error() {
    let sessions = manager_with_secret("s1", 50);
    let err = sessions.submit_guess("s1", 101).expect_err("Out of range");
    assert!(matches!(err.kind, SessionErrorKind::Guess(_)));
    assert_eq!(sessions.view("s1").expect("View failed").attempts, 0);
}

#[test]
fn test_reset_only_after_game_over() {
    let sessions = manager_with_secret("s1", 50);
    sessions.submit_guess("s1", 10).expect("Guess failed");

    let err = sessions.reset("s1").expect_err("Game in progress");
    assert!(matches!(err.kind, SessionErrorKind::ResetWhileInProgress(_)));
    assert_eq!(sessions.view("s1").expect("View failed").attempts, 1);

    sessions.submit_guess("s1", 50).expect("Guess failed");
    let view = sessions.reset("s1").expect("Reset failed");
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(view.attempts, 0);
    assert!(view.history.is_empty());
    assert_eq!(view.best_score, Some(2));
}

#[test]
fn test_end_session() {
    let sessions = manager_with_secret("s1", 50);
    sessions.end("s1").expect("End failed");
    assert!(sessions.list_sessions().is_empty());

    // A fresh start after ending has no memory of the old best score.
    let view = sessions.start("s1");
    assert_eq!(view.best_score, None);
}

#[test]
fn test_clones_share_state() {
    let sessions = SessionManager::new();
    let handle = sessions.clone();
    sessions.start("shared");
    assert_eq!(handle.list_sessions(), vec!["shared"]);
}
