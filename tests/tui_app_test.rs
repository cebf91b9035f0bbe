//! Tests for terminal UI key handling.

use crossterm::event::KeyCode;
use strictly_guessing::{App, GameSession, GameStatus, GuessInput};

fn app(secret: i32) -> App {
    App::with_session(GameSession::with_secret(secret).expect("Valid secret"))
}

fn type_guess(app: &mut App, value: &str) {
    while !app.input().text().is_empty() {
        app.handle_key(KeyCode::Backspace);
    }
    for c in value.chars() {
        app.handle_key(KeyCode::Char(c));
    }
    app.handle_key(KeyCode::Enter);
}

#[test]
fn test_input_typing_and_clamping() {
    let mut input = GuessInput::new();
    assert_eq!(input.value(), None);

    input.apply(KeyCode::Char('0'));
    assert_eq!(input.text(), "", "Leading zero refused");

    input.apply(KeyCode::Char('4'));
    input.apply(KeyCode::Char('2'));
    assert_eq!(input.value(), Some(42));

    input.apply(KeyCode::Char('7'));
    assert_eq!(input.value(), Some(100), "Clamped to the upper bound");

    input.apply(KeyCode::Backspace);
    assert_eq!(input.value(), Some(10));

    assert!(!input.apply(KeyCode::Char('x')));
}

#[test]
fn test_input_stepping() {
    let mut input = GuessInput::new();
    input.apply(KeyCode::Up);
    assert_eq!(input.value(), Some(1));
    input.apply(KeyCode::Down);
    assert_eq!(input.value(), Some(1), "Cannot step below 1");
    input.apply(KeyCode::Up);
    assert_eq!(input.value(), Some(2));

    let mut input = GuessInput::new();
    for c in "100".chars() {
        input.apply(KeyCode::Char(c));
    }
    input.apply(KeyCode::Up);
    assert_eq!(input.value(), Some(100), "Cannot step above 100");
}

#[test]
fn test_submit_shows_hint() {
    let mut app = app(50);
    type_guess(&mut app, "44");
    assert_eq!(app.message(), "Too low! (Getting warmer!)");
    assert_eq!(app.session().attempts(), 1);
}

#[test]
fn test_empty_submit_is_not_a_guess() {
    let mut app = app(50);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.session().attempts(), 0);
    assert!(app.message().contains("between 1 and 100"));
}

#[test]
fn test_win_message_and_restart() {
    let mut app = app(50);
    type_guess(&mut app, "50");
    assert_eq!(app.session().status(), GameStatus::Won);
    assert!(app.message().contains("found the number in 1 attempts"));
    assert!(app.message().contains("New best score"));

    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.session().status(), GameStatus::InProgress);
    assert_eq!(app.session().attempts(), 0);
    assert_eq!(app.session().best_score(), Some(1));
}

#[test]
fn test_loss_reveals_number() {
    let mut app = app(50);
    for _ in 0..7 {
        type_guess(&mut app, "99");
    }
    assert_eq!(app.session().status(), GameStatus::Lost);
    assert!(app.message().contains("The number was 50"));

    type_guess(&mut app, "50");
    assert_eq!(app.session().status(), GameStatus::Lost);
    assert!(app.message().contains("This game is over"));
}

#[test]
fn test_restart_ignored_mid_game() {
    let mut app = app(50);
    type_guess(&mut app, "10");
    app.handle_key(KeyCode::Char('r'));
    assert_eq!(app.session().attempts(), 1);
    assert_eq!(app.session().secret(), 50);
}

#[test]
fn test_quit() {
    let mut app = app(50);
    assert!(!app.should_quit());
    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}
