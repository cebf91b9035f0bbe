//! Numeric guess field for keyboard entry.

use crate::games::guessing::{MAX_GUESS, MIN_GUESS};
use crossterm::event::KeyCode;

/// Integer input constrained to the playable range, step 1.
///
/// Typing past the upper bound clamps to it; a leading zero is refused, so
/// a non-empty field always holds a playable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessInput {
    buffer: String,
}

impl GuessInput {
    /// Creates an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the field text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Returns the entered value, if any.
    pub fn value(&self) -> Option<i32> {
        self.buffer.parse().ok()
    }

    /// Applies an editing key. Returns false for keys the field ignores.
    pub fn apply(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.buffer.is_empty() && c == '0' {
                    return true;
                }
                self.buffer.push(c);
                if self.value().is_none_or(|v| v > MAX_GUESS) {
                    self.set(MAX_GUESS);
                }
                true
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                true
            }
            KeyCode::Up => {
                let next = self.value().map_or(MIN_GUESS, |v| (v + 1).min(MAX_GUESS));
                self.set(next);
                true
            }
            KeyCode::Down => {
                let next = self.value().map_or(MIN_GUESS, |v| (v - 1).max(MIN_GUESS));
                self.set(next);
                true
            }
            _ => false,
        }
    }

    fn set(&mut self, value: i32) {
        self.buffer = value.to_string();
    }
}
