//! Hint rules: comparing a guess against the secret.

use super::types::{Hint, Proximity};
use tracing::instrument;

/// Distance at or under which a miss counts as very close.
const VERY_CLOSE: u32 = 5;

/// Distance at or under which a miss counts as getting warmer.
const WARMER: u32 = 10;

/// Classifies the distance between a missed guess and the secret.
///
/// The very-close check runs first, so a distance of 5 is never "warmer".
#[instrument]
pub fn proximity(distance: u32) -> Proximity {
    if distance <= VERY_CLOSE {
        Proximity::VeryClose
    } else if distance <= WARMER {
        Proximity::Warmer
    } else {
        Proximity::Cold
    }
}

/// Compares a guess against the secret.
///
/// Returns [`Hint::Winner`] on a match, otherwise the direction and
/// proximity of the miss. Never returns [`Hint::GameOver`]; running out of
/// attempts is decided by the game, not by the comparison.
#[instrument]
pub fn compare(secret: i32, guess: i32) -> Hint {
    let d = secret - guess;
    if d > 0 {
        Hint::TooLow(proximity(d.unsigned_abs()))
    } else if d < 0 {
        Hint::TooHigh(proximity(d.unsigned_abs()))
    } else {
        Hint::Winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_winner() {
        assert_eq!(compare(50, 50), Hint::Winner);
        assert_eq!(compare(1, 1), Hint::Winner);
    }

    #[test]
    fn test_far_misses_have_no_suffix() {
        assert_eq!(compare(50, 10).to_string(), "Too low!");
        assert_eq!(compare(50, 90).to_string(), "Too high!");
    }

    #[test]
    fn test_very_close_takes_precedence() {
        assert_eq!(compare(50, 45).to_string(), "Too low! (Very close!)");
        assert_eq!(compare(50, 55).to_string(), "Too high! (Very close!)");
        assert_eq!(compare(50, 49).to_string(), "Too low! (Very close!)");
    }

    #[test]
    fn test_warmer_band() {
        assert_eq!(compare(50, 44).to_string(), "Too low! (Getting warmer!)");
        assert_eq!(compare(50, 40).to_string(), "Too low! (Getting warmer!)");
        assert_eq!(compare(50, 56).to_string(), "Too high! (Getting warmer!)");
        assert_eq!(compare(50, 60).to_string(), "Too high! (Getting warmer!)");
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(proximity(5), Proximity::VeryClose);
        assert_eq!(proximity(6), Proximity::Warmer);
        assert_eq!(proximity(10), Proximity::Warmer);
        assert_eq!(proximity(11), Proximity::Cold);
    }
}
