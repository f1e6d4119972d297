//! Validation module - classify player submissions against the pattern
//!
//! A submission is compared against the pattern position the player is at.
//! There is no notion of a malformed move: an index outside the board can
//! never match a pattern cell, so it classifies as an ordinary `Incorrect`.

use crate::types::Outcome;

/// Classify one submitted cell.
///
/// `submitted` is the number of cells already accepted for this attempt;
/// the submission is compared against `pattern[submitted]`.
pub fn classify_submission(cell: u8, pattern: &[u8], submitted: usize) -> Outcome {
    if pattern.get(submitted) != Some(&cell) {
        return Outcome::Incorrect;
    }

    if submitted + 1 == pattern.len() {
        Outcome::CorrectComplete
    } else {
        Outcome::CorrectPartial
    }
}
