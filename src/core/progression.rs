//! Progression module - level-driven difficulty policy
//!
//! Pure mappings from the level counter to board size, pattern length and
//! reveal speed. The state machine recomputes all three at every level
//! transition; nothing here is cached, so a board-size boundary can never
//! be crossed with values derived from the previous level.

use crate::types::{
    BASE_REVEAL_MS, INITIAL_PATTERN_LENGTH, MIN_REVEAL_MS, REVEAL_DECAY_MS_PER_LEVEL,
};

/// Board side length for a level: 3 below level 5, 4 below level 10, 5 after.
/// Only ever applied on transition into a level, never mid-pattern.
pub fn board_size(level: u32) -> u8 {
    if level < 5 {
        3
    } else if level < 10 {
        4
    } else {
        5
    }
}

/// Pattern length for a level: `3 + floor(level / 2)`.
pub fn pattern_length(level: u32) -> usize {
    (INITIAL_PATTERN_LENGTH + level / 2) as usize
}

/// Reveal interval for a level (in milliseconds)
/// Decays 50ms per level from 1000ms, clamped at the 500ms floor.
pub fn reveal_interval_ms(level: u32) -> u32 {
    BASE_REVEAL_MS
        .saturating_sub(level.saturating_mul(REVEAL_DECAY_MS_PER_LEVEL))
        .max(MIN_REVEAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_breakpoints() {
        assert_eq!(board_size(1), 3);
        assert_eq!(board_size(4), 3);
        assert_eq!(board_size(5), 4);
        assert_eq!(board_size(9), 4);
        assert_eq!(board_size(10), 5);
        assert_eq!(board_size(100), 5);
    }

    #[test]
    fn test_board_size_non_decreasing() {
        for level in 1..200 {
            assert!(board_size(level + 1) >= board_size(level));
        }
    }

    #[test]
    fn test_pattern_length_formula() {
        assert_eq!(pattern_length(1), 3);
        assert_eq!(pattern_length(2), 4);
        assert_eq!(pattern_length(3), 4);
        assert_eq!(pattern_length(4), 5);
        assert_eq!(pattern_length(10), 8);
        assert_eq!(pattern_length(21), 13);
    }

    #[test]
    fn test_pattern_length_non_decreasing() {
        for level in 1..100 {
            assert!(pattern_length(level + 1) >= pattern_length(level));
        }
    }

    #[test]
    fn test_reveal_interval_decay_and_floor() {
        assert_eq!(reveal_interval_ms(0), 1000);
        assert_eq!(reveal_interval_ms(1), 950);
        assert_eq!(reveal_interval_ms(9), 550);
        assert_eq!(reveal_interval_ms(10), 500);
        assert_eq!(reveal_interval_ms(11), 500);
        assert_eq!(reveal_interval_ms(1000), 500);
    }

    #[test]
    fn test_reveal_interval_non_increasing() {
        for level in 0..100 {
            assert!(reveal_interval_ms(level + 1) <= reveal_interval_ms(level));
        }
    }
}
