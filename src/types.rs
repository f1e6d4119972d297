//! Core types shared across the engine
//! This module contains pure data types and tuning constants with no external dependencies

use serde::Serialize;

/// Board size bounds (boards are square, `size x size` cells)
pub const MIN_BOARD_SIZE: u8 = 3;
pub const MAX_BOARD_SIZE: u8 = 5;
pub const MAX_BOARD_CELLS: usize = (MAX_BOARD_SIZE as usize) * (MAX_BOARD_SIZE as usize);

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_REVEAL_MS: u32 = 1000;
pub const MIN_REVEAL_MS: u32 = 500;
pub const REVEAL_DECAY_MS_PER_LEVEL: u32 = 50;
pub const SETTLE_DELAY_MS: u32 = 1000;

/// Progression constants
pub const INITIAL_PATTERN_LENGTH: u32 = 3;
pub const POINTS_PER_CELL: u32 = 10;

/// Game phase. All mutation is gated on this: input is only accepted in
/// `AwaitingInput`, timers only advance in `Revealing` and `LevelCleared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No pattern generated yet (initial state, before the first `start`).
    #[default]
    Idle,
    /// The pattern is being played back; input is ignored.
    Revealing,
    /// Playback finished; waiting for the player to reproduce the pattern.
    AwaitingInput,
    /// Pattern reproduced; brief settle pause before the next level reveals.
    LevelCleared,
    /// The player mismatched; only `start` leaves this state.
    GameOver,
}

/// Classification of a single submitted cell against the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Matched the expected cell; more cells remain.
    CorrectPartial,
    /// Matched the expected cell and completed the pattern.
    CorrectComplete,
    /// Did not match; the attempt is over.
    Incorrect,
}
