//! Observation snapshot of the full game state.
//!
//! The engine is single-threaded; observers pull a [`GameSnapshot`] after
//! every state change (any `tick` or `submit_cell` that returned a change).
//! Snapshots are `Serialize` so an adapter layer can stream them as JSON.

use serde::Serialize;

use crate::types::{Phase, MAX_BOARD_CELLS};

/// Engine timers, for frontends that animate the remaining delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimersSnapshot {
    /// Milliseconds accumulated toward the next reveal (0 outside playback).
    pub reveal_ms: u32,
    /// Milliseconds left of the settle pause (0 outside `LevelCleared`).
    pub settle_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    /// The target sequence for the current level.
    pub pattern: Vec<u8>,
    /// Cells the player has submitted for the current attempt.
    pub player_input: Vec<u8>,
    pub phase: Phase,
    pub is_revealing: bool,
    pub game_over: bool,
    /// Pattern position currently highlighted during playback.
    pub reveal_position: Option<usize>,
    /// Board cell currently highlighted during playback.
    pub highlighted_cell: Option<u8>,
    /// Consecutive-activation count per cell index.
    pub activation_counts: [u8; MAX_BOARD_CELLS],
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub board_size: u8,
    /// Monotonic game generation; bumped by every `start`. A snapshot whose
    /// episode differs from the engine's belongs to a replaced game.
    pub episode_id: u32,
    /// Current RNG state.
    pub seed: u32,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.pattern.clear();
        self.player_input.clear();
        self.phase = Phase::Idle;
        self.is_revealing = false;
        self.game_over = false;
        self.reveal_position = None;
        self.highlighted_cell = None;
        self.activation_counts = [0; MAX_BOARD_CELLS];
        self.score = 0;
        self.high_score = 0;
        self.level = 0;
        self.board_size = 0;
        self.episode_id = 0;
        self.seed = 0;
        self.timers = TimersSnapshot::default();
    }

    /// Whether the board should accept tile presses.
    pub fn accepting_input(&self) -> bool {
        self.phase == Phase::AwaitingInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_everything() {
        let mut snapshot = GameSnapshot {
            pattern: vec![1, 2],
            player_input: vec![1],
            phase: Phase::AwaitingInput,
            score: 30,
            level: 2,
            board_size: 3,
            ..GameSnapshot::default()
        };

        snapshot.clear();
        assert_eq!(snapshot, GameSnapshot::default());
    }

    #[test]
    fn test_accepting_input_only_while_awaiting() {
        let mut snapshot = GameSnapshot::default();
        assert!(!snapshot.accepting_input());

        snapshot.phase = Phase::AwaitingInput;
        assert!(snapshot.accepting_input());

        snapshot.phase = Phase::Revealing;
        assert!(!snapshot.accepting_input());
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"idle\""));
    }
}
