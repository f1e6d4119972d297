//! Game state module - the state machine that owns a whole game
//!
//! Ties together pattern generation, timed playback, input validation and
//! the progression policy. All mutable state lives here; the public surface
//! is `start`, `tick`, `submit_cell` and snapshots, so the phase/invariant
//! rules cannot be violated from outside.
//!
//! The engine is driven like the teacher of every tick-based game loop:
//! call [`GameState::tick`] with the elapsed milliseconds (nominally every
//! [`TICK_MS`](crate::types::TICK_MS)) and re-read the snapshot whenever a
//! call reports a change. Timers live inside the state, so replacing a game
//! via `start` cancels every pending delay in the same move.

use crate::core::playback::{Playback, PlaybackTick};
use crate::core::rng::{generate_pattern, SimpleRng};
use crate::core::snapshot::{GameSnapshot, TimersSnapshot};
use crate::core::{progression, validate};
use crate::store::{KvStore, HIGH_SCORE_KEY};
use crate::types::{Outcome, Phase, POINTS_PER_CELL, SETTLE_DELAY_MS};

/// Complete game state
pub struct GameState {
    phase: Phase,
    level: u32,
    board_size: u8,
    score: u32,
    high_score: u32,
    pattern: Vec<u8>,
    player_input: Vec<u8>,
    playback: Option<Playback>,
    settle_timer_ms: u32,
    /// Monotonic game id (increments on every `start`).
    episode_id: u32,
    rng: SimpleRng,
    store: Box<dyn KvStore>,
}

impl GameState {
    /// Create a new engine with the given RNG seed and high-score store.
    ///
    /// The stored high score is loaded eagerly; a missing or unreadable
    /// value falls back to 0 (persistence problems never surface as errors).
    pub fn new(seed: u32, store: Box<dyn KvStore>) -> Self {
        let high_score = load_high_score(store.as_ref());

        Self {
            phase: Phase::Idle,
            level: 1,
            board_size: progression::board_size(1),
            score: 0,
            high_score,
            pattern: Vec::new(),
            player_input: Vec::new(),
            playback: None,
            settle_timer_ms: 0,
            episode_id: 0,
            rng: SimpleRng::new(seed),
            store,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    pub fn player_input(&self) -> &[u8] {
        &self.player_input
    }

    pub fn is_revealing(&self) -> bool {
        self.phase == Phase::Revealing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Begin a new game from any phase.
    ///
    /// Replaces any in-flight playback or settle timer, so a reveal step
    /// scheduled by a previous game can never touch the new one.
    pub fn start(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.score = 0;
        self.level = 1;
        self.begin_level();
    }

    /// Set up the current level from scratch: recompute the progression
    /// values from the level as it stands *now*, generate a fresh pattern
    /// on the new board, and enter `Revealing`.
    fn begin_level(&mut self) {
        self.board_size = progression::board_size(self.level);
        let length = progression::pattern_length(self.level);
        let interval_ms = progression::reveal_interval_ms(self.level);

        self.pattern = generate_pattern(length, self.board_size, &mut self.rng);
        tracing::debug!(
            level = self.level,
            board_size = self.board_size,
            pattern = ?self.pattern,
            "generated pattern"
        );

        self.player_input.clear();
        self.settle_timer_ms = 0;
        self.playback = Some(Playback::new(self.pattern.clone(), interval_ms));
        self.phase = Phase::Revealing;
    }

    /// Advance engine timers. Returns true if observable state changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.phase {
            Phase::Revealing => {
                let Some(playback) = self.playback.as_mut() else {
                    return false;
                };
                match playback.tick(elapsed_ms) {
                    PlaybackTick::Pending => false,
                    PlaybackTick::Revealed { .. } => true,
                    PlaybackTick::Finished => {
                        self.playback = None;
                        self.player_input.clear();
                        self.phase = Phase::AwaitingInput;
                        true
                    }
                }
            }
            Phase::LevelCleared => {
                self.settle_timer_ms = self.settle_timer_ms.saturating_sub(elapsed_ms);
                if self.settle_timer_ms == 0 {
                    // Level was already incremented when the pattern was
                    // completed; everything derives from the new value here.
                    self.begin_level();
                    true
                } else {
                    false
                }
            }
            Phase::Idle | Phase::AwaitingInput | Phase::GameOver => false,
        }
    }

    /// Submit one cell of the player's reproduction attempt.
    ///
    /// Returns `None` outside `AwaitingInput`: presses during playback, the
    /// settle pause, game over or before the first start are ignored, not
    /// errors. Indices outside the board classify as ordinary mismatches.
    pub fn submit_cell(&mut self, cell: u8) -> Option<Outcome> {
        if self.phase != Phase::AwaitingInput {
            return None;
        }

        let outcome = validate::classify_submission(cell, &self.pattern, self.player_input.len());
        match outcome {
            Outcome::CorrectPartial => {
                self.player_input.push(cell);
            }
            Outcome::CorrectComplete => {
                self.player_input.push(cell);
                self.score += self.pattern.len() as u32 * POINTS_PER_CELL;
                self.level += 1;
                self.player_input.clear();
                self.settle_timer_ms = SETTLE_DELAY_MS;
                self.phase = Phase::LevelCleared;
            }
            Outcome::Incorrect => {
                // Keep the wrong cell visible to the frontend
                self.player_input.push(cell);
                if self.score > self.high_score {
                    self.high_score = self.score;
                    self.persist_high_score();
                }
                self.playback = None;
                self.phase = Phase::GameOver;
            }
        }
        Some(outcome)
    }

    /// Write the high score through the store. A failure is logged and
    /// swallowed: the in-memory transition is authoritative.
    fn persist_high_score(&mut self) {
        let value = self.high_score.to_string();
        if let Err(err) = self.store.set(HIGH_SCORE_KEY, &value) {
            tracing::warn!(error = %err, high_score = self.high_score, "failed to persist high score");
        }
    }

    /// Fill an existing snapshot buffer (teacher-style reuse for hosts that
    /// poll every tick).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.pattern.clone_from(&self.pattern);
        out.player_input.clone_from(&self.player_input);
        out.phase = self.phase;
        out.is_revealing = self.is_revealing();
        out.game_over = self.is_game_over();
        out.reveal_position = self.playback.as_ref().and_then(|p| p.position());
        out.highlighted_cell = self.playback.as_ref().and_then(|p| p.current_cell());
        out.activation_counts = self
            .playback
            .as_ref()
            .map(|p| p.counts().as_array())
            .unwrap_or_default();
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.board_size = self.board_size;
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
        out.timers = TimersSnapshot {
            reveal_ms: self.playback.as_ref().map(|p| p.timer_ms()).unwrap_or(0),
            settle_ms: self.settle_timer_ms,
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, Box::<crate::store::MemoryStore>::default())
    }
}

fn load_high_score(store: &dyn KvStore) -> u32 {
    match store.get(HIGH_SCORE_KEY) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "stored high score is not a number, using 0");
            0
        }),
        Ok(None) => 0,
        Err(err) => {
            tracing::warn!(error = %err, "failed to load high score, using 0");
            0
        }
    }
}
