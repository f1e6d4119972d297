//! Core module - pure game logic with no I/O
//!
//! Everything here is deterministic given a seed and the host's tick
//! cadence, and has zero dependencies on rendering, audio or storage.
//!
//! - [`rng`]: seeded LCG and uniform with-replacement pattern generation
//! - [`progression`]: level → board size / pattern length / reveal speed
//! - [`playback`]: timed sequential reveal with activation escalation
//! - [`validate`]: per-cell submission classification
//! - [`game_state`]: the phase machine that owns one game
//! - [`snapshot`]: serializable observation of the full state

pub mod game_state;
pub mod playback;
pub mod progression;
pub mod rng;
pub mod snapshot;
pub mod validate;

// Re-export commonly used types
pub use game_state::GameState;
pub use playback::{ActivationCounts, Playback, PlaybackTick};
pub use rng::{generate_pattern, RandomSource, SimpleRng};
pub use snapshot::{GameSnapshot, TimersSnapshot};
pub use validate::classify_submission;
