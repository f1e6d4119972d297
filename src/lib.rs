//! Simon-says memory game engine - pure, deterministic, and testable
//!
//! The engine generates a sequence of board cells, plays it back one cell at
//! a time with timed highlights, validates the player's reproduction, and
//! drives score/level/board-size progression. It has **zero dependencies**
//! on rendering, audio or input plumbing: those layers drive it through
//! `start`/`tick`/`submit_cell` and observe it through snapshots.
//!
//! # Module Structure
//!
//! - [`core`]: game rules, the phase machine, playback timing, progression
//! - [`store`]: key-value persistence seam (high score, settings)
//! - [`types`]: shared constants and enums
//!
//! # Game Rules
//!
//! - A level's pattern is drawn uniformly **with replacement**, so cells may
//!   repeat back to back; consecutive repeats escalate highlight intensity.
//! - Pattern length is `3 + level/2`; the board grows 3→4→5 at levels 5 and
//!   10; the reveal interval decays 50ms per level down to a 500ms floor.
//! - Clearing a level scores `pattern length × 10`. A mismatch ends the game
//!   and persists the high score if it was beaten.
//!
//! # Example
//!
//! ```
//! use memory_tiles::core::GameState;
//! use memory_tiles::store::MemoryStore;
//!
//! let mut game = GameState::new(12345, Box::<MemoryStore>::default());
//! game.start();
//!
//! let snapshot = game.snapshot();
//! assert!(snapshot.is_revealing);
//! assert_eq!(snapshot.pattern.len(), 3); // level 1
//! ```
//!
//! # Timing
//!
//! The whole engine is single-threaded and cooperative: the host calls
//! [`GameState::tick`](core::GameState::tick) with the elapsed milliseconds
//! (nominally every [`TICK_MS`](types::TICK_MS)) and re-reads the snapshot
//! when a call reports a change. Reveal and settle delays are plain counters
//! inside the state, so no two scheduled steps can ever run concurrently and
//! restarting the game cancels everything pending by construction.

pub mod core;
pub mod store;
pub mod types;

pub use crate::core::{GameSnapshot, GameState};
pub use crate::store::{JsonFileStore, KvStore, MemoryStore};
pub use crate::types::{Outcome, Phase};
