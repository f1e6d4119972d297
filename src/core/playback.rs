//! Playback module - timed, sequential reveal of a pattern
//!
//! A [`Playback`] owns one pattern run. The host advances it with
//! [`Playback::tick`]; elapsed time accumulates and a step fires when it
//! reaches the reveal interval. At most one step fires per call, so reveal
//! events are strictly sequential in pattern order no matter how coarse the
//! host's tick cadence is.
//!
//! Cancellation is dropping (or replacing) the value: all timing state lives
//! inside it, so a cancelled playback can never fire a stale step.

use crate::types::MAX_BOARD_CELLS;

/// Per-cell consecutive-activation counts, used by the presentation layer to
/// escalate highlight intensity when the same cell repeats back to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivationCounts {
    counts: [u8; MAX_BOARD_CELLS],
}

impl ActivationCounts {
    /// Count for a cell (0 for cells never activated or out of range).
    pub fn get(&self, cell: u8) -> u8 {
        self.counts.get(cell as usize).copied().unwrap_or(0)
    }

    /// Fixed-size view of all counts, indexed by cell.
    pub fn as_array(&self) -> [u8; MAX_BOARD_CELLS] {
        self.counts
    }

    /// Cells with a non-zero count, as `(cell, count)` pairs.
    pub fn non_zero(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &n)| n > 0)
            .map(|(cell, &n)| (cell as u8, n))
    }

    fn bump(&mut self, cell: u8) {
        if let Some(n) = self.counts.get_mut(cell as usize) {
            *n = n.saturating_add(1);
        }
    }

    fn reset(&mut self, cell: u8) {
        if let Some(n) = self.counts.get_mut(cell as usize) {
            *n = 0;
        }
    }

    fn clear(&mut self) {
        self.counts = [0; MAX_BOARD_CELLS];
    }
}

/// Result of advancing a playback by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackTick {
    /// The reveal interval has not elapsed yet.
    Pending,
    /// The next pattern element was revealed.
    Revealed { position: usize, cell: u8 },
    /// The last element's interval elapsed; playback is done and the
    /// activation counts have been cleared.
    Finished,
}

/// One timed run through a pattern.
#[derive(Debug, Clone)]
pub struct Playback {
    pattern: Vec<u8>,
    interval_ms: u32,
    position: usize,
    timer_ms: u32,
    counts: ActivationCounts,
    finished: bool,
}

impl Playback {
    /// Start playing a pattern. The first element is revealed immediately;
    /// each subsequent element follows after `interval_ms`.
    ///
    /// `pattern` must be non-empty.
    pub fn new(pattern: Vec<u8>, interval_ms: u32) -> Self {
        debug_assert!(!pattern.is_empty());
        debug_assert!(interval_ms > 0);

        let mut playback = Self {
            pattern,
            interval_ms,
            position: 0,
            timer_ms: 0,
            counts: ActivationCounts::default(),
            finished: false,
        };
        playback.counts.bump(playback.pattern[0]);
        playback
    }

    /// Advance by `elapsed_ms`. Fires at most one step.
    pub fn tick(&mut self, elapsed_ms: u32) -> PlaybackTick {
        if self.finished {
            return PlaybackTick::Finished;
        }

        self.timer_ms += elapsed_ms;
        if self.timer_ms < self.interval_ms {
            return PlaybackTick::Pending;
        }
        self.timer_ms = 0;

        self.position += 1;
        if self.position == self.pattern.len() {
            self.finished = true;
            self.counts.clear();
            return PlaybackTick::Finished;
        }

        let cell = self.pattern[self.position];
        // Escalation only persists across immediately consecutive repeats:
        // a cell recurring after a gap starts counting from scratch.
        if self.pattern[self.position - 1] != cell {
            self.counts.reset(cell);
        }
        self.counts.bump(cell);

        PlaybackTick::Revealed {
            position: self.position,
            cell,
        }
    }

    /// Pattern position currently highlighted, if playback is still running.
    pub fn position(&self) -> Option<usize> {
        if self.finished {
            None
        } else {
            Some(self.position)
        }
    }

    /// Cell currently highlighted, if playback is still running.
    pub fn current_cell(&self) -> Option<u8> {
        self.position().map(|i| self.pattern[i])
    }

    /// Activation counts as of the last revealed element.
    pub fn counts(&self) -> &ActivationCounts {
        &self.counts
    }

    /// Milliseconds accumulated toward the next reveal.
    pub fn timer_ms(&self) -> u32 {
        self.timer_ms
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
