//! RNG module - uniform pattern generation
//!
//! Patterns are drawn uniformly **with replacement** from the board's cells:
//! a cell may repeat, including back to back. Consecutive repeats are what
//! drive the escalating activation feedback during playback, so this is
//! deliberate and must not be "fixed" with a bag or shuffle.
//!
//! Also provides a simple LCG for deterministic generation from a seed.

/// Source of uniform random integers, injectable for reproducible tests.
pub trait RandomSource {
    /// Generate a uniform value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Get the current RNG state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Generate a pattern of `length` cell indices on a `board_size` x `board_size`
/// board. Every draw is independent and uniform over `[0, board_size^2)`.
pub fn generate_pattern(length: usize, board_size: u8, rng: &mut dyn RandomSource) -> Vec<u8> {
    let cells = board_size as u32 * board_size as u32;
    (0..length).map(|_| rng.next_range(cells) as u8).collect()
}
