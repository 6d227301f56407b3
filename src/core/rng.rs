//! Deterministic random number generation for reproducible shuffles.
//!
//! ## Key Features
//!
//! - **Bit-exact**: Mulberry32 over wrapping 32-bit arithmetic, so any
//!   reimplementation replaying a match from its seed gets identical decks
//! - **Seed derivation**: `derive_seed` turns a hex string (a match hash) into
//!   the 32-bit seed
//! - **Serializable**: the whole generator is two words of state
//! - **rand-compatible**: implements `RngCore` / `SeedableRng`
//!
//! ## Usage
//!
//! ```
//! use clash_core::core::{derive_seed, GameRng};
//!
//! let mut rng = GameRng::new(derive_seed("0xdeadbeef"));
//! let mut replay = GameRng::new(derive_seed("0xdeadbeef"));
//!
//! assert_eq!(rng.next_float(), replay.next_float());
//! ```

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Mulberry32 increment.
const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;

/// 2^32, the divisor mapping a 32-bit output onto [0, 1).
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Derive a 32-bit seed from a hex string.
///
/// Strips an optional `0x` prefix, looks at the first 8 characters and parses
/// the leading run of hex digits as an unsigned value, which is then
/// reinterpreted as a signed 32-bit integer. Text with no leading hex digit
/// yields 0.
///
/// ```
/// use clash_core::core::derive_seed;
///
/// assert_eq!(derive_seed("0xdeadbeef"), 0xdeadbeef_u32 as i32);
/// assert_eq!(derive_seed("abcd1234ffff"), 0xabcd1234_u32 as i32);
/// ```
#[must_use]
pub fn derive_seed(hex: &str) -> i32 {
    let clean = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);

    let value = clean
        .chars()
        .take(8)
        .map_while(|c| c.to_digit(16))
        .fold(0u32, |acc, digit| (acc << 4) | digit);

    value as i32
}

/// Seeded Mulberry32 generator.
///
/// Every operation uses wrapping `u32` arithmetic; the float output is the
/// tempered 32-bit word divided by 2^32, which is exact in `f64`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRng {
    seed: i32,
    state: u32,
}

impl GameRng {
    /// Create a new generator from a 32-bit seed.
    #[must_use]
    pub fn new(seed: i32) -> Self {
        Self {
            seed,
            state: seed as u32,
        }
    }

    /// Create a generator from a hex seed string.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        Self::new(derive_seed(hex))
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// Advance and return the next tempered 32-bit word.
    pub fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        t ^ (t >> 14)
    }

    /// Next value in [0, 1).
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.next_word()) / TWO_POW_32
    }

    /// Uniform index in `0..bound` as `floor(next_float() * bound)`.
    ///
    /// Consumes exactly one draw. `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index bound must be positive");
        (self.next_float() * bound as f64).floor() as usize
    }

    /// Shuffle a slice in place with Fisher–Yates.
    ///
    /// Walks `i` from `len - 1` down to 1 and swaps with `j = floor(r * (i + 1))`,
    /// consuming exactly `len - 1` draws.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            state: self.state,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            seed: state.seed,
            state: state.state,
        }
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_word());
        let high = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GameRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i32::from_le_bytes(seed))
    }
}

/// Serializable generator state for checkpointing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: i32,
    /// Current Mulberry32 accumulator
    pub state: u32,
}
