//! Player ratings.

pub mod elo;

pub use elo::{calculate_elo, expected_score, EloConfig, EloResult, K_FACTOR};
