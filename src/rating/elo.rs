//! Elo rating updates.

use serde::{Deserialize, Serialize};

/// Standard K-factor.
pub const K_FACTOR: f64 = 32.0;

/// Probability that a player rated `rating_a` beats one rated `rating_b`.
#[must_use]
pub fn expected_score(rating_a: i32, rating_b: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf((f64::from(rating_b) - f64::from(rating_a)) / 400.0))
}

/// Rating changes for one finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EloResult {
    pub delta_p1: i32,
    pub delta_p2: i32,
    pub new_rating_p1: i32,
    pub new_rating_p2: i32,
}

/// Elo parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EloConfig {
    /// Maximum rating swing per match.
    pub k_factor: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self { k_factor: K_FACTOR }
    }
}

impl EloConfig {
    #[must_use]
    pub fn with_k_factor(k_factor: f64) -> Self {
        Self { k_factor }
    }

    /// Deltas and new ratings after a match between two seats.
    ///
    /// Each delta is rounded on its own with halves going up, so the two
    /// need not sum to exactly zero. Ratings have no floor.
    #[must_use]
    pub fn calculate(&self, rating_p1: i32, rating_p2: i32, p1_wins: bool) -> EloResult {
        let expected_p1 = expected_score(rating_p1, rating_p2);
        let expected_p2 = 1.0 - expected_p1;
        let (actual_p1, actual_p2) = if p1_wins { (1.0, 0.0) } else { (0.0, 1.0) };

        let delta_p1 = round_half_up(self.k_factor * (actual_p1 - expected_p1));
        let delta_p2 = round_half_up(self.k_factor * (actual_p2 - expected_p2));

        EloResult {
            delta_p1,
            delta_p2,
            new_rating_p1: rating_p1 + delta_p1,
            new_rating_p2: rating_p2 + delta_p2,
        }
    }
}

/// Elo update with the standard K-factor.
///
/// ```
/// use clash_core::rating::calculate_elo;
///
/// let result = calculate_elo(1000, 1000, true);
/// assert_eq!((result.delta_p1, result.delta_p2), (16, -16));
/// assert_eq!((result.new_rating_p1, result.new_rating_p2), (1016, 984));
/// ```
#[must_use]
pub fn calculate_elo(rating_p1: i32, rating_p2: i32, p1_wins: bool) -> EloResult {
    EloConfig::default().calculate(rating_p1, rating_p2, p1_wins)
}

// -16.5 rounds to -16, not -17.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
