//! Score deltas and the running total.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BONUS_AMOUNT, BONUS_THRESHOLD, DEFAULT_MULTIPLIER, INTERACTION_MULTIPLIER};
use crate::cards::{Card, MAX_POWER, MIN_POWER};
use crate::core::CardError;

/// Score earned for a card of `power` under `multiplier`.
///
/// `power * multiplier`, plus `BONUS_AMOUNT` when power is strictly above
/// `BONUS_THRESHOLD`. Inputs are trusted; see `try_compute_delta`.
///
/// ```
/// use magic_cards::scoring::compute_delta;
///
/// assert_eq!(compute_delta(30, 2), 60);
/// assert_eq!(compute_delta(51, 2), 127);
/// assert_eq!(compute_delta(50, 1), 50);
/// ```
#[must_use]
pub const fn compute_delta(power: i64, multiplier: i64) -> i64 {
    let bonus = if power > BONUS_THRESHOLD { BONUS_AMOUNT } else { 0 };
    power * multiplier + bonus
}

/// `compute_delta` with the default multiplier of 1.
#[must_use]
pub const fn base_delta(power: i64) -> i64 {
    compute_delta(power, DEFAULT_MULTIPLIER)
}

/// Checked variant of `compute_delta` for values from outside the engine.
///
/// Rejects power outside `1..=100` and multipliers below 1 instead of
/// clamping them.
pub fn try_compute_delta(power: i64, multiplier: i64) -> Result<i64, CardError> {
    if !(MIN_POWER..=MAX_POWER).contains(&power) {
        return Err(CardError::PowerOutOfRange { power });
    }
    if multiplier < 1 {
        return Err(CardError::InvalidMultiplier { multiplier });
    }
    Ok(compute_delta(power, multiplier))
}

/// Running score total.
///
/// Only `apply_interaction` and `reset` change it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    total: i64,
    interactions: u32,
    multiplier: i64,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Empty scoreboard using the click multiplier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            total: 0,
            interactions: 0,
            multiplier: INTERACTION_MULTIPLIER,
        }
    }

    /// Empty scoreboard with a custom click multiplier.
    ///
    /// Multipliers below 1 are rejected so the total never goes negative.
    pub fn with_multiplier(multiplier: i64) -> Result<Self, CardError> {
        if multiplier < 1 {
            return Err(CardError::InvalidMultiplier { multiplier });
        }
        Ok(Self {
            total: 0,
            interactions: 0,
            multiplier,
        })
    }

    /// Score a click on `card` and return the delta.
    pub fn apply_interaction(&mut self, card: &Card) -> i64 {
        let delta = compute_delta(card.power, self.multiplier);
        self.total = self.total.saturating_add(delta);
        self.interactions = self.interactions.saturating_add(1);
        debug!(card = %card.id, power = card.power, delta, total = self.total, "scored interaction");
        delta
    }

    /// Zero the total. Idempotent.
    pub fn reset(&mut self) {
        self.total = 0;
        self.interactions = 0;
    }

    #[must_use]
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Clicks scored since the last reset.
    #[must_use]
    pub fn interactions(&self) -> u32 {
        self.interactions
    }

    #[must_use]
    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }
}
