//! Session configuration.
//!
//! Hosts configure a session at startup by providing:
//! - `TimingConfig`: Delays and staggers for visual staging
//! - `SessionConfig`: Seed, initial population, scoring multiplier, timing
//!
//! Both load from JSON; missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use super::error::CardError;

/// Delays (in milliseconds) used to stage animations.
///
/// None of these affect scoring or card identity; they only decide when
/// timeline tasks fire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Gap between entrance animations of the initial cards.
    pub initial_stagger_ms: u64,

    /// Delay before the loading modal's `show` class is applied.
    pub modal_show_delay_ms: u64,

    /// Simulated loading time before a requested card appears.
    pub loading_ms: u64,

    /// Delay between attaching a new card and starting its fade-in.
    pub fade_in_delay_ms: u64,

    /// Duration of the modal fade-out.
    pub modal_fade_ms: u64,

    /// CSS transition length for card entrances.
    pub fade_transition_ms: u64,

    /// CSS transition length for card exits on reset.
    pub exit_transition_ms: u64,

    /// How long a clicked card keeps `animate-pulse`.
    pub pulse_ms: u64,

    /// How long the score readout stays scaled up.
    pub score_highlight_ms: u64,

    /// Gap between bounces when animating all cards.
    pub bounce_stagger_ms: u64,

    /// How long each card keeps `animate-bounce`.
    pub bounce_ms: u64,

    /// Gap between exit animations on reset.
    pub exit_stagger_ms: u64,

    /// Extra wait after the last exit animation before clearing the board.
    pub reset_settle_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_stagger_ms: 200,
            modal_show_delay_ms: 10,
            loading_ms: 1500,
            fade_in_delay_ms: 100,
            modal_fade_ms: 500,
            fade_transition_ms: 500,
            exit_transition_ms: 300,
            pulse_ms: 2000,
            score_highlight_ms: 300,
            bounce_stagger_ms: 200,
            bounce_ms: 1000,
            exit_stagger_ms: 100,
            reset_settle_ms: 500,
        }
    }
}

impl TimingConfig {
    /// Timing with every delay set to zero. Useful for tests and
    /// non-interactive hosts.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            initial_stagger_ms: 0,
            modal_show_delay_ms: 0,
            loading_ms: 0,
            fade_in_delay_ms: 0,
            modal_fade_ms: 0,
            fade_transition_ms: 0,
            exit_transition_ms: 0,
            pulse_ms: 0,
            score_highlight_ms: 0,
            bounce_stagger_ms: 0,
            bounce_ms: 0,
            exit_stagger_ms: 0,
            reset_settle_ms: 0,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for card synthesis.
    pub seed: u64,

    /// Cards placed on the board by `initialize` and after a reset.
    pub initial_cards: usize,

    /// Multiplier applied when a card is clicked.
    pub interaction_multiplier: i64,

    /// Animation timing.
    pub timing: TimingConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            initial_cards: 4,
            interaction_multiplier: crate::scoring::INTERACTION_MULTIPLIER,
            timing: TimingConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with defaults and the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Set the number of initial cards.
    #[must_use]
    pub fn with_initial_cards(mut self, count: usize) -> Self {
        self.initial_cards = count;
        self
    }

    /// Set the click multiplier.
    #[must_use]
    pub fn with_interaction_multiplier(mut self, multiplier: i64) -> Self {
        self.interaction_multiplier = multiplier;
        self
    }

    /// Replace the timing table.
    #[must_use]
    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, CardError> {
        let config: SessionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that would break scoring.
    pub fn validate(&self) -> Result<(), CardError> {
        if self.interaction_multiplier < 1 {
            return Err(CardError::InvalidConfig(format!(
                "interaction_multiplier must be at least 1, got {}",
                self.interaction_multiplier
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.initial_cards, 4);
        assert_eq!(config.interaction_multiplier, 2);
        assert_eq!(config.timing.loading_ms, 1500);
        assert_eq!(config.timing.pulse_ms, 2000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new(9)
            .with_initial_cards(6)
            .with_interaction_multiplier(3)
            .with_timing(TimingConfig::instant());

        assert_eq!(config.seed, 9);
        assert_eq!(config.initial_cards, 6);
        assert_eq!(config.interaction_multiplier, 3);
        assert_eq!(config.timing.loading_ms, 0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SessionConfig::from_json(r#"{"seed": 5, "timing": {"loading_ms": 10}}"#).unwrap();

        assert_eq!(config.seed, 5);
        assert_eq!(config.initial_cards, 4);
        assert_eq!(config.timing.loading_ms, 10);
        assert_eq!(config.timing.pulse_ms, 2000);
    }

    #[test]
    fn test_from_json_rejects_bad_multiplier() {
        let err = SessionConfig::from_json(r#"{"interaction_multiplier": 0}"#).unwrap_err();
        assert!(matches!(err, CardError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = SessionConfig::from_json("{").unwrap_err();
        assert!(matches!(err, CardError::Serialization(_)));
    }
}
