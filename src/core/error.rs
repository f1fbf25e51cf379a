//! Error type for the library API.
//!
//! Normal gameplay has no failure path. These errors only surface when
//! callers hand in values from outside (config files, raw power values).

use thiserror::Error;

/// Errors reported by the card engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("power {power} is outside 1..=100")]
    PowerOutOfRange { power: i64 },

    #[error("multiplier must be at least 1, got {multiplier}")]
    InvalidMultiplier { multiplier: i64 },

    #[error("template set is empty")]
    EmptyTemplates,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CardError {
    fn from(err: serde_json::Error) -> Self {
        CardError::Serialization(err.to_string())
    }
}
