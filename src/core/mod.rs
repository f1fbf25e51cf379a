//! Core building blocks: RNG, configuration, errors.
//!
//! Everything here is free of card or board semantics.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SessionConfig, TimingConfig};
pub use error::CardError;
pub use rng::{CardRng, CardRngState};
