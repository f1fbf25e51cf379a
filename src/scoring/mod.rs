//! Score accumulation.
//!
//! A click on a card earns `power * multiplier`, plus a flat bonus for
//! high-power cards. The running total lives in `Scoreboard`.

pub mod score;

pub use score::{base_delta, compute_delta, try_compute_delta, Scoreboard};

/// Power must be strictly above this to earn the bonus.
pub const BONUS_THRESHOLD: i64 = 50;

/// Flat bonus for high-power cards.
pub const BONUS_AMOUNT: i64 = 25;

/// Multiplier used when none is given.
pub const DEFAULT_MULTIPLIER: i64 = 1;

/// Multiplier applied to card clicks.
pub const INTERACTION_MULTIPLIER: i64 = 2;
