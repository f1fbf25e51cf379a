//! # magic-cards
//!
//! Headless engine for an interactive board of decorative "magic cards".
//!
//! ## Design Principles
//!
//! 1. **Owned State**: The id counter lives in `CardFactory`, the score in
//!    `Scoreboard`. No globals; a `Session` owns both.
//!
//! 2. **Bound, Not Re-read**: A click resolves its card through the board's
//!    element → card table, so the score always uses the power the card
//!    was generated with.
//!
//! 3. **Explicit Time**: Animations are `VisualTask`s on a `Timeline` that
//!    the host advances. Nothing runs behind the caller's back.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Templates, generated cards, the factory
//! - `scoring`: Score deltas and the running total
//! - `display`: Rendered elements and the board
//! - `timing`: Scheduled-event timeline
//! - `input`: Keyboard shortcuts
//! - `session`: Actions tying everything together

pub mod cards;
pub mod core;
pub mod display;
pub mod input;
pub mod scoring;
pub mod session;
pub mod timing;

// Re-export commonly used types
pub use crate::core::{CardError, CardRng, CardRngState, SessionConfig, TimingConfig};

pub use crate::cards::{
    Card, CardFactory, CardId, CardTemplate, TemplateId, TemplateRegistry, MAX_POWER, MIN_POWER,
};

pub use crate::scoring::{compute_delta, try_compute_delta, Scoreboard};

pub use crate::display::{Board, CardClass, ElementId, LoadingModal, RenderedCard};

pub use crate::timing::{Millis, TaskId, Timeline};

pub use crate::input::Command;

pub use crate::session::{Session, Theme, VisualTask};
