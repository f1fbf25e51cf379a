//! Display surface.
//!
//! The board stands in for the page: cards are rendered into elements,
//! elements are attached in order, and the score readout and loading
//! modal sit alongside them.
//!
//! Missing elements are never an error. Every lookup returns `Option`
//! and callers treat `None` as a silent no-op.

pub mod board;
pub mod element;

pub use board::{Board, LoadingModal, ScoreReadout, SCORE_HIGHLIGHT_SCALE};
pub use element::{render_card, CardClass, ElementId, Offset, RenderedCard};
