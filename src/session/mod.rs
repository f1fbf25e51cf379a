//! User-facing session: actions, theme, and the timeline driver.

pub mod engine;
pub mod theme;

pub use engine::{Session, VisualTask};
pub use theme::Theme;
