//! Deferred task scheduling for visual staging.
//!
//! Replaces timers with an explicit, host-driven timeline. Tasks never
//! affect scoring or card identity except through the session code that
//! runs them.

pub mod timeline;

pub use timeline::{Millis, Scheduled, TaskId, Timeline};
