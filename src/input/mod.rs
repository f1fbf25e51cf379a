//! Keyboard shortcuts.
//!
//! Four single-key bindings, case-sensitive:
//!
//! | key | command |
//! |-----|---------|
//! | `c` | generate one card |
//! | `a` | animate all cards |
//! | `t` | toggle theme |
//! | `r` | reset everything |

use serde::{Deserialize, Serialize};

/// A user-facing action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    GenerateOne,
    AnimateAll,
    ToggleTheme,
    ResetAll,
}

impl Command {
    /// Every command, in binding-table order.
    pub const ALL: [Command; 4] = [
        Command::GenerateOne,
        Command::AnimateAll,
        Command::ToggleTheme,
        Command::ResetAll,
    ];

    /// Command bound to `key`, if any.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'c' => Some(Command::GenerateOne),
            'a' => Some(Command::AnimateAll),
            't' => Some(Command::ToggleTheme),
            'r' => Some(Command::ResetAll),
            _ => None,
        }
    }

    /// Key bound to this command.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Command::GenerateOne => 'c',
            Command::AnimateAll => 'a',
            Command::ToggleTheme => 't',
            Command::ResetAll => 'r',
        }
    }

    /// Short help text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Command::GenerateOne => "create a random card",
            Command::AnimateAll => "animate all cards",
            Command::ToggleTheme => "toggle theme",
            Command::ResetAll => "reset cards and score",
        }
    }
}
