//! Card templates - static card artwork and text.
//!
//! A `CardTemplate` holds the parts of a card that never change:
//! icon, base title and description. Generated cards copy these and add
//! their own id and power.

use serde::{Deserialize, Serialize};

/// Index of a template inside a `TemplateRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Template({})", self.0)
    }
}

/// Immutable card blueprint.
///
/// ## Example
///
/// ```
/// use magic_cards::cards::CardTemplate;
///
/// let owl = CardTemplate::new("🦉", "Night Owl", "Sees what others miss");
/// assert_eq!(owl.title, "Night Owl");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Glyph shown at the top of the card.
    pub icon: String,

    /// Base title. Generated cards append `#<id>`.
    pub title: String,

    /// Flavor text.
    pub description: String,
}

impl CardTemplate {
    /// Create a new template.
    #[must_use]
    pub fn new(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// The eight built-in templates.
#[must_use]
pub fn default_templates() -> Vec<CardTemplate> {
    vec![
        CardTemplate::new("🔮", "Crystal Ball", "Reveals the mysteries of the future"),
        CardTemplate::new("⚡", "Lightning Strike", "Harnesses the power of storms"),
        CardTemplate::new("🌟", "Shooting Star", "Grants wishes upon the night sky"),
        CardTemplate::new("🦋", "Metamorphosis", "Transforms and evolves endlessly"),
        CardTemplate::new("🌙", "Lunar Magic", "Channels the power of moon phases"),
        CardTemplate::new("🔥", "Phoenix Fire", "Burns bright and rises from ashes"),
        CardTemplate::new("💎", "Diamond Shield", "Provides unbreakable protection"),
        CardTemplate::new("🌪️", "Tornado Spin", "Creates whirlwinds of chaos"),
    ]
}
