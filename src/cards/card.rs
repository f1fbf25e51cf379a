//! Generated cards.
//!
//! A `Card` is one draw from the factory: a template's icon and text plus
//! a fresh id and a random power level.

use serde::{Deserialize, Serialize};

use super::template::{CardTemplate, TemplateId};

/// Lowest power a card can roll.
pub const MIN_POWER: i64 = 1;

/// Highest power a card can roll.
pub const MAX_POWER: i64 = 100;

/// Identifier of a generated card. Starts at 1 and counts up until reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A generated card.
///
/// ## Example
///
/// ```
/// use magic_cards::cards::{Card, CardId, CardTemplate, TemplateId};
///
/// let template = CardTemplate::new("⚡", "Lightning Strike", "Harnesses the power of storms");
/// let card = Card::from_template(CardId::new(3), TemplateId::new(1), &template, 42);
///
/// assert_eq!(card.title, "Lightning Strike #3");
/// assert_eq!(card.power, 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Template this card was drawn from.
    pub template: TemplateId,

    pub icon: String,

    /// Template title followed by `#<id>`.
    pub title: String,

    pub description: String,

    /// Power level in `MIN_POWER..=MAX_POWER`.
    pub power: i64,
}

impl Card {
    /// Compose a card from a template.
    #[must_use]
    pub fn from_template(id: CardId, template_id: TemplateId, template: &CardTemplate, power: i64) -> Self {
        Self {
            id,
            template: template_id,
            icon: template.icon.clone(),
            title: format!("{} #{}", template.title, id.raw()),
            description: template.description.clone(),
            power,
        }
    }

    /// Check the power invariant.
    #[must_use]
    pub fn has_valid_power(&self) -> bool {
        (MIN_POWER..=MAX_POWER).contains(&self.power)
    }
}
