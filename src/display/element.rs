//! Rendered card elements.
//!
//! A `RenderedCard` is the on-board view of a card: display text, a class
//! list, and the opacity/offset that entrance and exit animations drive.
//! It carries the card's id and power as plain attributes, but scoring
//! never reads them back; see `Board::card_for`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};

/// Handle to an element on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u32);

impl ElementId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Element({})", self.0)
    }
}

/// Classes an element can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardClass {
    /// Base class every card element has.
    MagicCard,
    /// Click feedback.
    AnimatePulse,
    /// "Animate all" bounce.
    AnimateBounce,
}

impl CardClass {
    /// Stylesheet name of the class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardClass::MagicCard => "magic-card",
            CardClass::AnimatePulse => "animate-pulse",
            CardClass::AnimateBounce => "animate-bounce",
        }
    }
}

/// Pixel offset applied by a transform. `(0, 0)` is the resting position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const REST: Offset = Offset { x: 0, y: 0 };

    /// Where entering cards start (`translateY(50px)`).
    pub const ENTER: Offset = Offset { x: 0, y: 50 };

    /// Where leaving cards end (`translateX(-100px)`).
    pub const EXIT: Offset = Offset { x: -100, y: 0 };
}

/// A card as shown on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedCard {
    /// `data-card-id`.
    pub card_id: CardId,

    /// `data-power`. Display only.
    pub power: i64,

    pub icon: String,
    pub title: String,
    pub description: String,

    /// `"Power: <n>"`.
    pub power_label: String,

    /// Class list. Most elements hold one or two classes.
    pub classes: SmallVec<[CardClass; 3]>,

    /// 0.0 is invisible, 1.0 fully opaque.
    pub opacity: f32,

    pub offset: Offset,

    /// Duration of the CSS transition in effect, if any.
    pub transition_ms: Option<u64>,
}

impl RenderedCard {
    /// Add a class. Adding one that is already present is a no-op.
    pub fn add_class(&mut self, class: CardClass) {
        if !self.has_class(class) {
            self.classes.push(class);
        }
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: CardClass) {
        self.classes.retain(|c| *c != class);
    }

    #[must_use]
    pub fn has_class(&self, class: CardClass) -> bool {
        self.classes.contains(&class)
    }

    /// Space-separated class attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Put the element at its pre-entrance position: transparent and
    /// pushed down.
    pub fn prepare_entrance(&mut self) {
        self.opacity = 0.0;
        self.offset = Offset::ENTER;
    }

    /// Transition to fully visible at rest.
    pub fn fade_in(&mut self, transition_ms: u64) {
        self.transition_ms = Some(transition_ms);
        self.opacity = 1.0;
        self.offset = Offset::REST;
    }

    /// Transition out to the left.
    pub fn slide_out(&mut self, transition_ms: u64) {
        self.transition_ms = Some(transition_ms);
        self.opacity = 0.0;
        self.offset = Offset::EXIT;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Build the element for a card.
///
/// The element starts fully visible at rest with only `magic-card`.
#[must_use]
pub fn render_card(card: &Card) -> RenderedCard {
    let mut classes = SmallVec::new();
    classes.push(CardClass::MagicCard);

    RenderedCard {
        card_id: card.id,
        power: card.power,
        icon: card.icon.clone(),
        title: card.title.clone(),
        description: card.description.clone(),
        power_label: format!("Power: {}", card.power),
        classes,
        opacity: 1.0,
        offset: Offset::REST,
        transition_ms: None,
    }
}
