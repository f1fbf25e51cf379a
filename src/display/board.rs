//! The card board: rendered elements, their bound cards, and the
//! score/modal widgets around them.
//!
//! The board owns the association element → card. Clicks resolve through
//! that table, so later edits to an element's text or attributes can
//! never change what a click scores.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::element::{render_card, ElementId, RenderedCard};
use crate::cards::{Card, CardId};

/// Scale applied to the score readout right after it changes.
pub const SCORE_HIGHLIGHT_SCALE: f32 = 1.2;

/// Numeric score text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReadout {
    pub value: i64,
    /// Current `scale()` transform; 1.0 at rest.
    pub scale: f32,
}

impl Default for ScoreReadout {
    fn default() -> Self {
        Self { value: 0, scale: 1.0 }
    }
}

/// Loading modal phases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadingModal {
    /// `display: none`.
    #[default]
    Hidden,
    /// `display: flex`, waiting for the `show` class.
    Displayed,
    /// `show` class applied.
    Shown,
    /// Opacity 0, about to be hidden.
    FadingOut,
}

/// In-memory display surface.
///
/// ## Usage
///
/// ```
/// use magic_cards::cards::{CardFactory, TemplateRegistry};
/// use magic_cards::core::CardRng;
/// use magic_cards::display::Board;
///
/// let mut factory = CardFactory::new(TemplateRegistry::builtin(), CardRng::new(3));
/// let mut board = Board::new();
///
/// let card = factory.generate_card();
/// let element = board.attach(card.clone());
///
/// assert_eq!(board.card_for(element), Some(&card));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Board {
    next_element: u32,

    elements: FxHashMap<ElementId, RenderedCard>,

    /// Element → card it was rendered from.
    bindings: FxHashMap<ElementId, Card>,

    /// Display order, oldest first.
    order: Vector<ElementId>,

    score: ScoreReadout,

    modal: LoadingModal,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `card`, append it to the board, and bind the element to it.
    pub fn attach(&mut self, card: Card) -> ElementId {
        self.next_element += 1;
        let id = ElementId::new(self.next_element);

        self.elements.insert(id, render_card(&card));
        self.bindings.insert(id, card);
        self.order.push_back(id);
        id
    }

    /// Remove every element and binding. Element ids keep counting up.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.bindings.clear();
        self.order.clear();
    }

    /// Card an element was rendered from.
    #[must_use]
    pub fn card_for(&self, element: ElementId) -> Option<&Card> {
        self.bindings.get(&element)
    }

    /// Element showing the given card, if it is on the board.
    #[must_use]
    pub fn find_by_card(&self, card: CardId) -> Option<ElementId> {
        self.order
            .iter()
            .copied()
            .find(|e| self.elements.get(e).is_some_and(|el| el.card_id == card))
    }

    #[must_use]
    pub fn element(&self, element: ElementId) -> Option<&RenderedCard> {
        self.elements.get(&element)
    }

    pub fn element_mut(&mut self, element: ElementId) -> Option<&mut RenderedCard> {
        self.elements.get_mut(&element)
    }

    /// Elements in display order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &RenderedCard)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.elements.get(id).map(|el| (*id, el)))
    }

    /// Current display order. Cloning is O(1).
    #[must_use]
    pub fn order(&self) -> Vector<ElementId> {
        self.order.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // === Score readout ===

    #[must_use]
    pub fn score(&self) -> ScoreReadout {
        self.score
    }

    /// Show a new total and scale the readout up.
    pub fn refresh_score(&mut self, total: i64) {
        self.score.value = total;
        self.score.scale = SCORE_HIGHLIGHT_SCALE;
    }

    /// Return the readout to its resting scale.
    pub fn settle_score(&mut self) {
        self.score.scale = 1.0;
    }

    // === Loading modal ===

    #[must_use]
    pub fn modal(&self) -> LoadingModal {
        self.modal
    }

    pub fn set_modal(&mut self, modal: LoadingModal) {
        self.modal = modal;
    }
}
