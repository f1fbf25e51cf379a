//! Card factory: random card synthesis.
//!
//! The factory owns the id counter and the RNG, so two factories never
//! share state and the same seed always yields the same cards.

use tracing::debug;

use super::card::{Card, CardId, MAX_POWER, MIN_POWER};
use super::registry::TemplateRegistry;
use crate::core::{CardRng, CardRngState};

/// Produces cards from a template registry.
///
/// ## Example
///
/// ```
/// use magic_cards::cards::{CardFactory, CardId, TemplateRegistry};
/// use magic_cards::core::CardRng;
///
/// let mut factory = CardFactory::new(TemplateRegistry::builtin(), CardRng::new(1));
///
/// let first = factory.generate_card();
/// let second = factory.generate_card();
///
/// assert_eq!(first.id, CardId::new(1));
/// assert_eq!(second.id, CardId::new(2));
/// ```
#[derive(Clone, Debug)]
pub struct CardFactory {
    registry: TemplateRegistry,
    rng: CardRng,
    /// Last id handed out; 0 means none yet.
    last_id: u32,
}

impl CardFactory {
    /// Create a factory with a fresh id counter.
    #[must_use]
    pub fn new(registry: TemplateRegistry, rng: CardRng) -> Self {
        Self {
            registry,
            rng,
            last_id: 0,
        }
    }

    /// Generate a new card.
    ///
    /// Picks a template uniformly, takes the next id, then rolls power in
    /// `1..=100`.
    pub fn generate_card(&mut self) -> Card {
        let (template_id, template) = self.registry.choose(&mut self.rng);
        self.last_id = self.last_id.saturating_add(1);
        let id = CardId::new(self.last_id);
        let power = self.rng.gen_inclusive(MIN_POWER, MAX_POWER);

        let card = Card::from_template(id, template_id, template, power);
        debug!(card = %card.id, title = %card.title, power, "generated card");
        card
    }

    /// Reset the id counter so the next card gets id 1.
    ///
    /// The RNG keeps its position; only identity restarts.
    pub fn reset_ids(&mut self) {
        self.last_id = 0;
    }

    /// Number of cards issued since creation or the last reset.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.last_id
    }

    #[must_use]
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Snapshot of the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> CardRngState {
        self.rng.state()
    }
}
