//! Card system: templates, generated cards, and the factory.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Immutable icon/title/description tuple
//! - `TemplateRegistry`: The fixed, non-empty template set
//! - `Card`: One generated card with id and power
//! - `CardFactory`: Owns the id counter and RNG, produces cards

pub mod card;
pub mod factory;
pub mod registry;
pub mod template;

pub use card::{Card, CardId, MAX_POWER, MIN_POWER};
pub use factory::CardFactory;
pub use registry::TemplateRegistry;
pub use template::{default_templates, CardTemplate, TemplateId};
