//! Template registry.
//!
//! The `TemplateRegistry` stores the fixed template set. It is built once
//! and never mutated, and it is never empty.

use super::template::{default_templates, CardTemplate, TemplateId};
use crate::core::{CardError, CardRng};

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use magic_cards::cards::{CardTemplate, TemplateId, TemplateRegistry};
///
/// let registry = TemplateRegistry::new(vec![
///     CardTemplate::new("🐉", "Dragon", "Breathes fire"),
/// ]).unwrap();
///
/// let found = registry.get(TemplateId::new(0)).unwrap();
/// assert_eq!(found.title, "Dragon");
/// ```
#[derive(Clone, Debug)]
pub struct TemplateRegistry {
    templates: Vec<CardTemplate>,
}

impl TemplateRegistry {
    /// Build a registry from a list of templates.
    ///
    /// Fails with `CardError::EmptyTemplates` if the list is empty.
    pub fn new(templates: Vec<CardTemplate>) -> Result<Self, CardError> {
        if templates.is_empty() {
            return Err(CardError::EmptyTemplates);
        }
        if templates.len() > usize::from(u16::MAX) {
            return Err(CardError::InvalidConfig(format!(
                "at most {} templates supported, got {}",
                u16::MAX,
                templates.len()
            )));
        }

        Ok(Self { templates })
    }

    /// Registry holding the eight built-in templates.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            templates: default_templates(),
        }
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&CardTemplate> {
        self.templates.get(usize::from(id.raw()))
    }

    /// Pick a template uniformly at random.
    pub fn choose(&self, rng: &mut CardRng) -> (TemplateId, &CardTemplate) {
        // Non-empty by construction, so the fallback index is never taken.
        let index = rng.gen_index(self.templates.len()).unwrap_or(0);
        (TemplateId::new(index as u16), &self.templates[index])
    }

    /// Number of templates. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty. Never true once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin() {
        let registry = TemplateRegistry::builtin();
        assert_eq!(registry.len(), 8);
        assert!(!registry.is_empty());
        assert_eq!(registry.get(TemplateId::new(1)).unwrap().title, "Lightning Strike");
        assert!(registry.get(TemplateId::new(8)).is_none());
    }

    #[test]
    fn test_empty_rejected() {
        let err = TemplateRegistry::new(Vec::new()).unwrap_err();
        assert_eq!(err, CardError::EmptyTemplates);
    }

    #[test]
    fn test_choose_covers_all_templates() {
        let registry = TemplateRegistry::builtin();
        let mut rng = CardRng::new(11);
        let mut seen = [false; 8];

        for _ in 0..500 {
            let (id, template) = registry.choose(&mut rng);
            assert_eq!(registry.get(id), Some(template));
            seen[usize::from(id.raw())] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_custom_templates_keep_order() {
        let registry = TemplateRegistry::new(vec![
            CardTemplate::new("a", "A", "first"),
            CardTemplate::new("b", "B", "second"),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(TemplateId::new(1)).unwrap().title, "B");
    }
}
