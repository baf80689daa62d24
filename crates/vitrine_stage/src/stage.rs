//! The stage registry

use crate::element::Element;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

new_key_type! {
    /// Stable handle to a stage element
    pub struct ElementId;
}

/// Stage construction errors.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("duplicate well-known element name: {0}")]
    DuplicateElement(String),
}

/// Registry of every element the state machines touch.
///
/// The root element is the body-equivalent: it carries the theme classes,
/// the state attributes, and the gradient custom properties.
pub struct Stage {
    elements: SlotMap<ElementId, Element>,
    by_name: FxHashMap<String, ElementId>,
    root: ElementId,
    layout_epoch: u64,
}

impl Stage {
    pub fn new() -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(Element::new("root"));
        let mut by_name = FxHashMap::default();
        by_name.insert("root".to_string(), root);
        Self {
            elements,
            by_name,
            root,
            layout_epoch: 0,
        }
    }

    /// The root (body-equivalent) element.
    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Register a new element under a well-known name.
    pub fn insert(&mut self, name: &str) -> Result<ElementId, StageError> {
        if self.by_name.contains_key(name) {
            return Err(StageError::DuplicateElement(name.to_string()));
        }
        let id = self.elements.insert(Element::new(name));
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Resolve a well-known name. Absent elements yield `None`; callers
    /// skip their step rather than failing the surrounding operation.
    pub fn lookup(&self, name: &str) -> Option<ElementId> {
        self.by_name.get(name).copied()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Force a style/layout flush.
    ///
    /// Sequencing hook: a class added after this point starts its CSS
    /// transition from the flushed state rather than coalescing with the
    /// preceding mutations. The styling layer observes the epoch.
    pub fn force_reflow(&mut self, _id: ElementId) {
        self.layout_epoch += 1;
    }

    /// Current layout epoch (bumped by forced reflows).
    pub fn layout_epoch(&self) -> u64 {
        self.layout_epoch
    }

    // ========== Convenience passthroughs ==========
    //
    // Each is a silent no-op when the element is gone, which is the
    // failure mode the machines rely on.

    pub fn add_class(&mut self, id: ElementId, class: &'static str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &'static str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.remove_class(class);
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.elements
            .get(id)
            .map(|el| el.has_class(class))
            .unwrap_or(false)
    }

    pub fn set_property(&mut self, id: ElementId, prop: &'static str, value: String) {
        if let Some(el) = self.elements.get_mut(id) {
            el.set_property(prop, value);
        }
    }

    pub fn percent_value(&self, id: ElementId, prop: &str) -> f32 {
        self.elements
            .get(id)
            .map(|el| el.percent_value(prop))
            .unwrap_or(50.0)
    }

    pub fn set_attr(&mut self, id: ElementId, key: &'static str, value: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.set_attr(key, value);
        }
    }

    pub fn remove_attr(&mut self, id: ElementId, key: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.remove_attr(key);
        }
    }

    pub fn has_attr(&self, id: ElementId, key: &str) -> bool {
        self.elements
            .get(id)
            .map(|el| el.has_attr(key))
            .unwrap_or(false)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_exists_on_creation() {
        let stage = Stage::new();
        assert_eq!(stage.lookup("root"), Some(stage.root()));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut stage = Stage::new();
        stage.insert("vs").unwrap();
        assert!(matches!(
            stage.insert("vs"),
            Err(StageError::DuplicateElement(_))
        ));
    }

    #[test]
    fn missing_elements_read_as_defaults() {
        let stage = Stage::new();
        assert_eq!(stage.lookup("nonexistent"), None);
        assert!(!stage.has_class(stage.root(), "hidden"));
        assert_eq!(stage.percent_value(stage.root(), "--bg-primeira-cor"), 50.0);
    }

    #[test]
    fn force_reflow_bumps_epoch() {
        let mut stage = Stage::new();
        let before = stage.layout_epoch();
        stage.force_reflow(stage.root());
        assert_eq!(stage.layout_epoch(), before + 1);
    }
}
