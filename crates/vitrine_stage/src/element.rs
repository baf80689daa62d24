//! A single stage element

use rustc_hash::{FxHashMap, FxHashSet};

/// Inline visibility override.
///
/// `Inherit` is the cleared state (the stylesheet decides); `Hidden`
/// removes the element from flow and accessibility after its hide
/// transition finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Inherit,
    Hidden,
}

/// An element on the stage: class membership, inline style overrides,
/// state attributes, and custom properties.
///
/// Inline overrides are `Option`s so "restore to stylesheet default" is
/// representable (`None`), matching how the machines undo slide/hide
/// effects without knowing the stylesheet's values.
#[derive(Clone, Debug, Default)]
pub struct Element {
    pub(crate) name: String,
    classes: FxHashSet<&'static str>,
    visibility: Visibility,
    display: Option<&'static str>,
    transform: Option<String>,
    opacity: Option<String>,
    margin_left: Option<String>,
    disabled: bool,
    attrs: FxHashMap<&'static str, String>,
    properties: FxHashMap<&'static str, String>,
}

impl Element {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Well-known name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    // ========== Classes ==========

    pub fn add_class(&mut self, class: &'static str) {
        self.classes.insert(class);
    }

    pub fn remove_class(&mut self, class: &'static str) {
        self.classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Remove several classes at once.
    pub fn remove_classes(&mut self, classes: &[&'static str]) {
        for class in classes {
            self.classes.remove(class);
        }
    }

    // ========== Inline style overrides ==========

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    pub fn display(&self) -> Option<&'static str> {
        self.display
    }

    pub fn set_display(&mut self, display: Option<&'static str>) {
        self.display = display;
    }

    pub fn transform(&self) -> Option<&str> {
        self.transform.as_deref()
    }

    pub fn set_transform(&mut self, transform: Option<String>) {
        self.transform = transform;
    }

    pub fn opacity(&self) -> Option<&str> {
        self.opacity.as_deref()
    }

    pub fn set_opacity(&mut self, opacity: Option<String>) {
        self.opacity = opacity;
    }

    pub fn margin_left(&self) -> Option<&str> {
        self.margin_left.as_deref()
    }

    pub fn set_margin_left(&mut self, margin_left: Option<String>) {
        self.margin_left = margin_left;
    }

    /// Clear the slide-related inline overrides (opacity, margin,
    /// visibility), leaving transform for the caller to decide.
    pub fn restore_inline(&mut self) {
        self.opacity = None;
        self.margin_left = None;
        self.visibility = Visibility::Inherit;
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    // ========== State attributes ==========

    pub fn set_attr(&mut self, key: &'static str, value: &str) {
        self.attrs.insert(key, value.to_string());
    }

    pub fn remove_attr(&mut self, key: &str) {
        self.attrs.remove(key);
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn has_attr(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    // ========== Custom properties ==========

    /// Write a custom property value exactly as given ("42.3%").
    pub fn set_property(&mut self, prop: &'static str, value: String) {
        self.properties.insert(prop, value);
    }

    pub fn property(&self, prop: &str) -> Option<&str> {
        self.properties.get(prop).map(String::as_str)
    }

    /// Read a percentage property, falling back to the 50% baseline when
    /// the property is missing or unparsable.
    pub fn percent_value(&self, prop: &str) -> f32 {
        self.property(prop)
            .and_then(|raw| raw.trim().strip_suffix('%').map(str::trim))
            .and_then(|raw| raw.parse::<f32>().ok())
            .unwrap_or(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_value_parses_written_values() {
        let mut el = Element::new("root");
        el.set_property("--bg-primeira-cor", "42.5%".to_string());
        assert_eq!(el.percent_value("--bg-primeira-cor"), 42.5);
    }

    #[test]
    fn percent_value_defaults_to_baseline() {
        let mut el = Element::new("root");
        assert_eq!(el.percent_value("--bg-primeira-cor"), 50.0);

        el.set_property("--bg-primeira-cor", "garbage".to_string());
        assert_eq!(el.percent_value("--bg-primeira-cor"), 50.0);
    }

    #[test]
    fn restore_inline_clears_slide_overrides() {
        let mut el = Element::new("fig");
        el.set_opacity(Some("0".to_string()));
        el.set_margin_left(Some("-100px".to_string()));
        el.set_visibility(Visibility::Hidden);
        el.set_transform(Some("translateX(10px)".to_string()));

        el.restore_inline();

        assert!(el.opacity().is_none());
        assert!(el.margin_left().is_none());
        assert_eq!(el.visibility(), Visibility::Inherit);
        // transform is restored separately
        assert!(el.transform().is_some());
    }
}
