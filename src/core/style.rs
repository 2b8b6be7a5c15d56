//! CSS style values carried by transition states.
//!
//! A `Style` is an ordered mapping from CSS property names to values.
//! States produce styles by layering phase-specific overlays on top of a
//! base style; the machine decides whether a new style needs a render by
//! shallow key/value comparison.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered mapping of CSS property names to values.
///
/// # Example
///
/// ```rust
/// use segue::core::Style;
///
/// let mut style = Style::new();
/// style.set("opacity", "0");
/// style.set("transition", "opacity 300ms ease");
///
/// assert_eq!(style.get("opacity"), Some("0"));
/// assert_eq!(style.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    properties: BTreeMap<String, String>,
}

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Chainable variant of [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Look up a property value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Check whether a property is present.
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate over `(property, value)` pairs in property order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `overlay` on top of this style. Overlay values win on
    /// conflicting properties; neither input is modified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use segue::core::Style;
    ///
    /// let base = Style::new().with("opacity", "0").with("display", "block");
    /// let target = Style::new().with("opacity", "1");
    ///
    /// let merged = base.merged(&target);
    /// assert_eq!(merged.get("opacity"), Some("1"));
    /// assert_eq!(merged.get("display"), Some("block"));
    /// ```
    pub fn merged(&self, overlay: &Style) -> Style {
        let mut properties = self.properties.clone();
        for (property, value) in &overlay.properties {
            properties.insert(property.clone(), value.clone());
        }
        Style { properties }
    }

    /// Shallow key/value comparison.
    ///
    /// Styles are multi-key mappings, so the machine compares them entry by
    /// entry when deciding whether a render can be skipped. Class names and
    /// the in-transition flag are scalars and compare with `==` instead.
    pub fn shallow_eq(&self, other: &Style) -> bool {
        if self.properties.len() != other.properties.len() {
            return false;
        }
        self.properties
            .iter()
            .all(|(property, value)| other.get(property) == Some(value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (property, value) in iter {
            style.set(property, value);
        }
        style
    }
}
