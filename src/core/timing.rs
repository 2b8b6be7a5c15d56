//! Transition timing metadata and marker-property derivation.
//!
//! A transition usually animates several CSS properties with different
//! delays and durations. Only two of them matter to the event filter: the
//! property whose transition starts first drives the semantic begin signal,
//! and the property whose transition finishes last drives the semantic
//! complete signal.

use serde::{Deserialize, Serialize};

/// Per-property transition timing, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionTiming {
    /// CSS property name, e.g. `"opacity"`.
    pub property: String,
    /// Delay before the property starts transitioning.
    pub delay_ms: u32,
    /// How long the property transitions for.
    pub duration_ms: u32,
}

impl TransitionTiming {
    pub fn new(property: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            property: property.into(),
            delay_ms: 0,
            duration_ms,
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// When this property's transition finishes, relative to transition
    /// start.
    pub fn end_ms(&self) -> u64 {
        u64::from(self.delay_ms) + u64::from(self.duration_ms)
    }
}

/// The event filter's view of the current transition.
///
/// `first_property` marks the transition's logical start,
/// `last_property` its logical end. `in_transition` gates both: when no
/// transition is logically active, every native event is stale noise.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionInfo {
    pub first_property: Option<String>,
    pub last_property: Option<String>,
    pub in_transition: bool,
}

impl TransitionInfo {
    pub fn new(
        first_property: impl Into<String>,
        last_property: impl Into<String>,
        in_transition: bool,
    ) -> Self {
        Self {
            first_property: Some(first_property.into()),
            last_property: Some(last_property.into()),
            in_transition,
        }
    }

    /// Derive the marker properties from a timing set.
    ///
    /// First = smallest delay, last = largest delay + duration. On a tie the
    /// earliest listed entry wins for first and the latest listed wins for
    /// last, matching the order the browser reports events in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use segue::core::{TransitionInfo, TransitionTiming};
    ///
    /// let timings = [
    ///     TransitionTiming::new("width", 200),
    ///     TransitionTiming::new("height", 300).with_delay(100),
    /// ];
    ///
    /// let info = TransitionInfo::from_timings(&timings, true);
    /// assert_eq!(info.first_property.as_deref(), Some("width"));
    /// assert_eq!(info.last_property.as_deref(), Some("height"));
    /// ```
    pub fn from_timings(timings: &[TransitionTiming], in_transition: bool) -> Self {
        let first_property = timings
            .iter()
            .min_by_key(|timing| timing.delay_ms)
            .map(|timing| timing.property.clone());
        let last_property = timings
            .iter()
            .max_by_key(|timing| timing.end_ms())
            .map(|timing| timing.property.clone());
        Self {
            first_property,
            last_property,
            in_transition,
        }
    }
}
