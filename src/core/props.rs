//! Component properties consumed by the transition system.

use serde::{Deserialize, Serialize};

use crate::core::action::ActionProps;
use crate::core::style::Style;
use crate::core::timing::{TransitionInfo, TransitionTiming};

/// Everything the transition system needs to know about the component.
///
/// The reducer sees only the [`ActionProps`] subset; the timing entries
/// exist for the event filter, which needs to know which CSS property marks
/// the transition's start and which marks its end.
///
/// # Example
///
/// ```rust
/// use segue::core::{ComponentProps, Style, TransitionTiming};
///
/// let props = ComponentProps::new()
///     .with_style(Style::new().with("opacity", "0"))
///     .with_enter_style(
///         Style::new()
///             .with("opacity", "1")
///             .with("transition", "opacity 300ms"),
///     )
///     .with_timings(vec![TransitionTiming::new("opacity", 300)]);
///
/// assert!(!props.active);
/// assert_eq!(props.action_props().style.get("opacity"), Some("0"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentProps {
    pub active: bool,
    pub style: Style,
    pub active_style: Option<Style>,
    pub enter_style: Option<Style>,
    pub exit_style: Option<Style>,
    pub enter_init_style: Option<Style>,
    pub exit_init_style: Option<Style>,
    pub class_name: Option<String>,
    pub active_class_name: Option<String>,
    pub enter_class_name: Option<String>,
    pub exit_class_name: Option<String>,
    /// Per-property timings of the configured transition.
    pub timings: Vec<TransitionTiming>,
}

impl ComponentProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_active_style(mut self, style: Style) -> Self {
        self.active_style = Some(style);
        self
    }

    pub fn with_enter_style(mut self, style: Style) -> Self {
        self.enter_style = Some(style);
        self
    }

    pub fn with_exit_style(mut self, style: Style) -> Self {
        self.exit_style = Some(style);
        self
    }

    pub fn with_enter_init_style(mut self, style: Style) -> Self {
        self.enter_init_style = Some(style);
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_timings(mut self, timings: Vec<TransitionTiming>) -> Self {
        self.timings = timings;
        self
    }

    /// Select the reducer-relevant subset (the
    /// [`ACTION_PROP_KEYS`](crate::core::ACTION_PROP_KEYS) fields).
    pub fn action_props(&self) -> ActionProps {
        ActionProps {
            active: self.active,
            style: self.style.clone(),
            active_style: self.active_style.clone(),
            enter_style: self.enter_style.clone(),
            exit_style: self.exit_style.clone(),
            enter_init_style: self.enter_init_style.clone(),
            exit_init_style: self.exit_init_style.clone(),
            class_name: self.class_name.clone(),
            active_class_name: self.active_class_name.clone(),
            enter_class_name: self.enter_class_name.clone(),
            exit_class_name: self.exit_class_name.clone(),
        }
    }

    /// Derive the event filter's snapshot for the current phase.
    pub fn transition_info(&self, in_transition: bool) -> TransitionInfo {
        TransitionInfo::from_timings(&self.timings, in_transition)
    }
}
