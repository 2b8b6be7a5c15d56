//! Actions dispatched through the transition machine.

use serde::{Deserialize, Serialize};

use crate::core::style::Style;

/// Identifier for each action the reducer understands.
///
/// Dispatching anything outside this enumeration is impossible by
/// construction; an action that does not apply to the current state is a
/// deliberate no-op, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ActionId {
    /// Compute the initial state from the initial props.
    Init,
    /// The host committed the first render.
    Mount,
    /// The external `active` flag flipped.
    TransitionTrigger,
    /// Begin the transition proper (auto-dispatched one frame after a
    /// trigger, or driven by a filtered native transition-start event).
    TransitionStart,
    /// The transition finished (driven by a filtered native transition-end
    /// event).
    TransitionComplete,
}

impl ActionId {
    /// Get the action's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::Mount => "Mount",
            Self::TransitionTrigger => "TransitionTrigger",
            Self::TransitionStart => "TransitionStart",
            Self::TransitionComplete => "TransitionComplete",
        }
    }
}

/// The reducer-relevant subset of the component props.
///
/// Every dispatch carries a snapshot of these, so presentation stays a pure
/// function of `(StateId, ActionProps)`. The field set is fixed by
/// [`ACTION_PROP_KEYS`]; a unit test keeps the two in sync.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionProps {
    /// The boolean driving the transition.
    pub active: bool,
    /// Base style, always applied.
    pub style: Style,
    /// Layered on top of the base while resting entered.
    pub active_style: Option<Style>,
    /// Target style while entering. Defaults to `active_style`.
    pub enter_style: Option<Style>,
    /// Target style while exiting.
    pub exit_style: Option<Style>,
    /// "Before" posture painted for one frame ahead of an enter.
    pub enter_init_style: Option<Style>,
    /// "Before" posture painted for one frame ahead of an exit.
    /// Defaults to the entered posture.
    pub exit_init_style: Option<Style>,
    /// Base class name, always applied.
    pub class_name: Option<String>,
    /// Appended while resting entered.
    pub active_class_name: Option<String>,
    /// Appended while an enter is pending or running.
    pub enter_class_name: Option<String>,
    /// Appended while an exit is pending or running.
    pub exit_class_name: Option<String>,
}

/// Field names of [`ActionProps`], in declaration order.
///
/// This is the fixed key list used to pick the reducer-relevant subset out
/// of the full component props.
pub const ACTION_PROP_KEYS: &[&str] = &[
    "active",
    "style",
    "active_style",
    "enter_style",
    "exit_style",
    "enter_init_style",
    "exit_init_style",
    "class_name",
    "active_class_name",
    "enter_class_name",
    "exit_class_name",
];

/// An action id together with the props snapshot it was dispatched with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub props: ActionProps,
}

impl Action {
    pub fn new(id: ActionId, props: ActionProps) -> Self {
        Self { id, props }
    }
}
