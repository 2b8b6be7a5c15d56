//! Transition lifecycle states.
//!
//! The lifecycle is a fixed enumeration: there is no user-assembled state
//! graph. All methods here are pure; the presentation a state renders is a
//! function of the state id and the action props alone.

use serde::{Deserialize, Serialize};

use crate::core::action::ActionProps;
use crate::core::style::Style;

/// Identifier for each state in the transition lifecycle.
///
/// ```text
/// EntryPoint --Init--> ExitedInit/EnteredInit --Mount--> Exited/Entered
///
/// Exited --Trigger--> EnterPending --Start--> Entering --Complete--> Entered
/// Entered --Trigger--> ExitPending --Start--> Exiting --Complete--> Exited
/// ```
///
/// A trigger while pending returns to the opposite resting state; a trigger
/// mid-flight crosses directly to the opposite transitioning state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StateId {
    /// Virtual start, before `Init` has computed the initial state.
    EntryPoint,
    /// Mounted markup, inactive, first paint not yet committed.
    ExitedInit,
    /// Mounted markup, active, first paint not yet committed.
    EnteredInit,
    /// Inactive resting baseline.
    Exited,
    /// Active resting baseline.
    Entered,
    /// Active flag flipped on; waiting one frame so the browser paints the
    /// "before" posture first.
    EnterPending,
    /// Enter transition running.
    Entering,
    /// Active flag flipped off; waiting one frame.
    ExitPending,
    /// Exit transition running.
    Exiting,
}

impl StateId {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::EntryPoint => "EntryPoint",
            Self::ExitedInit => "ExitedInit",
            Self::EnteredInit => "EnteredInit",
            Self::Exited => "Exited",
            Self::Entered => "Entered",
            Self::EnterPending => "EnterPending",
            Self::Entering => "Entering",
            Self::ExitPending => "ExitPending",
            Self::Exiting => "Exiting",
        }
    }

    /// Resting states are stable fixed points: only a direction-changing
    /// trigger moves the machine out of them.
    pub fn is_resting(&self) -> bool {
        matches!(
            self,
            Self::ExitedInit | Self::EnteredInit | Self::Exited | Self::Entered
        )
    }

    /// Waiting for the one-frame reflow kickoff.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::EnterPending | Self::ExitPending)
    }

    /// A CSS transition is actively running in this state.
    pub fn in_transition(&self) -> bool {
        matches!(self, Self::Entering | Self::Exiting)
    }

    /// The direction this state belongs to: `true` for the entered side
    /// (resting entered, or travelling towards it).
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::EnteredInit | Self::Entered | Self::EnterPending | Self::Entering
        )
    }
}

/// A lifecycle state together with the presentation it renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub style: Style,
    pub class_name: Option<String>,
    pub in_transition: bool,
}

impl State {
    /// Compute the state value for `id` under the given props.
    ///
    /// Style layering per phase:
    /// - resting exited: base style only
    /// - resting entered: base + `active_style`
    /// - enter pending: base + `enter_init_style` (default: the exited posture)
    /// - entering: base + `enter_style` (default: `active_style`)
    /// - exit pending: base + `exit_init_style` (default: the entered posture)
    /// - exiting: base + `exit_style`
    ///
    /// Class names compose the same way: the base `class_name` plus the
    /// phase class for the direction in flight.
    pub fn of(id: StateId, props: &ActionProps) -> State {
        let (style, class_name) = match id {
            StateId::EntryPoint | StateId::ExitedInit | StateId::Exited => {
                (props.style.clone(), props.class_name.clone())
            }
            StateId::EnteredInit | StateId::Entered => (
                overlay(&props.style, props.active_style.as_ref()),
                join_class(&props.class_name, &props.active_class_name),
            ),
            StateId::EnterPending => (
                overlay(&props.style, props.enter_init_style.as_ref()),
                join_class(&props.class_name, &props.enter_class_name),
            ),
            StateId::Entering => (
                overlay(
                    &props.style,
                    props.enter_style.as_ref().or(props.active_style.as_ref()),
                ),
                join_class(&props.class_name, &props.enter_class_name),
            ),
            StateId::ExitPending => (
                overlay(
                    &props.style,
                    props
                        .exit_init_style
                        .as_ref()
                        .or(props.active_style.as_ref()),
                ),
                join_class(&props.class_name, &props.exit_class_name),
            ),
            StateId::Exiting => (
                overlay(&props.style, props.exit_style.as_ref()),
                join_class(&props.class_name, &props.exit_class_name),
            ),
        };
        State {
            id,
            style,
            class_name,
            in_transition: id.in_transition(),
        }
    }

    /// The externally observable slice of this state.
    pub fn presentation(&self) -> TransitionState {
        TransitionState {
            style: self.style.clone(),
            class_name: self.class_name.clone(),
            in_transition: self.in_transition,
        }
    }
}

fn overlay(base: &Style, layer: Option<&Style>) -> Style {
    match layer {
        Some(layer) => base.merged(layer),
        None => base.clone(),
    }
}

fn join_class(base: &Option<String>, phase: &Option<String>) -> Option<String> {
    match (base, phase) {
        (Some(base), Some(phase)) => Some(format!("{base} {phase}")),
        (Some(base), None) => Some(base.clone()),
        (None, Some(phase)) => Some(phase.clone()),
        (None, None) => None,
    }
}

/// What the host renders: the computed style, class name, and whether a
/// transition is currently running.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionState {
    pub style: Style,
    pub class_name: Option<String>,
    pub in_transition: bool,
}

impl TransitionState {
    /// Render-skip comparison: style by shallow key/value equality, class
    /// name and the in-transition flag by value.
    pub fn same_appearance(&self, other: &TransitionState) -> bool {
        self.style.shallow_eq(&other.style)
            && self.class_name == other.class_name
            && self.in_transition == other.in_transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::ActionProps;

    fn props() -> ActionProps {
        ActionProps {
            active: false,
            style: Style::new().with("display", "block"),
            active_style: Some(Style::new().with("opacity", "1")),
            enter_style: Some(
                Style::new()
                    .with("opacity", "1")
                    .with("transition", "opacity 300ms"),
            ),
            exit_style: Some(
                Style::new()
                    .with("opacity", "0")
                    .with("transition", "opacity 300ms"),
            ),
            enter_init_style: Some(Style::new().with("opacity", "0")),
            exit_init_style: None,
            class_name: Some("box".to_string()),
            active_class_name: Some("box-active".to_string()),
            enter_class_name: Some("box-enter".to_string()),
            exit_class_name: Some("box-exit".to_string()),
        }
    }

    #[test]
    fn state_names_are_stable() {
        assert_eq!(StateId::EntryPoint.name(), "EntryPoint");
        assert_eq!(StateId::Entering.name(), "Entering");
        assert_eq!(StateId::ExitPending.name(), "ExitPending");
    }

    #[test]
    fn in_transition_only_while_animating() {
        assert!(StateId::Entering.in_transition());
        assert!(StateId::Exiting.in_transition());
        assert!(!StateId::EnterPending.in_transition());
        assert!(!StateId::Entered.in_transition());
        assert!(!StateId::EntryPoint.in_transition());
    }

    #[test]
    fn resting_states_are_identified() {
        assert!(StateId::Exited.is_resting());
        assert!(StateId::EnteredInit.is_resting());
        assert!(!StateId::Entering.is_resting());
        assert!(!StateId::EnterPending.is_resting());
    }

    #[test]
    fn direction_follows_the_entered_side() {
        assert!(StateId::Entering.is_active());
        assert!(StateId::EnterPending.is_active());
        assert!(!StateId::Exiting.is_active());
        assert!(!StateId::Exited.is_active());
    }

    #[test]
    fn exited_presentation_is_base_only() {
        let state = State::of(StateId::Exited, &props());

        assert_eq!(state.style.get("display"), Some("block"));
        assert_eq!(state.style.get("opacity"), None);
        assert_eq!(state.class_name.as_deref(), Some("box"));
        assert!(!state.in_transition);
    }

    #[test]
    fn entered_presentation_layers_active_style() {
        let state = State::of(StateId::Entered, &props());

        assert_eq!(state.style.get("opacity"), Some("1"));
        assert_eq!(state.class_name.as_deref(), Some("box box-active"));
    }

    #[test]
    fn enter_pending_applies_the_before_posture() {
        let state = State::of(StateId::EnterPending, &props());

        assert_eq!(state.style.get("opacity"), Some("0"));
        assert_eq!(state.class_name.as_deref(), Some("box box-enter"));
        assert!(!state.in_transition);
    }

    #[test]
    fn entering_applies_the_target_style() {
        let state = State::of(StateId::Entering, &props());

        assert_eq!(state.style.get("opacity"), Some("1"));
        assert_eq!(state.style.get("transition"), Some("opacity 300ms"));
        assert!(state.in_transition);
    }

    #[test]
    fn exit_pending_defaults_to_the_entered_posture() {
        // No exit_init_style configured: the "before" posture of an exit is
        // the entered baseline.
        let state = State::of(StateId::ExitPending, &props());

        assert_eq!(state.style.get("opacity"), Some("1"));
        assert_eq!(state.class_name.as_deref(), Some("box box-exit"));
    }

    #[test]
    fn entering_falls_back_to_active_style() {
        let mut p = props();
        p.enter_style = None;

        let state = State::of(StateId::Entering, &p);
        assert_eq!(state.style.get("opacity"), Some("1"));
    }

    #[test]
    fn presentation_is_a_pure_projection() {
        let state = State::of(StateId::Entering, &props());
        let a = state.presentation();
        let b = state.presentation();

        assert!(a.same_appearance(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn same_appearance_uses_scalar_compare_for_class() {
        let a = TransitionState {
            style: Style::new(),
            class_name: Some("box".to_string()),
            in_transition: false,
        };
        let mut b = a.clone();
        b.class_name = Some("box-active".to_string());

        assert!(!a.same_appearance(&b));
    }
}
