//! The pure reducer at the heart of the transition lifecycle.
//!
//! `reduce` is a total, deterministic, side-effect-free mapping from
//! `(StateId, Action)` to the next state. It never mutates anything and it
//! never schedules anything itself: when a follow-up dispatch is needed one
//! frame later, it says so through [`ReduceResult::pending`] and the
//! imperative shell arms the timer.

use serde::{Deserialize, Serialize};

use crate::core::action::{Action, ActionId};
use crate::core::state::{State, StateId};

/// Outcome of a single reduction step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReduceResult {
    /// The next state, presentation included.
    pub state: State,
    /// Re-dispatch this action automatically after one frame. Used for the
    /// forced-reflow kickoff: the browser must paint the "before" posture
    /// before the target style lands, or the CSS transition never runs.
    pub pending: Option<ActionId>,
    /// The transition just finished; notify completion observers.
    pub completed: bool,
}

/// Map `(current, action)` to the next state.
///
/// Returns `None` when the action does not apply to the current state, for
/// example a stray `TransitionComplete` while resting. Callers must treat
/// `None` as "do nothing": no state change, no render, no notification.
///
/// # Example
///
/// ```rust
/// use segue::core::{reduce, Action, ActionId, ActionProps, StateId};
///
/// let props = ActionProps::default();
///
/// // The initial state comes from the props: inactive mounts exited.
/// let init = reduce(
///     StateId::EntryPoint,
///     &Action::new(ActionId::Init, props.clone()),
/// )
/// .unwrap();
/// assert_eq!(init.state.id, StateId::ExitedInit);
///
/// // A stray completion while resting is a no-op.
/// let stray = reduce(
///     StateId::Exited,
///     &Action::new(ActionId::TransitionComplete, props),
/// );
/// assert!(stray.is_none());
/// ```
pub fn reduce(current: StateId, action: &Action) -> Option<ReduceResult> {
    let props = &action.props;
    match action.id {
        ActionId::Init => match current {
            StateId::EntryPoint => {
                let id = if props.active {
                    StateId::EnteredInit
                } else {
                    StateId::ExitedInit
                };
                Some(settle(State::of(id, props)))
            }
            _ => None,
        },

        ActionId::Mount => match current {
            StateId::ExitedInit => Some(settle(State::of(StateId::Exited, props))),
            StateId::EnteredInit => Some(settle(State::of(StateId::Entered, props))),
            _ => None,
        },

        ActionId::TransitionTrigger => match current {
            // Resting inactive, flag now on: paint the "before" posture and
            // kick off one frame later.
            StateId::ExitedInit | StateId::Exited if props.active => Some(ReduceResult {
                state: State::of(StateId::EnterPending, props),
                pending: Some(ActionId::TransitionStart),
                completed: false,
            }),
            // Resting active, flag now off.
            StateId::EnteredInit | StateId::Entered if !props.active => Some(ReduceResult {
                state: State::of(StateId::ExitPending, props),
                pending: Some(ActionId::TransitionStart),
                completed: false,
            }),
            // Reversed while still pending: nothing has moved visually, so
            // the machine is already at the reversed destination.
            StateId::EnterPending if !props.active => Some(ReduceResult {
                state: State::of(StateId::Exited, props),
                pending: None,
                completed: true,
            }),
            StateId::ExitPending if props.active => Some(ReduceResult {
                state: State::of(StateId::Entered, props),
                pending: None,
                completed: true,
            }),
            // Reversed mid-flight: cross directly to the opposite
            // transitioning state. The element's properties are already
            // transitioning, so CSS continues from the current computed
            // values without another reflow frame.
            StateId::Entering if !props.active => Some(settle(State::of(StateId::Exiting, props))),
            StateId::Exiting if props.active => Some(settle(State::of(StateId::Entering, props))),
            _ => None,
        },

        ActionId::TransitionStart => match current {
            StateId::EnterPending => Some(settle(State::of(StateId::Entering, props))),
            StateId::ExitPending => Some(settle(State::of(StateId::Exiting, props))),
            // Already transitioning (the native begin event arrived after
            // the frame kickoff): nothing to do.
            _ => None,
        },

        ActionId::TransitionComplete => match current {
            StateId::Entering => Some(ReduceResult {
                state: State::of(StateId::Entered, props),
                pending: None,
                completed: true,
            }),
            StateId::Exiting => Some(ReduceResult {
                state: State::of(StateId::Exited, props),
                pending: None,
                completed: true,
            }),
            _ => None,
        },
    }
}

fn settle(state: State) -> ReduceResult {
    ReduceResult {
        state,
        pending: None,
        completed: false,
    }
}
