//! Segue: a deterministic state machine for CSS transition lifecycles
//!
//! Segue drives the class/style lifecycle behind CSS-animated UI
//! components: given a component whose `active` flag toggles, it decides
//! which presentation to show next, when to wait one rendering frame so the
//! browser paints the "before" posture (the forced-reflow kickoff), and how
//! to turn noisy native transition events into the two signals that
//! actually matter.
//!
//! The crate follows a "pure core, imperative shell" split. The core is a
//! reducer: a total, deterministic, side-effect-free mapping from
//! `(state, action)` to the next state. The shell is a small machine that
//! owns the mutable state id, applies presentations to the host, and arms
//! frame timers.
//!
//! # Core Concepts
//!
//! - **Reducer**: pure lifecycle logic via [`core::reduce`]
//! - **Machine**: the imperative shell, [`machine::TransitionMachine`]
//! - **Frame scheduling**: cancellable frame timers over a host
//!   [`schedule::FrameClock`]
//! - **Event filtering**: [`observer::TransitionObserver`] rejects
//!   descendant-origin and off-marker events
//!
//! # Example
//!
//! ```rust
//! use segue::core::{ComponentProps, StateId, Style};
//! use segue::machine::TransitionMachine;
//! use segue::schedule::ManualFrameClock;
//! use std::rc::Rc;
//!
//! let clock = Rc::new(ManualFrameClock::new());
//! let props = ComponentProps::new()
//!     .with_style(Style::new().with("opacity", "0"))
//!     .with_enter_style(
//!         Style::new()
//!             .with("opacity", "1")
//!             .with("transition", "opacity 300ms"),
//!     );
//!
//! let machine = TransitionMachine::new(props.clone(), Rc::clone(&clock));
//! machine.on_mount();
//!
//! machine.on_props_changed(props.with_active(true));
//! assert_eq!(machine.state_id(), StateId::EnterPending);
//!
//! // One frame later the enter transition is running.
//! clock.tick();
//! assert_eq!(machine.state_id(), StateId::Entering);
//! ```

pub mod core;
pub mod machine;
pub mod observer;
pub mod schedule;
pub mod snapshot;
pub mod validate;

// Re-export commonly used types
pub use crate::core::{
    reduce, Action, ActionId, ActionProps, ComponentProps, ReduceResult, State, StateId, Style,
    TransitionInfo, TransitionLog, TransitionState, TransitionTiming,
};
pub use crate::machine::TransitionMachine;
pub use crate::observer::{TransitionEvent, TransitionObserver};
pub use crate::schedule::{FrameClock, FrameTimer, ManualFrameClock};
pub use crate::snapshot::Snapshot;
