//! The imperative shell around the reducer.
//!
//! `TransitionMachine` owns the mutable state id, applies reducer output to
//! the host's render surface, and arms the one-frame follow-up dispatch the
//! reducer asks for. It is the single writer of both the state id and the
//! pending-timer handle; re-entrant dispatches from observer callbacks are
//! queued and processed strictly in sequence.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use chrono::Utc;
use tracing::debug;

use crate::core::{
    reduce, Action, ActionId, ComponentProps, DispatchRecord, StateId, TransitionLog,
    TransitionState,
};
use crate::schedule::{FrameClock, FrameTimer};
use crate::snapshot::{Snapshot, SnapshotError};

/// Receives every presentation the machine applies.
pub type RenderSink = Box<dyn FnMut(&TransitionState)>;

/// Notified when a transition completes.
pub type CompleteHandler = Box<dyn FnMut()>;

struct Inner {
    clock: Rc<dyn FrameClock>,
    state_id: StateId,
    props: ComponentProps,
    applied: TransitionState,
    pending: Option<FrameTimer>,
    render: Option<RenderSink>,
    on_complete: Option<CompleteHandler>,
    log: TransitionLog,
    queue: VecDeque<ActionId>,
    dispatching: bool,
    torn_down: bool,
}

/// Drives the transition lifecycle for one component instance.
///
/// The machine is cheap to clone: clones share the same instance, which is
/// how frame callbacks and event-filter handlers reach back into it. The
/// model is single-threaded; the machine is not `Send`.
///
/// # Example
///
/// ```rust
/// use segue::core::{ComponentProps, StateId, Style};
/// use segue::machine::TransitionMachine;
/// use segue::schedule::ManualFrameClock;
/// use std::rc::Rc;
///
/// let clock = Rc::new(ManualFrameClock::new());
/// let props = ComponentProps::new()
///     .with_style(Style::new().with("opacity", "0"))
///     .with_enter_style(
///         Style::new()
///             .with("opacity", "1")
///             .with("transition", "opacity 300ms"),
///     );
///
/// let machine = TransitionMachine::new(props.clone(), Rc::clone(&clock));
/// machine.on_mount();
/// assert_eq!(machine.state_id(), StateId::Exited);
///
/// // The active flag flips: one frame later the transition starts.
/// machine.on_props_changed(props.with_active(true));
/// assert_eq!(machine.state_id(), StateId::EnterPending);
///
/// clock.tick();
/// assert_eq!(machine.state_id(), StateId::Entering);
/// assert!(machine.transition_state().in_transition);
/// ```
#[derive(Clone)]
pub struct TransitionMachine {
    inner: Rc<RefCell<Inner>>,
}

impl TransitionMachine {
    /// Create a machine in the initial state the props call for.
    ///
    /// The initial state is computed immediately so the host's first render
    /// already shows the resting posture, without a flash.
    pub fn new<C: FrameClock + 'static>(props: ComponentProps, clock: Rc<C>) -> Self {
        let action = Action::new(ActionId::Init, props.action_props());
        let result =
            reduce(StateId::EntryPoint, &action).expect("Init always applies to the entry point");
        Self {
            inner: Rc::new(RefCell::new(Inner {
                clock,
                state_id: result.state.id,
                props,
                applied: result.state.presentation(),
                pending: None,
                render: None,
                on_complete: None,
                log: TransitionLog::new(),
                queue: VecDeque::new(),
                dispatching: false,
                torn_down: false,
            })),
        }
    }

    /// Register the render surface. Called with each presentation that
    /// differs from the previously applied one.
    pub fn set_render(&self, sink: impl FnMut(&TransitionState) + 'static) {
        self.inner.borrow_mut().render = Some(Box::new(sink));
    }

    /// Register the completion observer. Invoked exactly once per dispatch
    /// that finishes a transition, before the presentation update for that
    /// dispatch is applied.
    pub fn set_on_transition_complete(&self, handler: impl FnMut() + 'static) {
        self.inner.borrow_mut().on_complete = Some(Box::new(handler));
    }

    /// The currently applied presentation.
    pub fn transition_state(&self) -> TransitionState {
        self.inner.borrow().applied.clone()
    }

    pub fn state_id(&self) -> StateId {
        self.inner.borrow().state_id
    }

    /// The current value of the boundary flag.
    pub fn active(&self) -> bool {
        self.inner.borrow().props.active
    }

    /// The log of applied dispatches.
    pub fn log(&self) -> TransitionLog {
        self.inner.borrow().log.clone()
    }

    /// The host committed the first render.
    pub fn on_mount(&self) {
        self.dispatch(ActionId::Mount);
    }

    /// The host is about to tear the component down. Cancels any pending
    /// frame dispatch; every dispatch after this is a no-op, including an
    /// already-scheduled frame callback firing late.
    pub fn on_will_unmount(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(timer) = inner.pending.take() {
            timer.cancel();
        }
        inner.queue.clear();
        inner.torn_down = true;
    }

    /// The host's props changed. Dispatches a trigger only when the
    /// `active` flag actually flipped.
    pub fn on_props_changed(&self, next: ComponentProps) {
        let flipped = {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                return;
            }
            let flipped = inner.props.active != next.active;
            inner.props = next;
            flipped
        };
        if flipped {
            self.dispatch(ActionId::TransitionTrigger);
        }
    }

    /// Semantic begin signal, driven by the event filter.
    pub fn transition_begin(&self) {
        self.dispatch(ActionId::TransitionStart);
    }

    /// Semantic complete signal, driven by the event filter.
    pub fn transition_complete(&self) {
        self.dispatch(ActionId::TransitionComplete);
    }

    /// Dispatch an action through the reducer.
    ///
    /// Re-entrant calls (from a completion handler or the render sink) are
    /// queued and processed after the current action finishes, so the state
    /// id is read and written atomically within each action.
    pub fn dispatch(&self, action: ActionId) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                return;
            }
            inner.queue.push_back(action);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }
        loop {
            let next = self.inner.borrow_mut().queue.pop_front();
            let Some(action) = next else {
                break;
            };
            self.run(action);
        }
        self.inner.borrow_mut().dispatching = false;
    }

    fn run(&self, action: ActionId) {
        let (from, result) = {
            let inner = self.inner.borrow();
            if inner.torn_down {
                return;
            }
            let act = Action::new(action, inner.props.action_props());
            (inner.state_id, reduce(inner.state_id, &act))
        };
        let Some(result) = result else {
            debug!(action = action.name(), state = from.name(), "dispatch ignored");
            return;
        };
        debug!(
            action = action.name(),
            from = from.name(),
            to = result.state.id.name(),
            "dispatch"
        );

        // Completion observers see the machine in its pre-update state.
        if result.completed {
            self.notify_complete();
        }

        let (changed, presentation) = {
            let mut inner = self.inner.borrow_mut();
            if inner.torn_down {
                // Torn down from inside the completion handler.
                return;
            }
            inner.state_id = result.state.id;
            if let Some(timer) = inner.pending.take() {
                timer.cancel();
            }
            inner.log = inner.log.record(DispatchRecord {
                from,
                to: result.state.id,
                action,
                timestamp: Utc::now(),
            });
            let presentation = result.state.presentation();
            let changed = !presentation.same_appearance(&inner.applied);
            if changed {
                inner.applied = presentation.clone();
            }
            (changed, presentation)
        };

        if changed {
            self.render(&presentation);
        }
        // The follow-up timer is armed only once the presentation update
        // has been committed; an unchanged presentation commits trivially.
        if let Some(pending) = result.pending {
            self.arm(pending);
        }
    }

    fn notify_complete(&self) {
        let handler = self.inner.borrow_mut().on_complete.take();
        if let Some(mut handler) = handler {
            handler();
            let mut inner = self.inner.borrow_mut();
            if inner.on_complete.is_none() {
                inner.on_complete = Some(handler);
            }
        }
    }

    fn render(&self, presentation: &TransitionState) {
        let sink = self.inner.borrow_mut().render.take();
        if let Some(mut sink) = sink {
            sink(presentation);
            let mut inner = self.inner.borrow_mut();
            if inner.render.is_none() {
                inner.render = Some(sink);
            }
        }
    }

    fn arm(&self, action: ActionId) {
        let clock = {
            let inner = self.inner.borrow();
            if inner.torn_down {
                return;
            }
            Rc::clone(&inner.clock)
        };
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        let timer = FrameTimer::start(&clock, 1, move || {
            // The machine may be gone or torn down by the time the frame
            // arrives; both make this a no-op.
            if let Some(inner) = weak.upgrade() {
                TransitionMachine { inner }.dispatch(action);
            }
        });
        let mut inner = self.inner.borrow_mut();
        if inner.torn_down {
            timer.cancel();
            return;
        }
        inner.pending = Some(timer);
    }

    /// Capture a serializable snapshot of the machine.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.borrow();
        Snapshot::capture(inner.state_id, inner.props.active, inner.log.clone())
    }

    /// Rebuild a machine from a snapshot.
    ///
    /// In-flight states resume at the resting destination of their
    /// direction. When the given props disagree with the resumed direction
    /// (the flag changed while the snapshot was parked), a trigger is
    /// dispatched immediately so the restored component animates to the
    /// current truth.
    pub fn restore<C: FrameClock + 'static>(
        snapshot: &Snapshot,
        props: ComponentProps,
        clock: Rc<C>,
    ) -> Result<Self, SnapshotError> {
        let state_id = snapshot.resume_state()?;
        let state = crate::core::State::of(state_id, &props.action_props());
        let machine = Self {
            inner: Rc::new(RefCell::new(Inner {
                clock,
                state_id,
                props,
                applied: state.presentation(),
                pending: None,
                render: None,
                on_complete: None,
                log: snapshot.log.clone(),
                queue: VecDeque::new(),
                dispatching: false,
                torn_down: false,
            })),
        };
        if machine.active() != state_id.is_active() {
            machine.dispatch(ActionId::TransitionTrigger);
        }
        Ok(machine)
    }
}
