//! Frame scheduling for deferred dispatches.
//!
//! CSS transitions only animate when the browser has painted the "before"
//! styles ahead of the "after" styles. The machine therefore defers its
//! follow-up dispatch by one rendering frame, counted in display refresh
//! ticks rather than wall-clock time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

/// A one-shot frame callback.
pub type FrameCallback = Box<dyn FnOnce()>;

/// A source of rendering-frame callbacks: the host's
/// `requestAnimationFrame` equivalent.
///
/// The model is single-threaded and cooperative. Implementations must
/// invoke callbacks from a later frame, never from within
/// [`request_frame`](Self::request_frame) itself.
pub trait FrameClock {
    fn request_frame(&self, callback: FrameCallback);
}

/// A frame clock driven by hand.
///
/// Each [`tick`](Self::tick) is one display refresh: it runs every callback
/// requested before the tick. Callbacks requested while a tick runs are
/// delivered on the next one, like the browser primitive.
///
/// # Example
///
/// ```rust
/// use segue::schedule::{FrameClock, ManualFrameClock};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let clock = ManualFrameClock::new();
/// let fired = Rc::new(Cell::new(false));
///
/// let flag = Rc::clone(&fired);
/// clock.request_frame(Box::new(move || flag.set(true)));
///
/// assert!(!fired.get());
/// clock.tick();
/// assert!(fired.get());
/// ```
#[derive(Default)]
pub struct ManualFrameClock {
    queue: RefCell<Vec<FrameCallback>>,
}

impl ManualFrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver one frame.
    pub fn tick(&self) {
        let callbacks: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        trace!(callbacks = callbacks.len(), "frame tick");
        for callback in callbacks {
            callback();
        }
    }

    /// How many callbacks are waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl FrameClock for ManualFrameClock {
    fn request_frame(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push(callback);
    }
}

struct TimerState {
    cancelled: Cell<bool>,
    fired: Cell<bool>,
}

/// A cancellable timer counting rendering frames.
///
/// The timer owns no thread and no wall clock: it re-requests a frame from
/// the [`FrameClock`] until the requested count has elapsed, then runs its
/// callback once.
pub struct FrameTimer {
    state: Rc<TimerState>,
}

impl FrameTimer {
    /// Fire `callback` after at least `frames` frames have elapsed.
    ///
    /// A count of zero is treated as one: the callback never runs
    /// synchronously from `start`.
    pub fn start<C, F>(clock: &Rc<C>, frames: u32, callback: F) -> FrameTimer
    where
        C: FrameClock + ?Sized + 'static,
        F: FnOnce() + 'static,
    {
        let state = Rc::new(TimerState {
            cancelled: Cell::new(false),
            fired: Cell::new(false),
        });
        arm(
            Rc::clone(clock),
            Rc::clone(&state),
            frames.max(1),
            Box::new(callback),
        );
        FrameTimer { state }
    }

    /// Cancel the timer. Idempotent; a no-op once the callback has fired.
    pub fn cancel(&self) {
        if !self.state.fired.get() && !self.state.cancelled.get() {
            trace!("frame timer cancelled");
        }
        self.state.cancelled.set(true);
    }

    /// Whether the timer is still waiting to fire.
    pub fn is_live(&self) -> bool {
        !self.state.cancelled.get() && !self.state.fired.get()
    }
}

fn arm<C: FrameClock + ?Sized + 'static>(
    clock: Rc<C>,
    state: Rc<TimerState>,
    remaining: u32,
    callback: Box<dyn FnOnce()>,
) {
    let next_clock = Rc::clone(&clock);
    clock.request_frame(Box::new(move || {
        if state.cancelled.get() {
            return;
        }
        if remaining > 1 {
            arm(next_clock, state, remaining - 1, callback);
        } else {
            state.fired.set(true);
            callback();
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce()) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn fires_after_the_requested_frame_count() {
        let clock = Rc::new(ManualFrameClock::new());
        let (count, callback) = counter();

        let timer = FrameTimer::start(&clock, 2, callback);

        clock.tick();
        assert_eq!(count.get(), 0);
        assert!(timer.is_live());

        clock.tick();
        assert_eq!(count.get(), 1);
        assert!(!timer.is_live());
    }

    #[test]
    fn zero_frames_still_waits_one_frame() {
        let clock = Rc::new(ManualFrameClock::new());
        let (count, callback) = counter();

        let _timer = FrameTimer::start(&clock, 0, callback);
        assert_eq!(count.get(), 0);

        clock.tick();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancel_prevents_the_callback() {
        let clock = Rc::new(ManualFrameClock::new());
        let (count, callback) = counter();

        let timer = FrameTimer::start(&clock, 1, callback);
        timer.cancel();

        clock.tick();
        assert_eq!(count.get(), 0);
        assert!(!timer.is_live());
    }

    #[test]
    fn cancel_is_idempotent() {
        let clock = Rc::new(ManualFrameClock::new());
        let (count, callback) = counter();

        let timer = FrameTimer::start(&clock, 1, callback);
        timer.cancel();
        timer.cancel();
        clock.tick();
        timer.cancel();

        assert_eq!(count.get(), 0);
    }

    #[test]
    fn cancel_after_firing_is_a_noop() {
        let clock = Rc::new(ManualFrameClock::new());
        let (count, callback) = counter();

        let timer = FrameTimer::start(&clock, 1, callback);
        clock.tick();
        assert_eq!(count.get(), 1);

        timer.cancel();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn callback_runs_at_most_once() {
        let clock = Rc::new(ManualFrameClock::new());
        let (count, callback) = counter();

        let _timer = FrameTimer::start(&clock, 1, callback);
        clock.tick();
        clock.tick();
        clock.tick();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn callbacks_requested_during_a_tick_wait_for_the_next() {
        let clock = Rc::new(ManualFrameClock::new());
        let count = Rc::new(Cell::new(0));

        let requeue_clock = Rc::clone(&clock);
        let requeue_count = Rc::clone(&count);
        clock.request_frame(Box::new(move || {
            requeue_count.set(requeue_count.get() + 1);
            let inner_count = Rc::clone(&requeue_count);
            requeue_clock.request_frame(Box::new(move || {
                inner_count.set(inner_count.get() + 1);
            }));
        }));

        clock.tick();
        assert_eq!(count.get(), 1);
        assert_eq!(clock.pending(), 1);

        clock.tick();
        assert_eq!(count.get(), 2);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn works_through_a_dyn_clock() {
        let manual = Rc::new(ManualFrameClock::new());
        let clock: Rc<dyn FrameClock> = manual.clone();
        let (count, callback) = counter();

        let _timer = FrameTimer::start(&clock, 1, callback);
        manual.tick();

        assert_eq!(count.get(), 1);
    }
}
