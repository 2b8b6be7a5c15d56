//! Filters raw transition events into semantic begin/complete signals.
//!
//! Native transition events are noisy: they bubble up from descendant
//! elements and they fire once per animated CSS property. Only one event
//! marks the logical start of the tracked transition and only one marks its
//! end. The observer forwards every raw event untouched, then applies the
//! semantic filter.

use tracing::debug;

use crate::core::TransitionInfo;

/// A native transition event, reduced to the two fields the filter needs.
///
/// `T` identifies elements; the observer compares the event's target
/// against the element under observation, so descendant-origin events can
/// be told apart.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionEvent<T> {
    pub target: T,
    pub property_name: String,
}

impl<T> TransitionEvent<T> {
    pub fn new(target: T, property_name: impl Into<String>) -> Self {
        Self {
            target,
            property_name: property_name.into(),
        }
    }
}

type EventHandler<T> = Box<dyn FnMut(&TransitionEvent<T>)>;
type SignalHandler = Box<dyn FnMut()>;

/// Watches one element's transition events.
///
/// Raw observers (`on_transition_start` / `on_transition_end`) receive
/// every event unconditionally. Semantic observers (`on_transition_begin` /
/// `on_transition_complete`) only fire when the event passed the filter:
/// right element, transition logically active, and the marker property for
/// that edge.
///
/// # Example
///
/// ```rust
/// use segue::core::TransitionInfo;
/// use segue::observer::{TransitionEvent, TransitionObserver};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let mut observer = TransitionObserver::new("panel");
/// observer.set_info(TransitionInfo::new("width", "height", true));
///
/// let begun = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&begun);
/// observer.set_on_transition_begin(move || flag.set(true));
///
/// observer.transition_start(&TransitionEvent::new("panel", "width"));
/// assert!(begun.get());
/// ```
pub struct TransitionObserver<T: PartialEq> {
    observed: T,
    info: TransitionInfo,
    on_start: Option<EventHandler<T>>,
    on_end: Option<EventHandler<T>>,
    on_begin: Option<SignalHandler>,
    on_complete: Option<SignalHandler>,
}

impl<T: PartialEq> TransitionObserver<T> {
    /// Observe the element identified by `observed`.
    pub fn new(observed: T) -> Self {
        Self {
            observed,
            info: TransitionInfo::default(),
            on_start: None,
            on_end: None,
            on_begin: None,
            on_complete: None,
        }
    }

    /// Replace the transition-info snapshot the filter consults.
    pub fn set_info(&mut self, info: TransitionInfo) {
        self.info = info;
    }

    pub fn info(&self) -> &TransitionInfo {
        &self.info
    }

    /// Raw pass-through for transition-start events.
    pub fn set_on_transition_start(&mut self, handler: impl FnMut(&TransitionEvent<T>) + 'static) {
        self.on_start = Some(Box::new(handler));
    }

    /// Raw pass-through for transition-end events.
    pub fn set_on_transition_end(&mut self, handler: impl FnMut(&TransitionEvent<T>) + 'static) {
        self.on_end = Some(Box::new(handler));
    }

    /// Semantic signal: the tracked transition actually began.
    pub fn set_on_transition_begin(&mut self, handler: impl FnMut() + 'static) {
        self.on_begin = Some(Box::new(handler));
    }

    /// Semantic signal: the tracked transition actually finished.
    pub fn set_on_transition_complete(&mut self, handler: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(handler));
    }

    /// Feed a native transition-start event through the observer.
    pub fn transition_start(&mut self, event: &TransitionEvent<T>) {
        if let Some(handler) = self.on_start.as_mut() {
            handler(event);
        }
        if self.admits(event, self.info.first_property.as_deref()) {
            if let Some(handler) = self.on_begin.as_mut() {
                handler();
            }
        }
    }

    /// Feed a native transition-end event through the observer.
    pub fn transition_end(&mut self, event: &TransitionEvent<T>) {
        if let Some(handler) = self.on_end.as_mut() {
            handler(event);
        }
        if self.admits(event, self.info.last_property.as_deref()) {
            if let Some(handler) = self.on_complete.as_mut() {
                handler();
            }
        }
    }

    fn admits(&self, event: &TransitionEvent<T>, marker: Option<&str>) -> bool {
        if event.target != self.observed {
            debug!(property = %event.property_name, "descendant event rejected");
            return false;
        }
        if !self.info.in_transition {
            debug!(property = %event.property_name, "stale event rejected");
            return false;
        }
        match marker {
            Some(marker) => event.property_name == marker,
            None => false,
        }
    }
}
