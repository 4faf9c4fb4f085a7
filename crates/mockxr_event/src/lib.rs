//! # mockxr_event - Runtime event delivery
//!
//! A mutex-guarded FIFO queue generic over its event type. Events come in
//! two classes: ordinary events surfaced to the polling application, and
//! intercepted events consumed inside the queue by a registered callback
//! (the hook a test driver uses to observe the runtime). Intercepted events
//! are never returned from [`EventQueue::poll`]; without a callback they are
//! silently dropped.

use parking_lot::Mutex;
use std::collections::VecDeque;

/// Splits an event stream into surfaced and intercepted events
pub trait Interceptable: Sized {
    /// Payload handed to the intercept callback
    type Intercepted;

    /// Claim this event for interception, or give it back for delivery
    fn intercept(self) -> Result<Self::Intercepted, Self>;
}

/// Callback invoked for each intercepted event, in queue order
pub type InterceptCallback<E> =
    Box<dyn FnMut(<E as Interceptable>::Intercepted) + Send>;

/// FIFO queue of runtime events
pub struct EventQueue<E: Interceptable> {
    queue: Mutex<VecDeque<E>>,
    callback: Mutex<Option<InterceptCallback<E>>>,
}

impl<E: Interceptable> EventQueue<E> {
    /// Create an empty queue with no intercept callback
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            callback: Mutex::new(None),
        }
    }

    /// Append an event
    pub fn push(&self, event: E) {
        self.queue.lock().push_back(event);
    }

    /// Pop the next surfaced event.
    ///
    /// Intercepted events encountered on the way are fed to the callback
    /// (or dropped) and polling continues, so a single call can consume
    /// several queue entries.
    pub fn poll(&self) -> Option<E> {
        loop {
            let next = self.queue.lock().pop_front()?;
            match next.intercept() {
                Ok(intercepted) => {
                    if let Some(callback) = self.callback.lock().as_mut() {
                        callback(intercepted);
                    }
                }
                Err(event) => return Some(event),
            }
        }
    }

    /// Install or clear the intercept callback
    pub fn set_intercept_callback(&self, callback: Option<InterceptCallback<E>>) {
        *self.callback.lock() = callback;
    }

    /// Number of queued events, intercepted ones included
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Drop everything still queued
    pub fn clear(&self) {
        self.queue.lock().clear();
    }
}

impl<E: Interceptable> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{EventQueue, InterceptCallback, Interceptable};
}
