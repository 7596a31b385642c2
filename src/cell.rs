//! Observable state cells.
//!
//! The state containers in [`crate::state`] keep their mutable state in
//! [`Cell`]s: value holders with change notification, built on
//! [`tokio::sync::watch`]. One-shot events with no current value (alerts,
//! navigation triggers) go through a [`Notifier`] built on
//! [`tokio::sync::broadcast`].
//!
//! Cells are cheap to clone; clones share the underlying channel, so a
//! clone handed to another component observes and mutates the same value.

use std::sync::Arc;
use tokio::sync::{broadcast, watch};

/// A mutable state holder with a current value and change notification.
///
/// Writing through any clone notifies every subscriber. Reads never block.
#[derive(Debug)]
pub struct Cell<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T> Clone for Cell<T> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<T: Clone> Cell<T> {
    /// Create a cell seeded with an initial value.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Subscribe to changes. The receiver observes the current value
    /// immediately via [`watch::Receiver::borrow_and_update`].
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + PartialEq> Cell<T> {
    /// Replace the value only if it differs, returning whether a change
    /// was published. Used where the original pipelines deduplicated
    /// consecutive equal values.
    pub fn set_if_changed(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }
}

impl<T: Clone + Default> Default for Cell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Broadcast channel for one-shot events with no current value.
///
/// Emitting with no live subscribers drops the event silently, matching
/// the fire-and-forget signals the UI binds to.
#[derive(Debug)]
pub struct Notifier<T> {
    tx: broadcast::Sender<T>,
}

impl<T> Clone for Notifier<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T: Clone> Notifier<T> {
    /// Create a notifier with the default buffer.
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create a notifier with an explicit per-subscriber buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Emit an event to all current subscribers.
    pub fn emit(&self, value: T) {
        let _ = self.tx.send(value);
    }

    /// Subscribe to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}
