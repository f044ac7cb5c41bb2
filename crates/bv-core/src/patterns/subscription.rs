//! Publish/subscribe change notification.
//!
//! Market-data holders (curves, quotes) let downstream consumers register
//! interest in changes to their inputs.  Instead of an observable base class,
//! a [`SubscriberList`] is embedded by value in whatever wants to broadcast:
//! subscribers register through `subscribe` and are told of changes through
//! `notify`.
//!
//! Subscribers are held as `Weak` references so that registration never keeps
//! a consumer alive; dead references are pruned on every notification.

use std::sync::{Arc, Mutex, Weak};

/// An object that reacts to change notifications from values it has
/// subscribed to.
pub trait Observer: Send + Sync {
    /// Called by every [`SubscriberList`] this observer is registered with
    /// when the embedding value broadcasts a change.
    fn update(&self);
}

/// A registry of change subscribers, embedded by value in the broadcasting
/// type.
///
/// The list is behind a `Mutex` so that the embedding type stays
/// `Send + Sync`; the broadcasting value itself is typically immutable and
/// this list is its only mutable state.
pub struct SubscriberList {
    subscribers: Mutex<Vec<Weak<dyn Observer>>>,
}

impl Default for SubscriberList {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriberList {
    /// Create a new, empty subscriber list.
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a subscriber to receive future change notifications.
    pub fn subscribe(&self, observer: Weak<dyn Observer>) {
        self.subscribers
            .lock()
            .expect("subscriber list mutex poisoned")
            .push(observer);
    }

    /// Remove a previously registered subscriber (by pointer equality of the
    /// `Weak`).
    pub fn unsubscribe(&self, observer: &Weak<dyn Observer>) {
        self.subscribers
            .lock()
            .expect("subscriber list mutex poisoned")
            .retain(|o| !Weak::ptr_eq(o, observer));
    }

    /// Notify all live subscribers, pruning dead `Weak` references as we go.
    pub fn notify(&self) {
        // Collect live subscribers and prune inside the lock, then call
        // update outside it so a subscriber may re-subscribe from update().
        let live: Vec<Arc<dyn Observer>> = {
            let mut guard = self
                .subscribers
                .lock()
                .expect("subscriber list mutex poisoned");
            guard.retain(|w| w.upgrade().is_some());
            guard.iter().filter_map(|w| w.upgrade()).collect()
        };
        for obs in live {
            obs.update();
        }
    }

    /// Number of currently registered subscribers (live or not).
    pub fn len(&self) -> usize {
        self.subscribers
            .lock()
            .expect("subscriber list mutex poisoned")
            .len()
    }

    /// Return `true` if no subscribers are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SubscriberList({} subscribers)", self.len())
    }
}
