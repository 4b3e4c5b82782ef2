//! Subscriber bookkeeping shared by every store.
//!
//! Each store owns a [`SubscriberSet`] and notifies it synchronously after a
//! mutation has been applied and persisted. Listeners always observe
//! snapshots in mutation order; a listener registered mid-stream receives the
//! current snapshot immediately (the store's `subscribe` method invokes it
//! once before returning).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ListenerSlots<T> = Mutex<Vec<(u64, Listener<T>)>>;

/// An ordered set of snapshot listeners.
pub struct SubscriberSet<T> {
    listeners: Arc<ListenerSlots<T>>,
    next_id: AtomicU64,
}

impl<T: 'static> Default for SubscriberSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> SubscriberSet<T> {
    /// Creates an empty subscriber set.
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(0),
        }
    }

    /// Registers a listener and returns the guard that removes it.
    ///
    /// The listener is not invoked here; use [`Self::subscribe_with`] to
    /// deliver the current snapshot to the new listener alone.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners
            .lock()
            .unwrap()
            .push((id, Arc::new(listener)));

        let slots: Weak<ListenerSlots<T>> = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.lock().unwrap().retain(|(slot_id, _)| *slot_id != id);
            }
        })
    }

    /// Registers a listener and immediately invokes it (and only it) with
    /// `snapshot`, so late subscribers are never left stale.
    pub fn subscribe_with(
        &self,
        listener: impl Fn(&T) + Send + Sync + 'static,
        snapshot: &T,
    ) -> Subscription {
        listener(snapshot);
        self.subscribe(listener)
    }

    /// Invokes every registered listener with `snapshot`, in registration
    /// order.
    ///
    /// The internal lock is released before the callbacks run, so a listener
    /// may drop its own [`Subscription`] without deadlocking.
    pub fn notify(&self, snapshot: &T) {
        let listeners: Vec<Listener<T>> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }

    /// Number of currently registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Whether no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for an active store subscription.
///
/// Dropping the guard deregisters the listener; `unsubscribe` does the same
/// explicitly.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Deregisters the listener now.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_reaches_all_listeners_in_order() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_a = Arc::clone(&seen);
        let _a = set.subscribe(move |value| seen_a.lock().unwrap().push(("a", *value)));
        let seen_b = Arc::clone(&seen);
        let _b = set.subscribe(move |value| seen_b.lock().unwrap().push(("b", *value)));

        set.notify(&1);
        set.notify(&2);

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, vec![("a", 1), ("b", 1), ("a", 2), ("b", 2)]);
    }

    #[test]
    fn test_dropping_subscription_deregisters() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let count = Arc::new(Mutex::new(0));

        let count_clone = Arc::clone(&count);
        let subscription = set.subscribe(move |_| *count_clone.lock().unwrap() += 1);
        assert_eq!(set.len(), 1);

        set.notify(&1);
        drop(subscription);
        assert_eq!(set.len(), 0);

        set.notify(&2);
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_subscribe_with_delivers_only_to_new_listener() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let first = Arc::new(Mutex::new(Vec::new()));

        let first_clone = Arc::clone(&first);
        let _a = set.subscribe(move |value| first_clone.lock().unwrap().push(*value));

        // The late subscriber catches up without replaying to the first one.
        let second = Arc::new(Mutex::new(Vec::new()));
        let second_clone = Arc::clone(&second);
        let _b = set.subscribe_with(move |value| second_clone.lock().unwrap().push(*value), &7);

        assert!(first.lock().unwrap().is_empty());
        assert_eq!(*second.lock().unwrap(), vec![7]);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let set: SubscriberSet<u32> = SubscriberSet::new();
        let subscription = set.subscribe(|_| {});
        assert_eq!(set.len(), 1);

        subscription.unsubscribe();
        assert!(set.is_empty());
    }
}
