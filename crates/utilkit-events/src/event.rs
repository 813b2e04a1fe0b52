//! Publish points: named, ordered observer lists.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Callback invoked with a reference to the event arguments.
///
/// Returns false when whatever it forwards to is gone; the publish point
/// then drops the subscription.
pub type Callback<A> = dyn Fn(&A) -> bool + Send + Sync;

/// Callback taking type-erased arguments, with the same liveness result as
/// `Callback`.
pub type ErasedCallback = Arc<dyn Fn(&dyn Any) -> bool + Send + Sync>;

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Handle identifying one subscription.
///
/// Handles are unique for the life of the process, so unsubscribing by
/// handle never removes someone else's callback even when the same closure
/// was subscribed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw handle value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

type Subscribers<A> = Vec<(SubscriptionId, Arc<Callback<A>>)>;

/// A named publish point whose callbacks receive `&A`.
///
/// Firing is synchronous: every callback runs on the caller's thread, in
/// subscription order, before `fire` returns. Callbacks run against a
/// snapshot of the list, so a callback may subscribe or unsubscribe without
/// deadlocking; such changes take effect from the next fire.
pub struct Event<A = ()> {
    name: String,
    subscribers: Arc<RwLock<Subscribers<A>>>,
}

impl<A> Event<A> {
    /// Creates an empty publish point.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a callback and returns its handle.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&A) + Send + Sync + 'static,
    {
        self.push(Arc::new(move |args: &A| {
            callback(args);
            true
        }))
    }

    /// Appends a callback that stays subscribed while it returns true.
    ///
    /// A call returning false counts as not delivered, and the subscription
    /// is removed once the fire completes.
    pub fn subscribe_while<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        self.push(Arc::new(callback))
    }

    fn push(&self, callback: Arc<Callback<A>>) -> SubscriptionId {
        let id = SubscriptionId::next();
        // The lock is never held across user code, so a poisoned guard still
        // holds a consistent list.
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, callback));
        id
    }

    /// Removes the subscription with the given handle.
    ///
    /// Returns false if no such subscription exists.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self
            .subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = subs.len();
        subs.retain(|(sid, _)| *sid != id);
        subs.len() != before
    }

    /// Fires the event.
    ///
    /// Returns true if at least one live callback was invoked. Callbacks
    /// reporting that their target is gone do not count and are removed.
    pub fn fire(&self, args: &A) -> bool {
        let snapshot: Subscribers<A> = {
            let subs = self
                .subscribers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            subs.iter().map(|(id, cb)| (*id, Arc::clone(cb))).collect()
        };

        let mut delivered = false;
        let mut dead = Vec::new();
        for (id, callback) in &snapshot {
            if callback(args) {
                delivered = true;
            } else {
                dead.push(*id);
            }
        }

        if !dead.is_empty() {
            self.subscribers
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|(id, _)| !dead.contains(id));
            debug!(event = %self.name, pruned = dead.len(), "removed dead subscriptions");
        }

        delivered
    }

    /// Returns the number of subscribed callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .map(|s| s.len())
            .unwrap_or_else(|e| e.into_inner().len())
    }

    /// Returns true if nothing is subscribed.
    pub fn is_empty(&self) -> bool {
        self.subscriber_count() == 0
    }

    /// Removes every subscription.
    pub fn clear(&self) {
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<A> fmt::Debug for Event<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("args", &type_name::<A>())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Type-erased view of a publish point.
///
/// This is what an `EventSource` exposes so that a manager can match
/// listener handlers by name and argument type without knowing `A`.
pub trait PublishPoint: Send + Sync {
    /// Event name used for matching.
    fn name(&self) -> &str;

    /// Type of the arguments passed to callbacks.
    fn args_type(&self) -> TypeId;

    /// Human-readable name of the argument type.
    fn args_type_name(&self) -> &'static str;

    /// Subscribes a type-erased callback.
    fn subscribe_erased(&self, callback: ErasedCallback) -> SubscriptionId;

    /// Removes a subscription by handle.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Returns the number of subscribed callbacks.
    fn subscriber_count(&self) -> usize;
}

impl<A: 'static> PublishPoint for Event<A> {
    fn name(&self) -> &str {
        Event::name(self)
    }

    fn args_type(&self) -> TypeId {
        TypeId::of::<A>()
    }

    fn args_type_name(&self) -> &'static str {
        type_name::<A>()
    }

    fn subscribe_erased(&self, callback: ErasedCallback) -> SubscriptionId {
        self.push(Arc::new(move |args: &A| callback(args as &dyn Any)))
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        Event::unsubscribe(self, id)
    }

    fn subscriber_count(&self) -> usize {
        Event::subscriber_count(self)
    }
}
