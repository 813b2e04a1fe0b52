//! EventManager - wires listener handlers to an event source.
//!
//! Instead of writing one `subscribe` call per event at every call site, a
//! listener declares its handlers once (see `Listener`) and the manager
//! matches them against the source's publish points by event name and
//! argument type.
//!
//! Ownership:
//! - The manager holds a `Weak` reference to its source. The source may
//!   outlive the manager, and the manager goes inert once the source is gone.
//! - Subscribed handlers hold a `Weak` reference to their listener. Dropping
//!   the listener turns its callbacks into no-ops.
//! - Dropping the manager does not detach anything; call `detach_all` first
//!   if the subscriptions should end with it.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::{Arc, RwLock, Weak};

use tracing::{debug, warn};

use crate::config::{AmbiguityPolicy, EventManagerConfig};
use crate::error::{EventError, Result};
use crate::event::{PublishPoint, SubscriptionId};
use crate::listener::{HandlerEntry, HandlerSet, Listener};
use crate::source::EventSource;

/// Whether a manager currently has live subscriptions recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingState {
    /// No subscriptions recorded (just constructed, or fully detached).
    Unbound,
    /// At least one subscription recorded.
    Bound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Listener(usize),
    Callback,
}

#[derive(Debug, Clone)]
struct Subscription {
    event: String,
    args_type: TypeId,
    owner: Owner,
    id: SubscriptionId,
    /// Set for listener handlers; `None` for plain callbacks.
    listener: Option<Weak<dyn Any + Send + Sync>>,
}

impl Subscription {
    fn targets(&self, point: &dyn PublishPoint) -> bool {
        self.event == point.name() && self.args_type == point.args_type()
    }

    fn is_live(&self) -> bool {
        self.listener
            .as_ref()
            .map_or(true, |listener| listener.strong_count() > 0)
    }
}

/// Wires listener handlers to the publish points of one source.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use utilkit_events::{Event, EventManager, EventSource, HandlerSet, Listener, PublishPoint};
///
/// struct Door {
///     opened: Event,
/// }
///
/// impl EventSource for Door {
///     fn publish_points(&self) -> Vec<&dyn PublishPoint> {
///         vec![&self.opened as &dyn PublishPoint]
///     }
/// }
///
/// #[derive(Default)]
/// struct Bell {
///     rings: AtomicUsize,
/// }
///
/// impl Listener for Bell {
///     fn register(&self, handlers: &mut HandlerSet<Self>) {
///         handlers.on("Opened", |bell: &Bell, _: &()| {
///             bell.rings.fetch_add(1, Ordering::SeqCst);
///         });
///     }
/// }
///
/// let door = Arc::new(Door { opened: Event::new("Opened") });
/// let bell = Arc::new(Bell::default());
///
/// let manager = EventManager::for_source(&door);
/// manager.add_handlers(&bell).unwrap();
///
/// assert!(door.opened.fire(&()));
/// assert_eq!(bell.rings.load(Ordering::SeqCst), 1);
/// ```
pub struct EventManager<S> {
    /// Source whose publish points get wired.
    source: Weak<S>,
    /// Matching behaviour.
    config: EventManagerConfig,
    /// Subscriptions this manager created, in creation order.
    subscriptions: RwLock<Vec<Subscription>>,
}

impl<S: EventSource> EventManager<S> {
    /// Creates a manager bound to `source`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the source is absent (the weak reference
    /// no longer points at a live value).
    pub fn new(source: Weak<S>) -> Result<Self> {
        if source.strong_count() == 0 {
            return Err(EventError::InvalidArgument(
                "event source is absent".to_string(),
            ));
        }

        Ok(Self {
            source,
            config: EventManagerConfig::default(),
            subscriptions: RwLock::new(Vec::new()),
        })
    }

    /// Creates a manager bound to a live source.
    pub fn for_source(source: &Arc<S>) -> Self {
        Self {
            source: Arc::downgrade(source),
            config: EventManagerConfig::default(),
            subscriptions: RwLock::new(Vec::new()),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: EventManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EventManagerConfig {
        &self.config
    }

    /// Returns the source, if it is still alive.
    pub fn source(&self) -> Option<Arc<S>> {
        self.source.upgrade()
    }

    /// Wires every matching handler of `listener` to the source.
    ///
    /// Returns the number of subscriptions created. Events without a
    /// matching handler are left unbound; that is not an error.
    pub fn add_handlers<L: Listener>(&self, listener: &Arc<L>) -> Result<usize> {
        self.add_handlers_weak(&Arc::downgrade(listener))
    }

    /// Wires several listeners in order. Returns the total subscription count.
    ///
    /// Stops at the first failing listener; listeners before it stay wired.
    pub fn add_handlers_all<L: Listener>(&self, listeners: &[Arc<L>]) -> Result<usize> {
        let mut total = 0;
        for listener in listeners {
            total += self.add_handlers(listener)?;
        }
        Ok(total)
    }

    /// Wires every matching handler of a weakly held listener.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if the listener is absent
    /// - `SourceDropped` if the source is gone
    /// - `AmbiguousHandler` if the policy is `Reject` and an event has more
    ///   than one compatible handler (nothing is subscribed in that case)
    pub fn add_handlers_weak<L: Listener>(&self, listener: &Weak<L>) -> Result<usize> {
        let strong = listener
            .upgrade()
            .ok_or_else(|| EventError::InvalidArgument("listener is absent".to_string()))?;
        let source = self.source.upgrade().ok_or(EventError::SourceDropped)?;

        // Drop records of dead listeners first so a new listener allocated at
        // the same address is not mistaken for a duplicate.
        self.prune()?;

        let mut handlers = HandlerSet::new();
        strong.register(&mut handlers);
        let owner = Owner::Listener(listener_key(&strong));

        let plan = self.plan(source.as_ref(), &handlers)?;

        let mut subs = self
            .subscriptions
            .write()
            .map_err(|e| EventError::LockPoisoned(e.to_string()))?;
        let existing = subs.len();
        let mut wired = 0;

        for (point, entry) in plan {
            if !self.config.allow_duplicate_subscription
                && subs[..existing]
                    .iter()
                    .any(|s| s.owner == owner && s.targets(point))
            {
                debug!(event = point.name(), "listener already wired, skipping");
                continue;
            }

            let weak = listener.clone();
            let invoke = Arc::clone(&entry.invoke);
            let id = point.subscribe_erased(Arc::new(move |args: &dyn Any| {
                match weak.upgrade() {
                    Some(listener) => {
                        invoke(&*listener, args);
                        true
                    }
                    None => false,
                }
            }));

            let tracked: Weak<dyn Any + Send + Sync> = listener.clone();
            subs.push(Subscription {
                event: point.name().to_string(),
                args_type: point.args_type(),
                owner,
                id,
                listener: Some(tracked),
            });
            wired += 1;
        }

        debug!(listener = type_name::<L>(), wired, "wired listener handlers");
        Ok(wired)
    }

    /// Subscribes a single closure to the event named `event` taking `&A`.
    ///
    /// Returns `None` when the source has no such event.
    pub fn add_callback<A, F>(&self, event: &str, callback: F) -> Result<Option<SubscriptionId>>
    where
        A: 'static,
        F: Fn(&A) + Send + Sync + 'static,
    {
        let source = self.source.upgrade().ok_or(EventError::SourceDropped)?;
        let args_type = TypeId::of::<A>();

        let point = source
            .publish_points()
            .into_iter()
            .find(|p| p.name() == event && p.args_type() == args_type);

        let Some(point) = point else {
            debug!(event, args = type_name::<A>(), "no matching event for callback");
            return Ok(None);
        };

        let mut subs = self
            .subscriptions
            .write()
            .map_err(|e| EventError::LockPoisoned(e.to_string()))?;

        let id = point.subscribe_erased(Arc::new(move |args: &dyn Any| {
            match args.downcast_ref::<A>() {
                Some(args) => {
                    callback(args);
                    true
                }
                None => false,
            }
        }));
        subs.push(Subscription {
            event: event.to_string(),
            args_type,
            owner: Owner::Callback,
            id,
            listener: None,
        });

        Ok(Some(id))
    }

    /// Detaches one subscription created by this manager.
    ///
    /// Returns false if the handle is unknown to this manager.
    pub fn remove_subscription(&self, id: SubscriptionId) -> Result<bool> {
        let removed = self.take_where(|s| s.id == id)?;
        Ok(self.unsubscribe(removed) > 0)
    }

    /// Detaches every subscription this manager created for `listener`.
    ///
    /// Returns the number of callbacks removed from the source.
    pub fn remove_handlers<L: Listener>(&self, listener: &Arc<L>) -> Result<usize> {
        let owner = Owner::Listener(listener_key(listener));
        let removed = self.take_where(|s| s.owner == owner)?;
        Ok(self.unsubscribe(removed))
    }

    /// Detaches every subscription this manager created.
    pub fn detach_all(&self) -> Result<usize> {
        let removed = self.take_where(|_| true)?;
        Ok(self.unsubscribe(removed))
    }

    /// Detaches subscriptions whose listener has been dropped.
    ///
    /// Returns the number of records removed.
    pub fn prune(&self) -> Result<usize> {
        let dead = self.take_where(|s| !s.is_live())?;
        let count = dead.len();
        if count > 0 {
            self.unsubscribe(dead);
            debug!(pruned = count, "removed subscriptions of dropped listeners");
        }
        Ok(count)
    }

    /// Returns the number of live subscriptions recorded by this manager.
    ///
    /// Subscriptions whose listener has been dropped are not counted.
    pub fn subscription_count(&self) -> usize {
        let count = |subs: &[Subscription]| subs.iter().filter(|s| s.is_live()).count();
        self.subscriptions
            .read()
            .map(|s| count(s.as_slice()))
            .unwrap_or_else(|e| count(e.into_inner().as_slice()))
    }

    /// Returns true if at least one subscription is recorded.
    pub fn is_bound(&self) -> bool {
        self.state() == BindingState::Bound
    }

    /// Returns the current binding state.
    pub fn state(&self) -> BindingState {
        if self.subscription_count() > 0 {
            BindingState::Bound
        } else {
            BindingState::Unbound
        }
    }

    /// Pairs each publish point with the handlers that should be subscribed.
    fn plan<'a, L: 'static>(
        &self,
        source: &'a S,
        handlers: &'a HandlerSet<L>,
    ) -> Result<Vec<(&'a dyn PublishPoint, &'a HandlerEntry<L>)>> {
        let mut plan = Vec::new();

        for point in source.publish_points() {
            let name = point.name();
            let args_type = point.args_type();

            for entry in handlers
                .entries()
                .iter()
                .filter(|e| e.event == name && e.args_type != args_type)
            {
                debug!(
                    event = name,
                    expected = point.args_type_name(),
                    found = entry.args_type_name,
                    "handler argument type does not match event"
                );
            }

            let candidates: Vec<&HandlerEntry<L>> = handlers
                .entries()
                .iter()
                .filter(|e| e.accepts(name, args_type))
                .collect();

            match (candidates.len(), self.config.ambiguity) {
                (0, _) => debug!(event = name, "no handler for event"),
                (1, _) | (_, AmbiguityPolicy::SubscribeAll) => {
                    plan.extend(candidates.into_iter().map(|c| (point, c)));
                }
                (count, AmbiguityPolicy::FirstWins) => {
                    warn!(
                        event = name,
                        skipped = count - 1,
                        "multiple handlers for event, using the first"
                    );
                    plan.push((point, candidates[0]));
                }
                (count, AmbiguityPolicy::Reject) => {
                    return Err(EventError::AmbiguousHandler {
                        event: name.to_string(),
                        count,
                    });
                }
            }
        }

        Ok(plan)
    }

    /// Removes and returns the recorded subscriptions matching `pred`.
    fn take_where<P>(&self, pred: P) -> Result<Vec<Subscription>>
    where
        P: Fn(&Subscription) -> bool,
    {
        let mut subs = self
            .subscriptions
            .write()
            .map_err(|e| EventError::LockPoisoned(e.to_string()))?;
        let (taken, kept): (Vec<_>, Vec<_>) = subs.drain(..).partition(|s| pred(s));
        *subs = kept;
        Ok(taken)
    }

    /// Unsubscribes records from the source. Returns how many were removed.
    fn unsubscribe(&self, records: Vec<Subscription>) -> usize {
        let Some(source) = self.source.upgrade() else {
            return 0;
        };
        let points = source.publish_points();

        records
            .iter()
            .filter(|record| {
                points
                    .iter()
                    .filter(|p| record.targets(**p))
                    .any(|p| p.unsubscribe(record.id))
            })
            .count()
    }
}

impl<S> fmt::Debug for EventManager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventManager")
            .field("source_alive", &(self.source.strong_count() > 0))
            .field("config", &self.config)
            .field(
                "subscriptions",
                &self
                    .subscriptions
                    .read()
                    .map(|s| s.len())
                    .unwrap_or_else(|e| e.into_inner().len()),
            )
            .finish()
    }
}

fn listener_key<L>(listener: &Arc<L>) -> usize {
    Arc::as_ptr(listener) as *const () as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct Panel {
        opened: Event,
        resized: Event<(u32, u32)>,
        renamed: Event<String>,
    }

    impl Panel {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                opened: Event::new("Opened"),
                resized: Event::new("Resized"),
                renamed: Event::new("Renamed"),
            })
        }
    }

    impl EventSource for Panel {
        fn publish_points(&self) -> Vec<&dyn PublishPoint> {
            vec![&self.opened as &dyn PublishPoint, &self.resized, &self.renamed]
        }
    }

    #[derive(Default)]
    struct Log {
        entries: Mutex<Vec<String>>,
    }

    impl Log {
        fn push(&self, entry: impl Into<String>) {
            self.entries.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl Listener for Log {
        fn register(&self, handlers: &mut HandlerSet<Self>) {
            handlers
                .on("Opened", |log: &Log, _: &()| log.push("opened"))
                .on("Resized", |log: &Log, (w, h): &(u32, u32)| {
                    log.push(format!("resized {}x{}", w, h))
                })
                // Wrong argument type: never wired.
                .on("Renamed", |log: &Log, _: &u64| log.push("renamed?"))
                // No such event: never wired.
                .on("Closed", |log: &Log, _: &()| log.push("closed"));
        }
    }

    #[derive(Default)]
    struct Twice {
        first: AtomicUsize,
        second: AtomicUsize,
    }

    impl Twice {
        fn counts(&self) -> (usize, usize) {
            (
                self.first.load(Ordering::SeqCst),
                self.second.load(Ordering::SeqCst),
            )
        }
    }

    impl Listener for Twice {
        fn register(&self, handlers: &mut HandlerSet<Self>) {
            handlers
                .on("Opened", |t: &Twice, _: &()| {
                    t.first.fetch_add(1, Ordering::SeqCst);
                })
                .on("Opened", |t: &Twice, _: &()| {
                    t.second.fetch_add(1, Ordering::SeqCst);
                });
        }
    }

    #[test]
    fn test_new_rejects_absent_source() {
        let result = EventManager::<Panel>::new(Weak::new());
        assert!(matches!(result, Err(EventError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_accepts_live_source() {
        let panel = Panel::new();
        let manager = EventManager::new(Arc::downgrade(&panel)).unwrap();
        assert_eq!(manager.state(), BindingState::Unbound);
        assert!(manager.source().is_some());
    }

    #[test]
    fn test_add_handlers_matches_name_and_type() {
        let panel = Panel::new();
        let log = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel);

        let wired = manager.add_handlers(&log).unwrap();
        assert_eq!(wired, 2);
        assert!(manager.is_bound());

        assert!(panel.opened.fire(&()));
        assert!(panel.resized.fire(&(80, 24)));
        assert!(!panel.renamed.fire(&"x".to_string()));

        assert_eq!(log.entries(), vec!["opened", "resized 80x24"]);
    }

    #[test]
    fn test_add_handlers_rejects_absent_listener() {
        let panel = Panel::new();
        let manager = EventManager::for_source(&panel);

        let result = manager.add_handlers_weak(&Weak::<Log>::new());
        assert!(matches!(result, Err(EventError::InvalidArgument(_))));
        assert!(!manager.is_bound());
    }

    #[test]
    fn test_add_handlers_after_source_dropped() {
        let panel = Panel::new();
        let manager = EventManager::for_source(&panel);
        drop(panel);

        let log = Arc::new(Log::default());
        let result = manager.add_handlers(&log);
        assert!(matches!(result, Err(EventError::SourceDropped)));
    }

    #[test]
    fn test_duplicates_allowed_by_default() {
        let panel = Panel::new();
        let log = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel);

        manager.add_handlers(&log).unwrap();
        manager.add_handlers(&log).unwrap();
        panel.opened.fire(&());

        assert_eq!(log.entries(), vec!["opened", "opened"]);
        assert_eq!(manager.subscription_count(), 4);
    }

    #[test]
    fn test_duplicates_prevented_when_configured() {
        let panel = Panel::new();
        let log = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel)
            .with_config(EventManagerConfig::new().with_allow_duplicate_subscription(false));

        assert_eq!(manager.add_handlers(&log).unwrap(), 2);
        assert_eq!(manager.add_handlers(&log).unwrap(), 0);
        panel.opened.fire(&());

        assert_eq!(log.entries(), vec!["opened"]);
    }

    #[test]
    fn test_ambiguity_first_wins() {
        let panel = Panel::new();
        let listener = Arc::new(Twice::default());
        let manager = EventManager::for_source(&panel);

        assert_eq!(manager.add_handlers(&listener).unwrap(), 1);
        panel.opened.fire(&());

        assert_eq!(listener.counts(), (1, 0));
    }

    #[test]
    fn test_ambiguity_subscribe_all() {
        let panel = Panel::new();
        let listener = Arc::new(Twice::default());
        let manager = EventManager::for_source(&panel).with_config(
            EventManagerConfig::new()
                .with_ambiguity(AmbiguityPolicy::SubscribeAll)
                .with_allow_duplicate_subscription(false),
        );

        assert_eq!(manager.add_handlers(&listener).unwrap(), 2);
        panel.opened.fire(&());

        assert_eq!(listener.counts(), (1, 1));
    }

    #[test]
    fn test_ambiguity_reject_subscribes_nothing() {
        let panel = Panel::new();
        let manager = EventManager::for_source(&panel)
            .with_config(EventManagerConfig::new().with_ambiguity(AmbiguityPolicy::Reject));

        let result = manager.add_handlers(&Arc::new(Twice::default()));
        match result {
            Err(EventError::AmbiguousHandler { event, count }) => {
                assert_eq!(event, "Opened");
                assert_eq!(count, 2);
            }
            other => panic!("expected AmbiguousHandler, got {:?}", other),
        }
        assert_eq!(panel.opened.subscriber_count(), 0);
        assert!(!manager.is_bound());
    }

    #[test]
    fn test_dropped_listener_is_not_invoked() {
        let panel = Panel::new();
        let log = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel);
        manager.add_handlers(&log).unwrap();

        let weak = Arc::downgrade(&log);
        drop(log);

        assert!(weak.upgrade().is_none());
        assert_eq!(manager.subscription_count(), 0);
        assert!(!manager.is_bound());

        assert!(!panel.opened.fire(&()));
        assert_eq!(panel.opened.subscriber_count(), 0);
    }

    #[test]
    fn test_prune_detaches_dropped_listeners() {
        let panel = Panel::new();
        let kept = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel);

        manager.add_handlers(&kept).unwrap();
        for _ in 0..50 {
            let short_lived = Arc::new(Log::default());
            manager.add_handlers(&short_lived).unwrap();
        }

        // Each dropped listener had two subscriptions (Opened, Resized); the
        // last batch is still recorded until the next prune.
        assert_eq!(manager.prune().unwrap(), 2);
        assert_eq!(panel.opened.subscriber_count(), 1);
        assert_eq!(panel.resized.subscriber_count(), 1);
        assert_eq!(manager.subscription_count(), 2);

        assert!(panel.opened.fire(&()));
        assert_eq!(kept.entries(), vec!["opened"]);
    }

    #[test]
    fn test_unsubscribe_reaches_every_point_with_same_name() {
        struct Mirrored {
            left: Event,
            right: Event,
        }

        impl EventSource for Mirrored {
            fn publish_points(&self) -> Vec<&dyn PublishPoint> {
                vec![&self.left as &dyn PublishPoint, &self.right]
            }
        }

        let source = Arc::new(Mirrored {
            left: Event::new("Opened"),
            right: Event::new("Opened"),
        });
        let log = Arc::new(Log::default());
        let manager = EventManager::for_source(&source);

        assert_eq!(manager.add_handlers(&log).unwrap(), 2);
        assert_eq!(manager.detach_all().unwrap(), 2);

        assert!(source.left.is_empty());
        assert!(source.right.is_empty());
    }

    #[test]
    fn test_remove_handlers() {
        let panel = Panel::new();
        let a = Arc::new(Log::default());
        let b = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel);

        manager.add_handlers_all(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(manager.remove_handlers(&a).unwrap(), 2);

        panel.opened.fire(&());
        assert!(a.entries().is_empty());
        assert_eq!(b.entries(), vec!["opened"]);
        assert_eq!(manager.subscription_count(), 2);
    }

    #[test]
    fn test_detach_all_returns_to_unbound() {
        let panel = Panel::new();
        let log = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel);

        manager.add_handlers(&log).unwrap();
        manager.add_callback("Opened", |_: &()| {}).unwrap();
        assert_eq!(manager.detach_all().unwrap(), 3);

        assert_eq!(manager.state(), BindingState::Unbound);
        assert!(!panel.opened.fire(&()));
        assert!(!panel.resized.fire(&(1, 1)));
    }

    #[test]
    fn test_detach_all_after_source_dropped() {
        let panel = Panel::new();
        let log = Arc::new(Log::default());
        let manager = EventManager::for_source(&panel);
        manager.add_handlers(&log).unwrap();
        drop(panel);

        assert_eq!(manager.detach_all().unwrap(), 0);
        assert!(!manager.is_bound());
    }

    #[test]
    fn test_add_callback() {
        let panel = Panel::new();
        let manager = EventManager::for_source(&panel);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let s = seen.clone();
        let id = manager
            .add_callback("Renamed", move |name: &String| s.lock().unwrap().push(name.clone()))
            .unwrap();
        assert!(id.is_some());

        let missing = manager.add_callback("Renamed", |_: &u8| {}).unwrap();
        assert!(missing.is_none());

        panel.renamed.fire(&"beta".to_string());
        assert_eq!(*seen.lock().unwrap(), vec!["beta".to_string()]);
    }

    #[test]
    fn test_remove_subscription() {
        let panel = Panel::new();
        let manager = EventManager::for_source(&panel);

        let id = manager.add_callback("Opened", |_: &()| {}).unwrap().unwrap();
        assert!(manager.remove_subscription(id).unwrap());
        assert!(!manager.remove_subscription(id).unwrap());
        assert!(!panel.opened.fire(&()));
    }

    #[test]
    fn test_source_outlives_manager() {
        let panel = Panel::new();
        let log = Arc::new(Log::default());
        {
            let manager = EventManager::for_source(&panel);
            manager.add_handlers(&log).unwrap();
        }

        assert!(panel.opened.fire(&()));
        assert_eq!(log.entries(), vec!["opened"]);
    }
}
