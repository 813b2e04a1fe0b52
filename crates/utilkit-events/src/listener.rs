//! Listeners and the handler sets they declare.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Handler invoked with the listener and type-erased event arguments.
pub(crate) type ErasedHandler<L> = Arc<dyn Fn(&L, &dyn Any) + Send + Sync>;

/// An object whose handlers can be wired to an event source.
///
/// Each handler names the event it wants and the argument type it accepts.
/// The manager subscribes a handler only when a publish point with the same
/// name and the same argument type exists; everything else is left unbound.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use utilkit_events::{HandlerSet, Listener};
///
/// #[derive(Default)]
/// struct ClickCounter {
///     clicks: AtomicUsize,
/// }
///
/// impl ClickCounter {
///     fn on_clicked(&self, _: &()) {
///         self.clicks.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// impl Listener for ClickCounter {
///     fn register(&self, handlers: &mut HandlerSet<Self>) {
///         handlers.on("Clicked", Self::on_clicked);
///     }
/// }
/// ```
pub trait Listener: Send + Sync + 'static {
    /// Declares this listener's handlers.
    fn register(&self, handlers: &mut HandlerSet<Self>)
    where
        Self: Sized;
}

pub(crate) struct HandlerEntry<L> {
    pub(crate) event: String,
    pub(crate) args_type: TypeId,
    pub(crate) args_type_name: &'static str,
    pub(crate) invoke: ErasedHandler<L>,
}

impl<L> HandlerEntry<L> {
    pub(crate) fn accepts(&self, event: &str, args_type: TypeId) -> bool {
        self.event == event && self.args_type == args_type
    }
}

/// Ordered collection of handlers declared by a listener.
pub struct HandlerSet<L> {
    entries: Vec<HandlerEntry<L>>,
}

impl<L: 'static> HandlerSet<L> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declares a handler for the event `event` taking `&A`.
    pub fn on<A, F>(&mut self, event: impl Into<String>, handler: F) -> &mut Self
    where
        A: 'static,
        F: Fn(&L, &A) + Send + Sync + 'static,
    {
        let invoke: ErasedHandler<L> = Arc::new(move |listener: &L, args: &dyn Any| {
            if let Some(args) = args.downcast_ref::<A>() {
                handler(listener, args);
            }
        });
        self.entries.push(HandlerEntry {
            event: event.into(),
            args_type: TypeId::of::<A>(),
            args_type_name: type_name::<A>(),
            invoke,
        });
        self
    }

    /// Returns the number of declared handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no handlers were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the declared event names, in declaration order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.event.as_str())
    }

    pub(crate) fn entries(&self) -> &[HandlerEntry<L>] {
        &self.entries
    }
}

impl<L: 'static> Default for HandlerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L> fmt::Debug for HandlerSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|e| format!("{}({})", e.event, e.args_type_name)),
            )
            .finish()
    }
}
