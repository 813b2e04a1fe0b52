//! Publish points and convention-based listener wiring.
//!
//! This crate provides:
//! - `Event<A>` - a named publish point holding an ordered observer list
//! - `EventSource` - an object exposing publish points
//! - `Listener` / `HandlerSet` - handlers declared by event name and
//!   argument type
//! - `EventManager` - matches a listener's handlers against a source and
//!   subscribes them, keeping track of what it wired so it can detach later
//!
//! Firing is synchronous: callbacks run on the caller's thread, in
//! subscription order, before `fire` returns.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use utilkit_events::{Event, EventManager, EventSource, HandlerSet, Listener, PublishPoint};
//!
//! struct Thermometer {
//!     reading: Event<f64>,
//! }
//!
//! impl EventSource for Thermometer {
//!     fn publish_points(&self) -> Vec<&dyn PublishPoint> {
//!         vec![&self.reading as &dyn PublishPoint]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Alarm {
//!     trips: AtomicU32,
//! }
//!
//! impl Listener for Alarm {
//!     fn register(&self, handlers: &mut HandlerSet<Self>) {
//!         handlers.on("Reading", |alarm: &Alarm, celsius: &f64| {
//!             if *celsius > 90.0 {
//!                 alarm.trips.fetch_add(1, Ordering::SeqCst);
//!             }
//!         });
//!     }
//! }
//!
//! let thermometer = Arc::new(Thermometer { reading: Event::new("Reading") });
//! let alarm = Arc::new(Alarm::default());
//!
//! let manager = EventManager::for_source(&thermometer);
//! manager.add_handlers(&alarm).unwrap();
//!
//! thermometer.reading.fire(&95.5);
//! thermometer.reading.fire(&20.0);
//! assert_eq!(alarm.trips.load(Ordering::SeqCst), 1);
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod listener;
pub mod manager;
pub mod source;

pub use config::{AmbiguityPolicy, EventManagerConfig, ALLOW_DUPLICATE_ENV, AMBIGUITY_POLICY_ENV};
pub use error::{EventError, Result};
pub use event::{Callback, ErasedCallback, Event, PublishPoint, SubscriptionId};
pub use listener::{HandlerSet, Listener};
pub use manager::{BindingState, EventManager};
pub use source::EventSource;
