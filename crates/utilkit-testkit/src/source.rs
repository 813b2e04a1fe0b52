//! Minimal event source.

use utilkit_events::{Event, EventSource, PublishPoint};

/// Name of the stub's only event.
pub const RAISED_EVENT: &str = "Raised";

/// Event source exposing one argument-less event.
#[derive(Debug)]
pub struct EventSourceStub {
    raised: Event,
}

impl EventSourceStub {
    /// Creates a stub with no subscribers.
    pub fn new() -> Self {
        Self {
            raised: Event::new(RAISED_EVENT),
        }
    }

    /// Fires the event.
    ///
    /// Returns true if at least one subscriber was attached and invoked.
    pub fn raise(&self) -> bool {
        self.raised.fire(&())
    }

    /// Returns the underlying publish point.
    pub fn raised(&self) -> &Event {
        &self.raised
    }
}

impl Default for EventSourceStub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for EventSourceStub {
    fn publish_points(&self) -> Vec<&dyn PublishPoint> {
        vec![&self.raised as &dyn PublishPoint]
    }
}
