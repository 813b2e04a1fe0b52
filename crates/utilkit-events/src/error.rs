//! Error types for event wiring.

use thiserror::Error;

/// Errors that can occur while wiring listeners to an event source.
#[derive(Error, Debug)]
pub enum EventError {
    /// A required reference was absent, or a value could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The event source was dropped before the operation ran.
    #[error("event source has been dropped")]
    SourceDropped,

    /// A listener declared several compatible handlers for one event and
    /// the manager is configured to reject that.
    #[error("ambiguous handlers for event '{event}': {count} candidates")]
    AmbiguousHandler {
        /// Name of the event with more than one candidate.
        event: String,
        /// Number of compatible handlers found.
        count: usize,
    },

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for event operations.
pub type Result<T> = std::result::Result<T, EventError>;
