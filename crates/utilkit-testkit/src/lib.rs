//! Test doubles and fixtures for Utilkit.
//!
//! - `EventSourceStub` - a source with a single `"Raised"` event
//! - `CountingListener` - a listener that counts how often it was raised
//! - `ValueStub` - a generic single-value fixture
//! - `init_test_logging` - routes `tracing` output to the test harness

pub mod listener;
pub mod logging;
pub mod source;
pub mod value;

pub use listener::CountingListener;
pub use logging::init_test_logging;
pub use source::{EventSourceStub, RAISED_EVENT};
pub use value::ValueStub;
