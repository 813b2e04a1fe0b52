//! Event sources: objects exposing publish points.

use crate::event::PublishPoint;

/// An object exposing one or more publish points.
///
/// # Example
///
/// ```
/// use utilkit_events::{Event, EventSource, PublishPoint};
///
/// struct Button {
///     clicked: Event,
///     hovered: Event<(i32, i32)>,
/// }
///
/// impl EventSource for Button {
///     fn publish_points(&self) -> Vec<&dyn PublishPoint> {
///         vec![&self.clicked as &dyn PublishPoint, &self.hovered]
///     }
/// }
///
/// let button = Button {
///     clicked: Event::new("Clicked"),
///     hovered: Event::new("Hovered"),
/// };
/// assert!(button.publish_point("Hovered").is_some());
/// assert!(button.publish_point("Pressed").is_none());
/// ```
pub trait EventSource {
    /// Returns every publish point of this source.
    fn publish_points(&self) -> Vec<&dyn PublishPoint>;

    /// Looks up a publish point by name.
    fn publish_point(&self, name: &str) -> Option<&dyn PublishPoint> {
        self.publish_points().into_iter().find(|p| p.name() == name)
    }
}
