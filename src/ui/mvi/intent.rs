/// Marker trait for intents.
///
/// Intents cover user actions (key presses), lifecycle events (activation,
/// ticks) and completed background work (fetch and avatar results).
pub trait Intent: Send + 'static {}
