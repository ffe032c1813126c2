/// Marker trait for intents: key presses, fetch outcomes, resets.
pub trait Intent: Send + 'static {}
