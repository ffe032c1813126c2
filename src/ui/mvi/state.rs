/// Marker trait for UI state objects.
///
/// A state holds everything a view needs to draw itself, and a fresh
/// `Default` value is the screen before any interaction.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
