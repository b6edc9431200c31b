/// Marker trait for UI state.
///
/// `Default` is the pre-activation state; `PartialEq` lets callers detect
/// whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
