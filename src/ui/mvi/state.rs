/// Marker trait for view state.
///
/// `Default` is the freshly mounted state; `PartialEq` lets callers tell
/// whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
