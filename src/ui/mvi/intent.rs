/// Marker trait for user actions fed into a [`Reducer`](super::Reducer).
pub trait Intent: Send + 'static {}
