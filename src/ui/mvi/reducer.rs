use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform side effects; logging and I/O belong to the caller.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
