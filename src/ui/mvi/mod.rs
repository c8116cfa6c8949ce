//! Model-View-Intent primitives for the card.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ View
//!  ↑                                        │
//!  └────────────────────────────────────────┘
//! ```
//!
//! The reducer is the only place card state changes; the view only reads it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
