mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::CardIntent;
pub use reducer::CardReducer;
pub use state::{CardFocus, CardState};
pub use view::ProductCard;
