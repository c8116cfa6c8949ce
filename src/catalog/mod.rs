//! Product payload shown on the card.
//!
//! Everything here is plain data plus the two small policies the card needs:
//! clamp-to-floor quantity parsing and two-decimal price formatting.

mod price;
mod product;
mod quantity;
mod unit;

pub use price::format_price;
pub use product::{ProductDisplay, Spec};
pub use quantity::{clamp_quantity, parse_quantity, MIN_QUANTITY};
pub use unit::Unit;
