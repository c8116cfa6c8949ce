//! Terminal rendering of a single e-commerce product card.
//!
//! A display container ([`ui::app::App`]) hands one fixed
//! [`catalog::ProductDisplay`] to the card view ([`ui::card`]), which owns
//! the only mutable state: quantity, favorite flag and the unit selection.

pub mod asset;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod ui;
