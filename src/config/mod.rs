mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CardFile, CardSource, LoadedCard, PageConfig, MAX_CARD_WIDTH, MIN_CARD_WIDTH};
