use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::ProductDisplay;

/// Narrowest card the layout supports, in columns.
pub const MIN_CARD_WIDTH: u16 = 32;
/// Widest card the layout supports, in columns.
pub const MAX_CARD_WIDTH: u16 = 80;

/// Root of a product file: page settings plus the product payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFile {
    #[serde(default)]
    pub page: PageConfig,
    pub product: ProductDisplay,
}

/// Page-level layout around the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Page background as `#rrggbb`.
    #[serde(default = "default_background")]
    pub background: String,
    /// Card width in columns (clamped to the supported range).
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Blank rows/columns kept around the card.
    #[serde(default = "default_margin")]
    pub margin: u16,
}

fn default_background() -> String {
    "#f5f5f5".to_string()
}

fn default_card_width() -> u16 {
    40
}

fn default_margin() -> u16 {
    1
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            card_width: default_card_width(),
            margin: default_margin(),
        }
    }
}

impl PageConfig {
    pub fn card_width(&self) -> u16 {
        self.card_width.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
    }
}

impl Default for CardFile {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            product: ProductDisplay::demo(),
        }
    }
}

/// Where the loaded payload came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSource {
    Builtin,
    File(PathBuf),
}

impl CardSource {
    /// Directory that relative image references resolve against.
    pub fn base_dir(&self) -> Option<&Path> {
        match self {
            CardSource::Builtin => None,
            CardSource::File(path) => path.parent(),
        }
    }
}

impl fmt::Display for CardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardSource::Builtin => f.write_str("built-in demo"),
            CardSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated product file together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedCard {
    pub file: CardFile,
    pub source: CardSource,
}
