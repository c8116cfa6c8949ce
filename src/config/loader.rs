use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::types::{CardFile, CardSource, LoadedCard, PageConfig};

/// Errors that can occur when loading a product file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read product file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse product file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse product file '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Product file validation failed: {message}")]
    ValidationError { message: String },
}

impl CardFile {
    /// Returns the default product file path.
    ///
    /// Uses `~/.config/product-card/product.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("product-card").join("product.toml")
    }

    /// Reads, parses and validates a product file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let file: CardFile = if is_json {
            serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        file.validate()?;
        Ok(file)
    }

    /// Validates the file.
    ///
    /// Checks:
    /// - Prices are non-negative
    /// - The page background is a colour the terminal can draw
    ///
    /// The discount is caller-supplied and is not cross-checked against the
    /// prices.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let product = &self.product;
        if product.price < Decimal::ZERO {
            return Err(ConfigError::ValidationError {
                message: format!("price must not be negative (got {})", product.price),
            });
        }
        if product.original_price < Decimal::ZERO {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "original_price must not be negative (got {})",
                    product.original_price
                ),
            });
        }

        self.page.background_color()?;
        Ok(())
    }
}

impl PageConfig {
    /// Parses the configured background colour.
    pub fn background_color(&self) -> Result<Color, ConfigError> {
        Color::from_str(&self.background).map_err(|_| ConfigError::ValidationError {
            message: format!("page.background '{}' is not a colour", self.background),
        })
    }
}

impl LoadedCard {
    /// Loads the product to display.
    ///
    /// - An explicit path must exist and parse.
    /// - Without one, the default path is used if it exists.
    /// - Otherwise the built-in demo product is returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let path = CardFile::default_path();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no product file, using built-in demo");
            return Ok(Self {
                file: CardFile::default(),
                source: CardSource::Builtin,
            });
        }
        Self::from_path(&path)
    }

    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = CardFile::from_path(path)?;
        Ok(Self {
            file,
            source: CardSource::File(path.to_path_buf()),
        })
    }
}
