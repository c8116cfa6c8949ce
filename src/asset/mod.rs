//! Product image handling.
//!
//! The card only needs "a renderable image identified by a string". Local
//! files are decoded and sampled into half-block cells; remote references are
//! never fetched and fall back to a placeholder.

mod thumbnail;

pub use thumbnail::Thumbnail;

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Remote image '{url}' is not fetched")]
    Remote { url: String },

    #[error("Failed to load image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Resolved location of an image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Remote(String),
    Local(PathBuf),
}

impl ImageSource {
    /// Classifies `reference`; relative paths are joined onto `base_dir`.
    pub fn resolve(reference: &str, base_dir: Option<&Path>) -> Self {
        let reference = reference.trim();
        let lower = reference.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return ImageSource::Remote(reference.to_string());
        }

        let path = Path::new(reference);
        match base_dir {
            Some(base) if path.is_relative() => ImageSource::Local(base.join(path)),
            _ => ImageSource::Local(path.to_path_buf()),
        }
    }
}
